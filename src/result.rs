//! Outcomes of applying a choice.

use crate::game::Phase;
use crate::player::Team;

/// The terminal state: one team has reached the winning score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOver {
    /// The team that won.
    pub winners: Team,
    /// The team that lost.
    pub losers: Team,
}

/// What a transition produced: another phase, or the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Play continues in this phase.
    Phase(Phase),
    /// The game is over.
    GameOver(GameOver),
}

impl Transition {
    /// Returns the phase, if play continues.
    #[must_use]
    pub const fn phase(&self) -> Option<&Phase> {
        match self {
            Self::Phase(phase) => Some(phase),
            Self::GameOver(_) => None,
        }
    }

    /// Name of the resulting phase, `"Game Over"` at the end.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Phase(phase) => phase.name(),
            Self::GameOver(_) => "Game Over",
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}

impl From<Phase> for Transition {
    fn from(phase: Phase) -> Self {
        Self::Phase(phase)
    }
}

impl From<GameOver> for Transition {
    fn from(game_over: GameOver) -> Self {
        Self::GameOver(game_over)
    }
}
