//! Game configuration options.

use crate::seat::Seat;

/// How the first dealer is chosen when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DealerSelection {
    /// Draw the dealer uniformly from the four seats.
    #[default]
    Random,
    /// Always deal from this seat.
    Fixed(Seat),
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use euchre_engine::{DealerSelection, GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_dealer(DealerSelection::Fixed(Seat::Two))
///     .with_points_to_win(21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// How the dealer is chosen.
    pub dealer: DealerSelection,
    /// Score that ends the game. The engine passes it to the phase rules,
    /// which decide when a team has won.
    pub points_to_win: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer: DealerSelection::Random,
            points_to_win: 32,
        }
    }
}

impl GameOptions {
    /// Sets how the dealer is chosen.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre_engine::{DealerSelection, GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_dealer(DealerSelection::Fixed(Seat::Four));
    /// assert_eq!(options.dealer, DealerSelection::Fixed(Seat::Four));
    /// ```
    #[must_use]
    pub const fn with_dealer(mut self, dealer: DealerSelection) -> Self {
        self.dealer = dealer;
        self
    }

    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_to_win(52);
    /// assert_eq!(options.points_to_win, 52);
    /// ```
    #[must_use]
    pub const fn with_points_to_win(mut self, points: u32) -> Self {
        self.points_to_win = points;
        self
    }
}
