//! Seat numbering and rotation around the four-seat table.

use crate::error::SeatError;

/// A seat at the table, numbered 1 through 4 clockwise.
///
/// Seats 1 and 3 are partners, as are seats 2 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Seat {
    /// Seat 1.
    One = 1,
    /// Seat 2.
    Two = 2,
    /// Seat 3.
    Three = 3,
    /// Seat 4.
    Four = 4,
}

impl Seat {
    /// All seats in clockwise order starting at seat 1.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Returns the seat number, 1 through 4.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index, 0 through 3.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the seat `delta` steps clockwise (negative for counter-clockwise).
    #[must_use]
    pub const fn offset(self, delta: i8) -> Self {
        let idx = (self.index() as i16 + delta as i16).rem_euclid(4);
        Self::ALL[idx as usize]
    }

    /// Returns the next seat clockwise (4 wraps to 1).
    #[must_use]
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// Returns the previous seat counter-clockwise (1 wraps to 4).
    #[must_use]
    pub const fn previous(self) -> Self {
        self.offset(-1)
    }

    /// Returns the partner's seat, directly across the table.
    #[must_use]
    pub const fn partner(self) -> Self {
        self.offset(2)
    }

    /// Returns whether `other` sits directly across from this seat.
    #[must_use]
    pub const fn is_partner_of(self, other: Self) -> bool {
        self.partner() as u8 == other as u8
    }
}

impl TryFrom<u8> for Seat {
    type Error = SeatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(SeatError(other)),
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.number()
    }
}

impl core::fmt::Display for Seat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "seat {}", self.number())
    }
}

/// Returns the next seat clockwise.
#[must_use]
pub const fn next_seat(seat: Seat) -> Seat {
    seat.next()
}

/// Returns the partner's seat.
#[must_use]
pub const fn partner_seat(seat: Seat) -> Seat {
    seat.partner()
}
