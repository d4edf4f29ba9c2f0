use crate::error::{OutOfRange, ParseTileError};
use std::fmt;
use std::str::FromStr;

/// The number of spots on one half of a tile from a double-six set.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct Pips(u8);

impl Pips {
    /// The largest pip value of a double-six set.
    pub const MAX: u8 = 6;

    pub const BLANK: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    /// All pip values, in increasing order.
    pub const ALL: [Self; 7] = [
        Self::BLANK,
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
    ];

    /// Creates a pip value, failing if `value` does not lie in `0..=6`.
    ///
    /// ```
    /// use domino_circles::{OutOfRange, Pips};
    ///
    /// assert_eq!(Pips::new(4).map(Pips::get), Ok(4));
    /// assert_eq!(Pips::new(7), Err(OutOfRange(7)));
    /// assert_eq!(Pips::new(-1), Err(OutOfRange(-1)));
    /// ```
    pub const fn new(value: i32) -> Result<Self, OutOfRange> {
        if 0 <= value && value <= Self::MAX as i32 {
            Ok(Self(value as u8))
        } else {
            Err(OutOfRange(value))
        }
    }

    /// Returns the pip value as a primitive type.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the pip value as a position in a table with one entry for
    /// each of the seven values.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i32> for Pips {
    type Error = OutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Pips {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Pips> for u8 {
    fn from(pips: Pips) -> Self {
        pips.0
    }
}

impl From<Pips> for usize {
    fn from(pips: Pips) -> Self {
        pips.index()
    }
}

impl fmt::Display for Pips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A domino tile, laid down with one of its halves on the left.
///
/// A physical tile has no preferred orientation: `[2|5]` and `[5|2]` are
/// the same piece turned around. The representation is nevertheless
/// directional, because the order of the halves is what matters once
/// the tile is part of a chain. Notice that equality compares the halves
/// in their current orientation, and it says nothing about whether two
/// values denote the same physical piece; a [`ChainGraph`] tells tiles
/// apart by their [position] in its input instead.
///
/// [`ChainGraph`]: crate::ChainGraph
/// [position]: crate::TileIndex
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct Tile {
    left: Pips,
    right: Pips,
}

impl Tile {
    /// Creates a tile from two pip counts. The left half is validated
    /// before the right one, so the error refers to the left value if
    /// both are out of range.
    ///
    /// ```
    /// use domino_circles::{OutOfRange, Tile};
    ///
    /// let tile = Tile::new(2, 5).unwrap();
    /// assert_eq!(tile.to_string(), "[2|5]");
    /// assert_eq!(Tile::new(-1, 9), Err(OutOfRange(-1)));
    /// ```
    pub fn new(left: i32, right: i32) -> Result<Self, OutOfRange> {
        let left = Pips::new(left)?;
        let right = Pips::new(right)?;
        Ok(Self::from_pips(left, right))
    }

    /// Creates a tile from two validated halves.
    #[must_use]
    pub const fn from_pips(left: Pips, right: Pips) -> Self {
        Self { left, right }
    }

    /// Returns the half currently on the left.
    #[must_use]
    pub const fn left(self) -> Pips {
        self.left
    }

    /// Returns the half currently on the right.
    #[must_use]
    pub const fn right(self) -> Pips {
        self.right
    }

    /// Returns whether both halves show the same number of pips.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Turns the tile around, swapping its halves.
    pub fn flip_in_place(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Returns the tile turned around.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Returns the half opposite to a half showing `pips`, or [`None`] if
    /// neither half of the tile shows that value.
    #[must_use]
    pub fn other_end(self, pips: Pips) -> Option<Pips> {
        if self.left == pips {
            Some(self.right)
        } else if self.right == pips {
            Some(self.left)
        } else {
            None
        }
    }

    /// Returns the tile turned so that its left half shows `pips`, or
    /// [`None`] if neither half shows that value. A tile whose left half
    /// already matches keeps its orientation.
    #[must_use]
    pub fn entering_at(self, pips: Pips) -> Option<Self> {
        if self.left == pips {
            Some(self)
        } else if self.right == pips {
            Some(self.flipped())
        } else {
            None
        }
    }
}

impl From<(Pips, Pips)> for Tile {
    fn from((left, right): (Pips, Pips)) -> Self {
        Self::from_pips(left, right)
    }
}

impl TryFrom<(i32, i32)> for Tile {
    type Error = OutOfRange;

    fn try_from((left, right): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(left, right)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

impl FromStr for Tile {
    type Err = ParseTileError;

    /// Reads a tile written as `left|right`, with or without the enclosing
    /// brackets produced by the [`Display`](fmt::Display) implementation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let (left, right) = inner
            .split_once('|')
            .ok_or_else(|| ParseTileError::Malformed(s.to_string()))?;
        let parse = |half: &str| {
            let half = half.trim();
            half.parse::<i32>()
                .map_err(|_| ParseTileError::NotANumber(half.to_string()))
        };
        let (left, right) = (parse(left)?, parse(right)?);
        Ok(Self::new(left, right)?)
    }
}
