use crate::tile::Pips;
use thiserror::Error;

/// A pip count outside the range `0..=6` of a double-six set.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
#[error("invalid pip value {0}: must be between 0 and 6")]
pub struct OutOfRange(pub i32);

/// The reasons why a tile cannot be read from text.
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum ParseTileError {
    #[error("expected a tile of the form `left|right`, found {0:?}")]
    Malformed(String),
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// The reasons why a set of tiles cannot be arranged into a closed chain.
///
/// Every failure of [`form_circle`] is reported through this type; the
/// search never panics on account of its input.
///
/// [`form_circle`]: crate::CircleBuilder::form_circle
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum CircleError {
    #[error("no tiles to form a circle")]
    EmptyInput,
    /// Some pip value is touched by an odd number of tile ends. The field
    /// holds the smallest such value.
    #[error("a circular chain cannot be formed because the degree of {pips} is odd")]
    OddDegree { pips: Pips },
    #[error("a circular chain cannot be formed because the graph is not connected")]
    Disconnected,
    #[error("a circular chain cannot be formed")]
    NoChainFound,
    /// The search stopped after laying down the given number of tiles,
    /// which exceeds the budget set in [`SearchLimits`].
    ///
    /// [`SearchLimits`]: crate::SearchLimits
    #[error("the search gave up after {steps} steps")]
    StepLimitExceeded { steps: u64 },
    /// The tile graph broke one of its own invariants during the search.
    #[error("internal fault: {0}")]
    InternalFault(String),
}
