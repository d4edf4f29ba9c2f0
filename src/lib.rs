//! This crate decides whether a set of domino tiles can be arranged into
//! a closed chain, and finds such an arrangement when one exists.
//!
//! Suppose we're given a multiset of tiles from a double-six set, each of
//! which shows two _pip values_ between 0 and 6. A _closed chain_, or
//! _circle_, is an ordering of all the tiles, each possibly turned around,
//! in which the right half of every tile matches the left half of the next
//! one, and the right half of the last tile matches the left half of the
//! first. For example, the tiles $[1|2]$, $[3|1]$ and $[3|2]$ close up as
//! $[1|2]\\,[2|3]\\,[3|1]$.
//!
//! The problem is an instance of finding an _Eulerian circuit_ in a
//! multigraph: regard the seven pip values as vertices and each tile $[a|b]$
//! as an edge between $a$ and $b$ (a loop if $a=b$). Then a closed chain
//! is a closed walk that traverses every edge exactly once. Such a walk
//! exists only if every vertex touches an even number of tile halves and
//! all vertices that appear on some tile are connected. A [`ChainGraph`]
//! checks these two conditions first, and then runs a backtracking search
//! that lays the tiles down one by one in the order of the input, taking
//! tiles back whenever the chain runs into a dead end. The first chain
//! found is returned; the search makes no attempt to enumerate or rank
//! solutions.
//!
//! The following structures are the most important pieces of the crate:
//! - [`Tile`] is a pair of validated [`Pips`]. Its constructors reject
//!   values outside `0..=6` with an [`OutOfRange`] error.
//! - [`ChainGraph`] indexes the tiles of a set by pip value and implements
//!   the [`CircleBuilder`] contract.
//! - [`Circle`] is the outcome of a successful search: a sequence of
//!   [links](`Link`), each recording the position of a tile in the input
//!   and the orientation in which it was laid down.
//!
//! Failures are reported by [`CircleError`]. The search emits [`log`]
//! records (at the `debug` and `trace` levels) but performs no other I/O,
//! so the presentation of a result is entirely up to the caller.
//!
//! The `demos` directory contains a small program, `circle.rs`, that
//! reads tiles from the command line and prints a closed chain.

mod circle;
mod error;
mod graph;
mod indices;
mod search;
mod tile;

pub use circle::{Circle, Link};
pub use error::{CircleError, OutOfRange, ParseTileError};
pub use graph::ChainGraph;
pub use indices::TileIndex;
pub use search::SearchLimits;
pub use tile::{Pips, Tile};

/// Arranges a set of tiles into a closed chain.
///
/// [`ChainGraph`] is the only strategy in this crate; the trait exists so
/// that callers can be written against the contract rather than against
/// a particular search procedure.
///
/// # Examples
///
/// ```
/// use domino_circles::{ChainGraph, CircleBuilder, CircleError, Tile};
///
/// let tiles = [Tile::new(1, 2)?, Tile::new(3, 1)?, Tile::new(3, 2)?];
/// let circle = ChainGraph::new(&tiles).form_circle()?;
/// assert!(circle.is_closed());
/// assert_eq!(circle.to_string(), "[1|2] [2|3] [3|1]");
///
/// // The values 1 and 4 appear on a single tile half each, so the
/// // tiles cannot close up.
/// let tiles = [Tile::new(1, 2)?, Tile::new(2, 3)?, Tile::new(3, 4)?];
/// let result = ChainGraph::new(&tiles).form_circle();
/// assert!(matches!(result, Err(CircleError::OddDegree { .. })));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CircleBuilder {
    /// Returns the tiles in the order and orientation of a closed chain,
    /// or the reason why no such chain exists.
    ///
    /// The tiles handed to the builder are left untouched; the orientation
    /// of every tile in the chain is recorded in the returned [`Circle`].
    fn form_circle(&self) -> Result<Circle, CircleError>;
}
