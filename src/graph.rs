use crate::circle::Circle;
use crate::error::CircleError;
use crate::indices::TileIndex;
use crate::search::{Search, SearchLimits};
use crate::tile::{Pips, Tile};
use crate::CircleBuilder;

/// The number of distinct pip values, and hence of vertices in a tile graph.
const VALUES: usize = Pips::ALL.len();

/// A multigraph whose vertices are the seven pip values and whose edges are
/// the tiles of a set, each tile joining the values on its two halves.
///
/// Arranging the tiles into a closed chain amounts to finding a closed walk
/// that traverses every edge exactly once, also known as an _Eulerian
/// circuit_. L. Euler observed that such a walk can exist only if every
/// vertex has even degree and the vertices of positive degree belong to
/// a single connected component [_Commentarii academiae scientiarum
/// Petropolitanae_ **8** (1741), 128–140]. This structure checks both
/// conditions before starting a [backtracking search](`Search`) that lays
/// the tiles down one at a time.
///
/// The graph borrows the tiles from its caller. It refers to them by their
/// [position](`TileIndex`) in the input, which distinguishes two physical
/// tiles even if they show the same pips.
///
/// # Examples
///
/// ```
/// use domino_circles::{ChainGraph, CircleBuilder, Tile};
///
/// let tiles = [Tile::new(1, 3)?, Tile::new(4, 3)?, Tile::new(1, 3)?, Tile::new(3, 4)?];
/// let graph = ChainGraph::new(&tiles);
/// let circle = graph.form_circle()?;
/// assert_eq!(circle.to_string(), "[1|3] [3|4] [4|3] [3|1]");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChainGraph<'t> {
    /// The tiles of the set, in the order given by the caller. This order
    /// also determines the order in which the search tries the tiles.
    tiles: &'t [Tile],
    /// For each pip value $v$, the positions of the tiles with a half that
    /// shows $v$, in increasing order. A double $v|v$ appears only once in
    /// the list of $v$.
    ///
    /// # Invariant
    ///
    /// `adjacency[v]` is empty if and only if `degree[v]` is zero.
    adjacency: [Vec<TileIndex>; VALUES],
    /// For each pip value, the number of tile halves that show it. A double
    /// contributes two to the degree of its value.
    ///
    /// # Invariant
    ///
    /// The sum of all degrees is twice the number of tiles.
    degree: [usize; VALUES],
    /// The resources that the search is allowed to spend.
    limits: SearchLimits,
}

impl<'t> ChainGraph<'t> {
    /// Creates the graph of a list of tiles, without any search limits.
    pub fn new(tiles: &'t [Tile]) -> Self {
        let mut adjacency: [Vec<TileIndex>; VALUES] = Default::default();
        let mut degree = [0; VALUES];
        for (ix, tile) in tiles.iter().enumerate() {
            let (left, right) = (tile.left().index(), tile.right().index());
            adjacency[left].push(TileIndex::new(ix));
            if left != right {
                adjacency[right].push(TileIndex::new(ix));
            }
            degree[left] += 1;
            degree[right] += 1;
        }
        Self {
            tiles,
            adjacency,
            degree,
            limits: SearchLimits::default(),
        }
    }

    /// Replaces the limits imposed on the search for a closed chain.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the limits imposed on the search for a closed chain.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Returns the tiles of the graph, in their original order.
    pub fn tiles(&self) -> &'t [Tile] {
        self.tiles
    }

    /// Returns the tile at the given position, or [`None`] if the index
    /// is out of bounds.
    pub fn tile(&self, ix: TileIndex) -> Option<Tile> {
        self.tiles.get(ix.get()).copied()
    }

    /// Returns the number of tiles, or edges, in the graph.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the number of tile halves that show the given value.
    pub fn degree(&self, pips: Pips) -> usize {
        self.degree[pips.index()]
    }

    /// Returns the positions of the tiles with a half that shows the given
    /// value, in increasing order.
    pub fn incident(&self, pips: Pips) -> &[TileIndex] {
        &self.adjacency[pips.index()]
    }

    /// Returns an iterator over the pip values that appear on some tile,
    /// in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = Pips> + '_ {
        Pips::ALL
            .into_iter()
            .filter(|&pips| self.degree(pips) > 0)
    }

    /// Returns the number of distinct pip values that appear on some tile.
    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns the smallest pip value of odd degree, if any.
    pub fn odd_vertex(&self) -> Option<Pips> {
        self.vertices().find(|&pips| self.degree(pips) % 2 != 0)
    }

    /// Returns whether every pip value that appears on some tile can be
    /// reached from the left half of the first tile by moving along tiles.
    /// An empty graph is not connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.tiles.first() else {
            return false;
        };
        let mut reached = [false; VALUES];
        let mut stack = vec![first.left()];
        reached[first.left().index()] = true;
        while let Some(pips) = stack.pop() {
            let neighbors = self
                .incident(pips)
                .iter()
                .filter_map(|&ix| self.tile(ix)?.other_end(pips));
            for next in neighbors {
                if !reached[next.index()] {
                    reached[next.index()] = true;
                    stack.push(next);
                }
            }
        }
        self.vertices().all(|pips| reached[pips.index()])
    }
}

impl CircleBuilder for ChainGraph<'_> {
    fn form_circle(&self) -> Result<Circle, CircleError> {
        if self.is_empty() {
            log::debug!("no tiles were given");
            return Err(CircleError::EmptyInput);
        }
        // A set of doubles that all show the same value closes on itself,
        // whatever its order.
        if self.vertex_count() == 1 {
            log::debug!("all {} tiles show a single value", self.len());
            return Ok(Circle::in_input_order(self.tiles));
        }
        if let Some(pips) = self.odd_vertex() {
            log::debug!("value {pips} has odd degree {}", self.degree(pips));
            return Err(CircleError::OddDegree { pips });
        }
        if !self.is_connected() {
            log::debug!("the tile graph has more than one component");
            return Err(CircleError::Disconnected);
        }
        let circle = Search::new(self).run()?;
        log::debug!("formed circle {circle}");
        Ok(circle)
    }
}
