use crate::circle::{Circle, Link};
use crate::error::CircleError;
use crate::graph::ChainGraph;
use crate::indices::{TileIndex, TileSet};
use crate::tile::Tile;

/// Bounds on the work done by the search for a closed chain.
///
/// Deciding whether an arbitrary set of tiles forms a closed chain takes
/// exponential time in the worst case for a backtracking procedure, because
/// the search may lay down and take back the same tiles over and over before
/// exhausting all possibilities. Callers that handle untrusted input can
/// bound this effort.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct SearchLimits {
    /// The maximum number of times the search may lay down a tile, or
    /// [`None`] to search until a chain is found or all options have been
    /// tried.
    pub max_steps: Option<u64>,
}

/// A depth-first search for an ordering of the tiles of a [`ChainGraph`]
/// into a closed chain.
///
/// The search tries each tile in turn as the first link of the chain, laid
/// down in its given orientation. It then extends the chain one link at
/// a time: if the last link exits at value $v$, the next link is the
/// first unused tile in the list of $v$ that has not yet been tried at
/// this depth, turned so that it enters at $v$. When no tile can follow
/// the last link, the search takes that link back and continues with
/// the next candidate for its position. The chain is complete as soon
/// as it holds every tile and the exit of its last link equals the
/// entry of its first link.
///
/// Instead of recursion, this structure keeps an explicit stack with one
/// cursor for each link of the chain. The cursor at depth $k$ points to
/// the position, within the list of the exit value of link $k$, of the
/// next candidate for link $k+1$. Orientations are part of the [links]
/// and never modify the tiles of the graph, so taking a link back leaves
/// nothing to restore.
///
/// [links]: Link
pub(crate) struct Search<'g, 't> {
    graph: &'g ChainGraph<'t>,
    /// The links laid down so far, from the first to the last.
    chain: Vec<Link>,
    /// The position, within the list of the exit value of each link in
    /// `chain`, of the next candidate to follow that link.
    ///
    /// # Invariant
    ///
    /// `cursors.len() == chain.len()`.
    cursors: Vec<usize>,
    /// The tiles that appear in `chain`.
    used: TileSet,
    /// The number of times a tile has been laid down, over all attempts.
    steps: u64,
}

impl<'g, 't> Search<'g, 't> {
    pub fn new(graph: &'g ChainGraph<'t>) -> Self {
        Self {
            graph,
            chain: Vec::with_capacity(graph.len()),
            cursors: Vec::with_capacity(graph.len()),
            used: TileSet::with_capacity(graph.len()),
            steps: 0,
        }
    }

    /// Runs the search, returning the first closed chain found.
    pub fn run(mut self) -> Result<Circle, CircleError> {
        for start in 0..self.graph.len() {
            if self.extend_from(TileIndex::new(start))? {
                log::trace!("circle complete after {} steps", self.steps);
                return Ok(Circle::new(self.chain));
            }
        }
        log::debug!("all starting tiles exhausted after {} steps", self.steps);
        Err(CircleError::NoChainFound)
    }

    /// Looks for a closed chain whose first link is the tile at position
    /// `start`, returning whether one was found. On success, the chain
    /// is left in `self.chain`.
    fn extend_from(&mut self, start: TileIndex) -> Result<bool, CircleError> {
        self.chain.clear();
        self.cursors.clear();
        self.used.clear();
        let tile = self.tile(start)?;
        self.lay(Link { index: start, tile })?;
        loop {
            if self.is_complete() {
                return Ok(true);
            }
            if let Some(link) = self.next_candidate()? {
                self.lay(link)?;
            } else {
                self.take_back();
                if self.chain.is_empty() {
                    return Ok(false);
                }
            }
        }
    }

    /// Returns whether the chain holds every tile and closes on itself.
    fn is_complete(&self) -> bool {
        match (self.chain.first(), self.chain.last()) {
            (Some(first), Some(last)) => {
                self.chain.len() == self.graph.len() && last.exit() == first.entry()
            }
            _ => false,
        }
    }

    /// Advances the cursor of the last link past the next unused tile that
    /// can follow it, and returns that tile turned to enter at the exit of
    /// the last link. Returns [`None`] if the candidates are exhausted.
    fn next_candidate(&mut self) -> Result<Option<Link>, CircleError> {
        let (Some(last), Some(cursor)) = (self.chain.last(), self.cursors.last_mut()) else {
            return Err(CircleError::InternalFault(
                "cannot extend an empty chain".to_string(),
            ));
        };
        let exit = last.exit();
        let incident = self.graph.incident(exit);
        while let Some(&ix) = incident.get(*cursor) {
            *cursor += 1;
            if self.used.contains(ix) {
                continue;
            }
            let Some(tile) = self.graph.tile(ix) else {
                return Err(missing_tile(ix));
            };
            let Some(tile) = tile.entering_at(exit) else {
                return Err(CircleError::InternalFault(format!(
                    "tile {tile} at position {} is listed under value {exit}",
                    ix.get()
                )));
            };
            log::trace!("try {tile} after {}", last.tile);
            return Ok(Some(Link { index: ix, tile }));
        }
        Ok(None)
    }

    /// Appends a link to the chain.
    fn lay(&mut self, link: Link) -> Result<(), CircleError> {
        self.steps += 1;
        if let Some(max_steps) = self.graph.limits().max_steps {
            if self.steps > max_steps {
                log::debug!("giving up after {max_steps} steps");
                return Err(CircleError::StepLimitExceeded { steps: self.steps });
            }
        }
        if !self.used.insert(link.index) {
            return Err(CircleError::InternalFault(format!(
                "tile at position {} was laid down twice",
                link.index.get()
            )));
        }
        self.chain.push(link);
        self.cursors.push(0);
        debug_assert_eq!(self.used.len(), self.chain.len());
        log::trace!("use {} (chain length {})", link.tile, self.chain.len());
        Ok(())
    }

    /// Returns the tile at the given position of the graph.
    fn tile(&self, ix: TileIndex) -> Result<Tile, CircleError> {
        self.graph.tile(ix).ok_or_else(|| missing_tile(ix))
    }

    /// Removes the last link from the chain, making its tile available again.
    fn take_back(&mut self) {
        self.cursors.pop();
        if let Some(link) = self.chain.pop() {
            log::trace!("back from {}", link.tile);
            self.used.remove(link.index);
        }
    }
}

/// Reports a position that lies outside the tiles of the graph.
fn missing_tile(ix: TileIndex) -> CircleError {
    CircleError::InternalFault(format!("no tile at position {}", ix.get()))
}

#[cfg(test)]
mod tests {
    use super::Search;
    use crate::{ChainGraph, CircleBuilder, CircleError, Pips, SearchLimits, Tile, TileIndex};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tiles(pairs: &[(i32, i32)]) -> Vec<Tile> {
        pairs
            .iter()
            .map(|&pair| Tile::try_from(pair).unwrap())
            .collect()
    }

    fn pairs(circle: &[Tile]) -> Vec<(u8, u8)> {
        circle
            .iter()
            .map(|tile| (tile.left().get(), tile.right().get()))
            .collect()
    }

    /// Checks that `circle` arranges all of `input` into a closed chain.
    fn assert_valid_circle(input: &[Tile], result: Result<crate::Circle, CircleError>) {
        let circle = result.expect("tiles should form a circle");
        assert!(circle.is_closed(), "chain {circle} is not closed");
        assert_eq!(circle.len(), input.len());
        let mut seen = vec![false; input.len()];
        for link in circle.links() {
            let original = input[link.index.get()];
            assert!(link.tile == original || link.tile == original.flipped());
            assert!(!seen[link.index.get()], "tile used twice in {circle}");
            seen[link.index.get()] = true;
        }
    }

    #[test]
    fn simple_circles() {
        init_logger();
        for pairs in [
            &[(1, 2), (2, 3), (3, 1)][..],
            &[(2, 2), (2, 3), (3, 2)],
            &[(4, 4)],
            &[(4, 4), (4, 4), (4, 4), (4, 4), (4, 4)],
            &[(5, 4), (4, 4), (4, 5), (4, 4), (4, 4)],
            &[(5, 6), (6, 5)],
            &[(6, 5), (6, 5)],
            &[(1, 1), (1, 1), (1, 2), (2, 2), (2, 1), (1, 1)],
        ] {
            let tiles = tiles(pairs);
            assert_valid_circle(&tiles, ChainGraph::new(&tiles).form_circle());
        }
    }

    #[test]
    fn circle_through_three_values() {
        let tiles = tiles(&[(1, 2), (2, 3), (3, 1)]);
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        assert_eq!(pairs(&circle.into_tiles()), [(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn two_tiles_turn_into_a_loop() {
        let tiles = tiles(&[(6, 5), (6, 5)]);
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        assert_eq!(pairs(&circle.into_tiles()), [(6, 5), (5, 6)]);
    }

    #[test]
    fn tiles_are_tried_in_input_order() {
        let tiles = tiles(&[(1, 2), (2, 2), (1, 2)]);
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        assert_eq!(pairs(&circle.into_tiles()), [(1, 2), (2, 2), (2, 1)]);

        let tiles = self::tiles(&[(1, 3), (4, 3), (1, 3), (3, 4)]);
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        let positions: Vec<_> = circle.links().iter().map(|l| l.index.get()).collect();
        assert_eq!(positions, [0, 1, 3, 2]);
        assert_eq!(
            pairs(&circle.into_tiles()),
            [(1, 3), (3, 4), (4, 3), (3, 1)]
        );
    }

    #[test]
    fn caller_tiles_keep_their_orientation() {
        let tiles = tiles(&[(2, 1), (3, 2), (1, 3)]);
        let before = tiles.clone();
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        assert_eq!(pairs(&circle.into_tiles()), [(2, 1), (1, 3), (3, 2)]);
        assert_eq!(tiles, before);
    }

    #[test]
    fn backtracks_out_of_a_premature_loop() {
        // Following [2|1] right after [1|2] closes the chain too early.
        init_logger();
        let tiles = tiles(&[(1, 2), (2, 1), (2, 3), (3, 2)]);
        let circle = ChainGraph::new(&tiles).form_circle().unwrap();
        assert_eq!(
            pairs(&circle.into_tiles()),
            [(1, 2), (2, 3), (3, 2), (2, 1)]
        );
    }

    #[test]
    fn full_figure_eight() {
        let tiles = tiles(&[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]);
        assert_valid_circle(&tiles, ChainGraph::new(&tiles).form_circle());
    }

    #[test]
    fn step_limit() {
        let tiles = tiles(&[(1, 2), (2, 1), (2, 3), (3, 2)]);
        // The search lays down [1|2], [2|1], [2|3], [3|2] and finally [2|1]
        // again, that is, five tiles in total.
        let limited = |max_steps| {
            ChainGraph::new(&tiles)
                .with_limits(SearchLimits {
                    max_steps: Some(max_steps),
                })
                .form_circle()
        };
        assert_eq!(limited(4), Err(CircleError::StepLimitExceeded { steps: 5 }));
        assert!(limited(5).is_ok());
    }

    #[test]
    fn starting_outside_the_tile_list_is_an_internal_fault() {
        let tiles = tiles(&[(1, 2), (2, 1)]);
        let graph = ChainGraph::new(&tiles);
        let mut search = Search::new(&graph);
        assert_eq!(
            search.extend_from(TileIndex::new(2)),
            Err(CircleError::InternalFault(
                "no tile at position 2".to_string()
            ))
        );
        assert_eq!(search.extend_from(TileIndex::new(0)), Ok(true));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CircleError::EmptyInput.to_string(),
            "no tiles to form a circle"
        );
        assert_eq!(
            CircleError::NoChainFound.to_string(),
            "a circular chain cannot be formed"
        );
        assert!(CircleError::OddDegree { pips: Pips::TWO }
            .to_string()
            .contains("odd"));
        assert!(CircleError::Disconnected.to_string().contains("not connected"));
        assert_eq!(
            CircleError::InternalFault("no tile at position 9".to_string()).to_string(),
            "internal fault: no tile at position 9"
        );
        assert_eq!(
            CircleError::StepLimitExceeded { steps: 5 }.to_string(),
            "the search gave up after 5 steps"
        );
    }

    /// Turns arbitrary pairs into at most `max_len` tiles.
    fn small_set(pairs: Vec<(u8, u8)>, max_len: usize) -> Vec<Tile> {
        pairs
            .into_iter()
            .take(max_len)
            .map(|(l, r)| {
                Tile::from_pips(Pips::ALL[l as usize % 7], Pips::ALL[r as usize % 7])
            })
            .collect()
    }

    #[quickcheck]
    fn shuffled_closed_walks_form_circles(
        values: Vec<u8>,
        flips: Vec<bool>,
        shift: usize,
    ) -> TestResult {
        // Walk through up to eight values and back to the first one, then
        // scramble the order and orientation of the tiles along the walk.
        let values: Vec<_> = values
            .into_iter()
            .take(8)
            .map(|v| Pips::ALL[v as usize % 7])
            .collect();
        if values.is_empty() {
            return TestResult::discard();
        }
        let mut tiles: Vec<_> = values
            .iter()
            .zip(values.iter().cycle().skip(1))
            .map(|(&from, &to)| Tile::from_pips(from, to))
            .collect();
        for (tile, &flip) in tiles.iter_mut().zip(&flips) {
            if flip {
                tile.flip_in_place();
            }
        }
        let len = tiles.len();
        tiles.rotate_left(shift % len);
        assert_valid_circle(&tiles, ChainGraph::new(&tiles).form_circle());
        TestResult::passed()
    }

    #[quickcheck]
    fn search_succeeds_when_degrees_are_even_and_graph_is_connected(
        pairs: Vec<(u8, u8)>,
    ) -> bool {
        // By Euler's theorem, the two structural conditions are sufficient
        // as well as necessary; an exhaustive search must therefore find
        // a chain whenever they hold.
        let tiles = small_set(pairs, 7);
        let graph = ChainGraph::new(&tiles);
        let feasible =
            !graph.is_empty() && graph.odd_vertex().is_none() && graph.is_connected();
        let result = graph.form_circle();
        result != Err(CircleError::NoChainFound) && (result.is_ok() || !feasible)
    }

    #[quickcheck]
    fn odd_degree_does_not_depend_on_order(pairs: Vec<(u8, u8)>) -> TestResult {
        let mut tiles = small_set(pairs, 12);
        let result = ChainGraph::new(&tiles).form_circle();
        if !matches!(result, Err(CircleError::OddDegree { .. })) {
            return TestResult::discard();
        }
        tiles.reverse();
        let half = tiles.len() / 2;
        tiles.rotate_left(half);
        TestResult::from_bool(ChainGraph::new(&tiles).form_circle() == result)
    }
}
