use crate::indices::TileIndex;
use crate::tile::{Pips, Tile};
use std::fmt;

/// A tile laid down in a chain: which physical tile it is, together with
/// the orientation in which it was placed.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Link {
    /// The position of the tile in the input of the [`ChainGraph`].
    ///
    /// [`ChainGraph`]: crate::ChainGraph
    pub index: TileIndex,
    /// The tile, turned so that its left half touches the previous link.
    pub tile: Tile,
}

impl Link {
    /// Returns the half that touches the previous link of the chain.
    #[must_use]
    pub fn entry(self) -> Pips {
        self.tile.left()
    }

    /// Returns the half that touches the next link of the chain.
    #[must_use]
    pub fn exit(self) -> Pips {
        self.tile.right()
    }
}

/// A closed chain of tiles, as produced by [`form_circle`].
///
/// The exit of every link matches the entry of the next one, and the exit of
/// the last link matches the entry of the first. Each tile of the input
/// occurs exactly once.
///
/// [`form_circle`]: crate::CircleBuilder::form_circle
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Circle {
    links: Vec<Link>,
}

impl Circle {
    pub(crate) fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    /// Builds a circle out of tiles kept in their given order and orientation.
    pub(crate) fn in_input_order(tiles: &[Tile]) -> Self {
        let links = tiles
            .iter()
            .enumerate()
            .map(|(ix, &tile)| Link {
                index: TileIndex::new(ix),
                tile,
            })
            .collect();
        Self { links }
    }

    /// Returns the links of the chain, starting from an arbitrary link.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the number of tiles in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns an iterator over the oriented tiles of the chain.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.links.iter().map(|link| link.tile)
    }

    /// Consumes the circle, returning its oriented tiles.
    #[must_use]
    pub fn into_tiles(self) -> Vec<Tile> {
        self.links.into_iter().map(|link| link.tile).collect()
    }

    /// Returns whether every pair of consecutive links touches with equal
    /// halves, including the pair formed by the last and the first link.
    /// An empty chain is not closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let (Some(first), Some(last)) = (self.links.first(), self.links.last()) else {
            return false;
        };
        last.exit() == first.entry()
            && self
                .links
                .windows(2)
                .all(|pair| pair[0].exit() == pair[1].entry())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut links = self.links.iter();
        if let Some(link) = links.next() {
            write!(f, "{}", link.tile)?;
            for link in links {
                write!(f, " {}", link.tile)?;
            }
        }
        Ok(())
    }
}

impl IntoIterator for Circle {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}
