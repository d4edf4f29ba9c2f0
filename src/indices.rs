/// The position of a tile in the sequence handed to a [`ChainGraph`].
///
/// Two tiles with the same pips are still different physical pieces, so
/// the search keeps track of the tiles it has laid down by position rather
/// than by value. See the `adjacency` table of [`ChainGraph`] for an example
/// of this construction.
///
/// [`ChainGraph`]: `crate::ChainGraph`
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct TileIndex(usize);

impl TileIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A set of tile positions, stored as one flag per tile.
///
/// The search marks a tile as soon as it lays the tile down and clears the
/// mark when it takes the tile back, so membership queries must be cheap.
#[derive(Debug, Clone, Default)]
pub(crate) struct TileSet {
    marks: Vec<bool>,
    len: usize,
}

impl TileSet {
    /// Creates an empty set able to hold the positions `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            marks: vec![false; capacity],
            len: 0,
        }
    }

    /// Returns whether the set contains the given position. Positions beyond
    /// the capacity of the set are never contained in it.
    pub fn contains(&self, ix: TileIndex) -> bool {
        self.marks.get(ix.get()).copied().unwrap_or(false)
    }

    /// Adds a position to the set, returning whether it was absent.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub fn insert(&mut self, ix: TileIndex) -> bool {
        let mark = &mut self.marks[ix.get()];
        let was_absent = !*mark;
        *mark = true;
        self.len += was_absent as usize;
        was_absent
    }

    /// Removes a position from the set, returning whether it was present.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub fn remove(&mut self, ix: TileIndex) -> bool {
        let mark = &mut self.marks[ix.get()];
        let was_present = *mark;
        *mark = false;
        self.len -= was_present as usize;
        was_present
    }

    /// Returns the number of positions in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every position from the set, keeping its capacity.
    pub fn clear(&mut self) {
        self.marks.fill(false);
        self.len = 0;
    }
}
