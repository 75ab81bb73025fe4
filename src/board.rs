use crate::{Pip, Tile};
use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt;

/// The chain of played [tiles](Tile) with two open ends.
///
/// Every tile is stored in the orientation it was placed in, so for a non-empty board the
/// [left end](Board::left_end) is the left [pip](Pip) of the leftmost tile, the
/// [right end](Board::right_end) is the right [pip](Pip) of the rightmost tile, and
/// neighbouring tiles show the same [pip](Pip) where they touch.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    tiles: VecDeque<Tile>,
    left_end: Option<Pip>,
    right_end: Option<Pip>,
}

impl Board {
    /// An empty board without open ends.
    pub fn new() -> Board {
        Board::default()
    }

    /// Places `tile` on the [left end](Board::add_left) if possible, otherwise on the
    /// [right end](Board::add_right). A double matching both ends goes left.
    ///
    /// # Returns
    ///
    /// Whether `tile` was placed.
    #[inline]
    pub fn play_tile(&mut self, tile: Tile) -> bool {
        self.add_left(tile) || self.add_right(tile)
    }

    /// Prepends `tile` when it matches the left end, turning it around first if needed so that
    /// its right [pip](Pip) touches the chain. On an empty board, `tile` is placed as it is and
    /// sets both ends.
    ///
    /// # Returns
    ///
    /// Whether `tile` was placed. The board is unchanged when it was not.
    pub fn add_left(&mut self, tile: Tile) -> bool {
        let Some(left_end) = self.left_end else {
            self.tiles.push_back(tile);
            self.left_end = Some(tile.left());
            self.right_end = Some(tile.right());
            return true;
        };

        let tile = if tile.right() == left_end {
            tile
        } else if tile.left() == left_end {
            tile.flip()
        } else {
            return false;
        };
        self.tiles.push_front(tile);
        self.left_end = Some(tile.left());
        true
    }

    /// Appends `tile` when it matches the right end, turning it around first if needed so that
    /// its left [pip](Pip) touches the chain. On an empty board, behaves like
    /// [`Board::add_left`].
    ///
    /// # Returns
    ///
    /// Whether `tile` was placed. The board is unchanged when it was not.
    pub fn add_right(&mut self, tile: Tile) -> bool {
        let Some(right_end) = self.right_end else {
            return self.add_left(tile);
        };

        let tile = if tile.left() == right_end {
            tile
        } else if tile.right() == right_end {
            tile.flip()
        } else {
            return false;
        };
        self.tiles.push_back(tile);
        self.right_end = Some(tile.right());
        true
    }

    /// Whether `tile` could be [played](Board::play_tile) without changing the board.
    #[inline]
    pub fn accepts(&self, tile: &Tile) -> bool {
        self.is_empty() || tile.matches_either(self.left_end, self.right_end)
    }

    /// The exposed [pip](Pip) on the left, or [None] when the board is empty.
    #[inline]
    pub fn left_end(&self) -> Option<Pip> {
        self.left_end
    }

    /// The exposed [pip](Pip) on the right, or [None] when the board is empty.
    #[inline]
    pub fn right_end(&self) -> Option<Pip> {
        self.right_end
    }

    /// Both open ends, left first.
    #[inline]
    pub fn ends(&self) -> (Option<Pip>, Option<Pip>) {
        (self.left_end, self.right_end)
    }

    /// The placed [tiles](Tile) from left to right in their placed orientation.
    #[inline]
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// A snapshot of the placed [tiles](Tile) from left to right.
    pub fn to_vec(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }

    /// The number of placed [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no [tile](Tile) has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty board");
        }
        write!(f, "{}", self.tiles.iter().join(" "))
    }
}
