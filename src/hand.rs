use crate::{Pip, Tile, HAND_CAPACITY};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// The [tiles](Tile) held by one player, in the order they were received.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_CAPACITY]>,
}

impl Hand {
    /// An empty hand.
    pub fn new() -> Hand {
        Hand::default()
    }

    /// Takes `tile` into the hand.
    #[inline]
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Gives up the held [tile](Tile) that is the [same tile](Tile::same_tile) as `tile`.
    ///
    /// # Returns
    ///
    /// Whether such a tile was held. Nothing changes when it wasn't.
    pub fn remove(&mut self, tile: &Tile) -> bool {
        match self.tiles.iter().position(|held| held.same_tile(tile)) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the [same tile](Tile::same_tile) as `tile` is held.
    #[inline]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|held| held.same_tile(tile))
    }

    /// Whether any held [tile](Tile) matches either open end.
    #[inline]
    pub fn has_playable(&self, left_end: Option<Pip>, right_end: Option<Pip>) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.matches_either(left_end, right_end))
    }

    /// # Returns
    ///
    /// The first held [tile](Tile) matching either open end, if any.
    pub fn find_playable(&self, left_end: Option<Pip>, right_end: Option<Pip>) -> Option<Tile> {
        self.tiles
            .iter()
            .find(|tile| tile.matches_either(left_end, right_end))
            .copied()
    }

    /// The sum of the [values](Tile::value) of every held [tile](Tile).
    #[inline]
    pub fn total_value(&self) -> usize {
        self.tiles.iter().map(Tile::value).sum()
    }

    /// The number of held [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no [tiles](Tile) are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The held [tiles](Tile).
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Drops every held [tile](Tile).
    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Hand {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tiles.iter().join(" "))
    }
}
