use itertools::Itertools;
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// The number of [`Tile`] variants in a double-six set. 28 tiles from every unordered pair
/// of [pips](Pip).
pub const TILES_LEN: usize = Pip::PIPS_LEN * (Pip::PIPS_LEN + 1) / 2;

/// # Returns
///
/// A vector of every [`Tile`] in a double-six set, where each tile's left [pip](Pip) is less
/// than or equal to its right [pip](Pip), in ascending order.
pub fn tiles() -> Vec<Tile> {
    Pip::pips()
        .into_iter()
        .combinations_with_replacement(2)
        .map(|pips| Tile::from_pips(pips[0], pips[1]))
        .collect()
}

/// Describes the number of dots on one half of a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Pip {
    /// `0`.
    Blank = 0,
    /// `1`.
    One = 1,
    /// `2`.
    Two = 2,
    /// `3`.
    Three = 3,
    /// `4`.
    Four = 4,
    /// `5`.
    Five = 5,
    /// `6`.
    Six = 6,
}

impl Pip {
    /// The number of [`Pip`] variants. 7 pips from blank to six.
    pub const PIPS_LEN: usize = 7;

    /// # Returns
    ///
    /// An array of all [`Pip`] variants in order.
    #[inline]
    pub fn pips() -> [Pip; Pip::PIPS_LEN] {
        [
            Pip::Blank,
            Pip::One,
            Pip::Two,
            Pip::Three,
            Pip::Four,
            Pip::Five,
            Pip::Six,
        ]
    }

    /// # Returns
    ///
    /// The number of dots.
    #[inline]
    pub fn value(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Distribution<Pip> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Pip {
        let index = rng.gen_range(0..Pip::PIPS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since pips cover all indexes \
                in range 0..Pip::PIPS_LEN (0..{:?}).",
                index,
                Pip::PIPS_LEN
            );
        })
    }
}

/// Describes the reason why a [`Tile`] could not be [created](Tile::new).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewTileError {
    /// Attempting to create a [tile](Tile) with a number of dots outside of `0..=6`.
    InvalidValue {
        /// The rejected number of dots.
        value: u8,
    },
}

/// A domino with two [pips](Pip). The order of the pips is the tile's orientation on
/// the [board](crate::Board), but a tile and its [flip](Tile::flip) are the same
/// physical tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    left: Pip,
    right: Pip,
}

impl Tile {
    /// Checks that both halves are valid [pips](Pip).
    ///
    /// # Errors
    ///
    /// * [NewTileError::InvalidValue] for each half outside of `0..=6`.
    pub fn new(left: u8, right: u8) -> Result<Tile, HashSet<NewTileError>> {
        let pip = |value: u8| -> Result<Pip, NewTileError> {
            num::FromPrimitive::from_u8(value).ok_or(NewTileError::InvalidValue { value })
        };
        match (pip(left), pip(right)) {
            (Ok(left), Ok(right)) => Ok(Tile::from_pips(left, right)),
            (left, right) => Err([left.err(), right.err()].into_iter().flatten().collect()),
        }
    }

    /// Creates a tile from already valid [pips](Pip).
    #[inline]
    pub const fn from_pips(left: Pip, right: Pip) -> Tile {
        Tile { left, right }
    }

    /// The [pip](Pip) facing left.
    #[inline]
    pub fn left(&self) -> Pip {
        self.left
    }

    /// The [pip](Pip) facing right.
    #[inline]
    pub fn right(&self) -> Pip {
        self.right
    }

    /// Whether both halves show the same [pip](Pip).
    #[inline]
    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// The total number of dots on both halves.
    #[inline]
    pub fn value(&self) -> usize {
        self.left.value() + self.right.value()
    }

    /// # Returns
    ///
    /// The same tile turned around, with its halves swapped.
    #[inline]
    pub fn flip(&self) -> Tile {
        Tile::from_pips(self.right, self.left)
    }

    /// Whether either half shows `pip`.
    #[inline]
    pub fn matches(&self, pip: Pip) -> bool {
        self.left == pip || self.right == pip
    }

    /// Whether the tile matches either open end of a [board](crate::Board). An absent end,
    /// as on an empty board, matches nothing.
    #[inline]
    pub fn matches_either(&self, left_end: Option<Pip>, right_end: Option<Pip>) -> bool {
        [left_end, right_end]
            .into_iter()
            .flatten()
            .any(|pip| self.matches(pip))
    }

    /// Whether `other` is the same physical tile in either orientation.
    #[inline]
    pub fn same_tile(&self, other: &Tile) -> bool {
        self == other || *self == other.flip()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::from_pips(rng.gen(), rng.gen())
    }
}
