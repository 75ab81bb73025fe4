use crate::{Player, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// A vector of every [player](Player) in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Engine](crate::Engine)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of the number of [tiles](crate::Tile) in each player's [hand](crate::Hand).
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of borrowed player names in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type Names<'a> = SmallVec<[&'a str; PLAYER_CAPACITY]>;
