use crate::{Board, Hand, Pip, Tile, TileSet};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shorthand for a [tile](Tile) from two numbers of dots that are known to be valid.
///
/// # Panics
///
/// When either number is outside of `0..=6`.
pub fn tile(left: u8, right: u8) -> Tile {
    Tile::new(left, right).unwrap_or_else(|errors| panic!("invalid tile: {errors:?}"))
}

/// Plays a random, small, non-zero number of [tiles](Tile) from a shuffled
/// [tile set](TileSet) onto the board, always keeping the chain legal.
///
/// # Returns
///
/// The number of additional [tiles](Tile) on the board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> usize {
    let mut tile_set = TileSet::new();
    tile_set.shuffle_with(rng);
    let wanted = rng.gen_range(1..10);

    let mut played = 0;
    while played < wanted {
        let Some(tile) = tile_set.draw() else {
            break;
        };
        if board.play_tile(tile) {
            played += 1;
        }
    }

    played
}

/// A hand of a random, small, non-zero number of random [tiles](Tile). Tiles may repeat.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let hand_len = rng.gen_range(1..=7);
    (0..hand_len).map(|_| rng.gen::<Tile>()).collect()
}

/// A random [tile](Tile) that matches neither `left_end` nor `right_end`, if one exists.
pub fn random_unplayable<R: Rng + ?Sized>(
    rng: &mut R,
    left_end: Option<Pip>,
    right_end: Option<Pip>,
) -> Option<Tile> {
    crate::tiles()
        .into_iter()
        .filter(|tile| !tile.matches_either(left_end, right_end))
        .collect_vec()
        .choose(rng)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_unplayable_matches_neither_end() {
        let mut rng = StdRng::seed_from_u64(7);
        for (left_end, right_end) in [
            (Some(Pip::Six), Some(Pip::Six)),
            (Some(Pip::Blank), Some(Pip::Three)),
            (None, None),
        ] {
            for _ in 0..20 {
                let unplayable = random_unplayable(&mut rng, left_end, right_end).unwrap();
                assert!(!unplayable.matches_either(left_end, right_end));
            }
        }
    }
}
