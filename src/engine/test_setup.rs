use crate::{Board, Engine, GameState, Players, Tile, TileSet};

impl Engine {
    /// Generates a game in progress between "Player 1", "Player 2", ... where it is the first
    /// player's turn.
    ///
    /// # Arguments
    ///
    /// * `hands`: The tiles held by each player. Also decides the number of players.
    /// * `board`: Tiles [played](Board::play_tile) one after another onto an empty board.
    /// * `boneyard`: The exact tile set, the next tile drawn last.
    pub fn set_up(hands: &[&[Tile]], board: &[Tile], boneyard: &[Tile]) -> Engine {
        let names = (1..=hands.len().max(2)).map(|index| format!("Player {index}"));
        let mut engine = Engine::new(names).expect("test names should be valid");

        for (player, &hand) in engine.players.iter_mut().zip(hands) {
            for &tile in hand {
                player.mut_hand().add(tile);
            }
        }
        for &tile in board {
            assert!(engine.board.play_tile(tile), "{tile} should fit the test board");
        }
        *engine.tile_set.mut_tiles() = boneyard.to_vec();
        engine.state = GameState::InProgress;

        engine
    }

    /// A mutable reference to `self.tile_set`.
    pub fn mut_tile_set(&mut self) -> &mut TileSet {
        &mut self.tile_set
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }
}

/// Moves `first_drawn` to the end of the tile set so that they are
/// [drawn](TileSet::draw) in the given order before every other tile.
pub(crate) fn stack_draws(tile_set: &mut TileSet, first_drawn: &[Tile]) {
    let tiles = tile_set.mut_tiles();
    for tile in first_drawn {
        let index = tiles
            .iter()
            .position(|held| held.same_tile(tile))
            .unwrap_or_else(|| panic!("{tile} should be in the tile set"));
        tiles.remove(index);
    }
    tiles.extend(first_drawn.iter().rev());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tile, TILES_LEN};

    #[test]
    fn stack_draws_order() {
        let mut tile_set = TileSet::new();
        tile_set.shuffle();

        stack_draws(&mut tile_set, &[tile(6, 6), tile(0, 1)]);

        assert_eq!(TILES_LEN, tile_set.len());
        assert_eq!(Some(tile(6, 6)), tile_set.draw());
        assert_eq!(Some(tile(0, 1)), tile_set.draw());
    }

    #[test]
    fn set_up_turn_order() {
        let mut engine = Engine::set_up(&[&[tile(6, 1)], &[tile(4, 4)]], &[tile(6, 6)], &[]);
        *engine.mut_current_player() = 1;

        assert_eq!("Player 2", engine.current_player().name());
        assert_eq!(1, engine.mut_board().len());
        assert_eq!(2, engine.mut_players().len());
        assert!(engine.mut_tile_set().is_empty());
    }
}
