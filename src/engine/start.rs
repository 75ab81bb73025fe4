use crate::{Board, Engine, GameState, Tile, TileSet};
use tap::Tap;
use tracing::{info, instrument, warn};

impl Engine {
    /// Starts a new game with a freshly [shuffled](TileSet::shuffle) tile set.
    ///
    /// # See Also
    ///
    /// * [Engine::start_game_with]
    pub fn start_game(&mut self) {
        self.start_game_with(TileSet::shuffle);
    }

    /// Replaces the tile set with a full one arranged by `shuffle`, clears the board and
    /// every hand, and deals [hand_len](Engine::hand_len) tiles to each player in turn order
    /// by drawing them one at a time.
    ///
    /// The player holding the highest double opens by placing it on the board. When nobody
    /// holds a double, the player holding the highest tile opens with that tile instead.
    /// The turn then passes to the player after the one who opened.
    ///
    /// Can be called again after a game is over to play another game with the same players.
    ///
    /// # Arguments
    ///
    /// * `shuffle`: Arranges the full tile set before dealing. The next tile drawn is
    /// the last one in [TileSet::tiles].
    #[instrument(skip(self, shuffle))]
    pub fn start_game_with(&mut self, shuffle: impl FnOnce(&mut TileSet)) {
        self.tile_set = TileSet::new().tap_mut(shuffle);
        self.board = Board::new();
        self.winner = None;
        self.current_player = 0;

        for player in self.players.iter_mut() {
            player.mut_hand().clear();
            for tile in self.tile_set.draw_many(self.hand_len) {
                player.mut_hand().add(tile);
            }
        }

        self.open();
        self.state = GameState::InProgress;
        info!(
            current_player = self.current_player().name(),
            remaining_tiles = self.remaining_tiles(),
            "game started"
        );
    }

    /// Places the opening tile for whoever holds it and passes the turn to the next player.
    fn open(&mut self) {
        let opening = self
            .find_highest(Tile::is_double)
            .or_else(|| self.find_highest(|_| true));

        match opening {
            Some((player, tile)) => {
                self.players[player].mut_hand().remove(&tile);
                self.board.play_tile(tile);
                self.current_player = player;
                info!(player = self.players[player].name(), %tile, "opening tile placed");
            }
            None => warn!("no tiles were dealt, skipping the opening tile"),
        }

        self.advance();
    }

    /// # Returns
    ///
    /// The index of the player holding the highest value tile accepted by `filter` and that
    /// tile. Ties go to the tile found first in turn order, then hand order.
    fn find_highest(&self, filter: impl Fn(&Tile) -> bool) -> Option<(usize, Tile)> {
        let mut highest: Option<(usize, Tile)> = None;
        for (index, player) in self.players.iter().enumerate() {
            for &tile in player.hand().tiles().iter().filter(|&tile| filter(tile)) {
                if highest.map_or(true, |(_, best)| tile.value() > best.value()) {
                    highest = Some((index, tile));
                }
            }
        }

        highest
    }
}
