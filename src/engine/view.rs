use crate::{Board, Engine, GameState, HandLens, Names, Player};

/// Immutably borrows the publicly visible properties of an [`Engine`]: everything except
/// the tiles inside each hand and the order of the boneyard.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The chain of played tiles.
    pub board: &'a Board,
    /// The name of each player in turn order.
    pub names: Names<'a>,
    /// The number of tiles in each player's hand.
    pub hand_lens: HandLens,
    /// The number of tiles left in the boneyard.
    pub remaining_tiles: usize,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The phase of the game.
    pub state: GameState,
    /// The index of the winning player, only once the game is over.
    pub winner: Option<usize>,
}

impl<'a> GameView<'a> {
    /// The name of the player whose turn it is.
    pub fn current_name(&self) -> &'a str {
        self.names[self.current_player]
    }

    /// The name of the winning player, only once the game is over.
    pub fn winner_name(&self) -> Option<&'a str> {
        self.winner.map(|index| self.names[index])
    }
}

impl<'a> Engine {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`Engine`], but
    /// with hands replaced by the number of tiles in each hand and the boneyard replaced by
    /// its length.
    pub fn view(&'a self) -> GameView<'a> {
        GameView {
            board: &self.board,
            names: self.players.iter().map(Player::name).collect(),
            hand_lens: self.players.iter().map(|player| player.hand().len()).collect(),
            remaining_tiles: self.tile_set.len(),
            current_player: self.current_player,
            state: self.state,
            winner: self.winner,
        }
    }
}
