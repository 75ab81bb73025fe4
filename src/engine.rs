use crate::{Board, Hand, Player, Players, TileSet, DEFAULT_HAND_LEN, MIN_PLAYERS, TILES_LEN};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use tracing::info;

pub use turn::*;
pub use view::*;

mod start;
#[cfg(test)]
mod test_setup;
mod turn;
mod view;

/// The phase of a game. Phases only move forward:
/// `NotStarted` to `InProgress` to `GameOver`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    /// Created but not [started](Engine::start_game) yet.
    NotStarted,
    /// Tiles have been dealt and players are taking turns.
    InProgress,
    /// Some player emptied their hand or nobody can play and the boneyard is empty.
    GameOver,
}

/// Describes the reason why an [Engine] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting [to create](Engine::new) a game with fewer than [MIN_PLAYERS] players.
    TooFewPlayers {
        /// The number of given player names.
        players_len: usize,
    },
    /// Attempting [to create](Engine::new) a game where some players share a name.
    DuplicateNames {
        /// Every name given more than once.
        duplicates: BTreeSet<String>,
    },
    /// Attempting [to create](Engine::with_hand_len) a game where hands are dealt empty.
    EmptyHands,
    /// Attempting to deal more [tiles](crate::Tile) than a double-six set holds.
    NotEnoughTiles {
        /// The number of [tiles](crate::Tile) requested for hands.
        requested_tiles: usize,
        /// The number of [tiles](crate::Tile) in a full [tile set](TileSet).
        tiles_in_set: usize,
    },
}

/// Owns the [tile set](TileSet), the [board](Board) and every [player](Player) of one game
/// and enforces the rules as players take turns. Created from [Engine::new].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Engine {
    /// The boneyard.
    tile_set: TileSet,
    /// The chain of played tiles.
    board: Board,
    /// Every player in turn order.
    players: Players,
    /// The number of tiles dealt to each player.
    hand_len: usize,
    /// The index of the player whose turn it is.
    current_player: usize,
    state: GameState,
    /// The index of the winning player, only set once the game is over.
    winner: Option<usize>,
}

impl Engine {
    /// Creates a game for `names` in turn order that deals [DEFAULT_HAND_LEN] tiles per player.
    ///
    /// # Errors
    ///
    /// See [Engine::with_hand_len].
    pub fn new<I, S>(names: I) -> Result<Engine, HashSet<NewError>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Engine::with_hand_len(names, None)
    }

    /// Checks that there are at least [MIN_PLAYERS] distinct names and that every hand can be
    /// dealt from one [tile set](TileSet), then creates a game that has not started yet.
    ///
    /// When `hand_len` is [None], [DEFAULT_HAND_LEN] is used.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting to create a game with fewer than [MIN_PLAYERS]
    /// players.
    /// * [NewError::DuplicateNames] Attempting to create a game where some players share a name.
    /// * [NewError::EmptyHands] Attempting to create a game where hands are dealt empty.
    /// * [NewError::NotEnoughTiles] Attempting to deal more tiles than a tile set holds.
    pub fn with_hand_len<I, S>(names: I, hand_len: Option<usize>) -> Result<Engine, HashSet<NewError>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect_vec();
        let hand_len = hand_len.unwrap_or(DEFAULT_HAND_LEN);
        Engine::check(&names, hand_len)?;

        Ok(Engine {
            tile_set: TileSet::new(),
            board: Board::new(),
            players: names.into_iter().map(Player::new).collect(),
            hand_len,
            current_player: 0,
            state: GameState::NotStarted,
            winner: None,
        })
    }

    /// Collects every reason why a game for `names` dealing `hand_len` tiles cannot be created.
    fn check(names: &[String], hand_len: usize) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(4);
        if names.len() < MIN_PLAYERS {
            errors.insert(NewError::TooFewPlayers {
                players_len: names.len(),
            });
        }

        let duplicates: BTreeSet<String> = names.iter().duplicates().cloned().collect();
        if !duplicates.is_empty() {
            errors.insert(NewError::DuplicateNames { duplicates });
        }

        if hand_len == 0 {
            errors.insert(NewError::EmptyHands);
        }

        let requested_tiles = names.len().saturating_mul(hand_len);
        if requested_tiles > TILES_LEN {
            errors.insert(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_set: TILES_LEN,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// The chain of played [tiles](crate::Tile).
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every [player](Player) in turn order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The [player](Player) at `index` or [None] if out of bounds.
    #[inline]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The [hand](Hand) held by the player at `index` or [None] if out of bounds.
    #[inline]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.players.get(index).map(Player::hand)
    }

    /// The [player](Player) whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// The phase of the game.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winning [player](Player), only once the game is over.
    #[inline]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    /// The index of the winning player, only once the game is over.
    #[inline]
    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    /// Whether the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// The number of [tiles](crate::Tile) left in the boneyard.
    #[inline]
    pub fn remaining_tiles(&self) -> usize {
        self.tile_set.len()
    }

    /// The number of [tiles](crate::Tile) dealt to each player.
    #[inline]
    pub fn hand_len(&self) -> usize {
        self.hand_len
    }

    /// Passes the turn to the next player, looping back to the first.
    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    /// Ends the game when some player's hand is empty, or when nobody can play and
    /// the boneyard is empty. A blocked game is won by the lowest hand value, the earlier
    /// player winning ties.
    fn check_round_end(&mut self) {
        if let Some(winner) = self.players.iter().position(|player| player.hand().is_empty()) {
            info!(winner = self.players[winner].name(), "hand emptied");
            self.end_game(winner);
            return;
        }

        let (left_end, right_end) = self.board.ends();
        let someone_can_play = self
            .players
            .iter()
            .any(|player| player.hand().has_playable(left_end, right_end));
        if someone_can_play || !self.tile_set.is_empty() {
            return;
        }

        if let Some(winner) = self.players.iter().position_min_by_key(|player| player.hand_value()) {
            info!(
                winner = self.players[winner].name(),
                hand_value = self.players[winner].hand_value(),
                "game blocked"
            );
            self.end_game(winner);
        }
    }

    fn end_game(&mut self, winner: usize) {
        self.state = GameState::GameOver;
        self.winner = Some(winner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;
    use map_macro::{btree_set, hash_set};

    #[test]
    fn new() {
        let engine = Engine::new(["Ada", "Grace"]).unwrap();

        assert_eq!(GameState::NotStarted, engine.state());
        assert_eq!(2, engine.players().len());
        assert_eq!("Ada", engine.players()[0].name());
        assert_eq!("Grace", engine.players()[1].name());
        assert_eq!(DEFAULT_HAND_LEN, engine.hand_len());
        assert!(engine.board().is_empty());
        assert!(engine.winner().is_none());
        assert!(!engine.is_game_over());
    }

    #[test]
    fn too_few_players() {
        test_new_errors(
            vec!["Ada"],
            None,
            hash_set! { NewError::TooFewPlayers { players_len: 1 } },
        );
    }

    #[test]
    fn no_players() {
        test_new_errors(
            vec![],
            None,
            hash_set! { NewError::TooFewPlayers { players_len: 0 } },
        );
    }

    #[test]
    fn duplicate_names() {
        test_new_errors(
            vec!["Ada", "Grace", "Ada"],
            None,
            hash_set! { NewError::DuplicateNames { duplicates: btree_set! { "Ada".to_owned() } } },
        );
    }

    #[test]
    fn empty_hands() {
        test_new_errors(vec!["Ada", "Grace"], Some(0), hash_set! { NewError::EmptyHands });
    }

    #[test]
    fn not_enough_tiles() {
        test_new_errors(
            vec!["Ada", "Grace", "Alan", "Edsger", "Barbara"],
            None,
            hash_set! {
                NewError::NotEnoughTiles {
                    requested_tiles: 35,
                    tiles_in_set: TILES_LEN,
                }
            },
        );
    }

    #[test]
    fn too_few_players_empty_hands() {
        test_new_errors(
            vec!["Ada"],
            Some(0),
            hash_set! {
                NewError::TooFewPlayers { players_len: 1 },
                NewError::EmptyHands,
            },
        );
    }

    #[test]
    fn hand_out_of_bounds() {
        let engine = Engine::new(["Ada", "Grace"]).unwrap();

        assert!(engine.hand(1).is_some());
        assert!(engine.hand(2).is_none());
        assert!(engine.player(2).is_none());
    }

    #[test]
    fn advance_wraps() {
        let mut engine = Engine::new(["Ada", "Grace", "Alan"]).unwrap();

        engine.advance();
        assert_eq!(1, engine.current_player_index());
        engine.advance();
        engine.advance();
        assert_eq!(0, engine.current_player_index());
    }

    #[test]
    fn round_end_empty_hand_before_blocked() {
        let mut engine = Engine::set_up(&[&[], &[tile(5, 5)]], &[tile(6, 6)], &[]);

        engine.check_round_end();

        assert!(engine.is_game_over());
        assert_eq!(Some(0), engine.winner_index());
    }

    #[test]
    fn round_end_someone_can_play() {
        let mut engine = Engine::set_up(&[&[tile(1, 2)], &[tile(6, 3)]], &[tile(6, 6)], &[]);

        engine.check_round_end();

        assert_eq!(GameState::InProgress, engine.state());
    }

    #[test]
    fn round_end_blocked_boneyard_not_empty() {
        let mut engine =
            Engine::set_up(&[&[tile(1, 2)], &[tile(3, 3)]], &[tile(6, 6)], &[tile(0, 0)]);

        engine.check_round_end();

        assert_eq!(GameState::InProgress, engine.state());
    }

    #[test]
    fn round_end_blocked_lowest_hand() {
        let mut engine = Engine::set_up(
            &[&[tile(4, 5), tile(0, 0)], &[tile(1, 2), tile(0, 3)]],
            &[tile(6, 6)],
            &[],
        );

        engine.check_round_end();

        assert!(engine.is_game_over());
        assert_eq!(Some(1), engine.winner_index());
    }

    #[test]
    fn round_end_blocked_tie_first_player() {
        let mut engine = Engine::set_up(&[&[tile(2, 3)], &[tile(0, 5)]], &[tile(6, 6)], &[]);

        engine.check_round_end();

        assert!(engine.is_game_over());
        assert_eq!("Player 1", engine.winner().unwrap().name());
    }

    fn test_new_errors(names: Vec<&str>, hand_len: Option<usize>, expected: HashSet<NewError>) {
        let actual = Engine::with_hand_len(names, hand_len)
            .expect_err("with_hand_len should only return Err");

        assert_eq!(expected, actual);
    }
}
