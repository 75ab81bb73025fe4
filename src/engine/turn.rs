use crate::{Engine, GameState, Pip, Tile};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Describes what happened during one [turn](Engine::play_turn).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveOutcome {
    /// The game is not in progress, so nothing happened.
    NotInProgress,
    /// The supplied [tile](Tile) was placed on the board.
    Played(Tile),
    /// The current player could not play, drew this [tile](Tile), and placed it right away.
    PlayedAfterDraw(Tile),
    /// The current player drew this [tile](Tile) from the boneyard and kept it.
    Drew(Tile),
    /// The boneyard was empty and the current player did not play.
    Passed,
}

impl MoveOutcome {
    /// Whether a [tile](Tile) ended up on the board.
    #[inline]
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played(_) | MoveOutcome::PlayedAfterDraw(_))
    }
}

/// Describes the reason why a [tile](Tile) cannot be [played](Engine::play_turn) as supplied.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum MoveError {
    /// Attempting to play before the game started or after it ended.
    NotInProgress,
    /// Attempting to play a [tile](Tile) the current player does not hold.
    NotInHand {
        /// The supplied [tile](Tile).
        tile: Tile,
    },
    /// Attempting to play a [tile](Tile) that matches neither open end.
    NoMatchingEnd {
        /// The supplied [tile](Tile).
        tile: Tile,
        /// The open end on the left.
        left_end: Option<Pip>,
        /// The open end on the right.
        right_end: Option<Pip>,
    },
}

impl Engine {
    /// Plays one turn for the current player and reports whether a [tile](Tile) was placed.
    ///
    /// # Returns
    ///
    /// `true` for [MoveOutcome::Played] and [MoveOutcome::PlayedAfterDraw], `false` otherwise,
    /// including when the game is not in progress.
    ///
    /// # See Also
    ///
    /// * [Engine::play_turn]
    #[inline]
    pub fn make_move(&mut self, tile: Option<Tile>) -> bool {
        self.play_turn(tile).is_played()
    }

    /// Plays one turn for the current player.
    ///
    /// When `tile` is held by the current player and matches an open end, it is placed.
    /// Otherwise the turn continues as if no tile was supplied:
    ///
    /// * If the current player holds no playable tile, they draw one from the boneyard and
    /// place it right away when it matches an open end.
    /// * If they do hold a playable tile, they draw one from the boneyard and keep it.
    /// * When the boneyard is empty, they pass.
    ///
    /// After a tile is placed the game ends if some hand is empty or nobody can play with
    /// the boneyard empty; otherwise the turn passes to the next player. A turn without
    /// a placement always passes the turn, and still ends the game when it left everybody
    /// blocked with an empty boneyard.
    ///
    /// Calling this before the game started or after it ended changes nothing.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, tile: Option<Tile>) -> MoveOutcome {
        if self.state != GameState::InProgress {
            debug!(state = ?self.state, "ignoring move");
            return MoveOutcome::NotInProgress;
        }
        let current = self.current_player;

        if let Some(tile) = tile {
            if self.players[current].hand().contains(&tile) && self.board.play_tile(tile) {
                self.players[current].mut_hand().remove(&tile);
                debug!(player = self.players[current].name(), %tile, "played");
                self.finish_placement();
                return MoveOutcome::Played(tile);
            }
            debug!(%tile, "tile cannot be played, reassessing the hand");
        }

        let (left_end, right_end) = self.board.ends();
        let blocked = !self.players[current].hand().has_playable(left_end, right_end);

        let Some(drawn) = self.tile_set.draw() else {
            info!(player = self.players[current].name(), "boneyard is empty, passing");
            self.finish_pass();
            return MoveOutcome::Passed;
        };
        self.players[current].mut_hand().add(drawn);
        debug!(player = self.players[current].name(), %drawn, "drew from the boneyard");

        if blocked && drawn.matches_either(left_end, right_end) && self.board.play_tile(drawn) {
            self.players[current].mut_hand().remove(&drawn);
            debug!(player = self.players[current].name(), %drawn, "played the drawn tile");
            self.finish_placement();
            return MoveOutcome::PlayedAfterDraw(drawn);
        }

        self.finish_pass();
        MoveOutcome::Drew(drawn)
    }

    /// Checks whether the current player could place `tile` right now, without changing
    /// anything.
    ///
    /// # Errors
    ///
    /// * [MoveError::NotInProgress] Attempting to play before the game started or after
    /// it ended.
    /// * [MoveError::NotInHand] Attempting to play a tile the current player does not hold.
    /// * [MoveError::NoMatchingEnd] Attempting to play a tile that matches neither open end.
    pub fn check_move(&self, tile: &Tile) -> Result<(), HashSet<MoveError>> {
        let mut errors = HashSet::with_capacity(3);
        if self.state != GameState::InProgress {
            errors.insert(MoveError::NotInProgress);
        }

        if !self.current_player().hand().contains(tile) {
            errors.insert(MoveError::NotInHand { tile: *tile });
        }

        if !self.board.accepts(tile) {
            let (left_end, right_end) = self.board.ends();
            errors.insert(MoveError::NoMatchingEnd {
                tile: *tile,
                left_end,
                right_end,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    fn finish_placement(&mut self) {
        self.check_round_end();
        if !self.is_game_over() {
            self.advance();
        }
    }

    fn finish_pass(&mut self) {
        self.advance();
        self.check_round_end();
    }
}
