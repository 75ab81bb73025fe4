//! Drives an [`Engine`](crate::Engine) through front-ends that each act for one player.

use crate::{Engine, GameState, GameView, Hand, MoveError, MoveOutcome, Tile};
use async_trait::async_trait;
pub use last_runtime::*;
pub use turn_runtime::*;
use std::collections::HashSet;
use tracing::instrument;

mod last_runtime;
mod turn_runtime;

/// Defines how a front-end acts for one player: `get_move` and `update_(kind)` methods for
/// each kind of information the player receives.
///
/// `get_move` and `update_move_errors` block execution until getting input or updating output.
/// `update_view` and `update_last_view` may execute in parallel across seats.
///
/// # Errors
///
/// The implementor of [`Seat`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Seat<E> {
    /// On the player's turn, gets either a [tile](Tile) from `hand` to play or [None] to draw
    /// from the boneyard (or pass when it is empty).
    fn get_move<'a>(&self, view: &'a GameView<'_>, hand: &'a Hand) -> Result<Option<Tile>, E>;

    /// When [`Engine::check_move`] rejects the [tile](Tile) from [`Seat::get_move`], updates
    /// the player with the state of the game, their hand, their tile, and the reasons why
    /// it could not be played. The player is then asked for another move.
    fn update_move_errors<'a>(
        &self,
        view: &'a GameView<'_>,
        hand: &'a Hand,
        tile: Tile,
        move_errors: HashSet<MoveError>,
    ) -> Result<(), E>;

    /// After the player's turn, updates them with what happened during it.
    fn update_outcome<'a>(&self, view: &'a GameView<'_>, outcome: MoveOutcome) -> Result<(), E>;

    /// Before every turn, updates each player with the state of the game and their hand.
    async fn update_view<'a>(&self, view: &'a GameView<'_>, hand: &'a Hand) -> Result<(), E>;

    /// Once the game is over, updates each player with the final state of the game and
    /// the tiles left in their hand.
    async fn update_last_view<'a>(&self, view: &'a GameView<'_>, hand: &'a Hand) -> Result<(), E>;
}

/// Describes the reason why [`run`] stopped before the game ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RunError<E> {
    /// There is not exactly one [`Seat`] per player.
    SeatsMismatch {
        /// The number of given seats.
        seats_len: usize,
        /// The number of players in the game.
        players_len: usize,
    },
    /// Some seats failed to send input or receive an update.
    Seats(Vec<E>),
}

/// Plays a whole game, where `seats[index]` acts for the player at `index`.
///
/// Starts a new game unless one is already in progress, then repeatedly
/// [sends updates](send_updates) to every seat and [processes the input](process_input) of
/// the current seat until the game is over. Finally [sends the last updates](send_last_updates).
///
/// # Errors
///
/// * [RunError::SeatsMismatch] when there is not exactly one seat per player.
/// * [RunError::Seats] with every error from the first failing step.
#[instrument(skip_all)]
pub async fn run<S, E>(seats: &[S], engine: &mut Engine) -> Result<(), RunError<E>>
where
    S: Seat<E>,
{
    let players_len = engine.players().len();
    if seats.len() != players_len {
        return Err(RunError::SeatsMismatch {
            seats_len: seats.len(),
            players_len,
        });
    }

    if engine.state() != GameState::InProgress {
        engine.start_game();
    }

    while !engine.is_game_over() {
        send_updates(seats, engine).await.map_err(RunError::Seats)?;
        process_input(seats, engine).map_err(|error| RunError::Seats(vec![error]))?;
    }

    send_last_updates(seats, engine)
        .await
        .map_err(RunError::Seats)
}
