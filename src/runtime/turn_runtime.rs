use crate::runtime::Seat;
use crate::{Engine, GameState, MoveOutcome};
use futures::future;
use itertools::Itertools;
use tracing::debug;

/// It repeatedly asks the current seat for a move, and if the move is
/// invalid, it tells the seat about the errors and asks again. Once the move is valid,
/// or the seat chose to draw, plays the turn and tells the seat what happened.
///
/// Calls [`Seat::get_move`] for an input. Checks it with [`Engine::check_move`],
/// and if the input is invalid, calls [`Seat::update_move_errors`]. Then calls
/// [`Engine::play_turn`] and [`Seat::update_outcome`].
///
/// # Arguments
///
/// * `seats`: One seat per player, in turn order.
/// * `engine`: The game in progress.
///
/// # Errors
///
/// When the current seat fails to send input or receive an update.
///
/// # Panics
///
/// When there is no seat for the current player.
///
/// # Returns
///
/// What happened during the turn. [MoveOutcome::NotInProgress] without asking anything when
/// the game is not in progress.
pub fn process_input<S, E>(seats: &[S], engine: &mut Engine) -> Result<MoveOutcome, E>
where
    S: Seat<E>,
{
    if engine.state() != GameState::InProgress {
        return Ok(MoveOutcome::NotInProgress);
    }
    let seat = &seats[engine.current_player_index()];

    let tile = loop {
        let tile = seat.get_move(&engine.view(), engine.current_player().hand())?;
        let Some(supplied) = tile else {
            break tile;
        };
        match engine.check_move(&supplied) {
            Ok(()) => break tile,
            Err(move_errors) => {
                debug!(tile = %supplied, ?move_errors, "asking for another move");
                // cannot use map_err since E needs to be propagated here
                seat.update_move_errors(
                    &engine.view(),
                    engine.current_player().hand(),
                    supplied,
                    move_errors,
                )?;
            }
        }
    };

    let outcome = engine.play_turn(tile);
    seat.update_outcome(&engine.view(), outcome)?;

    Ok(outcome)
}

/// Asynchronously sends the current state of the game to every [`Seat`], each with the hand
/// of the player it acts for.
///
/// # Errors
///
/// Accumulates all errors from [`Seat::update_view`] into a vector.
///
/// # Returns
///
/// An empty tuple if there are no errors; otherwise, a vector of errors.
pub async fn send_updates<S, E>(seats: &[S], engine: &Engine) -> Result<(), Vec<E>>
where
    S: Seat<E>,
{
    let view = engine.view();
    let update_tasks = seats
        .iter()
        .zip(engine.players())
        .map(|(seat, player)| seat.update_view(&view, player.hand()));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
