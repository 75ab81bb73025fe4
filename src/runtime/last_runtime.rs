use crate::runtime::Seat;
use crate::Engine;
use futures::future;
use itertools::Itertools;

/// Asynchronously sends the final state of the game to every [`Seat`], each with the tiles
/// left in the hand of the player it acts for.
///
/// # Errors
///
/// Accumulates all errors from [`Seat::update_last_view`] into a vector.
///
/// # Returns
///
/// An empty tuple if there are no errors; otherwise, a vector of errors.
pub async fn send_last_updates<S, E>(seats: &[S], engine: &Engine) -> Result<(), Vec<E>>
where
    S: Seat<E>,
{
    let view = engine.view();
    let update_tasks = seats
        .iter()
        .zip(engine.players())
        .map(|(seat, player)| seat.update_last_view(&view, player.hand()));

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
