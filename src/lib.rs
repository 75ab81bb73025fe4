//! Concrete structs to represent and protect the state of a game of double-six dominoes with
//! methods to progress through the game.
//!
//! ## Summary
//!
//! Two or more players each receive a hand of [tiles](Tile) from a shuffled
//! [tile set](TileSet). The player holding the highest double opens the [board](Board), then
//! players take turns to either [play](Engine::play_turn) a [tile](Tile) matching one of the two
//! open ends of the chain or draw from the boneyard. The game ends when some player empties
//! their hand, or when nobody can play and the boneyard is empty, in which case the player
//! holding the lowest [hand value](Hand::total_value) wins.
//!
//! ## How is the game created?
//!
//! [Engine::new] and [Engine::with_hand_len] offer the only public endpoints to create the game.
//! Both validate the player names and the number of [tiles](Tile) each player is dealt and
//! return every [problem](NewError) found at once.
//!
//! ## How is the game started?
//!
//! [Engine::start_game] replaces the [tile set](TileSet) with a freshly shuffled one, deals
//! each hand, and places the opening [tile](Tile): the highest double, or the highest
//! [tile](Tile) when nobody holds a double. The turn passes to the player after the one
//! who opened. It can be called again once the game is over.
//!
//! ## How is the game advanced?
//!
//! The current player either supplies a [tile](Tile) from their hand or no [tile](Tile) at all
//! to [Engine::play_turn] (or [Engine::make_move]):
//!
//! * A held [tile](Tile) matching an open end is placed, preferring the left end.
//! * Otherwise a [tile](Tile) is drawn from the boneyard. A player without any playable
//! [tile](Tile) places the drawn one right away when it matches.
//! * With an empty boneyard, the player passes.
//!
//! The current player is represented as the index of the player whose turn it is in the range
//! `0`..(the number of players) which either increments or loops back to `0` when necessary.
//!
//! [Engine::check_move] reports why a [tile](Tile) cannot be placed without changing anything.
//!
//! ## How is the game viewed?
//!
//! [Engine::view] borrows everything visible to all players as a [GameView]. [Engine::hand]
//! shares the private [hand](Hand) of each individual player.
//!
//! ## How is the game played by front-ends?
//!
//! Each front-end implements [Seat] for one player, and [run] drives a whole game by asking the
//! current seat for moves and updating every seat between turns.
//!
//! ## How is the game tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [Engine] implements
//! methods to get mutable references to its properties and to set up common scenarios, and
//! helper functions add random data to boards and hands.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use engine::*;
pub use hand::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use tile::*;
pub use tile_set::*;
pub use types::*;

mod board;
mod consts;
mod engine;
mod hand;
mod player;
#[cfg(test)]
mod random;
mod runtime;
mod tile;
mod tile_set;
mod types;
