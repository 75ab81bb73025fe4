use konst::primitive::parse_usize;
use konst::{option, result};

/// The minimum number of players needed [to create](crate::Engine::new) a game. `2` players.
pub const MIN_PLAYERS: usize = 2;
/// The default number of [tiles](crate::Tile) dealt to each player when a game
/// [starts](crate::Engine::start_game). `7` tiles per hand.
///
/// # See Also
///
/// * [Engine::with_hand_len](crate::Engine::with_hand_len)
pub const DEFAULT_HAND_LEN: usize = 7;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [HandLens](crate::HandLens)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// All [hands](crate::Hand) will be stored on the stack until the number of
/// [tiles](crate::Tile) in a hand becomes greater than `HAND_CAPACITY`, after which the hand is
/// heap allocated. If the environment variable named `HAND_CAPACITY` is present at compile time
/// and is able to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to twice the [default hand length](DEFAULT_HAND_LEN), which covers
/// a dealt hand plus the usual number of forced draws.
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    DEFAULT_HAND_LEN * 2
);
