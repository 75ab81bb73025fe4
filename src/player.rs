use crate::Hand;
use std::fmt;

/// A named participant and the [hand](Hand) they hold.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    pub(crate) fn new(name: String) -> Player {
        Player {
            name,
            hand: Hand::new(),
        }
    }

    /// The player's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [tiles](crate::Tile) the player holds.
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The [total value](Hand::total_value) of the player's hand, which decides a blocked game.
    #[inline]
    pub fn hand_value(&self) -> usize {
        self.hand.total_value()
    }

    pub(crate) fn mut_hand(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.hand.len() == 1 { "tile" } else { "tiles" };
        write!(f, "{} ({} {noun}): {}", self.name, self.hand.len(), self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    #[test]
    fn new_empty_hand() {
        let player = Player::new("Ada".to_owned());

        assert_eq!("Ada", player.name());
        assert!(player.hand().is_empty());
        assert_eq!(0, player.hand_value());
    }

    #[test]
    fn hand_value_derived() {
        let mut player = Player::new("Ada".to_owned());
        player.mut_hand().add(tile(4, 5));
        player.mut_hand().add(tile(0, 1));

        assert_eq!(10, player.hand_value());
        player.mut_hand().remove(&tile(4, 5));
        assert_eq!(1, player.hand_value());
    }

    #[test]
    fn display() {
        let mut player = Player::new("Ada".to_owned());
        player.mut_hand().add(tile(4, 5));

        assert_eq!("Ada (1 tile): [4|5]", player.to_string());

        player.mut_hand().add(tile(0, 1));
        assert_eq!("Ada (2 tiles): [4|5] [0|1]", player.to_string());
    }
}
