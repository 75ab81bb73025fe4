use crate::{tiles, Tile, TILES_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// The boneyard: every [tile](Tile) that hasn't been dealt, drawn, or played yet.
///
/// Created with all [`TILES_LEN`] tiles of a double-six set. Tiles only ever leave a tile set,
/// so its length never grows after [`TileSet::new`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// # Returns
    ///
    /// A tile set of every [tile](Tile) in ascending order. Call [`TileSet::shuffle`] before
    /// dealing.
    pub fn new() -> TileSet {
        let mut tile_set = TileSet {
            tiles: Vec::with_capacity(TILES_LEN),
        };
        tile_set.generate();
        tile_set
    }

    fn generate(&mut self) {
        self.tiles.extend(tiles());
    }

    /// Shuffles the remaining [tiles](Tile) in place with the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffles the remaining [tiles](Tile) in place with `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// Removes one [tile](Tile) from the end, or [None] when the tile set is empty.
    #[inline]
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Removes up to `count` [tiles](Tile) from the end, one [draw](TileSet::draw) at a time.
    ///
    /// # Returns
    ///
    /// The drawn tiles in the order they were drawn. Shorter than `count` when the tile set
    /// runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Tile> {
        (0..count).map_while(|_| self.draw()).collect()
    }

    /// Whether there are no [tiles](Tile) left to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The number of [tiles](Tile) left to draw.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The remaining [tiles](Tile), the next one to be drawn last.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[cfg(test)]
    pub(crate) fn mut_tiles(&mut self) -> &mut Vec<Tile> {
        &mut self.tiles
    }
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_len() {
        let tile_set = TileSet::new();
        assert_eq!(TILES_LEN, tile_set.len());
        assert!(!tile_set.is_empty());
    }

    #[test]
    fn new_doubles() {
        let tile_set = TileSet::new();
        assert_eq!(7, tile_set.tiles().iter().filter(|tile| tile.is_double()).count());
    }

    #[test]
    fn shuffle_same_tiles() {
        let mut tile_set = TileSet::new();
        tile_set.shuffle();

        assert_eq!(TILES_LEN, tile_set.len());
        for tile in tiles() {
            assert!(tile_set.tiles().contains(&tile));
        }
    }

    #[test]
    fn shuffle_with_seed() {
        let mut first = TileSet::new();
        let mut second = TileSet::new();
        first.shuffle_with(&mut StdRng::seed_from_u64(7));
        second.shuffle_with(&mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
    }

    #[test]
    fn draw_until_empty() {
        let mut tile_set = TileSet::new();
        tile_set.shuffle();

        for drawn in 1..=TILES_LEN {
            assert!(tile_set.draw().is_some());
            assert_eq!(TILES_LEN - drawn, tile_set.len());
        }

        assert!(tile_set.is_empty());
        assert_eq!(None, tile_set.draw());
    }

    #[test]
    fn draw_from_end() {
        let mut tile_set = TileSet::new();
        let last = *tile_set.tiles().last().unwrap();

        assert_eq!(Some(last), tile_set.draw());
    }

    #[test]
    fn draw_many() {
        let mut tile_set = TileSet::new();

        assert_eq!(7, tile_set.draw_many(7).len());
        assert_eq!(TILES_LEN - 7, tile_set.len());
    }

    #[test]
    fn draw_many_exhausted() {
        let mut tile_set = TileSet::new();
        tile_set.draw_many(TILES_LEN - 3);

        let drawn = tile_set.draw_many(7);

        assert_eq!(3, drawn.len());
        assert!(tile_set.is_empty());
        assert!(tile_set.draw_many(7).is_empty());
    }
}
