//! Scrabble tile bag for drawing random racks

use rand::Rng;
use rand::seq::IndexedRandom;

/// Standard English letter distribution (blanks excluded), `a`..=`z`
pub const TILE_DISTRIBUTION: [usize; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, // a-m
    6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1, // n-z
];

/// Default rack size in Scrabble
pub const RACK_SIZE: usize = 7;

/// A bag of letter tiles
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<u8>,
}

impl TileBag {
    /// The standard 98-letter bag
    #[must_use]
    pub fn standard() -> Self {
        let tiles = (b'a'..=b'z')
            .zip(TILE_DISTRIBUTION)
            .flat_map(|(letter, count)| std::iter::repeat_n(letter, count))
            .collect();
        Self { tiles }
    }

    /// Number of tiles in the bag
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw `size` tiles without replacement
    ///
    /// The bag itself is left untouched, so every call draws from a full bag.
    /// `size` is clamped to the number of tiles available.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::TileBag;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let rack = TileBag::standard().draw_rack(&mut rng, 7);
    /// assert_eq!(rack.len(), 7);
    /// ```
    pub fn draw_rack<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> String {
        self.tiles
            .choose_multiple(rng, size.min(self.tiles.len()))
            .map(|&tile| char::from(tile))
            .collect()
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCounts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_bag_has_98_letters() {
        let bag = TileBag::standard();
        assert_eq!(bag.len(), 98);
        assert_eq!(TILE_DISTRIBUTION.iter().sum::<usize>(), 98);
    }

    #[test]
    fn rack_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let bag = TileBag::standard();
        for size in [0, 1, RACK_SIZE, 15] {
            assert_eq!(bag.draw_rack(&mut rng, size).len(), size);
        }
    }

    #[test]
    fn rack_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let rack = TileBag::standard().draw_rack(&mut rng, 500);
        assert_eq!(rack.len(), 98);
    }

    #[test]
    fn rack_never_exceeds_distribution() {
        let mut rng = StdRng::seed_from_u64(3);
        let bag = TileBag::standard();
        let full = LetterCounts::from_text(&bag.draw_rack(&mut rng, 98));

        for _ in 0..50 {
            let rack = LetterCounts::from_text(&bag.draw_rack(&mut rng, RACK_SIZE));
            assert!(full.contains(&rack));
        }
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let bag = TileBag::standard();
        let first = bag.draw_rack(&mut StdRng::seed_from_u64(99), RACK_SIZE);
        let second = bag.draw_rack(&mut StdRng::seed_from_u64(99), RACK_SIZE);
        assert_eq!(first, second);
    }
}
