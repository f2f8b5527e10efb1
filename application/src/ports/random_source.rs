//! Random source port
//!
//! Every random decision made while generating a question goes through this
//! port, so a seeded or scripted implementation makes generation
//! reproducible.

/// Source of random integers and permutations
pub trait RandomSource {
    /// A random integer in `[min, max]`, both ends inclusive
    fn rand_int_between_inclusive(&mut self, min: i64, max: i64) -> i64;

    /// Reorder `items` randomly in place
    fn shuffle(&mut self, items: &mut [String]);

    /// Uniformly pick an index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
        let index = self.rand_int_between_inclusive(0, max);
        usize::try_from(index).ok().filter(|i| *i < len)
    }
}
