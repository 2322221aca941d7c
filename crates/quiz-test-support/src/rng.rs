//! Test RNG: scripted `DeterministicRng` implementations for tests.

use quiz_core::rng::DeterministicRng;

/// An RNG that always returns `min`. Suitable for tests that do not depend on
/// which quiz gets picked.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, clamped to the
/// requested range. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val.clamp(min, max)
    }
}
