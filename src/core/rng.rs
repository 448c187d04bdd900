//! RNG module - deterministic random source for piece selection.
//!
//! A simple LCG (Linear Congruential Generator) threaded explicitly through
//! every spawn so game sessions are reproducible from a seed. Tests inject
//! known seeds; the binary seeds from the clock at startup.

/// Simple LCG RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for reseeding a new session identically).
    pub fn state(&self) -> u32 {
        self.state
    }
}
