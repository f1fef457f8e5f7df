//! RNG module - seeded Mulberry32 stream
//!
//! A 32-bit state generator: identical seeds produce identical infinite draw
//! sequences, which is what makes seeded runs reproducible. The generator is
//! available both as a pure state-in/state-out step function and as an
//! encapsulated counter.

/// Mulberry32 increment added to the state on every step
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// Advance a Mulberry32 state by one step.
///
/// Returns `(next_state, output)`. Pure: the same input always yields the same pair.
pub fn mulberry32_step(state: u32) -> (u32, u32) {
    let t = state.wrapping_add(MULBERRY_INCREMENT);
    let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
    r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
    (t, r ^ (r >> 14))
}

/// Seeded Mulberry32 generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a new RNG with the given seed. Every seed, including 0, is valid.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let (state, out) = mulberry32_step(self.state);
        self.state = state;
        out
    }

    /// Generate a float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Generate random value in range [0, max)
    ///
    /// Equivalent to `floor(next_f64() * max)`, computed in integers.
    /// Returns 0 without consuming a draw when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Current internal state (resuming from it continues the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}
