//! String-seeded pseudo-random generator

/// LCG multiplier
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;

/// LCG increment
pub const LCG_INCREMENT: u64 = 12_345;

/// State is kept to the low 31 bits; also the divisor for unit values.
const STATE_MASK: u64 = 0x7fff_ffff;

/// Polynomial string hash (`hash * 31 + unit`) with 32-bit signed wraparound.
///
/// Iterates UTF-16 code units so that ids hash the same way the exam pages
/// have always hashed them. The empty string hashes to 0.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Linear congruential generator derived from a string seed.
///
/// Each instance owns its state; two generators built from the same seed
/// produce identical sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator whose initial state is `|seed_hash(seed)|`.
    pub fn from_seed(seed: &str) -> Self {
        Self::from_hash(seed_hash(seed))
    }

    /// Create a generator from an already computed hash.
    ///
    /// `i32::MIN` has no positive counterpart in `i32`, so its magnitude
    /// (2^31) is kept as-is; the first step masks it back into range.
    pub fn from_hash(hash: i32) -> Self {
        Self {
            state: u64::from(hash.unsigned_abs()),
        }
    }

    /// Advance the state and return it (always < 2^31).
    pub fn next_u31(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & STATE_MASK;
        self.state as u32
    }

    /// Advance and return `state / (2^31 - 1)`, a value in `[0, 1]`.
    ///
    /// The upper bound is reachable only when the state is exactly
    /// `2^31 - 1`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u31()) / STATE_MASK as f64
    }

    /// Draw an index in `[0, bound)` as `floor(next_f64() * bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        let index = (self.next_f64() * bound as f64).floor() as usize;
        index.min(bound - 1)
    }
}
