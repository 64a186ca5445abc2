//! Deterministic, seed-driven shuffling of answer choices.
//!
//! The same seed (typically a question id) always yields the same order, in
//! every process, so a learner revisiting a question sees the choices where
//! they saw them before.
//!
//! - [`rng::SeededRng`] — 31-bit LCG seeded from a string hash
//! - [`permutation::shuffle`] — Fisher–Yates over a fresh [`SeededRng`]
//! - [`permutation::shuffle_with_tracked_index`] — shuffle and follow one element
//! - [`permutation::should_shuffle`] — image layouts keep their original order

pub mod permutation;
pub mod rng;

pub use permutation::{
    Shuffled, should_shuffle, shuffle, shuffle_in_place, shuffle_with_tracked_index,
};
pub use rng::{SeededRng, seed_hash};
