//! Fisher–Yates shuffling over a [`SeededRng`]

use super::rng::SeededRng;
use crate::core::error::DomainError;

/// Result of [`shuffle_with_tracked_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shuffled<T> {
    /// Items in their new order
    pub items: Vec<T>,
    /// Position of the tracked element within `items`
    pub tracked_index: usize,
    /// `order[k]` is the original position of `items[k]`
    pub order: Vec<usize>,
}

/// Shuffle `items` in place using a fresh generator derived from `seed`.
///
/// Walks `i` from `len - 1` down to 1, swapping `i` with a drawn `j` in
/// `[0, i]`. Slices of length 0 or 1 are left untouched.
pub fn shuffle_in_place<T>(items: &mut [T], seed: &str) {
    let mut rng = SeededRng::from_seed(seed);
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`; the input is not modified.
pub fn shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, seed);
    shuffled
}

/// Shuffle `items` and report where the element at `tracked_index` ended up.
///
/// The permutation is computed on the index sequence `0..len` with the same
/// seed, so it is identical to what [`shuffle`] would apply to `items`.
///
/// # Errors
/// Returns [`DomainError::TrackedIndexOutOfRange`] if `tracked_index` is not
/// a position in `items`.
pub fn shuffle_with_tracked_index<T: Clone>(
    items: &[T],
    tracked_index: usize,
    seed: &str,
) -> Result<Shuffled<T>, DomainError> {
    let out_of_range = || DomainError::TrackedIndexOutOfRange {
        index: tracked_index,
        len: items.len(),
    };
    if tracked_index >= items.len() {
        return Err(out_of_range());
    }

    let indices: Vec<usize> = (0..items.len()).collect();
    let order = shuffle(&indices, seed);
    let new_index = order
        .iter()
        .position(|&original| original == tracked_index)
        .ok_or_else(out_of_range)?;

    Ok(Shuffled {
        items: order.iter().map(|&original| items[original].clone()).collect(),
        tracked_index: new_index,
        order,
    })
}

/// Whether a question's choices may be reordered.
///
/// Choice images and composite images refer to choices by their on-page
/// position, so either one pins the original order.
pub fn should_shuffle(has_choice_image: bool, has_composite_image: bool) -> bool {
    !has_choice_image && !has_composite_image
}
