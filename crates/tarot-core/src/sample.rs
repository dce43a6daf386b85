//! Uniform sampling without replacement.
//!
//! A partial Fisher-Yates shuffle over an index permutation: the first `k`
//! slots of a uniformly random permutation, so every item is equally likely to
//! be picked and no item is picked twice.

use rand::Rng;

use crate::error::{TarotError, TarotResult};

/// Pick `k` distinct items from `items`, in random order.
///
/// Fails with [`TarotError::InvalidArgument`] if `k` exceeds `items.len()`.
pub fn sample_without_replacement<T, R>(items: &[T], k: usize, rng: &mut R) -> TarotResult<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if k > items.len() {
        return Err(TarotError::InvalidArgument(format!(
            "cannot sample {k} items from {}",
            items.len()
        )));
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    for i in 0..k {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }

    Ok(indices[..k].iter().map(|&i| items[i].clone()).collect())
}
