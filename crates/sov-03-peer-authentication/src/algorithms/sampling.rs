//! # Key Sampling
//!
//! The poll loop asks for a bounded random subset of the still-missing
//! validator keys. Sampling is uniform without replacement via swap-and-pop
//! over a working copy; the full list is never shuffled.

use rand::Rng;
use shared_types::PublicKey;
use std::collections::HashSet;

/// Messages required to meet the fill threshold: `ceil(total * threshold)`.
pub fn required_messages(total_keys: usize, threshold: f64) -> usize {
    (total_keys as f64 * threshold).ceil() as usize
}

/// Validator keys not present in the cache snapshot.
///
/// The diff runs over a hash set; `validator_keys` stays sorted only so that
/// downstream logging is deterministic.
pub fn missing_keys(validator_keys: &[PublicKey], cached: &[PublicKey]) -> Vec<PublicKey> {
    let cached_set: HashSet<&PublicKey> = cached.iter().collect();
    validator_keys.iter().filter(|key| !cached_set.contains(key)).cloned().collect()
}

/// Draw up to `sample_size` keys uniformly at random without replacement.
///
/// Swap-and-pop: pick index `r` in the live range, take that element, move
/// the last live element into slot `r`, shrink the range. O(k) extra memory
/// beyond the working copy.
pub fn sample_without_replacement<R: Rng>(
    keys: &[PublicKey],
    sample_size: usize,
    rng: &mut R,
) -> Vec<PublicKey> {
    let mut working: Vec<PublicKey> = keys.to_vec();
    let take = sample_size.min(working.len());

    let mut sample = Vec::with_capacity(take);
    for _ in 0..take {
        let r = rng.gen_range(0..working.len());
        sample.push(working.swap_remove(r));
    }
    sample
}
