//! Message-schedule expansion (FIPS 180-4 §6.2.2, step 1).

use super::computations::{small_sigma0, small_sigma1};
use super::padding::Block;

/// Expands a 512-bit block into the 64-word message schedule.
///
/// # Parameters
/// - `block`: One 512-bit message block
///
/// # Returns
/// - The 64 schedule words feeding one compression pass
///
/// # Notes
/// - Words 0..16 are the block's sixteen 32-bit words, interpreted
///   big-endian as required by SHA-256.
/// - Words 16..64 follow the recurrence
///   `W[t] = W[t-16] + σ0(W[t-15]) + W[t-7] + σ1(W[t-2])`, with all
///   additions modulo 2^32.
/// - The schedule is scoped to one block and recomputed per block; each
///   compression round consumes its own distinct word.
pub fn expand(block: &Block) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (slot, chunk) in w.iter_mut().zip(block.as_bytes().chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for t in 16..64 {
        w[t] = w[t - 16]
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma1(w[t - 2]));
    }

    w
}
