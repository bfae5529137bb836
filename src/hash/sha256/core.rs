//! SHA-256 one-shot hashing
//!
//! This module implements the top-level SHA-256 function for complete
//! in-memory messages as defined in FIPS 180-4.
//!
//! It drives the three algorithm stages in order:
//! - the message is padded into 512-bit blocks
//! - each block is expanded into its 64-word schedule
//! - each schedule is folded into the running state by the compression
//!   function, chained across blocks
//!
//! The final state, serialized big-endian, is the 256-bit digest.

use super::H256_INIT;
use super::compress::compress;
use super::padding::{Sha256Error, pad};
use super::schedule::expand;
use crate::digest::Digest;

/// Computes the SHA-256 digest of the given message.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The 256-bit digest as a [`Digest`]
///
/// # Errors
/// - `InputTooLarge` if the message bit length exceeds 2^64 - 1
/// - `OutOfMemory` if the padded message cannot be allocated
///
/// # Notes
/// - The computation is atomic from the caller's perspective: it yields
///   either a complete digest or an error, never a partial result.
/// - Each block's compression depends on the previous block's output
///   state, so blocks are processed strictly in order.
/// - For chunked input that is not available as one slice, use the
///   incremental [`Sha256`](super::stream::Sha256) hasher instead; both
///   produce identical digests.
pub fn sha256(input: &[u8]) -> Result<Digest, Sha256Error> {
    let blocks = pad(input)?;

    let mut state = H256_INIT;

    for block in &blocks {
        let schedule = expand(block);
        compress(&mut state, &schedule);
    }

    Ok(Digest::from(state))
}
