//! Message padding (FIPS 180-4 §5.1.1).
//!
//! Padding extends a raw message to a whole number of 512-bit blocks:
//! the message bits, a single 1 bit, a zero fill, and the original
//! message length in bits as a 64-bit big-endian integer occupying the
//! last 64 bits. A message never pads to zero blocks, and a message whose
//! tail leaves fewer than 65 spare bits in its last block spills into one
//! additional block.

use std::fmt::{Display, Formatter};

/// Errors that can occur while hashing a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// The message bit length cannot be represented in the 64-bit length
    /// field of the padding trailer.
    InputTooLarge,
    /// The block buffer for the padded message could not be allocated.
    OutOfMemory,
}

impl Display for Sha256Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sha256Error::InputTooLarge => {
                f.write_str("message bit length exceeds the 64-bit limit")
            }
            Sha256Error::OutOfMemory => f.write_str("failed to allocate the padded message"),
        }
    }
}

impl std::error::Error for Sha256Error {}

/// A single 512-bit message block.
///
/// Blocks are produced by [`pad`] and consumed read-only by the schedule
/// expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block(pub(crate) [u8; 64]);

impl Block {
    /// Length of a block in bytes.
    pub const SIZE: usize = 64;

    /// Wraps 64 raw bytes as a block.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Block(bytes)
    }

    /// Returns the block content.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Computes the 64-bit message bit length from a byte count.
///
/// Fails with `InputTooLarge` when the bit length does not fit, which on
/// 64-bit targets means a message of 2^61 bytes or more.
pub(crate) fn bit_length(bytes: u128) -> Result<u64, Sha256Error> {
    let bits = bytes.checked_mul(8).ok_or(Sha256Error::InputTooLarge)?;

    u64::try_from(bits).map_err(|_| Sha256Error::InputTooLarge)
}

/// Pads a message into a sequence of 512-bit blocks.
///
/// # Parameters
/// - `message`: Arbitrary-length input message
///
/// # Returns
/// - The padded message as owned blocks, in order. At least one block is
///   always produced.
///
/// # Errors
/// - `InputTooLarge` if the message bit length exceeds 2^64 - 1
/// - `OutOfMemory` if the block buffer cannot be allocated
///
/// # Notes
/// - The padded length is the smallest multiple of 64 bytes with room for
///   the message, the 0x80 marker byte, and the 8-byte length trailer.
/// - The transformation is pure; the caller owns the returned blocks.
pub fn pad(message: &[u8]) -> Result<Vec<Block>, Sha256Error> {
    let bit_len = bit_length(message.len() as u128)?;

    // Room for the message, the marker byte, and the length trailer.
    let block_count = (message.len() + 9).div_ceil(Block::SIZE);

    let mut blocks = Vec::new();
    blocks
        .try_reserve_exact(block_count)
        .map_err(|_| Sha256Error::OutOfMemory)?;

    let mut chunks = message.chunks_exact(Block::SIZE);

    for chunk in chunks.by_ref() {
        blocks.push(Block(chunk.try_into().unwrap()));
    }

    // Tail: remaining bytes, the appended 1 bit as 0x80, zero fill, and
    // the big-endian bit length in the last 8 bytes.
    let rem = chunks.remainder();
    let mut tail = [0u8; Block::SIZE];

    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;

    // With more than 55 tail bytes the marker and the length trailer do
    // not fit in one block: close this block and spill into a fresh one.
    if rem.len() > 55 {
        blocks.push(Block(tail));
        tail = [0u8; Block::SIZE];
    }

    tail[56..].copy_from_slice(&bit_len.to_be_bytes());
    blocks.push(Block(tail));

    debug_assert_eq!(blocks.len(), block_count);

    Ok(blocks)
}
