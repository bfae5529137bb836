//! Incremental SHA-256 hashing
//!
//! This module provides a streaming variant of SHA-256 that accepts the
//! message in chunks and defers padding until finalization.
//!
//! Full blocks are compressed as soon as they are available, so the
//! hasher holds at most one partial block regardless of message size and
//! performs no heap allocation.

use super::H256_INIT;
use super::compress::compress;
use super::padding::{Block, Sha256Error, bit_length};
use super::schedule::expand;
use crate::digest::Digest;

/// Incremental SHA-256 hasher.
///
/// The hasher accumulates message bytes via [`update`](Sha256::update)
/// and produces the digest via [`finalize`](Sha256::finalize), which
/// consumes the hasher. A finished hasher cannot be reused; create a new
/// one for the next message.
///
/// For every input and every chunking, the result is bit-identical to the
/// one-shot [`sha256`](super::core::sha256) function.
pub struct Sha256 {
    /// Running compression state.
    state: [u32; 8],

    /// Partial block awaiting compression.
    buf: [u8; 64],

    /// Number of buffered bytes, always less than the block size.
    buf_len: usize,

    /// Total message length in bytes.
    ///
    /// Tracked wider than the 64-bit trailer so the counter itself cannot
    /// wrap; the trailer bound is enforced at finalization.
    message_len: u128,
}

impl Sha256 {
    /// Creates a hasher for a new message.
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            buf: [0u8; 64],
            buf_len: 0,
            message_len: 0,
        }
    }

    /// Absorbs the next chunk of the message.
    ///
    /// May be called any number of times, with chunks of any size
    /// (including empty). Every completed 512-bit block is compressed
    /// immediately; the remainder is buffered.
    pub fn update(&mut self, data: &[u8]) {
        self.message_len += data.len() as u128;

        let mut input = data;

        // Top up a buffered partial block first.
        if self.buf_len > 0 {
            let take = (Block::SIZE - self.buf_len).min(input.len());

            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
            self.buf_len += take;
            input = &input[take..];

            if self.buf_len < Block::SIZE {
                return;
            }

            let block = Block::from_bytes(self.buf);
            compress(&mut self.state, &expand(&block));
            self.buf_len = 0;
        }

        // Full blocks straight from the input.
        let mut blocks = input.chunks_exact(Block::SIZE);

        for chunk in blocks.by_ref() {
            let block = Block::from_bytes(chunk.try_into().unwrap());
            compress(&mut self.state, &expand(&block));
        }

        // Buffer whatever is left for the next call.
        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }

    /// Pads the buffered tail and returns the final digest.
    ///
    /// # Errors
    /// - `InputTooLarge` if the accumulated message bit length exceeds
    ///   2^64 - 1
    ///
    /// # Notes
    /// - Consuming `self` makes a second finalization unrepresentable; a
    ///   fresh hasher must be created for the next message.
    pub fn finalize(mut self) -> Result<Digest, Sha256Error> {
        let bit_len = bit_length(self.message_len)?;

        let mut tail = [0u8; Block::SIZE];
        tail[..self.buf_len].copy_from_slice(&self.buf[..self.buf_len]);
        tail[self.buf_len] = 0x80;

        // Same spill rule as the padder: a tail of more than 55 bytes
        // leaves no room for the length trailer in this block.
        if self.buf_len > 55 {
            compress(&mut self.state, &expand(&Block::from_bytes(tail)));
            tail = [0u8; Block::SIZE];
        }

        tail[56..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.state, &expand(&Block::from_bytes(tail)));

        Ok(Digest::from(self.state))
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
