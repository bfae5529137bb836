//! 256-bit message digest value type
//!
//! This module defines the fixed-size output type of the SHA-256 hash
//! function (`Digest`).
//!
//! It is designed as a **simple, explicit value type**, not as an integer
//! or general byte-container abstraction. Its primary use cases include:
//! - receiving ownership of a finished hash computation
//! - byte-level access for protocol and storage layers
//! - rendering the lowercase hexadecimal interchange form
//!
//! The internal representation is big-endian, which aligns with the
//! serialization order mandated by FIPS 180-4 and with human-readable
//! hexadecimal formatting.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit message digest.
///
/// The value is stored as 32 bytes in **big-endian** order, i.e. the most
/// significant byte of the hash state comes first, matching the order in
/// which SHA-256 output is serialized and displayed.
///
/// This type intentionally exposes only minimal functionality, favoring
/// clarity and correctness over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Length of a digest in bytes.
    pub const SIZE: usize = 32;

    /// Returns a reference to the digest bytes, most significant first.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the digest bytes by value, most significant first.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

/// Serializes the eight final 32-bit state words into a digest.
///
/// The words must be ordered from most significant to least significant;
/// each is written out in big-endian byte order.
impl From<[u32; 8]> for Digest {
    fn from(state: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state.into_iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    /// Formats the digest as 64 lowercase hexadecimal characters.
    ///
    /// The most significant byte is printed first. This is the interchange
    /// format expected by external callers (CLIs, password-hashing layers,
    /// checksum files).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}
