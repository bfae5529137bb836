//! Hash algorithms exposed by the crate.
//!
//! Currently a single algorithm: SHA-256, implemented in pure Rust with
//! every stage of the computation (padding, schedule expansion, block
//! compression) available as its own function.

pub mod sha256;

/// Re-export of the one-shot SHA-256 function.
pub use sha256::core::sha256;

/// Re-export of the incremental SHA-256 hasher.
pub use sha256::stream::Sha256;

/// Re-export of the hashing error type.
pub use sha256::padding::Sha256Error;
