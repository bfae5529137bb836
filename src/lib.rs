//! SHA-256 digest primitive
//!
//! This crate provides a self-contained, pure-Rust implementation of the
//! SHA-256 cryptographic hash function as specified in FIPS 180-4.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. The
//! implementation is dependency-free, explicit in its semantics, and
//! suitable as a building block for higher-level constructions such as
//! content addressing, integrity checking, and password-hashing layers.
//!
//! # Module overview
//!
//! - `digest`
//!   The fixed-size 256-bit digest value type. It owns the 32 output
//!   bytes, exposes them in big-endian order, and formats itself as the
//!   64-character lowercase hexadecimal string that external callers
//!   exchange.
//!
//! - `hash`
//!   The SHA-256 algorithm itself: message padding, message-schedule
//!   expansion, and the 64-round block compression function, exposed
//!   through a one-shot function and an incremental hasher.
//!
//! # Design goals
//!
//! - No heap allocations in the compression path (only message padding
//!   allocates)
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics: all word arithmetic is wrapping by
//!   construction, never accidental
//! - Clear separation between the algorithm stages so each can be
//!   inspected and tested on its own
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled hashing
//! foundation with no external surface beyond its two public modules.

pub mod digest;
pub mod hash;
