//! # Murmur3 Hashes
//!
//! Rust implementation of the 32-bit variant of Murmur3, a fast seeded
//! non-cryptographic hash function with strong avalanche behavior and
//! uniform bucket spread. It is intended for deterministic key
//! fingerprinting in higher-level structures (hash tables, filters,
//! indexes), not for any security purpose: it offers no resistance to
//! deliberately constructed collisions.
//!
//! Every entry point is a pure function over one complete input buffer;
//! there is no streaming engine and no shared state, so concurrent use
//! needs no synchronization.
//!
//! ```
//! use murmur3_hashes::murmur3_32;
//!
//! let fingerprint = murmur3_32::Hash::hash(b"some key");
//! assert_eq!(fingerprint, murmur3_32::Hash::hash(b"some key"));
//!
//! // Seeded variant, e.g. for a family of independent hash functions.
//! let h0 = murmur3_32::hash_to_u32_with_seed(b"test", 0);
//! let h1 = murmur3_32::hash_to_u32_with_seed(b"test", 0x9747b28c);
//! assert_eq!(h0, 0xba6bd213);
//! assert_eq!(h1, 0x704b81dc);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod murmur3_32;

pub use murmur3_32::{DEFAULT_SEED, NULL_HASHCODE};
