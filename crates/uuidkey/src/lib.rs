//! Short, sortable, case-insensitive keys for UUIDs, and prefixed API keys
//! built on top of them.
//!
//! This crate provides functionality for:
//! - Encoding a UUID into a 28-character (or 31 with hyphens) Crockford
//!   Base32 key, and decoding it back
//! - Generating random entropy suffixes of configurable strength
//! - Assembling and parsing self-verifying API keys with a CRC-32 checksum
//!
//! # Key Format
//!
//! A key is four 7-character Crockford Base32 segments, one per 32-bit group
//! of the UUID, joined with or without hyphens:
//!
//! `38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X` or `38QARV01ET0G6Z2CJD9VA2ZZAR0X`
//!
//! An API key wraps a compact key together with a prefix, an entropy suffix,
//! and a checksum over the preceding parts:
//!
//! `{prefix}_{key}{entropy}_{checksum}`
//!
//! # Example
//!
//! ```rust
//! use uuid::Uuid;
//! use uuidkey::{Key, KeyFormat, KeyOptions};
//!
//! let uuid = Uuid::parse_str("d1756360-5da0-40df-9926-a76abff5601d").unwrap();
//!
//! let key = Key::encode(&uuid, KeyFormat::Hyphenated);
//! assert_eq!(key.as_str(), "38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X");
//! assert_eq!(key.uuid().unwrap(), uuid);
//!
//! let api_key = uuidkey::new_api_key("myapp", &uuid, &KeyOptions::default()).unwrap();
//! let parsed = uuidkey::parse_api_key(&api_key.to_string()).unwrap();
//! assert_eq!(parsed, api_key);
//! ```

mod apikey;
mod config;
mod crc32;
mod entropy;
mod error;
mod hasher;
mod hex;
mod key;
mod parse;

// Public re-exports
pub use apikey::{ApiKey, generate, generate_uuid, new_api_key};
pub use config::KeyOptions;
pub use entropy::{EntropyGenerator, EntropyStrength};
pub use error::{Result, UuidKeyError};
pub use hasher::{Blake2bHasher, Hasher};
pub use key::{Key, KeyFormat, encode_key};
pub use parse::parse_api_key;
