//! API key assembly.

use std::fmt;

use uuid::Uuid;

use crate::config::KeyOptions;
use crate::crc32;
use crate::entropy::EntropyGenerator;
use crate::error::{Result, UuidKeyError};
use crate::hex;
use crate::key::{Key, KeyFormat};

/// Required length of the checksum field.
pub(crate) const CHECKSUM_LEN: usize = 8;

/// A prefixed API key: `{prefix}_{key}{entropy}_{checksum}`.
///
/// The checksum is a pure function of the other three fields and is
/// recomputed whenever an `ApiKey` is assembled; it cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    prefix: String,
    key: Key,
    entropy: String,
    checksum: String,
}

impl ApiKey {
    /// Assembles an API key and computes its checksum.
    pub(crate) fn assemble(prefix: String, key: Key, entropy: String) -> Self {
        let checksum = compute_checksum(&prefix, &key, &entropy);
        Self {
            prefix,
            key,
            entropy,
            checksum,
        }
    }

    /// The prefix portion.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The embedded UUID key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The entropy suffix.
    pub fn entropy(&self) -> &str {
        &self.entropy
    }

    /// The uppercase hex CRC-32 checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Decodes the UUID embedded in the key portion.
    pub fn uuid(&self) -> Result<Uuid> {
        self.key.uuid()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}{}_{}",
            self.prefix, self.key, self.entropy, self.checksum
        )
    }
}

/// Creates an API key for `uuid` under `prefix`.
///
/// The key portion is always encoded without hyphens; entropy strength
/// comes from `options`. Fails with [`UuidKeyError::InvalidArgument`] when
/// the prefix is empty or all-whitespace.
pub fn new_api_key(prefix: &str, uuid: &Uuid, options: &KeyOptions) -> Result<ApiKey> {
    if prefix.trim().is_empty() {
        return Err(UuidKeyError::InvalidArgument(
            "prefix cannot be empty or only whitespace".to_string(),
        ));
    }

    let key = Key::encode(uuid, KeyFormat::Compact);
    let entropy = EntropyGenerator::new().generate(options.strength);
    Ok(ApiKey::assemble(prefix.to_string(), key, entropy))
}

/// Creates an API key for a freshly generated UUID.
pub fn generate(prefix: &str, options: &KeyOptions) -> Result<ApiKey> {
    new_api_key(prefix, &generate_uuid(), options)
}

/// Generates a new time-ordered (version 7) UUID.
pub fn generate_uuid() -> Uuid {
    Uuid::now_v7()
}

pub(crate) fn compute_checksum(prefix: &str, key: &Key, entropy: &str) -> String {
    let material = format!("{prefix}_{key}{entropy}");
    hex::to_hex(u64::from(crc32::checksum(material.as_bytes()))).to_uppercase()
}
