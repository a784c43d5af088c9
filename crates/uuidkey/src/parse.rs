//! API key parsing and validation.

use crate::apikey::{ApiKey, CHECKSUM_LEN};
use crate::error::{Result, UuidKeyError};
use crate::key::{KEY_LEN_COMPACT, Key};

/// Parses an API key string of the form `{prefix}_{key}{entropy}_{checksum}`.
///
/// The first 28 characters of the middle part are validated as a key; the
/// remainder is taken as entropy verbatim. The checksum field must be 8
/// characters of `[0-9A-Z]` and must match the checksum recomputed from the
/// other fields. On success the returned key renders back to the exact
/// input string.
pub fn parse_api_key(input: &str) -> Result<ApiKey> {
    if input.trim().is_empty() {
        return Err(UuidKeyError::InvalidArgument(
            "API key cannot be empty or only whitespace".to_string(),
        ));
    }

    let parts: Vec<&str> = input.split('_').collect();
    if parts.len() != 3 {
        return Err(UuidKeyError::InvalidArgument(format!(
            "expected 3 parts separated by '_', got {}",
            parts.len()
        )));
    }

    let prefix = parts[0];
    if prefix.is_empty() {
        return Err(UuidKeyError::InvalidArgument(
            "API key prefix cannot be empty".to_string(),
        ));
    }

    let body = parts[1];
    let Some((key_part, entropy)) = body.split_at_checked(KEY_LEN_COMPACT) else {
        return Err(UuidKeyError::InvalidKey(format!(
            "key part must be at least {KEY_LEN_COMPACT} characters"
        )));
    };
    let key = Key::parse(key_part)?;

    let supplied = parts[2];
    if supplied.len() != CHECKSUM_LEN || !supplied.bytes().all(is_approved) {
        return Err(UuidKeyError::InvalidChecksumFormat);
    }

    let api_key = ApiKey::assemble(prefix.to_string(), key, entropy.to_string());
    if api_key.checksum() != supplied {
        return Err(UuidKeyError::ChecksumMismatch {
            expected: api_key.checksum().to_string(),
            got: supplied.to_string(),
        });
    }

    Ok(api_key)
}

fn is_approved(byte: u8) -> bool {
    byte.is_ascii_digit() || byte.is_ascii_uppercase()
}
