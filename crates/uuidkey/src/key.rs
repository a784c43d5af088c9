//! Bijective mapping between a UUID and its Crockford Base32 key.

use std::fmt;

use uuid::Uuid;

use crate::config::KeyOptions;
use crate::error::{Result, UuidKeyError};
use crate::hex;

/// Length of each Base32 segment.
const SEGMENT_LEN: usize = 7;

/// Key length without hyphens (four segments).
pub(crate) const KEY_LEN_COMPACT: usize = SEGMENT_LEN * 4;

/// Key length with hyphens between segments.
pub(crate) const KEY_LEN_HYPHENATED: usize = SEGMENT_LEN * 4 + 3;

/// Byte offsets where hyphens must sit in the hyphenated form.
const HYPHEN_OFFSETS: [usize; 3] = [7, 15, 23];

/// Rendering of a key as four segments joined with or without hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// `XXXXXXX-XXXXXXX-XXXXXXX-XXXXXXX` (31 characters).
    Hyphenated,
    /// `XXXXXXXXXXXXXXXXXXXXXXXXXXXX` (28 characters).
    Compact,
}

/// A validated Crockford Base32 key encoding one UUID.
///
/// The format is recorded because it drives segment-splitting on decode;
/// both forms decode to the same UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    value: String,
    format: KeyFormat,
}

impl Key {
    /// Encodes `uuid` into a key.
    ///
    /// The canonical 36-character form is partitioned into four 32-bit hex
    /// groups following the UUID field layout, each group is Base32-encoded
    /// and left-padded to seven characters, and the segments are joined
    /// according to `format`.
    pub fn encode(uuid: &Uuid, format: KeyFormat) -> Key {
        let text = uuid.as_hyphenated().to_string();
        let segments = [
            encode_group(&text[0..8]),
            encode_group(&[&text[9..13], &text[14..18]].concat()),
            encode_group(&[&text[19..23], &text[24..28]].concat()),
            encode_group(&text[28..36]),
        ];

        let value = match format {
            KeyFormat::Hyphenated => segments.join("-"),
            KeyFormat::Compact => segments.concat(),
        };
        Key { value, format }
    }

    /// Parses and validates a key string, inferring its format from length.
    pub fn parse(input: &str) -> Result<Key> {
        if !input.is_ascii() {
            return Err(UuidKeyError::InvalidKey(
                "key contains non-ASCII characters".to_string(),
            ));
        }

        let format = match input.len() {
            KEY_LEN_COMPACT => KeyFormat::Compact,
            KEY_LEN_HYPHENATED => KeyFormat::Hyphenated,
            other => {
                return Err(UuidKeyError::InvalidKey(format!(
                    "length must be {KEY_LEN_COMPACT} or {KEY_LEN_HYPHENATED}, got {other}"
                )));
            }
        };

        let key = Key {
            value: input.to_string(),
            format,
        };
        if !key.is_valid() {
            return Err(UuidKeyError::InvalidKey(
                "segments must be uppercase Crockford Base32 with hyphens at offsets 7, 15 and 23"
                    .to_string(),
            ));
        }
        Ok(key)
    }

    /// Whether the key has the correct shape and alphabet.
    pub fn is_valid(&self) -> bool {
        let bytes = self.value.as_bytes();
        match self.format {
            KeyFormat::Hyphenated => {
                bytes.len() == KEY_LEN_HYPHENATED
                    && HYPHEN_OFFSETS.iter().all(|&i| bytes[i] == b'-')
                    && self.segments().iter().all(|s| is_valid_segment(s))
            }
            KeyFormat::Compact => {
                bytes.len() == KEY_LEN_COMPACT
                    && self.segments().iter().all(|s| is_valid_segment(s))
            }
        }
    }

    /// Decodes the key back to its UUID.
    ///
    /// Fails with [`UuidKeyError::DecodeFailure`] when the key is invalid or
    /// a segment does not reconstruct a 32-bit group.
    pub fn uuid(&self) -> Result<Uuid> {
        if !self.is_valid() {
            return Err(UuidKeyError::DecodeFailure);
        }

        let mut digits = String::with_capacity(32);
        for segment in self.segments() {
            let value = crockford::decode(segment).map_err(|_| UuidKeyError::DecodeFailure)?;
            let group = hex::to_hex(value);
            // Leading zeros are significant; a wider group means the segment
            // overflowed 32 bits.
            if group.len() != 8 {
                return Err(UuidKeyError::DecodeFailure);
            }
            digits.push_str(&group);
        }

        let canonical = format!(
            "{}-{}-{}-{}-{}",
            &digits[0..8],
            &digits[8..12],
            &digits[12..16],
            &digits[16..20],
            &digits[20..32],
        );
        Uuid::parse_str(&canonical).map_err(|_| UuidKeyError::DecodeFailure)
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// How the key is rendered.
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    fn segments(&self) -> [&str; 4] {
        let v = self.value.as_str();
        match self.format {
            KeyFormat::Compact => [&v[0..7], &v[7..14], &v[14..21], &v[21..28]],
            KeyFormat::Hyphenated => [&v[0..7], &v[8..15], &v[16..23], &v[24..31]],
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Encodes `uuid` honoring the hyphen setting in `options`.
pub fn encode_key(uuid: &Uuid, options: &KeyOptions) -> Key {
    Key::encode(uuid, options.key_format())
}

fn encode_group(hex_digits: &str) -> String {
    let value = hex::from_hex(hex_digits).expect("canonical UUID text is hex");
    let encoded = crockford::encode(value);
    format!("{encoded:0>SEGMENT_LEN$}")
}

fn is_valid_segment(segment: &str) -> bool {
    segment.len() == SEGMENT_LEN
        && segment.bytes().all(|b| {
            (b.is_ascii_digit() || b.is_ascii_uppercase())
                && !matches!(b, b'I' | b'L' | b'O' | b'U')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_UUID: &str = "d1756360-5da0-40df-9926-a76abff5601d";
    const SAMPLE_KEY_HYPHENATED: &str = "38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X";
    const SAMPLE_KEY_COMPACT: &str = "38QARV01ET0G6Z2CJD9VA2ZZAR0X";

    fn sample_uuid() -> Uuid {
        Uuid::parse_str(SAMPLE_UUID).unwrap()
    }

    #[test]
    fn test_encode_hyphenated() {
        let key = Key::encode(&sample_uuid(), KeyFormat::Hyphenated);
        assert_eq!(key.as_str(), SAMPLE_KEY_HYPHENATED);
        assert_eq!(key.format(), KeyFormat::Hyphenated);
    }

    #[test]
    fn test_encode_compact() {
        let key = Key::encode(&sample_uuid(), KeyFormat::Compact);
        assert_eq!(key.as_str(), SAMPLE_KEY_COMPACT);
        assert_eq!(key.format(), KeyFormat::Compact);
    }

    #[test]
    fn test_decode_both_formats() {
        let hyphenated = Key::parse(SAMPLE_KEY_HYPHENATED).unwrap();
        assert_eq!(hyphenated.uuid().unwrap(), sample_uuid());

        let compact = Key::parse(SAMPLE_KEY_COMPACT).unwrap();
        assert_eq!(compact.uuid().unwrap(), sample_uuid());
    }

    #[test]
    fn test_round_trip_preserves_leading_zeros() {
        let uuid = Uuid::parse_str("00000000-0001-0002-0003-000000000004").unwrap();
        for format in [KeyFormat::Hyphenated, KeyFormat::Compact] {
            let key = Key::encode(&uuid, format);
            assert_eq!(key.uuid().unwrap(), uuid);
        }
    }

    #[test]
    fn test_round_trip_extreme_values() {
        for text in [
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ] {
            let uuid = Uuid::parse_str(text).unwrap();
            let key = Key::encode(&uuid, KeyFormat::Compact);
            assert_eq!(key.uuid().unwrap(), uuid);
        }
    }

    #[test]
    fn test_parse_round_trips_to_same_text() {
        for text in [SAMPLE_KEY_HYPHENATED, SAMPLE_KEY_COMPACT] {
            let key = Key::parse(text).unwrap();
            assert_eq!(key.to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            Key::parse("38QARV0"),
            Err(UuidKeyError::InvalidKey(_))
        ));
        assert!(matches!(
            Key::parse(&format!("{SAMPLE_KEY_COMPACT}0")),
            Err(UuidKeyError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_rejects_misplaced_hyphens() {
        // 31 characters, but a hyphen off by one.
        let shifted = "38QARV01-ET0G6Z-2CJD9VA-2ZZAR0X";
        assert!(matches!(
            Key::parse(shifted),
            Err(UuidKeyError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_rejects_disallowed_characters() {
        for c in ['I', 'L', 'O', 'U'] {
            let mut tampered = SAMPLE_KEY_COMPACT.to_string();
            tampered.replace_range(0..1, &c.to_string());
            assert!(matches!(
                Key::parse(&tampered),
                Err(UuidKeyError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        assert!(matches!(
            Key::parse(&SAMPLE_KEY_COMPACT.to_lowercase()),
            Err(UuidKeyError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_ascii() {
        // 28 bytes, but not sliceable at segment boundaries.
        let input = "é".repeat(14);
        assert!(matches!(
            Key::parse(&input),
            Err(UuidKeyError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_decode_rejects_segment_overflow() {
        // "ZZZZZZZ" passes the alphabet check but decodes above u32::MAX.
        let key = Key::parse(&"Z".repeat(28)).unwrap();
        assert!(matches!(key.uuid(), Err(UuidKeyError::DecodeFailure)));
    }

    #[test]
    fn test_encode_key_honors_options() {
        let with_hyphens = encode_key(&sample_uuid(), &KeyOptions::new().with_hyphens(true));
        assert_eq!(with_hyphens.as_str(), SAMPLE_KEY_HYPHENATED);

        let compact = encode_key(&sample_uuid(), &KeyOptions::default());
        assert_eq!(compact.as_str(), SAMPLE_KEY_COMPACT);
    }
}
