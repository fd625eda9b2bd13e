//! `0x`-prefixed hex encoding used for payload blobs on the wire.

use crate::error::TypeError;

/// Hex-encode bytes with a `0x` prefix.
pub fn encode_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Parse a `0x`-prefixed hex string. `"0x"` decodes to an empty payload.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, TypeError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| TypeError::MissingPrefix(s.to_string()))?;
    hex::decode(digits).map_err(|e| TypeError::InvalidHex(e.to_string()))
}

/// Serde adapter for `Vec<u8>` fields carried as `0x` hex strings.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_hex(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode_hex(&s).map_err(serde::de::Error::custom)
    }
}
