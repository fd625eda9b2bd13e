use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Length of the key prefix on every framed payload.
pub const KEY_LEN: usize = 4;

/// A type that can travel as an application return payload.
///
/// `TYPE_NAME` identifies the type across producer and consumer; both sides
/// derive the same [`CodecKey`] from it.
pub trait Payload: Serialize + DeserializeOwned + 'static {
    const TYPE_NAME: &'static str;

    fn codec_key() -> CodecKey {
        CodecKey::for_type_name(Self::TYPE_NAME)
    }
}

/// Four-byte payload type identifier: the leading bytes of the BLAKE3 hash
/// of the type name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodecKey([u8; KEY_LEN]);

impl CodecKey {
    pub fn for_type_name(type_name: &str) -> Self {
        let hash = blake3::hash(type_name.as_bytes());
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&hash.as_bytes()[..KEY_LEN]);
        Self(key)
    }

    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Split a framed payload into its key and body.
    pub fn split(payload: &[u8]) -> Option<(Self, &[u8])> {
        if payload.len() < KEY_LEN {
            return None;
        }
        let (head, body) = payload.split_at(KEY_LEN);
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(head);
        Some((Self(key), body))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Display for CodecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for CodecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodecKey({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_deterministic() {
        assert_eq!(CodecKey::for_type_name("AppState"), CodecKey::for_type_name("AppState"));
        assert_ne!(CodecKey::for_type_name("AppState"), CodecKey::for_type_name("AppAck"));
    }

    #[test]
    fn split_short_payload() {
        assert!(CodecKey::split(&[1, 2, 3]).is_none());
    }

    #[test]
    fn split_key_only() {
        let (key, body) = CodecKey::split(&[1, 2, 3, 4]).unwrap();
        assert_eq!(key, CodecKey::from_bytes([1, 2, 3, 4]));
        assert!(body.is_empty());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(CodecKey::from_bytes([0xde, 0xad, 0xbe, 0xef]).to_string(), "deadbeef");
    }
}
