use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::key::{CodecKey, Payload, KEY_LEN};

type DecodeFn = fn(&[u8]) -> CodecResult<Value>;

struct Entry {
    type_name: &'static str,
    decode: DecodeFn,
}

/// A payload decoded by its registered codec, not yet narrowed to a
/// concrete Rust type.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedReturn {
    pub type_name: &'static str,
    pub value: Value,
}

impl fmt::Display for DecodedReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Maps codec keys to the payload types an application exchanges.
#[derive(Default)]
pub struct CodecRegistry {
    entries: HashMap<CodecKey, Entry>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`. Registering the same type twice is a no-op; a key
    /// collision with a different type name is an error.
    pub fn register<T: Payload>(&mut self) -> CodecResult<()> {
        let key = T::codec_key();
        if let Some(existing) = self.entries.get(&key) {
            if existing.type_name == T::TYPE_NAME {
                return Ok(());
            }
            return Err(CodecError::DuplicateKey {
                key,
                existing: existing.type_name,
                new: T::TYPE_NAME,
            });
        }
        self.entries.insert(
            key,
            Entry {
                type_name: T::TYPE_NAME,
                decode: decode_body::<T>,
            },
        );
        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    pub fn with<T: Payload>(mut self) -> CodecResult<Self> {
        self.register::<T>()?;
        Ok(self)
    }

    pub fn contains<T: Payload>(&self) -> bool {
        self.entries.contains_key(&T::codec_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a framed payload. An empty payload carries no value and
    /// yields `Ok(None)`.
    pub fn decode(&self, payload: &[u8]) -> CodecResult<Option<DecodedReturn>> {
        if payload.is_empty() {
            return Ok(None);
        }
        let (key, body) = CodecKey::split(payload).ok_or(CodecError::ShortPayload {
            len: payload.len(),
            min: KEY_LEN,
        })?;
        let entry = self.entries.get(&key).ok_or(CodecError::UnknownKey(key))?;
        let value = (entry.decode)(body)?;
        Ok(Some(DecodedReturn {
            type_name: entry.type_name,
            value,
        }))
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("CodecRegistry").field("types", &names).finish()
    }
}

/// Frame `value` as `[key][JSON body]`.
pub fn encode_payload<T: Payload>(value: &T) -> CodecResult<Vec<u8>> {
    let body = serde_json::to_vec(value).map_err(|e| CodecError::Serialization(e.to_string()))?;
    let mut buf = Vec::with_capacity(KEY_LEN + body.len());
    buf.extend_from_slice(T::codec_key().as_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

fn decode_body<T: Payload>(body: &[u8]) -> CodecResult<Value> {
    let typed: T = serde_json::from_slice(body).map_err(|e| CodecError::Deserialization {
        type_name: T::TYPE_NAME,
        reason: e.to_string(),
    })?;
    serde_json::to_value(&typed).map_err(|e| CodecError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Tally {
        count: u64,
    }

    impl Payload for Tally {
        const TYPE_NAME: &'static str = "Tally";
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    struct Counter(u64);

    impl Payload for Counter {
        const TYPE_NAME: &'static str = "Counter";
    }

    fn registry() -> CodecRegistry {
        CodecRegistry::new().with::<Tally>().unwrap().with::<Counter>().unwrap()
    }

    #[test]
    fn decode_registered_type() {
        let payload = encode_payload(&Tally { count: 3 }).unwrap();
        let decoded = registry().decode(&payload).unwrap().unwrap();
        assert_eq!(decoded.type_name, "Tally");
        assert_eq!(decoded.value, json!({"count": 3}));
    }

    #[test]
    fn empty_payload_is_none() {
        assert!(registry().decode(&[]).unwrap().is_none());
    }

    #[test]
    fn short_payload_is_error() {
        let err = registry().decode(&[1, 2]).unwrap_err();
        assert!(matches!(err, CodecError::ShortPayload { len: 2, min: 4 }));
    }

    #[test]
    fn unknown_key_is_error() {
        let mut payload = CodecKey::for_type_name("Nope").as_bytes().to_vec();
        payload.extend_from_slice(b"{}");
        let err = registry().decode(&payload).unwrap_err();
        assert!(matches!(err, CodecError::UnknownKey(_)));
    }

    #[test]
    fn malformed_body_is_error() {
        let mut payload = Tally::codec_key().as_bytes().to_vec();
        payload.extend_from_slice(b"{\"count\": \"three\"}");
        let err = registry().decode(&payload).unwrap_err();
        assert!(matches!(err, CodecError::Deserialization { type_name: "Tally", .. }));
    }

    #[test]
    fn decoded_return_displays_value() {
        let payload = encode_payload(&Counter(42)).unwrap();
        let decoded = registry().decode(&payload).unwrap().unwrap();
        assert_eq!(decoded.to_string(), "42");
    }

    #[test]
    fn reregistering_same_type_is_noop() {
        let mut reg = registry();
        reg.register::<Tally>().unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn debug_lists_types() {
        let dbg = format!("{:?}", registry());
        assert!(dbg.contains("Counter"));
        assert!(dbg.contains("Tally"));
    }
}
