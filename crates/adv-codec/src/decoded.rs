use std::marker::PhantomData;

use adv_types::AdvanceResult;

use crate::error::CodecResult;
use crate::key::Payload;
use crate::registry::{CodecRegistry, DecodedReturn};

/// Outcome of decoding one result's return payload against an expected
/// state type.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded<S> {
    /// The result carries no usable return value.
    Absent,
    /// The payload is the expected state type.
    State(S),
    /// The payload decoded to some other registered type.
    Mismatch(DecodedReturn),
}

impl<S> Decoded<S> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Decodes results into [`Decoded<S>`] using a codec registry.
pub struct StateDecoder<S> {
    registry: CodecRegistry,
    _state: PhantomData<fn() -> S>,
}

impl<S: Payload> StateDecoder<S> {
    /// Wrap `registry`, registering `S` if it is not already present.
    pub fn new(mut registry: CodecRegistry) -> CodecResult<Self> {
        registry.register::<S>()?;
        Ok(Self {
            registry,
            _state: PhantomData,
        })
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Classify `result`. Payloads that cannot be decoded at all are
    /// reported as [`Decoded::Absent`].
    pub fn decode(&self, result: &AdvanceResult) -> Decoded<S> {
        let decoded = match self.registry.decode(result.raw_return()) {
            Ok(Some(decoded)) => decoded,
            Ok(None) => return Decoded::Absent,
            Err(e) => {
                tracing::warn!(index = result.index(), error = %e, "failed to decode return");
                return Decoded::Absent;
            }
        };

        if decoded.type_name != S::TYPE_NAME {
            return Decoded::Mismatch(decoded);
        }

        match serde_json::from_value::<S>(decoded.value) {
            Ok(state) => Decoded::State(state),
            Err(e) => {
                tracing::warn!(index = result.index(), error = %e, "failed to decode state");
                Decoded::Absent
            }
        }
    }
}
