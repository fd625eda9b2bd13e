use thiserror::Error;

use crate::key::CodecKey;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("payload too short: {len} bytes (need at least {min})")]
    ShortPayload { len: usize, min: usize },

    #[error("no codec registered for key {0}")]
    UnknownKey(CodecKey),

    #[error("codec key {key} already registered for {existing}, cannot register {new}")]
    DuplicateKey {
        key: CodecKey,
        existing: &'static str,
        new: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error for {type_name}: {reason}")]
    Deserialization {
        type_name: &'static str,
        reason: String,
    },
}

pub type CodecResult<T> = Result<T, CodecError>;
