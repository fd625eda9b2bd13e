//! Return-payload codecs for advance results.
//!
//! An application return payload is framed as `[4-byte key][JSON body]`,
//! where the key identifies the payload type. A [`CodecRegistry`] maps keys
//! back to registered [`Payload`] types, and a [`StateDecoder`] turns a raw
//! result into the three-way [`Decoded`] outcome consumed by state
//! resolution.

pub mod decoded;
pub mod error;
pub mod key;
pub mod registry;

pub use decoded::{Decoded, StateDecoder};
pub use error::{CodecError, CodecResult};
pub use key::{CodecKey, Payload, KEY_LEN};
pub use registry::{encode_payload, CodecRegistry, DecodedReturn};
