//! Payload types the application exchanges with the ledger.

use adv_codec::{CodecRegistry, CodecResult, Payload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accumulated application state, returned by state-changing advances.
///
/// Field names and nesting are the application's own and are printed as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppState(pub Map<String, Value>);

impl Payload for AppState {
    const TYPE_NAME: &'static str = "AppState";
}

/// Envelope for inputs submitted to the application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppInput {
    pub kind: String,
    #[serde(default)]
    pub body: Value,
}

impl Payload for AppInput {
    const TYPE_NAME: &'static str = "AppInput";
}

/// Every payload type the application registers.
pub fn codecs() -> CodecResult<CodecRegistry> {
    CodecRegistry::new().with::<AppState>()?.with::<AppInput>()
}
