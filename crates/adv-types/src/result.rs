use std::fmt;

use serde::{Deserialize, Serialize};

/// How the application completed an advance request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceStatus {
    #[default]
    Accepted,
    Rejected,
    Exception,
}

impl AdvanceStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for AdvanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Exception => write!(f, "exception"),
        }
    }
}

/// One processed transaction's effect, as recorded by the ledger.
///
/// Results are produced and ordered by the ledger; consumers only read them.
/// The `index` is the result's position in the stream and is unique and
/// strictly increasing. `raw_return` is the application's opaque return
/// payload and may be empty for no-op transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceResult {
    index: u64,
    #[serde(default)]
    status: AdvanceStatus,
    #[serde(with = "crate::wire::hex_bytes")]
    raw_return: Vec<u8>,
    #[serde(default)]
    logs: Vec<String>,
}

impl AdvanceResult {
    pub fn new(index: u64, status: AdvanceStatus, raw_return: Vec<u8>, logs: Vec<String>) -> Self {
        Self { index, status, raw_return, logs }
    }

    /// An accepted result carrying no return value.
    pub fn empty(index: u64) -> Self {
        Self::new(index, AdvanceStatus::Accepted, Vec::new(), Vec::new())
    }

    /// An accepted result carrying `raw_return`.
    pub fn accepted(index: u64, raw_return: Vec<u8>) -> Self {
        Self::new(index, AdvanceStatus::Accepted, raw_return, Vec::new())
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn status(&self) -> AdvanceStatus {
        self.status
    }

    pub fn raw_return(&self) -> &[u8] {
        &self.raw_return
    }

    pub fn has_return(&self) -> bool {
        !self.raw_return.is_empty()
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }
}
