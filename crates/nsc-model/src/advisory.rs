use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a non-fatal notice raised while building or writing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// An SSN column was supplied but the inquiry does not allow it.
    SsnSuppressed,
    /// No ReturnRequestField column; responses will be hard to match.
    ReturnRequestFieldMissing,
    /// No SearchBeginDate column; the configured search date was used.
    SearchBeginDateDefaulted,
    /// A partial search date was expanded to `YYYYMMDD`.
    SearchDateExpanded,
    /// Rows without a first name were left out of the request.
    RowsDropped,
    /// The output directory does not exist.
    OutputPathMissing,
    /// The output file already exists and will be replaced.
    OutputFileOverwritten,
}

impl AdvisoryKind {
    /// Informational notices describe an automatic fix-up rather than a
    /// policy decision the caller may want to revisit.
    pub fn is_informational(self) -> bool {
        matches!(self, AdvisoryKind::SearchDateExpanded)
    }
}

/// A non-fatal notice collected alongside successful output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Emit the advisory through `tracing` at a level matching its kind.
    pub fn log(&self) {
        if self.kind.is_informational() {
            tracing::info!(kind = ?self.kind, "{}", self.message);
        } else {
            tracing::warn!(kind = ?self.kind, "{}", self.message);
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
