use serde::Serialize;

use crate::error::{RelayError, RelayErrorKind};

/// What happened to a recorded sample after it was appended.
///
/// None of these outcomes affect ledger membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RelayStatus {
    Relayed,
    Failed { kind: RelayErrorKind, reason: String },
    /// No webhook configured for this session.
    Skipped,
}

impl RelayStatus {
    #[must_use]
    pub fn from_error(err: &RelayError) -> Self {
        RelayStatus::Failed {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    #[must_use]
    pub fn is_relayed(&self) -> bool {
        matches!(self, RelayStatus::Relayed)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, RelayStatus::Failed { .. })
    }

    /// Message shown to the researcher after a submission.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RelayStatus::Relayed => "Sample saved and sent to the shared spreadsheet.".to_string(),
            RelayStatus::Failed { reason, .. } => format!(
                "Sample saved locally, but sending it to the shared spreadsheet failed: {reason}"
            ),
            RelayStatus::Skipped => {
                "Sample saved locally; no spreadsheet webhook is configured.".to_string()
            }
        }
    }
}
