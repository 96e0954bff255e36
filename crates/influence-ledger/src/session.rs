//! One researcher's questionnaire session.
//!
//! A `Session` is created empty when the researcher starts and dropped when
//! they finish. Every submission goes `pending -> appended`, then optionally
//! `relayed` or relay-failed; the relay outcome never changes what the
//! ledger holds.

use std::sync::Arc;

use influence_core::{CollectionWindow, IntakeError, Sample, SampleForm, SessionContext};
use influence_relay::{RelayStatus, RelayTarget};

use crate::error::LedgerError;
use crate::export::CsvExport;
use crate::ledger::Ledger;

/// A form that passed intake and is now in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub position: usize,
    pub sample: Sample,
}

/// Result of a full submission: local append plus relay attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub position: usize,
    pub relay: RelayStatus,
}

#[derive(Default)]
pub struct Session {
    ledger: Ledger,
    context: SessionContext,
    window: CollectionWindow,
    relay: Option<Arc<RelayTarget>>,
}

impl Session {
    /// An empty session over the study window with relaying disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: CollectionWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_relay(mut self, target: RelayTarget) -> Self {
        self.relay = Some(Arc::new(target));
        self
    }

    pub fn set_context(&mut self, context: SessionContext) {
        self.context = context;
    }

    /// Shared handle to the relay target, so a caller can relay after
    /// releasing its lock on the session.
    #[must_use]
    pub fn relay_target(&self) -> Option<Arc<RelayTarget>> {
        self.relay.clone()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Runs intake on `form` and appends the resulting sample.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError`] when the form violates a collection
    /// constraint; the ledger is left unchanged.
    pub fn accept(&mut self, form: SampleForm) -> Result<Accepted, IntakeError> {
        let sample = match form.with_context(&self.context).into_sample(&self.window) {
            Ok(sample) => sample,
            Err(err) => {
                tracing::warn!(error = %err, "sample rejected at intake");
                return Err(err);
            }
        };
        let position = self.ledger.append(sample.clone());
        tracing::info!(
            position,
            country = %sample.country,
            category = %sample.media_category,
            "sample recorded"
        );
        Ok(Accepted { position, sample })
    }

    /// Accepts `form` and then relays the new sample, if a target is set.
    ///
    /// A failed relay is reported in [`Submission::relay`]; the sample stays
    /// in the ledger either way.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError`] only when intake rejects the form.
    pub async fn submit(&mut self, form: SampleForm) -> Result<Submission, IntakeError> {
        let accepted = self.accept(form)?;
        let relay = relay_accepted(self.relay.as_deref(), &accepted.sample).await;
        Ok(Submission {
            position: accepted.position,
            relay,
        })
    }

    /// # Errors
    ///
    /// See [`Ledger::export_csv`].
    pub fn export_csv(&self) -> Result<CsvExport, LedgerError> {
        self.ledger.export_csv()
    }
}

/// Relays `sample` through `target`, or reports [`RelayStatus::Skipped`]
/// when there is none.
pub async fn relay_accepted(target: Option<&RelayTarget>, sample: &Sample) -> RelayStatus {
    match target {
        Some(target) => target.deliver(sample).await,
        None => RelayStatus::Skipped,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
