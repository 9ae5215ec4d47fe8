//! Submission coordinator: the state machine governing report finalization.
//!
//! Holds the in-progress report, persists it through [`DraftStore`], and
//! orchestrates validate -> persist-or-send -> clear-draft. The external
//! reporting backend is abstracted behind [`Transmit`]; connectivity is
//! consulted only at submit time.

use shared_types::{HazardReport, MediaAttachment, MAX_ATTACHMENTS};
use thiserror::Error;

use crate::draft::{DraftStore, KeyValueStore, StorageError};
use crate::validation::{validate, ValidationErrors};

/// Where the report is in its lifecycle. `Accepted` and `Discarded` are
/// terminal; the caller should navigate away on reaching either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Accepted,
    Discarded,
}

/// Receipt returned by the reporting collaborator on a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub report_id: String,
}

#[derive(Debug, Clone, Error)]
pub enum TransmitError {
    /// Treated identically to any other transmission failure: the draft is
    /// retained and the user is asked to retry.
    #[error("transmission timed out")]
    TimedOut,

    #[error("transmission failed: {0}")]
    Failed(String),
}

/// The external reporting backend, out of scope here beyond this contract.
#[allow(async_fn_in_trait)]
pub trait Transmit {
    async fn transmit(&self, report: &HazardReport) -> Result<Ack, TransmitError>;
}

/// What a `submit()` call resolved to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; per-field errors, no side effects performed.
    Rejected(ValidationErrors),
    /// Offline: the report was persisted as a draft to send later.
    Queued,
    /// Transmitted and acknowledged; the draft slot has been cleared.
    Sent(Ack),
    /// Transmission failed or timed out; the draft is retained.
    TransmitFailed(TransmitError),
    /// The draft could not be written while queueing offline.
    PersistFailed(StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attachment limit of {MAX_ATTACHMENTS} files reached")]
pub struct AttachmentError;

/// One form instance editing the single draft slot.
///
/// Concurrent tabs race last-writer-wins on that slot; there is deliberately
/// no cross-tab guard.
pub struct ReportSession<S: KeyValueStore> {
    report: HazardReport,
    drafts: DraftStore<S>,
    phase: Phase,
}

impl<S: KeyValueStore> ReportSession<S> {
    /// Open a session, resuming a previously saved draft when one loads.
    pub fn new(store: S) -> Self {
        let drafts = DraftStore::new(store);
        let report = drafts.load().unwrap_or_default();
        Self {
            report,
            drafts,
            phase: Phase::Editing,
        }
    }

    pub fn report(&self) -> &HazardReport {
        &self.report
    }

    /// Field-by-field mutation of the in-progress report.
    pub fn report_mut(&mut self) -> &mut HazardReport {
        &mut self.report
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    /// Attach media metadata, capped at [`MAX_ATTACHMENTS`] entries.
    pub fn add_attachment(&mut self, attachment: MediaAttachment) -> Result<(), AttachmentError> {
        if self.report.files.len() >= MAX_ATTACHMENTS {
            return Err(AttachmentError);
        }
        self.report.files.push(attachment);
        Ok(())
    }

    /// Remove an attachment by id; returns whether anything was removed.
    pub fn remove_attachment(&mut self, id: &str) -> bool {
        let before = self.report.files.len();
        self.report.files.retain(|f| f.id != id);
        self.report.files.len() != before
    }

    /// Persist the current state verbatim. Never validates, never changes
    /// phase; a storage failure is surfaced without touching the in-memory
    /// report.
    pub fn save_draft(&mut self) -> Result<(), StorageError> {
        self.drafts.save(&self.report)
    }

    /// Run the finalization state machine.
    ///
    /// Validation failure rejects with the full error set and no side
    /// effects. Offline, the report is persisted and queued instead of
    /// transmitted. Online, a snapshot is persisted before the send so an
    /// abandoned in-flight submission can never lose data; the slot is
    /// cleared only on an acknowledged send.
    pub async fn submit<T: Transmit>(&mut self, transmitter: &T, online: bool) -> SubmitOutcome {
        if self.phase != Phase::Editing {
            return SubmitOutcome::TransmitFailed(TransmitError::Failed(
                "report is no longer editable".to_string(),
            ));
        }

        let errors = validate(&self.report);
        if !errors.is_empty() {
            return SubmitOutcome::Rejected(errors);
        }

        if !online {
            return match self.drafts.save(&self.report) {
                Ok(()) => SubmitOutcome::Queued,
                Err(e) => SubmitOutcome::PersistFailed(e),
            };
        }

        if let Err(e) = self.drafts.save(&self.report) {
            // Best effort; the send itself still decides the outcome
            tracing::warn!("failed to snapshot draft before transmission: {e}");
        }

        match transmitter.transmit(&self.report).await {
            Ok(ack) => {
                if let Err(e) = self.drafts.clear() {
                    tracing::warn!("failed to clear draft after acknowledged send: {e}");
                }
                self.phase = Phase::Accepted;
                SubmitOutcome::Sent(ack)
            }
            Err(e) => SubmitOutcome::TransmitFailed(e),
        }
    }

    /// Clear the draft and end the session without transmitting.
    ///
    /// Destructive; callers must have received the user's affirmative
    /// confirmation before invoking this. The phase moves to `Discarded`
    /// only once the slot is actually cleared.
    pub fn discard(&mut self) -> Result<(), StorageError> {
        self.drafts.clear()?;
        self.phase = Phase::Discarded;
        Ok(())
    }
}
