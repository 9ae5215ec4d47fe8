//! Draft lifecycle engine for hazard reports.
//!
//! Governs how an in-progress report is validated, locally persisted, and
//! submitted, reconciled with connectivity. Platform concerns (browser
//! storage, network events, the actual reporting backend) are injected
//! through the [`draft::KeyValueStore`], [`connectivity::OnlineSignal`], and
//! [`session::Transmit`] seams so the engine stays host-agnostic.

pub mod connectivity;
pub mod draft;
pub mod session;
pub mod validation;

pub use connectivity::{OnlineSignal, Subscription};
pub use draft::{DraftStore, KeyValueStore, MemoryStore, StorageError, DRAFT_KEY};
pub use session::{
    Ack, AttachmentError, Phase, ReportSession, SubmitOutcome, Transmit, TransmitError,
};
pub use validation::{validate, validate_at, ValidationErrors, MIN_DESCRIPTION_LEN};
