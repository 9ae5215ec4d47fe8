//! WASM bindings for the hazard report form lifecycle.
//!
//! All draft state is held in Rust via `HazardReportForm`, minimizing
//! JavaScript complexity: the page wires DOM events to field setters and
//! renders whatever the form reports back.
//!
//! ## Architecture
//!
//! - Validation, draft persistence, and the submission state machine live in
//!   `report-core`
//! - This crate binds them to `localStorage`, `navigator.onLine`, and the
//!   window `online`/`offline` events
//! - Transmission is a JS-supplied callback returning a Promise, raced
//!   against a timeout
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { HazardReportForm, hazardTypes, severityLevels } from './pkg/hazard_wasm.js';
//!
//! await init();
//!
//! const form = new HazardReportForm(); // resumes a saved draft if present
//! form.setTransmitter((reportJson) => postReport(reportJson));
//!
//! renderSelector(hazardTypes());     // [{ value, label, description }]
//! renderSelector(severityLevels());
//! form.setHazardType("oil-spill");
//! form.setDescription(textarea.value);
//!
//! const outcome = await form.submit();
//! if (outcome.status === "rejected") showErrors(outcome.errors);
//! if (outcome.status === "sent" || outcome.status === "queued") navigateAway();
//! ```

pub mod catalog;
pub mod connectivity;
pub mod form;
pub mod storage;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use catalog::{hazard_types, severity_levels};
pub use connectivity::ConnectivityMonitor;
pub use form::HazardReportForm;
pub use storage::LocalStorage;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
