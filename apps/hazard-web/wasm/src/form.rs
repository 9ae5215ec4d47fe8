//! Stateful hazard report form exposed to JavaScript.
//!
//! Holds the draft in Rust, persists it to `localStorage`, and runs the
//! submission state machine against a JS-supplied transmitter callback.

use js_sys::Array;
use report_core::{Ack, Phase, ReportSession, SubmitOutcome, Subscription, Transmit, TransmitError};
use serde::Serialize;
use shared_types::{format_file_size, HazardReport, MediaAttachment};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::connectivity::ConnectivityMonitor;
use crate::storage::LocalStorage;

const DEFAULT_TRANSMIT_TIMEOUT_MS: u32 = 15_000;
const TIMEOUT_SENTINEL: &str = "__transmit_timeout__";

const ONLINE_STATUS: &str = "Online - Report will be submitted immediately";
const OFFLINE_STATUS: &str =
    "Offline - Report will be saved and submitted when connection is restored";

/// The hazard reporting form: one instance, one draft slot.
#[wasm_bindgen]
pub struct HazardReportForm {
    session: ReportSession<LocalStorage>,
    monitor: ConnectivityMonitor,
    // Held for its Drop: releases the listener when the form goes away
    _connectivity_sub: Option<Subscription>,
    transmitter: Option<js_sys::Function>,
    timeout_ms: u32,
}

#[wasm_bindgen]
impl HazardReportForm {
    /// Open the form, resuming any previously saved draft.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HazardReportForm, JsValue> {
        let storage = LocalStorage::new()?;
        let session = ReportSession::new(storage);
        let monitor = ConnectivityMonitor::new()?;

        Ok(HazardReportForm {
            session,
            monitor,
            _connectivity_sub: None,
            transmitter: None,
            timeout_ms: DEFAULT_TRANSMIT_TIMEOUT_MS,
        })
    }

    /// Notify JS on each online/offline transition, e.g. to re-render the
    /// status line. Replaces any previous callback; the subscription is
    /// released with the form.
    #[wasm_bindgen(js_name = onConnectivityChange)]
    pub fn on_connectivity_change(&mut self, callback: js_sys::Function) {
        let sub = self.monitor.signal().subscribe(move |online| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_bool(online));
        });
        self._connectivity_sub = Some(sub);
    }

    /// Set the transmission callback. It receives the report as a JSON
    /// string and must return a Promise resolving to a report id.
    #[wasm_bindgen(js_name = setTransmitter)]
    pub fn set_transmitter(&mut self, callback: js_sys::Function) {
        self.transmitter = Some(callback);
    }

    /// Override the transmission timeout (milliseconds).
    #[wasm_bindgen(js_name = setTransmitTimeout)]
    pub fn set_transmit_timeout(&mut self, timeout_ms: u32) {
        self.timeout_ms = timeout_ms;
    }

    // ------------------------------------------------------------
    // Field setters
    // ------------------------------------------------------------

    #[wasm_bindgen(js_name = setHazardType)]
    pub fn set_hazard_type(&mut self, value: &str) {
        self.session.report_mut().hazard_type = value.to_string();
    }

    #[wasm_bindgen(js_name = setAddress)]
    pub fn set_address(&mut self, value: &str) {
        self.session.report_mut().location.address = value.to_string();
    }

    #[wasm_bindgen(js_name = setCoordinates)]
    pub fn set_coordinates(&mut self, latitude: &str, longitude: &str) {
        let location = &mut self.session.report_mut().location;
        location.latitude = latitude.to_string();
        location.longitude = longitude.to_string();
    }

    #[wasm_bindgen(js_name = setSeverity)]
    pub fn set_severity(&mut self, value: &str) {
        self.session.report_mut().severity = value.to_string();
    }

    #[wasm_bindgen(js_name = setDescription)]
    pub fn set_description(&mut self, value: &str) {
        self.session.report_mut().description = value.to_string();
    }

    #[wasm_bindgen(js_name = setIncidentTime)]
    pub fn set_incident_time(&mut self, value: &str) {
        self.session.report_mut().incident_time = value.to_string();
    }

    #[wasm_bindgen(js_name = setContact)]
    pub fn set_contact(&mut self, name: &str, phone: &str, email: &str) {
        let contact = &mut self.session.report_mut().contact_info;
        contact.name = name.to_string();
        contact.phone = phone.to_string();
        contact.email = email.to_string();
    }

    #[wasm_bindgen(js_name = setAllowContact)]
    pub fn set_allow_contact(&mut self, allow: bool) {
        self.session.report_mut().allow_contact = allow;
    }

    // ------------------------------------------------------------
    // Attachments
    // ------------------------------------------------------------

    /// Attach file metadata; rejects past the 10-file cap.
    #[wasm_bindgen(js_name = addFile)]
    pub fn add_file(
        &mut self,
        id: &str,
        name: &str,
        size: f64,
        mime_type: &str,
        preview_url: &str,
    ) -> Result<(), JsValue> {
        self.session
            .add_attachment(MediaAttachment {
                id: id.to_string(),
                name: name.to_string(),
                size: size as u64,
                mime_type: mime_type.to_string(),
                url: preview_url.to_string(),
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove an attachment by id; returns whether anything was removed.
    #[wasm_bindgen(js_name = removeFile)]
    pub fn remove_file(&mut self, id: &str) -> bool {
        self.session.remove_attachment(id)
    }

    #[wasm_bindgen(js_name = fileCount)]
    pub fn file_count(&self) -> usize {
        self.session.report().files.len()
    }

    // ------------------------------------------------------------
    // State
    // ------------------------------------------------------------

    /// Current draft as JSON, for populating the form after a resume.
    #[wasm_bindgen(js_name = reportJson)]
    pub fn report_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.report())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = isOnline)]
    pub fn is_online(&self) -> bool {
        self.monitor.is_online()
    }

    /// The connectivity line shown above the form actions.
    #[wasm_bindgen(js_name = statusMessage)]
    pub fn status_message(&self) -> String {
        if self.monitor.is_online() {
            ONLINE_STATUS.to_string()
        } else {
            OFFLINE_STATUS.to_string()
        }
    }

    /// Lifecycle phase: "editing", "accepted", or "discarded".
    pub fn phase(&self) -> String {
        match self.session.phase() {
            Phase::Editing => "editing",
            Phase::Accepted => "accepted",
            Phase::Discarded => "discarded",
        }
        .to_string()
    }

    // ------------------------------------------------------------
    // Lifecycle actions
    // ------------------------------------------------------------

    /// Persist the draft verbatim; no validation, stays editable.
    #[wasm_bindgen(js_name = saveDraft)]
    pub fn save_draft(&mut self) -> Result<(), JsValue> {
        self.session
            .save_draft()
            .map_err(|_| JsValue::from_str("Failed to save draft. Please try again."))
    }

    /// Validate, then transmit or queue depending on connectivity.
    ///
    /// Resolves to `{ status: "rejected", errors }`, `{ status: "queued",
    /// message }`, `{ status: "sent", reportId }`, or `{ status: "failed",
    /// message }`.
    pub async fn submit(&mut self) -> Result<JsValue, JsValue> {
        let transmitter = JsTransmitter {
            callback: self.transmitter.clone(),
            timeout_ms: self.timeout_ms,
        };
        let online = self.monitor.is_online();

        let outcome = self.session.submit(&transmitter, online).await;
        outcome_to_js(outcome)
    }

    /// Ask the user to confirm, then discard the draft. Returns whether the
    /// draft was discarded; nothing is cleared on a declined prompt.
    pub fn cancel(&mut self) -> Result<bool, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let confirmed = window.confirm_with_message(
            "Are you sure you want to cancel? Any unsaved changes will be lost.",
        )?;

        if !confirmed {
            return Ok(false);
        }

        self.session
            .discard()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(true)
    }
}

/// Human-readable file size for upload listings, e.g. "2.5 MB".
#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size_js(bytes: f64) -> String {
    format_file_size(bytes as u64)
}

/// Bridges the JS callback into the core's transmitter seam, bounding the
/// returned Promise with a timeout.
struct JsTransmitter {
    callback: Option<js_sys::Function>,
    timeout_ms: u32,
}

impl Transmit for JsTransmitter {
    async fn transmit(&self, report: &HazardReport) -> Result<Ack, TransmitError> {
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| TransmitError::Failed("no transmitter configured".to_string()))?;

        let payload = serde_json::to_string(report)
            .map_err(|e| TransmitError::Failed(e.to_string()))?;

        let returned = callback
            .call1(&JsValue::NULL, &JsValue::from_str(&payload))
            .map_err(|e| TransmitError::Failed(describe(&e)))?;
        let promise: js_sys::Promise = returned
            .dyn_into()
            .map_err(|_| TransmitError::Failed("transmitter must return a Promise".to_string()))?;

        let contenders = Array::of2(&promise, &timeout_promise(self.timeout_ms)?.into());
        match JsFuture::from(js_sys::Promise::race(&contenders)).await {
            Ok(value) => Ok(Ack {
                report_id: value.as_string().unwrap_or_default(),
            }),
            Err(e) if e.as_string().as_deref() == Some(TIMEOUT_SENTINEL) => {
                Err(TransmitError::TimedOut)
            }
            Err(e) => Err(TransmitError::Failed(describe(&e))),
        }
    }
}

/// A Promise that rejects with the timeout sentinel after `ms`.
fn timeout_promise(ms: u32) -> Result<js_sys::Promise, TransmitError> {
    let window =
        web_sys::window().ok_or_else(|| TransmitError::Failed("no window".to_string()))?;

    let promise = js_sys::Promise::new(&mut |_resolve, reject| {
        let fire = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_SENTINEL));
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref(),
            ms as i32,
        );
    });

    Ok(promise)
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Flatten a submit outcome into a plain object for JS.
fn outcome_to_js(outcome: SubmitOutcome) -> Result<JsValue, JsValue> {
    let result = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| -> Result<(), JsValue> {
        js_sys::Reflect::set(&result, &JsValue::from_str(key), value)?;
        Ok(())
    };

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            set("status", &"rejected".into())?;
            // json_compatible so the field map crosses as a plain object,
            // not an ES Map
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let errors = errors
                .serialize(&serializer)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
            set("errors", &errors)?;
        }
        SubmitOutcome::Queued => {
            set("status", &"queued".into())?;
            set("message", &OFFLINE_STATUS.into())?;
        }
        SubmitOutcome::Sent(ack) => {
            set("status", &"sent".into())?;
            set("reportId", &ack.report_id.into())?;
        }
        SubmitOutcome::TransmitFailed(_) => {
            set("status", &"failed".into())?;
            set(
                "message",
                &"Failed to submit report. Please try again.".into(),
            )?;
        }
        SubmitOutcome::PersistFailed(e) => {
            set("status", &"failed".into())?;
            set("message", &e.to_string().into())?;
        }
    }

    Ok(result.into())
}
