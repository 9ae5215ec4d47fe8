//! Selector catalogs exposed to the page.
//!
//! The hazard-type and severity pickers render from these listings rather
//! than hardcoding their options in JavaScript.

use serde::Serialize;
use shared_types::{HazardType, Severity};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct CatalogEntry {
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

fn to_js(entries: &[CatalogEntry]) -> Result<JsValue, JsValue> {
    // json_compatible so the entries cross as plain objects
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    entries
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Options for the hazard-type selector, in display order:
/// `[{ value, label, description }, ...]`.
#[wasm_bindgen(js_name = hazardTypes)]
pub fn hazard_types() -> Result<JsValue, JsValue> {
    let entries: Vec<CatalogEntry> = HazardType::ALL
        .iter()
        .map(|hazard| CatalogEntry {
            value: hazard.as_str(),
            label: hazard.label(),
            description: hazard.description(),
        })
        .collect();
    to_js(&entries)
}

/// Options for the severity selector, least to most urgent:
/// `[{ value, label, description }, ...]`.
#[wasm_bindgen(js_name = severityLevels)]
pub fn severity_levels() -> Result<JsValue, JsValue> {
    let entries: Vec<CatalogEntry> = Severity::ALL
        .iter()
        .map(|severity| CatalogEntry {
            value: severity.as_str(),
            label: severity.label(),
            description: severity.description(),
        })
        .collect();
    to_js(&entries)
}
