use serde::{Deserialize, Serialize};

/// Upper bound on attached media references per report.
pub const MAX_ATTACHMENTS: usize = 10;

/// A citizen-submitted ocean hazard report.
///
/// Field values are kept as the raw strings the form produces so that an
/// incomplete draft serializes and round-trips exactly as entered. The JSON
/// shape uses camelCase keys to match the draft blob the web app reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HazardReport {
    pub hazard_type: String,
    pub location: Location,
    pub severity: String,
    pub description: String,
    pub incident_time: String,
    pub files: Vec<MediaAttachment>,
    pub contact_info: ContactInfo,
    pub allow_contact: bool,
}

/// Where the hazard was observed. Coordinates are optional numeric strings;
/// the address is the only required part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}

/// Reporter contact details, only meaningful when `allow_contact` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Metadata for one attached photo or video.
///
/// Only metadata is persisted with a draft; the preview `url` is an ephemeral
/// object handle that cannot survive a reload and is skipped by serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaAttachment {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip)]
    pub url: String,
}

/// Human-readable file size, e.g. "2.5 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exp = (bytes as f64).log(1024.0).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);

    // Two decimals with trailing zeros dropped ("1.50" -> "1.5", "2.00" -> "2")
    let rounded = (value * 100.0).round() / 100.0;
    let mut formatted = format!("{:.2}", rounded);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }

    format!("{} {}", formatted, UNITS[exp])
}
