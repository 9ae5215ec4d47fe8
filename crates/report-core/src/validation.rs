//! Field-level validation of a hazard report.
//!
//! Produces the full error set in one pass; no rule short-circuits another.
//! Invalid input never panics, it only ever adds errors.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use shared_types::HazardReport;

/// Minimum description length accepted on submission.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Field-name to message mapping; an absent key means the field is valid.
///
/// Keys use the form's camelCase field names ("hazardType", "incidentTime")
/// so they map straight onto the inputs that raised them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

/// Validate a report against the submission rules, using the current time
/// for the incident-time check.
pub fn validate(report: &HazardReport) -> ValidationErrors {
    validate_at(report, Utc::now())
}

/// Validate with an explicit "now" so the future-incident rule is
/// deterministic under test.
pub fn validate_at(report: &HazardReport, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if report.hazard_type.is_empty() {
        errors.insert("hazardType", "Please select a hazard type");
    }

    if report.location.address.is_empty() {
        errors.insert("location", "Please provide a location");
    }

    check_coordinate(
        &mut errors,
        "latitude",
        &report.location.latitude,
        90.0,
        "Latitude must be a number between -90 and 90",
    );
    check_coordinate(
        &mut errors,
        "longitude",
        &report.location.longitude,
        180.0,
        "Longitude must be a number between -180 and 180",
    );

    if report.severity.is_empty() {
        errors.insert("severity", "Please select severity level");
    }

    if report.description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.insert(
            "description",
            "Please provide a detailed description (minimum 20 characters)",
        );
    }

    if report.incident_time.is_empty() {
        errors.insert("incidentTime", "Please specify when the incident occurred");
    } else {
        match parse_incident_time(&report.incident_time) {
            Some(time) if time > now => {
                errors.insert("incidentTime", "Incident time cannot be in the future");
            }
            Some(_) => {}
            None => {
                errors.insert("incidentTime", "Please provide a valid incident time");
            }
        }
    }

    if report.allow_contact {
        if report.contact_info.name.is_empty() {
            errors.insert("name", "Name is required when allowing contact");
        }
        if report.contact_info.email.is_empty() && report.contact_info.phone.is_empty() {
            errors.insert(
                "email",
                "Either email or phone is required when allowing contact",
            );
        }
    }

    errors
}

/// Coordinates are optional; only a present-but-invalid value is an error.
fn check_coordinate(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    bound: f64,
    message: &str,
) {
    if value.is_empty() {
        return;
    }
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && (-bound..=bound).contains(&v) => {}
        _ => errors.insert(field, message),
    }
}

/// Accepts the form's `datetime-local` values ("2025-03-14T09:30", with or
/// without seconds) and full RFC 3339 timestamps. Naive values are read as
/// UTC.
fn parse_incident_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}
