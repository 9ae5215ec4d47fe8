//! Fixed catalogs the reporting form selects from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hazard type: {0}")]
pub struct UnknownHazardType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity level: {0}")]
pub struct UnknownSeverity(pub String);

/// The kinds of ocean hazard a citizen can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardType {
    OilSpill,
    MarineDebris,
    AlgalBloom,
    DeadMarineLife,
    CoastalErosion,
    WaterDiscoloration,
    ChemicalDischarge,
    NavigationHazard,
    WeatherRelated,
    Other,
}

impl HazardType {
    pub const ALL: [HazardType; 10] = [
        HazardType::OilSpill,
        HazardType::MarineDebris,
        HazardType::AlgalBloom,
        HazardType::DeadMarineLife,
        HazardType::CoastalErosion,
        HazardType::WaterDiscoloration,
        HazardType::ChemicalDischarge,
        HazardType::NavigationHazard,
        HazardType::WeatherRelated,
        HazardType::Other,
    ];

    /// Wire value used in the report JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "oil-spill",
            HazardType::MarineDebris => "marine-debris",
            HazardType::AlgalBloom => "algal-bloom",
            HazardType::DeadMarineLife => "dead-marine-life",
            HazardType::CoastalErosion => "coastal-erosion",
            HazardType::WaterDiscoloration => "water-discoloration",
            HazardType::ChemicalDischarge => "chemical-discharge",
            HazardType::NavigationHazard => "navigation-hazard",
            HazardType::WeatherRelated => "weather-related",
            HazardType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Oil Spill",
            HazardType::MarineDebris => "Marine Debris",
            HazardType::AlgalBloom => "Algal Bloom",
            HazardType::DeadMarineLife => "Dead Marine Life",
            HazardType::CoastalErosion => "Coastal Erosion",
            HazardType::WaterDiscoloration => "Water Discoloration",
            HazardType::ChemicalDischarge => "Chemical Discharge",
            HazardType::NavigationHazard => "Navigation Hazard",
            HazardType::WeatherRelated => "Weather Related",
            HazardType::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HazardType::OilSpill => "Petroleum or chemical contamination",
            HazardType::MarineDebris => "Floating waste or garbage",
            HazardType::AlgalBloom => "Harmful algae concentration",
            HazardType::DeadMarineLife => "Fish kills or marine animal deaths",
            HazardType::CoastalErosion => "Beach or cliff erosion",
            HazardType::WaterDiscoloration => "Unusual water color changes",
            HazardType::ChemicalDischarge => "Industrial or sewage discharge",
            HazardType::NavigationHazard => "Obstacles or dangerous conditions",
            HazardType::WeatherRelated => "Storm damage or extreme weather",
            HazardType::Other => "Other ocean hazards not listed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UnknownHazardType> {
        Self::ALL
            .iter()
            .find(|h| h.as_str() == value)
            .copied()
            .ok_or_else(|| UnknownHazardType(value.to_string()))
    }
}

/// How urgent a reported hazard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Severity::Low => "Minor hazard with minimal immediate impact",
            Severity::Medium => "Moderate hazard requiring attention",
            Severity::High => "Serious hazard with significant impact",
            Severity::Critical => "Immediate danger requiring urgent response",
        }
    }

    pub fn parse(value: &str) -> Result<Self, UnknownSeverity> {
        Self::ALL
            .iter()
            .find(|s| s.as_str() == value)
            .copied()
            .ok_or_else(|| UnknownSeverity(value.to_string()))
    }
}
