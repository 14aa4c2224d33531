//! Core types for the risk scoring engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Highest score classified as [`Band::Low`]
pub const LOW_MAX: u32 = 5;

/// Highest score classified as [`Band::Medium`]
pub const MEDIUM_MAX: u32 = 10;

/// Highest score classified as [`Band::High`]
pub const HIGH_MAX: u32 = 15;

/// Qualitative risk tier derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Score 1-5
    Low,
    /// Score 6-10
    Medium,
    /// Score 11-15
    High,
    /// Score 16-25
    Critical,
}

impl Band {
    /// All bands, least to most severe
    pub const ALL: [Band; 4] = [Band::Low, Band::Medium, Band::High, Band::Critical];

    /// Classify a score.
    ///
    /// This is the only place the band thresholds are applied; every other
    /// classification in the crate goes through it.
    pub const fn from_score(score: u32) -> Self {
        if score <= LOW_MAX {
            Band::Low
        } else if score <= MEDIUM_MAX {
            Band::Medium
        } else if score <= HIGH_MAX {
            Band::High
        } else {
            Band::Critical
        }
    }

    /// Ordinal rank, 0 for Low up to 3 for Critical
    pub const fn rank(self) -> u8 {
        match self {
            Band::Low => 0,
            Band::Medium => 1,
            Band::High => 2,
            Band::Critical => 3,
        }
    }

    /// Presentation color
    pub const fn color(self) -> RiskColor {
        match self {
            Band::Low => RiskColor::Green,
            Band::Medium => RiskColor::Yellow,
            Band::High => RiskColor::Orange,
            Band::Critical => RiskColor::Red,
        }
    }

    /// Localized name
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Es, Band::Low) => "Bajo",
            (Locale::Es, Band::Medium) => "Medio",
            (Locale::Es, Band::High) => "Alto",
            (Locale::Es, Band::Critical) => "Crítico",
            (Locale::En, Band::Low) => "Low",
            (Locale::En, Band::Medium) => "Medium",
            (Locale::En, Band::High) => "High",
            (Locale::En, Band::Critical) => "Critical",
        }
    }

    /// Stable lowercase identifier
    pub const fn as_str(self) -> &'static str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
            Band::Critical => "critical",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation color of a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    /// Low
    Green,
    /// Medium
    Yellow,
    /// High
    Orange,
    /// Critical
    Red,
}

impl RiskColor {
    /// Lowercase color name
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Yellow => "yellow",
            RiskColor::Orange => "orange",
            RiskColor::Red => "red",
        }
    }
}

/// Language for labels, recommendations and descriptions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(Error::Config(format!("unsupported locale: {}", other))),
        }
    }
}

/// One cell of the 5x5 probability/severity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskCell {
    /// Probability level (1-5)
    pub probability: u8,

    /// Severity level (1-5)
    pub severity: u8,

    /// probability * severity
    pub score: u32,

    /// Band of `score`
    pub band: Band,

    /// Localized name of `band`
    pub label: &'static str,
}

impl RiskCell {
    /// Presentation color of the cell
    pub fn color(&self) -> RiskColor {
        self.band.color()
    }

    /// Same cell with its label in another language
    pub fn localized(self, locale: Locale) -> Self {
        Self {
            label: self.band.label(locale),
            ..self
        }
    }
}
