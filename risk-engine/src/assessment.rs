//! Risk assessment drafts, scored results and portfolio summaries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::{Band, Error, RiskCell};

/// Assessment as entered by a user, before scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDraft {
    /// Assessed hazard
    #[validate(range(min = 1, message = "a hazard must be selected"))]
    pub hazard_id: u64,

    /// Task exposed to the hazard
    #[validate(range(min = 1, message = "a task must be selected"))]
    pub task_id: u64,

    /// Person responsible for the controls
    #[validate(range(min = 1, message = "a responsible must be selected"))]
    pub responsible_id: u64,

    /// Probability level (1-5), checked when classified
    pub probability: u8,

    /// Severity level (1-5), checked when classified
    pub severity: u8,

    /// Selected controls
    #[serde(default)]
    pub control_ids: Vec<u64>,

    /// Free-text controls not in the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_controls: Option<String>,

    /// Planned implementation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_date: Option<NaiveDate>,
}

/// Scored assessment, ready to persist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAssessment {
    /// Draft that was scored
    #[serde(flatten)]
    pub draft: AssessmentDraft,

    /// Matrix cell of the draft's probability and severity
    pub initial_risk: RiskCell,

    /// Mean effectiveness of the selected controls
    pub mean_effectiveness: Option<f64>,

    /// Score after controls, only when controls were selected
    pub residual_risk: Option<u32>,

    /// Band of the residual score
    pub residual_band: Option<Band>,

    /// Recommended actions for the initial score
    pub recommendations: Vec<String>,
}

impl ScoredAssessment {
    /// Persisted form of this assessment
    pub fn into_record(self, id: u64, at: DateTime<Utc>) -> AssessmentRecord {
        AssessmentRecord {
            id,
            initial_risk: self.initial_risk.score,
            residual_risk: self.residual_risk,
            draft: self.draft,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Assessment as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    /// Record id assigned by storage
    pub id: u64,

    /// Scored draft
    #[serde(flatten)]
    pub draft: AssessmentDraft,

    /// Score before controls
    pub initial_risk: u32,

    /// Score after controls, when any were selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_risk: Option<u32>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Band of the stored initial score
    pub fn initial_band(&self) -> Band {
        Band::from_score(self.initial_risk)
    }

    /// Band of the stored residual score
    pub fn residual_band(&self) -> Option<Band> {
        self.residual_risk.map(Band::from_score)
    }
}

/// Number of assessments per band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSummary {
    /// Low band count
    pub low: usize,
    /// Medium band count
    pub medium: usize,
    /// High band count
    pub high: usize,
    /// Critical band count
    pub critical: usize,
}

impl BandSummary {
    /// Count scores by band
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut summary = Self::default();
        for score in scores {
            match Band::from_score(score) {
                Band::Low => summary.low += 1,
                Band::Medium => summary.medium += 1,
                Band::High => summary.high += 1,
                Band::Critical => summary.critical += 1,
            }
        }
        summary
    }

    /// Count by initial score
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AssessmentRecord>,
    {
        Self::from_scores(records.into_iter().map(|r| r.initial_risk))
    }

    /// Assessments in one band
    pub fn count(&self, band: Band) -> usize {
        match band {
            Band::Low => self.low,
            Band::Medium => self.medium,
            Band::High => self.high,
            Band::Critical => self.critical,
        }
    }

    /// Assessments counted
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Band selection for listing assessments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandFilter {
    /// No filtering
    #[default]
    All,
    /// Only one band
    Only(Band),
}

impl BandFilter {
    /// Whether a score passes the filter
    pub fn matches(&self, score: u32) -> bool {
        match self {
            BandFilter::All => true,
            BandFilter::Only(band) => Band::from_score(score) == *band,
        }
    }

    /// Records whose initial score passes the filter
    pub fn apply<'a>(&self, records: &'a [AssessmentRecord]) -> Vec<&'a AssessmentRecord> {
        records.iter().filter(|r| self.matches(r.initial_risk)).collect()
    }
}

impl FromStr for BandFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.trim().to_ascii_lowercase().as_str() {
            "all" => BandFilter::All,
            "low" => BandFilter::Only(Band::Low),
            "medium" => BandFilter::Only(Band::Medium),
            "high" => BandFilter::Only(Band::High),
            "critical" => BandFilter::Only(Band::Critical),
            other => return Err(Error::Validation(format!("unknown risk filter: {}", other))),
        };
        Ok(filter)
    }
}
