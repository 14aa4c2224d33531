//! Risk scoring engine

use crate::assessment::{AssessmentDraft, ScoredAssessment};
use crate::catalog::Control;
use crate::{descriptions, matrix, recommendations, residual};
use crate::{Band, Config, Error, Locale, Result, RiskCell, RiskColor};
use tracing::{debug, info};
use validator::Validate;

/// Risk scorer.
///
/// Holds only the output language; every operation is a pure function of its
/// arguments, so the scorer can be copied freely and shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskScoringEngine {
    locale: Locale,
}

impl RiskScoringEngine {
    /// Create new risk scorer
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Create from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.locale)
    }

    /// Output language
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Matrix cell for a probability/severity pair, labelled in this
    /// scorer's language
    pub fn classify(&self, probability: u8, severity: u8) -> Result<RiskCell> {
        matrix::classify(probability, severity).map(|cell| cell.localized(self.locale))
    }

    /// Score left after a control of the given effectiveness
    pub fn residual_risk(&self, initial_score: u32, effectiveness: f64) -> u32 {
        residual::residual_risk(initial_score, effectiveness)
    }

    /// Score left after the mean effectiveness of several controls
    pub fn residual_for_controls(&self, initial_score: u32, effectiveness: &[f64]) -> Option<u32> {
        residual::residual_for_controls(initial_score, effectiveness)
    }

    /// Band of a score
    pub fn band(&self, score: u32) -> Band {
        matrix::band(score)
    }

    /// Localized band name of a score
    pub fn describe_band(&self, score: u32) -> &'static str {
        matrix::describe_band(score, self.locale)
    }

    /// Presentation color of a score
    pub fn risk_color(&self, score: u32) -> RiskColor {
        matrix::risk_color(score)
    }

    /// Recommended actions for a score
    pub fn recommendations(&self, score: u32) -> Vec<String> {
        recommendations::recommendations(score, self.locale)
    }

    /// Description of a probability level, or the invalid-level text
    pub fn describe_probability(&self, level: u8) -> &'static str {
        descriptions::describe_probability(level, self.locale)
    }

    /// Description of a severity level, or the invalid-level text
    pub fn describe_severity(&self, level: u8) -> &'static str {
        descriptions::describe_severity(level, self.locale)
    }

    /// Score a draft against the control catalog.
    ///
    /// Selected control ids are resolved in `controls`; a repeated id counts
    /// once. The residual score is present only when at least one control
    /// is selected.
    pub fn assess(&self, draft: AssessmentDraft, controls: &[Control]) -> Result<ScoredAssessment> {
        draft.validate()?;

        let initial_risk = self.classify(draft.probability, draft.severity)?;

        let mut selected: Vec<u64> = Vec::with_capacity(draft.control_ids.len());
        for id in &draft.control_ids {
            if !selected.contains(id) {
                selected.push(*id);
            }
        }

        let effectiveness = selected
            .iter()
            .map(|id| {
                controls
                    .iter()
                    .find(|control| control.id == Some(*id))
                    .map(|control| control.effectiveness)
                    .ok_or(Error::UnknownControl(*id))
            })
            .collect::<Result<Vec<f64>>>()?;

        let mean_effectiveness = residual::mean_effectiveness(&effectiveness);
        let residual_risk =
            mean_effectiveness.map(|mean| residual::residual_risk(initial_risk.score, mean));
        let residual_band = residual_risk.map(Band::from_score);

        debug!(
            hazard_id = draft.hazard_id,
            task_id = draft.task_id,
            controls = selected.len(),
            ?mean_effectiveness,
            ?residual_risk,
            "scored assessment draft"
        );
        info!(
            initial = initial_risk.score,
            band = %initial_risk.band,
            residual = ?residual_risk,
            "risk assessed"
        );

        Ok(ScoredAssessment {
            recommendations: self.recommendations(initial_risk.score),
            draft,
            initial_risk,
            mean_effectiveness,
            residual_risk,
            residual_band,
        })
    }
}
