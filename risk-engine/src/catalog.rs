//! Catalog entries referenced by risk assessments

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Effectiveness assumed for a control that does not state one
pub const DEFAULT_EFFECTIVENESS: f64 = 1.0;

fn default_effectiveness() -> f64 {
    DEFAULT_EFFECTIVENESS
}

/// Workplace hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Hazard {
    /// Catalog id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Hazard name
    #[validate(length(min = 1, message = "hazard name is required"))]
    pub name: String,

    /// Free-text details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hazard category (mechanical, chemical, ...)
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}

/// Work task exposed to hazards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Catalog id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Task name
    #[validate(length(min = 1, message = "task name is required"))]
    pub name: String,

    /// Free-text details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Department performing the task
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
}

/// Mitigation applied to a risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Catalog id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Control name
    #[validate(length(min = 1, message = "control name is required"))]
    pub name: String,

    /// Free-text details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Control type (engineering, administrative, PPE, ...)
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "control type is required"))]
    pub control_type: String,

    /// Fractional risk reduction in [0, 1]
    #[serde(default = "default_effectiveness")]
    #[validate(range(min = 0.0, max = 1.0, message = "effectiveness must be between 0 and 1"))]
    pub effectiveness: f64,
}

impl Control {
    /// New control with full effectiveness
    pub fn new(id: u64, name: impl Into<String>, control_type: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            description: None,
            control_type: control_type.into(),
            effectiveness: DEFAULT_EFFECTIVENESS,
        }
    }

    /// Set effectiveness
    pub fn with_effectiveness(mut self, effectiveness: f64) -> Self {
        self.effectiveness = effectiveness;
        self
    }
}

/// Person responsible for implementing controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Responsible {
    /// Catalog id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Full name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Contact email
    #[validate(email(message = "invalid email"))]
    pub email: String,

    /// Department of the responsible
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
}
