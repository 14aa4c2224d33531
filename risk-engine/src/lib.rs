//! Risk Engine
//!
//! Workplace risk scoring: a 5x5 probability/severity matrix, residual risk
//! after controls, band classification and recommended actions.
//!
//! Every operation is pure. [`classify`] rejects levels outside 1-5,
//! [`residual_risk`] clamps control effectiveness into [0, 1], and the
//! description lookups return an invalid-level text instead of failing.
//!
//! # Example
//!
//! ```
//! use risk_engine::{classify, residual_for_controls, Band};
//!
//! let cell = classify(4, 5).unwrap();
//! assert_eq!(cell.score, 20);
//! assert_eq!(cell.band, Band::Critical);
//!
//! // two controls, mean effectiveness 0.4
//! assert_eq!(residual_for_controls(12, &[0.5, 0.3]), Some(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(test, deny(missing_docs))]

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod descriptions;
pub mod error;
pub mod matrix;
pub mod recommendations;
pub mod residual;
pub mod scoring;
pub mod types;

pub use assessment::{AssessmentDraft, AssessmentRecord, BandFilter, BandSummary, ScoredAssessment};
pub use catalog::{Control, Hazard, Responsible, Task, DEFAULT_EFFECTIVENESS};
pub use config::{Config, LogFormat};
pub use descriptions::{describe_probability, describe_severity, invalid_level};
pub use error::{Error, Result};
pub use matrix::{band, cells, classify, describe_band, matrix, risk_color, RISK_MATRIX};
pub use recommendations::{recommendations, recommendations_for_band};
pub use residual::{mean_effectiveness, residual_for_controls, residual_risk};
pub use scoring::RiskScoringEngine;
pub use types::*;
