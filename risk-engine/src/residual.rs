//! Residual risk after controls are applied

use tracing::debug;

/// Clamp a control effectiveness into [0, 1]. NaN counts as no reduction.
fn clamp_effectiveness(effectiveness: f64) -> f64 {
    if effectiveness.is_nan() {
        debug!("NaN effectiveness treated as 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&effectiveness) {
        debug!(effectiveness, "effectiveness clamped");
    }
    effectiveness.clamp(0.0, 1.0)
}

/// Score left after a control of the given effectiveness.
///
/// `round(initial_score * (1 - clamp(effectiveness, 0, 1)))`, rounding half
/// away from zero. Out-of-range effectiveness is clamped, never rejected, and
/// `initial_score` is taken as given.
pub fn residual_risk(initial_score: u32, effectiveness: f64) -> u32 {
    let effectiveness = clamp_effectiveness(effectiveness);
    let residual = (f64::from(initial_score) * (1.0 - effectiveness)).round();
    // residual lies in [0, initial_score], so the cast is lossless
    residual as u32
}

/// Unweighted mean of control effectiveness values, `None` when empty
pub fn mean_effectiveness(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Residual risk for a set of selected controls.
///
/// Averages their effectiveness first; with no controls selected there is
/// no residual risk and `None` is returned.
pub fn residual_for_controls(initial_score: u32, effectiveness: &[f64]) -> Option<u32> {
    mean_effectiveness(effectiveness).map(|mean| residual_risk(initial_score, mean))
}
