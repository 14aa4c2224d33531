//! The 5x5 probability/severity matrix
//!
//! Rows are probability, columns are severity; the cell for `(p, s)` lives at
//! `RISK_MATRIX[p - 1][s - 1]`. The table is built at compile time and never
//! changes.

use crate::{Band, Error, Locale, Result, RiskCell, RiskColor};
use tracing::{debug, warn};

/// Lowest valid probability/severity level
pub const MIN_LEVEL: u8 = 1;

/// Highest valid probability/severity level
pub const MAX_LEVEL: u8 = 5;

const fn cell(probability: u8, severity: u8) -> RiskCell {
    let score = probability as u32 * severity as u32;
    let band = Band::from_score(score);
    RiskCell {
        probability,
        severity,
        score,
        band,
        label: band.label(Locale::Es),
    }
}

/// Risk matrix, labels in the default locale
pub static RISK_MATRIX: [[RiskCell; 5]; 5] = [
    [cell(1, 1), cell(1, 2), cell(1, 3), cell(1, 4), cell(1, 5)],
    [cell(2, 1), cell(2, 2), cell(2, 3), cell(2, 4), cell(2, 5)],
    [cell(3, 1), cell(3, 2), cell(3, 3), cell(3, 4), cell(3, 5)],
    [cell(4, 1), cell(4, 2), cell(4, 3), cell(4, 4), cell(4, 5)],
    [cell(5, 1), cell(5, 2), cell(5, 3), cell(5, 4), cell(5, 5)],
];

/// Whether `level` is a valid probability or severity
pub fn is_valid_level(level: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Look up the matrix cell for a probability/severity pair.
///
/// Fails with [`Error::InvalidRange`] when either value is outside 1-5.
pub fn classify(probability: u8, severity: u8) -> Result<RiskCell> {
    if !is_valid_level(probability) || !is_valid_level(severity) {
        warn!(probability, severity, "rejected out-of-range classification");
        return Err(Error::InvalidRange {
            probability,
            severity,
        });
    }

    let cell = RISK_MATRIX[usize::from(probability - 1)][usize::from(severity - 1)];
    debug!(probability, severity, score = cell.score, band = %cell.band, "classified risk");
    Ok(cell)
}

/// Band of a score
pub fn band(score: u32) -> Band {
    Band::from_score(score)
}

/// Localized band name of a score
pub fn describe_band(score: u32, locale: Locale) -> &'static str {
    band(score).label(locale)
}

/// Presentation color of a score
pub fn risk_color(score: u32) -> RiskColor {
    band(score).color()
}

/// Whole matrix, for rendering the grid
pub fn matrix() -> &'static [[RiskCell; 5]; 5] {
    &RISK_MATRIX
}

/// All 25 cells in row-major order
pub fn cells() -> impl Iterator<Item = &'static RiskCell> {
    RISK_MATRIX.iter().flatten()
}
