//! Probability and severity level descriptions
//!
//! Unlike [`crate::matrix::classify`], these lookups never fail: an
//! out-of-range level yields [`invalid_level`] as an ordinary value.

use crate::Locale;

/// Text returned for levels outside 1-5
pub const fn invalid_level(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Nivel no válido",
        Locale::En => "Invalid level",
    }
}

/// How often exposure occurs at a probability level
pub fn describe_probability(level: u8, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::Es, 1) => "Muy improbable (menos de una vez al año)",
        (Locale::Es, 2) => "Improbable (una vez al año)",
        (Locale::Es, 3) => "Posible (una vez al mes)",
        (Locale::Es, 4) => "Probable (una vez a la semana)",
        (Locale::Es, 5) => "Muy probable (diario)",
        (Locale::En, 1) => "Very unlikely (less than once a year)",
        (Locale::En, 2) => "Unlikely (once a year)",
        (Locale::En, 3) => "Possible (once a month)",
        (Locale::En, 4) => "Likely (once a week)",
        (Locale::En, 5) => "Very likely (daily)",
        _ => invalid_level(locale),
    }
}

/// Worst-case harm at a severity level
pub fn describe_severity(level: u8, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::Es, 1) => "Sin lesión (solo daños materiales menores)",
        (Locale::Es, 2) => "Lesión menor (primeros auxilios)",
        (Locale::Es, 3) => "Lesión moderada (atención médica)",
        (Locale::Es, 4) => "Lesión grave (hospitalización)",
        (Locale::Es, 5) => "Fatal (muerte o incapacidad permanente)",
        (Locale::En, 1) => "No injury (minor material damage only)",
        (Locale::En, 2) => "Minor injury (first aid)",
        (Locale::En, 3) => "Moderate injury (medical attention)",
        (Locale::En, 4) => "Serious injury (hospitalization)",
        (Locale::En, 5) => "Fatal (death or permanent disability)",
        _ => invalid_level(locale),
    }
}
