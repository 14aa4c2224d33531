//! Remediation recommendations per risk band

use crate::{Band, Locale};

const LOW_ES: [&str; 3] = [
    "Mantener los controles existentes",
    "Revisar periódicamente la efectividad de los controles",
    "Documentar las buenas prácticas",
];

const MEDIUM_ES: [&str; 4] = [
    "Implementar controles adicionales",
    "Capacitar al personal en los procedimientos",
    "Establecer monitoreo regular",
    "Revisar los controles cada 6 meses",
];

const HIGH_ES: [&str; 6] = [
    "Implementar controles inmediatos",
    "Reducir la exposición al riesgo",
    "Capacitación obligatoria del personal",
    "Monitoreo diario de las condiciones",
    "Revisar los controles cada mes",
    "Considerar cambios en el proceso",
];

const CRITICAL_ES: [&str; 7] = [
    "SUSPENDER la actividad inmediatamente",
    "Implementar controles de emergencia",
    "Revisar completamente el proceso",
    "Capacitación intensiva del personal",
    "Monitoreo continuo",
    "Considerar automatización o cambio de proceso",
    "Notificar a la dirección",
];

const LOW_EN: [&str; 3] = [
    "Maintain existing controls",
    "Periodically review control effectiveness",
    "Document good practices",
];

const MEDIUM_EN: [&str; 4] = [
    "Implement additional controls",
    "Train staff on the procedures",
    "Establish regular monitoring",
    "Review controls every 6 months",
];

const HIGH_EN: [&str; 6] = [
    "Implement immediate controls",
    "Reduce exposure to the risk",
    "Mandatory staff training",
    "Daily monitoring of conditions",
    "Review controls every month",
    "Consider process changes",
];

const CRITICAL_EN: [&str; 7] = [
    "SUSPEND the activity immediately",
    "Implement emergency controls",
    "Fully review the process",
    "Intensive staff training",
    "Continuous monitoring",
    "Consider automation or a process change",
    "Notify management",
];

fn actions(band: Band, locale: Locale) -> &'static [&'static str] {
    match (locale, band) {
        (Locale::Es, Band::Low) => &LOW_ES,
        (Locale::Es, Band::Medium) => &MEDIUM_ES,
        (Locale::Es, Band::High) => &HIGH_ES,
        (Locale::Es, Band::Critical) => &CRITICAL_ES,
        (Locale::En, Band::Low) => &LOW_EN,
        (Locale::En, Band::Medium) => &MEDIUM_EN,
        (Locale::En, Band::High) => &HIGH_EN,
        (Locale::En, Band::Critical) => &CRITICAL_EN,
    }
}

/// Recommended actions for a band, most urgent first
pub fn recommendations_for_band(band: Band, locale: Locale) -> Vec<String> {
    actions(band, locale).iter().map(|s| s.to_string()).collect()
}

/// Recommended actions for a score, most urgent first.
///
/// Every call returns a new list.
pub fn recommendations(score: u32, locale: Locale) -> Vec<String> {
    recommendations_for_band(Band::from_score(score), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes_per_band() {
        assert_eq!(recommendations(5, Locale::Es).len(), 3);
        assert_eq!(recommendations(10, Locale::Es).len(), 4);
        assert_eq!(recommendations(15, Locale::Es).len(), 6);
        assert_eq!(recommendations(16, Locale::Es).len(), 7);
        assert_eq!(recommendations(20, Locale::Es).len(), 7);
    }

    #[test]
    fn test_critical_list_order() {
        let list = recommendations(16, Locale::Es);
        assert_eq!(list[0], "SUSPENDER la actividad inmediatamente");
        assert_eq!(list[6], "Notificar a la dirección");
        assert_eq!(list, recommendations(25, Locale::Es));
    }

    #[test]
    fn test_locales_have_same_shape() {
        for band in Band::ALL {
            assert_eq!(
                actions(band, Locale::Es).len(),
                actions(band, Locale::En).len()
            );
        }
        assert_eq!(recommendations(1, Locale::En)[0], "Maintain existing controls");
    }

    #[test]
    fn test_returned_list_is_owned() {
        let mut first = recommendations(3, Locale::Es);
        first.clear();
        first.push("changed".to_string());

        let second = recommendations(3, Locale::Es);
        assert_eq!(second.len(), 3);
        assert_eq!(second[0], "Mantener los controles existentes");
    }
}
