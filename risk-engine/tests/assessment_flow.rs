//! End-to-end scoring: catalog + draft -> scored assessment -> stored record

use chrono::{TimeZone, Utc};
use risk_engine::{
    AssessmentDraft, AssessmentRecord, Band, BandFilter, BandSummary, Control, Locale,
    RiskScoringEngine,
};
use serde_json::json;

fn controls() -> Vec<Control> {
    serde_json::from_value(json!([
        { "id": 10, "name": "Machine guarding", "type": "engineering", "effectiveness": 0.5 },
        { "id": 11, "name": "Lockout procedure", "type": "administrative", "effectiveness": 0.3 },
        { "id": 12, "name": "Remove the task", "type": "elimination" }
    ]))
    .unwrap()
}

fn draft(probability: u8, severity: u8, control_ids: &[u64]) -> AssessmentDraft {
    serde_json::from_value(json!({
        "hazardId": 1,
        "taskId": 2,
        "responsibleId": 3,
        "probability": probability,
        "severity": severity,
        "controlIds": control_ids,
        "additionalControls": "Weekly toolbox talk"
    }))
    .unwrap()
}

#[test]
fn test_draft_scored_and_recorded() {
    let engine = RiskScoringEngine::default();
    let scored = engine.assess(draft(3, 4, &[10, 11]), &controls()).unwrap();

    assert_eq!(scored.initial_risk.score, 12);
    assert_eq!(scored.initial_risk.label, "Alto");
    assert_eq!(scored.residual_risk, Some(7));
    assert_eq!(scored.recommendations[0], "Implementar controles inmediatos");

    let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let record = scored.into_record(100, at);

    assert_eq!(record.id, 100);
    assert_eq!(record.initial_risk, 12);
    assert_eq!(record.residual_risk, Some(7));
    assert_eq!(record.draft.additional_controls.as_deref(), Some("Weekly toolbox talk"));
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_scored_assessment_json_shape() {
    let engine = RiskScoringEngine::new(Locale::En);
    let scored = engine.assess(draft(4, 4, &[12]), &controls()).unwrap();
    let value = serde_json::to_value(&scored).unwrap();

    assert_eq!(value["hazardId"], 1);
    assert_eq!(value["initialRisk"]["score"], 16);
    assert_eq!(value["initialRisk"]["band"], "critical");
    assert_eq!(value["initialRisk"]["label"], "Critical");
    assert_eq!(value["residualRisk"], 0);
    assert_eq!(value["residualBand"], "low");
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 7);
}

#[test]
fn test_record_round_trips_through_storage_json() {
    let engine = RiskScoringEngine::default();
    let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 30, 0).unwrap();
    let record = engine
        .assess(draft(2, 2, &[]), &controls())
        .unwrap()
        .into_record(7, at);

    let stored = serde_json::to_string(&record).unwrap();
    assert!(!stored.contains("residualRisk"));

    let loaded: AssessmentRecord = serde_json::from_str(&stored).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.initial_band(), Band::Low);
}

#[test]
fn test_dashboard_summary_and_filter() {
    let engine = RiskScoringEngine::default();
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let pairs = [(1, 1), (2, 4), (3, 4), (4, 4), (5, 5)];

    let records: Vec<AssessmentRecord> = pairs
        .iter()
        .enumerate()
        .map(|(i, &(p, s))| {
            engine
                .assess(draft(p, s, &[]), &controls())
                .unwrap()
                .into_record(i as u64 + 1, at)
        })
        .collect();

    let summary = BandSummary::from_records(&records);
    assert_eq!(summary.low, 1);
    assert_eq!(summary.medium, 1);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.critical, 2);
    assert_eq!(summary.total(), records.len());

    let critical: BandFilter = "critical".parse().unwrap();
    let ids: Vec<u64> = critical.apply(&records).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 5]);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = RiskScoringEngine::default();
    let handles: Vec<_> = (1u8..=5)
        .map(|p| {
            std::thread::spawn(move || {
                (1u8..=5)
                    .map(|s| engine.classify(p, s).unwrap().score)
                    .sum::<u32>()
            })
        })
        .collect();

    let totals: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![15, 30, 45, 60, 75]);
}
