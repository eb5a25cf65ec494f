//! Tests for the headline scenario table

use crate::evaluate::{DEFAULT_DISCOUNT_RATE, scenario_npv, scenario_table};
use crate::model::{ProjectId, Scenario, ScenarioFactors};

/// Expected scenario equals the evaluator at baseline factors
#[test]
fn test_expected_matches_baseline_evaluation() {
    let table = scenario_table(DEFAULT_DISCOUNT_RATE).unwrap();
    for project in ProjectId::ALL {
        let direct = scenario_npv(project, ScenarioFactors::BASELINE, DEFAULT_DISCOUNT_RATE).unwrap();
        assert_eq!(table.get(project, Scenario::Expected), Some(direct));
    }
}

/// Pinned values of the scenario table at 0.8%
#[test]
fn test_scenario_values() {
    let table = scenario_table(DEFAULT_DISCOUNT_RATE).unwrap();
    let cases = [
        (ProjectId::PatientVirtualCare, Scenario::Optimistic, 29.301_934),
        (ProjectId::PatientVirtualCare, Scenario::Expected, 18.316_601),
        (ProjectId::PatientVirtualCare, Scenario::Pessimistic, 4.610_840),
        (ProjectId::HospitalSimulation, Scenario::Optimistic, 59.755_465),
        (ProjectId::HospitalSimulation, Scenario::Expected, 37.021_608),
        (ProjectId::HospitalSimulation, Scenario::Pessimistic, 8.647_914),
    ];
    for (project, scenario, expected) in cases {
        let actual = table.get(project, scenario).unwrap();
        assert!(
            (actual - expected).abs() < 1e-5,
            "{project:?}/{scenario:?}: expected {expected}, got {actual}"
        );
    }
}

/// Ordering of scenarios holds for both projects
#[test]
fn test_scenario_ordering() {
    let table = scenario_table(DEFAULT_DISCOUNT_RATE).unwrap();
    for project in ProjectId::ALL {
        let opt = table.get(project, Scenario::Optimistic).unwrap();
        let exp = table.get(project, Scenario::Expected).unwrap();
        let pes = table.get(project, Scenario::Pessimistic).unwrap();
        assert!(opt > exp && exp > pes);
    }
}

#[test]
fn test_invalid_rate_fails_table() {
    assert!(scenario_table(-1.0).is_err());
}

#[test]
fn test_table_serializes_with_source_keys() {
    let table = scenario_table(DEFAULT_DISCOUNT_RATE).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert!(json["values"]["MACRO1"]["Expected"].is_number());
    assert!(json["values"]["MACRO2"]["Pessimistic"].is_number());
}
