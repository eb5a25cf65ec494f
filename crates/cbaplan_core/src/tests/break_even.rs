//! Tests for the break-even adoption search

use crate::analysis::{adoption_threshold, break_even_table};
use crate::finance::{N_YEARS, npv};
use crate::model::{ProjectId, RATES};

/// NPV changes sign just below the reported factor.
///
/// Sixty halvings of [0, 2] are finer than f64 resolution near the threshold,
/// so the check steps down by a fixed 1e-9 instead.
#[test]
fn test_threshold_crosses_zero() {
    let step = 1e-9;

    for project in ProjectId::ALL {
        let p = project.project();
        for named in RATES {
            let f = adoption_threshold(project, named.rate).unwrap();
            let at = npv(p.capex, p.opex, p.benefit * f, named.rate, N_YEARS).unwrap();
            let below = npv(p.capex, p.opex, p.benefit * (f - step), named.rate, N_YEARS).unwrap();
            assert!(at > 0.0, "{project:?} at {}: NPV {at} should be positive", named.label);
            assert!(below <= 0.0, "{project:?} at {}: NPV {below} should not be positive", named.label);
        }
    }
}

#[test]
fn test_thresholds_rise_with_rate() {
    let table = break_even_table().unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[3].label, "5.7% WACC");

    for project in ProjectId::ALL {
        let values: Vec<f64> = table.rows.iter().map(|r| r.thresholds[&project]).collect();
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
