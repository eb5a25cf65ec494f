//! Break-even adoption search.
//!
//! The adoption factor scales the annual benefit only; capex and opex stay at
//! their base values. NPV is increasing in the factor, so bisection applies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::finance::{N_YEARS, npv};
use crate::model::{ProjectId, RATES};

pub const BREAK_EVEN_ITERATIONS: usize = 60;

/// Adoption factors searched
pub const BREAK_EVEN_BRACKET: (f64, f64) = (0.0, 2.0);

/// Smallest adoption factor (to bisection precision) with a positive NPV.
///
/// Returns the upper end of the final bracket, so a project that never
/// breaks even inside the bracket reports `2.0`.
pub fn adoption_threshold(project: ProjectId, rate: f64) -> Result<f64> {
    let p = project.project();
    let (mut low, mut high) = BREAK_EVEN_BRACKET;

    for _ in 0..BREAK_EVEN_ITERATIONS {
        let mid = f64::midpoint(low, high);
        if npv(p.capex, p.opex, p.benefit * mid, rate, N_YEARS)? > 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    Ok(high)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenRow {
    pub label: String,
    pub rate: f64,
    pub thresholds: BTreeMap<ProjectId, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenTable {
    pub rows: Vec<BreakEvenRow>,
}

/// Break-even factors for both projects at each named rate
pub fn break_even_table() -> Result<BreakEvenTable> {
    let mut rows = Vec::with_capacity(RATES.len());
    for named in RATES {
        let mut thresholds = BTreeMap::new();
        for project in ProjectId::ALL {
            thresholds.insert(project, adoption_threshold(project, named.rate)?);
        }
        rows.push(BreakEvenRow {
            label: named.label.to_string(),
            rate: named.rate,
            thresholds,
        });
    }
    Ok(BreakEvenTable { rows })
}
