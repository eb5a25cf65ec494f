//! NPV sensitivity to the discount rate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::finance::{N_YEARS, npv};
use crate::model::{DISCOUNT_SWEEP, HIGHLIGHTED_RATES, ProjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSweep {
    pub rates: Vec<f64>,
    /// Base-case NPV (millions) per project, aligned with `rates`
    pub series: BTreeMap<ProjectId, Vec<f64>>,
    /// Indices into `rates` of the highlighted rates
    pub highlighted: Vec<usize>,
}

impl DiscountSweep {
    pub fn labels(&self) -> Vec<String> {
        self.rates.iter().map(|r| format!("{:.1}%", r * 100.0)).collect()
    }

    pub fn series(&self, project: ProjectId) -> &[f64] {
        self.series.get(&project).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Base-case NPV of both projects across [`DISCOUNT_SWEEP`]
pub fn discount_sweep() -> Result<DiscountSweep> {
    let rates = DISCOUNT_SWEEP.to_vec();

    let mut series = BTreeMap::new();
    for project in ProjectId::ALL {
        let p = project.project();
        let values = rates
            .iter()
            .map(|&r| npv(p.capex, p.opex, p.benefit, r, N_YEARS).map(|v| v / 1_000_000.0))
            .collect::<Result<Vec<_>>>()?;
        series.insert(project, values);
    }

    let highlighted = rates
        .iter()
        .enumerate()
        .filter(|(_, r)| HIGHLIGHTED_RATES.iter().any(|h| (*h - **r).abs() < 1e-12))
        .map(|(i, _)| i)
        .collect();

    Ok(DiscountSweep {
        rates,
        series,
        highlighted,
    })
}
