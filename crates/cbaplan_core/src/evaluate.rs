//! Scenario evaluation.
//!
//! [`scenario_npv`] is the only path from a set of scenario factors to an NPV;
//! every analysis in [`crate::analysis`] is built from repeated calls to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::finance::{N_YEARS, npv};
use crate::model::{Project, ProjectId, Scenario, ScenarioFactors};

/// 0.8% real social discount rate
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.008;

const MILLION: f64 = 1_000_000.0;

/// Capex with only its hardware portion scaled by `hw_factor`.
///
/// Projects whose capex is entirely hardware reduce to `capex * hw_factor`.
pub fn adjusted_capex(project: &Project, hw_factor: f64) -> f64 {
    project.capex * (1.0 - project.hw_share) + project.capex * project.hw_share * hw_factor
}

/// NPV in millions of a project under the given factors.
///
/// Factors are not range-checked; only the discount rate is validated.
pub fn scenario_npv(project: ProjectId, factors: ScenarioFactors, rate: f64) -> Result<f64> {
    let p = project.project();
    let capex = adjusted_capex(p, factors.hw_factor);
    let benefit = p.benefit * factors.uptake * factors.compliance;
    Ok(npv(capex, p.opex, benefit, rate, N_YEARS)? / MILLION)
}

/// NPV (millions) of each headline scenario for each project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTable {
    pub rate: f64,
    pub values: BTreeMap<ProjectId, BTreeMap<Scenario, f64>>,
}

impl ScenarioTable {
    pub fn get(&self, project: ProjectId, scenario: Scenario) -> Option<f64> {
        self.values
            .get(&project)
            .and_then(|row| row.get(&scenario))
            .copied()
    }
}

/// Evaluate the Optimistic, Expected and Pessimistic scenarios at `rate`
pub fn scenario_table(rate: f64) -> Result<ScenarioTable> {
    let mut values = BTreeMap::new();
    for project in ProjectId::ALL {
        let mut row = BTreeMap::new();
        for scenario in Scenario::ALL {
            row.insert(scenario, scenario_npv(project, scenario.factors(), rate)?);
        }
        values.insert(project, row);
    }
    Ok(ScenarioTable { rate, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hardware_share_scales_whole_capex() {
        let p = ProjectId::PatientVirtualCare.project();
        assert!((adjusted_capex(p, 0.75) - p.capex * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_partial_hardware_share() {
        let p = ProjectId::HospitalSimulation.project();
        let expected = p.capex - 205_300.0 + 205_300.0 * 1.2;
        assert!((adjusted_capex(p, 1.2) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_factors_outside_typical_range_accepted() {
        let value = scenario_npv(
            ProjectId::HospitalSimulation,
            ScenarioFactors::new(0.0, 5.0, 3.0),
            DEFAULT_DISCOUNT_RATE,
        )
        .unwrap();
        assert!(value < 0.0);
    }
}
