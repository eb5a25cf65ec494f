//! One-at-a-time sensitivity (tornado) analysis.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluate::scenario_npv;
use crate::model::{ProjectId, ScenarioFactors, SensitivityParam};

/// Signed NPV change (millions) when one parameter is moved to its bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub low: f64,
    pub high: f64,
}

impl TornadoBar {
    /// Total swing used to rank parameters
    pub fn range(&self) -> f64 {
        self.low.abs() + self.high.abs()
    }
}

/// Tornado bars for one project.
///
/// `bars` carries no ordering; use [`TornadoResult::ranked`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoResult {
    pub project: ProjectId,
    pub base_npv: f64,
    pub bars: FxHashMap<SensitivityParam, TornadoBar>,
}

impl TornadoResult {
    /// Bars sorted by descending swing
    pub fn ranked(&self) -> Vec<(SensitivityParam, TornadoBar)> {
        let mut ranked: Vec<_> = self.bars.iter().map(|(p, b)| (*p, *b)).collect();
        ranked.sort_by(|a, b| b.1.range().total_cmp(&a.1.range()).then(a.0.cmp(&b.0)));
        ranked
    }

    pub fn bar(&self, param: SensitivityParam) -> Option<TornadoBar> {
        self.bars.get(&param).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoAnalysis {
    pub rate: f64,
    pub project1: TornadoResult,
    pub project2: TornadoResult,
}

impl TornadoAnalysis {
    pub fn get(&self, project: ProjectId) -> &TornadoResult {
        match project {
            ProjectId::PatientVirtualCare => &self.project1,
            ProjectId::HospitalSimulation => &self.project2,
        }
    }
}

/// Sweep each parameter to its bounds with the others held at 1.0
pub fn tornado_for(project: ProjectId, rate: f64) -> Result<TornadoResult> {
    let base_npv = scenario_npv(project, ScenarioFactors::BASELINE, rate)?;

    let mut bars = FxHashMap::default();
    for param in SensitivityParam::ALL {
        let (low, high) = param.bounds();
        let low_npv = scenario_npv(project, param.at(low), rate)?;
        let high_npv = scenario_npv(project, param.at(high), rate)?;
        bars.insert(
            param,
            TornadoBar {
                low: low_npv - base_npv,
                high: high_npv - base_npv,
            },
        );
    }

    Ok(TornadoResult {
        project,
        base_npv,
        bars,
    })
}

/// Tornado analysis for both projects
pub fn tornado(rate: f64) -> Result<TornadoAnalysis> {
    Ok(TornadoAnalysis {
        rate,
        project1: tornado_for(ProjectId::PatientVirtualCare, rate)?,
        project2: tornado_for(ProjectId::HospitalSimulation, rate)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::DEFAULT_DISCOUNT_RATE;

    #[test]
    fn test_ranked_orders_by_swing() {
        // Uptake and compliance span the same 0.6 band, so only hardware's
        // place is fixed
        let result = tornado_for(ProjectId::PatientVirtualCare, DEFAULT_DISCOUNT_RATE).unwrap();
        let ranked = result.ranked();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[2].0, SensitivityParam::HardwareCostFactor);
        assert!(ranked[0].1.range() >= ranked[1].1.range());
        assert!(ranked[1].1.range() > ranked[2].1.range());
    }

    #[test]
    fn test_hardware_bar_signs() {
        // Cheaper hardware raises NPV, dearer hardware lowers it
        let result = tornado_for(ProjectId::HospitalSimulation, DEFAULT_DISCOUNT_RATE).unwrap();
        let bar = result.bar(SensitivityParam::HardwareCostFactor).unwrap();
        assert!(bar.low > 0.0);
        assert!(bar.high < 0.0);
        assert!((bar.low - 0.04106).abs() < 1e-6);
    }
}
