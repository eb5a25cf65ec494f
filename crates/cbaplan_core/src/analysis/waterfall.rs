//! Waterfall decomposition of NPV from a pessimistic starting point to the
//! optimistic outcome.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluate::scenario_npv;
use crate::model::{ProjectId, Scenario, ScenarioFactors};

/// Starting point: 60% uptake, 70% compliance, 120% hardware cost
pub const WATERFALL_START: ScenarioFactors = ScenarioFactors::new(0.6, 0.7, 1.2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterfallStep {
    Uptake,
    Compliance,
    HardwareCost,
    Optimistic,
}

impl WaterfallStep {
    pub const ALL: [WaterfallStep; 4] = [
        WaterfallStep::Uptake,
        WaterfallStep::Compliance,
        WaterfallStep::HardwareCost,
        WaterfallStep::Optimistic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WaterfallStep::Uptake => "Uptake Improvement",
            WaterfallStep::Compliance => "Compliance Improvement",
            WaterfallStep::HardwareCost => "Hardware Cost Reduction",
            WaterfallStep::Optimistic => "Additional Optimistic Factors",
        }
    }

    /// Factors reached once this step is applied
    pub fn target(&self) -> ScenarioFactors {
        match self {
            WaterfallStep::Uptake => ScenarioFactors::new(1.0, 0.7, 1.2),
            WaterfallStep::Compliance => ScenarioFactors::new(1.0, 1.0, 1.2),
            WaterfallStep::HardwareCost => ScenarioFactors::BASELINE,
            WaterfallStep::Optimistic => Scenario::Optimistic.factors(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub step: WaterfallStep,
    /// NPV change contributed by this step
    pub delta: f64,
    /// Running NPV before this step
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waterfall {
    pub project: ProjectId,
    pub base: f64,
    pub steps: Vec<WaterfallBar>,
    pub total: f64,
}

pub fn waterfall(project: ProjectId, rate: f64) -> Result<Waterfall> {
    let base = scenario_npv(project, WATERFALL_START, rate)?;

    let mut steps = Vec::with_capacity(WaterfallStep::ALL.len());
    let mut previous = base;
    let mut running = base;
    for step in WaterfallStep::ALL {
        let reached = scenario_npv(project, step.target(), rate)?;
        let delta = reached - previous;
        steps.push(WaterfallBar {
            step,
            delta,
            bottom: running,
        });
        running += delta;
        previous = reached;
    }

    Ok(Waterfall {
        project,
        base,
        steps,
        total: running,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::DEFAULT_DISCOUNT_RATE;

    #[test]
    fn test_total_reaches_optimistic() {
        for project in ProjectId::ALL {
            let wf = waterfall(project, DEFAULT_DISCOUNT_RATE).unwrap();
            let optimistic =
                scenario_npv(project, Scenario::Optimistic.factors(), DEFAULT_DISCOUNT_RATE)
                    .unwrap();
            assert!((wf.total - optimistic).abs() < 1e-9);
            assert_eq!(wf.steps.len(), 4);
        }
    }

    #[test]
    fn test_base_value() {
        let wf = waterfall(ProjectId::PatientVirtualCare, DEFAULT_DISCOUNT_RATE).unwrap();
        assert!((wf.base - 6.946_119).abs() < 1e-5);
        assert_eq!(wf.steps[0].bottom, wf.base);
    }
}
