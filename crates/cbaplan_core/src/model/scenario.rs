use serde::{Deserialize, Serialize};

/// Multiplicative deviations from the expected case (1.0 = expected)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFactors {
    pub uptake: f64,
    pub compliance: f64,
    pub hw_factor: f64,
}

impl ScenarioFactors {
    pub const BASELINE: ScenarioFactors = ScenarioFactors::new(1.0, 1.0, 1.0);

    pub const fn new(uptake: f64, compliance: f64, hw_factor: f64) -> Self {
        Self {
            uptake,
            compliance,
            hw_factor,
        }
    }
}

impl Default for ScenarioFactors {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// The three headline scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scenario {
    Optimistic,
    Expected,
    Pessimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Expected, Scenario::Pessimistic];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Optimistic => "Optimistic",
            Scenario::Expected => "Expected",
            Scenario::Pessimistic => "Pessimistic",
        }
    }

    pub fn factors(&self) -> ScenarioFactors {
        match self {
            Scenario::Optimistic => ScenarioFactors::new(1.20, 1.30, 0.75),
            Scenario::Expected => ScenarioFactors::BASELINE,
            Scenario::Pessimistic => ScenarioFactors::new(0.60, 0.50, 1.10),
        }
    }
}

/// Parameters varied one at a time by the tornado analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SensitivityParam {
    UptakeRate,
    ComplianceFactor,
    HardwareCostFactor,
}

impl SensitivityParam {
    pub const ALL: [SensitivityParam; 3] = [
        SensitivityParam::UptakeRate,
        SensitivityParam::ComplianceFactor,
        SensitivityParam::HardwareCostFactor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensitivityParam::UptakeRate => "Uptake Rate",
            SensitivityParam::ComplianceFactor => "Compliance Factor",
            SensitivityParam::HardwareCostFactor => "Hardware Cost Factor",
        }
    }

    /// (low, high) sweep bounds
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            SensitivityParam::UptakeRate => (0.6, 1.2),
            SensitivityParam::ComplianceFactor => (0.7, 1.3),
            SensitivityParam::HardwareCostFactor => (0.8, 1.2),
        }
    }

    /// Baseline factors with only this parameter set to `value`
    pub fn at(&self, value: f64) -> ScenarioFactors {
        let mut factors = ScenarioFactors::BASELINE;
        match self {
            SensitivityParam::UptakeRate => factors.uptake = value,
            SensitivityParam::ComplianceFactor => factors.compliance = value,
            SensitivityParam::HardwareCostFactor => factors.hw_factor = value,
        }
        factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_at_touches_single_factor() {
        let f = SensitivityParam::ComplianceFactor.at(0.7);
        assert_eq!(f, ScenarioFactors::new(1.0, 0.7, 1.0));

        let f = SensitivityParam::HardwareCostFactor.at(1.2);
        assert_eq!(f, ScenarioFactors::new(1.0, 1.0, 1.2));
    }

    #[test]
    fn test_expected_is_baseline() {
        assert_eq!(Scenario::Expected.factors(), ScenarioFactors::BASELINE);
    }
}
