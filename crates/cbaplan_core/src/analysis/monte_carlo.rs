//! Monte Carlo propagation of factor uncertainty into NPV.
//!
//! Each call builds its own `StdRng` from the seed, so results depend only on
//! the configuration. Per sample the draws are taken in the order uptake,
//! compliance, hardware factor; samples are generated in index order.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal, Triangular};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::evaluate::{DEFAULT_DISCOUNT_RATE, scenario_npv};
use crate::model::{ProjectId, ScenarioFactors};

use super::metrics::DistributionSummary;

/// Hardware factor draws are clamped (not rejected) into this band
pub const HW_FACTOR_BOUNDS: (f64, f64) = (0.7, 1.3);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub n_samples: usize,
    pub seed: u64,
    pub rate: f64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_samples: 10_000,
            seed: 0,
            rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

/// Input distributions of the three scenario factors
#[derive(Debug, Clone)]
pub struct FactorSampler {
    uptake: Triangular<f64>,
    compliance: Triangular<f64>,
    hw_factor: Normal<f64>,
}

impl FactorSampler {
    /// Uptake ~ Tri(0.4, 0.8, 1.2), compliance ~ Tri(0.8, 1.0, 1.3),
    /// hardware ~ N(1.0, 0.1) clamped to [0.7, 1.3]
    pub fn standard() -> Result<Self, AnalysisError> {
        Ok(Self {
            uptake: triangular(0.4, 0.8, 1.2)?,
            compliance: triangular(0.8, 1.0, 1.3)?,
            hw_factor: Normal::new(1.0, 0.1).map_err(|e| AnalysisError::InvalidDistribution {
                distribution: "Normal",
                reason: e.to_string(),
            })?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScenarioFactors {
        let uptake = self.uptake.sample(rng);
        let compliance = self.compliance.sample(rng);
        let hw_factor = self
            .hw_factor
            .sample(rng)
            .clamp(HW_FACTOR_BOUNDS.0, HW_FACTOR_BOUNDS.1);
        ScenarioFactors::new(uptake, compliance, hw_factor)
    }
}

fn triangular(min: f64, mode: f64, max: f64) -> Result<Triangular<f64>, AnalysisError> {
    Triangular::new(min, max, mode).map_err(|e| AnalysisError::InvalidDistribution {
        distribution: "Triangular",
        reason: e.to_string(),
    })
}

/// One draw of the factors with the NPV (millions) of each project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSample {
    pub factors: ScenarioFactors,
    pub npv_project1: f64,
    pub npv_project2: f64,
}

impl MonteCarloSample {
    pub fn npv(&self, project: ProjectId) -> f64 {
        match project {
            ProjectId::PatientVirtualCare => self.npv_project1,
            ProjectId::HospitalSimulation => self.npv_project2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub config: MonteCarloConfig,
    pub samples: Vec<MonteCarloSample>,
}

impl MonteCarloResult {
    /// NPV sequence of one project in sample order
    pub fn npvs(&self, project: ProjectId) -> Vec<f64> {
        self.samples.iter().map(|s| s.npv(project)).collect()
    }

    /// Sampled factor triples in sample order
    pub fn parameters(&self) -> Vec<ScenarioFactors> {
        self.samples.iter().map(|s| s.factors).collect()
    }

    pub fn summary(&self, project: ProjectId) -> Result<DistributionSummary, AnalysisError> {
        DistributionSummary::from_values(&self.npvs(project))
    }
}

/// Run the simulation at the default discount rate
pub fn monte_carlo(n_samples: usize, seed: u64) -> Result<MonteCarloResult, AnalysisError> {
    monte_carlo_with_config(&MonteCarloConfig {
        n_samples,
        seed,
        ..Default::default()
    })
}

pub fn monte_carlo_with_config(
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult, AnalysisError> {
    tracing::debug!(
        n_samples = config.n_samples,
        seed = config.seed,
        rate = config.rate,
        "running Monte Carlo simulation"
    );

    let sampler = FactorSampler::standard()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut samples = Vec::with_capacity(config.n_samples);
    for _ in 0..config.n_samples {
        let factors = sampler.sample(&mut rng);
        samples.push(MonteCarloSample {
            factors,
            npv_project1: scenario_npv(ProjectId::PatientVirtualCare, factors, config.rate)?,
            npv_project2: scenario_npv(ProjectId::HospitalSimulation, factors, config.rate)?,
        });
    }

    Ok(MonteCarloResult {
        config: *config,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_factors_within_support() {
        let sampler = FactorSampler::standard().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let f = sampler.sample(&mut rng);
            assert!((0.4..=1.2).contains(&f.uptake));
            assert!((0.8..=1.3).contains(&f.compliance));
            assert!((0.7..=1.3).contains(&f.hw_factor));
        }
    }

    #[test]
    fn test_empty_run() {
        let result = monte_carlo(0, 3).unwrap();
        assert!(result.samples.is_empty());
        assert_eq!(result.summary(ProjectId::PatientVirtualCare), Err(AnalysisError::EmptySample));
    }

    #[test]
    fn test_invalid_rate_propagates() {
        let config = MonteCarloConfig {
            n_samples: 10,
            seed: 0,
            rate: -1.5,
        };
        assert!(matches!(
            monte_carlo_with_config(&config),
            Err(AnalysisError::Finance(_))
        ));
    }
}
