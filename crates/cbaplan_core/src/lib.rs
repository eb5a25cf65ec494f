//! Cost-benefit analysis engine
//!
//! This crate computes Net Present Value (NPV) for two fixed capital investment
//! projects under varying assumptions. It supports:
//! - Financial primitives (annuity factor, NPV, IRR, benefit-cost ratio)
//! - A closed registry of the two projects and their cost structure
//! - Scenario evaluation from uptake, compliance and hardware-cost factors
//! - One-at-a-time tornado sensitivity analysis
//! - Seeded Monte Carlo simulation of the NPV distribution
//! - Break-even adoption search, discount-rate sweeps and waterfall decomposition
//!
//! # Example
//!
//! ```
//! use cbaplan_core::{ProjectId, ScenarioFactors, scenario_npv};
//!
//! let expected = scenario_npv(
//!     ProjectId::PatientVirtualCare,
//!     ScenarioFactors::BASELINE,
//!     cbaplan_core::DEFAULT_DISCOUNT_RATE,
//! )
//! .unwrap();
//! assert!(expected > 18.0 && expected < 18.5);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod finance;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{AnalysisError, FinanceError};
pub use evaluate::{DEFAULT_DISCOUNT_RATE, ScenarioTable, adjusted_capex, scenario_npv, scenario_table};
pub use finance::{IrrSolution, N_YEARS, annuity_factor, bcr, irr, npv};
pub use model::{
    DiscountRate, Project, ProjectId, RATES, Scenario, ScenarioFactors, SensitivityParam,
};
