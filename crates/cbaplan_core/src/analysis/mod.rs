//! Sensitivity and simulation analyses built on [`crate::evaluate::scenario_npv`].
//!
//! - `tornado` - one-at-a-time sensitivity around the expected case
//! - `monte_carlo` - seeded sampling of the scenario factors
//! - `metrics` - summary statistics and histograms of NPV samples
//! - `break_even` - minimum adoption factor for a non-negative NPV
//! - `discount` - NPV across a sweep of discount rates
//! - `waterfall` - decomposition of the pessimistic-to-optimistic NPV gap
//! - `summary` - NPV, IRR and BCR per project at each named rate

mod break_even;
mod discount;
mod metrics;
mod monte_carlo;
mod summary;
mod tornado;
mod waterfall;

pub use break_even::{
    BREAK_EVEN_BRACKET, BREAK_EVEN_ITERATIONS, BreakEvenRow, BreakEvenTable, adoption_threshold,
    break_even_table,
};
pub use discount::{DiscountSweep, discount_sweep};
pub use metrics::{DEFAULT_HISTOGRAM_BINS, DistributionSummary, Histogram, percentile};
pub use monte_carlo::{
    FactorSampler, HW_FACTOR_BOUNDS, MonteCarloConfig, MonteCarloResult, MonteCarloSample, monte_carlo,
    monte_carlo_with_config,
};
pub use summary::{ProjectSummary, project_summaries};
pub use tornado::{TornadoAnalysis, TornadoBar, TornadoResult, tornado, tornado_for};
pub use waterfall::{Waterfall, WaterfallBar, WaterfallStep, waterfall};
