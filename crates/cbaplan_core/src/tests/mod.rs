//! Integration tests for the appraisal engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Scenario table and evaluator consistency
//! - `tornado` - Tornado bars reconstructed from the evaluator
//! - `monte_carlo` - Reproducibility and distributional sanity
//! - `break_even` - Sign crossing of the bisection result

mod break_even;
mod scenarios;
