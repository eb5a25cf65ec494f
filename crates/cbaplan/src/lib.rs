//! Cost-benefit appraisal front end
//!
//! Drives the [`cbaplan_core`] analyses and presents their results:
//! - Plain-text report on stdout
//! - JSON export of every chart series to an output directory
//! - Read-only terminal chart viewer

pub mod app;
pub mod components;
pub mod config;
pub mod export;
pub mod logging;
pub mod report;
pub mod state;
pub mod util;

pub use app::App;
pub use config::AnalysisSettings;
pub use logging::init_logging;
pub use report::Report;
