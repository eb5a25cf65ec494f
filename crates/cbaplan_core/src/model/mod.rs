mod project;
mod rates;
mod scenario;

pub use project::{HOSPITAL_HARDWARE_COSTS, Project, ProjectId};
pub use rates::{DISCOUNT_SWEEP, DiscountRate, HIGHLIGHTED_RATES, RATES};
pub use scenario::{Scenario, ScenarioFactors, SensitivityParam};
