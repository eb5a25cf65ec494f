//! Discount rates used across the appraisal.

use serde::Serialize;

/// A named real discount rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountRate {
    pub label: &'static str,
    pub rate: f64,
}

/// Social discount rates and the cost of capital the projects are appraised at
pub const RATES: [DiscountRate; 4] = [
    DiscountRate {
        label: "0.8% SDR",
        rate: 0.008,
    },
    DiscountRate {
        label: "3% SDR",
        rate: 0.03,
    },
    DiscountRate {
        label: "5% SDR",
        rate: 0.05,
    },
    DiscountRate {
        label: "5.7% WACC",
        rate: 0.057,
    },
];

/// Rates swept by the discount-rate sensitivity series
pub const DISCOUNT_SWEEP: [f64; 11] = [
    0.001, 0.005, 0.008, 0.01, 0.02, 0.03, 0.04, 0.05, 0.057, 0.07, 0.1,
];

/// Rates called out on the sensitivity chart (0.8%, 3%, 5.7%)
pub const HIGHLIGHTED_RATES: [f64; 3] = [0.008, 0.03, 0.057];
