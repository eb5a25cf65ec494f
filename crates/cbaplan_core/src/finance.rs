//! Discounted cash-flow primitives.
//!
//! All functions treat operating costs and benefits as level annual flows
//! received at the end of each of `n` years, with capital spent up front.

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, Result};

/// Appraisal horizon in years
pub const N_YEARS: u32 = 15;

/// Starting point for the IRR search
pub const IRR_GUESS: f64 = 0.1;

const IRR_TOLERANCE: f64 = 1e-10;
const IRR_MAX_ITERATIONS: usize = 100;

fn check_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > -1.0 {
        Ok(())
    } else {
        Err(FinanceError::InvalidRate(rate))
    }
}

/// Present value of a unit annuity paid at the end of each of `n` years.
///
/// Computed as the explicit sum, so `rate == 0.0` yields exactly `n`.
pub fn annuity_factor(rate: f64, n: u32) -> Result<f64> {
    check_rate(rate)?;
    let growth = 1.0 + rate;
    Ok((1..=n).map(|t| 1.0 / growth.powi(t as i32)).sum())
}

/// Net present value of an up-front `capex` followed by level `benefit`
/// and `opex` flows over `n` years.
pub fn npv(capex: f64, opex: f64, benefit: f64, rate: f64, n: u32) -> Result<f64> {
    let ann = annuity_factor(rate, n)?;
    Ok(benefit * ann - (capex + opex * ann))
}

/// Discounted benefits divided by discounted costs (capex plus discounted opex)
pub fn bcr(capex: f64, opex: f64, benefit: f64, rate: f64, n: u32) -> Result<f64> {
    let ann = annuity_factor(rate, n)?;
    let costs = capex + opex * ann;
    if costs == 0.0 {
        return Err(FinanceError::ZeroDenominator);
    }
    Ok(benefit * ann / costs)
}

/// Outcome of the Newton-Raphson IRR search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Last iterate; only trustworthy when `converged` is set
    pub rate: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Internal rate of return for a level net flow `benefit - opex` against
/// an up-front `capex`.
///
/// Runs Newton-Raphson from `guess` until the step drops below 1e-10 or
/// 100 iterations elapse. Hitting the cap is not an error: the last
/// iterate is returned with `converged == false`. An iterate at or below
/// -1 (or non-finite) is [`FinanceError::Diverged`].
pub fn irr(capex: f64, opex: f64, benefit: f64, n: u32, guess: f64) -> Result<IrrSolution> {
    newton_irr(capex, opex, benefit, n, guess, IRR_MAX_ITERATIONS)
}

fn newton_irr(
    capex: f64,
    opex: f64,
    benefit: f64,
    n: u32,
    guess: f64,
    max_iterations: usize,
) -> Result<IrrSolution> {
    check_rate(guess)?;
    let cash_flow = benefit - opex;
    let mut rate = guess;

    for iteration in 0..max_iterations {
        let mut pv = -capex;
        let mut d_pv = 0.0;
        for t in 1..=n {
            let t = t as i32;
            let growth = 1.0 + rate;
            pv += cash_flow / growth.powi(t);
            d_pv += -(t as f64) * cash_flow / growth.powi(t + 1);
        }

        if d_pv == 0.0 {
            return Err(FinanceError::ZeroDerivative { rate, iteration });
        }

        let next = rate - pv / d_pv;
        if !next.is_finite() || next <= -1.0 {
            return Err(FinanceError::Diverged { iteration });
        }
        if (next - rate).abs() < IRR_TOLERANCE {
            return Ok(IrrSolution {
                rate: next,
                iterations: iteration + 1,
                converged: true,
            });
        }
        rate = next;
    }

    Ok(IrrSolution {
        rate,
        iterations: max_iterations,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annuity_factor_zero_rate_is_horizon() {
        assert_eq!(annuity_factor(0.0, 15).unwrap(), 15.0);
        assert_eq!(annuity_factor(0.0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_annuity_factor_vanishes_for_large_rates() {
        let ann = annuity_factor(1e9, 15).unwrap();
        assert!(ann < 1e-8, "annuity factor {ann} should approach zero");
    }

    #[test]
    fn test_annuity_factor_matches_closed_form() {
        let rate: f64 = 0.05;
        let closed = (1.0 - (1.0 + rate).powi(-15)) / rate;
        assert!((annuity_factor(rate, 15).unwrap() - closed).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        assert_eq!(annuity_factor(-1.0, 15), Err(FinanceError::InvalidRate(-1.0)));
        assert!(annuity_factor(-2.5, 15).is_err());
        assert!(annuity_factor(f64::NAN, 15).is_err());
        assert!(npv(1.0, 1.0, 1.0, f64::INFINITY, 15).is_err());
    }

    #[test]
    fn test_npv_regression_fixture() {
        let value = npv(121_900.0, 79_800.0, 1_389_166.7, 0.008, N_YEARS).unwrap();
        assert!(
            (value - 18_316_601.434_723).abs() < 1e-3,
            "Expected 18316601.4347, got {value}"
        );
    }

    #[test]
    fn test_npv_decreasing_in_rate() {
        let rates: Vec<f64> = (1..=40).map(|i| i as f64 * 0.005).collect();
        let values: Vec<f64> = rates
            .iter()
            .map(|&r| npv(1_145_300.0, 166_000.0, 2_876_333.0, r, N_YEARS).unwrap())
            .collect();
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0], "NPV must fall as the rate rises");
        }
    }

    #[test]
    fn test_bcr_zero_denominator() {
        assert_eq!(
            bcr(0.0, 0.0, 100.0, 0.05, N_YEARS),
            Err(FinanceError::ZeroDenominator)
        );
    }

    #[test]
    fn test_bcr_above_one_when_npv_positive() {
        let ratio = bcr(121_900.0, 79_800.0, 1_389_166.7, 0.008, N_YEARS).unwrap();
        assert!(ratio > 1.0);
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let solution = irr(1_145_300.0, 166_000.0, 2_876_333.0, N_YEARS, IRR_GUESS).unwrap();
        assert!(solution.converged);
        assert!((solution.rate - 2.366_483).abs() < 1e-5);

        // NPV of capex against the net flow vanishes at the IRR
        let at_irr = npv(1_145_300.0, 166_000.0, 2_876_333.0, solution.rate, N_YEARS).unwrap();
        assert!(at_irr.abs() < 1e-3);
    }

    #[test]
    fn test_irr_flat_curve_is_error() {
        // Zero net flow makes the curve flat
        let result = irr(1_000.0, 500.0, 500.0, N_YEARS, IRR_GUESS);
        assert!(matches!(result, Err(FinanceError::ZeroDerivative { .. })));
    }

    #[test]
    fn test_irr_invalid_guess_rejected() {
        let result = irr(1_000.0, 0.0, 200.0, N_YEARS, -1.0);
        assert_eq!(result, Err(FinanceError::InvalidRate(-1.0)));
        assert!(irr(1_000.0, 0.0, 200.0, N_YEARS, f64::NAN).is_err());
    }

    #[test]
    fn test_irr_iterate_below_minus_one_diverges() {
        // Tiny net flow against a large outlay drives Newton below -100%
        for capex in [1_000.0, 1e6] {
            let result = irr(capex, 0.0, 1.0, N_YEARS, IRR_GUESS);
            assert!(
                matches!(result, Err(FinanceError::Diverged { .. })),
                "capex {capex}: {result:?}"
            );
        }
    }

    #[test]
    fn test_irr_iteration_cap_returns_unconverged() {
        let solution =
            newton_irr(1_145_300.0, 166_000.0, 2_876_333.0, N_YEARS, IRR_GUESS, 2).unwrap();
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 2);
        assert!(solution.rate.is_finite() && solution.rate > -1.0);
    }
}
