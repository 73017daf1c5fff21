//! Closed-form Black-Scholes-Merton pricing and analytic Greeks.
//!
//! Every operation is a pure function of its inputs: no state, no I/O, safe
//! to call concurrently without coordination. All six output operations share
//! the same d1/d2 intermediate terms; [`evaluate`] computes them once and
//! derives everything, which is guaranteed to agree with the per-formula
//! entry points.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::PricingError;
use crate::types::{Greeks, OptionType, PricingInputs, Valuation};

/// Theta is quoted per calendar day; the annualized formula value is divided
/// by this.
const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are quoted per 1-percentage-point move of their parameter.
const PER_POINT: f64 = 0.01;

fn standard_normal() -> Normal {
    // Constant parameters, construction cannot fail
    Normal::new(0.0, 1.0).unwrap()
}

/// Compute the shared intermediate terms
/// d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T)) and
/// d2 = d1 - sigma * sqrt(T).
///
/// Fails with [`PricingError::Domain`] when any precondition of
/// [`PricingInputs::validate`] is violated, so the division by
/// `sigma * sqrt(T)` is never reached with a zero denominator.
pub fn d1_d2(inputs: &PricingInputs) -> Result<(f64, f64), PricingError> {
    inputs.validate()?;
    Ok(d1_d2_raw(inputs))
}

fn d1_d2_raw(inputs: &PricingInputs) -> (f64, f64) {
    let vol_sqrt_t = inputs.volatility * inputs.time_to_expiry_years.sqrt();
    let d1 = ((inputs.spot / inputs.strike).ln()
        + (inputs.risk_free_rate + 0.5 * inputs.volatility * inputs.volatility)
            * inputs.time_to_expiry_years)
        / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Convert an internal non-finite result into a typed failure so the caller
/// never sees NaN/Inf.
fn finite(value: f64, what: &str) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::Domain(format!(
            "{} evaluated to a non-finite value: {}",
            what, value
        )))
    }
}

fn discount_factor(inputs: &PricingInputs) -> f64 {
    (-inputs.risk_free_rate * inputs.time_to_expiry_years).exp()
}

fn price_raw(inputs: &PricingInputs, option_type: OptionType, d1: f64, d2: f64, n: &Normal) -> f64 {
    let disc_k = inputs.strike * discount_factor(inputs);
    match option_type {
        OptionType::Call => inputs.spot * n.cdf(d1) - disc_k * n.cdf(d2),
        OptionType::Put => disc_k * n.cdf(-d2) - inputs.spot * n.cdf(-d1),
    }
}

fn delta_raw(option_type: OptionType, d1: f64, n: &Normal) -> f64 {
    match option_type {
        OptionType::Call => n.cdf(d1),
        OptionType::Put => -n.cdf(-d1),
    }
}

fn gamma_raw(inputs: &PricingInputs, d1: f64, n: &Normal) -> f64 {
    n.pdf(d1) / (inputs.spot * inputs.volatility * inputs.time_to_expiry_years.sqrt())
}

fn theta_raw(inputs: &PricingInputs, option_type: OptionType, d1: f64, d2: f64, n: &Normal) -> f64 {
    let decay =
        -(inputs.spot * n.pdf(d1) * inputs.volatility) / (2.0 * inputs.time_to_expiry_years.sqrt());
    let carry = inputs.risk_free_rate * inputs.strike * discount_factor(inputs);
    let annualized = match option_type {
        OptionType::Call => decay - carry * n.cdf(d2),
        OptionType::Put => decay + carry * n.cdf(-d2),
    };
    annualized / DAYS_PER_YEAR
}

fn vega_raw(inputs: &PricingInputs, d1: f64, n: &Normal) -> f64 {
    inputs.spot * inputs.time_to_expiry_years.sqrt() * n.pdf(d1) * PER_POINT
}

fn rho_raw(inputs: &PricingInputs, option_type: OptionType, d2: f64, n: &Normal) -> f64 {
    let scaled = PER_POINT * inputs.strike * inputs.time_to_expiry_years * discount_factor(inputs);
    match option_type {
        OptionType::Call => scaled * n.cdf(d2),
        OptionType::Put => -scaled * n.cdf(-d2),
    }
}

/// Theoretical price of a European option.
///
/// Call: `S*N(d1) - K*exp(-rT)*N(d2)`; put: `K*exp(-rT)*N(-d2) - S*N(-d1)`.
pub fn price(inputs: &PricingInputs, option_type: OptionType) -> Result<f64, PricingError> {
    let (d1, d2) = d1_d2(inputs)?;
    finite(
        price_raw(inputs, option_type, d1, d2, &standard_normal()),
        "price",
    )
}

/// Sensitivity of the option price to the underlying price.
///
/// Call delta lies in (0, 1), put delta in (-1, 0).
pub fn delta(inputs: &PricingInputs, option_type: OptionType) -> Result<f64, PricingError> {
    let (d1, _) = d1_d2(inputs)?;
    finite(delta_raw(option_type, d1, &standard_normal()), "delta")
}

/// Sensitivity of delta to the underlying price. Identical for calls and
/// puts, always non-negative.
pub fn gamma(inputs: &PricingInputs) -> Result<f64, PricingError> {
    let (d1, _) = d1_d2(inputs)?;
    finite(gamma_raw(inputs, d1, &standard_normal()), "gamma")
}

/// Time decay of the option price, quoted per calendar day (annualized
/// formula divided by 365).
pub fn theta(inputs: &PricingInputs, option_type: OptionType) -> Result<f64, PricingError> {
    let (d1, d2) = d1_d2(inputs)?;
    finite(
        theta_raw(inputs, option_type, d1, d2, &standard_normal()),
        "theta",
    )
}

/// Sensitivity of the option price to a 1-percentage-point move in
/// volatility. Identical for calls and puts, always non-negative.
pub fn vega(inputs: &PricingInputs) -> Result<f64, PricingError> {
    let (d1, _) = d1_d2(inputs)?;
    finite(vega_raw(inputs, d1, &standard_normal()), "vega")
}

/// Sensitivity of the option price to a 1-percentage-point move in the
/// risk-free rate.
pub fn rho(inputs: &PricingInputs, option_type: OptionType) -> Result<f64, PricingError> {
    let (_, d2) = d1_d2(inputs)?;
    finite(rho_raw(inputs, option_type, d2, &standard_normal()), "rho")
}

/// Compute price and all five Greeks from a single d1/d2 derivation.
///
/// The results agree exactly with the individual entry points; either the
/// whole valuation succeeds or the call fails with one typed error.
pub fn evaluate(inputs: &PricingInputs, option_type: OptionType) -> Result<Valuation, PricingError> {
    let (d1, d2) = d1_d2(inputs)?;
    let n = standard_normal();
    Ok(Valuation {
        price: finite(price_raw(inputs, option_type, d1, d2, &n), "price")?,
        greeks: Greeks {
            delta: finite(delta_raw(option_type, d1, &n), "delta")?,
            gamma: finite(gamma_raw(inputs, d1, &n), "gamma")?,
            theta: finite(theta_raw(inputs, option_type, d1, d2, &n), "theta")?,
            vega: finite(vega_raw(inputs, d1, &n), "vega")?,
            rho: finite(rho_raw(inputs, option_type, d2, &n), "rho")?,
        },
    })
}
