//! # Greeks-Lib: Black-Scholes Option Pricing and Analytic Greeks
//!
//! `greeks-lib` computes the theoretical price of a European option and its
//! first- and second-order sensitivities under the Black-Scholes-Merton
//! model, from five scalar inputs (spot, strike, risk-free rate, time to
//! expiry, volatility) and an option-type flag.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: call and put prices via the Black-Scholes formulas
//! - **Analytic Greeks**: delta, gamma, theta (per calendar day), vega and rho
//!   (per 1-percentage-point move)
//! - **Typed Failures**: domain violations (zero volatility, zero expiry) are
//!   reported as structured errors, never as NaN/Inf
//! - **Pure Functions**: stateless, deterministic, safe to call from any
//!   number of threads
//!
//! ## Quick Start
//!
//! ```rust
//! use greeks_lib::{evaluate, OptionType, PricingInputs};
//!
//! let inputs = PricingInputs::new(30.0, 50.0, 0.03, 250.0 / 365.0, 0.30);
//! let valuation = evaluate(&inputs, OptionType::Call)?;
//!
//! println!("price {:.3}", valuation.price);
//! println!("delta {:.3}", valuation.greeks.delta);
//! # Ok::<(), greeks_lib::PricingError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result`; match on [`PricingError`] variants to
//! distinguish mathematical precondition violations ([`PricingError::Domain`])
//! from malformed option-type flags at the text boundary
//! ([`PricingError::InvalidArgument`]). The engine performs no recovery and
//! no logging; display decisions belong to the caller.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod engine;
pub mod error;
pub mod sweep;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing engine operations
pub use engine::{d1_d2, delta, evaluate, gamma, price, rho, theta, vega};

// Error taxonomy
pub use error::PricingError;

// Spot-sweep helpers for curve building
pub use sweep::{spot_grid, sweep_spot, SweepPoint};

// Core value types
pub use types::{Greeks, OptionType, PricingInputs, Valuation};
