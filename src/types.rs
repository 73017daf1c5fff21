use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// European option exercise style flag.
///
/// A closed enum so the formula layer can match exhaustively; parsing free
/// text ("call"/"c"/"put"/"p") is a boundary concern handled by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidArgument(format!(
                "option type must be call or put, got: {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Market and contract parameters for a single pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Underlying asset price (S), must be > 0
    pub spot: f64,
    /// Strike price (K), must be > 0
    pub strike: f64,
    /// Annualized continuously-compounded risk-free rate (r)
    pub risk_free_rate: f64,
    /// Time to expiration in years (T), must be > 0
    pub time_to_expiry_years: f64,
    /// Annualized volatility as a decimal, e.g. 0.25 for 25% (sigma), must be > 0
    pub volatility: f64,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            spot: 30.0,
            strike: 50.0,
            risk_free_rate: 0.03,
            time_to_expiry_years: 250.0 / 365.0,
            volatility: 0.30,
        }
    }
}

impl PricingInputs {
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry_years: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            risk_free_rate,
            time_to_expiry_years,
            volatility,
        }
    }

    /// Check the preconditions that make d1/d2 well-defined.
    ///
    /// Volatility of exactly zero is rejected here rather than left to
    /// produce a division by zero in the intermediate terms.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("risk_free_rate", self.risk_free_rate),
            ("time_to_expiry_years", self.time_to_expiry_years),
            ("volatility", self.volatility),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::Domain(format!(
                    "{} must be finite, got: {}",
                    name, value
                )));
            }
        }
        if self.spot <= 0.0 {
            return Err(PricingError::Domain(format!(
                "spot price must be strictly positive, got: {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::Domain(format!(
                "strike price must be strictly positive, got: {}",
                self.strike
            )));
        }
        if self.time_to_expiry_years <= 0.0 || self.volatility <= 0.0 {
            return Err(PricingError::Domain(format!(
                "volatility and time-to-expiry must be strictly positive, got: sigma={}, t={}",
                self.volatility, self.time_to_expiry_years
            )));
        }
        Ok(())
    }
}

/// First- and second-order sensitivities of the option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Rate of change of option price w.r.t. underlying price
    pub delta: f64,
    /// Rate of change of delta w.r.t. underlying price
    pub gamma: f64,
    /// Rate of change of option price w.r.t. time (per calendar day)
    pub theta: f64,
    /// Rate of change of option price w.r.t. volatility (per 1 vol-point)
    pub vega: f64,
    /// Rate of change of option price w.r.t. risk-free rate (per 1 rate-point)
    pub rho: f64,
}

/// Price plus all five Greeks for one parameter set, derived from a single
/// d1/d2 computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    pub price: f64,
    pub greeks: Greeks,
}
