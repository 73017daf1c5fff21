/// Error taxonomy for the pricing engine.
///
/// Every precondition violation surfaces as a typed failure to the immediate
/// caller; the engine never substitutes defaults and never returns NaN/Inf.
/// Anything outside these two kinds would be a bug in the engine itself and
/// is not caught here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    /// A mathematical precondition was violated (non-positive spot, strike,
    /// volatility, or time to expiry, or a non-finite field), leaving the
    /// d1/d2 intermediate terms undefined.
    #[error("domain error: {0}")]
    Domain(String),

    /// An option-type flag received at the system boundary was neither a
    /// call nor a put.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
