//! Spot-price sweeps for curve building.
//!
//! The engine itself only evaluates single points; these helpers drive it
//! across a caller-chosen sequence of spot prices with all other parameters
//! held fixed, preserving the input-to-output association by pairing each
//! result with its spot value.

use crate::engine::evaluate;
use crate::error::PricingError;
use crate::types::{OptionType, PricingInputs, Valuation};

/// One evaluated point of a sweep: the spot price and the valuation at that
/// spot, or the typed error for spots where the formulas are undefined.
pub type SweepPoint = (f64, Result<Valuation, PricingError>);

/// Integer spot grid `0..=floor(S) + 50` around the current spot price,
/// the conventional x-axis for price/Greek curves. Note the grid includes
/// spot 0, which every evaluation rejects as a domain error; callers
/// typically skip or gap such points.
pub fn spot_grid(inputs: &PricingInputs) -> Vec<f64> {
    let max = inputs.spot.floor() as i64 + 50;
    (0..=max).map(|i| i as f64).collect()
}

/// Evaluate price and Greeks at each spot in `spots`, holding the other
/// parameters of `inputs` fixed.
///
/// Each point is independent; failures are carried per point rather than
/// aborting the sweep, so a grid containing invalid spots (e.g. zero) still
/// yields every valid point.
pub fn sweep_spot(
    inputs: &PricingInputs,
    option_type: OptionType,
    spots: &[f64],
) -> Vec<SweepPoint> {
    let mut results = Vec::with_capacity(spots.len());
    for &spot in spots {
        let point = PricingInputs { spot, ..*inputs };
        results.push((spot, evaluate(&point, option_type)));
    }
    results
}
