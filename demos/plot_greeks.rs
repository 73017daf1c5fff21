// demos/plot_greeks.rs
// Sweeps the pricing engine over the conventional spot grid (0..=spot+50)
// and renders the price curve plus all five Greek curves into one SVG.
//
// Usage:
//     cargo run --example plot_greeks -- [call|put]
//
// The output image is written to greeks.svg in the working directory.

use std::env;
use std::error::Error;

use greeks_lib::{spot_grid, sweep_spot, OptionType, PricingInputs, SweepPoint, Valuation};
use plotters::prelude::*;

fn metric_series(curve: &[SweepPoint], extract: impl Fn(&Valuation) -> f64) -> Vec<(f64, f64)> {
    // Points where the engine failed (spot 0 on the conventional grid) are
    // gapped out, matching how a display layer would skip them.
    curve
        .iter()
        .filter_map(|(spot, result)| result.as_ref().ok().map(|v| (*spot, extract(v))))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let option_type: OptionType = match env::args().nth(1) {
        Some(flag) => flag.parse()?,
        None => OptionType::Call,
    };

    let inputs = PricingInputs::default();
    println!(
        "Sweeping {} curves: S={} K={} r={} T={:.4} sigma={}",
        option_type,
        inputs.spot,
        inputs.strike,
        inputs.risk_free_rate,
        inputs.time_to_expiry_years,
        inputs.volatility
    );

    let grid = spot_grid(&inputs);
    let curve = sweep_spot(&inputs, option_type, &grid);
    println!(
        "Evaluated {} spot points ({} valid)",
        curve.len(),
        curve.iter().filter(|(_, r)| r.is_ok()).count()
    );

    let panels: Vec<(&str, Vec<(f64, f64)>)> = vec![
        ("Option Price", metric_series(&curve, |v| v.price)),
        ("Delta", metric_series(&curve, |v| v.greeks.delta)),
        ("Gamma", metric_series(&curve, |v| v.greeks.gamma)),
        ("Theta", metric_series(&curve, |v| v.greeks.theta)),
        ("Vega", metric_series(&curve, |v| v.greeks.vega)),
        ("Rho", metric_series(&curve, |v| v.greeks.rho)),
    ];

    let root = SVGBackend::new("greeks.svg", (1280, 1440)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((3, 2));

    let max_spot = *grid.last().unwrap_or(&1.0);

    for ((label, series), area) in panels.into_iter().zip(areas.iter()) {
        let min_y = series.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = series
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max);

        // Pad the y-range so flat curves still draw with a visible axis
        let span = (max_y - min_y).max(1e-6);
        let padding = span * 0.05;
        let y_min = min_y - padding;
        let y_max = max_y + padding;

        let mut chart = ChartBuilder::on(area)
            .margin(15)
            .caption(
                format!("{} vs Spot Price ({})", label, option_type),
                ("sans-serif", 22),
            )
            .x_label_area_size(35)
            .y_label_area_size(55)
            .build_cartesian_2d(0.0..max_spot, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Underlying Asset Price")
            .y_desc(label)
            .draw()?;

        chart.draw_series(vec![PathElement::new(series, BLUE.stroke_width(2))])?;
    }

    println!("Chart saved to greeks.svg");
    Ok(())
}
