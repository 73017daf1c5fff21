// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and Greeks
//!
//! This example shows how to:
//! 1. Build a set of pricing inputs
//! 2. Compute call and put prices
//! 3. Compute all five Greeks in one call
//! 4. Handle the typed error the engine returns for invalid inputs

use anyhow::Result;
use greeks_lib::{evaluate, price, OptionType, PricingInputs};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Greeks Demo");
    println!("=====================================");

    let inputs = PricingInputs::default();

    println!("Parameters:");
    println!("  Spot:          {:.2}", inputs.spot);
    println!("  Strike:        {:.2}", inputs.strike);
    println!("  Rate:          {:.3}", inputs.risk_free_rate);
    println!(
        "  Expiry:        {:.4} years ({:.0} days)",
        inputs.time_to_expiry_years,
        inputs.time_to_expiry_years * 365.0
    );
    println!("  Volatility:    {:.2}", inputs.volatility);

    println!("\nStep 1: Option prices...");
    let call_price = price(&inputs, OptionType::Call)?;
    let put_price = price(&inputs, OptionType::Put)?;
    println!("  Call price: {:.3}", call_price);
    println!("  Put price:  {:.3}", put_price);

    println!("\nStep 2: Greeks (call side)...");
    let valuation = evaluate(&inputs, OptionType::Call)?;
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<8}",
        "Delta", "Gamma", "Theta", "Vega", "Rho"
    );
    println!("{}", "-".repeat(44));
    println!(
        "{:<8.3} {:<8.3} {:<8.3} {:<8.3} {:<8.3}",
        valuation.greeks.delta,
        valuation.greeks.gamma,
        valuation.greeks.theta,
        valuation.greeks.vega,
        valuation.greeks.rho
    );

    println!("\nStep 3: Error handling...");
    let zero_vol = PricingInputs {
        volatility: 0.0,
        ..inputs
    };
    match evaluate(&zero_vol, OptionType::Call) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  zero volatility rejected: {}", e),
    }
    match "straddle".parse::<OptionType>() {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  bad option-type flag rejected: {}", e),
    }

    Ok(())
}
