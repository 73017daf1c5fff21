use greeks_lib::{evaluate, spot_grid, sweep_spot, OptionType, PricingError, PricingInputs};

#[test]
fn test_spot_grid_covers_zero_to_spot_plus_fifty() {
    let inputs = PricingInputs::default(); // spot = 30
    let grid = spot_grid(&inputs);

    assert_eq!(grid.len(), 81);
    assert_eq!(grid[0], 0.0);
    assert_eq!(*grid.last().unwrap(), 80.0);

    // Fractional spot rounds down before the +50 extension
    let fractional = PricingInputs {
        spot: 99.7,
        ..inputs
    };
    let grid = spot_grid(&fractional);
    assert_eq!(*grid.last().unwrap(), 149.0);
}

#[test]
fn test_sweep_preserves_input_to_output_association() {
    let inputs = PricingInputs::default();
    let grid = spot_grid(&inputs);
    let curve = sweep_spot(&inputs, OptionType::Call, &grid);

    assert_eq!(curve.len(), grid.len());
    for ((spot, result), expected_spot) in curve.iter().zip(grid.iter()) {
        assert_eq!(spot, expected_spot);
        if *spot > 0.0 {
            let point = PricingInputs {
                spot: *spot,
                ..inputs
            };
            let direct = evaluate(&point, OptionType::Call).expect("direct valuation");
            assert_eq!(*result.as_ref().unwrap(), direct);
        }
    }
}

#[test]
fn test_sweep_carries_per_point_errors() {
    // The conventional grid starts at spot 0, which the engine rejects; the
    // sweep must report that point as a typed error without dropping the rest.
    let inputs = PricingInputs::default();
    let curve = sweep_spot(&inputs, OptionType::Put, &spot_grid(&inputs));

    let (first_spot, first_result) = &curve[0];
    assert_eq!(*first_spot, 0.0);
    assert!(matches!(first_result, Err(PricingError::Domain(_))));

    let valid_points = curve.iter().filter(|(_, r)| r.is_ok()).count();
    assert_eq!(valid_points, curve.len() - 1);
}

#[test]
fn test_call_price_curve_is_increasing_in_spot() {
    let inputs = PricingInputs::default();
    let curve = sweep_spot(&inputs, OptionType::Call, &spot_grid(&inputs));

    let prices: Vec<f64> = curve
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok().map(|v| v.price))
        .collect();
    assert!(prices.len() > 2);
    for pair in prices.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "call price should not decrease with spot: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}
