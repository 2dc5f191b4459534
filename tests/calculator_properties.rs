//! Properties of the sizing calculation over the built-in catalog.

mod common;

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

use solar_sizer::catalog::LoadCatalog;
use solar_sizer::selection::{LoadSelection, LoadSelections};
use solar_sizer::sizing::{SizingParameters, StationModel, calculate, display_panel_count};

/// A random form: every load toggled and quantities drawn from `0..=20`.
fn random_form(rng: &mut StdRng) -> LoadSelections {
    let mut form = LoadSelections::from_catalog(&LoadCatalog::builtin());
    let names: Vec<String> = form.iter().map(|(name, _)| name.to_string()).collect();
    for name in names {
        if let Some(s) = form.get_mut(&name) {
            s.selected = rng.random_bool(0.5);
            s.quantity = rng.random_range(0..=20);
        }
    }
    form
}

#[test]
fn single_load_sizing() {
    let result = calculate([&common::two_fridges()], false);
    assert_eq!(result.required_power_w, 300.0);
    assert_eq!(result.peak_power_w, 600.0);
    assert_eq!(result.required_autonomy_wh, 3600.0);
    assert_eq!(result.required_battery_wh, 4500.0);
    assert_eq!(result.raw_panel_count, 5);
    assert_eq!(result.display_panel_count, 5);
    assert_eq!(result.extra_battery_units, 3);
    assert_eq!(result.station_model, StationModel::A5);
}

#[test]
fn mobile_chassis_sizes_extra_units_without_base_battery() {
    let result = calculate([&common::two_fridges()], true);
    // 4500 / 1123 = 4.007.. rounds up
    assert_eq!(result.extra_battery_units, 5);
    assert_eq!(result.required_battery_wh, 4500.0);
    assert_eq!(result.station_model, StationModel::A5);
}

#[test]
fn nothing_selected_is_all_zero() {
    let form = LoadSelections::from_catalog(&LoadCatalog::builtin());
    for chassis in [false, true] {
        let result = calculate(form.selections(), chassis);
        assert_eq!(result.required_power_w, 0.0);
        assert_eq!(result.peak_power_w, 0.0);
        assert_eq!(result.required_autonomy_wh, 0.0);
        assert_eq!(result.raw_panel_count, 0);
        assert_eq!(result.display_panel_count, 0);
        assert_eq!(result.extra_battery_units, 0);
        assert_eq!(result.station_model, StationModel::A1);
    }
}

#[test]
fn unselected_loads_contribute_nothing_even_with_quantity() {
    let mut form = common::builtin_form(&[]);
    if let Some(s) = form.get_mut("Air conditioner") {
        s.quantity = 10;
    }
    let result = calculate(form.selections(), false);
    assert_eq!(result.required_power_w, 0.0);
    assert_eq!(result.station_model, StationModel::A1);
}

#[test]
fn totals_are_monotonic_in_quantity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let form = random_form(&mut rng);
        let before = calculate(form.selections(), false);

        let names: Vec<String> = form.iter().map(|(name, _)| name.to_string()).collect();
        let name = &names[rng.random_range(0..names.len())];
        let mut bumped = form.clone();
        if let Some(s) = bumped.get_mut(name) {
            s.quantity += rng.random_range(1..=5);
        }
        let after = calculate(bumped.selections(), false);

        assert!(after.required_power_w >= before.required_power_w);
        assert!(after.peak_power_w >= before.peak_power_w);
        assert!(after.required_autonomy_wh >= before.required_autonomy_wh);
        assert!(after.required_battery_wh >= before.required_battery_wh);
        assert!(after.station_model >= before.station_model);
        assert!(after.raw_panel_count >= before.raw_panel_count);
    }
}

#[test]
fn panel_display_is_capped() {
    for raw in 0..50 {
        assert_eq!(display_panel_count(raw, 5), raw.min(5));
    }
    assert_eq!(display_panel_count(u32::MAX, 5), 5);
}

#[test]
fn station_boundaries_are_inclusive() {
    let cases = [
        (0.0, StationModel::A1),
        (1037.0, StationModel::A1),
        (1037.0001, StationModel::A2),
        (2074.0, StationModel::A2),
        (3197.0, StationModel::A3),
        (4234.0, StationModel::A4),
        (5357.0, StationModel::A5),
        (6394.0, StationModel::A6),
        (7517.0, StationModel::A7),
        (7517.0001, StationModel::A7Plus),
        (1.0e9, StationModel::A7Plus),
    ];
    for (capacity, expected) in cases {
        assert_eq!(
            StationModel::for_capacity(capacity),
            expected,
            "capacity {capacity}"
        );
    }
}

#[test]
fn repeated_calculation_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let form = random_form(&mut rng);
        let chassis = rng.random_bool(0.5);
        let a = calculate(form.selections(), chassis);
        let b = calculate(form.selections(), chassis);
        assert_eq!(a, b);
        assert_eq!(a.required_battery_wh.to_bits(), b.required_battery_wh.to_bits());
    }
}

#[test]
fn battery_is_autonomy_over_depth_of_discharge() {
    let mut rng = StdRng::seed_from_u64(1234);
    let params = SizingParameters::default();
    for _ in 0..100 {
        let form = random_form(&mut rng);
        let result = params.calculate(form.selections(), false);
        assert_relative_eq!(
            result.required_battery_wh * params.depth_of_discharge,
            result.required_autonomy_wh,
            max_relative = 1e-12
        );
        assert!(result.display_panel_count <= params.max_display_panels);
    }
}

#[test]
fn fractional_loads_round_up() {
    // 5 W for 1 h: far below one panel or battery, still needs one of each
    let tiny = common::selected(5.0, 1, 5.0, 1.0);
    let result = calculate([&tiny], false);
    assert_eq!(result.raw_panel_count, 1);
    assert_eq!(result.extra_battery_units, 1);
    assert_relative_eq!(result.required_battery_wh, 6.25);
}

#[test]
fn mobile_chassis_never_needs_fewer_units() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let form = random_form(&mut rng);
        let fixed = calculate(form.selections(), false);
        let mobile = calculate(form.selections(), true);
        assert!(mobile.extra_battery_units >= fixed.extra_battery_units);
        assert_eq!(mobile.station_model, fixed.station_model);
    }
}

#[test]
fn explicit_selection_list_matches_catalog_form() {
    let form = common::builtin_form(&[("Refrigerator", 2)]);
    let from_form = calculate(form.selections(), false);
    let direct: Vec<LoadSelection> = vec![common::two_fridges()];
    assert_eq!(from_form, calculate(&direct, false));
}
