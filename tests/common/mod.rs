//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use solar_sizer::catalog::LoadCatalog;
use solar_sizer::selection::{LoadSelection, LoadSelections};

/// A selected load with explicit values.
pub fn selected(power_w: f64, quantity: u32, peak_power_w: f64, usage_hours: f64) -> LoadSelection {
    LoadSelection {
        selected: true,
        power_w,
        quantity,
        peak_power_w,
        usage_hours,
    }
}

/// Two 150 W refrigerators running 12 h/day (3600 Wh).
pub fn two_fridges() -> LoadSelection {
    selected(150.0, 2, 300.0, 12.0)
}

/// A fresh form over the built-in catalog with the given loads selected.
///
/// Panics on an unknown name.
pub fn builtin_form(picks: &[(&str, u32)]) -> LoadSelections {
    let mut form = LoadSelections::from_catalog(&LoadCatalog::builtin());
    for &(name, quantity) in picks {
        let selection = form
            .get_mut(name)
            .unwrap_or_else(|| panic!("`{name}` should be in the built-in catalog"));
        selection.selected = true;
        selection.quantity = quantity;
    }
    form
}

/// Extracts the numeric value after `label` from a text report.
pub fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid format for line `{line}`"));

    let numeric = raw.strip_suffix(unit).unwrap_or(raw).trim();
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from line `{line}`"))
}

/// Extracts the text value after `label` from a text report.
pub fn parse_field<'a>(stdout: &'a str, label: &str) -> &'a str {
    stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .and_then(|line| line.split_once(':'))
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("missing line `{label}` in output: {stdout}"))
}
