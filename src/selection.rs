//! Editable per-load form state and the input-range guards applied before a
//! calculation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::catalog::{LoadCatalog, LoadCatalogEntry};
use crate::config::ConfigError;

/// Accepted steady power range (W).
pub const POWER_RANGE_W: RangeInclusive<f64> = 0.0..=2200.0;
/// Accepted peak power range (W).
pub const PEAK_POWER_RANGE_W: RangeInclusive<f64> = 0.0..=6000.0;
/// Accepted daily usage range (hours/day).
pub const USAGE_RANGE_HOURS: RangeInclusive<f64> = 0.0..=24.0;
/// Maximum number of identical units per load.
pub const MAX_QUANTITY: u32 = 200;

/// User-editable record for one catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSelection {
    /// Whether the load takes part in the calculation.
    pub selected: bool,
    /// Steady power draw per unit (W).
    pub power_w: f64,
    /// Number of identical units.
    pub quantity: u32,
    /// Surge power draw per unit (W).
    pub peak_power_w: f64,
    /// Daily usage (hours/day).
    pub usage_hours: f64,
}

impl LoadSelection {
    /// Unselected record carrying the catalog defaults and a quantity of one.
    pub fn from_entry(entry: &LoadCatalogEntry) -> Self {
        Self {
            selected: false,
            power_w: entry.power_w,
            quantity: 1,
            peak_power_w: entry.peak_power_w,
            usage_hours: entry.usage_hours,
        }
    }
}

/// Editable field of a [`LoadSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Power,
    Quantity,
    PeakPower,
    Usage,
}

impl SelectionField {
    /// Form order.
    pub const ALL: [Self; 4] = [Self::Power, Self::Quantity, Self::PeakPower, Self::Usage];

    /// Serialized field name, as used in error paths.
    pub fn key(self) -> &'static str {
        match self {
            Self::Power => "power_w",
            Self::Quantity => "quantity",
            Self::PeakPower => "peak_power_w",
            Self::Usage => "usage_hours",
        }
    }

    /// Short label with unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "Power (W)",
            Self::Quantity => "Quantity",
            Self::PeakPower => "Peak power (W)",
            Self::Usage => "Usage (h/day)",
        }
    }

    /// The following field in form order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Power => Self::Quantity,
            Self::Quantity => Self::PeakPower,
            Self::PeakPower => Self::Usage,
            Self::Usage => Self::Power,
        }
    }
}

impl LoadSelection {
    /// Current value of one field.
    pub fn value(&self, field: SelectionField) -> f64 {
        match field {
            SelectionField::Power => self.power_w,
            SelectionField::Quantity => f64::from(self.quantity),
            SelectionField::PeakPower => self.peak_power_w,
            SelectionField::Usage => self.usage_hours,
        }
    }
}

/// The whole form: one [`LoadSelection`] per catalog load, in catalog order.
///
/// Owned by the caller and passed explicitly into the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSelections {
    entries: Vec<(String, LoadSelection)>,
}

impl LoadSelections {
    /// Seeds the form from a catalog: every load unselected with its defaults.
    pub fn from_catalog(catalog: &LoadCatalog) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|entry| (entry.name.clone(), LoadSelection::from_entry(entry)))
                .collect(),
        }
    }

    /// Returns the record for a load.
    pub fn get(&self, name: &str) -> Option<&LoadSelection> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Returns a mutable record for a load.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut LoadSelection> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Flips the `selected` flag. Returns the new value, or `None` for an
    /// unknown load.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let selection = self.get_mut(name)?;
        selection.selected = !selection.selected;
        Some(selection.selected)
    }

    /// Sets one numeric field of a load. Returns `false` for an unknown load.
    ///
    /// No range checks happen here; see [`validate_selections`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_field(&mut self, name: &str, field: SelectionField, value: f64) -> bool {
        let Some(selection) = self.get_mut(name) else {
            return false;
        };
        match field {
            SelectionField::Power => selection.power_w = value,
            // Saturating: negative and NaN become 0.
            SelectionField::Quantity => selection.quantity = value as u32,
            SelectionField::PeakPower => selection.peak_power_w = value,
            SelectionField::Usage => selection.usage_hours = value,
        }
        true
    }

    /// Iterates `(name, selection)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LoadSelection)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Iterates the records in catalog order.
    pub fn selections(&self) -> impl Iterator<Item = &LoadSelection> {
        self.entries.iter().map(|(_, s)| s)
    }

    /// Number of loads currently selected.
    pub fn selected_count(&self) -> usize {
        self.selections().filter(|s| s.selected).count()
    }

    /// Unselects every load; edited values are kept.
    pub fn clear(&mut self) {
        for (_, selection) in &mut self.entries {
            selection.selected = false;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Checks that a selected load's numbers are finite and inside the form's
/// input ranges.
///
/// Unselected loads are ignored since they do not enter the calculation.
pub fn validate_selection(name: &str, selection: &LoadSelection) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if !selection.selected {
        return errors;
    }

    check_range(
        &mut errors,
        name,
        "power_w",
        selection.power_w,
        &POWER_RANGE_W,
    );
    check_range(
        &mut errors,
        name,
        "peak_power_w",
        selection.peak_power_w,
        &PEAK_POWER_RANGE_W,
    );
    check_range(
        &mut errors,
        name,
        "usage_hours",
        selection.usage_hours,
        &USAGE_RANGE_HOURS,
    );
    if selection.quantity > MAX_QUANTITY {
        errors.push(ConfigError::new(
            format!("loads.\"{name}\".quantity"),
            format!("must be <= {MAX_QUANTITY}, got {}", selection.quantity),
        ));
    }

    errors
}

/// Validates every selected load of the form.
pub fn validate_selections(selections: &LoadSelections) -> Vec<ConfigError> {
    selections
        .iter()
        .flat_map(|(name, selection)| validate_selection(name, selection))
        .collect()
}

fn check_range(
    errors: &mut Vec<ConfigError>,
    name: &str,
    field: &str,
    value: f64,
    range: &RangeInclusive<f64>,
) {
    if !value.is_finite() {
        errors.push(ConfigError::new(
            format!("loads.\"{name}\".{field}"),
            "must be a finite number",
        ));
    } else if !range.contains(&value) {
        errors.push(ConfigError::new(
            format!("loads.\"{name}\".{field}"),
            format!(
                "must be in [{}, {}], got {value}",
                range.start(),
                range.end()
            ),
        ));
    }
}
