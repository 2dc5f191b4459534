//! Sizing parameters and the calculation output record.

use serde::{Deserialize, Serialize};

use super::station::StationModel;
use crate::config::ConfigError;

/// Average daily hours of full-intensity insolation.
pub const PEAK_SUN_HOURS: f64 = 4.0;
/// Nameplate power of the small folding panel (W).
pub const SMALL_PANEL_WATTS: f64 = 200.0;
/// Usable fraction of nominal battery capacity.
pub const DEPTH_OF_DISCHARGE: f64 = 0.8;
/// Capacity of one extra battery unit (Wh).
pub const EXTRA_BATTERY_CAPACITY: f64 = 2160.0;
/// Capacity of the base station battery (Wh).
pub const BASE_BATTERY_CAPACITY: f64 = 1037.0;
/// Most panels ever recommended, whatever the computed need.
pub const MAX_DISPLAY_PANELS: u32 = 5;

/// Constants of the sizing pipeline.
///
/// [`Default`] yields the production values above; overriding them through
/// configuration is mainly useful for what-if comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizingParameters {
    /// Peak sun hours per day.
    pub peak_sun_hours: f64,
    /// Panel nameplate power (W).
    pub panel_watts: f64,
    /// Depth of discharge (0.0-1.0].
    pub depth_of_discharge: f64,
    /// Extra battery unit capacity (Wh).
    pub extra_battery_wh: f64,
    /// Base battery capacity (Wh), must be below `extra_battery_wh`.
    pub base_battery_wh: f64,
    /// Cap applied to the displayed panel count.
    pub max_display_panels: u32,
}

impl Default for SizingParameters {
    fn default() -> Self {
        Self {
            peak_sun_hours: PEAK_SUN_HOURS,
            panel_watts: SMALL_PANEL_WATTS,
            depth_of_discharge: DEPTH_OF_DISCHARGE,
            extra_battery_wh: EXTRA_BATTERY_CAPACITY,
            base_battery_wh: BASE_BATTERY_CAPACITY,
            max_display_panels: MAX_DISPLAY_PANELS,
        }
    }
}

impl SizingParameters {
    /// Checks every divisor is positive and finite.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let positive = [
            ("sizing.peak_sun_hours", self.peak_sun_hours),
            ("sizing.panel_watts", self.panel_watts),
            ("sizing.extra_battery_wh", self.extra_battery_wh),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                errors.push(ConfigError::new(field, "must be a finite number > 0"));
            }
        }

        if !(self.depth_of_discharge > 0.0 && self.depth_of_discharge <= 1.0) {
            errors.push(ConfigError::new(
                "sizing.depth_of_discharge",
                "must be in (0.0, 1.0]",
            ));
        }
        if !(self.base_battery_wh.is_finite() && self.base_battery_wh >= 0.0) {
            errors.push(ConfigError::new(
                "sizing.base_battery_wh",
                "must be a finite number >= 0",
            ));
        } else if self.base_battery_wh >= self.extra_battery_wh {
            errors.push(ConfigError::new(
                "sizing.base_battery_wh",
                "must be < sizing.extra_battery_wh",
            ));
        }

        errors
    }
}

/// Read-only snapshot produced by one calculation pass.
///
/// Never updated in place; the next calculation replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of steady power over selected loads (W).
    pub required_power_w: f64,
    /// Sum of surge power over selected loads (W).
    pub peak_power_w: f64,
    /// Daily energy need (Wh/day).
    pub required_autonomy_wh: f64,
    /// Panels needed to recharge the daily energy.
    pub raw_panel_count: u32,
    /// Panels recommended to the customer (capped).
    pub display_panel_count: u32,
    /// Nominal battery capacity covering the daily need (Wh).
    pub required_battery_wh: f64,
    /// Extra battery units to add.
    pub extra_battery_units: u32,
    /// Recommended station tier.
    pub station_model: StationModel,
}
