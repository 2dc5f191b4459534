//! The sizing pipeline: selected loads in, station recommendation out.

use tracing::debug;

use super::station::StationModel;
use super::types::{CalculationResult, SizingParameters};
use crate::selection::LoadSelection;

/// Computes a recommendation with the default [`SizingParameters`].
///
/// Pure and deterministic: the same selections and chassis flag always give a
/// bit-identical result. No range checks are performed; finite,
/// non-negative input is the caller's job (see
/// [`crate::selection::validate_selections`]). Non-finite input does not
/// panic: it propagates through the `f64` fields while the counts saturate.
///
/// # Examples
///
/// ```
/// use solar_sizer::selection::LoadSelection;
/// use solar_sizer::sizing::{StationModel, calculate};
///
/// let fridges = LoadSelection {
///     selected: true,
///     power_w: 150.0,
///     quantity: 2,
///     peak_power_w: 300.0,
///     usage_hours: 12.0,
/// };
/// let result = calculate([&fridges], false);
/// assert_eq!(result.required_autonomy_wh, 3600.0);
/// assert_eq!(result.station_model, StationModel::A5);
/// ```
pub fn calculate<'a>(
    selections: impl IntoIterator<Item = &'a LoadSelection>,
    needs_mobile_chassis: bool,
) -> CalculationResult {
    SizingParameters::default().calculate(selections, needs_mobile_chassis)
}

impl SizingParameters {
    /// Runs the sizing pipeline with these parameters.
    ///
    /// Sums follow the iteration order of `selections`.
    pub fn calculate<'a>(
        &self,
        selections: impl IntoIterator<Item = &'a LoadSelection>,
        needs_mobile_chassis: bool,
    ) -> CalculationResult {
        let mut required_power_w = 0.0_f64;
        let mut peak_power_w = 0.0_f64;
        let mut required_autonomy_wh = 0.0_f64;

        for s in selections.into_iter().filter(|s| s.selected) {
            let quantity = f64::from(s.quantity);
            required_power_w += s.power_w * quantity;
            peak_power_w += s.peak_power_w * quantity;
            required_autonomy_wh += s.usage_hours * s.power_w * quantity;
        }

        let raw_panel_count =
            ceil_count(required_autonomy_wh / self.peak_sun_hours / self.panel_watts);
        let display_panel_count = display_panel_count(raw_panel_count, self.max_display_panels);

        let required_battery_wh = required_autonomy_wh / self.depth_of_discharge;
        let unit_wh = if needs_mobile_chassis {
            self.extra_battery_wh - self.base_battery_wh
        } else {
            self.extra_battery_wh
        };
        let extra_battery_units = ceil_count(required_battery_wh / unit_wh);

        let station_model = StationModel::for_capacity(required_battery_wh);

        debug!(
            required_power_w,
            peak_power_w,
            required_autonomy_wh,
            required_battery_wh,
            raw_panel_count,
            extra_battery_units,
            needs_mobile_chassis,
            station_model = station_model.code(),
            "calculated sizing"
        );

        CalculationResult {
            required_power_w,
            peak_power_w,
            required_autonomy_wh,
            raw_panel_count,
            display_panel_count,
            required_battery_wh,
            extra_battery_units,
            station_model,
        }
    }
}

/// Caps the computed panel count for display.
pub fn display_panel_count(raw_panel_count: u32, cap: u32) -> u32 {
    raw_panel_count.min(cap)
}

/// Rounds a non-negative quotient up to a whole count.
///
/// The cast saturates: NaN and negatives give 0, huge values `u32::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(value: f64) -> u32 {
    value.ceil() as u32
}
