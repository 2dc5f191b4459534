//! Power-station sizing: formulas, constants, and the station tier table.

/// The sizing pipeline.
pub mod calculator;
/// Station tiers keyed by battery capacity.
pub mod station;
pub mod types;

pub use calculator::{calculate, display_panel_count};
pub use station::StationModel;
pub use types::{CalculationResult, SizingParameters};
