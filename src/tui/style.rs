//! Color constants for the TUI.

use ratatui::style::Color;

use crate::sizing::StationModel;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Selected load marker color.
pub const SELECTED_FG: Color = Color::Green;
/// Highlighted row background.
pub const CURSOR_BG: Color = Color::Blue;
/// Validation error text color.
pub const ERROR_FG: Color = Color::Red;
/// Accent color for labels in the result panel.
pub const LABEL_FG: Color = Color::Cyan;

/// Returns a color for the station tier: small tiers green, large ones warm.
pub fn station_color(model: StationModel) -> Color {
    match model {
        StationModel::A1 | StationModel::A2 => Color::Green,
        StationModel::A3 | StationModel::A4 | StationModel::A5 => Color::Yellow,
        StationModel::A6 | StationModel::A7 => Color::LightRed,
        StationModel::A7Plus => Color::Magenta,
    }
}
