//! Power-station sizing calculator for solar backup systems.

#[cfg(feature = "api")]
pub mod api;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod project;
pub mod report;
pub mod scenario;
pub mod selection;
/// Sizing formulas, constants, and station tiers.
pub mod sizing;
#[cfg(feature = "tui")]
pub mod tui;
