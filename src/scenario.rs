//! Load scenarios: a project context plus the loads picked on the form.
//!
//! Scenarios come from TOML files, JSON request bodies, or built-in presets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::LoadCatalog;
use crate::config::{ConfigError, SizerConfig};
use crate::project::{ProjectContext, ProjectType};
use crate::report::SizingReport;
use crate::selection::{LoadSelections, validate_selections};

/// A filled-in calculator form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Project category and chassis flag.
    #[serde(default)]
    pub project: ProjectContext,
    /// Selected loads; everything else stays unselected.
    #[serde(default)]
    pub loads: Vec<LoadSpec>,
}

/// One selected load with optional overrides of the catalog defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoadSpec {
    /// Catalog name.
    pub name: String,
    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Steady power override (W).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
    /// Peak power override (W).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_power_w: Option<f64>,
    /// Daily usage override (hours/day).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hours: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

impl LoadSpec {
    /// Selects `quantity` units of a catalog load with its defaults.
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            power_w: None,
            peak_power_w: None,
            usage_hours: None,
        }
    }
}

impl Scenario {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["weekend_cabin", "corner_shop", "camper_van", "empty"];

    /// Small domestic cabin: lights, a fridge, TV and connectivity.
    pub fn weekend_cabin() -> Self {
        Self {
            project: ProjectContext::new(ProjectType::Domestic, false),
            loads: vec![
                LoadSpec::new("Lamps", 4),
                LoadSpec::new("Refrigerator", 1),
                LoadSpec::new("TV", 1),
                LoadSpec::new("WiFi router", 1),
                LoadSpec::new("Phone charger", 2),
            ],
        }
    }

    /// Neighborhood shop with refrigeration and security equipment.
    pub fn corner_shop() -> Self {
        Self {
            project: ProjectContext::new(ProjectType::Commercial, false),
            loads: vec![
                LoadSpec::new("Lamps", 10),
                LoadSpec::new("Refrigerator with freezer", 2),
                LoadSpec::new("Laptop or PC", 1),
                LoadSpec::new("Security cameras", 4),
                LoadSpec::new("Alarm", 1),
                LoadSpec::new("Coffee maker", 1),
            ],
        }
    }

    /// Camper van on a mobile chassis with a 12 V compressor fridge.
    pub fn camper_van() -> Self {
        Self {
            project: ProjectContext::new(ProjectType::Outdoor, true),
            loads: vec![
                LoadSpec::new("Lamps", 3),
                LoadSpec {
                    power_w: Some(60.0),
                    peak_power_w: Some(120.0),
                    ..LoadSpec::new("Refrigerator", 1)
                },
                LoadSpec::new("Fan", 1),
                LoadSpec::new("Phone charger", 2),
            ],
        }
    }

    /// Nothing selected.
    pub fn empty() -> Self {
        Self {
            project: ProjectContext::new(ProjectType::Domestic, false),
            loads: Vec::new(),
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "weekend_cabin" => Ok(Self::weekend_cabin()),
            "corner_shop" => Ok(Self::corner_shop()),
            "camper_van" => Ok(Self::camper_van()),
            "empty" => Ok(Self::empty()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new(
                "scenario",
                format!("cannot read \"{}\": {e}", path.display()),
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Fills a fresh form from the catalog with this scenario's loads.
    ///
    /// # Errors
    ///
    /// Returns every load that is unknown to the catalog or listed twice.
    pub fn to_selections(&self, catalog: &LoadCatalog) -> Result<LoadSelections, Vec<ConfigError>> {
        let mut selections = LoadSelections::from_catalog(catalog);
        let mut errors = Vec::new();

        for (i, spec) in self.loads.iter().enumerate() {
            if self.loads[..i].iter().any(|s| s.name == spec.name) {
                errors.push(ConfigError::new(
                    format!("loads[{i}].name"),
                    format!("load \"{}\" listed more than once", spec.name),
                ));
                continue;
            }
            let Some(selection) = selections.get_mut(&spec.name) else {
                errors.push(ConfigError::new(
                    format!("loads[{i}].name"),
                    format!("unknown load \"{}\"", spec.name),
                ));
                continue;
            };
            selection.selected = true;
            selection.quantity = spec.quantity;
            if let Some(power_w) = spec.power_w {
                selection.power_w = power_w;
            }
            if let Some(peak_power_w) = spec.peak_power_w {
                selection.peak_power_w = peak_power_w;
            }
            if let Some(usage_hours) = spec.usage_hours {
                selection.usage_hours = usage_hours;
            }
        }

        if errors.is_empty() {
            Ok(selections)
        } else {
            Err(errors)
        }
    }

    /// Validates the project context and every selected load against the
    /// catalog and the form's input ranges.
    pub fn validate(&self, catalog: &LoadCatalog) -> Vec<ConfigError> {
        let mut errors = self.project.validate();
        match self.to_selections(catalog) {
            Ok(selections) => errors.extend(validate_selections(&selections)),
            Err(load_errors) => errors.extend(load_errors),
        }
        errors
    }

    /// Validates and runs the calculation, returning the full report.
    ///
    /// # Errors
    ///
    /// Returns all validation errors; nothing is computed if any exist.
    pub fn evaluate(&self, config: &SizerConfig) -> Result<SizingReport, Vec<ConfigError>> {
        let catalog = config.catalog();
        let mut errors = self.project.validate();
        let selections = match self.to_selections(&catalog) {
            Ok(selections) => selections,
            Err(load_errors) => {
                errors.extend(load_errors);
                return Err(errors);
            }
        };
        errors.extend(validate_selections(&selections));
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SizingReport::from_form(&self.project, &selections, config))
    }
}
