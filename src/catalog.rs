//! Appliance/load reference data used to seed the sizing form.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Default attributes of one load type.
///
/// Immutable reference data: selections copy these values when the form is
/// initialized and edit their own copies afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadCatalogEntry {
    /// Unique load name (catalog key).
    pub name: String,
    /// Steady-state power draw (W).
    pub power_w: f64,
    /// Surge power draw (W).
    pub peak_power_w: f64,
    /// Typical daily usage (hours/day).
    pub usage_hours: f64,
}

impl LoadCatalogEntry {
    /// Creates a catalog entry.
    pub fn new(name: &str, power_w: f64, peak_power_w: f64, usage_hours: f64) -> Self {
        Self {
            name: name.to_string(),
            power_w,
            peak_power_w,
            usage_hours,
        }
    }
}

/// Built-in load table: `(name, power W, peak power W, usage h/day)`.
const BUILTIN_LOADS: [(&str, f64, f64, f64); 20] = [
    ("Lamps", 9.0, 9.0, 4.0),
    ("Refrigerator", 150.0, 300.0, 12.0),
    ("Refrigerator with freezer", 200.0, 400.0, 12.0),
    ("Freezer", 250.0, 500.0, 8.0),
    ("TV", 90.0, 180.0, 5.0),
    ("Laptop or PC", 200.0, 300.0, 6.0),
    ("Security cameras", 15.0, 20.0, 24.0),
    ("Alarm", 10.0, 15.0, 24.0),
    ("WiFi router", 12.0, 15.0, 24.0),
    ("Gate motor", 300.0, 800.0, 0.2),
    ("Coffee maker", 900.0, 1200.0, 0.5),
    ("Air conditioner", 1350.0, 2200.0, 6.0),
    ("Inverter air conditioner", 877.0, 1400.0, 6.0),
    ("Fan", 90.0, 150.0, 10.0),
    ("Power tool charger", 150.0, 300.0, 1.0),
    ("Phone charger", 5.0, 10.0, 3.0),
    ("Sound system", 60.0, 120.0, 4.0),
    ("Other 1", 0.0, 0.0, 0.0),
    ("Other 2", 0.0, 0.0, 0.0),
    ("Other 3", 0.0, 0.0, 0.0),
];

/// Ordered, name-keyed load catalog.
///
/// Iteration order is declaration order. Sums in the calculator follow this
/// order, so two catalogs with the same entries in a different order may
/// produce results differing in the last bit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LoadCatalog {
    entries: Vec<LoadCatalogEntry>,
}

impl LoadCatalog {
    /// Returns the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_LOADS
                .iter()
                .map(|&(name, power, peak, usage)| LoadCatalogEntry::new(name, power, peak, usage))
                .collect(),
        }
    }

    /// Builds a catalog from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an empty or duplicated name.
    pub fn new(entries: Vec<LoadCatalogEntry>) -> Result<Self, ConfigError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::new(
                    format!("catalog.loads[{i}].name"),
                    "must not be empty",
                ));
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(ConfigError::new(
                    format!("catalog.loads[{i}].name"),
                    format!("duplicate load \"{}\"", entry.name),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Adds entries to the catalog.
    ///
    /// An entry whose name already exists replaces the existing defaults in
    /// place; new names are appended.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = LoadCatalogEntry>) {
        for entry in entries {
            match self.entries.iter_mut().find(|e| e.name == entry.name) {
                Some(existing) => *existing = entry,
                None => self.entries.push(entry),
            }
        }
    }

    /// Looks up a load by name.
    pub fn get(&self, name: &str) -> Option<&LoadCatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Returns `true` if the catalog has a load with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadCatalogEntry> {
        self.entries.iter()
    }

    /// Load names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LoadCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
