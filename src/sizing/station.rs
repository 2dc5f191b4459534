//! Station model tiers and the capacity threshold table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Recommended power-station tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationModel {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    /// Beyond the largest tier.
    A7Plus,
}

/// Ascending `(max battery capacity Wh, model)` pairs; first match wins.
const THRESHOLDS_WH: [(f64, StationModel); 7] = [
    (1037.0, StationModel::A1),
    (2074.0, StationModel::A2),
    (3197.0, StationModel::A3),
    (4234.0, StationModel::A4),
    (5357.0, StationModel::A5),
    (6394.0, StationModel::A6),
    (7517.0, StationModel::A7),
];

impl StationModel {
    /// All tiers, smallest first.
    pub const ALL: [Self; 8] = [
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::A7,
        Self::A7Plus,
    ];

    /// Picks the smallest tier whose threshold covers `required_battery_wh`.
    ///
    /// Total over `f64`: anything above the last threshold, and NaN, maps to
    /// [`StationModel::A7Plus`].
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_sizer::sizing::StationModel;
    ///
    /// assert_eq!(StationModel::for_capacity(0.0), StationModel::A1);
    /// assert_eq!(StationModel::for_capacity(1037.0), StationModel::A1);
    /// assert_eq!(StationModel::for_capacity(1037.0001), StationModel::A2);
    /// assert_eq!(StationModel::for_capacity(9000.0), StationModel::A7Plus);
    /// ```
    pub fn for_capacity(required_battery_wh: f64) -> Self {
        THRESHOLDS_WH
            .iter()
            .find(|&&(max_wh, _)| required_battery_wh <= max_wh)
            .map_or(Self::A7Plus, |&(_, model)| model)
    }

    /// Upper capacity bound of the tier (Wh), `None` for the open-ended tier.
    pub fn max_capacity_wh(self) -> Option<f64> {
        THRESHOLDS_WH
            .iter()
            .find(|&&(_, model)| model == self)
            .map(|&(max_wh, _)| max_wh)
    }

    /// Model code as shown to customers.
    pub fn code(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::A6 => "A6",
            Self::A7 => "A7",
            Self::A7Plus => "A7+",
        }
    }
}

impl fmt::Display for StationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unrecognized station model code.
#[derive(Debug, thiserror::Error)]
#[error("unknown station model \"{0}\"")]
pub struct UnknownStationModel(pub String);

impl FromStr for StationModel {
    type Err = UnknownStationModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| UnknownStationModel(s.to_string()))
    }
}

impl Serialize for StationModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for StationModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
