//! Project category and the scalar choices that accompany a load selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Project category picked on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Domestic,
    Commercial,
    Condominium,
    Outdoor,
    Enterprise,
    /// Anything else; requires a free-text description.
    Other,
}

impl ProjectType {
    /// All categories in form order.
    pub const ALL: [Self; 6] = [
        Self::Domestic,
        Self::Commercial,
        Self::Condominium,
        Self::Outdoor,
        Self::Enterprise,
        Self::Other,
    ];

    /// Machine name used in scenario files and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Commercial => "commercial",
            Self::Condominium => "condominium",
            Self::Outdoor => "outdoor",
            Self::Enterprise => "enterprise",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Domestic => "Domestic use",
            Self::Commercial => "Shops",
            Self::Condominium => "Condominiums",
            Self::Outdoor => "Outdoor life",
            Self::Enterprise => "Companies",
            Self::Other => "Other",
        }
    }

    /// Next category in form order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                ConfigError::new(
                    "project.type",
                    format!("unknown project type \"{s}\", expected one of {}", names.join(", ")),
                )
            })
    }
}

/// Scalar configuration chosen alongside the loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectContext {
    /// Selected category; `None` until the user picks one.
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    /// Free-text description, used when the category is [`ProjectType::Other`].
    pub other_description: Option<String>,
    /// Station must ride on a mobile chassis (changes the battery-unit formula).
    pub needs_mobile_chassis: bool,
}

impl ProjectContext {
    pub fn new(project_type: ProjectType, needs_mobile_chassis: bool) -> Self {
        Self {
            project_type: Some(project_type),
            other_description: None,
            needs_mobile_chassis,
        }
    }

    /// Category label for display, preferring the free-text description for
    /// [`ProjectType::Other`].
    pub fn display_name(&self) -> String {
        match (self.project_type, self.other_description.as_deref()) {
            (Some(ProjectType::Other), Some(text)) if !text.trim().is_empty() => {
                text.trim().to_string()
            }
            (Some(t), _) => t.label().to_string(),
            (None, _) => "Unspecified".to_string(),
        }
    }

    /// Checks the context is complete enough to run a calculation.
    ///
    /// A category is mandatory, and `other` needs a non-blank description.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        match self.project_type {
            None => errors.push(ConfigError::new("project.type", "must be set")),
            Some(ProjectType::Other) => {
                let blank = self
                    .other_description
                    .as_deref()
                    .is_none_or(|d| d.trim().is_empty());
                if blank {
                    errors.push(ConfigError::new(
                        "project.other_description",
                        "required when project.type is \"other\"",
                    ));
                }
            }
            Some(_) => {}
        }
        errors
    }

    /// Returns `true` when [`validate`](Self::validate) reports nothing.
    pub fn is_ready(&self) -> bool {
        self.validate().is_empty()
    }
}
