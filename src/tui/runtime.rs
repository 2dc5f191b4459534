//! Form state of the interactive calculator.

use crate::catalog::LoadCatalog;
use crate::config::{ConfigError, SizerConfig};
use crate::project::{ProjectContext, ProjectType};
use crate::report::SizingReport;
use crate::scenario::Scenario;
use crate::selection::{LoadSelections, MAX_QUANTITY, SelectionField, validate_selections};

/// In-progress edit of one numeric field of the highlighted load.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    /// Load being edited.
    pub name: String,
    pub field: SelectionField,
    /// Text typed so far.
    pub buffer: String,
}

/// TUI application state.
pub struct App {
    /// Calculator configuration (constants, contacts).
    config: SizerConfig,
    /// Effective catalog; also fixes the row order.
    catalog: LoadCatalog,
    /// Per-load form state.
    pub form: LoadSelections,
    /// Project category and chassis flag.
    pub project: ProjectContext,
    /// Highlighted catalog row.
    pub cursor: usize,
    /// Latest successful calculation.
    pub report: Option<SizingReport>,
    /// Errors from the latest calculate attempt.
    pub errors: Vec<ConfigError>,
    /// Typing into the "other" description.
    pub editing_description: bool,
    /// Typing a value for one load field.
    pub editing_field: Option<FieldEdit>,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Name of the preset the form was filled from.
    pub preset_name: String,
}

impl App {
    /// Creates the app with the form filled from a preset.
    ///
    /// Unknown presets fall back to an empty form.
    pub fn new(preset: &str, config: SizerConfig) -> Self {
        let catalog = config.catalog();
        let mut app = Self {
            form: LoadSelections::from_catalog(&catalog),
            project: ProjectContext::default(),
            config,
            catalog,
            cursor: 0,
            report: None,
            errors: Vec::new(),
            editing_description: false,
            editing_field: None,
            quit: false,
            preset_name: String::new(),
        };
        app.load_preset(preset);
        app
    }

    /// Replaces the form with a preset's loads and project.
    pub fn load_preset(&mut self, name: &str) {
        let scenario = Scenario::from_preset(name).unwrap_or_default();
        self.form = scenario
            .to_selections(&self.catalog)
            .unwrap_or_else(|_| LoadSelections::from_catalog(&self.catalog));
        self.project = scenario.project;
        self.preset_name = name.to_string();
        self.report = None;
        self.errors.clear();
        self.editing_description = false;
        self.editing_field = None;
    }

    /// Clears every selection and the project choice.
    pub fn reset(&mut self) {
        self.form = LoadSelections::from_catalog(&self.catalog);
        self.project = ProjectContext::default();
        self.report = None;
        self.errors.clear();
        self.editing_description = false;
        self.editing_field = None;
    }

    /// Name of the highlighted load.
    pub fn current_name(&self) -> Option<&str> {
        self.catalog.names().nth(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.form.len() {
            self.cursor += 1;
        }
    }

    /// Toggles the highlighted load.
    pub fn toggle_current(&mut self) {
        if let Some(name) = self.current_name().map(str::to_string) {
            self.form.toggle(&name);
        }
    }

    /// Adjusts the highlighted load's quantity, clamped to `0..=MAX_QUANTITY`.
    pub fn change_quantity(&mut self, delta: i64) {
        let Some(name) = self.current_name().map(str::to_string) else {
            return;
        };
        if let Some(selection) = self.form.get_mut(&name) {
            let next = (i64::from(selection.quantity) + delta).clamp(0, i64::from(MAX_QUANTITY));
            selection.quantity = u32::try_from(next).unwrap_or(0);
        }
    }

    /// Moves to the next project category.
    pub fn cycle_project_type(&mut self) {
        let next = self
            .project
            .project_type
            .map_or(ProjectType::Domestic, ProjectType::next);
        self.project.project_type = Some(next);
        self.editing_description = next == ProjectType::Other;
    }

    pub fn toggle_chassis(&mut self) {
        self.project.needs_mobile_chassis = !self.project.needs_mobile_chassis;
    }

    /// Appends a character to the "other" description.
    pub fn push_description(&mut self, c: char) {
        self.project
            .other_description
            .get_or_insert_with(String::new)
            .push(c);
    }

    /// Removes the last character of the "other" description.
    pub fn pop_description(&mut self) {
        if let Some(text) = self.project.other_description.as_mut() {
            text.pop();
        }
    }

    /// Starts editing the highlighted load, beginning with its power.
    pub fn begin_field_edit(&mut self) {
        let Some(name) = self.current_name().map(str::to_string) else {
            return;
        };
        self.editing_field = self.form.get(&name).map(|s| FieldEdit {
            buffer: s.value(SelectionField::Power).to_string(),
            name,
            field: SelectionField::Power,
        });
    }

    /// Commits the typed value and moves to the next field of the same load.
    pub fn next_edit_field(&mut self) {
        self.commit_field_edit();
        if let Some(edit) = self.editing_field.as_mut() {
            let field = edit.field.next();
            edit.field = field;
            edit.buffer = self
                .form
                .get(&edit.name)
                .map(|s| s.value(field).to_string())
                .unwrap_or_default();
        }
    }

    /// Appends a character if it can be part of a number.
    pub fn push_field_char(&mut self, c: char) {
        if let Some(edit) = self.editing_field.as_mut() {
            if c.is_ascii_digit() || c == '.' {
                edit.buffer.push(c);
            }
        }
    }

    pub fn pop_field_char(&mut self) {
        if let Some(edit) = self.editing_field.as_mut() {
            edit.buffer.pop();
        }
    }

    /// Writes the typed value into the form.
    ///
    /// An unparsable buffer leaves the form unchanged and records an error.
    /// Range checks are left to [`App::calculate`].
    pub fn commit_field_edit(&mut self) {
        let Some(edit) = self.editing_field.as_ref() else {
            return;
        };
        match edit.buffer.trim().parse::<f64>() {
            Ok(value) => {
                self.form.set_field(&edit.name, edit.field, value);
                self.errors.clear();
            }
            Err(_) => {
                self.errors = vec![ConfigError::new(
                    format!("loads.\"{}\".{}", edit.name, edit.field.key()),
                    format!("\"{}\" is not a number", edit.buffer),
                )];
            }
        }
    }

    /// Commits the typed value and leaves edit mode.
    pub fn finish_field_edit(&mut self) {
        self.commit_field_edit();
        self.editing_field = None;
    }

    /// Leaves edit mode, discarding the typed value.
    pub fn cancel_field_edit(&mut self) {
        self.editing_field = None;
    }

    /// Validates the form and, if clean, replaces the report.
    pub fn calculate(&mut self) {
        let mut errors = self.project.validate();
        errors.extend(validate_selections(&self.form));
        if errors.is_empty() {
            self.report = Some(SizingReport::from_form(
                &self.project,
                &self.form,
                &self.config,
            ));
        } else {
            self.report = None;
        }
        self.errors = errors;
    }

    /// Whether the "Calculate" action is currently allowed.
    pub fn can_calculate(&self) -> bool {
        self.project.is_ready()
    }
}
