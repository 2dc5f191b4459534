//! Rendering of sizing results as text, JSON, or CSV.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::config::SizerConfig;
use crate::contact::{ContactLink, contact_links};
use crate::project::ProjectContext;
use crate::selection::{LoadSelection, LoadSelections};
use crate::sizing::CalculationResult;

/// CSV column header, one row per report.
const CSV_HEADER: &str = "project,needs_mobile_chassis,selected_loads,required_power_w,\
                          peak_power_w,required_autonomy_wh,raw_panel_count,\
                          display_panel_count,required_battery_wh,extra_battery_units,\
                          station_model";

/// One selected load as it entered the calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub quantity: u32,
    pub power_w: f64,
    pub peak_power_w: f64,
    pub usage_hours: f64,
}

impl ReportLine {
    pub fn new(name: &str, selection: &LoadSelection) -> Self {
        Self {
            name: name.to_string(),
            quantity: selection.quantity,
            power_w: selection.power_w,
            peak_power_w: selection.peak_power_w,
            usage_hours: selection.usage_hours,
        }
    }
}

/// Everything shown to the customer after pressing "Calculate".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    /// Project category label.
    pub project: String,
    pub needs_mobile_chassis: bool,
    /// Selected loads in catalog order.
    pub loads: Vec<ReportLine>,
    pub result: CalculationResult,
    /// Call-to-action links for the recommended station.
    pub contacts: Vec<ContactLink>,
}

impl SizingReport {
    /// Runs the calculation over a filled-in form and assembles the report.
    ///
    /// Performs no validation; callers check the project and selections
    /// first.
    pub fn from_form(
        project: &ProjectContext,
        selections: &LoadSelections,
        config: &SizerConfig,
    ) -> Self {
        let result = config
            .sizing
            .calculate(selections.selections(), project.needs_mobile_chassis);
        Self {
            project: project.display_name(),
            needs_mobile_chassis: project.needs_mobile_chassis,
            loads: selections
                .iter()
                .filter(|(_, s)| s.selected)
                .map(|(name, s)| ReportLine::new(name, s))
                .collect(),
            result,
            contacts: contact_links(&config.contact, result.station_model),
        }
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "--- Sizing Report ---")?;
        writeln!(f, "Project:               {}", self.project)?;
        writeln!(
            f,
            "Mobile chassis:        {}",
            if self.needs_mobile_chassis { "yes" } else { "no" }
        )?;
        writeln!(f, "Loads:")?;
        if self.loads.is_empty() {
            writeln!(f, "  (none selected)")?;
        }
        for l in &self.loads {
            writeln!(
                f,
                "  {:>3} x {:<28} {:>6.0} W  peak {:>6.0} W  {:>4.1} h/day",
                l.quantity, l.name, l.power_w, l.peak_power_w, l.usage_hours
            )?;
        }
        writeln!(f, "Required power:        {:.0} W", r.required_power_w)?;
        writeln!(f, "Peak power:            {:.0} W", r.peak_power_w)?;
        writeln!(f, "Required autonomy:     {:.0} Wh", r.required_autonomy_wh)?;
        writeln!(
            f,
            "Solar panels:          {} (computed {})",
            r.display_panel_count, r.raw_panel_count
        )?;
        writeln!(f, "Battery capacity:      {:.0} Wh", r.required_battery_wh)?;
        writeln!(f, "Extra batteries:       {}", r.extra_battery_units)?;
        writeln!(f, "Recommended station:   {}", r.station_model)?;
        if !self.contacts.is_empty() {
            writeln!(f, "Contact us:")?;
            for c in &self.contacts {
                writeln!(f, "  {:<8} {}", format!("{}:", c.label), c.url)?;
            }
        }
        Ok(())
    }
}

/// Output format of the CLI report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown format \"{other}\", expected text, json or csv"
            )),
        }
    }
}

impl OutputFormat {
    /// Writes a report in this format.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if writing or serialization fails.
    pub fn write(self, report: &SizingReport, mut writer: impl Write) -> io::Result<()> {
        match self {
            Self::Text => write!(writer, "{report}"),
            Self::Json => {
                serde_json::to_writer_pretty(&mut writer, report)?;
                writeln!(writer)
            }
            Self::Csv => write_csv(std::slice::from_ref(report), writer),
        }
    }

    /// Writes a report to a file in this format.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if file creation or writing fails.
    pub fn export(self, report: &SizingReport, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut buf = io::BufWriter::new(file);
        self.write(report, &mut buf)?;
        buf.flush()
    }
}

/// Writes reports as CSV, one row per report.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(reports: &[SizingReport], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(CSV_HEADER.split(',').map(str::trim))?;

    for report in reports {
        let r = &report.result;
        let loads: Vec<String> = report
            .loads
            .iter()
            .map(|l| format!("{}x{}", l.quantity, l.name))
            .collect();
        wtr.write_record(&[
            report.project.clone(),
            report.needs_mobile_chassis.to_string(),
            loads.join(";"),
            format!("{:.2}", r.required_power_w),
            format!("{:.2}", r.peak_power_w),
            format!("{:.2}", r.required_autonomy_wh),
            r.raw_panel_count.to_string(),
            r.display_panel_count.to_string(),
            format!("{:.2}", r.required_battery_wh),
            r.extra_battery_units.to_string(),
            r.station_model.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
