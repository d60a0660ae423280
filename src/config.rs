//! Engine configuration.
//!
//! All settings have defaults matching the calendar view they were designed
//! for; a JSON file may override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Calendar grid geometry and overlap-layout reference
    pub grid: GridConfig,
    /// Recurrence export settings
    pub export: ExportConfig,
}

impl EngineConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid settings.
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Replace the export settings.
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendify::config::EngineConfig;
    ///
    /// let config = EngineConfig::from_json_str(r#"{"grid": {"start_hour": 7}}"#).unwrap();
    /// assert_eq!(config.grid.start_hour, 7);
    /// assert_eq!(config.grid.end_hour, 17);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.export.validate()
    }
}

/// Geometry of the rendered week grid.
///
/// `start_hour` doubles as the day-start reference from which overlap layout
/// offsets are measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First hour shown (inclusive)
    pub start_hour: u32,
    /// Last hour shown (exclusive)
    pub end_hour: u32,
    /// Pixel height of one hour
    pub hour_height: f32,
    /// Minutes between time-slot rows
    pub slot_minutes: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 17,
            hour_height: 60.0,
            slot_minutes: 30,
        }
    }
}

impl GridConfig {
    /// Set the visible hour range.
    pub fn with_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Set the pixel height of one hour.
    pub fn with_hour_height(mut self, hour_height: f32) -> Self {
        self.hour_height = hour_height;
        self
    }

    /// Minutes after midnight at which the grid starts.
    pub fn day_start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    fn validate(&self) -> Result<()> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(Error::Config(format!(
                "grid hours must satisfy start < end <= 24, got {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        if self.slot_minutes == 0 {
            return Err(Error::Config("grid slot_minutes must be positive".to_string()));
        }
        if self.hour_height.is_nan() || self.hour_height <= 0.0 {
            return Err(Error::Config("grid hour_height must be positive".to_string()));
        }
        Ok(())
    }
}

/// Settings for the calendar document export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// `PRODID` written at the top of the calendar document
    pub product_id: String,
    /// File name suggested for the exported artifact
    pub filename: String,
    /// Optional calendar display name (`X-WR-CALNAME`)
    pub calendar_name: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            product_id: "-//Calendify//Schedule Export//EN".to_string(),
            filename: "schedule.ics".to_string(),
            calendar_name: None,
        }
    }
}

impl ExportConfig {
    /// Set the product identifier.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Set the calendar display name.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = Some(name.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(Error::Config("export product_id must not be empty".to_string()));
        }
        if self.filename.trim().is_empty() {
            return Err(Error::Config("export filename must not be empty".to_string()));
        }
        Ok(())
    }
}
