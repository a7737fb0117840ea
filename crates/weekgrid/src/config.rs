//! Configuration types for Weekgrid timetables.
//!
//! All types implement [`serde::Deserialize`] so a configuration can be
//! loaded from a TOML file:
//!
//! ```toml
//! [parse]
//! semester = "SM1"
//!
//! [style]
//! palette = ["salmon", "wheat", "lightgreen"]
//! ```
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining parse and style settings.
//! - [`ParseSection`] - Controls which schedule rows are kept.
//! - [`StyleConfig`] - Controls visual styling such as the subject palette.
//!
//! # Example
//!
//! ```
//! # use weekgrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.parse().semester().is_none());
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use weekgrid_core::color::SubjectPalette;
use weekgrid_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parse configuration section.
    #[serde(default)]
    parse: ParseSection,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(parse: ParseSection, style: StyleConfig) -> Self {
        Self { parse, style }
    }

    /// Returns the parse configuration.
    pub fn parse(&self) -> &ParseSection {
        &self.parse
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Overrides the semester filter, keeping every other setting.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.parse.semester = Some(semester.into());
        self
    }
}

/// Settings applied while reading a schedule.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ParseSection {
    /// Only keep sessions from this semester, e.g. `SM1`.
    #[serde(default)]
    semester: Option<String>,
}

impl ParseSection {
    pub fn new(semester: Option<String>) -> Self {
        Self { semester }
    }

    /// Returns the semester filter, if any.
    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    /// Builds the parser configuration for this section.
    pub(crate) fn to_parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.semester.clone())
    }
}

/// Visual styling configuration for rendered timetables.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Subject colors as CSS color strings, handed out in order.
    #[serde(default)]
    palette: Option<Vec<String>>,
}

impl StyleConfig {
    pub fn new(palette: Option<Vec<String>>) -> Self {
        Self { palette }
    }

    /// Builds a fresh [`SubjectPalette`] from the configured colors, or the
    /// default palette if none are configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured list is empty or holds a string
    /// that is not a valid color.
    pub fn palette(&self) -> Result<SubjectPalette, String> {
        match &self.palette {
            Some(names) => SubjectPalette::from_names(names)
                .map_err(|err| format!("Invalid palette in config: {err}")),
            None => Ok(SubjectPalette::default()),
        }
    }
}
