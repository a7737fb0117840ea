//! Weekgrid - side-by-side layout for weekly class timetables.
//!
//! Parsing, overlap layout and text rendering for weekly schedules. Sessions
//! that run at the same time on the same weekday are given distinct columns
//! so they can be drawn next to each other instead of on top of each other.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use weekgrid_core::{color, session, time, weekday};

pub use error::{SessionFault, WeekgridError};

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, text::TextExporter};
use layout::WeekLayout;
use session::{Session, SessionSpec};

/// Builder for parsing, laying out and rendering timetables.
///
/// # Examples
///
/// ```
/// use weekgrid::{TimetableBuilder, config::AppConfig};
///
/// let source = "
///     COMP10001/U/1/SM1/L/01  Monday  9:00  10:00
///     COMP10001/U/1/SM1/T/03  Monday  9:30  10:30
/// ";
///
/// let builder = TimetableBuilder::new(AppConfig::default());
///
/// let sessions = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(sessions);
/// let text = builder.render_text(&layout).expect("Failed to render");
///
/// assert!(text.contains("Monday (2 columns)"));
/// ```
#[derive(Default)]
pub struct TimetableBuilder {
    config: AppConfig,
}

impl TimetableBuilder {
    /// Create a new timetable builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including parse and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse schedule source text into sessions.
    ///
    /// Applies the configured semester filter.
    ///
    /// # Errors
    ///
    /// Returns `WeekgridError::Parse` holding every malformed row, together
    /// with `source` for rendering the diagnostics.
    pub fn parse(&self, source: &str) -> Result<Vec<Session>, WeekgridError> {
        info!("Parsing schedule");

        let sessions = weekgrid_parser::parse(source, &self.config.parse().to_parse_config())
            .map_err(|err| WeekgridError::new_parse_error(err, source))?;

        debug!(sessions = sessions.len(); "Schedule parsed successfully");
        trace!(sessions:?; "Parsed sessions");

        Ok(sessions)
    }

    /// Lay out validated sessions.
    pub fn layout(&self, sessions: Vec<Session>) -> WeekLayout {
        layout::layout_week(sessions)
    }

    /// Validate raw session data and lay it out.
    ///
    /// # Errors
    ///
    /// Returns `WeekgridError::InvalidSessions` listing every rejected spec.
    pub fn layout_specs(&self, specs: Vec<SessionSpec>) -> Result<WeekLayout, WeekgridError> {
        layout::layout_specs(specs)
    }

    /// Render a laid-out week as a plain-text listing.
    ///
    /// # Errors
    ///
    /// Returns `WeekgridError::Config` if the configured palette is invalid,
    /// or `WeekgridError::Export` if rendering fails.
    pub fn render_text(&self, layout: &WeekLayout) -> Result<String, WeekgridError> {
        let palette = self.config.style().palette().map_err(WeekgridError::Config)?;

        let mut exporter = TextExporter::new(Vec::new(), palette);
        exporter.export_week(layout)?;

        let text = String::from_utf8(exporter.into_inner())
            .map_err(|err| WeekgridError::from(export::Error::Render(err.to_string())))?;

        info!("Text rendered successfully");
        Ok(text)
    }
}
