//! Plain-text timetable listing.
//!
//! The listing names each weekday that has sessions, followed by one line
//! per session:
//!
//! ```text
//! Week 9:00-12:00, 3 sessions
//!
//! Monday (2 columns)
//!    9:00-10:00  col 1/2  COMP10001  L/01  <color>
//!    9:30-10:30  col 2/2  COMP10001  T/03  <color>
//!   11:00-12:00  col 1/1  MAST10006  L/01  <color>
//! ```
//!
//! Subjects receive palette colors in the order they are first listed and
//! `<color>` is the CSS serialization of that color.

use std::io::Write;

use log::{debug, info};

use weekgrid_core::color::SubjectPalette;

use super::{Error, Exporter};
use crate::layout::{PlacedSession, WeekLayout};

/// Writes a [`WeekLayout`] as a plain-text listing.
pub struct TextExporter<W: Write> {
    writer: W,
    palette: SubjectPalette,
}

impl<W: Write> TextExporter<W> {
    /// Creates an exporter that writes to `writer`, coloring subjects from `palette`.
    pub fn new(writer: W, palette: SubjectPalette) -> Self {
        Self { writer, palette }
    }

    /// Returns the palette, including every subject colored so far.
    pub fn palette(&self) -> &SubjectPalette {
        &self.palette
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_session(&mut self, placed: &PlacedSession) -> Result<(), Error> {
        let session = placed.session();
        let times = format!("{}-{}", session.start(), session.finish());
        let column = format!("col {}/{}", placed.column() + 1, placed.column_count());

        match session.class() {
            Some(class) => {
                let color = self.palette.color_for(class.subject());
                writeln!(
                    self.writer,
                    "  {times:>11}  {column}  {}  {}  {color}",
                    class.subject(),
                    class.label()
                )?;
            }
            None => writeln!(self.writer, "  {times:>11}  {column}")?,
        }
        Ok(())
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    fn export_week(&mut self, layout: &WeekLayout) -> Result<(), Error> {
        let Some(bounds) = layout.bounds() else {
            writeln!(self.writer, "Week is empty")?;
            return Ok(());
        };

        info!(sessions = layout.len(); "Writing text timetable");
        writeln!(
            self.writer,
            "Week {}-{}, {} sessions",
            bounds.earliest_start(),
            bounds.latest_finish(),
            layout.len()
        )?;

        for weekday in layout.weekdays() {
            let columns = layout.columns_used(weekday);
            writeln!(self.writer)?;
            match columns {
                1 => writeln!(self.writer, "{weekday}")?,
                _ => writeln!(self.writer, "{weekday} ({columns} columns)")?,
            }

            for placed in layout.day(weekday) {
                self.write_session(placed)?;
            }
            debug!(weekday:% = weekday; "Weekday written");
        }

        self.writer.flush()?;
        Ok(())
    }
}
