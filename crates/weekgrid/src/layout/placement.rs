//! Fractional drawing coordinates for laid-out sessions.
//!
//! The horizontal axis counts days: Monday covers `[0, 1)`, Tuesday `[1, 2)`
//! and so on. The vertical axis counts hours since midnight. A renderer only
//! needs to scale both axes to pixels.

use super::week::PlacedSession;

/// The rectangle a session occupies on the week grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    left: f32,
    width: f32,
    top: f32,
    bottom: f32,
}

impl Placement {
    /// Computes the rectangle for a placed session.
    ///
    /// The session's day is split into `column_count` equal columns and the
    /// session fills column `column`.
    pub fn of(placed: &PlacedSession) -> Self {
        let session = placed.session();
        let count = placed.column_count() as f32;
        let width = 1.0 / count;

        Self {
            left: f32::from(session.weekday().index()) + placed.column() as f32 * width,
            width,
            top: session.start().as_hours(),
            bottom: session.finish().as_hours(),
        }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the start time in hours since midnight.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Returns the finish time in hours since midnight.
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use weekgrid_core::{session::Session, time::TimeOfDay, weekday::Weekday};

    use super::*;
    use crate::layout::layout_week;

    fn session(weekday: Weekday, start: (i64, i64), finish: (i64, i64)) -> Session {
        Session::new(
            weekday,
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(finish.0, finish.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_full_width_session() {
        let layout = layout_week([session(Weekday::Wednesday, (9, 0), (10, 30))]);
        let placement = layout.iter().next().unwrap().placement();

        assert!(approx_eq!(f32, placement.left(), 2.0));
        assert!(approx_eq!(f32, placement.width(), 1.0));
        assert!(approx_eq!(f32, placement.right(), 3.0));
        assert!(approx_eq!(f32, placement.top(), 9.0));
        assert!(approx_eq!(f32, placement.bottom(), 10.5));
        assert!(approx_eq!(f32, placement.height(), 1.5));
    }

    #[test]
    fn test_side_by_side_sessions() {
        let layout = layout_week([
            session(Weekday::Tuesday, (9, 0), (10, 0)),
            session(Weekday::Tuesday, (9, 15), (10, 0)),
            session(Weekday::Tuesday, (9, 30), (11, 0)),
            session(Weekday::Tuesday, (10, 0), (11, 0)),
        ]);
        let placements: Vec<Placement> = layout.iter().map(PlacedSession::placement).collect();

        let third = 1.0 / 3.0;
        assert!(approx_eq!(f32, placements[0].left(), 1.0));
        assert!(approx_eq!(f32, placements[0].width(), third));
        assert!(approx_eq!(f32, placements[1].left(), 1.0 + third));
        assert!(approx_eq!(f32, placements[2].left(), 1.0 + 2.0 * third));

        // The 10:00 session only overlaps the 9:30 one.
        assert!(approx_eq!(f32, placements[3].width(), 0.5));
        assert!(approx_eq!(f32, placements[3].left(), 1.0));
    }
}
