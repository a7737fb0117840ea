//! Week-level layout: grouping by weekday and annotating sessions.

use std::{collections::BTreeMap, ops::RangeInclusive};

use log::{debug, info};

use weekgrid_core::{
    session::{Session, SessionSpec},
    time::TimeOfDay,
    weekday::Weekday,
};

use crate::{
    error::{SessionFault, WeekgridError},
    layout::{columns, concurrency, placement::Placement},
};

/// The horizontal slot assigned to a session among its overlapping peers.
///
/// A session is drawn in column [`column`](Slot::column) of
/// [`column_count`](Slot::column_count) equal-width columns. `column` is
/// always less than `column_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    column: usize,
    column_count: usize,
}

impl Slot {
    /// Returns the zero-based column index.
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns how many columns the session's width is divided into.
    pub fn column_count(self) -> usize {
        self.column_count
    }

    /// Returns `true` if the session overlaps nothing and spans the whole day.
    pub fn is_full_width(self) -> bool {
        self.column_count == 1
    }
}

/// A session together with its assigned [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSession {
    session: Session,
    slot: Slot,
}

impl PlacedSession {
    /// Returns the laid-out session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the assigned slot.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Shorthand for `self.slot().column()`.
    pub fn column(&self) -> usize {
        self.slot.column
    }

    /// Shorthand for `self.slot().column_count()`.
    pub fn column_count(&self) -> usize {
        self.slot.column_count
    }

    /// Returns the fractional drawing rectangle for this session.
    pub fn placement(&self) -> Placement {
        Placement::of(self)
    }
}

/// Earliest start and latest finish across a laid-out week.
///
/// Renderers use this to size the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    earliest_start: TimeOfDay,
    latest_finish: TimeOfDay,
}

impl WeekBounds {
    /// Returns the earliest session start of the week.
    pub fn earliest_start(self) -> TimeOfDay {
        self.earliest_start
    }

    /// Returns the latest session finish of the week.
    pub fn latest_finish(self) -> TimeOfDay {
        self.latest_finish
    }

    /// Returns the whole hours that need a gridline, from the hour of the
    /// earliest start to the hour of the latest finish.
    pub fn hours(self) -> RangeInclusive<u8> {
        self.earliest_start.hour()..=self.latest_finish.hour()
    }
}

/// The laid-out sessions of a week, grouped by weekday.
///
/// Iteration visits weekdays Monday through Sunday and, within a weekday,
/// sessions in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekLayout {
    days: BTreeMap<Weekday, Vec<PlacedSession>>,
}

impl WeekLayout {
    /// Iterates over every placed session.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedSession> {
        self.days.values().flatten()
    }

    /// Returns the number of placed sessions.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Returns `true` if the week has no sessions.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the sessions placed on `weekday`.
    pub fn day(&self, weekday: Weekday) -> &[PlacedSession] {
        self.days.get(&weekday).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over the weekdays that have at least one session.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.keys().copied()
    }

    /// Returns the number of distinct columns used on `weekday`.
    pub fn columns_used(&self, weekday: Weekday) -> usize {
        self.day(weekday)
            .iter()
            .map(|placed| placed.column() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the earliest start and latest finish, or `None` for an empty week.
    pub fn bounds(&self) -> Option<WeekBounds> {
        let earliest_start = self.iter().map(|p| p.session().start()).min()?;
        let latest_finish = self.iter().map(|p| p.session().finish()).max()?;

        Some(WeekBounds {
            earliest_start,
            latest_finish,
        })
    }

    /// Consumes the layout, returning all placed sessions in iteration order.
    pub fn into_sessions(self) -> Vec<PlacedSession> {
        self.days.into_values().flatten().collect()
    }
}

impl<'a> IntoIterator for &'a WeekLayout {
    type Item = &'a PlacedSession;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, Weekday, Vec<PlacedSession>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values().flatten()
    }
}

/// Lays out a week of sessions.
///
/// Sessions are grouped by weekday and every group is laid out on its own;
/// nothing carries over from one weekday to the next. The result depends only
/// on the sessions and their order, so repeated calls give identical layouts.
///
/// # Examples
///
/// ```
/// # use weekgrid::layout::layout_week;
/// # use weekgrid_core::{session::Session, time::TimeOfDay, weekday::Weekday};
/// let at = |h, m| TimeOfDay::new(h, m).unwrap();
/// let sessions = vec![
///     Session::new(Weekday::Monday, at(9, 0), at(10, 0)).unwrap(),
///     Session::new(Weekday::Monday, at(9, 30), at(10, 30)).unwrap(),
///     Session::new(Weekday::Monday, at(11, 0), at(12, 0)).unwrap(),
/// ];
///
/// let layout = layout_week(sessions);
/// let slots: Vec<_> = layout
///     .iter()
///     .map(|p| (p.column(), p.column_count()))
///     .collect();
/// assert_eq!(slots, [(0, 2), (1, 2), (0, 1)]);
/// ```
pub fn layout_week(sessions: impl IntoIterator<Item = Session>) -> WeekLayout {
    let mut grouped: BTreeMap<Weekday, Vec<Session>> = BTreeMap::new();
    for session in sessions {
        grouped.entry(session.weekday()).or_default().push(session);
    }

    let days = grouped
        .into_iter()
        .map(|(weekday, sessions)| (weekday, layout_day(weekday, sessions)))
        .collect();

    let layout = WeekLayout { days };
    info!(sessions = layout.len(); "Week laid out");
    layout
}

/// Validates raw session data and lays out the week.
///
/// Every spec is validated before anything is laid out.
///
/// # Errors
///
/// Returns [`WeekgridError::InvalidSessions`] naming the input position and
/// fault of every malformed spec. Nothing is laid out in that case.
pub fn layout_specs(
    specs: impl IntoIterator<Item = SessionSpec>,
) -> Result<WeekLayout, WeekgridError> {
    let mut sessions = Vec::new();
    let mut faults = Vec::new();

    for (index, spec) in specs.into_iter().enumerate() {
        match Session::try_from(spec) {
            Ok(session) => sessions.push(session),
            Err(error) => faults.push(SessionFault::new(index, error)),
        }
    }

    if !faults.is_empty() {
        return Err(WeekgridError::InvalidSessions(faults));
    }

    Ok(layout_week(sessions))
}

fn layout_day(weekday: Weekday, sessions: Vec<Session>) -> Vec<PlacedSession> {
    let columns = columns::assign_columns(&sessions);
    let counts = concurrency::peak_concurrency(&sessions);

    let placed: Vec<PlacedSession> = sessions
        .into_iter()
        .zip(columns.into_iter().zip(counts))
        .map(|(session, (column, column_count))| PlacedSession {
            session,
            slot: Slot {
                column,
                column_count,
            },
        })
        .collect();

    debug!(
        weekday:% = weekday,
        sessions = placed.len(),
        columns = placed.iter().map(|p| p.column() + 1).max().unwrap_or(0);
        "Weekday laid out"
    );
    placed
}

#[cfg(test)]
mod tests {
    use weekgrid_core::error::{IntervalError, SessionError};

    use super::*;

    fn at(hour: i64, minute: i64) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn session(weekday: Weekday, start: (i64, i64), finish: (i64, i64)) -> Session {
        Session::new(weekday, at(start.0, start.1), at(finish.0, finish.1)).unwrap()
    }

    fn slots(placed: &[PlacedSession]) -> Vec<(usize, usize)> {
        placed
            .iter()
            .map(|p| (p.column(), p.column_count()))
            .collect()
    }

    #[test]
    fn test_three_way_overlap() {
        let layout = layout_week([
            session(Weekday::Monday, (9, 0), (10, 0)),
            session(Weekday::Monday, (9, 30), (10, 30)),
            session(Weekday::Monday, (9, 45), (11, 0)),
        ]);

        assert_eq!(slots(layout.day(Weekday::Monday)), [(0, 3), (1, 3), (2, 3)]);
        assert_eq!(layout.columns_used(Weekday::Monday), 3);
    }

    #[test]
    fn test_touching_session_reuses_column() {
        let layout = layout_week([
            session(Weekday::Monday, (9, 0), (10, 0)),
            session(Weekday::Monday, (9, 30), (10, 0)),
            session(Weekday::Monday, (10, 0), (11, 0)),
        ]);

        assert_eq!(slots(layout.day(Weekday::Monday)), [(0, 2), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_back_to_back_sessions_are_full_width() {
        let layout = layout_week([
            session(Weekday::Friday, (9, 0), (10, 0)),
            session(Weekday::Friday, (10, 0), (11, 0)),
        ]);

        assert!(layout.iter().all(|p| p.slot().is_full_width()));
        assert_eq!(slots(layout.day(Weekday::Friday)), [(0, 1), (0, 1)]);
    }

    #[test]
    fn test_weekdays_are_independent() {
        let layout = layout_week([
            session(Weekday::Tuesday, (9, 0), (10, 0)),
            session(Weekday::Monday, (9, 0), (10, 0)),
            session(Weekday::Tuesday, (9, 0), (10, 0)),
        ]);

        assert_eq!(slots(layout.day(Weekday::Monday)), [(0, 1)]);
        assert_eq!(slots(layout.day(Weekday::Tuesday)), [(0, 2), (1, 2)]);
        assert!(layout.day(Weekday::Sunday).is_empty());
    }

    #[test]
    fn test_iteration_order_is_weekday_then_input() {
        let layout = layout_week([
            session(Weekday::Wednesday, (12, 0), (13, 0)),
            session(Weekday::Monday, (15, 0), (16, 0)),
            session(Weekday::Monday, (8, 0), (9, 0)),
        ]);

        let order: Vec<(Weekday, u8)> = layout
            .iter()
            .map(|p| (p.session().weekday(), p.session().start().hour()))
            .collect();
        assert_eq!(
            order,
            [
                (Weekday::Monday, 15),
                (Weekday::Monday, 8),
                (Weekday::Wednesday, 12)
            ]
        );
        assert_eq!(
            layout.weekdays().collect::<Vec<_>>(),
            [Weekday::Monday, Weekday::Wednesday]
        );
    }

    #[test]
    fn test_bounds() {
        let layout = layout_week([
            session(Weekday::Monday, (10, 15), (11, 0)),
            session(Weekday::Thursday, (8, 30), (9, 30)),
            session(Weekday::Friday, (16, 0), (17, 45)),
        ]);

        let bounds = layout.bounds().unwrap();
        assert_eq!(bounds.earliest_start(), at(8, 30));
        assert_eq!(bounds.latest_finish(), at(17, 45));
        assert_eq!(bounds.hours(), 8..=17);
    }

    #[test]
    fn test_empty_week() {
        let layout = layout_week(Vec::new());
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert!(layout.bounds().is_none());
        assert_eq!(layout.columns_used(Weekday::Monday), 0);
    }

    #[test]
    fn test_layout_specs_rejects_whole_batch() {
        let specs = vec![
            SessionSpec {
                weekday: 0,
                start: (9, 0),
                finish: (10, 0),
                class: None,
            },
            SessionSpec {
                weekday: 0,
                start: (10, 0),
                finish: (9, 0),
                class: None,
            },
            SessionSpec {
                weekday: 8,
                start: (9, 0),
                finish: (10, 0),
                class: None,
            },
        ];

        let Err(WeekgridError::InvalidSessions(faults)) = layout_specs(specs) else {
            panic!("expected the batch to be rejected");
        };

        assert_eq!(faults.len(), 2);
        assert_eq!(faults[0].index(), 1);
        assert_eq!(
            faults[0].error(),
            &SessionError::InvalidInterval(IntervalError::NotIncreasing {
                start: at(10, 0),
                finish: at(9, 0),
            })
        );
        assert_eq!(faults[1].index(), 2);
        assert!(faults[1].error().is_invalid_weekday());
    }

    #[test]
    fn test_layout_specs_valid_batch() {
        let specs = [(9, 0), (9, 30)].map(|start| SessionSpec {
            weekday: 2,
            start,
            finish: (10, 0),
            class: Some("COMP10001/U/1/SM1/T/01".to_string()),
        });

        let layout = layout_specs(specs).unwrap();
        assert_eq!(slots(layout.day(Weekday::Wednesday)), [(0, 2), (1, 2)]);
    }
}
