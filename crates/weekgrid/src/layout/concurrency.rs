//! Peak local concurrency for a single weekday.
//!
//! The day is cut at every distinct start and finish time. Between two
//! consecutive cuts the set of active sessions is constant, so one sweep over
//! the sorted events yields the concurrency of every stretch of the day.

use weekgrid_core::{session::Session, time::TimeOfDay};

/// Event kinds, ordered so finishes precede starts at the same instant.
///
/// With that order a session finishing at 10:00 is no longer counted when the
/// next one starts at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Finish,
    Start,
}

/// A session boundary, sorted by `(time, kind, index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Event {
    time: TimeOfDay,
    kind: EventKind,
    index: usize,
}

/// Concurrency on each stretch `[boundaries[k], boundaries[k + 1])`.
#[derive(Debug, Default)]
struct Profile {
    boundaries: Vec<TimeOfDay>,
    levels: Vec<usize>,
}

impl Profile {
    fn sweep(sessions: &[Session]) -> Self {
        let mut events: Vec<Event> = sessions
            .iter()
            .enumerate()
            .flat_map(|(index, session)| {
                [
                    Event {
                        time: session.start(),
                        kind: EventKind::Start,
                        index,
                    },
                    Event {
                        time: session.finish(),
                        kind: EventKind::Finish,
                        index,
                    },
                ]
            })
            .collect();
        // Keys are unique, so an unstable sort is still deterministic.
        events.sort_unstable();

        let mut profile = Self::default();
        let mut active = 0usize;
        for group in events.chunk_by(|a, b| a.time == b.time) {
            for event in group {
                match event.kind {
                    EventKind::Start => active += 1,
                    EventKind::Finish => active -= 1,
                }
            }
            profile.boundaries.push(group[0].time);
            profile.levels.push(active);
        }

        profile
    }

    /// Highest concurrency on any stretch inside `[start, finish)`.
    fn peak_within(&self, start: TimeOfDay, finish: TimeOfDay) -> usize {
        let first = self.boundaries.partition_point(|&time| time < start);
        let last = self.boundaries.partition_point(|&time| time < finish);

        self.levels[first..last]
            .iter()
            .copied()
            .max()
            .unwrap_or(1)
    }
}

/// Returns, for each session, the peak number of sessions active at any
/// instant within its own span, itself included.
///
/// All `sessions` must share a weekday. The result is parallel to `sessions`.
pub(super) fn peak_concurrency(sessions: &[Session]) -> Vec<usize> {
    let profile = Profile::sweep(sessions);

    sessions
        .iter()
        .map(|session| profile.peak_within(session.start(), session.finish()))
        .collect()
}
