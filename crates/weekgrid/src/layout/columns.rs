//! Greedy column assignment for a single weekday.

use log::trace;

use weekgrid_core::{session::Session, time::TimeOfDay};

/// Assigns every session the lowest column that is free when it starts.
///
/// All `sessions` must share a weekday. The result is parallel to `sessions`.
///
/// Sessions are visited in `(start, finish)` order. The sort is stable, so on
/// exact ties the session that appears first in `sessions` gets the lower
/// column. A column is free for a session once its last occupant finished at
/// or before the session's start.
pub(super) fn assign_columns(sessions: &[Session]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sessions.len()).collect();
    order.sort_by_key(|&index| (sessions[index].start(), sessions[index].finish()));

    // Finish time of the latest occupant of each column.
    let mut held: Vec<TimeOfDay> = Vec::new();
    let mut columns = vec![0; sessions.len()];

    for index in order {
        let session = &sessions[index];

        let column = match held.iter().position(|&finish| finish <= session.start()) {
            Some(column) => {
                held[column] = session.finish();
                column
            }
            None => {
                held.push(session.finish());
                held.len() - 1
            }
        };

        trace!(
            index = index,
            start:% = session.start(),
            finish:% = session.finish(),
            column = column;
            "Assigned column"
        );
        columns[index] = column;
    }

    columns
}

#[cfg(test)]
mod tests {
    use weekgrid_core::weekday::Weekday;

    use super::*;

    fn session(start: (i64, i64), finish: (i64, i64)) -> Session {
        Session::new(
            Weekday::Monday,
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(finish.0, finish.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_day() {
        assert!(assign_columns(&[]).is_empty());
    }

    #[test]
    fn test_staggered_sessions_take_new_columns() {
        let sessions = [
            session((9, 0), (10, 0)),
            session((9, 30), (10, 30)),
            session((9, 45), (11, 0)),
        ];
        assert_eq!(assign_columns(&sessions), [0, 1, 2]);
    }

    #[test]
    fn test_touching_session_reuses_column() {
        let sessions = [
            session((9, 0), (10, 0)),
            session((9, 30), (10, 0)),
            session((10, 0), (11, 0)),
        ];
        assert_eq!(assign_columns(&sessions), [0, 1, 0]);
    }

    #[test]
    fn test_visits_in_start_order_regardless_of_input_order() {
        let sessions = [
            session((10, 0), (11, 0)),
            session((9, 0), (10, 30)),
        ];
        // The 9:00 session is placed first and takes column 0.
        assert_eq!(assign_columns(&sessions), [1, 0]);
    }

    #[test]
    fn test_shorter_session_wins_start_ties() {
        let sessions = [
            session((9, 0), (11, 0)),
            session((9, 0), (10, 0)),
        ];
        assert_eq!(assign_columns(&sessions), [1, 0]);
    }

    #[test]
    fn test_identical_sessions_keep_input_order() {
        let sessions = [
            session((9, 0), (10, 0)),
            session((9, 0), (10, 0)),
            session((9, 0), (10, 0)),
        ];
        assert_eq!(assign_columns(&sessions), [0, 1, 2]);
    }

    #[test]
    fn test_lowest_free_column_is_recycled() {
        let sessions = [
            session((9, 0), (10, 0)),
            session((9, 0), (12, 0)),
            session((9, 0), (11, 0)),
            // Columns 0 and 1 are both free by 11:00; the lower one wins.
            session((11, 0), (12, 0)),
        ];
        assert_eq!(assign_columns(&sessions), [0, 2, 1, 0]);
    }
}
