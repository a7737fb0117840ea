//! Overlap layout for weekly timetables.
//!
//! Sessions that share an instant on the same weekday are drawn side by side.
//! This module decides, for every session, which horizontal column it
//! occupies and how many columns its part of the day is divided into.
//!
//! # Pipeline Position
//!
//! ```text
//! Schedule source
//!     ↓ parse
//! Vec<Session>
//!     ↓ layout (this module)
//! WeekLayout
//!     ↓ export
//! Output
//! ```
//!
//! # Algorithm
//!
//! Weekdays are laid out independently. Within a day:
//!
//! 1. Sessions are visited by `(start, finish)`, ties kept in input order, and
//!    each takes the lowest column whose previous occupant has finished by
//!    its start. This uses exactly as many columns as the day's peak
//!    concurrency.
//! 2. A sweep over every start and finish of the day measures how many
//!    sessions are active on each stretch between consecutive boundaries. A
//!    session's column count is the highest of those measurements inside its
//!    own span, so a quiet morning is not squeezed because of a busy
//!    afternoon.
//!
//! A session that finishes exactly when another starts does not overlap it.
//!
//! # Submodules
//!
//! - [`placement`] - Maps a laid-out session onto fractional drawing coordinates

mod columns;
mod concurrency;
pub mod placement;
mod week;

pub use week::{PlacedSession, Slot, WeekBounds, WeekLayout, layout_specs, layout_week};
