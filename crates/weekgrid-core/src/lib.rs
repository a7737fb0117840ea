//! Weekgrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Weekgrid
//! timetable tools. It includes:
//!
//! - **Time**: Validated time-of-day values ([`time::TimeOfDay`])
//! - **Weekdays**: The seven scheduling days ([`weekday::Weekday`])
//! - **Sessions**: Class sessions and their raw input form ([`session`] module)
//! - **Colors**: CSS color handling and per-subject palettes ([`color`] module)
//! - **Errors**: Validation errors for malformed input ([`error::SessionError`])

pub mod color;
pub mod error;
pub mod session;
pub mod time;
pub mod weekday;
