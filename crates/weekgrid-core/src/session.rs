//! Class sessions and their raw input form.
//!
//! A [`Session`] is one scheduled occurrence of a class on a weekday. It is
//! valid by construction: the weekday is one of the seven recognized days and
//! its start is strictly before its finish. Scraping collaborators that hold
//! unchecked numbers hand them over as a [`SessionSpec`] and convert with
//! [`TryFrom`].

use std::{fmt, str::FromStr};

use crate::{
    error::{IntervalError, SessionError},
    time::TimeOfDay,
    weekday::Weekday,
};

/// A university class code such as `COMP10001/U/1/SM1/L/01`.
///
/// The six slash-separated parts are subject, campus, number, semester,
/// class type and repeat.
///
/// # Examples
///
/// ```
/// # use weekgrid_core::session::ClassCode;
/// let code: ClassCode = "COMP10001/U/1/SM1/T/03".parse().unwrap();
/// assert_eq!(code.subject(), "COMP10001");
/// assert_eq!(code.label(), "T/03");
/// assert!(code.in_semester("sm1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassCode {
    subject: String,
    campus: String,
    number: String,
    semester: String,
    class_type: String,
    repeat: String,
}

impl ClassCode {
    /// Returns the subject code, e.g. `COMP10001`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the campus code, e.g. `U`.
    pub fn campus(&self) -> &str {
        &self.campus
    }

    /// Returns the subject offering number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the study period code, e.g. `SM1`.
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Returns the class type code, e.g. `L` for a lecture.
    pub fn class_type(&self) -> &str {
        &self.class_type
    }

    /// Returns the repeat number distinguishing classes of the same type.
    pub fn repeat(&self) -> &str {
        &self.repeat
    }

    /// Returns the short label drawn inside a session box, `TYPE/REPEAT`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.class_type, self.repeat)
    }

    /// Checks whether this class runs in `semester`, ignoring case.
    pub fn in_semester(&self, semester: &str) -> bool {
        self.semester.eq_ignore_ascii_case(semester)
    }
}

impl FromStr for ClassCode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [subject, campus, number, semester, class_type, repeat] = parts.as_slice() else {
            return Err(SessionError::InvalidClassCode(s.to_string()));
        };
        if parts.iter().any(|part| part.trim().is_empty()) {
            return Err(SessionError::InvalidClassCode(s.to_string()));
        }

        Ok(Self {
            subject: subject.to_uppercase(),
            campus: campus.to_string(),
            number: number.to_string(),
            semester: semester.to_uppercase(),
            class_type: class_type.to_string(),
            repeat: repeat.to_string(),
        })
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}/{}",
            self.subject, self.campus, self.number, self.semester, self.class_type, self.repeat
        )
    }
}

/// One scheduled occurrence of a class.
///
/// # Examples
///
/// ```
/// # use weekgrid_core::{session::Session, time::TimeOfDay, weekday::Weekday};
/// let lecture = Session::new(
///     Weekday::Monday,
///     TimeOfDay::new(9, 0).unwrap(),
///     TimeOfDay::new(10, 0).unwrap(),
/// )
/// .unwrap();
///
/// // Zero-length sessions are rejected.
/// let nine = TimeOfDay::new(9, 0).unwrap();
/// assert!(Session::new(Weekday::Monday, nine, nine).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    weekday: Weekday,
    start: TimeOfDay,
    finish: TimeOfDay,
    class: Option<ClassCode>,
}

impl Session {
    /// Creates a session on `weekday` spanning `[start, finish)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidInterval`] if `start` is not strictly
    /// before `finish`.
    pub fn new(weekday: Weekday, start: TimeOfDay, finish: TimeOfDay) -> Result<Self, SessionError> {
        if start >= finish {
            return Err(IntervalError::NotIncreasing { start, finish }.into());
        }

        Ok(Self {
            weekday,
            start,
            finish,
            class: None,
        })
    }

    /// Attaches the class this session belongs to.
    pub fn with_class(mut self, class: ClassCode) -> Self {
        self.class = Some(class);
        self
    }

    /// Returns the weekday of this session.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the inclusive start time.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the exclusive finish time.
    pub fn finish(&self) -> TimeOfDay {
        self.finish
    }

    /// Returns the class code, if one was attached.
    pub fn class(&self) -> Option<&ClassCode> {
        self.class.as_ref()
    }

    /// Checks whether two sessions share any instant on the same weekday.
    ///
    /// Touching intervals, where one finishes exactly when the other starts,
    /// do not overlap.
    pub fn overlaps(&self, other: &Session) -> bool {
        self.weekday == other.weekday && self.start < other.finish && other.start < self.finish
    }
}

/// Unchecked session data as produced by a schedule scraper.
///
/// Every field holds the raw value so nothing is lost before validation;
/// convert with `Session::try_from(spec)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSpec {
    /// Zero-based weekday index, Monday being `0`.
    pub weekday: i64,
    /// Start as `(hour, minute)`.
    pub start: (i64, i64),
    /// Finish as `(hour, minute)`.
    pub finish: (i64, i64),
    /// Optional class code text.
    pub class: Option<String>,
}

impl TryFrom<SessionSpec> for Session {
    type Error = SessionError;

    fn try_from(spec: SessionSpec) -> Result<Self, Self::Error> {
        let weekday = Weekday::from_index(spec.weekday)?;
        let start = TimeOfDay::new(spec.start.0, spec.start.1)?;
        let finish = TimeOfDay::new(spec.finish.0, spec.finish.1)?;
        let session = Session::new(weekday, start, finish)?;

        match spec.class {
            Some(code) => Ok(session.with_class(code.parse()?)),
            None => Ok(session),
        }
    }
}
