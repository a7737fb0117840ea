//! Reader for line-oriented schedule files.
//!
//! Each non-blank line describes one session as four whitespace-separated
//! fields:
//!
//! ```text
//! # class code            weekday   start   finish
//! COMP10001/U/1/SM1/L/01  Monday    9:00    10:00
//! ```
//!
//! Everything after `#` is a comment. Fields are located with winnow so
//! every diagnostic can point at the exact text that caused it. A bad field
//! does not stop the reader: the row is dropped, the fault is recorded and
//! the next row is read.

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::{digit1, multispace0},
    combinator::{preceded, repeat, separated_pair, terminated},
    error::ModalResult,
    stream::LocatingSlice,
    token::take_while,
};

use weekgrid_core::{
    error::{IntervalError, SessionError},
    session::{ClassCode, Session},
    time::TimeOfDay,
    weekday::Weekday,
};

use crate::{
    ParseConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

const FIELDS_PER_ROW: usize = 4;
const COMMENT: char = '#';

type Input<'a> = LocatingSlice<&'a str>;

/// A whitespace-delimited field and its location in the source.
#[derive(Debug, Clone, Copy)]
struct Field<'a> {
    text: &'a str,
    span: Span,
}

fn field<'a>(input: &mut Input<'a>) -> ModalResult<Field<'a>> {
    take_while(1.., |c: char| !c.is_whitespace())
        .with_span()
        .map(|(text, range)| Field {
            text,
            span: Span::new(range),
        })
        .parse_next(input)
}

fn fields<'a>(input: &mut Input<'a>) -> ModalResult<Vec<Field<'a>>> {
    terminated(repeat(0.., preceded(multispace0, field)), multispace0).parse_next(input)
}

/// One clock component; leading zeros are allowed, as in `09` or `00`.
fn clock_component(input: &mut &str) -> ModalResult<u32> {
    digit1.parse_to().parse_next(input)
}

fn clock_time(input: &mut &str) -> ModalResult<(u32, u32)> {
    separated_pair(clock_component, ':', clock_component).parse_next(input)
}

/// Splits one line into fields with spans relative to the whole source.
///
/// Returns `None` when the line could not be tokenized, which only happens
/// for input the field grammar does not cover.
fn split_fields(line: &str, offset: usize) -> Option<Vec<Field<'_>>> {
    let content = line.split(COMMENT).next().unwrap_or_default();
    let fields = fields.parse(LocatingSlice::new(content)).ok()?;

    Some(
        fields
            .into_iter()
            .map(|field| Field {
                span: field.span.offset(offset),
                ..field
            })
            .collect(),
    )
}

/// Reads all sessions from `source`, reporting every malformed row.
pub(crate) fn read_schedule(source: &str, config: &ParseConfig) -> Result<Vec<Session>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut sessions = Vec::new();
    let mut skipped = 0usize;
    let mut offset = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let line_offset = offset;
        offset += line.len();

        let Some(session) = read_row(line, line_offset, &mut collector) else {
            continue;
        };

        let in_semester = config.semester().is_none_or(|semester| {
            session
                .class()
                .is_some_and(|class| class.in_semester(semester))
        });
        if !in_semester {
            trace!(line = index + 1; "Skipping session outside semester");
            skipped += 1;
            continue;
        }

        sessions.push(session);
    }

    collector.finish()?;

    debug!(sessions = sessions.len(), skipped = skipped; "Schedule read");
    Ok(sessions)
}

/// Reads a single row, emitting diagnostics for every bad field.
fn read_row(line: &str, offset: usize, collector: &mut DiagnosticCollector) -> Option<Session> {
    let line_span = Span::new(offset..offset + line.trim_end().len());

    let Some(fields) = split_fields(line, offset) else {
        collector.emit(
            Diagnostic::error("row could not be split into fields")
                .with_code(ErrorCode::E100)
                .with_label(line_span, "in this row"),
        );
        return None;
    };

    let [code, day, start, finish] = match fields.as_slice() {
        [] => return None,
        [code, day, start, finish] => [*code, *day, *start, *finish],
        other => {
            let span = other
                .iter()
                .skip(1)
                .fold(other[0].span, |span, field| span.union(field.span));
            collector.emit(
                Diagnostic::error(format!(
                    "expected {FIELDS_PER_ROW} fields, found {}",
                    other.len()
                ))
                .with_code(ErrorCode::E100)
                .with_label(span, "in this row")
                .with_help("write each session as `CLASS_CODE WEEKDAY START FINISH`"),
            );
            return None;
        }
    };

    let class = read_class_code(code, collector);
    let weekday = read_weekday(day, collector);
    let start_time = read_time(start, collector);
    let finish_time = read_time(finish, collector);

    let (class, weekday, start_time, finish_time) = (class?, weekday?, start_time?, finish_time?);

    match Session::new(weekday, start_time, finish_time) {
        Ok(session) => Some(session.with_class(class)),
        Err(_) => {
            collector.emit(
                Diagnostic::error(format!(
                    "start `{start_time}` is not before finish `{finish_time}`"
                ))
                .with_code(ErrorCode::E202)
                .with_label(start.span, "starts here")
                .with_secondary_label(finish.span, "finishes here")
                .with_help("a session must finish after it starts"),
            );
            None
        }
    }
}

fn read_class_code(field: Field<'_>, collector: &mut DiagnosticCollector) -> Option<ClassCode> {
    match field.text.parse::<ClassCode>() {
        Ok(code) => Some(code),
        Err(err) => {
            collector.emit(
                Diagnostic::error(err.to_string())
                    .with_code(ErrorCode::E101)
                    .with_label(field.span, "not a class code")
                    .with_help(
                        "class codes have six parts: SUBJECT/CAMPUS/NUMBER/SEMESTER/TYPE/REPEAT",
                    ),
            );
            None
        }
    }
}

fn read_weekday(field: Field<'_>, collector: &mut DiagnosticCollector) -> Option<Weekday> {
    match field.text.parse::<Weekday>() {
        Ok(weekday) => Some(weekday),
        Err(err) => {
            collector.emit(
                Diagnostic::error(err.to_string())
                    .with_code(ErrorCode::E200)
                    .with_label(field.span, "not a weekday")
                    .with_help("use a full day name such as `Monday`"),
            );
            None
        }
    }
}

fn read_time(field: Field<'_>, collector: &mut DiagnosticCollector) -> Option<TimeOfDay> {
    let Ok((hour, minute)) = clock_time.parse(field.text) else {
        collector.emit(
            Diagnostic::error(format!("malformed time `{}`", field.text))
                .with_code(ErrorCode::E201)
                .with_label(field.span, "expected `H:MM`")
                .with_help("write times on a 24-hour clock, e.g. `9:00` or `14:30`"),
        );
        return None;
    };

    match TimeOfDay::new(i64::from(hour), i64::from(minute)) {
        Ok(time) => Some(time),
        Err(err) => {
            let label = match err {
                IntervalError::HourOutOfRange(_) => "hour out of range",
                IntervalError::MinuteOutOfRange(_) => "minute out of range",
                IntervalError::NotIncreasing { .. } => "invalid time",
            };
            collector.emit(
                Diagnostic::error(SessionError::from(err).to_string())
                    .with_code(ErrorCode::E201)
                    .with_label(field.span, label),
            );
            None
        }
    }
}
