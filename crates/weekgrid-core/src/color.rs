//! Color handling for timetable rendering
//!
//! This module provides the [`Color`] type, which wraps the `DynamicColor`
//! type from the color crate, and [`SubjectPalette`], the caller-owned
//! mapping that gives every subject a stable display color.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use indexmap::IndexMap;
use log::trace;

/// Colors handed out by [`SubjectPalette::default`], in assignment order.
pub const DEFAULT_PALETTE: [&str; 5] = ["salmon", "wheat", "lightgreen", "pink", "lightblue"];

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"` or `"wheat"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid_core::color::Color;
    ///
    /// let salmon = Color::new("salmon").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// Assigns display colors to subjects on first encounter.
///
/// The palette is an explicit value owned by whoever renders a timetable.
/// Subjects keep the color they were first given; once every color has been
/// handed out, colors are reused in the same order.
///
/// # Examples
///
/// ```
/// use weekgrid_core::color::{Color, SubjectPalette};
///
/// let mut palette = SubjectPalette::default();
/// let first = palette.color_for("COMP10001");
/// let second = palette.color_for("MAST10006");
///
/// assert_eq!(first, Color::new("salmon").unwrap());
/// assert_eq!(second, Color::new("wheat").unwrap());
/// assert_eq!(palette.color_for("COMP10001"), first);
/// ```
#[derive(Debug, Clone)]
pub struct SubjectPalette {
    colors: Vec<Color>,
    assigned: IndexMap<String, Color>,
}

impl SubjectPalette {
    /// Creates a palette that hands out `colors` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, String> {
        if colors.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(Self {
            colors,
            assigned: IndexMap::new(),
        })
    }

    /// Creates a palette from CSS color names.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is not a valid CSS color or the list is empty.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let colors = names
            .iter()
            .map(|name| Color::new(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the color for `subject`, assigning the next one if unseen.
    pub fn color_for(&mut self, subject: &str) -> Color {
        if let Some(color) = self.assigned.get(subject) {
            return *color;
        }

        let color = self.colors[self.assigned.len() % self.colors.len()];
        trace!(subject = subject, color:% = color; "Assigned subject color");
        self.assigned.insert(subject.to_string(), color);
        color
    }

    /// Iterates over assigned subjects in first-encounter order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.assigned
            .iter()
            .map(|(subject, color)| (subject.as_str(), *color))
    }

    /// Returns the number of subjects that have been assigned a color.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no subject has been assigned a color yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for SubjectPalette {
    fn default() -> Self {
        Self::from_names(&DEFAULT_PALETTE).expect("default palette holds valid CSS colors")
    }
}
