//! # Timeline Model
//!
//! What the parser produces and the renderers consume.
//!
//! ```text
//! Timeline
//! ├── left_title: String      // set by `>=`
//! ├── right_title: String     // set by `<=`
//! └── events: Vec<Event>      // input order, never sorted
//!     ├── side: Side          // Left (`>x`) or Right (`<x`)
//!     ├── kind: EventKind     // Plain / Question / Alert
//!     ├── lines: Vec<String>  // at least one entry
//!     └── tag: Option<String> // `:tag:` line, if any
//! ```
//!
//! A `Timeline` is built once per run and never mutated after parsing.

use serde::Serialize;

/// Which column an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Selects whichever of a left/right pair belongs to this side.
    pub fn pick<'a>(self, left: &'a str, right: &'a str) -> &'a str {
        match self {
            Side::Left => left,
            Side::Right => right,
        }
    }
}

/// The event's marker symbol, independent of side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// `>>` on the left, `<<` on the right.
    Plain,
    /// `>?` / `<?`
    Question,
    /// `>!` / `<!`
    Alert,
}

impl EventKind {
    /// Maps the second character of an event marker to a kind.
    pub fn from_marker(side: Side, c: char) -> Option<Self> {
        match (side, c) {
            (Side::Left, '>') | (Side::Right, '<') => Some(EventKind::Plain),
            (_, '?') => Some(EventKind::Question),
            (_, '!') => Some(EventKind::Alert),
            _ => None,
        }
    }

    /// The character drawn in connectors and box headers.
    pub fn symbol(self, side: Side) -> char {
        match (self, side) {
            (EventKind::Plain, Side::Left) => '>',
            (EventKind::Plain, Side::Right) => '<',
            (EventKind::Question, _) => '?',
            (EventKind::Alert, _) => '!',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub side: Side,
    pub kind: EventKind,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Event {
    /// Opens an event with its first body line.
    pub fn new(side: Side, kind: EventKind, first_line: impl Into<String>) -> Self {
        Self {
            side,
            kind,
            lines: vec![first_line.into()],
            tag: None,
        }
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.side)
    }

    /// Tag text, or `""` when the event has none.
    pub fn tag_str(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub left_title: String,
    pub right_title: String,
    pub events: Vec<Event>,
}
