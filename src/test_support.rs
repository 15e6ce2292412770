//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::{Event, EventKind, Side, Timeline};

/// Builds an event without going through the parser.
pub fn event(side: Side, kind: EventKind, lines: &[&str], tag: Option<&str>) -> Event {
    assert!(!lines.is_empty(), "events always carry at least one line");
    Event {
        side,
        kind,
        lines: lines.iter().map(|line| line.to_string()).collect(),
        tag: tag.map(str::to_string),
    }
}

/// Wraps titles and events into a `Timeline`.
pub fn timeline(left_title: &str, right_title: &str, events: Vec<Event>) -> Timeline {
    Timeline {
        left_title: left_title.to_string(),
        right_title: right_title.to_string(),
        events,
    }
}
