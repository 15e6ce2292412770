//! Vertical layout: two columns around one axis.
//!
//! ```text
//!            Me     |     You
//!            --     |     ---
//!                   |
//! Wake up --------->+ 7am
//!                   |
//!               9am +<------- Call
//!                   |
//! Meeting           |
//! with team -------!+
//!                   |
//! ```
//!
//! The axis column is fixed by the widest left-side line plus the minimum
//! connector, so right-side text never moves it. Only the last line of an
//! event carries the connector; earlier lines are plain text beside the axis.

use log::trace;

use super::Render;
use super::text::{pad_left, pad_right, run, width};
use crate::core::config::DEFAULT_TOTAL_WIDTH;
use crate::core::{Event, Side, Timeline};

/// Spaces between a title and the axis, on either side.
const TITLE_PADDING: usize = 5;
/// Seven dashes plus the symbol.
const MIN_CONNECTOR: usize = 8;
const RIGHT_DASHES: usize = 7;
/// Right text starts after symbol, dashes and one space.
const RIGHT_TEXT_INDENT: usize = 1 + RIGHT_DASHES + 1;

#[derive(Clone, Debug)]
pub struct VerticalRenderer {
    /// Kept for interface parity; the layout never reads it.
    pub total_width: usize,
    /// Prepended to every output row.
    pub line_prefix: String,
}

impl Default for VerticalRenderer {
    fn default() -> Self {
        Self {
            total_width: DEFAULT_TOTAL_WIDTH,
            line_prefix: String::new(),
        }
    }
}

impl Render for VerticalRenderer {
    fn render(&self, timeline: &Timeline) -> String {
        rows(
            &timeline.left_title,
            &timeline.right_title,
            &timeline.events,
            &self.line_prefix,
        )
        .join("\n")
    }
}

/// Render the vertical timeline.
///
/// `total_width` is accepted and ignored: the axis position comes from the
/// content alone.
pub fn render_timeline(
    left_title: &str,
    right_title: &str,
    events: &[Event],
    total_width: usize,
) -> String {
    let _ = total_width;
    rows(left_title, right_title, events, "").join("\n")
}

/// Column of the axis `|`: widest left-side line + a space + the minimum
/// connector. Zero when there are no left events.
pub fn axis_position(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|event| event.side == Side::Left)
        .map(|event| {
            let longest = event.lines.iter().map(|line| width(line)).max().unwrap_or(0);
            longest + 1 + MIN_CONNECTOR
        })
        .max()
        .unwrap_or(0)
}

fn rows(left_title: &str, right_title: &str, events: &[Event], prefix: &str) -> Vec<String> {
    let position = axis_position(events);
    trace!("Axis at column {}", position);

    let axis = format!("{}|", run(' ', position));
    let indent = run(' ', position.saturating_sub(width(left_title) + TITLE_PADDING));
    let gap = run(' ', TITLE_PADDING);

    let mut out = vec![
        format!("{indent}{left_title}{gap}|{gap}{right_title}"),
        format!(
            "{indent}{}{gap}|{gap}{}",
            run('-', width(left_title)),
            run('-', width(right_title))
        ),
        axis.clone(),
    ];

    for event in events {
        let connector_index = event.lines.len().saturating_sub(1);
        for (index, text) in event.lines.iter().enumerate() {
            let row = if index == connector_index {
                connector_row(event, text, position)
            } else {
                plain_row(event.side, text, position)
            };
            out.push(row);
        }
        out.push(axis.clone());
    }

    if !prefix.is_empty() {
        for row in &mut out {
            row.insert_str(0, prefix);
        }
    }
    out
}

fn connector_row(event: &Event, text: &str, position: usize) -> String {
    let symbol = event.symbol();
    let tag = event.tag_str();
    // Empty only when the event has no tag.
    let gap = if tag.is_empty() { "" } else { " " };
    match event.side {
        Side::Left => {
            // text, space, dashes up to the symbol, then the axis
            let dashes = run('-', position.saturating_sub(width(text) + 2));
            format!("{text} {dashes}{symbol}+{gap}{tag}")
        }
        Side::Right => {
            format!(
                "{}+{symbol}{} {text}",
                pad_left(&format!("{tag}{gap}"), position),
                run('-', RIGHT_DASHES)
            )
        }
    }
}

fn plain_row(side: Side, text: &str, position: usize) -> String {
    match side {
        Side::Left => format!("{}|", pad_right(text, position)),
        Side::Right => format!(
            "{}|{}{text}",
            run(' ', position),
            run(' ', RIGHT_TEXT_INDENT)
        ),
    }
}
