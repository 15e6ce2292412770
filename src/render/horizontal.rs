//! Horizontal layout: a chain of framed boxes.
//!
//! ```text
//! +------+   +----------+
//! | > Me |   | < Server |
//! | Ask  |-->| Reply    |
//! +------+   | :late:   |
//!            +----------+
//! ```
//!
//! Each box holds `symbol title`, the event's lines, then its tag. Shorter
//! boxes are centered vertically against the tallest one, and the arrow sits
//! on row `max_height / 2`.

use log::trace;

use super::Render;
use super::text::{pad_right, run, width};
use crate::core::{Event, Timeline};

const ARROW: &str = "-->";
const ARROW_GAP: &str = "   ";

#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalRenderer;

impl Render for HorizontalRenderer {
    fn render(&self, timeline: &Timeline) -> String {
        render_horizontal(&timeline.left_title, &timeline.right_title, &timeline.events)
    }
}

/// Render events as boxes joined by arrows. Empty string for no events.
pub fn render_horizontal(left_title: &str, right_title: &str, events: &[Event]) -> String {
    if events.is_empty() {
        return String::new();
    }

    let boxes: Vec<Vec<String>> = events
        .iter()
        .map(|event| event_box(event, event.side.pick(left_title, right_title)))
        .collect();

    let max_height = boxes.iter().map(Vec::len).max().unwrap_or(0);
    let middle = max_height / 2;
    let mut rows = vec![String::new(); max_height];

    for (index, lines) in boxes.iter().enumerate() {
        let box_width = lines.first().map_or(0, |border| width(border));
        let top_padding = (max_height - lines.len()) / 2;
        let blank = run(' ', box_width);
        let is_last = index + 1 == boxes.len();

        for (row_index, row) in rows.iter_mut().enumerate() {
            let line = row_index
                .checked_sub(top_padding)
                .and_then(|i| lines.get(i))
                .unwrap_or(&blank);
            row.push_str(line);

            if !is_last {
                row.push_str(if row_index == middle { ARROW } else { ARROW_GAP });
            }
        }
    }

    rows.join("\n")
}

/// One framed box: header, body lines, optional tag.
fn event_box(event: &Event, title: &str) -> Vec<String> {
    let mut content = Vec::with_capacity(event.lines.len() + 2);
    content.push(format!("{} {}", event.symbol(), title));
    content.extend(event.lines.iter().cloned());
    if let Some(tag) = &event.tag {
        content.push(tag.clone());
    }

    // The header line is always present, so this is never the empty max.
    let max_length = content.iter().map(|line| width(line)).max().unwrap_or(0);
    let border = format!("+{}+", run('-', max_length + 2));
    trace!(
        "Box for {:?}: {} wide, {} tall",
        event.lines.first(),
        max_length + 2,
        content.len() + 2
    );

    let mut lines = Vec::with_capacity(content.len() + 2);
    lines.push(border.clone());
    lines.extend(
        content
            .iter()
            .map(|line| format!("| {} |", pad_right(line, max_length))),
    );
    lines.push(border);
    lines
}
