//! # Markup Parser
//!
//! Turns timeline markup into a [`Timeline`]. Line oriented, one forward
//! cursor, two states:
//!
//! ```text
//!              marker line (>> >? >! << <? <!)
//!   TopLevel ──────────────────────────────────▶ Continuation(event)
//!      ▲                                              │
//!      │  blank (consumed) / :tag: (consumed)         │ body line:
//!      │  comment or marker (NOT consumed)            │ push, stay
//!      └──────────────────────────────────────────────┘
//! ```
//!
//! Nothing here fails: lines that match no rule are dropped.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use super::event::{Event, EventKind, Side, Timeline};

/// Whole-line `:tag:`, surrounding whitespace allowed.
static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x1C-\x1F]*:[^:]+:[\s\x1C-\x1F]*$").expect("tag pattern is valid")
});

/// Unicode whitespace plus the ASCII file/group/record/unit separators,
/// which also count as blank when trimming.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// `:tag:` becomes `tag` when set; kept verbatim otherwise.
    pub strip_tag_delimiters: bool,
}

/// Parse markup into titles and events.
pub fn parse(text: &str, options: ParseOptions) -> Timeline {
    let mut scanner = Scanner::new(text, options);
    let mut state = State::TopLevel;

    loop {
        state = match state {
            State::TopLevel => match scanner.step_top_level() {
                Some(next) => next,
                None => break,
            },
            State::Continuation(event) => scanner.step_continuation(event),
        };
    }

    debug!(
        "Parsed {} events (left title {:?}, right title {:?})",
        scanner.timeline.events.len(),
        scanner.timeline.left_title,
        scanner.timeline.right_title
    );
    scanner.timeline
}

// ── Line classification ─────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    LeftTitle(&'a str),
    RightTitle(&'a str),
    Open(Side, EventKind, &'a str),
    Other,
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end_matches(is_space);
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with("--") {
        return Line::Comment;
    }
    if let Some(rest) = line.strip_prefix(">=") {
        return Line::LeftTitle(rest.trim_matches(is_space));
    }
    if let Some(rest) = line.strip_prefix("<=") {
        return Line::RightTitle(rest.trim_matches(is_space));
    }

    let mut chars = line.chars();
    let side = match chars.next() {
        Some('>') => Side::Left,
        Some('<') => Side::Right,
        _ => return Line::Other,
    };
    match chars.next().and_then(|c| EventKind::from_marker(side, c)) {
        // Both marker characters are ASCII, so byte 2 is a char boundary.
        Some(kind) => Line::Open(side, kind, line[2..].trim_matches(is_space)),
        None => Line::Other,
    }
}

// ── Scanner ─────────────────────────────────────────────────────────────────

enum State {
    TopLevel,
    Continuation(Event),
}

struct Scanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    options: ParseOptions,
    timeline: Timeline,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            lines: text.split('\n').collect(),
            cursor: 0,
            options,
            timeline: Timeline::default(),
        }
    }

    /// Handles the line at the cursor. `None` once input is exhausted.
    fn step_top_level(&mut self) -> Option<State> {
        let raw = *self.lines.get(self.cursor)?;
        let number = self.cursor + 1;
        self.cursor += 1;

        let next = match classify(raw) {
            Line::Blank | Line::Comment => State::TopLevel,
            Line::LeftTitle(title) => {
                debug!("Line {}: left title {:?}", number, title);
                self.timeline.left_title = title.to_string();
                State::TopLevel
            }
            Line::RightTitle(title) => {
                debug!("Line {}: right title {:?}", number, title);
                self.timeline.right_title = title.to_string();
                State::TopLevel
            }
            Line::Open(side, kind, first) => {
                debug!("Line {}: opening {:?} {:?} event", number, side, kind);
                State::Continuation(Event::new(side, kind, first))
            }
            Line::Other => {
                debug!("Line {}: skipping unrecognized line {:?}", number, raw);
                State::TopLevel
            }
        };
        Some(next)
    }

    fn step_continuation(&mut self, mut event: Event) -> State {
        let Some(&raw) = self.lines.get(self.cursor) else {
            return self.close(event);
        };

        match classify(raw) {
            Line::Blank => {
                self.cursor += 1;
                self.close(event)
            }
            // Left for the top level to re-examine.
            Line::Comment | Line::Open(..) => self.close(event),
            _ => {
                self.cursor += 1;
                let line = raw.trim_end_matches(is_space);
                if TAG_LINE.is_match(line) {
                    trace!("Line {}: tag {:?}", self.cursor, line);
                    event.tag = Some(self.tag_text(line));
                    self.close(event)
                } else {
                    trace!("Line {}: body {:?}", self.cursor, line);
                    event.lines.push(line.trim_matches(is_space).to_string());
                    State::Continuation(event)
                }
            }
        }
    }

    fn tag_text(&self, line: &str) -> String {
        let tag = line.trim_matches(is_space);
        if self.options.strip_tag_delimiters {
            // Pattern guarantees a leading and trailing ':'.
            tag[1..tag.len() - 1].to_string()
        } else {
            tag.to_string()
        }
    }

    fn close(&mut self, event: Event) -> State {
        self.timeline.events.push(event);
        State::TopLevel
    }
}
