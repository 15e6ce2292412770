//! # Renderers
//!
//! Both layouts turn a parsed [`Timeline`] into a fixed-width character grid,
//! returned as rows joined by `\n` (no trailing newline).
//!
//! - [`horizontal`]: one framed box per event, chained left to right with `-->`
//! - [`vertical`]: a single `|` axis with left events hanging off its left
//!   side and right events off its right side
//!
//! Widths are character counts. No display-width lookup is done.

pub mod horizontal;
mod text;
pub mod vertical;

use crate::core::Timeline;

pub use horizontal::{HorizontalRenderer, render_horizontal};
pub use vertical::{VerticalRenderer, render_timeline};

/// A timeline layout.
///
/// Renderers hold their own settings as struct fields so every layout shares
/// this one signature.
pub trait Render {
    /// Render the timeline. Never fails; degenerate input degrades to
    /// shorter connectors or empty output.
    fn render(&self, timeline: &Timeline) -> String;
}
