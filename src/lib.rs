//! Plain-text timeline markup to ASCII diagrams.
//!
//! ```text
//! >=Me
//! <=You
//! >>Ask
//! <<Answer
//! :later:
//! ```
//!
//! [`parse`] builds a [`Timeline`]; [`render_horizontal`] draws it as a box
//! chain and [`render_timeline`] as a vertical axis.

use clap::ValueEnum;

pub mod cli;
pub mod core;
pub mod error;
pub mod render;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{Event, EventKind, ParseOptions, Side, Timeline, parse};
pub use crate::error::TimelineError;
pub use crate::render::{
    HorizontalRenderer, Render, VerticalRenderer, render_horizontal, render_timeline,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Boxes chained left to right
    Horizontal,
    /// Two columns around a central axis
    #[default]
    Vertical,
}
