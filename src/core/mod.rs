//! # Core Timeline Logic
//!
//! Markup in, structured timeline out. It knows nothing about boxes, axes,
//! stdin or stdout.
//!
//! ```text
//!     markup text
//!          │
//!          ▼
//!   ┌──────────────┐      ┌──────────────────────────┐
//!   │   parser     │ ───▶ │ Timeline                 │
//!   │ (this crate) │      │  titles + ordered Events │
//!   └──────────────┘      └────────────┬─────────────┘
//!                                      │
//!                    ┌─────────────────┴─────────────────┐
//!                    ▼                                   ▼
//!             ┌────────────┐                      ┌────────────┐
//!             │ Horizontal │                      │  Vertical  │
//!             │ box chain  │                      │    axis    │
//!             └────────────┘                      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`event`]: `Timeline`, `Event`, `Side`, `EventKind`
//! - [`parser`]: the line scanner, `parse()`
//! - [`config`]: settings file and CLI override resolution

pub mod config;
pub mod event;
pub mod parser;

pub use event::{Event, EventKind, Side, Timeline};
pub use parser::{ParseOptions, parse};
