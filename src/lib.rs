//! # Nestea - nested update composition
//!
//! Helpers for composing Elm-like update functions, where a model and a
//! message produce a new model plus a batch of commands (and optionally an
//! out-message for the parent component).
//!
//! ## Architecture Overview
//!
//! - **Command** (`cmd`): An ordered, associative batch of effect values
//! - **Return** (`ret`): Model + commands, and lifting a child update into a parent
//! - **Out-message** (`out`): Model + commands + a message for the parent
//! - **Ordering** (`ordering`): Adapters for `(model, out, cmd)` shaped updates
//!
//! Nothing here runs effects or dispatches messages. Commands are plain values
//! that the host runtime executes.
//!
//! ## Example Usage
//!
//! ```rust
//! use nestea::{lift, Cmd, Return};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Page {
//!     title: String,
//!     count: i32,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum PageEffect {
//!     Counter(&'static str),
//! }
//!
//! fn counter(msg: i32, count: i32) -> (i32, Cmd<&'static str>) {
//!     (count + msg, Cmd::single("changed"))
//! }
//!
//! let page = Page { title: "home".to_string(), count: 1 };
//! let ret: Return<Page, PageEffect> = lift(
//!     |p: &Page| p.count,
//!     |count, p| Page { count, ..p },
//!     PageEffect::Counter,
//!     counter,
//!     2,
//!     page,
//! );
//!
//! assert_eq!(ret.model.count, 3);
//! assert_eq!(ret.cmd.into_effects(), vec![PageEffect::Counter("changed")]);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Command batches and update combinators
//! - [`demo`] - A small nested application built with the combinators
//! - [`replay`] - Replays message scripts through the demo application
//! - [`infrastructure`] - Command line and configuration of the replay tool
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod demo;
pub mod infrastructure;
pub mod replay;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::ordering::{convert_ordering, Alternate};
pub use crate::core::out::{lift_out, OutReturn};
pub use crate::core::ret::{lift, Return};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
