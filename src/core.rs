//! Core update composition
//!
//! This module contains the building blocks for nesting update functions:
//! - Command batches
//! - Pair results and lifting
//! - Triple results with out-messages
//! - Alternate slot ordering

pub mod cmd;
pub mod ordering;
pub mod out;
pub mod ret;
