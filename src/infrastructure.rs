//! Infrastructure of the replay tool
//!
//! - Command line parsing
//! - Layered configuration

pub mod cli;
pub mod config;
