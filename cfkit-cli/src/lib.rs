//! cfkit CLI library
//!
//! This library provides the command-line interface for solving and
//! cataloguing the bundled Codeforces problems.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
