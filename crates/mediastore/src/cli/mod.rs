//! Command-line interface module.
//!
//! This module provides the CLI structure for the mediastore binary. The
//! command bodies live in [`mediastore::report`].

mod commands;

pub use commands::{Cli, Commands};
