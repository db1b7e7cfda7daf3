//! CLI command definitions and handlers
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Argument definitions and the command registry
//! - [`handlers`] - Dispatcher and command handlers

mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;
