//! CLI command implementations
//!
//! This module contains all CLI command handlers, organized by category:
//! - `simple`: generate, convert, migrate
//! - `validate`: DSL validation
//! - `config`: configuration and schema commands
//! - `util`: shared argument and output helpers

pub mod config;
pub mod simple;
pub mod util;
pub mod validate;

pub use config::{cmd_config, cmd_schema};
pub use simple::{cmd_convert, cmd_generate, cmd_migrate};
pub use validate::cmd_validate;
