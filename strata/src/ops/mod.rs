//! Core operations.
//!
//! This module contains the business logic for strata commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod info;
pub mod project;

pub use check::check;
pub use generate::{generate, locate};
pub use info::info;
pub use project::{init_config, setup_config};
