//! Configuration model and persistence for strata.
//!
//! A [`Config`] describes how a Flutter project is scaffolded. It is stored
//! as `strata.json` at the project root by [`ConfigStore`] and read back by
//! later `generate` runs.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod pubspec;
mod store;
mod variants;

pub use config::{Config, ConfigOverrides, DEFAULT_ORG, is_valid_project_name};
pub use error::{Error, Result, SourceContext};
pub use pubspec::{PUBSPEC, find_flutter_root, parse_package_name, read_package_name};
pub use store::{ConfigStore, FILE_NAME};
pub use variants::{Platform, Router, StateManagement};
