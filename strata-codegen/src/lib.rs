//! Dart code generation for strata.
//!
//! # Module Organization
//!
//! - [`builder`] - Dart source builders (CodeBuilder, DartFile, Import)
//! - [`paths`] - Deterministic file paths of the layered layout
//! - [`templates`] - One generated file per template, state strategies
//! - [`generators`] - Scaffolds and the runner that writes them
//! - [`tools`] - `flutter` and `dart` command construction and execution

pub mod builder;
mod component;
mod fields;
pub mod generators;
mod names;
pub mod paths;
pub mod templates;
pub mod tools;

pub use builder::{CodeBuilder, DartFile, Import};
pub use component::Component;
pub use fields::{Field, default_fields, parse_fields};
pub use generators::{
    Bootstrap, BootstrapMode, FeatureScaffold, Outcome, ProjectOutcome, ProjectReport,
    RepositoryScaffold, Runner, Scaffold, ScreenScaffold, StateScaffold, UseCaseScaffold,
    WidgetScaffold, feature_remedy, record_feature,
};
pub use names::{Names, field_name, is_reserved, safe_identifier};
pub use tools::{ProcessRunner, ToolCommand, ToolOutcome, ToolOutput, ToolRunner, ToolStatus};
