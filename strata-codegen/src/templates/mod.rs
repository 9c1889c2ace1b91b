//! Dart templates, one [`GeneratedFile`](strata_core::GeneratedFile) per
//! output file.
//!
//! Templates are pure: rendering depends only on the component names and
//! the configuration, never on the file system.

mod data;
mod deps;
mod domain;
mod presentation;
mod project;
mod router;
pub mod state;

pub use data::{LocalDataSourceDart, ModelDart, RemoteDataSourceDart, RepositoryImplDart};
pub use deps::Dependencies;
pub use domain::{ActionShape, CRUD_ACTIONS, EntityDart, RepositoryDart, UseCaseDart};
pub use presentation::{CardDart, ScreenDart, WidgetDart};
pub use project::{
    AnalysisOptionsYaml, ApiClientDart, ApiConstantsDart, AppArb, AppDart, AppThemeDart,
    ExceptionsDart, FailuresDart, L10nYaml, LoggerDart, MainDart, NetworkInfoDart,
    UseCaseBaseDart, WidgetTestDart, app_title, core_dirs, core_files,
};
pub use router::{AppRouterDart, HomeScreenDart, RouteEntry, RoutesDart, router_files, routes};
pub use state::{StateStrategy, strategy_for};
