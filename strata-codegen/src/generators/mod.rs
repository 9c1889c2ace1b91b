//! Generator orchestration.
//!
//! Every generator is a [`Scaffold`]: a description of the feature it needs,
//! the directories it creates and the files it writes. A [`Runner`] drives
//! any scaffold through the same sequence: validate the configuration,
//! check the feature precondition, then create directories and emit files
//! in order (or only record them in dry-run mode).

mod feature;
mod project;
mod repository;
mod screen;
mod state;
mod usecase;
mod widget;

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use log::debug;
use strata_config::Config;
use strata_core::{Emitted, Emitter, GeneratedFile};

pub use self::{
    feature::{FeatureScaffold, feature_files, record_feature},
    project::{Bootstrap, BootstrapMode, ProjectOutcome, ProjectReport},
    repository::RepositoryScaffold,
    screen::ScreenScaffold,
    state::StateScaffold,
    usecase::UseCaseScaffold,
    widget::WidgetScaffold,
};
use crate::paths::feature_dir;

/// One generation command.
pub trait Scaffold {
    /// Generator name used in reports (`feature`, `screen`, ...)
    fn name(&self) -> &'static str;

    /// Feature that must already exist before anything is written.
    fn required_feature(&self) -> Option<&str>;

    /// Directories created before any file is written.
    fn directories(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    /// Files in write order: domain, data, then presentation.
    fn files(&self) -> Vec<Box<dyn GeneratedFile>>;
}

/// Result of running one scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Files written (or planned, in dry-run mode), in order
    Generated(Vec<Emitted>),
    /// The configuration failed validation; nothing was touched
    Invalid(Vec<String>),
    /// The target feature does not exist; nothing was touched
    MissingFeature { feature: String, remedy: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }
}

/// Command that creates a missing feature.
pub fn feature_remedy(feature: &str) -> String {
    format!("strata generate feature {}", feature)
}

/// Runs scaffolds below an explicit project root.
#[derive(Debug)]
pub struct Runner<'a> {
    config: &'a Config,
    root: PathBuf,
    dry_run: bool,
    force: bool,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            dry_run: false,
            force: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Whether `feature` has been scaffolded below the root.
    pub fn feature_exists(&self, feature: &str) -> bool {
        self.root.join(feature_dir(feature)).is_dir()
    }

    pub fn run(&self, scaffold: &dyn Scaffold) -> Result<Outcome> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Ok(Outcome::Invalid(errors));
        }

        if let Some(feature) = scaffold.required_feature()
            && !self.feature_exists(feature)
        {
            debug!("{}: feature '{}' does not exist", scaffold.name(), feature);
            return Ok(Outcome::MissingFeature {
                feature: feature.to_string(),
                remedy: feature_remedy(feature),
            });
        }

        let mut emitter = Emitter::new(&self.root)
            .dry_run(self.dry_run)
            .force(self.force);
        emitter
            .create_dirs(&scaffold.directories())
            .wrap_err_with(|| format!("failed to prepare {} directories", scaffold.name()))?;
        emitter
            .emit_all(&scaffold.files())
            .wrap_err_with(|| format!("failed to generate {}", scaffold.name()))?;

        Ok(Outcome::Generated(emitter.finish()))
    }
}
