use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use log::{debug, info};
use strata_config::{Config, ConfigStore};
use strata_core::{Emitted, Emitter, WriteResult};

use super::feature::feature_files;
use crate::{
    component::Component,
    names::Names,
    paths::feature_skeleton,
    templates::{Dependencies, core_dirs, core_files},
    tools::{
        ToolCommand, ToolOutcome, ToolRunner, build_runner, flutter_create, gen_l10n, pub_add,
        pub_add_dev, pub_add_sdk, pub_get, run_tool,
    },
};

/// Where the project comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// `init`: run `flutter create` into a new directory first
    Create,
    /// `setup`: the Flutter project already exists
    Existing,
}

/// Everything a finished `init` or `setup` did, or would do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub directories: Vec<PathBuf>,
    pub files: Vec<Emitted>,
    pub config_file: Emitted,
    pub tools: Vec<ToolOutcome>,
}

impl ProjectReport {
    pub fn tool_failures(&self) -> usize {
        self.tools.iter().filter(|t| t.is_failure()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    Completed(ProjectReport),
    /// The configuration failed validation; nothing was touched
    Invalid(Vec<String>),
    /// `init` target exists and is not empty; nothing was touched
    DirectoryNotEmpty(PathBuf),
}

/// Bootstraps the layered architecture into a Flutter project.
pub struct Bootstrap<'a> {
    config: Config,
    root: PathBuf,
    mode: BootstrapMode,
    store: ConfigStore,
    tools: &'a dyn ToolRunner,
    dry_run: bool,
    force: bool,
    skip_tools: bool,
}

impl<'a> Bootstrap<'a> {
    pub fn new(config: Config, root: impl Into<PathBuf>, tools: &'a dyn ToolRunner) -> Self {
        Self {
            config,
            root: root.into(),
            mode: BootstrapMode::Create,
            store: ConfigStore::new(),
            tools,
            dry_run: false,
            force: false,
            skip_tools: false,
        }
    }

    pub fn mode(mut self, mode: BootstrapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn store(mut self, store: ConfigStore) -> Self {
        self.store = store;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reuse a non-empty directory and replace create-once files.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn skip_tools(mut self, skip_tools: bool) -> Self {
        self.skip_tools = skip_tools;
        self
    }

    /// Package and code-generation commands run after the files are written.
    pub fn package_commands(&self) -> Vec<ToolCommand> {
        let deps = Dependencies::for_config(&self.config);
        let root = self.root.as_path();
        let mut commands = Vec::new();

        if !deps.runtime.is_empty() {
            commands.push(pub_add(root, &deps.runtime));
        }
        if !deps.dev.is_empty() {
            commands.push(pub_add_dev(root, &deps.dev));
        }
        if !deps.sdk.is_empty() {
            commands.push(pub_add_sdk(root, &deps.sdk));
        }
        commands.push(pub_get(root));
        if self.config.l10n {
            commands.push(gen_l10n(root));
        }
        if self.config.needs_code_generation() {
            commands.push(build_runner(root));
        }
        commands
    }

    pub fn run(&self) -> Result<ProjectOutcome> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Ok(ProjectOutcome::Invalid(errors));
        }
        if self.mode == BootstrapMode::Create && !self.force && is_non_empty_dir(&self.root) {
            return Ok(ProjectOutcome::DirectoryNotEmpty(self.root.clone()));
        }

        let mut tools = Vec::new();
        if self.mode == BootstrapMode::Create {
            tools.extend(self.tool(&flutter_create(&self.config, &self.root)));
        }

        let mut emitter = Emitter::new(&self.root)
            .dry_run(self.dry_run)
            .force(self.force);
        let mut directories = core_dirs(&self.config);
        emitter
            .create_dirs(&directories)
            .wrap_err("failed to create the core directories")?;
        emitter
            .emit_all(&core_files(&self.config))
            .wrap_err("failed to write the core files")?;

        for feature in unique_features(&self.config) {
            info!("generating feature '{}'", feature);
            let skeleton = feature_skeleton(&feature, self.config.state_management);
            emitter
                .create_dirs(&skeleton)
                .wrap_err_with(|| format!("failed to create feature '{}'", feature))?;
            emitter
                .emit_all(&feature_files(&Component::feature(&self.config, &feature)))
                .wrap_err_with(|| format!("failed to generate feature '{}'", feature))?;
            directories.extend(skeleton);
        }

        let config_file = self.persist()?;

        for command in self.package_commands() {
            tools.extend(self.tool(&command));
        }

        Ok(ProjectOutcome::Completed(ProjectReport {
            root: self.root.clone(),
            dry_run: self.dry_run,
            directories,
            files: emitter.finish(),
            config_file,
            tools,
        }))
    }

    fn persist(&self) -> Result<Emitted> {
        let path = PathBuf::from(self.store.file_name());
        if self.dry_run {
            return Ok(Emitted {
                path,
                result: WriteResult::Planned,
            });
        }
        self.store
            .save(&self.root, &self.config)
            .wrap_err("failed to save the project configuration")?;
        Ok(Emitted {
            path,
            result: WriteResult::Written,
        })
    }

    fn tool(&self, command: &ToolCommand) -> Option<ToolOutcome> {
        if self.skip_tools {
            debug!("skipping '{}'", command);
            return None;
        }
        if self.dry_run {
            return Some(ToolOutcome::planned(command));
        }
        Some(run_tool(self.tools, command))
    }
}

fn is_non_empty_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// Recorded features without repeats, in first-seen order.
fn unique_features(config: &Config) -> Vec<String> {
    let mut seen = BTreeSet::new();
    config
        .features
        .iter()
        .filter(|f| seen.insert(Names::new(f).snake))
        .cloned()
        .collect()
}
