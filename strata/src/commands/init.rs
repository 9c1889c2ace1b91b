use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use eyre::Result;
use strata_codegen::{Bootstrap, BootstrapMode, ProcessRunner};
use strata_config::ConfigOverrides;

use super::{ConfigArgs, GlobalOptions, exit_code};
use crate::{
    ops, prompts,
    reports::{ProjectSummary, Report},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project name (a valid Dart package name)
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not run flutter, pub or build_runner
    #[arg(long)]
    pub skip_tools: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl InitCommand {
    pub fn run(&self, opts: &GlobalOptions) -> Result<ExitCode> {
        let overrides = ConfigOverrides {
            project_name: Some(self.name.clone()),
            ..self.config.overrides()
        };
        let mut config = ops::init_config(&self.name, &overrides);
        if opts.interactive() {
            config = prompts::complete(config, &overrides)?;
        }

        let root = opts
            .cwd
            .join(self.output.clone().unwrap_or_else(|| PathBuf::from(&self.name)));
        let runner = ProcessRunner;
        let outcome = Bootstrap::new(config, &root, &runner)
            .mode(BootstrapMode::Create)
            .dry_run(opts.dry_run)
            .force(opts.force)
            .skip_tools(self.skip_tools)
            .run()?;

        let summary = ProjectSummary {
            name: self.name.clone(),
            created: true,
            outcome,
        };
        summary.render(&mut opts.output());
        Ok(exit_code(summary.is_success()))
    }
}
