use std::process::ExitCode;

use clap::Args;
use eyre::Result;
use strata_codegen::{Bootstrap, BootstrapMode, ProcessRunner};
use strata_config::{ConfigStore, PUBSPEC, find_flutter_root};

use super::{ConfigArgs, GlobalOptions, exit_code};
use crate::{
    ops, prompts,
    reports::{Output, ProjectSummary, Report},
};

#[derive(Args)]
pub struct SetupCommand {
    /// Do not run pub or build_runner
    #[arg(long)]
    pub skip_tools: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl SetupCommand {
    pub fn run(&self, opts: &GlobalOptions) -> Result<ExitCode> {
        let mut out = opts.output();
        let Some(root) = find_flutter_root(&opts.cwd) else {
            out.error(&format!(
                "no {} found in {} or any parent directory",
                PUBSPEC,
                opts.cwd.display()
            ));
            out.hint("run `strata init <name>` to create a new project");
            return Ok(ExitCode::FAILURE);
        };

        let store = ConfigStore::new();
        let overrides = self.config.overrides();
        let mut config = ops::setup_config(&root, &store, &overrides);
        if opts.interactive() {
            config = prompts::complete(config, &overrides)?;
        }

        let name = config.project_name.clone();
        let runner = ProcessRunner;
        let outcome = Bootstrap::new(config, &root, &runner)
            .mode(BootstrapMode::Existing)
            .store(store)
            .dry_run(opts.dry_run)
            .force(opts.force)
            .skip_tools(self.skip_tools)
            .run()?;

        let summary = ProjectSummary {
            name,
            created: false,
            outcome,
        };
        summary.render(&mut out);
        Ok(exit_code(summary.is_success()))
    }
}
