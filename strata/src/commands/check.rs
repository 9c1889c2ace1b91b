use std::process::ExitCode;

use clap::Args;
use eyre::Result;
use strata_config::ConfigStore;

use super::{GlobalOptions, exit_code};
use crate::{ops, reports::Report};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, opts: &GlobalOptions) -> Result<ExitCode> {
        let store = ConfigStore::new();
        let root = store
            .find_project_root(&opts.cwd)
            .unwrap_or_else(|| opts.cwd.clone());

        match ops::check(&root, &store) {
            Ok(report) => {
                report.render(&mut opts.output());
                Ok(exit_code(report.is_valid()))
            }
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
