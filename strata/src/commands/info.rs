use std::process::ExitCode;

use clap::Args;
use eyre::Result;
use strata_config::ConfigStore;

use super::GlobalOptions;
use crate::{ops, reports::Report};

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self, opts: &GlobalOptions) -> Result<ExitCode> {
        let report = ops::info(&opts.cwd, &ConfigStore::new());
        report.render(&mut opts.output());
        Ok(ExitCode::SUCCESS)
    }
}
