//! Generate command report.

use std::path::PathBuf;

use strata_codegen::Outcome;
use strata_core::WriteResult;

use super::{
    output::{Output, Report},
    plural, render_emitted,
};

#[derive(Debug)]
pub struct GenerateReport {
    /// Generator name (`feature`, `screen`, ...)
    pub kind: &'static str,
    pub name: String,
    pub dry_run: bool,
    pub outcome: Outcome,
    /// Configuration file updated with a new feature
    pub recorded: Option<PathBuf>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            Outcome::Generated(files) => {
                out.section(&format!("{} '{}'", self.kind, self.name));
                for file in files {
                    render_emitted(out, file);
                }
                if let Some(path) = &self.recorded {
                    out.added_item(&format!("{} (feature recorded)", path.display()));
                }
                out.newline();

                let written = files
                    .iter()
                    .filter(|f| f.result != WriteResult::Skipped)
                    .count();
                if self.dry_run {
                    out.success(&format!(
                        "dry run: {} would be written",
                        plural(written, "file")
                    ));
                } else {
                    out.success(&format!(
                        "generated {} {}",
                        self.kind,
                        plural(written, "file")
                    ));
                }
            }
            Outcome::Invalid(errors) => {
                for error in errors {
                    out.error(error);
                }
            }
            Outcome::MissingFeature { feature, remedy } => {
                out.error(&format!("feature '{}' does not exist", feature));
                out.hint(&format!("run `{}` first", remedy));
            }
        }
    }
}
