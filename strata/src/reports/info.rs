//! Info command report.

use std::path::PathBuf;

use strata_codegen::templates::Dependencies;
use strata_config::Config;

use super::output::{Output, Report};

/// Resolved configuration of the current project.
#[derive(Debug)]
pub struct InfoReport {
    pub root: PathBuf,
    /// `None` when no `strata.json` was found and defaults are shown.
    pub config_path: Option<PathBuf>,
    pub config: Config,
    /// Validation messages.
    pub errors: Vec<String>,
    pub dependencies: Dependencies,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let config = &self.config;
        out.title(config.project_name.as_str());
        out.key_value("root", &self.root.display().to_string());
        match &self.config_path {
            Some(path) => out.key_value("config", &path.display().to_string()),
            None => out.key_value("config", "none (defaults)"),
        }
        out.newline();

        out.section("Configuration");
        out.key_value("org", &config.org);
        out.key_value("state management", config.state_management.as_str());
        out.key_value("router", config.router.as_str());
        out.key_value("freezed", yes_no(config.use_freezed));
        out.key_value("http client", if config.use_dio_client { "dio" } else { "http" });
        out.key_value("platforms", &config.platform_list());
        out.key_value("l10n", yes_no(config.l10n));
        out.key_value("tests", yes_no(config.generate_tests));
        out.key_value("code generation", yes_no(config.needs_code_generation()));
        out.newline();

        if !config.features.is_empty() {
            out.section("Features");
            for feature in &config.features {
                out.list_item(feature);
            }
            out.newline();
        }

        out.section("Dependencies");
        out.key_value("runtime", &self.dependencies.runtime.join(", "));
        out.key_value("dev", &self.dependencies.dev.join(", "));
        if !self.dependencies.sdk.is_empty() {
            out.key_value("sdk", &self.dependencies.sdk.join(", "));
        }

        if !self.errors.is_empty() {
            out.newline();
            for error in &self.errors {
                out.warning(error);
            }
        }
    }
}
