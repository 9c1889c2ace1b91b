//! Check command report.

use std::path::PathBuf;

use strata_config::Config;

use super::{
    output::{Output, Report},
    plural,
};

#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub config: Config,
    /// Validation messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.is_valid() {
            for error in &self.errors {
                out.error(error);
            }
            return;
        }

        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();
        out.key_value(
            "project",
            &format!(
                "{} ({}, {})",
                self.config.project_name, self.config.state_management, self.config.router
            ),
        );
        out.key_value("features", &plural(self.config.features.len(), "feature"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("strata.json"),
            config: Config {
                project_name: "shop".to_string(),
                ..Config::default()
            },
            errors: Vec::new(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "ok strata.json is valid");
        assert!(out.text().contains("project: shop (riverpod, go_router)"));
        assert!(out.text().contains("features: 0 features"));
    }
}
