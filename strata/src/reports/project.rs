//! Report for `init` and `setup`.

use strata_codegen::{ProjectOutcome, ToolOutcome, ToolStatus};

use super::{
    output::{Output, Report},
    plural, render_emitted,
};

/// Outcome of bootstrapping one project.
#[derive(Debug)]
pub struct ProjectSummary {
    pub name: String,
    /// `init` reports next steps that include `cd`
    pub created: bool,
    pub outcome: ProjectOutcome,
}

impl ProjectSummary {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProjectOutcome::Completed(_))
    }
}

fn render_tool(out: &mut dyn Output, tool: &ToolOutcome) {
    match &tool.status {
        ToolStatus::Succeeded => out.added_item(&tool.command),
        ToolStatus::Planned => out.planned_item(&tool.command),
        ToolStatus::Failed { code } => {
            let code = code.map_or_else(|| "a signal".to_string(), |c| format!("code {}", c));
            out.warning(&format!("'{}' exited with {}", tool.command, code));
            out.detail(&tool.stdout);
            out.detail(&tool.stderr);
        }
        ToolStatus::Unavailable(reason) => {
            out.warning(&format!("could not run '{}': {}", tool.command, reason));
        }
    }
}

impl Report for ProjectSummary {
    fn render(&self, out: &mut dyn Output) {
        let report = match &self.outcome {
            ProjectOutcome::Completed(report) => report,
            ProjectOutcome::Invalid(errors) => {
                for error in errors {
                    out.error(error);
                }
                return;
            }
            ProjectOutcome::DirectoryNotEmpty(path) => {
                out.error(&format!("'{}' already exists and is not empty", path.display()));
                out.hint("pass --force to generate into it anyway");
                return;
            }
        };

        out.title(&self.name);
        out.key_value("root", &report.root.display().to_string());
        out.key_value("directories", &report.directories.len().to_string());
        out.newline();

        out.section("Files");
        for file in &report.files {
            render_emitted(out, file);
        }
        render_emitted(out, &report.config_file);
        out.newline();

        if !report.tools.is_empty() {
            out.section("Tools");
            for tool in &report.tools {
                render_tool(out, tool);
            }
            out.newline();
        }

        let files = plural(report.files.len() + 1, "file");
        if report.dry_run {
            out.success(&format!("dry run: {} would be written", files));
            return;
        }
        out.success(&format!("{} is ready ({})", self.name, files));

        let failures = report.tool_failures();
        if failures > 0 {
            out.warning(&format!(
                "{} did not finish; rerun them by hand",
                plural(failures, "tool command")
            ));
        }
        if self.created {
            out.hint(&format!("cd {}", report.root.display()));
        }
        out.hint("strata generate feature <name>");
    }
}
