//! External build tools: `flutter create`, `flutter pub`, `build_runner`
//! and `gen-l10n`.
//!
//! Tool failures never abort a command. [`run_tool`] turns every outcome,
//! including a missing binary, into a [`ToolOutcome`] for the report.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, warn};
use strata_config::Config;

/// One external command line and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status and captured streams of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs tool commands to completion.
pub trait ToolRunner {
    fn run(&self, command: &ToolCommand) -> std::io::Result<ToolOutput>;
}

/// Runs tools as child processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// `flutter` and `dart` are batch scripts on Windows.
    fn program(name: &str) -> String {
        if cfg!(windows) && matches!(name, "flutter" | "dart") {
            format!("{}.bat", name)
        } else {
            name.to_string()
        }
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, command: &ToolCommand) -> std::io::Result<ToolOutput> {
        let output = Command::new(Self::program(&command.program))
            .args(&command.args)
            .current_dir(&command.cwd)
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    Succeeded,
    Failed { code: Option<i32> },
    /// The tool could not be started
    Unavailable(String),
    /// Dry run: the command was not executed
    Planned,
}

/// What happened to one tool command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub command: String,
    pub status: ToolStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutcome {
    pub fn planned(command: &ToolCommand) -> Self {
        Self {
            command: command.to_string(),
            status: ToolStatus::Planned,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self.status,
            ToolStatus::Failed { .. } | ToolStatus::Unavailable(_)
        )
    }
}

/// Run one command and record the outcome. Never fails.
pub fn run_tool(runner: &dyn ToolRunner, command: &ToolCommand) -> ToolOutcome {
    debug!("running '{}' in {}", command, command.cwd.display());

    match runner.run(command) {
        Ok(output) => {
            let status = if output.success {
                ToolStatus::Succeeded
            } else {
                warn!("'{}' exited with {:?}", command, output.code);
                ToolStatus::Failed { code: output.code }
            };
            ToolOutcome {
                command: command.to_string(),
                status,
                stdout: output.stdout,
                stderr: output.stderr,
            }
        }
        Err(err) => {
            warn!("could not run '{}': {}", command, err);
            ToolOutcome {
                command: command.to_string(),
                status: ToolStatus::Unavailable(err.to_string()),
                stdout: String::new(),
                stderr: String::new(),
            }
        }
    }
}

/// `flutter create --org <org> --project-name <name> --platforms <list> <name>`,
/// run from the parent of `dir` so the target is just its last component.
pub fn flutter_create(config: &Config, dir: &Path) -> ToolCommand {
    let (cwd, target) = match (dir.parent(), dir.file_name()) {
        (Some(parent), Some(name)) => {
            let cwd = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            (cwd, name.to_string_lossy().into_owned())
        }
        _ => (Path::new("."), dir.display().to_string()),
    };
    ToolCommand::new("flutter", cwd).args([
        "create".to_string(),
        "--org".to_string(),
        config.org.clone(),
        "--project-name".to_string(),
        config.project_name.clone(),
        "--platforms".to_string(),
        config.platform_list(),
        target,
    ])
}

/// `flutter pub add <packages>`
pub fn pub_add(root: &Path, packages: &[&str]) -> ToolCommand {
    ToolCommand::new("flutter", root)
        .args(["pub", "add"])
        .args(packages.iter().copied())
}

/// `flutter pub add --dev <packages>`
pub fn pub_add_dev(root: &Path, packages: &[&str]) -> ToolCommand {
    ToolCommand::new("flutter", root)
        .args(["pub", "add", "--dev"])
        .args(packages.iter().copied())
}

/// `flutter pub add '<package>:{"sdk":"flutter"}'` for SDK packages.
pub fn pub_add_sdk(root: &Path, packages: &[&str]) -> ToolCommand {
    ToolCommand::new("flutter", root)
        .args(["pub", "add"])
        .args(
            packages
                .iter()
                .map(|p| format!("{}:{{\"sdk\":\"flutter\"}}", p)),
        )
}

/// `flutter pub get`
pub fn pub_get(root: &Path) -> ToolCommand {
    ToolCommand::new("flutter", root).args(["pub", "get"])
}

/// `dart run build_runner build --delete-conflicting-outputs`
pub fn build_runner(root: &Path) -> ToolCommand {
    ToolCommand::new("dart", root).args([
        "run",
        "build_runner",
        "build",
        "--delete-conflicting-outputs",
    ])
}

/// `flutter gen-l10n`
pub fn gen_l10n(root: &Path) -> ToolCommand {
    ToolCommand::new("flutter", root).arg("gen-l10n")
}

#[cfg(test)]
mod tests {
    use std::io;

    use strata_config::{ConfigOverrides, Platform};

    use super::*;

    struct Failing;

    impl ToolRunner for Failing {
        fn run(&self, _: &ToolCommand) -> io::Result<ToolOutput> {
            Err(io::Error::new(io::ErrorKind::NotFound, "flutter not found"))
        }
    }

    #[test]
    fn test_flutter_create_command() {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            org: Some("dev.acme".into()),
            platforms: Some(vec![Platform::Web, Platform::Android]),
            ..Default::default()
        });
        let command = flutter_create(&config, Path::new("/work/shop_app"));
        assert_eq!(
            command.to_string(),
            "flutter create --org dev.acme --project-name shop_app --platforms android,web shop_app"
        );
        assert_eq!(command.cwd, PathBuf::from("/work"));
    }

    #[test]
    fn test_flutter_create_relative_dir() {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            ..Default::default()
        });

        let nested = flutter_create(&config, Path::new("work/shop_app"));
        assert_eq!(nested.cwd, PathBuf::from("work"));
        assert_eq!(nested.args.last().map(String::as_str), Some("shop_app"));

        let bare = flutter_create(&config, Path::new("shop_app"));
        assert_eq!(bare.cwd, PathBuf::from("."));
        assert_eq!(bare.args.last().map(String::as_str), Some("shop_app"));
    }

    #[test]
    fn test_pub_commands() {
        let root = Path::new("app");
        assert_eq!(pub_add(root, &["dio", "dartz"]).to_string(), "flutter pub add dio dartz");
        assert_eq!(
            pub_add_dev(root, &["build_runner"]).to_string(),
            "flutter pub add --dev build_runner"
        );
        assert_eq!(
            pub_add_sdk(root, &["flutter_localizations"]).args,
            vec!["pub", "add", "flutter_localizations:{\"sdk\":\"flutter\"}"]
        );
        assert_eq!(
            build_runner(root).to_string(),
            "dart run build_runner build --delete-conflicting-outputs"
        );
    }

    #[test]
    fn test_missing_binary_is_reported_not_raised() {
        let outcome = run_tool(&Failing, &pub_get(Path::new(".")));
        assert_eq!(outcome.command, "flutter pub get");
        assert!(outcome.is_failure());
        assert!(matches!(outcome.status, ToolStatus::Unavailable(ref msg) if msg.contains("not found")));
    }
}
