mod check;
mod completions;
mod generate;
mod info;
mod init;
mod setup;

use std::{io::IsTerminal, path::PathBuf, process::ExitCode, str::FromStr};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr};
use generate::GenerateCommand;
use info::InfoCommand;
use init::InitCommand;
use log::LevelFilter;
use setup::SetupCommand;
use strata_config::{ConfigOverrides, Platform, Router, StateManagement};

use crate::reports::TerminalOutput;

#[derive(Parser)]
#[command(name = "strata")]
#[command(version)]
#[command(about = "Scaffold Flutter projects and features in a layered Clean architecture")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Route `log` output to stderr; `--verbose` shows debug records.
    pub fn init_logger(&self) {
        let level = if self.global.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();
    }

    pub fn run(&self) -> Result<ExitCode> {
        let opts = self.global.resolve()?;
        match &self.command {
            Commands::Init(cmd) => cmd.run(&opts),
            Commands::Setup(cmd) => cmd.run(&opts),
            Commands::Generate(cmd) => cmd.run(&opts),
            Commands::Info(cmd) => cmd.run(&opts),
            Commands::Check(cmd) => cmd.run(&opts),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Flutter project with the layered architecture
    Init(InitCommand),

    /// Add the layered architecture to an existing Flutter project
    Setup(SetupCommand),

    /// Generate a feature or one of its parts
    #[command(alias = "g")]
    Generate(GenerateCommand),

    /// Show the resolved configuration and its dependencies
    Info(InfoCommand),

    /// Validate strata.json without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags shared by every command.
#[derive(Args, Debug)]
struct GlobalArgs {
    /// Show what would be written without touching the file system
    #[arg(long, global = true)]
    dry_run: bool,

    /// Print debug logs and tool output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Overwrite files that are normally created only once
    #[arg(long, global = true)]
    force: bool,

    /// Never ask questions; use flags and defaults
    #[arg(short = 'y', long, global = true)]
    skip_prompts: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    cwd: Option<PathBuf>,
}

impl GlobalArgs {
    fn resolve(&self) -> Result<GlobalOptions> {
        let cwd = match &self.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().wrap_err("Failed to get current directory")?,
        };
        Ok(GlobalOptions {
            dry_run: self.dry_run,
            verbose: self.verbose,
            force: self.force,
            skip_prompts: self.skip_prompts,
            color: !self.no_color && std::io::stdout().is_terminal(),
            cwd,
        })
    }
}

/// Options resolved once and passed to every command.
#[derive(Debug, Clone)]
pub(crate) struct GlobalOptions {
    pub dry_run: bool,
    pub verbose: bool,
    pub force: bool,
    pub skip_prompts: bool,
    pub color: bool,
    /// Directory every relative path is resolved against
    pub cwd: PathBuf,
}

impl GlobalOptions {
    /// Whether missing values may be asked for.
    pub fn interactive(&self) -> bool {
        !self.skip_prompts && std::io::stdin().is_terminal()
    }

    pub fn output(&self) -> TerminalOutput {
        TerminalOutput::new(self.color, self.verbose)
    }
}

/// Exit code for a finished command.
pub(crate) fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Parse a configuration choice with its strict `FromStr`.
///
/// The variants also convert from `String` (leniently, for `strata.json`),
/// which clap would otherwise prefer.
fn strict<T: FromStr<Err = String>>(value: &str) -> Result<T, String> {
    value.parse()
}

/// Overrides for the stored configuration, accepted by every generator.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct VariantArgs {
    /// State management: riverpod, bloc or provider
    #[arg(long, value_name = "STATE", value_parser = strict::<StateManagement>)]
    pub state: Option<StateManagement>,

    /// Router: go_router or auto_route
    #[arg(long, value_parser = strict::<Router>)]
    pub router: Option<Router>,

    /// Use freezed data classes
    #[arg(long, value_name = "BOOL")]
    pub freezed: Option<bool>,

    /// Use dio instead of package:http
    #[arg(long, value_name = "BOOL")]
    pub dio: Option<bool>,
}

impl VariantArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            state_management: self.state,
            router: self.router,
            use_freezed: self.freezed,
            use_dio_client: self.dio,
            ..ConfigOverrides::default()
        }
    }
}

/// Project configuration flags for `init` and `setup`.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ConfigArgs {
    /// Organization in reverse-domain notation
    #[arg(long)]
    pub org: Option<String>,

    /// Target platforms (comma separated)
    #[arg(long, value_delimiter = ',', value_parser = strict::<Platform>)]
    pub platforms: Option<Vec<Platform>>,

    /// Features to generate right away (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Enable localization (`--l10n=false` turns it off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub l10n: Option<bool>,

    /// Record that tests should be generated (`--tests=false` turns it off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tests: Option<bool>,

    #[command(flatten)]
    pub variants: VariantArgs,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            org: self.org.clone(),
            platforms: self.platforms.clone(),
            features: self.features.as_ref().map(|features| {
                features
                    .iter()
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect()
            }),
            l10n: self.l10n,
            generate_tests: self.tests,
            ..self.variants.overrides()
        }
    }
}
