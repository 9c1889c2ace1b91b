use std::process::ExitCode;

use clap::{Args, Subcommand};
use eyre::Result;
use strata_codegen::{
    FeatureScaffold, Field, RepositoryScaffold, Scaffold, ScreenScaffold, StateScaffold,
    UseCaseScaffold, WidgetScaffold, parse_fields,
};
use strata_config::{Config, ConfigStore};

use super::{GlobalOptions, VariantArgs, exit_code};
use crate::{
    ops,
    reports::{Output, Report},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(subcommand)]
    kind: GenerateKind,
}

/// Arguments every generator takes.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Component name
    pub name: String,

    /// Feature the component belongs to (defaults to the component name)
    #[arg(long)]
    pub feature: Option<String>,

    #[command(flatten)]
    pub variants: VariantArgs,
}

impl Target {
    fn feature(&self) -> &str {
        self.feature.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Subcommand)]
enum GenerateKind {
    /// A complete feature: domain, data and presentation layers
    #[command(alias = "f")]
    Feature {
        #[command(flatten)]
        target: Target,

        /// Entity fields, e.g. "title:String,price:double"
        #[arg(long)]
        fields: Option<String>,
    },

    /// A screen inside an existing feature
    #[command(alias = "s")]
    Screen {
        #[command(flatten)]
        target: Target,
    },

    /// A widget inside an existing feature
    #[command(alias = "w")]
    Widget {
        #[command(flatten)]
        target: Target,

        /// Generate a StatefulWidget
        #[arg(long)]
        stateful: bool,
    },

    /// State-management files for an existing feature
    #[command(alias = "p")]
    Provider {
        #[command(flatten)]
        target: Target,

        /// Entity the state holds (defaults to the name)
        #[arg(long)]
        entity: Option<String>,
    },

    /// Use cases for an existing feature
    #[command(alias = "u")]
    Usecase {
        #[command(flatten)]
        target: Target,

        /// Repository action: get, getAll, create, update or delete
        #[arg(long, default_value = "get", conflicts_with = "crud")]
        action: String,

        /// Generate the five CRUD use cases
        #[arg(long)]
        crud: bool,

        /// Entity the use case works on (defaults to the name)
        #[arg(long)]
        entity: Option<String>,
    },

    /// A repository and its data sources for an existing feature
    #[command(alias = "r")]
    Repository {
        #[command(flatten)]
        target: Target,

        /// Also generate a local data source stub
        #[arg(long)]
        local: bool,

        /// Entity fields, e.g. "title:String,price:double"
        #[arg(long)]
        fields: Option<String>,
    },
}

impl GenerateKind {
    fn target(&self) -> &Target {
        match self {
            GenerateKind::Feature { target, .. }
            | GenerateKind::Screen { target }
            | GenerateKind::Widget { target, .. }
            | GenerateKind::Provider { target, .. }
            | GenerateKind::Usecase { target, .. }
            | GenerateKind::Repository { target, .. } => target,
        }
    }

    fn scaffold(&self, config: &Config, fields: Option<Vec<Field>>) -> Box<dyn Scaffold> {
        let target = self.target();
        let (feature, name) = (target.feature(), target.name.as_str());
        match self {
            GenerateKind::Feature { .. } => {
                let scaffold = FeatureScaffold::new(config, name);
                Box::new(match fields {
                    Some(fields) => scaffold.with_fields(fields),
                    None => scaffold,
                })
            }
            GenerateKind::Screen { .. } => Box::new(ScreenScaffold::new(config, feature, name)),
            GenerateKind::Widget { stateful, .. } => {
                Box::new(WidgetScaffold::new(config, feature, name).stateful(*stateful))
            }
            GenerateKind::Provider { entity, .. } => Box::new(StateScaffold::new(
                config,
                feature,
                name,
                entity.as_deref(),
            )),
            GenerateKind::Usecase {
                action,
                crud,
                entity,
                ..
            } => {
                let scaffold = if *crud {
                    UseCaseScaffold::crud(config, feature, name)
                } else {
                    UseCaseScaffold::single(config, feature, name, action)
                };
                Box::new(scaffold.with_entity(entity.as_deref()))
            }
            GenerateKind::Repository { local, .. } => {
                let scaffold = RepositoryScaffold::new(config, feature, name).local(*local);
                Box::new(match fields {
                    Some(fields) => scaffold.with_fields(fields),
                    None => scaffold,
                })
            }
        }
    }

    fn fields(&self) -> Option<&str> {
        match self {
            GenerateKind::Feature { fields, .. } | GenerateKind::Repository { fields, .. } => {
                fields.as_deref()
            }
            _ => None,
        }
    }
}

impl GenerateCommand {
    pub fn run(&self, opts: &GlobalOptions) -> Result<ExitCode> {
        let mut out = opts.output();
        let fields = match self.kind.fields().map(parse_fields).transpose() {
            Ok(fields) => fields,
            Err(message) => {
                out.error(&format!("invalid --fields: {}", message));
                return Ok(ExitCode::FAILURE);
            }
        };

        let target = self.kind.target();
        let store = ConfigStore::new();
        let workspace = ops::locate(&opts.cwd, &store).with_overrides(&target.variants.overrides());
        let scaffold = self.kind.scaffold(&workspace.config, fields);

        let report = ops::generate(
            &workspace,
            &store,
            scaffold.as_ref(),
            &target.name,
            opts.dry_run,
            opts.force,
        )?;
        report.render(&mut out);
        Ok(exit_code(report.is_success()))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        kind: GenerateKind,
    }

    fn parse(args: &[&str]) -> GenerateKind {
        let mut argv = vec!["generate"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().kind
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(parse(&["f", "cart"]), GenerateKind::Feature { .. }));
        assert!(matches!(parse(&["s", "checkout"]), GenerateKind::Screen { .. }));
        assert!(matches!(parse(&["w", "badge"]), GenerateKind::Widget { .. }));
        assert!(matches!(parse(&["p", "cart"]), GenerateKind::Provider { .. }));
        assert!(matches!(parse(&["u", "cart"]), GenerateKind::Usecase { .. }));
        assert!(matches!(parse(&["r", "cart"]), GenerateKind::Repository { .. }));
    }

    #[test]
    fn test_feature_defaults_to_name() {
        let kind = parse(&["screen", "checkout"]);
        assert_eq!(kind.target().feature(), "checkout");

        let kind = parse(&["screen", "checkout", "--feature", "cart"]);
        assert_eq!(kind.target().feature(), "cart");
    }

    #[test]
    fn test_usecase_action_defaults_to_get() {
        match parse(&["usecase", "product"]) {
            GenerateKind::Usecase { action, crud, .. } => {
                assert_eq!(action, "get");
                assert!(!crud);
            }
            _ => panic!("expected usecase"),
        }
    }

    #[test]
    fn test_crud_conflicts_with_action() {
        let result = Harness::try_parse_from([
            "generate", "usecase", "product", "--crud", "--action", "create",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_variant_overrides() {
        let kind = parse(&["provider", "cart", "--state", "bloc", "--freezed", "false"]);
        let overrides = kind.target().variants.overrides();
        assert_eq!(
            overrides.state_management,
            Some(strata_config::StateManagement::Bloc)
        );
        assert_eq!(overrides.use_freezed, Some(false));
    }

    #[test]
    fn test_scaffold_names() {
        let config = Config {
            project_name: "shop".to_string(),
            ..Config::default()
        };
        let cases = [
            (vec!["feature", "cart"], "feature"),
            (vec!["widget", "badge", "--stateful"], "widget"),
            (vec!["usecase", "product", "--crud"], "usecase"),
            (vec!["repository", "cart", "--local"], "repository"),
        ];
        for (args, name) in cases {
            let kind = parse(&args);
            assert_eq!(kind.scaffold(&config, None).name(), name);
        }
    }
}
