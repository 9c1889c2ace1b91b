//! Generate operation - runs one scaffold inside a project.

use std::path::{Path, PathBuf};

use eyre::Result;
use strata_codegen::{Outcome, Runner, Scaffold, record_feature};
use strata_config::{Config, ConfigOverrides, ConfigStore, find_flutter_root, read_package_name};
use strata_core::to_snake_case;

use crate::reports::GenerateReport;

/// The project a `generate` command works in.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    /// Whether the configuration came from `strata.json`
    pub stored: bool,
}

impl Workspace {
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        self.config = self.config.with_overrides(overrides);
        self
    }
}

/// Find the project root and its configuration.
///
/// The root is the nearest directory holding `strata.json`, else the nearest
/// Flutter project, else `cwd` itself. Without a stored configuration the
/// project name comes from the pubspec or the directory name.
pub fn locate(cwd: &Path, store: &ConfigStore) -> Workspace {
    let root = store
        .find_project_root(cwd)
        .or_else(|| find_flutter_root(cwd))
        .unwrap_or_else(|| cwd.to_path_buf());

    let loaded = store.load(&root);
    let stored = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if config.project_name.is_empty() {
        config.project_name = read_package_name(&root)
            .or_else(|| {
                root.file_name()
                    .and_then(|n| n.to_str())
                    .map(to_snake_case)
            })
            .unwrap_or_default();
    }

    Workspace {
        root,
        config,
        stored,
    }
}

/// Run `scaffold` and, for new features, record them in `strata.json`.
pub fn generate(
    workspace: &Workspace,
    store: &ConfigStore,
    scaffold: &dyn Scaffold,
    name: &str,
    dry_run: bool,
    force: bool,
) -> Result<GenerateReport> {
    let runner = Runner::new(&workspace.config, &workspace.root)
        .dry_run(dry_run)
        .force(force);
    let outcome = runner.run(scaffold)?;

    let recorded = match &outcome {
        Outcome::Generated(_) if scaffold.name() == "feature" && !dry_run => {
            record_feature(store, &workspace.root, name)?
        }
        _ => None,
    };

    Ok(GenerateReport {
        kind: scaffold.name(),
        name: name.to_string(),
        dry_run,
        outcome,
        recorded,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use strata_codegen::{FeatureScaffold, ScreenScaffold};
    use strata_config::StateManagement;
    use tempfile::TempDir;

    use super::*;

    fn project(temp: &TempDir) -> ConfigStore {
        let store = ConfigStore::new();
        let config = Config {
            project_name: "shop".to_string(),
            ..Config::default()
        };
        store.save(temp.path(), &config).unwrap();
        store
    }

    #[test]
    fn test_locate_walks_up_to_the_config() {
        let temp = TempDir::new().unwrap();
        let store = project(&temp);
        let nested = temp.path().join("lib/features");
        fs::create_dir_all(&nested).unwrap();

        let workspace = locate(&nested, &store);
        assert_eq!(workspace.root, temp.path());
        assert_eq!(workspace.config.project_name, "shop");
        assert!(workspace.stored);
    }

    #[test]
    fn test_locate_without_config_uses_pubspec() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pubspec.yaml"), "name: my_app\n").unwrap();

        let workspace = locate(temp.path(), &ConfigStore::new());
        assert_eq!(workspace.config.project_name, "my_app");
        assert!(!workspace.stored);
    }

    #[test]
    fn test_locate_falls_back_to_directory_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("MyApp");
        fs::create_dir(&dir).unwrap();

        let workspace = locate(&dir, &ConfigStore::new());
        assert_eq!(workspace.root, dir);
        assert_eq!(workspace.config.project_name, "my_app");
    }

    #[test]
    fn test_generate_feature_records_it() {
        let temp = TempDir::new().unwrap();
        let store = project(&temp);
        let workspace = locate(temp.path(), &store);

        let scaffold = FeatureScaffold::new(&workspace.config, "cart");
        let report = generate(&workspace, &store, &scaffold, "cart", false, false).unwrap();

        assert!(report.is_success());
        assert!(report.recorded.is_some());
        assert_eq!(store.read(temp.path()).unwrap().features, vec!["cart"]);
    }

    #[test]
    fn test_generate_feature_does_not_persist_overrides() {
        let temp = TempDir::new().unwrap();
        let store = project(&temp);
        let overrides = ConfigOverrides {
            state_management: Some(StateManagement::Bloc),
            use_freezed: Some(false),
            ..ConfigOverrides::default()
        };
        let workspace = locate(temp.path(), &store).with_overrides(&overrides);

        let scaffold = FeatureScaffold::new(&workspace.config, "cart");
        generate(&workspace, &store, &scaffold, "cart", false, false).unwrap();

        let stored = store.read(temp.path()).unwrap();
        assert_eq!(stored.state_management, StateManagement::Riverpod);
        assert!(stored.use_freezed);
        assert_eq!(stored.features, vec!["cart"]);
        assert!(temp.path().join("lib/features/cart/presentation/bloc").is_dir());
    }

    #[test]
    fn test_generate_feature_keeps_corrupt_config() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let corrupt = r#"{"projectName":"shop","stateManagement":"bloc",}"#;
        fs::write(store.path(temp.path()), corrupt).unwrap();

        let workspace = locate(temp.path(), &store);
        assert!(!workspace.stored);
        let scaffold = FeatureScaffold::new(&workspace.config, "cart");
        let report = generate(&workspace, &store, &scaffold, "cart", false, false).unwrap();

        assert!(report.is_success());
        assert!(report.recorded.is_none());
        assert_eq!(fs::read_to_string(store.path(temp.path())).unwrap(), corrupt);
    }

    #[test]
    fn test_generate_dry_run_records_nothing() {
        let temp = TempDir::new().unwrap();
        let store = project(&temp);
        let workspace = locate(temp.path(), &store);

        let scaffold = FeatureScaffold::new(&workspace.config, "cart");
        let report = generate(&workspace, &store, &scaffold, "cart", true, false).unwrap();

        assert!(report.is_success());
        assert!(report.recorded.is_none());
        assert!(store.read(temp.path()).unwrap().features.is_empty());
        assert!(!temp.path().join("lib").exists());
    }

    #[test]
    fn test_generate_screen_without_feature_fails() {
        let temp = TempDir::new().unwrap();
        let store = project(&temp);
        let workspace = locate(temp.path(), &store);

        let scaffold = ScreenScaffold::new(&workspace.config, "cart", "checkout");
        let report = generate(&workspace, &store, &scaffold, "checkout", false, false).unwrap();

        assert!(!report.is_success());
        assert!(matches!(report.outcome, Outcome::MissingFeature { .. }));
    }
}
