//! Info operation - describes the project strata would generate into.

use std::path::Path;

use strata_codegen::templates::Dependencies;
use strata_config::ConfigStore;

use super::generate::locate;
use crate::reports::InfoReport;

/// Collect the resolved configuration for the project around `cwd`.
pub fn info(cwd: &Path, store: &ConfigStore) -> InfoReport {
    let workspace = locate(cwd, store);
    let errors = workspace.config.validate();
    let dependencies = Dependencies::for_config(&workspace.config);

    InfoReport {
        config_path: workspace
            .stored
            .then(|| store.path(&workspace.root)),
        root: workspace.root,
        config: workspace.config,
        errors,
        dependencies,
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{Config, StateManagement};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_info_with_stored_config() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let config = Config {
            project_name: "shop".to_string(),
            state_management: StateManagement::Bloc,
            ..Config::default()
        };
        store.save(temp.path(), &config).unwrap();

        let report = info(temp.path(), &store);
        assert_eq!(report.config_path, Some(temp.path().join("strata.json")));
        assert!(report.errors.is_empty());
        assert!(report.dependencies.runtime.contains(&"flutter_bloc"));
    }

    #[test]
    fn test_info_without_config() {
        let temp = TempDir::new().unwrap();

        let report = info(temp.path(), &ConfigStore::new());
        assert_eq!(report.config_path, None);
        assert_eq!(report.config.state_management, StateManagement::Riverpod);
    }
}
