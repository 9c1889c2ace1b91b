use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use strata_config::{Config, ConfigStore};
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{
    component::Component,
    fields::Field,
    paths::feature_skeleton,
    templates::{
        CardDart, EntityDart, ModelDart, RemoteDataSourceDart, RepositoryDart, RepositoryImplDart,
        ScreenDart, strategy_for,
    },
};

/// Every file of a new feature, in write order.
pub fn feature_files(c: &Component) -> Vec<Box<dyn GeneratedFile>> {
    let mut files: Vec<Box<dyn GeneratedFile>> = vec![
        Box::new(EntityDart(c.clone())),
        Box::new(RepositoryDart(c.clone())),
        Box::new(ModelDart(c.clone())),
        Box::new(RepositoryImplDart(c.clone())),
        Box::new(RemoteDataSourceDart(c.clone())),
        Box::new(ScreenDart::for_feature(c.clone())),
    ];
    files.extend(strategy_for(c.config.state_management).files(c));
    files.push(Box::new(CardDart(c.clone())));
    files
}

/// `strata generate feature <name>`: a complete vertical slice.
pub struct FeatureScaffold {
    pub component: Component,
}

impl FeatureScaffold {
    pub fn new(config: &Config, feature: &str) -> Self {
        Self {
            component: Component::feature(config, feature),
        }
    }

    /// Entity fields; the defaults are kept when `fields` is empty.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.component = self.component.with_fields(fields);
        self
    }
}

impl Scaffold for FeatureScaffold {
    fn name(&self) -> &'static str {
        "feature"
    }

    fn required_feature(&self) -> Option<&str> {
        None
    }

    fn directories(&self) -> Vec<PathBuf> {
        feature_skeleton(
            &self.component.feature.raw,
            self.component.config.state_management,
        )
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        feature_files(&self.component)
    }
}

/// Append `feature` to the stored configuration.
///
/// Only a readable `strata.json` is updated, and only its feature list
/// changes: command-line overrides of the current run are never persisted
/// and a corrupt file is left for the user to fix. Returns the configuration
/// path when it was written.
pub fn record_feature(store: &ConfigStore, root: &Path, feature: &str) -> Result<Option<PathBuf>> {
    let Some(stored) = store.load(root) else {
        return Ok(None);
    };
    if stored.has_feature(feature) {
        return Ok(None);
    }
    let path = store
        .save(root, &stored.with_feature(feature))
        .wrap_err_with(|| format!("failed to record feature '{}'", feature))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use strata_config::{ConfigOverrides, StateManagement};
    use tempfile::TempDir;

    use super::*;

    fn file_names(config: &Config) -> Vec<String> {
        FeatureScaffold::new(config, "product")
            .files()
            .iter()
            .map(|f| f.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_bloc_feature_files() {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            state_management: Some(StateManagement::Bloc),
            ..Default::default()
        });
        assert_eq!(
            file_names(&config),
            vec![
                "product_entity.dart",
                "product_repository.dart",
                "product_model.dart",
                "product_repository_impl.dart",
                "product_remote_datasource.dart",
                "product_screen.dart",
                "product_bloc.dart",
                "product_event.dart",
                "product_state.dart",
                "product_card.dart",
            ]
        );
    }

    #[test]
    fn test_provider_feature_has_single_state_file() {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            state_management: Some(StateManagement::Provider),
            ..Default::default()
        });
        let names = file_names(&config);
        assert_eq!(names.len(), 8);
        assert_eq!(names[6], "product_notifier.dart");
    }

    #[test]
    fn test_record_feature_only_with_config_file() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            ..Default::default()
        });

        assert_eq!(record_feature(&store, temp.path(), "cart").unwrap(), None);
        assert!(!store.exists(temp.path()));

        store.save(temp.path(), &config).unwrap();
        let path = record_feature(&store, temp.path(), "cart").unwrap();
        assert_eq!(path, Some(store.path(temp.path())));
        assert_eq!(store.read(temp.path()).unwrap().features, vec!["cart"]);

        assert_eq!(record_feature(&store, temp.path(), "cart").unwrap(), None);
        assert_eq!(store.read(temp.path()).unwrap().features, vec!["cart"]);
    }

    #[test]
    fn test_record_feature_keeps_stored_settings() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            state_management: Some(StateManagement::Provider),
            ..Default::default()
        });
        store.save(temp.path(), &config).unwrap();

        record_feature(&store, temp.path(), "cart").unwrap();

        let stored = store.read(temp.path()).unwrap();
        assert_eq!(stored.state_management, StateManagement::Provider);
        assert_eq!(stored, config.with_feature("cart"));
    }

    #[test]
    fn test_record_feature_leaves_corrupt_file_alone() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let corrupt = r#"{"projectName":"shop","stateManagement":"bloc",}"#;
        std::fs::write(store.path(temp.path()), corrupt).unwrap();

        assert_eq!(record_feature(&store, temp.path(), "cart").unwrap(), None);
        assert_eq!(std::fs::read_to_string(store.path(temp.path())).unwrap(), corrupt);
    }
}
