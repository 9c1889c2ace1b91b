//! Configuration resolution for `init` and `setup`.

use std::path::Path;

use strata_config::{Config, ConfigOverrides, ConfigStore, read_package_name};

/// Configuration for a new project: flags over defaults.
pub fn init_config(name: &str, overrides: &ConfigOverrides) -> Config {
    Config::default().with_overrides(&ConfigOverrides {
        project_name: Some(name.to_string()),
        ..overrides.clone()
    })
}

/// Configuration for an existing project.
///
/// Flags win over a stored `strata.json`, which wins over defaults. The
/// project name falls back to the pubspec `name:`.
pub fn setup_config(root: &Path, store: &ConfigStore, overrides: &ConfigOverrides) -> Config {
    let mut base = store.load(root).unwrap_or_default();
    if base.project_name.is_empty()
        && let Some(name) = read_package_name(root)
    {
        base.project_name = name;
    }
    base.with_overrides(overrides)
}
