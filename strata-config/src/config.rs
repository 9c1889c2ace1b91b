//! The configuration model persisted as `strata.json`.

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Error, Platform, Result, Router, StateManagement, error::SourceContext, store::FILE_NAME,
};

pub const DEFAULT_ORG: &str = "com.example";

/// Generation settings for one Flutter project.
///
/// Values are never mutated in place; [`Config::with_feature`] and
/// [`Config::with_overrides`] return updated copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub project_name: String,
    pub org: String,
    pub state_management: StateManagement,
    pub router: Router,
    pub use_freezed: bool,
    pub use_dio_client: bool,
    pub platforms: BTreeSet<Platform>,
    /// Features in the order they were generated
    pub features: Vec<String>,
    /// Recorded for compatibility; no generator reads it yet
    pub generate_tests: bool,
    pub l10n: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            org: DEFAULT_ORG.to_string(),
            state_management: StateManagement::default(),
            router: Router::default(),
            use_freezed: true,
            use_dio_client: true,
            platforms: BTreeSet::from([Platform::Android, Platform::Ios]),
            features: Vec::new(),
            generate_tests: false,
            l10n: false,
        }
    }
}

/// Values given on the command line. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub project_name: Option<String>,
    pub org: Option<String>,
    pub state_management: Option<StateManagement>,
    pub router: Option<Router>,
    pub use_freezed: Option<bool>,
    pub use_dio_client: Option<bool>,
    pub platforms: Option<Vec<Platform>>,
    pub features: Option<Vec<String>>,
    pub generate_tests: Option<bool>,
    pub l10n: Option<bool>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Build a configuration from command-line values, defaulting the rest.
    pub fn from_args(overrides: &ConfigOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    /// Parse `strata.json` content. Missing keys take their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_json_with_filename(content, FILE_NAME)
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_json_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_json::from_str(content).map_err(|e| ctx.parse_error(e))
    }

    /// Serialize every field as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Box::new(Error::Serialize { source }))
    }

    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut next = self.clone();
        if let Some(name) = &overrides.project_name {
            next.project_name = name.clone();
        }
        if let Some(org) = &overrides.org {
            next.org = org.clone();
        }
        if let Some(sm) = overrides.state_management {
            next.state_management = sm;
        }
        if let Some(router) = overrides.router {
            next.router = router;
        }
        if let Some(freezed) = overrides.use_freezed {
            next.use_freezed = freezed;
        }
        if let Some(dio) = overrides.use_dio_client {
            next.use_dio_client = dio;
        }
        if let Some(platforms) = &overrides.platforms {
            next.platforms = platforms.iter().copied().collect();
        }
        if let Some(features) = &overrides.features {
            next.features = features.clone();
        }
        if let Some(tests) = overrides.generate_tests {
            next.generate_tests = tests;
        }
        if let Some(l10n) = overrides.l10n {
            next.l10n = l10n;
        }
        next
    }

    /// Record a generated feature. Duplicates are kept.
    pub fn with_feature(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.features.push(name.into());
        next
    }

    /// Check the configuration invariants, one message per violation.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.project_name.is_empty() {
            errors.push("project name must not be empty".to_string());
        } else if !is_valid_project_name(&self.project_name) {
            errors.push(format!(
                "project name '{}' must start with a lowercase letter or underscore and contain only lowercase letters, digits and underscores",
                self.project_name
            ));
        }
        if self.org.trim().is_empty() {
            errors.push("organization must not be empty".to_string());
        }
        if self.platforms.is_empty() {
            errors.push("at least one platform must be selected".to_string());
        }

        errors
    }

    /// Report enum values in `strata.json` content that parsing replaced
    /// with defaults, one message per unknown value.
    pub fn lint_json(content: &str) -> Vec<String> {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(content) else {
            return Vec::new();
        };
        let mut errors = Vec::new();

        if let Some(Value::String(value)) = map.get("stateManagement")
            && let Err(e) = value.parse::<StateManagement>()
        {
            errors.push(format!("{} (falls back to {})", e, StateManagement::default()));
        }
        if let Some(Value::String(value)) = map.get("router")
            && let Err(e) = value.parse::<Router>()
        {
            errors.push(format!("{} (falls back to {})", e, Router::default()));
        }
        if let Some(Value::Array(items)) = map.get("platforms") {
            for item in items {
                if let Value::String(value) = item
                    && let Err(e) = value.parse::<Platform>()
                {
                    errors.push(format!("{} (falls back to {})", e, Platform::default()));
                }
            }
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn uses_riverpod(&self) -> bool {
        self.state_management == StateManagement::Riverpod
    }

    pub fn uses_bloc(&self) -> bool {
        self.state_management == StateManagement::Bloc
    }

    pub fn uses_provider(&self) -> bool {
        self.state_management == StateManagement::Provider
    }

    pub fn uses_go_router(&self) -> bool {
        self.router == Router::GoRouter
    }

    pub fn uses_auto_route(&self) -> bool {
        self.router == Router::AutoRoute
    }

    /// Whether `build_runner` has anything to generate.
    pub fn needs_code_generation(&self) -> bool {
        self.uses_riverpod() || self.uses_auto_route() || self.use_freezed
    }

    /// Dart package name used in `package:` imports.
    pub fn package_name(&self) -> &str {
        &self.project_name
    }

    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    /// Platforms as the comma-separated list `flutter create` expects.
    pub fn platform_list(&self) -> String {
        self.platforms
            .iter()
            .map(Platform::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

/// `^[a-z_][a-z0-9_]*$`
pub fn is_valid_project_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
