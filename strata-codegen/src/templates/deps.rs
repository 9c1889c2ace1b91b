//! Packages the generated project depends on.

use strata_config::Config;

use super::state::strategy_for;

/// Package lists handed to `flutter pub add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub runtime: Vec<&'static str>,
    pub dev: Vec<&'static str>,
    /// Packages that ship with the Flutter SDK (`sdk: flutter`)
    pub sdk: Vec<&'static str>,
}

impl Dependencies {
    pub fn for_config(config: &Config) -> Self {
        let strategy = strategy_for(config.state_management);
        let mut deps = Self::default();

        deps.runtime.extend(["dartz", "equatable", "connectivity_plus"]);
        deps.runtime
            .push(if config.use_dio_client { "dio" } else { "http" });
        deps.runtime.extend(strategy.dependencies());
        deps.dev.extend(strategy.dev_dependencies());

        if config.uses_auto_route() {
            deps.runtime.push("auto_route");
            deps.dev.push("auto_route_generator");
        } else {
            deps.runtime.push("go_router");
        }
        if config.use_freezed {
            deps.runtime.extend(["freezed_annotation", "json_annotation"]);
            deps.dev.extend(["freezed", "json_serializable"]);
        }
        if config.needs_code_generation() {
            deps.dev.push("build_runner");
        }
        if config.l10n {
            deps.runtime.push("intl");
            deps.sdk.push("flutter_localizations");
        }
        deps
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty() && self.sdk.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{ConfigOverrides, Router, StateManagement};

    use super::*;

    #[test]
    fn test_default_dependencies() {
        let deps = Dependencies::for_config(&Config::default());
        assert_eq!(
            deps.runtime,
            vec![
                "dartz",
                "equatable",
                "connectivity_plus",
                "dio",
                "flutter_riverpod",
                "riverpod_annotation",
                "go_router",
                "freezed_annotation",
                "json_annotation",
            ]
        );
        assert_eq!(
            deps.dev,
            vec!["riverpod_generator", "freezed", "json_serializable", "build_runner"]
        );
        assert!(deps.sdk.is_empty());
    }

    #[test]
    fn test_plain_bloc_needs_no_code_generation() {
        let config = Config::from_args(&ConfigOverrides {
            state_management: Some(StateManagement::Bloc),
            use_freezed: Some(false),
            use_dio_client: Some(false),
            l10n: Some(true),
            ..Default::default()
        });
        let deps = Dependencies::for_config(&config);
        assert!(deps.runtime.contains(&"flutter_bloc"));
        assert!(deps.runtime.contains(&"http"));
        assert!(deps.runtime.contains(&"intl"));
        assert!(deps.dev.is_empty());
        assert_eq!(deps.sdk, vec!["flutter_localizations"]);
    }

    #[test]
    fn test_auto_route_adds_generator() {
        let config = Config::from_args(&ConfigOverrides {
            router: Some(Router::AutoRoute),
            ..Default::default()
        });
        let deps = Dependencies::for_config(&config);
        assert!(deps.runtime.contains(&"auto_route"));
        assert!(!deps.runtime.contains(&"go_router"));
        assert!(deps.dev.contains(&"auto_route_generator"));
    }
}
