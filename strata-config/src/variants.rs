//! Enumerated configuration choices.
//!
//! Parsing through [`FromStr`] is strict and meant for command-line flags.
//! Reading from `strata.json` goes through `From<String>`, which never fails:
//! unrecognised values fall back to the default variant.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// State-management strategy for generated presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum StateManagement {
    /// Riverpod notifiers generated with `riverpod_annotation`
    #[default]
    Riverpod,
    /// `flutter_bloc` event/state pairs
    Bloc,
    /// `provider` package `ChangeNotifier`s
    Provider,
}

impl StateManagement {
    pub const ALL: [StateManagement; 3] = [Self::Riverpod, Self::Bloc, Self::Provider];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateManagement::Riverpod => "riverpod",
            StateManagement::Bloc => "bloc",
            StateManagement::Provider => "provider",
        }
    }

    /// Short description used in interactive prompts.
    pub fn description(&self) -> &'static str {
        match self {
            StateManagement::Riverpod => "Riverpod (code generation, recommended)",
            StateManagement::Bloc => "Bloc (events and states)",
            StateManagement::Provider => "Provider (ChangeNotifier)",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "riverpod" => Ok(StateManagement::Riverpod),
            "bloc" => Ok(StateManagement::Bloc),
            "provider" => Ok(StateManagement::Provider),
            _ => Err(format!(
                "unknown state management '{}', expected 'riverpod', 'bloc' or 'provider'",
                s
            )),
        }
    }
}

impl From<String> for StateManagement {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Navigation package used by generated screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum Router {
    #[default]
    GoRouter,
    AutoRoute,
}

impl Router {
    pub const ALL: [Router; 2] = [Self::GoRouter, Self::AutoRoute];

    pub fn as_str(&self) -> &'static str {
        match self {
            Router::GoRouter => "go_router",
            Router::AutoRoute => "auto_route",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Router::GoRouter => "go_router (declarative, recommended)",
            Router::AutoRoute => "auto_route (code generation)",
        }
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Router {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go_router" | "gorouter" | "go" => Ok(Router::GoRouter),
            "auto_route" | "autoroute" | "auto" => Ok(Router::AutoRoute),
            _ => Err(format!(
                "unknown router '{}', expected 'go_router' or 'auto_route'",
                s
            )),
        }
    }
}

impl From<String> for Router {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Target platform passed to `flutter create --platforms`.
///
/// The declaration order is the canonical order used when platforms are
/// stored or printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
    Web,
    Macos,
    Windows,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Self::Android,
        Self::Ios,
        Self::Web,
        Self::Macos,
        Self::Windows,
        Self::Linux,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown platform '{}', expected one of: android, ios, web, macos, windows, linux",
                    s
                )
            })
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_management_from_str() {
        assert_eq!("riverpod".parse(), Ok(StateManagement::Riverpod));
        assert_eq!("BLOC".parse(), Ok(StateManagement::Bloc));
        assert_eq!("provider".parse(), Ok(StateManagement::Provider));
        assert!("redux".parse::<StateManagement>().is_err());
    }

    #[test]
    fn test_router_aliases() {
        for alias in ["go_router", "gorouter", "go"] {
            assert_eq!(alias.parse(), Ok(Router::GoRouter));
        }
        for alias in ["auto_route", "autoroute", "auto"] {
            assert_eq!(alias.parse(), Ok(Router::AutoRoute));
        }
        assert!("beamer".parse::<Router>().is_err());
    }

    #[test]
    fn test_permissive_conversion_falls_back_to_default() {
        assert_eq!(StateManagement::from("mobx".to_string()), StateManagement::Riverpod);
        assert_eq!(Router::from("beamer".to_string()), Router::GoRouter);
        assert_eq!(Platform::from("fuchsia".to_string()), Platform::Android);
        assert_eq!(Platform::from("Web".to_string()), Platform::Web);
    }

    #[test]
    fn test_as_str_round_trips() {
        for sm in StateManagement::ALL {
            assert_eq!(sm.as_str().parse(), Ok(sm));
        }
        for router in Router::ALL {
            assert_eq!(router.as_str().parse(), Ok(router));
        }
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse(), Ok(platform));
        }
    }

    #[test]
    fn test_platform_canonical_order() {
        let mut platforms = vec![Platform::Linux, Platform::Web, Platform::Android];
        platforms.sort();
        assert_eq!(platforms, vec![Platform::Android, Platform::Web, Platform::Linux]);
    }
}
