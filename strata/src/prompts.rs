//! Interactive questions for configuration values not given as flags.

use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use eyre::{Result, WrapErr};
use strata_config::{
    Config, ConfigOverrides, Platform, Router, StateManagement, is_valid_project_name,
};

/// Ask for every value `given` leaves unset, starting from `config`.
pub fn complete(config: Config, given: &ConfigOverrides) -> Result<Config> {
    let theme = ColorfulTheme::default();
    let mut config = config;

    if given.project_name.is_none() && !is_valid_project_name(&config.project_name) {
        config.project_name = Input::<String>::with_theme(&theme)
            .with_prompt("Project name")
            .validate_with(|name: &String| -> Result<(), String> {
                if is_valid_project_name(name) {
                    Ok(())
                } else {
                    Err("use lowercase letters, digits and underscores".to_string())
                }
            })
            .interact_text()
            .wrap_err("Failed to get project name")?;
    }

    if given.org.is_none() {
        config.org = Input::<String>::with_theme(&theme)
            .with_prompt("Organization")
            .default(config.org.clone())
            .interact_text()
            .wrap_err("Failed to get organization")?;
    }

    if given.state_management.is_none() {
        let items: Vec<&str> = StateManagement::ALL.iter().map(|s| s.description()).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt("State management")
            .items(&items)
            .default(position(&StateManagement::ALL, &config.state_management))
            .interact()
            .wrap_err("Failed to get state management selection")?;
        config.state_management = StateManagement::ALL[selection];
    }

    if given.router.is_none() {
        let items: Vec<&str> = Router::ALL.iter().map(|r| r.description()).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt("Router")
            .items(&items)
            .default(position(&Router::ALL, &config.router))
            .interact()
            .wrap_err("Failed to get router selection")?;
        config.router = Router::ALL[selection];
    }

    if given.use_freezed.is_none() {
        config.use_freezed = confirm(&theme, "Use freezed data classes?", config.use_freezed)?;
    }
    if given.use_dio_client.is_none() {
        config.use_dio_client = confirm(&theme, "Use dio as HTTP client?", config.use_dio_client)?;
    }

    if given.platforms.is_none() {
        let items: Vec<&str> = Platform::ALL.iter().map(Platform::as_str).collect();
        let checked: Vec<bool> = Platform::ALL
            .iter()
            .map(|p| config.platforms.contains(p))
            .collect();
        let selection = MultiSelect::with_theme(&theme)
            .with_prompt("Platforms")
            .items(&items)
            .defaults(&checked)
            .interact()
            .wrap_err("Failed to get platform selection")?;
        config.platforms = selection.into_iter().map(|i| Platform::ALL[i]).collect();
    }

    if given.l10n.is_none() {
        config.l10n = confirm(&theme, "Enable localization?", config.l10n)?;
    }

    if given.features.is_none() {
        let answer = Input::<String>::with_theme(&theme)
            .with_prompt("Initial features (comma separated)")
            .default(config.features.join(","))
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to get features")?;
        config.features = parse_list(&answer);
    }

    Ok(config)
}

fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .wrap_err_with(|| format!("Failed to answer '{}'", prompt))
}

fn position<T: PartialEq>(all: &[T], current: &T) -> usize {
    all.iter().position(|v| v == current).unwrap_or(0)
}

/// Split a comma separated answer, dropping blanks.
fn parse_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("auth, cart,,  "), vec!["auth", "cart"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_position_defaults_to_current() {
        assert_eq!(position(&Router::ALL, &Router::AutoRoute), 1);
        assert_eq!(position(&StateManagement::ALL, &StateManagement::Riverpod), 0);
    }
}
