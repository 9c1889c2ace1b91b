use strata_config::Config;
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{component::Component, templates::ScreenDart};

/// `strata generate screen <name> --feature <feature>`
///
/// The screen reads the state of its feature, so it is rendered for the
/// feature component with its own class and file name.
pub struct ScreenScaffold {
    pub owner: Component,
    pub screen: String,
}

impl ScreenScaffold {
    pub fn new(config: &Config, feature: &str, screen: &str) -> Self {
        Self {
            owner: Component::feature(config, feature),
            screen: screen.to_string(),
        }
    }
}

impl Scaffold for ScreenScaffold {
    fn name(&self) -> &'static str {
        "screen"
    }

    fn required_feature(&self) -> Option<&str> {
        Some(&self.owner.feature.raw)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        vec![Box::new(ScreenDart::standalone(
            self.owner.clone(),
            &self.screen,
        ))]
    }
}
