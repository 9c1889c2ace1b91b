use strata_config::Config;
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{component::Component, templates::strategy_for};

/// `strata generate provider <name> --feature <feature> [--entity <entity>]`
///
/// Writes the state-management files of the configured strategy: a
/// Riverpod controller and state, a bloc with events and states, or a
/// `ChangeNotifier`.
pub struct StateScaffold {
    pub component: Component,
}

impl StateScaffold {
    pub fn new(config: &Config, feature: &str, name: &str, entity: Option<&str>) -> Self {
        Self {
            component: Component::new(config, feature, name).with_entity(entity),
        }
    }
}

impl Scaffold for StateScaffold {
    fn name(&self) -> &'static str {
        "provider"
    }

    fn required_feature(&self) -> Option<&str> {
        Some(&self.component.feature.raw)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        strategy_for(self.component.config.state_management).files(&self.component)
    }
}
