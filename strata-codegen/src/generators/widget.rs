use strata_config::Config;
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{component::Component, templates::WidgetDart};

/// `strata generate widget <name> --feature <feature> [--stateful]`
pub struct WidgetScaffold {
    pub component: Component,
    pub stateful: bool,
}

impl WidgetScaffold {
    pub fn new(config: &Config, feature: &str, name: &str) -> Self {
        Self {
            component: Component::new(config, feature, name),
            stateful: false,
        }
    }

    pub fn stateful(mut self, stateful: bool) -> Self {
        self.stateful = stateful;
        self
    }
}

impl Scaffold for WidgetScaffold {
    fn name(&self) -> &'static str {
        "widget"
    }

    fn required_feature(&self) -> Option<&str> {
        Some(&self.component.feature.raw)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        vec![Box::new(WidgetDart {
            component: self.component.clone(),
            stateful: self.stateful,
        })]
    }
}
