use strata_config::Config;
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{
    component::Component,
    templates::{CRUD_ACTIONS, UseCaseDart},
};

/// `strata generate usecase <name> --feature <feature> [--action A | --crud]`
pub struct UseCaseScaffold {
    pub component: Component,
    pub actions: Vec<String>,
}

impl UseCaseScaffold {
    /// A single use case for `action`.
    pub fn single(config: &Config, feature: &str, name: &str, action: &str) -> Self {
        Self {
            component: Component::new(config, feature, name),
            actions: vec![action.to_string()],
        }
    }

    /// The get, getAll, create, update and delete use cases.
    pub fn crud(config: &Config, feature: &str, name: &str) -> Self {
        Self {
            component: Component::new(config, feature, name),
            actions: CRUD_ACTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn with_entity(mut self, entity: Option<&str>) -> Self {
        self.component = self.component.with_entity(entity);
        self
    }
}

impl Scaffold for UseCaseScaffold {
    fn name(&self) -> &'static str {
        "usecase"
    }

    fn required_feature(&self) -> Option<&str> {
        Some(&self.component.feature.raw)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        self.actions
            .iter()
            .map(|action| {
                Box::new(UseCaseDart::new(self.component.clone(), action.as_str()))
                    as Box<dyn GeneratedFile>
            })
            .collect()
    }
}
