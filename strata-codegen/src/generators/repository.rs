use strata_config::Config;
use strata_core::GeneratedFile;

use super::Scaffold;
use crate::{
    component::Component,
    fields::Field,
    templates::{LocalDataSourceDart, RemoteDataSourceDart, RepositoryDart, RepositoryImplDart},
};

/// `strata generate repository <name> --feature <feature> [--local]`
pub struct RepositoryScaffold {
    pub component: Component,
    pub local: bool,
}

impl RepositoryScaffold {
    pub fn new(config: &Config, feature: &str, name: &str) -> Self {
        Self {
            component: Component::new(config, feature, name),
            local: false,
        }
    }

    /// Also write the local data source stub.
    pub fn local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.component = self.component.with_fields(fields);
        self
    }
}

impl Scaffold for RepositoryScaffold {
    fn name(&self) -> &'static str {
        "repository"
    }

    fn required_feature(&self) -> Option<&str> {
        Some(&self.component.feature.raw)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        let c = &self.component;
        let mut files: Vec<Box<dyn GeneratedFile>> = vec![
            Box::new(RepositoryDart(c.clone())),
            Box::new(RepositoryImplDart(c.clone())),
            Box::new(RemoteDataSourceDart(c.clone())),
        ];
        if self.local {
            files.push(Box::new(LocalDataSourceDart(c.clone())));
        }
        files
    }
}
