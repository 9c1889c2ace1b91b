//! Everything a template needs to render one component.

use std::path::{Path, PathBuf};

use strata_config::Config;

use crate::{
    builder::Import,
    fields::{Field, default_fields},
    names::Names,
    paths::{ComponentKind, derive_path, package_import, relative_import},
};

/// A named component inside a feature, plus the project configuration.
///
/// `name` drives the component's own files (screens, widgets, state),
/// `entity` drives the domain and data files it talks to. Without an
/// explicit entity the component name is reused.
#[derive(Debug, Clone)]
pub struct Component {
    pub config: Config,
    pub feature: Names,
    pub name: Names,
    pub entity: Names,
    pub fields: Vec<Field>,
}

impl Component {
    pub fn new(config: &Config, feature: &str, name: &str) -> Self {
        Self {
            config: config.clone(),
            feature: Names::new(feature),
            name: Names::new(name),
            entity: Names::new(name),
            fields: default_fields(),
        }
    }

    /// The component of a whole feature: name and entity equal the feature.
    pub fn feature(config: &Config, feature: &str) -> Self {
        Self::new(config, feature, feature)
    }

    pub fn with_entity(mut self, entity: Option<&str>) -> Self {
        if let Some(entity) = entity.filter(|e| !e.trim().is_empty()) {
            self.entity = Names::new(entity);
        }
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        if !fields.is_empty() {
            self.fields = fields;
        }
        self
    }

    pub fn package(&self) -> &str {
        self.config.package_name()
    }

    /// Path of this component's own file of `kind`.
    pub fn path(&self, kind: ComponentKind) -> PathBuf {
        derive_path(&self.feature.raw, kind, &self.name.raw)
    }

    /// Path of the entity-owned file of `kind` (entity, model, repository...).
    pub fn entity_path(&self, kind: ComponentKind) -> PathBuf {
        derive_path(&self.feature.raw, kind, &self.entity.raw)
    }

    /// Relative import of `target` from the file at `from`.
    pub fn local(&self, from: &Path, target: &Path) -> Import {
        Import::new(relative_import(from, target))
    }

    /// `package:<project>/...` import of a project file.
    pub fn project(&self, path: &str) -> Import {
        Import::new(package_import(self.package(), Path::new(path)))
    }

    /// Dart type of the `id` field.
    pub fn id_type(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == "id")
            .map(|f| f.ty.as_str())
            .unwrap_or("String")
    }

    /// Field shown as the title of list tiles: the first non-id `String`.
    pub fn title_field(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.name != "id" && f.ty == "String")
            .map(|f| f.name.as_str())
            .unwrap_or("id")
    }

    /// `ProductEntity`
    pub fn entity_type(&self) -> String {
        format!("{}Entity", self.entity.pascal)
    }

    /// `ProductModel`
    pub fn model_type(&self) -> String {
        format!("{}Model", self.entity.pascal)
    }

    /// `ProductRepository`
    pub fn repository_type(&self) -> String {
        format!("{}Repository", self.entity.pascal)
    }
}
