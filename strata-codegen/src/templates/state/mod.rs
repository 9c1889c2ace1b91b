//! State-management strategies.
//!
//! Each [`StateManagement`] variant maps to one [`StateStrategy`] through
//! [`strategy_for`]. A strategy owns everything that differs between the
//! variants: its state files, the screen body, root-widget wrapping and
//! the packages it needs.

mod bloc;
mod provider;
mod riverpod;

use std::path::PathBuf;

use strata_config::StateManagement;
use strata_core::GeneratedFile;

pub use self::{
    bloc::{BlocDart, BlocEventDart, BlocStrategy},
    provider::{NotifierDart, ProviderStrategy},
    riverpod::{RiverpodProviderDart, RiverpodStrategy},
};
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    paths::ComponentKind,
};

/// Everything a strategy needs to render a screen.
pub struct ScreenContext<'a> {
    /// Component whose state files the screen reads
    pub owner: &'a Component,
    pub path: PathBuf,
    pub class_name: String,
    pub title: String,
    /// Render items with the feature card widget instead of a list tile
    pub with_card: bool,
}

pub trait StateStrategy: Sync {
    fn kind(&self) -> StateManagement;

    /// State-management files for a component, in write order.
    fn files(&self, c: &Component) -> Vec<Box<dyn GeneratedFile>>;

    /// Imports and class declaration of a screen.
    fn screen(&self, ctx: &ScreenContext<'_>) -> (Vec<Import>, String);

    /// Imports `main.dart` needs for [`StateStrategy::wrap_app`].
    fn main_imports(&self) -> Vec<Import> {
        Vec::new()
    }

    /// Expression passed to `runApp`.
    fn wrap_app(&self, app: &str) -> String {
        app.to_string()
    }

    fn dependencies(&self) -> &'static [&'static str];

    fn dev_dependencies(&self) -> &'static [&'static str] {
        &[]
    }
}

static RIVERPOD: RiverpodStrategy = RiverpodStrategy;
static BLOC: BlocStrategy = BlocStrategy;
static PROVIDER: ProviderStrategy = ProviderStrategy;

/// The strategy registered for a state-management variant.
pub fn strategy_for(kind: StateManagement) -> &'static dyn StateStrategy {
    match kind {
        StateManagement::Riverpod => &RIVERPOD,
        StateManagement::Bloc => &BLOC,
        StateManagement::Provider => &PROVIDER,
    }
}

/// Class names of the shared sealed state hierarchy.
pub(crate) struct StateNames {
    pub state: String,
    pub initial: String,
    pub loading: String,
    pub loaded: String,
    pub error: String,
    /// Field of the loaded state holding the items
    pub items: String,
}

impl StateNames {
    pub fn of(c: &Component) -> Self {
        let p = &c.name.pascal;
        Self {
            state: format!("{}State", p),
            initial: format!("{}Initial", p),
            loading: format!("{}Loading", p),
            loaded: format!("{}Loaded", p),
            error: format!("{}Error", p),
            items: c.entity.plural_var(),
        }
    }
}

/// `<name>_state.dart` for Riverpod and Bloc: initial, loading, loaded and
/// error states as a sealed hierarchy (freezed unions when enabled).
pub struct StateDart {
    pub component: Component,
    pub kind: ComponentKind,
}

impl StateDart {
    fn freezed(&self) -> String {
        let n = StateNames::of(&self.component);
        let entity = self.component.entity_type();
        CodeBuilder::new()
            .line("@freezed")
            .block(&format!("sealed class {0} with _${0}", n.state), |b| {
                b.line(&format!("const factory {}.initial() = {};", n.state, n.initial))
                    .line(&format!("const factory {}.loading() = {};", n.state, n.loading))
                    .line(&format!(
                        "const factory {}.loaded(List<{}> {}) = {};",
                        n.state, entity, n.items, n.loaded
                    ))
                    .line(&format!(
                        "const factory {}.error(String message) = {};",
                        n.state, n.error
                    ))
            })
            .build()
    }

    fn plain(&self) -> String {
        let n = StateNames::of(&self.component);
        let entity = self.component.entity_type();
        let simple = |b: CodeBuilder, class: &str| {
            b.block(&format!("class {} extends {}", class, n.state), |b| {
                b.line(&format!("const {}();", class))
            })
        };

        let b = CodeBuilder::new()
            .block(&format!("sealed class {}", n.state), |b| {
                b.line(&format!("const {}();", n.state))
            })
            .blank();
        let b = simple(b, &n.initial).blank();
        let b = simple(b, &n.loading).blank();
        b.block(&format!("class {} extends {}", n.loaded, n.state), |b| {
            b.line(&format!("const {}(this.{});", n.loaded, n.items))
                .blank()
                .line(&format!("final List<{}> {};", entity, n.items))
        })
        .blank()
        .block(&format!("class {} extends {}", n.error, n.state), |b| {
            b.line(&format!("const {}(this.message);", n.error))
                .blank()
                .line("final String message;")
        })
        .build()
    }
}

impl GeneratedFile for StateDart {
    fn path(&self) -> PathBuf {
        self.component.path(self.kind)
    }

    fn render(&self) -> String {
        let c = &self.component;
        let path = self.path();
        let entity_import = c.local(&path, &c.entity_path(ComponentKind::Entity));

        if c.config.use_freezed {
            DartFile::new()
                .import(Import::package("freezed_annotation/freezed_annotation.dart"))
                .import(entity_import)
                .part(format!("{}_state.freezed.dart", c.name.snake))
                .add(self.freezed())
                .render()
        } else {
            DartFile::new()
                .import(entity_import)
                .add(self.plain())
                .render()
        }
    }
}

/// Widget expression for the item at `item` (e.g. `products[index]`).
pub(crate) fn item_widget(ctx: &ScreenContext<'_>, item: &str) -> String {
    let owner = ctx.owner;
    if ctx.with_card {
        format!(
            "{}Card({}: {})",
            owner.entity.pascal,
            owner.entity.var(),
            item
        )
    } else {
        format!("ListTile(title: Text({}))", title_expr(owner, item))
    }
}

/// Text expression for an entity's title field.
pub(crate) fn title_expr(c: &Component, value: &str) -> String {
    let field = c.title_field();
    if field == "id" && c.id_type() != "String" {
        format!("'${{{}.id}}'", value)
    } else {
        format!("{}.{}", value, field)
    }
}

/// `ListView.builder(...)` over `items`, as lines without trailing comma.
pub(crate) fn list_view(ctx: &ScreenContext<'_>, items: &str) -> String {
    format!(
        "ListView.builder(\n  itemCount: {items}.length,\n  itemBuilder: (context, index) => {widget},\n)",
        items = items,
        widget = item_widget(ctx, &format!("{}[index]", items)),
    )
}

/// `static const String routePath = '/...';` and the constructor.
pub(crate) fn screen_header(b: CodeBuilder, ctx: &ScreenContext<'_>) -> CodeBuilder {
    b.line(&format!("const {}({{super.key}});", ctx.class_name))
        .blank()
        .line(&format!(
            "static const String routePath = '{}';",
            route_path(&ctx.class_name)
        ))
}

/// `/product-detail` for `ProductDetailScreen`.
pub fn route_path(class_name: &str) -> String {
    let stem = class_name.strip_suffix("Screen").unwrap_or(class_name);
    format!("/{}", strata_core::to_kebab_case(stem))
}

/// Imports every screen needs: material, the card when used, plus the
/// component's own file imports.
pub(crate) fn screen_imports(ctx: &ScreenContext<'_>, extra: Vec<Import>) -> Vec<Import> {
    let mut imports = vec![Import::package("flutter/material.dart")];
    if ctx.with_card {
        let owner = ctx.owner;
        imports.push(owner.local(&ctx.path, &owner.entity_path(ComponentKind::Card)));
    }
    imports.extend(extra);
    imports
}

/// Build the data layer inline for strategies without a DI container.
pub(crate) fn repository_expr(c: &Component) -> String {
    format!(
        "{}Impl(\n  remoteDataSource: {}RemoteDataSourceImpl(client: ApiClient()),\n)",
        c.repository_type(),
        c.entity.pascal
    )
}

/// Imports needed by [`repository_expr`].
pub(crate) fn repository_imports(c: &Component, from: &std::path::Path) -> Vec<Import> {
    vec![
        c.project(crate::paths::core_paths::API_CLIENT),
        c.local(from, &c.entity_path(ComponentKind::RemoteDataSource)),
        c.local(from, &c.entity_path(ComponentKind::RepositoryImpl)),
    ]
}

#[cfg(test)]
mod tests {
    use strata_config::{Config, ConfigOverrides};

    use super::*;

    fn component(freezed: bool) -> Component {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            use_freezed: Some(freezed),
            ..Default::default()
        });
        Component::feature(&config, "product")
    }

    #[test]
    fn test_strategy_table_is_total() {
        for kind in StateManagement::ALL {
            assert_eq!(strategy_for(kind).kind(), kind);
            assert!(!strategy_for(kind).dependencies().is_empty());
        }
    }

    #[test]
    fn test_freezed_state() {
        let out = StateDart {
            component: component(true),
            kind: ComponentKind::RiverpodState,
        }
        .render();
        assert!(out.contains("part 'product_state.freezed.dart';"));
        assert!(out.contains("sealed class ProductState with _$ProductState {"));
        assert!(out.contains(
            "const factory ProductState.loaded(List<ProductEntity> products) = ProductLoaded;"
        ));
    }

    #[test]
    fn test_plain_state() {
        let state = StateDart {
            component: component(false),
            kind: ComponentKind::BlocState,
        };
        assert_eq!(
            state.path(),
            PathBuf::from("lib/features/product/presentation/bloc/product_state.dart")
        );
        let out = state.render();
        assert!(out.contains("sealed class ProductState {"));
        assert!(out.contains("class ProductLoading extends ProductState {"));
        assert!(out.contains("  final List<ProductEntity> products;"));
        assert!(out.contains("class ProductError extends ProductState {"));
    }

    #[test]
    fn test_route_path() {
        assert_eq!(route_path("ProductDetailScreen"), "/product-detail");
        assert_eq!(route_path("Cart"), "/cart");
    }
}
