//! Presentation layer: screens, widgets and the feature card.

use std::path::PathBuf;

use strata_core::GeneratedFile;

use super::state::{ScreenContext, strategy_for, title_expr};
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    names::Names,
    paths::{ComponentKind, derive_path},
};

/// `<screen>_screen.dart`, rendered by the configured state strategy.
pub struct ScreenDart {
    /// Component whose state the screen reads
    pub owner: Component,
    pub screen: Names,
    pub with_card: bool,
}

impl ScreenDart {
    /// The list screen of a whole feature.
    pub fn for_feature(owner: Component) -> Self {
        let screen = owner.name.clone();
        Self {
            owner,
            screen,
            with_card: true,
        }
    }

    /// A further screen inside a feature, backed by the feature's state.
    pub fn standalone(owner: Component, screen: &str) -> Self {
        Self {
            owner,
            screen: Names::new(screen),
            with_card: false,
        }
    }

    pub fn class_name(&self) -> String {
        format!("{}Screen", self.screen.pascal)
    }
}

impl GeneratedFile for ScreenDart {
    fn path(&self) -> PathBuf {
        derive_path(&self.owner.feature.raw, ComponentKind::Screen, &self.screen.raw)
    }

    fn render(&self) -> String {
        let config = &self.owner.config;
        let ctx = ScreenContext {
            owner: &self.owner,
            path: self.path(),
            class_name: self.class_name(),
            title: self.screen.title.clone(),
            with_card: self.with_card,
        };
        let (imports, class) = strategy_for(config.state_management).screen(&ctx);
        let class = if config.uses_auto_route() {
            format!("@RoutePage()\n{}", class)
        } else {
            class
        };

        DartFile::new()
            .imports(imports)
            .import_if(
                config.uses_auto_route(),
                Import::package("auto_route/auto_route.dart"),
            )
            .add(class)
            .render()
    }
}

/// `<name>_widget.dart`
pub struct WidgetDart {
    pub component: Component,
    pub stateful: bool,
}

impl WidgetDart {
    pub fn class_name(&self) -> String {
        format!("{}Widget", self.component.name.pascal)
    }

    fn stateless(&self) -> String {
        let class = self.class_name();
        CodeBuilder::new()
            .block(&format!("class {} extends StatelessWidget", class), |b| {
                b.line(&format!("const {}({{super.key}});", class))
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return const Placeholder();")
                    })
            })
            .build()
    }

    fn stateful(&self) -> String {
        let class = self.class_name();
        let state = format!("_{}State", class);
        CodeBuilder::new()
            .block(&format!("class {} extends StatefulWidget", class), |b| {
                b.line(&format!("const {}({{super.key}});", class))
                    .blank()
                    .line("@override")
                    .line(&format!("State<{}> createState() => {}();", class, state))
            })
            .blank()
            .block(&format!("class {} extends State<{}>", state, class), |b| {
                b.line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return const Placeholder();")
                    })
            })
            .build()
    }
}

impl GeneratedFile for WidgetDart {
    fn path(&self) -> PathBuf {
        self.component.path(ComponentKind::Widget)
    }

    fn render(&self) -> String {
        let body = if self.stateful {
            self.stateful()
        } else {
            self.stateless()
        };
        DartFile::new()
            .import(Import::package("flutter/material.dart"))
            .add(body)
            .render()
    }
}

/// `<entity>_card.dart`: one entity as a tappable card.
pub struct CardDart(pub Component);

impl GeneratedFile for CardDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::Card)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let class = format!("{}Card", c.entity.pascal);
        let var = c.entity.var();

        let body = CodeBuilder::new()
            .block(&format!("class {} extends StatelessWidget", class), |b| {
                b.line(&format!(
                    "const {}({{super.key, required this.{}, this.onTap}});",
                    class, var
                ))
                .blank()
                .line(&format!("final {} {};", c.entity_type(), var))
                .line("final VoidCallback? onTap;")
                .blank()
                .line("@override")
                .block("Widget build(BuildContext context)", |b| {
                    b.line("return Card(")
                        .indent()
                        .line("child: ListTile(")
                        .indent()
                        .line(&format!("title: Text({}),", title_expr(c, &var)))
                        .line("onTap: onTap,")
                        .dedent()
                        .line("),")
                        .dedent()
                        .line(");")
                })
            })
            .build();

        DartFile::new()
            .import(Import::package("flutter/material.dart"))
            .import(c.local(&path, &c.entity_path(ComponentKind::Entity)))
            .add(body)
            .render()
    }
}
