use std::path::PathBuf;

use strata_config::StateManagement;
use strata_core::GeneratedFile;

use super::{
    ScreenContext, StateStrategy, list_view, repository_expr, repository_imports, screen_header,
    screen_imports,
};
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    paths::ComponentKind,
    templates::domain::CrudMethods,
};

/// `provider` package `ChangeNotifier`s with manual notification.
pub struct ProviderStrategy;

fn notifier_class(c: &Component) -> String {
    format!("{}Notifier", c.name.pascal)
}

impl StateStrategy for ProviderStrategy {
    fn kind(&self) -> StateManagement {
        StateManagement::Provider
    }

    fn files(&self, c: &Component) -> Vec<Box<dyn GeneratedFile>> {
        vec![Box::new(NotifierDart(c.clone()))]
    }

    fn screen(&self, ctx: &ScreenContext<'_>) -> (Vec<Import>, String) {
        let owner = ctx.owner;
        let notifier = notifier_class(owner);
        let items = owner.entity.plural_var();

        let class = CodeBuilder::new()
            .block(&format!("class {} extends StatelessWidget", ctx.class_name), |b| {
                screen_header(b, ctx)
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return ChangeNotifierProvider(")
                            .indent()
                            .line(&format!("create: (_) => {}(", notifier))
                            .indent()
                            .lines(&format!("repository: {},", repository_expr(owner)))
                            .dedent()
                            .line(")..load(),")
                            .line("child: Scaffold(")
                            .indent()
                            .line(&format!(
                                "appBar: AppBar(title: const Text('{}')),",
                                ctx.title
                            ))
                            .line(&format!("body: Consumer<{}>(", notifier))
                            .indent()
                            .block_with_close("builder: (context, notifier, _) {", "},", |b| {
                                b.block("if (notifier.isLoading)", |b| {
                                    b.line("return const Center(child: CircularProgressIndicator());")
                                })
                                .line("final error = notifier.error;")
                                .block("if (error != null)", |b| {
                                    b.line("return Center(child: Text(error));")
                                })
                                .line(&format!("final {} = notifier.{};", items, items))
                                .lines(&format!("return {};", list_view(ctx, &items)))
                            })
                            .dedent()
                            .line("),")
                            .dedent()
                            .line("),")
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        let mut extra = vec![Import::package("provider/provider.dart")];
        extra.extend(repository_imports(owner, &ctx.path));
        extra.push(owner.local(&ctx.path, &owner.path(ComponentKind::Notifier)));
        (screen_imports(ctx, extra), class)
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["provider"]
    }
}

/// `<name>_notifier.dart`
pub struct NotifierDart(pub Component);

impl GeneratedFile for NotifierDart {
    fn path(&self) -> PathBuf {
        self.0.path(ComponentKind::Notifier)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let class = notifier_class(c);
        let entity = c.entity_type();
        let items = c.entity.plural_var();
        let m = CrudMethods::of(c);

        let body = CodeBuilder::new()
            .block(&format!("class {} extends ChangeNotifier", class), |b| {
                b.line(&format!("{}({{required this.repository}});", class))
                    .blank()
                    .line(&format!("final {} repository;", c.repository_type()))
                    .blank()
                    .line(&format!("List<{}> _{} = [];", entity, items))
                    .line("bool _isLoading = false;")
                    .line("String? _error;")
                    .blank()
                    .line(&format!(
                        "List<{0}> get {1} => List.unmodifiable(_{1});",
                        entity, items
                    ))
                    .line("bool get isLoading => _isLoading;")
                    .line("String? get error => _error;")
                    .blank()
                    .block("Future<void> load() async", |b| {
                        b.line("_isLoading = true;")
                            .line("_error = null;")
                            .line("notifyListeners();")
                            .blank()
                            .line(&format!("final result = await repository.{}();", m.get_all))
                            .line("result.fold(")
                            .indent()
                            .line("(failure) => _error = failure.message,")
                            .line(&format!("(items) => _{} = items,", items))
                            .dedent()
                            .line(");")
                            .line("_isLoading = false;")
                            .line("notifyListeners();")
                    })
            })
            .build();

        DartFile::new()
            .import(Import::package("flutter/foundation.dart"))
            .import(c.local(&path, &c.entity_path(ComponentKind::Entity)))
            .import(c.local(&path, &c.entity_path(ComponentKind::Repository)))
            .add(body)
            .render()
    }
}
