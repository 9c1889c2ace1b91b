use std::path::PathBuf;

use strata_config::StateManagement;
use strata_core::GeneratedFile;

use super::{
    ScreenContext, StateDart, StateNames, StateStrategy, list_view, repository_expr,
    repository_imports, screen_header, screen_imports,
};
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    paths::ComponentKind,
    templates::domain::CrudMethods,
};

/// Riverpod notifiers generated by `riverpod_generator`.
pub struct RiverpodStrategy;

/// `ProductController` -> `productControllerProvider`
fn controller(c: &Component) -> (String, String) {
    let class = format!("{}Controller", c.name.pascal);
    let provider = format!("{}ControllerProvider", c.name.camel);
    (class, provider)
}

impl StateStrategy for RiverpodStrategy {
    fn kind(&self) -> StateManagement {
        StateManagement::Riverpod
    }

    fn files(&self, c: &Component) -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(RiverpodProviderDart(c.clone())),
            Box::new(StateDart {
                component: c.clone(),
                kind: ComponentKind::RiverpodState,
            }),
        ]
    }

    fn screen(&self, ctx: &ScreenContext<'_>) -> (Vec<Import>, String) {
        let owner = ctx.owner;
        let n = StateNames::of(owner);
        let (_, provider) = controller(owner);

        let class = CodeBuilder::new()
            .block(&format!("class {} extends ConsumerWidget", ctx.class_name), |b| {
                screen_header(b, ctx)
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context, WidgetRef ref)", |b| {
                        b.line(&format!("final state = ref.watch({});", provider))
                            .blank()
                            .line("return Scaffold(")
                            .indent()
                            .line(&format!(
                                "appBar: AppBar(title: const Text('{}')),",
                                ctx.title
                            ))
                            .line("body: switch (state) {")
                            .indent()
                            .line(&format!("{}() || {}() =>", n.initial, n.loading))
                            .line("  const Center(child: CircularProgressIndicator()),")
                            .line(&format!(
                                "{}(:final message) => Center(child: Text(message)),",
                                n.error
                            ))
                            .line(&format!("{}(:final {}) =>", n.loaded, n.items))
                            .indent()
                            .lines(&format!("{},", list_view(ctx, &n.items)))
                            .dedent()
                            .dedent()
                            .line("},")
                            .line("floatingActionButton: FloatingActionButton(")
                            .indent()
                            .line(&format!(
                                "onPressed: () => ref.read({}.notifier).load(),",
                                provider
                            ))
                            .line("child: const Icon(Icons.refresh),")
                            .dedent()
                            .line("),")
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        let imports = screen_imports(
            ctx,
            vec![
                Import::package("flutter_riverpod/flutter_riverpod.dart"),
                owner.local(&ctx.path, &owner.path(ComponentKind::RiverpodProvider)),
                owner.local(&ctx.path, &owner.path(ComponentKind::RiverpodState)),
            ],
        );
        (imports, class)
    }

    fn main_imports(&self) -> Vec<Import> {
        vec![Import::package("flutter_riverpod/flutter_riverpod.dart")]
    }

    fn wrap_app(&self, app: &str) -> String {
        format!("ProviderScope(child: {})", app)
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["flutter_riverpod", "riverpod_annotation"]
    }

    fn dev_dependencies(&self) -> &'static [&'static str] {
        &["riverpod_generator"]
    }
}

/// `<name>_provider.dart`: the repository provider and the controller.
pub struct RiverpodProviderDart(pub Component);

impl GeneratedFile for RiverpodProviderDart {
    fn path(&self) -> PathBuf {
        self.0.path(ComponentKind::RiverpodProvider)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let n = StateNames::of(c);
        let (class, _) = controller(c);
        let repository = c.repository_type();
        let repository_fn = format!("{}Repository", c.entity.camel);
        let m = CrudMethods::of(c);

        let repository_provider = CodeBuilder::new()
            .line("@riverpod")
            .block(&format!("{} {}(Ref ref)", repository, repository_fn), |b| {
                b.lines(&format!("return {};", repository_expr(c)))
            })
            .build();

        let notifier = CodeBuilder::new()
            .line("@riverpod")
            .block(&format!("class {0} extends _${0}", class), |b| {
                b.line("@override")
                    .block(&format!("{} build()", n.state), |b| {
                        b.line("Future.microtask(load);")
                            .line(&format!("return const {}();", n.initial))
                    })
                    .blank()
                    .block("Future<void> load() async", |b| {
                        b.line(&format!("state = const {}();", n.loading))
                            .line(&format!(
                                "final result = await ref.read({}Provider).{}();",
                                repository_fn, m.get_all
                            ))
                            .line(&format!("state = result.fold<{}>(", n.state))
                            .indent()
                            .line(&format!("(failure) => {}(failure.message),", n.error))
                            .line(&format!("(items) => {}(items),", n.loaded))
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        DartFile::new()
            .import(Import::package("riverpod_annotation/riverpod_annotation.dart"))
            .imports(repository_imports(c, &path))
            .import(c.local(&path, &c.entity_path(ComponentKind::Repository)))
            .import(c.local(&path, &c.path(ComponentKind::RiverpodState)))
            .part(format!("{}_provider.g.dart", c.name.snake))
            .add(repository_provider)
            .add(notifier)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{Config, ConfigOverrides};

    use super::*;

    fn component() -> Component {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            ..Default::default()
        });
        Component::feature(&config, "product")
    }

    #[test]
    fn test_provider_file() {
        let out = RiverpodProviderDart(component()).render();
        assert!(out.contains("part 'product_provider.g.dart';"));
        assert!(out.contains("ProductRepository productRepository(Ref ref) {"));
        assert!(out.contains("remoteDataSource: ProductRemoteDataSourceImpl(client: ApiClient()),"));
        assert!(out.contains("class ProductController extends _$ProductController {"));
        assert!(out.contains("final result = await ref.read(productRepositoryProvider).getAllProducts();"));
        assert!(out.contains("import 'product_state.dart';"));
    }

    #[test]
    fn test_files_are_provider_then_state() {
        let files = RiverpodStrategy.files(&component());
        let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("lib/features/product/presentation/providers/product_provider.dart"),
                PathBuf::from("lib/features/product/presentation/providers/product_state.dart"),
            ]
        );
    }
}
