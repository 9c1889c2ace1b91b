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

/// `flutter_bloc` with one load event and the shared state hierarchy.
pub struct BlocStrategy;

fn bloc_class(c: &Component) -> String {
    format!("{}Bloc", c.name.pascal)
}

fn event_class(c: &Component) -> String {
    format!("{}Event", c.name.pascal)
}

fn load_event(c: &Component) -> String {
    format!("Load{}", c.name.plural_pascal)
}

impl StateStrategy for BlocStrategy {
    fn kind(&self) -> StateManagement {
        StateManagement::Bloc
    }

    fn files(&self, c: &Component) -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(BlocDart(c.clone())),
            Box::new(BlocEventDart(c.clone())),
            Box::new(StateDart {
                component: c.clone(),
                kind: ComponentKind::BlocState,
            }),
        ]
    }

    fn screen(&self, ctx: &ScreenContext<'_>) -> (Vec<Import>, String) {
        let owner = ctx.owner;
        let n = StateNames::of(owner);
        let bloc = bloc_class(owner);

        let class = CodeBuilder::new()
            .block(&format!("class {} extends StatelessWidget", ctx.class_name), |b| {
                screen_header(b, ctx)
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return BlocProvider(")
                            .indent()
                            .line(&format!("create: (_) => {}(", bloc))
                            .indent()
                            .lines(&format!("repository: {},", repository_expr(owner)))
                            .dedent()
                            .line(&format!(")..add(const {}()),", load_event(owner)))
                            .line("child: Scaffold(")
                            .indent()
                            .line(&format!(
                                "appBar: AppBar(title: const Text('{}')),",
                                ctx.title
                            ))
                            .line(&format!("body: BlocBuilder<{}, {}>(", bloc, n.state))
                            .indent()
                            .line("builder: (context, state) => switch (state) {")
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
                            .dedent()
                            .line("),")
                            .dedent()
                            .line("),")
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        let mut extra = vec![Import::package("flutter_bloc/flutter_bloc.dart")];
        extra.extend(repository_imports(owner, &ctx.path));
        extra.extend([
            owner.local(&ctx.path, &owner.path(ComponentKind::Bloc)),
            owner.local(&ctx.path, &owner.path(ComponentKind::BlocEvent)),
            owner.local(&ctx.path, &owner.path(ComponentKind::BlocState)),
        ]);
        (screen_imports(ctx, extra), class)
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["flutter_bloc"]
    }
}

/// `<name>_bloc.dart`
pub struct BlocDart(pub Component);

impl GeneratedFile for BlocDart {
    fn path(&self) -> PathBuf {
        self.0.path(ComponentKind::Bloc)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let n = StateNames::of(c);
        let bloc = bloc_class(c);
        let event = load_event(c);
        let m = CrudMethods::of(c);

        let class = CodeBuilder::new()
            .block(
                &format!("class {} extends Bloc<{}, {}>", bloc, event_class(c), n.state),
                |b| {
                    b.block(
                        &format!(
                            "{}({{required this.repository}}) : super(const {}())",
                            bloc, n.initial
                        ),
                        |b| b.line(&format!("on<{}>(_onLoad);", event)),
                    )
                    .blank()
                    .line(&format!("final {} repository;", c.repository_type()))
                    .blank()
                    .block(
                        &format!(
                            "Future<void> _onLoad({} event, Emitter<{}> emit) async",
                            event, n.state
                        ),
                        |b| {
                            b.line(&format!("emit(const {}());", n.loading))
                                .line(&format!("final result = await repository.{}();", m.get_all))
                                .line("emit(")
                                .indent()
                                .line(&format!("result.fold<{}>(", n.state))
                                .indent()
                                .line(&format!("(failure) => {}(failure.message),", n.error))
                                .line(&format!("(items) => {}(items),", n.loaded))
                                .dedent()
                                .line("),")
                                .dedent()
                                .line(");")
                        },
                    )
                },
            )
            .build();

        DartFile::new()
            .import(Import::package("flutter_bloc/flutter_bloc.dart"))
            .import(c.local(&path, &c.entity_path(ComponentKind::Repository)))
            .import(c.local(&path, &c.path(ComponentKind::BlocEvent)))
            .import(c.local(&path, &c.path(ComponentKind::BlocState)))
            .add(class)
            .render()
    }
}

/// `<name>_event.dart`
pub struct BlocEventDart(pub Component);

impl GeneratedFile for BlocEventDart {
    fn path(&self) -> PathBuf {
        self.0.path(ComponentKind::BlocEvent)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let base = event_class(c);
        let load = load_event(c);

        DartFile::new()
            .add(
                CodeBuilder::new()
                    .block(&format!("sealed class {}", base), |b| {
                        b.line(&format!("const {}();", base))
                    })
                    .build(),
            )
            .add(
                CodeBuilder::new()
                    .block(&format!("class {} extends {}", load, base), |b| {
                        b.line(&format!("const {}();", load))
                    })
                    .build(),
            )
            .render()
    }
}
