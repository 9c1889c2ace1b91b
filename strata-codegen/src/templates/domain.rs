//! Domain layer: entities, repository interfaces and use cases.

use std::path::PathBuf;

use log::warn;
use strata_core::{GeneratedFile, to_camel_case, to_pascal_case, to_snake_case};

use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    paths::{ComponentKind, core_paths, derive_path},
};

/// Repository method names for an entity.
pub(crate) struct CrudMethods {
    pub get: String,
    pub get_all: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl CrudMethods {
    pub fn of(c: &Component) -> Self {
        let e = &c.entity;
        Self {
            get: format!("get{}", e.pascal),
            get_all: format!("getAll{}", e.plural_pascal),
            create: format!("create{}", e.pascal),
            update: format!("update{}", e.pascal),
            delete: format!("delete{}", e.pascal),
        }
    }
}

/// `<name>_entity.dart`: an immutable `Equatable` value class.
pub struct EntityDart(pub Component);

impl GeneratedFile for EntityDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::Entity)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let ty = c.entity_type();
        let props = c
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let class = CodeBuilder::new()
            .block(&format!("class {} extends Equatable", ty), |b| {
                b.line(&format!("const {}({{", ty))
                    .indent()
                    .each(&c.fields, |b, f| b.line(&format!("required this.{},", f.name)))
                    .dedent()
                    .line("});")
                    .blank()
                    .each(&c.fields, |b, f| b.line(&format!("final {} {};", f.ty, f.name)))
                    .blank()
                    .line(&format!("{} copyWith({{", ty))
                    .indent()
                    .each(&c.fields, |b, f| {
                        b.line(&format!("{} {},", f.optional_type(), f.name))
                    })
                    .dedent()
                    .line("}) {")
                    .indent()
                    .line(&format!("return {}(", ty))
                    .indent()
                    .each(&c.fields, |b, f| {
                        b.line(&format!("{0}: {0} ?? this.{0},", f.name))
                    })
                    .dedent()
                    .line(");")
                    .dedent()
                    .line("}")
                    .blank()
                    .line("@override")
                    .line(&format!("List<Object?> get props => [{}];", props))
            })
            .build();

        DartFile::new()
            .import(Import::package("equatable/equatable.dart"))
            .add(class)
            .render()
    }
}

/// `<name>_repository.dart`: the abstract repository contract.
pub struct RepositoryDart(pub Component);

impl GeneratedFile for RepositoryDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::Repository)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let entity = c.entity_type();
        let var = c.entity.var();
        let id = c.id_type();
        let m = CrudMethods::of(c);

        let class = CodeBuilder::new()
            .block(&format!("abstract class {}", c.repository_type()), |b| {
                b.line(&format!(
                    "Future<Either<Failure, List<{}>>> {}();",
                    entity, m.get_all
                ))
                .blank()
                .line(&format!(
                    "Future<Either<Failure, {}>> {}({} id);",
                    entity, m.get, id
                ))
                .blank()
                .line(&format!(
                    "Future<Either<Failure, {0}>> {1}({0} {2});",
                    entity, m.create, var
                ))
                .blank()
                .line(&format!(
                    "Future<Either<Failure, {0}>> {1}({0} {2});",
                    entity, m.update, var
                ))
                .blank()
                .line(&format!(
                    "Future<Either<Failure, void>> {}({} id);",
                    m.delete, id
                ))
            })
            .build();

        DartFile::new()
            .import(Import::package("dartz/dartz.dart"))
            .import(c.project(core_paths::FAILURES))
            .import(c.local(&path, &c.entity_path(ComponentKind::Entity)))
            .add(class)
            .render()
    }
}

/// Shape of a use case, selected from the action name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionShape {
    Get,
    GetAll,
    Create,
    Update,
    Delete,
    /// Unknown action: parameters are passed through as a map
    Passthrough,
}

impl ActionShape {
    pub fn of(action: &str) -> Self {
        match action.trim() {
            "get" => ActionShape::Get,
            "getAll" | "get_all" | "list" => ActionShape::GetAll,
            "create" => ActionShape::Create,
            "update" => ActionShape::Update,
            "delete" => ActionShape::Delete,
            _ => ActionShape::Passthrough,
        }
    }
}

/// The actions generated by a CRUD batch, in order.
pub const CRUD_ACTIONS: [&str; 5] = ["get", "getAll", "create", "update", "delete"];

/// `<action>_<entity>_usecase.dart`
pub struct UseCaseDart {
    pub component: Component,
    pub action: String,
}

impl UseCaseDart {
    pub fn new(component: Component, action: impl Into<String>) -> Self {
        let action = action.into();
        if ActionShape::of(&action) == ActionShape::Passthrough {
            warn!(
                "unknown use case action '{}': parameters are passed to the repository unchanged",
                action
            );
        }
        Self { component, action }
    }

    pub fn shape(&self) -> ActionShape {
        ActionShape::of(&self.action)
    }

    /// `GetOrder`
    fn stem(&self) -> String {
        format!(
            "{}{}",
            to_pascal_case(&self.action),
            self.component.entity.pascal
        )
    }

    /// `GetOrderUseCase`
    pub fn class_name(&self) -> String {
        format!("{}UseCase", self.stem())
    }

    fn params_name(&self) -> String {
        format!("{}Params", self.stem())
    }

    fn params_class(&self, field_type: &str, field: &str) -> String {
        let params = self.params_name();
        CodeBuilder::new()
            .block(&format!("class {} extends Equatable", params), |b| {
                b.line(&format!("const {}({{required this.{}}});", params, field))
                    .blank()
                    .line(&format!("final {} {};", field_type, field))
                    .blank()
                    .line("@override")
                    .line(&format!("List<Object?> get props => [{}];", field))
            })
            .build()
    }
}

impl GeneratedFile for UseCaseDart {
    fn path(&self) -> PathBuf {
        let c = &self.component;
        let name = format!("{}_{}", to_snake_case(&self.action), c.entity.snake);
        derive_path(&c.feature.raw, ComponentKind::UseCase, &name)
    }

    fn render(&self) -> String {
        let c = &self.component;
        let path = self.path();
        let entity = c.entity_type();
        let var = c.entity.var();
        let m = CrudMethods::of(c);
        let params = self.params_name();

        // (result type, params type, repository call, params class)
        let (result, params_ty, call, params_class) = match self.shape() {
            ActionShape::Get => (
                entity.clone(),
                params.clone(),
                format!("{}(params.id)", m.get),
                Some(self.params_class(c.id_type(), "id")),
            ),
            ActionShape::GetAll => (
                format!("List<{}>", entity),
                "NoParams".to_string(),
                format!("{}()", m.get_all),
                None,
            ),
            ActionShape::Create => (
                entity.clone(),
                params.clone(),
                format!("{}(params.{})", m.create, var),
                Some(self.params_class(&entity, &var)),
            ),
            ActionShape::Update => (
                entity.clone(),
                params.clone(),
                format!("{}(params.{})", m.update, var),
                Some(self.params_class(&entity, &var)),
            ),
            ActionShape::Delete => (
                "void".to_string(),
                params.clone(),
                format!("{}(params.id)", m.delete),
                Some(self.params_class(c.id_type(), "id")),
            ),
            ActionShape::Passthrough => (
                "void".to_string(),
                "Map<String, dynamic>".to_string(),
                format!(
                    "{}{}(params)",
                    to_camel_case(&self.action),
                    c.entity.pascal
                ),
                None,
            ),
        };
        let uses_entity = matches!(
            self.shape(),
            ActionShape::Get | ActionShape::GetAll | ActionShape::Create | ActionShape::Update
        );

        let class_name = self.class_name();
        let class = CodeBuilder::new()
            .block(
                &format!(
                    "class {} implements UseCase<{}, {}>",
                    class_name, result, params_ty
                ),
                |b| {
                    b.line(&format!("const {}(this.repository);", class_name))
                        .blank()
                        .line(&format!("final {} repository;", c.repository_type()))
                        .blank()
                        .line("@override")
                        .block(
                            &format!(
                                "Future<Either<Failure, {}>> call({} params)",
                                result, params_ty
                            ),
                            |b| b.line(&format!("return repository.{};", call)),
                        )
                },
            )
            .build();

        let needs_equatable = params_class.is_some();
        let mut file = DartFile::new()
            .import(Import::package("dartz/dartz.dart"))
            .import_if(needs_equatable, Import::package("equatable/equatable.dart"))
            .import(c.project(core_paths::FAILURES))
            .import(c.project(core_paths::USECASE))
            .import_if(
                uses_entity,
                c.local(&path, &c.entity_path(ComponentKind::Entity)),
            )
            .import(c.local(&path, &c.entity_path(ComponentKind::Repository)))
            .add(class);
        if let Some(params_class) = params_class {
            file = file.add(params_class);
        }
        file.render()
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{Config, ConfigOverrides};

    use super::*;
    use crate::fields::parse_fields;

    fn component(name: &str) -> Component {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            ..Default::default()
        });
        Component::new(&config, "shop", name)
    }

    #[test]
    fn test_entity() {
        let c = component("product").with_fields(parse_fields("title:String,price:double").unwrap());
        let out = EntityDart(c).render();

        assert!(out.starts_with("import 'package:equatable/equatable.dart';\n"));
        assert!(out.contains("class ProductEntity extends Equatable {"));
        assert!(out.contains("    required this.price,\n"));
        assert!(out.contains("  final double price;\n"));
        assert!(out.contains("    double? price,\n"));
        assert!(out.contains("      price: price ?? this.price,\n"));
        assert!(out.contains("List<Object?> get props => [id, title, price];"));
    }

    #[test]
    fn test_repository_contract() {
        let out = RepositoryDart(component("category")).render();

        assert!(out.contains("import 'package:shop_app/core/errors/failures.dart';"));
        assert!(out.contains("import '../entities/category_entity.dart';"));
        assert!(out.contains("Future<Either<Failure, List<CategoryEntity>>> getAllCategories();"));
        assert!(out.contains("Future<Either<Failure, CategoryEntity>> getCategory(String id);"));
        assert!(out.contains(
            "Future<Either<Failure, CategoryEntity>> updateCategory(CategoryEntity category);"
        ));
        assert!(out.contains("Future<Either<Failure, void>> deleteCategory(String id);"));
    }

    #[test]
    fn test_action_shapes() {
        assert_eq!(ActionShape::of("get"), ActionShape::Get);
        assert_eq!(ActionShape::of("getAll"), ActionShape::GetAll);
        assert_eq!(ActionShape::of("list"), ActionShape::GetAll);
        assert_eq!(ActionShape::of("delete"), ActionShape::Delete);
        assert_eq!(ActionShape::of("archive"), ActionShape::Passthrough);
    }

    #[test]
    fn test_get_usecase() {
        let usecase = UseCaseDart::new(component("order"), "get");
        let out = usecase.render();

        assert_eq!(
            usecase.path(),
            PathBuf::from("lib/features/shop/domain/usecases/get_order_usecase.dart")
        );
        assert!(out.contains("class GetOrderUseCase implements UseCase<OrderEntity, GetOrderParams> {"));
        assert!(out.contains("return repository.getOrder(params.id);"));
        assert!(out.contains("class GetOrderParams extends Equatable {"));
        assert!(out.contains("import '../entities/order_entity.dart';"));
    }

    #[test]
    fn test_get_all_and_list_share_shape() {
        let get_all = UseCaseDart::new(component("order"), "getAll");
        assert_eq!(
            get_all.path(),
            PathBuf::from("lib/features/shop/domain/usecases/get_all_order_usecase.dart")
        );
        let out = get_all.render();
        assert!(out.contains("UseCase<List<OrderEntity>, NoParams>"));
        assert!(out.contains("return repository.getAllOrders();"));
        assert!(!out.contains("equatable"));

        let list = UseCaseDart::new(component("order"), "list");
        assert_eq!(list.class_name(), "ListOrderUseCase");
        assert!(list.render().contains("return repository.getAllOrders();"));
    }

    #[test]
    fn test_create_update_delete() {
        let create = UseCaseDart::new(component("order"), "create").render();
        assert!(create.contains("return repository.createOrder(params.order);"));
        assert!(create.contains("final OrderEntity order;"));

        let update = UseCaseDart::new(component("order"), "update").render();
        assert!(update.contains("return repository.updateOrder(params.order);"));

        let delete = UseCaseDart::new(component("order"), "delete").render();
        assert!(delete.contains("UseCase<void, DeleteOrderParams>"));
        assert!(delete.contains("return repository.deleteOrder(params.id);"));
        assert!(!delete.contains("order_entity.dart"));
    }

    #[test]
    fn test_unknown_action_passes_params_through() {
        let out = UseCaseDart::new(component("order"), "archive").render();
        assert!(out.contains("class ArchiveOrderUseCase implements UseCase<void, Map<String, dynamic>> {"));
        assert!(out.contains("return repository.archiveOrder(params);"));
        assert!(!out.contains("Params extends Equatable"));
    }

    #[test]
    fn test_entity_override_names_the_use_case() {
        let c = component("featured").with_entity(Some("product"));
        let usecase = UseCaseDart::new(c, "getAll");
        assert_eq!(usecase.class_name(), "GetAllProductUseCase");
        assert_eq!(
            usecase.path(),
            PathBuf::from("lib/features/shop/domain/usecases/get_all_product_usecase.dart")
        );
        let out = usecase.render();
        assert!(out.contains("final ProductRepository repository;"));
        assert!(out.contains("return repository.getAllProducts();"));
    }
}
