//! Data layer: models, repository implementations and data sources.

use std::path::PathBuf;

use strata_core::{GeneratedFile, to_kebab_case};

use crate::{
    builder::{CodeBuilder, DartFile, Import},
    component::Component,
    paths::{ComponentKind, core_paths},
    templates::domain::CrudMethods,
};

/// `<name>_model.dart`: JSON-aware counterpart of the entity.
pub struct ModelDart(pub Component);

impl ModelDart {
    fn freezed(&self) -> String {
        let c = &self.0;
        let model = c.model_type();
        let entity = c.entity_type();

        CodeBuilder::new()
            .line("@freezed")
            .block(&format!("abstract class {0} with _${0}", model), |b| {
                b.line(&format!("const {}._();", model))
                    .blank()
                    .line(&format!("const factory {}({{", model))
                    .indent()
                    .each(&c.fields, |b, f| {
                        let key = if f.json_key != f.name {
                            format!("@JsonKey(name: '{}') ", f.json_key)
                        } else {
                            String::new()
                        };
                        b.line(&format!("{}required {} {},", key, f.ty, f.name))
                    })
                    .dedent()
                    .line(&format!("}}) = _{};", model))
                    .blank()
                    .line(&format!(
                        "factory {}.fromJson(Map<String, dynamic> json) =>",
                        model
                    ))
                    .line(&format!("    _${}FromJson(json);", model))
                    .blank()
                    .line(&format!(
                        "factory {}.fromEntity({} entity) => {}(",
                        model, entity, model
                    ))
                    .indent()
                    .indent()
                    .each(&c.fields, |b, f| b.line(&format!("{0}: entity.{0},", f.name)))
                    .dedent()
                    .line(");")
                    .dedent()
                    .blank()
                    .line(&format!("{} toEntity() => {}(", entity, entity))
                    .indent()
                    .indent()
                    .each(&c.fields, |b, f| b.line(&format!("{0}: {0},", f.name)))
                    .dedent()
                    .line(");")
                    .dedent()
            })
            .build()
    }

    fn plain(&self) -> String {
        let c = &self.0;
        let model = c.model_type();
        let entity = c.entity_type();

        CodeBuilder::new()
            .block(&format!("class {}", model), |b| {
                b.line(&format!("const {}({{", model))
                    .indent()
                    .each(&c.fields, |b, f| b.line(&format!("required this.{},", f.name)))
                    .dedent()
                    .line("});")
                    .blank()
                    .block(
                        &format!("factory {}.fromJson(Map<String, dynamic> json)", model),
                        |b| {
                            b.line(&format!("return {}(", model))
                                .indent()
                                .each(&c.fields, |b, f| {
                                    b.line(&format!("{}: {},", f.name, f.from_json_expr()))
                                })
                                .dedent()
                                .line(");")
                        },
                    )
                    .blank()
                    .block(
                        &format!("factory {}.fromEntity({} entity)", model, entity),
                        |b| {
                            b.line(&format!("return {}(", model))
                                .indent()
                                .each(&c.fields, |b, f| {
                                    b.line(&format!("{0}: entity.{0},", f.name))
                                })
                                .dedent()
                                .line(");")
                        },
                    )
                    .blank()
                    .each(&c.fields, |b, f| b.line(&format!("final {} {};", f.ty, f.name)))
                    .blank()
                    .block("Map<String, dynamic> toJson()", |b| {
                        b.line("return {")
                            .indent()
                            .each(&c.fields, |b, f| {
                                b.line(&format!("'{}': {},", f.json_key, f.to_json_expr()))
                            })
                            .dedent()
                            .line("};")
                    })
                    .blank()
                    .block(&format!("{} toEntity()", entity), |b| {
                        b.line(&format!("return {}(", entity))
                            .indent()
                            .each(&c.fields, |b, f| b.line(&format!("{0}: {0},", f.name)))
                            .dedent()
                            .line(");")
                    })
            })
            .build()
    }
}

impl GeneratedFile for ModelDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::Model)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let entity_import = c.local(&path, &c.entity_path(ComponentKind::Entity));
        let stem = format!("{}_model", c.entity.snake);

        if c.config.use_freezed {
            DartFile::new()
                .import(Import::package("freezed_annotation/freezed_annotation.dart"))
                .import(entity_import)
                .part(format!("{}.freezed.dart", stem))
                .part(format!("{}.g.dart", stem))
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

/// `<name>_remote_datasource.dart`: REST calls through the core `ApiClient`.
pub struct RemoteDataSourceDart(pub Component);

impl GeneratedFile for RemoteDataSourceDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::RemoteDataSource)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let model = c.model_type();
        let var = c.entity.var();
        let id = c.id_type();
        let m = CrudMethods::of(c);
        let contract = format!("{}RemoteDataSource", c.entity.pascal);

        let interface = CodeBuilder::new()
            .block(&format!("abstract class {}", contract), |b| {
                b.line(&format!("Future<List<{}>> {}();", model, m.get_all))
                    .blank()
                    .line(&format!("Future<{}> {}({} id);", model, m.get, id))
                    .blank()
                    .line(&format!("Future<{0}> {1}({0} {2});", model, m.create, var))
                    .blank()
                    .line(&format!("Future<{0}> {1}({0} {2});", model, m.update, var))
                    .blank()
                    .line(&format!("Future<void> {}({} id);", m.delete, id))
            })
            .build();

        let implementation = CodeBuilder::new()
            .block(
                &format!("class {0}Impl implements {0}", contract),
                |b| {
                    b.line(&format!("{}Impl({{required this.client}});", contract))
                        .blank()
                        .line("final ApiClient client;")
                        .blank()
                        .line(&format!(
                            "static const String _path = '/{}';",
                            to_kebab_case(&c.entity.plural_camel)
                        ))
                        .blank()
                        .line("@override")
                        .block(&format!("Future<List<{}>> {}() async", model, m.get_all), |b| {
                            b.line("final data = await client.get(_path) as List<dynamic>;")
                                .line("return data")
                                .line(&format!(
                                    "    .map((json) => {}.fromJson(json as Map<String, dynamic>))",
                                    model
                                ))
                                .line("    .toList();")
                        })
                        .blank()
                        .line("@override")
                        .block(&format!("Future<{}> {}({} id) async", model, m.get, id), |b| {
                            b.line("final data = await client.get('$_path/$id');")
                                .line(&format!(
                                    "return {}.fromJson(data as Map<String, dynamic>);",
                                    model
                                ))
                        })
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<{0}> {1}({0} {2}) async", model, m.create, var),
                            |b| {
                                b.line(&format!(
                                    "final data = await client.post(_path, data: {}.toJson());",
                                    var
                                ))
                                .line(&format!(
                                    "return {}.fromJson(data as Map<String, dynamic>);",
                                    model
                                ))
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<{0}> {1}({0} {2}) async", model, m.update, var),
                            |b| {
                                b.line(&format!(
                                    "final data = await client.put('$_path/${{{0}.id}}', data: {0}.toJson());",
                                    var
                                ))
                                .line(&format!(
                                    "return {}.fromJson(data as Map<String, dynamic>);",
                                    model
                                ))
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(&format!("Future<void> {}({} id) async", m.delete, id), |b| {
                            b.line("await client.delete('$_path/$id');")
                        })
                },
            )
            .build();

        DartFile::new()
            .import(c.project(core_paths::API_CLIENT))
            .import(c.local(&path, &c.entity_path(ComponentKind::Model)))
            .add(interface)
            .add(implementation)
            .render()
    }
}

/// `<name>_local_datasource.dart`: an in-memory cache stub to replace with
/// real persistence.
pub struct LocalDataSourceDart(pub Component);

impl GeneratedFile for LocalDataSourceDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::LocalDataSource)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let model = c.model_type();
        let plural = &c.entity.plural_pascal;
        let contract = format!("{}LocalDataSource", c.entity.pascal);

        let interface = CodeBuilder::new()
            .block(&format!("abstract class {}", contract), |b| {
                b.line(&format!("Future<List<{}>> getCached{}();", model, plural))
                    .blank()
                    .line(&format!(
                        "Future<void> cache{}(List<{}> items);",
                        plural, model
                    ))
                    .blank()
                    .line("Future<void> clear();")
            })
            .build();

        let implementation = CodeBuilder::new()
            .block(
                &format!("class {0}Impl implements {0}", contract),
                |b| {
                    b.line(&format!("final List<{}> _cache = [];", model))
                        .blank()
                        .line("@override")
                        .line(&format!(
                            "Future<List<{}>> getCached{}() async => List.unmodifiable(_cache);",
                            model, plural
                        ))
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<void> cache{}(List<{}> items) async", plural, model),
                            |b| b.line("_cache").line("  ..clear()").line("  ..addAll(items);"),
                        )
                        .blank()
                        .line("@override")
                        .line("Future<void> clear() async => _cache.clear();")
                },
            )
            .build();

        DartFile::new()
            .import(c.local(&path, &c.entity_path(ComponentKind::Model)))
            .add(interface)
            .add(implementation)
            .render()
    }
}

/// `<name>_repository_impl.dart`: maps data-source exceptions to failures.
pub struct RepositoryImplDart(pub Component);

impl GeneratedFile for RepositoryImplDart {
    fn path(&self) -> PathBuf {
        self.0.entity_path(ComponentKind::RepositoryImpl)
    }

    fn render(&self) -> String {
        let c = &self.0;
        let path = self.path();
        let entity = c.entity_type();
        let model = c.model_type();
        let var = c.entity.var();
        let id = c.id_type();
        let repository = c.repository_type();
        let remote = format!("{}RemoteDataSource", c.entity.pascal);
        let m = CrudMethods::of(c);

        let class = CodeBuilder::new()
            .block(
                &format!("class {0}Impl implements {0}", repository),
                |b| {
                    b.line(&format!("{}Impl({{required this.remoteDataSource}});", repository))
                        .blank()
                        .line(&format!("final {} remoteDataSource;", remote))
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<Either<Failure, List<{}>>> {}()", entity, m.get_all),
                            |b| {
                                b.line("return _guard(() async {")
                                    .indent()
                                    .line(&format!(
                                        "final models = await remoteDataSource.{}();",
                                        m.get_all
                                    ))
                                    .line("return models.map((model) => model.toEntity()).toList();")
                                    .dedent()
                                    .line("});")
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<Either<Failure, {}>> {}({} id)", entity, m.get, id),
                            |b| {
                                b.line(&format!(
                                    "return _guard(() async => (await remoteDataSource.{}(id)).toEntity());",
                                    m.get
                                ))
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<Either<Failure, {0}>> {1}({0} {2})", entity, m.create, var),
                            |b| {
                                b.line("return _guard(() async {")
                                    .indent()
                                    .line(&format!(
                                        "final model = await remoteDataSource.{}({}.fromEntity({}));",
                                        m.create, model, var
                                    ))
                                    .line("return model.toEntity();")
                                    .dedent()
                                    .line("});")
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<Either<Failure, {0}>> {1}({0} {2})", entity, m.update, var),
                            |b| {
                                b.line("return _guard(() async {")
                                    .indent()
                                    .line(&format!(
                                        "final model = await remoteDataSource.{}({}.fromEntity({}));",
                                        m.update, model, var
                                    ))
                                    .line("return model.toEntity();")
                                    .dedent()
                                    .line("});")
                            },
                        )
                        .blank()
                        .line("@override")
                        .block(
                            &format!("Future<Either<Failure, void>> {}({} id)", m.delete, id),
                            |b| b.line(&format!("return _guard(() => remoteDataSource.{}(id));", m.delete)),
                        )
                        .blank()
                        .block(
                            "Future<Either<Failure, T>> _guard<T>(Future<T> Function() action) async",
                            |b| {
                                b.lines(
                                    "try {\n  return Right(await action());\n} on ServerException catch (e) {\n  return Left(ServerFailure(e.message));\n} on NetworkException catch (e) {\n  return Left(NetworkFailure(e.message));\n}",
                                )
                            },
                        )
                },
            )
            .build();

        DartFile::new()
            .import(Import::package("dartz/dartz.dart"))
            .import(c.project(core_paths::EXCEPTIONS))
            .import(c.project(core_paths::FAILURES))
            .import(c.local(&path, &c.entity_path(ComponentKind::Entity)))
            .import(c.local(&path, &c.entity_path(ComponentKind::Repository)))
            .import(c.local(&path, &c.entity_path(ComponentKind::RemoteDataSource)))
            .import(c.local(&path, &c.entity_path(ComponentKind::Model)))
            .add(class)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{Config, ConfigOverrides};

    use super::*;
    use crate::fields::parse_fields;

    fn component(freezed: bool) -> Component {
        let config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            use_freezed: Some(freezed),
            ..Default::default()
        });
        Component::feature(&config, "product")
            .with_fields(parse_fields("name:String,price:double,created_at:DateTime").unwrap())
    }

    #[test]
    fn test_freezed_model() {
        let out = ModelDart(component(true)).render();
        assert!(out.contains("part 'product_model.freezed.dart';\npart 'product_model.g.dart';"));
        assert!(out.contains("abstract class ProductModel with _$ProductModel {"));
        assert!(out.contains("    @JsonKey(name: 'created_at') required DateTime createdAt,"));
        assert!(out.contains("  }) = _ProductModel;"));
        assert!(out.contains("_$ProductModelFromJson(json);"));
        assert!(out.contains("ProductEntity toEntity() => ProductEntity("));
    }

    #[test]
    fn test_plain_model() {
        let out = ModelDart(component(false)).render();
        assert!(!out.contains("freezed"));
        assert!(out.contains("class ProductModel {"));
        assert!(out.contains("price: (json['price'] as num).toDouble(),"));
        assert!(out.contains("'created_at': createdAt.toIso8601String(),"));
        assert!(out.contains("import '../../domain/entities/product_entity.dart';"));
    }

    #[test]
    fn test_remote_data_source() {
        let out = RemoteDataSourceDart(component(true)).render();
        assert!(out.contains("import 'package:shop_app/core/network/api_client.dart';"));
        assert!(out.contains("abstract class ProductRemoteDataSource {"));
        assert!(out.contains("class ProductRemoteDataSourceImpl implements ProductRemoteDataSource {"));
        assert!(out.contains("static const String _path = '/products';"));
        assert!(out.contains("client.put('$_path/${product.id}', data: product.toJson());"));
    }

    #[test]
    fn test_local_data_source() {
        let out = LocalDataSourceDart(component(true)).render();
        assert!(out.contains("Future<List<ProductModel>> getCachedProducts() async"));
        assert!(out.contains("Future<void> cacheProducts(List<ProductModel> items) async {"));
    }

    #[test]
    fn test_repository_impl() {
        let out = RepositoryImplDart(component(true)).render();
        assert!(out.contains("class ProductRepositoryImpl implements ProductRepository {"));
        assert!(out.contains("final ProductRemoteDataSource remoteDataSource;"));
        assert!(out.contains("remoteDataSource.createProduct(ProductModel.fromEntity(product));"));
        assert!(out.contains("on ServerException catch (e) {"));
        assert!(out.contains("import '../datasources/product_remote_datasource.dart';"));
    }
}
