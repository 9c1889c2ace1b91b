//! Project-wide files below `lib/core`, the entry points and tool configs.

use std::path::{Path, PathBuf};

use strata_config::Config;
use strata_core::{FileRules, GeneratedFile, to_title_case};

use super::{router, state::strategy_for};
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    paths::{core_paths, package_import, relative_import},
};

/// Relative import between two core paths.
fn local(from: &str, to: &str) -> Import {
    Import::new(relative_import(Path::new(from), Path::new(to)))
}

/// Human-readable application title (`Shop App`).
pub fn app_title(config: &Config) -> String {
    to_title_case(&config.project_name)
}

/// Every project-wide file, in write order.
pub fn core_files(config: &Config) -> Vec<Box<dyn GeneratedFile>> {
    let mut files: Vec<Box<dyn GeneratedFile>> = vec![
        Box::new(FailuresDart),
        Box::new(ExceptionsDart),
        Box::new(UseCaseBaseDart),
        Box::new(ApiClientDart {
            use_dio: config.use_dio_client,
        }),
        Box::new(ApiConstantsDart),
        Box::new(NetworkInfoDart),
        Box::new(LoggerDart(config.clone())),
        Box::new(AppThemeDart),
    ];
    files.extend(router::router_files(config));
    files.push(Box::new(AppDart(config.clone())));
    files.push(Box::new(MainDart(config.clone())));
    files.push(Box::new(AnalysisOptionsYaml));
    if config.l10n {
        files.push(Box::new(L10nYaml));
        files.push(Box::new(AppArb(config.clone())));
    }
    files.push(Box::new(WidgetTestDart(config.clone())));
    files
}

/// Directories of the core skeleton.
pub fn core_dirs(config: &Config) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = core_paths::DIRS.iter().map(PathBuf::from).collect();
    if config.l10n {
        dirs.push(PathBuf::from(core_paths::L10N_DIR));
    }
    dirs
}

/// `lib/core/errors/failures.dart`
pub struct FailuresDart;

impl GeneratedFile for FailuresDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::FAILURES)
    }

    fn render(&self) -> String {
        r#"import 'package:equatable/equatable.dart';

abstract class Failure extends Equatable {
  const Failure(this.message);

  final String message;

  @override
  List<Object?> get props => [message];
}

class ServerFailure extends Failure {
  const ServerFailure(super.message);
}

class NetworkFailure extends Failure {
  const NetworkFailure(super.message);
}

class CacheFailure extends Failure {
  const CacheFailure(super.message);
}
"#
        .to_string()
    }
}

/// `lib/core/errors/exceptions.dart`
pub struct ExceptionsDart;

impl GeneratedFile for ExceptionsDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::EXCEPTIONS)
    }

    fn render(&self) -> String {
        r#"class ServerException implements Exception {
  const ServerException([this.message = 'Server error', this.statusCode]);

  final String message;
  final int? statusCode;

  @override
  String toString() => 'ServerException($statusCode): $message';
}

class NetworkException implements Exception {
  const NetworkException([this.message = 'No internet connection']);

  final String message;

  @override
  String toString() => 'NetworkException: $message';
}

class CacheException implements Exception {
  const CacheException([this.message = 'Cache error']);

  final String message;

  @override
  String toString() => 'CacheException: $message';
}
"#
        .to_string()
    }
}

/// `lib/core/usecases/usecase.dart`: the base every use case implements.
pub struct UseCaseBaseDart;

impl GeneratedFile for UseCaseBaseDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::USECASE)
    }

    fn render(&self) -> String {
        let body = r#"abstract class UseCase<T, Params> {
  Future<Either<Failure, T>> call(Params params);
}

class NoParams extends Equatable {
  const NoParams();

  @override
  List<Object?> get props => [];
}"#;

        DartFile::new()
            .import(Import::package("dartz/dartz.dart"))
            .import(Import::package("equatable/equatable.dart"))
            .import(local(core_paths::USECASE, core_paths::FAILURES))
            .add(body)
            .render()
    }
}

/// `lib/core/network/api_client.dart` on top of `dio` or `http`.
pub struct ApiClientDart {
    pub use_dio: bool,
}

impl ApiClientDart {
    fn dio() -> &'static str {
        r#"class ApiClient {
  ApiClient({Dio? dio})
      : _dio = dio ??
            Dio(
              BaseOptions(
                baseUrl: ApiConstants.baseUrl,
                connectTimeout: ApiConstants.connectTimeout,
                receiveTimeout: ApiConstants.receiveTimeout,
                headers: {'Content-Type': 'application/json'},
              ),
            );

  final Dio _dio;

  Future<dynamic> get(String path, {Map<String, dynamic>? query}) =>
      _send(() => _dio.get<dynamic>(path, queryParameters: query));

  Future<dynamic> post(String path, {Object? data}) =>
      _send(() => _dio.post<dynamic>(path, data: data));

  Future<dynamic> put(String path, {Object? data}) =>
      _send(() => _dio.put<dynamic>(path, data: data));

  Future<dynamic> delete(String path) =>
      _send(() => _dio.delete<dynamic>(path));

  Future<dynamic> _send(Future<Response<dynamic>> Function() request) async {
    try {
      final response = await request();
      return response.data;
    } on DioException catch (e) {
      if (e.type == DioExceptionType.connectionError ||
          e.type == DioExceptionType.connectionTimeout) {
        throw NetworkException(e.message ?? 'Connection failed');
      }
      throw ServerException(
        e.response?.statusMessage ?? e.message ?? 'Request failed',
        e.response?.statusCode,
      );
    }
  }
}"#
    }

    fn http() -> &'static str {
        r#"class ApiClient {
  ApiClient({http.Client? client}) : _client = client ?? http.Client();

  final http.Client _client;

  static const Map<String, String> _headers = {
    'Content-Type': 'application/json',
  };

  Uri _uri(String path, [Map<String, dynamic>? query]) =>
      Uri.parse('${ApiConstants.baseUrl}$path').replace(
        queryParameters: query?.map((key, value) => MapEntry(key, '$value')),
      );

  Future<dynamic> get(String path, {Map<String, dynamic>? query}) =>
      _send(() => _client.get(_uri(path, query), headers: _headers));

  Future<dynamic> post(String path, {Object? data}) => _send(
        () => _client.post(_uri(path), headers: _headers, body: jsonEncode(data)),
      );

  Future<dynamic> put(String path, {Object? data}) => _send(
        () => _client.put(_uri(path), headers: _headers, body: jsonEncode(data)),
      );

  Future<dynamic> delete(String path) =>
      _send(() => _client.delete(_uri(path), headers: _headers));

  Future<dynamic> _send(Future<http.Response> Function() request) async {
    final http.Response response;
    try {
      response = await request().timeout(ApiConstants.receiveTimeout);
    } on http.ClientException catch (e) {
      throw NetworkException(e.message);
    } on TimeoutException {
      throw const NetworkException('Request timed out');
    }
    if (response.statusCode >= 400) {
      throw ServerException(
        response.reasonPhrase ?? 'Request failed',
        response.statusCode,
      );
    }
    return response.body.isEmpty ? null : jsonDecode(response.body);
  }
}"#
    }
}

impl GeneratedFile for ApiClientDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::API_CLIENT)
    }

    fn render(&self) -> String {
        let file = DartFile::new()
            .import(local(core_paths::API_CLIENT, core_paths::API_CONSTANTS))
            .import(local(core_paths::API_CLIENT, core_paths::EXCEPTIONS));
        if self.use_dio {
            file.import(Import::package("dio/dio.dart"))
                .add(Self::dio())
                .render()
        } else {
            file.import(Import::dart("async"))
                .import(Import::dart("convert"))
                .import(Import::package("http/http.dart").alias("http"))
                .add(Self::http())
                .render()
        }
    }
}

/// `lib/core/constants/api_constants.dart`
pub struct ApiConstantsDart;

impl GeneratedFile for ApiConstantsDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::API_CONSTANTS)
    }

    fn render(&self) -> String {
        r#"abstract final class ApiConstants {
  static const String baseUrl = 'https://api.example.com';
  static const Duration connectTimeout = Duration(seconds: 30);
  static const Duration receiveTimeout = Duration(seconds: 30);
}
"#
        .to_string()
    }
}

/// `lib/core/network/network_info.dart` backed by `connectivity_plus`.
pub struct NetworkInfoDart;

impl GeneratedFile for NetworkInfoDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::NETWORK_INFO)
    }

    fn render(&self) -> String {
        r#"import 'package:connectivity_plus/connectivity_plus.dart';

abstract class NetworkInfo {
  Future<bool> get isConnected;
}

class NetworkInfoImpl implements NetworkInfo {
  NetworkInfoImpl({Connectivity? connectivity})
      : _connectivity = connectivity ?? Connectivity();

  final Connectivity _connectivity;

  @override
  Future<bool> get isConnected async {
    final results = await _connectivity.checkConnectivity();
    return !results.contains(ConnectivityResult.none);
  }
}
"#
        .to_string()
    }
}

/// `lib/core/utils/logger.dart`
pub struct LoggerDart(pub Config);

impl GeneratedFile for LoggerDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::LOGGER)
    }

    fn render(&self) -> String {
        let name = self.0.package_name();
        let body = CodeBuilder::new()
            .block("abstract final class Log", |b| {
                b.line(&format!("static const String _name = '{}';", name))
                    .blank()
                    .line("static void debug(String message) =>")
                    .line("    developer.log(message, name: _name, level: 500);")
                    .blank()
                    .line("static void info(String message) =>")
                    .line("    developer.log(message, name: _name, level: 800);")
                    .blank()
                    .line("static void warning(String message) =>")
                    .line("    developer.log(message, name: _name, level: 900);")
                    .blank()
                    .line("static void error(String message, [Object? error, StackTrace? stackTrace]) =>")
                    .line("    developer.log(")
                    .line("      message,")
                    .line("      name: _name,")
                    .line("      level: 1000,")
                    .line("      error: error,")
                    .line("      stackTrace: stackTrace,")
                    .line("    );")
            })
            .build();

        DartFile::new()
            .import(Import::dart("developer").alias("developer"))
            .add(body)
            .render()
    }
}

/// `lib/core/theme/app_theme.dart`
pub struct AppThemeDart;

impl GeneratedFile for AppThemeDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::APP_THEME)
    }

    fn render(&self) -> String {
        r#"import 'package:flutter/material.dart';

abstract final class AppTheme {
  static const Color _seed = Colors.indigo;

  static ThemeData get light => ThemeData(
        colorScheme: ColorScheme.fromSeed(seedColor: _seed),
        useMaterial3: true,
      );

  static ThemeData get dark => ThemeData(
        colorScheme: ColorScheme.fromSeed(
          seedColor: _seed,
          brightness: Brightness.dark,
        ),
        useMaterial3: true,
      );
}
"#
        .to_string()
    }
}

/// `lib/app.dart`: the root `MaterialApp.router`.
pub struct AppDart(pub Config);

impl GeneratedFile for AppDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::APP)
    }

    fn render(&self) -> String {
        let config = &self.0;
        let router_config = if config.uses_auto_route() {
            "appRouter.config()"
        } else {
            "appRouter"
        };

        let body = CodeBuilder::new()
            .block("class App extends StatelessWidget", |b| {
                b.line("const App({super.key});")
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return MaterialApp.router(")
                            .indent()
                            .line(&format!("title: '{}',", app_title(config)))
                            .line("theme: AppTheme.light,")
                            .line("darkTheme: AppTheme.dark,")
                            .line(&format!("routerConfig: {},", router_config))
                            .when(config.l10n, |b| {
                                b.line("localizationsDelegates: AppLocalizations.localizationsDelegates,")
                                    .line("supportedLocales: AppLocalizations.supportedLocales,")
                            })
                            .line("debugShowCheckedModeBanner: false,")
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        DartFile::new()
            .import(Import::package("flutter/material.dart"))
            .import_if(
                config.l10n,
                Import::new(package_import(
                    config.package_name(),
                    Path::new(core_paths::L10N_DIR).join("app_localizations.dart").as_path(),
                )),
            )
            .import(local(core_paths::APP, core_paths::APP_ROUTER))
            .import(local(core_paths::APP, core_paths::APP_THEME))
            .add(body)
            .render()
    }
}

/// `lib/main.dart`
pub struct MainDart(pub Config);

impl GeneratedFile for MainDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::MAIN)
    }

    fn render(&self) -> String {
        let strategy = strategy_for(self.0.state_management);
        let body = CodeBuilder::new()
            .block("void main()", |b| {
                b.line("WidgetsFlutterBinding.ensureInitialized();")
                    .line(&format!("runApp(const {});", strategy.wrap_app("App()")))
            })
            .build();

        DartFile::new()
            .import(Import::package("flutter/material.dart"))
            .imports(strategy.main_imports())
            .import(local(core_paths::MAIN, core_paths::APP))
            .add(body)
            .render()
    }
}

/// `test/widget_test.dart`: replaces the counter test of `flutter create`,
/// which no longer compiles once `main.dart` is rewritten.
pub struct WidgetTestDart(pub Config);

impl GeneratedFile for WidgetTestDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::WIDGET_TEST)
    }

    fn render(&self) -> String {
        let config = &self.0;
        let strategy = strategy_for(config.state_management);
        let body = CodeBuilder::new()
            .block_with_close("void main() {", "}", |b| {
                b.block_with_close("testWidgets('app starts', (tester) async {", "});", |b| {
                    b.line(&format!(
                        "await tester.pumpWidget(const {});",
                        strategy.wrap_app("App()")
                    ))
                    .line("await tester.pump();")
                    .blank()
                    .line("expect(find.byType(App), findsOneWidget);")
                })
            })
            .build();

        DartFile::new()
            .import(Import::package("flutter_test/flutter_test.dart"))
            .imports(strategy.main_imports())
            .import(Import::new(package_import(
                config.package_name(),
                Path::new(core_paths::APP),
            )))
            .add(body)
            .render()
    }
}

/// `analysis_options.yaml`
pub struct AnalysisOptionsYaml;

impl GeneratedFile for AnalysisOptionsYaml {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::ANALYSIS_OPTIONS)
    }

    fn render(&self) -> String {
        r#"include: package:flutter_lints/flutter.yaml

analyzer:
  exclude:
    - "**/*.g.dart"
    - "**/*.freezed.dart"
    - "**/*.gr.dart"
  errors:
    invalid_annotation_target: ignore

linter:
  rules:
    prefer_const_constructors: true
    prefer_single_quotes: true
    require_trailing_commas: true
"#
        .to_string()
    }
}

/// `l10n.yaml`, kept when it already exists.
pub struct L10nYaml;

impl GeneratedFile for L10nYaml {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::L10N_YAML)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            "arb-dir: {dir}\ntemplate-arb-file: app_en.arb\noutput-localization-file: app_localizations.dart\noutput-dir: {dir}\nsynthetic-package: false\n",
            dir = core_paths::L10N_DIR
        )
    }
}

/// `lib/l10n/app_en.arb`, kept when it already exists.
pub struct AppArb(pub Config);

impl GeneratedFile for AppArb {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::L10N_ARB)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeBuilder::new()
            .block_with_close("{", "}", |b| {
                b.line("\"@@locale\": \"en\",")
                    .line(&format!("\"appTitle\": \"{}\",", app_title(&self.0)))
                    .block_with_close("\"@appTitle\": {", "}", |b| {
                        b.line("\"description\": \"The application title\"")
                    })
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{ConfigOverrides, Router, StateManagement};
    use strata_core::Overwrite;

    use super::*;

    fn config(overrides: ConfigOverrides) -> Config {
        Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            ..overrides
        })
    }

    fn paths(config: &Config) -> Vec<PathBuf> {
        core_files(config).iter().map(|f| f.path()).collect()
    }

    #[test]
    fn test_core_file_order() {
        let files = paths(&config(ConfigOverrides::default()));
        assert_eq!(files.first(), Some(&PathBuf::from(core_paths::FAILURES)));
        assert_eq!(files.last(), Some(&PathBuf::from(core_paths::WIDGET_TEST)));
        assert!(!files.contains(&PathBuf::from(core_paths::L10N_YAML)));

        let app = files.iter().position(|p| p == Path::new(core_paths::APP));
        let router = files.iter().position(|p| p == Path::new(core_paths::APP_ROUTER));
        assert!(router < app);
    }

    #[test]
    fn test_l10n_files_are_create_once() {
        let config = config(ConfigOverrides {
            l10n: Some(true),
            ..Default::default()
        });
        let files = core_files(&config);
        let arb = files
            .iter()
            .find(|f| f.path() == Path::new(core_paths::L10N_ARB))
            .unwrap();
        assert_eq!(arb.rules().overwrite, Overwrite::IfMissing);
        assert!(arb.render().contains("\"appTitle\": \"Shop App\","));
        assert!(core_dirs(&config).contains(&PathBuf::from("lib/l10n")));

        let app = AppDart(config).render();
        assert!(app.contains("import 'package:shop_app/l10n/app_localizations.dart';"));
        assert!(app.contains("localizationsDelegates: AppLocalizations.localizationsDelegates,"));
    }

    #[test]
    fn test_api_client_variants() {
        let dio = ApiClientDart { use_dio: true }.render();
        assert!(dio.contains("import 'package:dio/dio.dart';"));
        assert!(dio.contains("import '../constants/api_constants.dart';"));
        assert!(dio.contains("on DioException catch (e) {"));

        let http = ApiClientDart { use_dio: false }.render();
        assert!(http.starts_with("import 'dart:async';\nimport 'dart:convert';\n\n"));
        assert!(http.contains("import 'package:http/http.dart' as http;"));
        assert!(!http.contains("Dio"));
    }

    #[test]
    fn test_main_wraps_app_per_strategy() {
        let riverpod = MainDart(config(ConfigOverrides::default())).render();
        assert!(riverpod.contains("runApp(const ProviderScope(child: App()));"));
        assert!(riverpod.contains("import 'package:flutter_riverpod/flutter_riverpod.dart';"));

        let bloc = MainDart(config(ConfigOverrides {
            state_management: Some(StateManagement::Bloc),
            ..Default::default()
        }))
        .render();
        assert!(bloc.contains("runApp(const App());"));
        assert!(bloc.contains("import 'app.dart';"));
    }

    #[test]
    fn test_app_router_config() {
        let auto = AppDart(config(ConfigOverrides {
            router: Some(Router::AutoRoute),
            ..Default::default()
        }))
        .render();
        assert!(auto.contains("routerConfig: appRouter.config(),"));
        assert!(auto.contains("import 'core/router/app_router.dart';"));
    }

    #[test]
    fn test_widget_test_imports_app() {
        let out = WidgetTestDart(config(ConfigOverrides::default())).render();
        assert!(out.contains("import 'package:shop_app/app.dart';"));
        assert!(out.contains("await tester.pumpWidget(const ProviderScope(child: App()));"));
    }
}
