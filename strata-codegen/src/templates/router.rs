//! Route table, landing screen and router configuration.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use strata_config::Config;
use strata_core::GeneratedFile;

use super::state::route_path;
use crate::{
    builder::{CodeBuilder, DartFile, Import},
    names::Names,
    paths::{ComponentKind, core_paths, derive_path, package_import, relative_import},
};

/// One screen reachable through the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Constant name in `Routes`
    pub name: String,
    pub title: String,
    pub class_name: String,
    pub path: String,
    /// Screen file, relative to the project root
    pub file: PathBuf,
}

impl RouteEntry {
    fn feature(feature: &Names) -> Self {
        let class_name = format!("{}Screen", feature.pascal);
        Self {
            name: feature.var(),
            title: feature.title.clone(),
            path: route_path(&class_name),
            class_name,
            file: derive_path(&feature.raw, ComponentKind::Screen, &feature.raw),
        }
    }

    /// `ProductRoute` for `ProductScreen` (auto_route naming).
    fn route_class(&self) -> String {
        let stem = self
            .class_name
            .strip_suffix("Screen")
            .unwrap_or(&self.class_name);
        format!("{}Route", stem)
    }
}

fn is_home(feature: &Names) -> bool {
    feature.pascal == "Home"
}

/// The home route followed by one route per recorded feature.
///
/// A feature named `home` takes over the `/` route instead of the built-in
/// landing screen.
pub fn routes(config: &Config) -> Vec<RouteEntry> {
    let mut home = RouteEntry {
        name: "home".to_string(),
        title: "Home".to_string(),
        class_name: "HomeScreen".to_string(),
        path: "/".to_string(),
        file: PathBuf::from(core_paths::HOME_SCREEN),
    };
    let mut seen = BTreeSet::new();
    let mut features = Vec::new();

    for feature in config.features.iter().map(|f| Names::new(f)) {
        if !seen.insert(feature.snake.clone()) {
            continue;
        }
        if is_home(&feature) {
            home.file = RouteEntry::feature(&feature).file;
        } else {
            features.push(RouteEntry::feature(&feature));
        }
    }

    std::iter::once(home).chain(features).collect()
}

/// Routing files in write order.
pub fn router_files(config: &Config) -> Vec<Box<dyn GeneratedFile>> {
    let routes = routes(config);
    let mut files: Vec<Box<dyn GeneratedFile>> = vec![Box::new(RoutesDart {
        routes: routes.clone(),
    })];
    if routes[0].file == Path::new(core_paths::HOME_SCREEN) {
        files.push(Box::new(HomeScreenDart {
            config: config.clone(),
            routes: routes.clone(),
        }));
    }
    files.push(Box::new(AppRouterDart {
        config: config.clone(),
        routes,
    }));
    files
}

/// Import of a screen file as seen from a file below `lib/core/router`.
fn screen_import(config: &Config, from: &str, file: &Path) -> Import {
    if file.starts_with("lib/core") {
        Import::new(relative_import(Path::new(from), file))
    } else {
        Import::new(package_import(config.package_name(), file))
    }
}

/// `lib/core/router/routes.dart`
pub struct RoutesDart {
    pub routes: Vec<RouteEntry>,
}

impl GeneratedFile for RoutesDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::ROUTES)
    }

    fn render(&self) -> String {
        CodeBuilder::new()
            .block("abstract final class Routes", |b| {
                b.each(&self.routes, |b, route| {
                    b.line(&format!(
                        "static const String {} = '{}';",
                        route.name, route.path
                    ))
                })
            })
            .build()
    }
}

/// `lib/core/router/home_screen.dart`: links to every feature screen.
pub struct HomeScreenDart {
    pub config: Config,
    pub routes: Vec<RouteEntry>,
}

impl GeneratedFile for HomeScreenDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::HOME_SCREEN)
    }

    fn render(&self) -> String {
        let auto_route = self.config.uses_auto_route();
        let navigate = if auto_route {
            "context.router.pushPath"
        } else {
            "context.push"
        };
        let title = super::project::app_title(&self.config);

        let class = CodeBuilder::new()
            .when(auto_route, |b| b.line("@RoutePage()"))
            .block("class HomeScreen extends StatelessWidget", |b| {
                b.line("const HomeScreen({super.key});")
                    .blank()
                    .line("@override")
                    .block("Widget build(BuildContext context)", |b| {
                        b.line("return Scaffold(")
                            .indent()
                            .line(&format!("appBar: AppBar(title: const Text('{}')),", title))
                            .line("body: ListView(")
                            .indent()
                            .line("children: [")
                            .indent()
                            .each(self.routes.iter().skip(1), |b, route| {
                                b.line("ListTile(")
                                    .indent()
                                    .line(&format!("title: const Text('{}'),", route.title))
                                    .line("trailing: const Icon(Icons.chevron_right),")
                                    .line(&format!(
                                        "onTap: () => {}(Routes.{}),",
                                        navigate, route.name
                                    ))
                                    .dedent()
                                    .line("),")
                            })
                            .dedent()
                            .line("],")
                            .dedent()
                            .line("),")
                            .dedent()
                            .line(");")
                    })
            })
            .build();

        let router_package = if auto_route {
            Import::package("auto_route/auto_route.dart")
        } else {
            Import::package("go_router/go_router.dart")
        };
        let has_links = self.routes.len() > 1;
        DartFile::new()
            .import(Import::package("flutter/material.dart"))
            .import_if(has_links || auto_route, router_package)
            .import_if(
                has_links,
                Import::new(relative_import(
                    Path::new(core_paths::HOME_SCREEN),
                    Path::new(core_paths::ROUTES),
                )),
            )
            .add(class)
            .render()
    }
}

/// `lib/core/router/app_router.dart` for `go_router` or `auto_route`.
pub struct AppRouterDart {
    pub config: Config,
    pub routes: Vec<RouteEntry>,
}

impl AppRouterDart {
    fn go_router(&self) -> String {
        CodeBuilder::new()
            .line("final appRouter = GoRouter(")
            .indent()
            .line("initialLocation: Routes.home,")
            .line("routes: [")
            .indent()
            .each(&self.routes, |b, route| {
                b.line("GoRoute(")
                    .indent()
                    .line(&format!("path: Routes.{},", route.name))
                    .line(&format!(
                        "builder: (context, state) => const {}(),",
                        route.class_name
                    ))
                    .dedent()
                    .line("),")
            })
            .dedent()
            .line("],")
            .dedent()
            .line(");")
            .build()
    }

    fn auto_route(&self) -> String {
        CodeBuilder::new()
            .line("@AutoRouterConfig(replaceInRouteName: 'Screen,Route')")
            .block("class AppRouter extends RootStackRouter", |b| {
                b.line("@override")
                    .line("List<AutoRoute> get routes => [")
                    .indent()
                    .indent()
                    .each(self.routes.iter().enumerate(), |b, (i, route)| {
                        let initial = if i == 0 { ", initial: true" } else { "" };
                        b.line(&format!(
                            "AutoRoute(page: {}.page, path: Routes.{}{}),",
                            route.route_class(),
                            route.name,
                            initial
                        ))
                    })
                    .dedent()
                    .dedent()
                    .line("];")
            })
            .blank()
            .line("final appRouter = AppRouter();")
            .build()
    }
}

impl GeneratedFile for AppRouterDart {
    fn path(&self) -> PathBuf {
        PathBuf::from(core_paths::APP_ROUTER)
    }

    fn render(&self) -> String {
        let screens = self
            .routes
            .iter()
            .map(|route| screen_import(&self.config, core_paths::APP_ROUTER, &route.file));
        let routes_import = Import::new(relative_import(
            Path::new(core_paths::APP_ROUTER),
            Path::new(core_paths::ROUTES),
        ));

        if self.config.uses_auto_route() {
            DartFile::new()
                .import(Import::package("auto_route/auto_route.dart"))
                .imports(screens)
                .import(routes_import)
                .part("app_router.gr.dart")
                .add(self.auto_route())
                .render()
        } else {
            DartFile::new()
                .import(Import::package("go_router/go_router.dart"))
                .imports(screens)
                .import(routes_import)
                .add(self.go_router())
                .render()
        }
    }
}

#[cfg(test)]
mod tests {
    use strata_config::{ConfigOverrides, Router};

    use super::*;

    fn config(router: Router, features: &[&str]) -> Config {
        let mut config = Config::from_args(&ConfigOverrides {
            project_name: Some("shop_app".into()),
            router: Some(router),
            ..Default::default()
        });
        for feature in features {
            config = config.with_feature(*feature);
        }
        config
    }

    #[test]
    fn test_routes_skip_duplicate_features() {
        let routes = routes(&config(Router::GoRouter, &["product", "order_item", "product"]));
        let names: Vec<_> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["home", "product", "orderItem"]);
        assert_eq!(routes[2].path, "/order-item");
        assert_eq!(
            routes[2].file,
            PathBuf::from("lib/features/order_item/presentation/screens/order_item_screen.dart")
        );
    }

    #[test]
    fn test_home_feature_replaces_landing_screen() {
        let config = config(Router::GoRouter, &["home", "cart"]);
        let files: Vec<_> = router_files(&config).iter().map(|f| f.path()).collect();
        assert!(!files.contains(&PathBuf::from(core_paths::HOME_SCREEN)));

        let routes = routes(&config);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/");
        assert!(routes[0].file.starts_with("lib/features/home"));
    }

    #[test]
    fn test_go_router() {
        let config = config(Router::GoRouter, &["product"]);
        let out = AppRouterDart {
            routes: routes(&config),
            config,
        }
        .render();
        assert!(out.contains("import 'package:go_router/go_router.dart';"));
        assert!(out.contains(
            "import 'package:shop_app/features/product/presentation/screens/product_screen.dart';"
        ));
        assert!(out.contains("import 'home_screen.dart';"));
        assert!(out.contains("      path: Routes.product,\n      builder: (context, state) => const ProductScreen(),"));
    }

    #[test]
    fn test_auto_route() {
        let config = config(Router::AutoRoute, &["product"]);
        let out = AppRouterDart {
            routes: routes(&config),
            config: config.clone(),
        }
        .render();
        assert!(out.contains("part 'app_router.gr.dart';"));
        assert!(out.contains("AutoRoute(page: HomeRoute.page, path: Routes.home, initial: true),"));
        assert!(out.contains("AutoRoute(page: ProductRoute.page, path: Routes.product),"));

        let home = HomeScreenDart {
            routes: routes(&config),
            config,
        }
        .render();
        assert!(home.contains("@RoutePage()\nclass HomeScreen extends StatelessWidget {"));
        assert!(home.contains("onTap: () => context.router.pushPath(Routes.product),"));
    }

    #[test]
    fn test_routes_file() {
        let out = RoutesDart {
            routes: routes(&config(Router::GoRouter, &["cart"])),
        }
        .render();
        assert_eq!(
            out,
            "abstract final class Routes {\n  static const String home = '/';\n  static const String cart = '/cart';\n}\n"
        );
    }
}
