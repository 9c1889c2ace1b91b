//! Deterministic paths for generated files.
//!
//! Every path is relative to the project root and uses the fixed layered
//! layout `lib/features/<feature>/<layer>/<subdir>/<name>_<suffix>.dart`.

use std::path::{Component as PathPart, Path, PathBuf};

use strata_config::StateManagement;
use strata_core::to_snake_case;

pub const LIB_DIR: &str = "lib";
pub const FEATURES_DIR: &str = "lib/features";

/// Non-feature paths, relative to the project root.
pub mod core_paths {
    pub const FAILURES: &str = "lib/core/errors/failures.dart";
    pub const EXCEPTIONS: &str = "lib/core/errors/exceptions.dart";
    pub const USECASE: &str = "lib/core/usecases/usecase.dart";
    pub const API_CLIENT: &str = "lib/core/network/api_client.dart";
    pub const NETWORK_INFO: &str = "lib/core/network/network_info.dart";
    pub const API_CONSTANTS: &str = "lib/core/constants/api_constants.dart";
    pub const APP_ROUTER: &str = "lib/core/router/app_router.dart";
    pub const ROUTES: &str = "lib/core/router/routes.dart";
    pub const HOME_SCREEN: &str = "lib/core/router/home_screen.dart";
    pub const APP_THEME: &str = "lib/core/theme/app_theme.dart";
    pub const LOGGER: &str = "lib/core/utils/logger.dart";
    pub const APP: &str = "lib/app.dart";
    pub const MAIN: &str = "lib/main.dart";
    pub const L10N_YAML: &str = "l10n.yaml";
    pub const L10N_ARB: &str = "lib/l10n/app_en.arb";
    pub const L10N_DIR: &str = "lib/l10n";
    pub const ANALYSIS_OPTIONS: &str = "analysis_options.yaml";
    pub const WIDGET_TEST: &str = "test/widget_test.dart";

    /// Directories created before any core file is written.
    pub const DIRS: &[&str] = &[
        "lib/core/errors",
        "lib/core/usecases",
        "lib/core/network",
        "lib/core/constants",
        "lib/core/router",
        "lib/core/theme",
        "lib/core/utils",
        super::FEATURES_DIR,
    ];
}

/// Architecture layer of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Domain,
    Data,
    Presentation,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Data => "data",
            Layer::Presentation => "presentation",
        }
    }
}

/// Every kind of feature-scoped file a generator can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Entity,
    Repository,
    UseCase,
    Model,
    RepositoryImpl,
    RemoteDataSource,
    LocalDataSource,
    Screen,
    Widget,
    Card,
    RiverpodProvider,
    RiverpodState,
    Notifier,
    Bloc,
    BlocEvent,
    BlocState,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 16] = [
        Self::Entity,
        Self::Repository,
        Self::UseCase,
        Self::Model,
        Self::RepositoryImpl,
        Self::RemoteDataSource,
        Self::LocalDataSource,
        Self::Screen,
        Self::Widget,
        Self::Card,
        Self::RiverpodProvider,
        Self::RiverpodState,
        Self::Notifier,
        Self::Bloc,
        Self::BlocEvent,
        Self::BlocState,
    ];

    /// `(layer, subdir, suffix)` for this kind.
    pub fn location(&self) -> (Layer, &'static str, &'static str) {
        use ComponentKind::*;
        use Layer::*;

        match self {
            Entity => (Domain, "entities", "entity"),
            Repository => (Domain, "repositories", "repository"),
            UseCase => (Domain, "usecases", "usecase"),
            Model => (Data, "models", "model"),
            RepositoryImpl => (Data, "repositories", "repository_impl"),
            RemoteDataSource => (Data, "datasources", "remote_datasource"),
            LocalDataSource => (Data, "datasources", "local_datasource"),
            Screen => (Presentation, "screens", "screen"),
            Widget => (Presentation, "widgets", "widget"),
            Card => (Presentation, "widgets", "card"),
            RiverpodProvider => (Presentation, "providers", "provider"),
            RiverpodState => (Presentation, "providers", "state"),
            Notifier => (Presentation, "providers", "notifier"),
            Bloc => (Presentation, "bloc", "bloc"),
            BlocEvent => (Presentation, "bloc", "event"),
            BlocState => (Presentation, "bloc", "state"),
        }
    }

    pub fn layer(&self) -> Layer {
        self.location().0
    }
}

/// `lib/features/<feature>`
pub fn feature_dir(feature: &str) -> PathBuf {
    Path::new(FEATURES_DIR).join(to_snake_case(feature))
}

/// Path of one feature-scoped file.
pub fn derive_path(feature: &str, kind: ComponentKind, name: &str) -> PathBuf {
    let (layer, subdir, suffix) = kind.location();
    feature_dir(feature)
        .join(layer.as_str())
        .join(subdir)
        .join(format!("{}_{}.dart", to_snake_case(name), suffix))
}

/// Directory below `presentation/` holding state-management files.
pub fn state_dir(state: StateManagement) -> &'static str {
    match state {
        StateManagement::Bloc => "bloc",
        StateManagement::Riverpod | StateManagement::Provider => "providers",
    }
}

/// Directories making up an empty feature.
pub fn feature_skeleton(feature: &str, state: StateManagement) -> Vec<PathBuf> {
    let root = feature_dir(feature);
    [
        "domain/entities",
        "domain/repositories",
        "domain/usecases",
        "data/models",
        "data/repositories",
        "data/datasources",
        "presentation/screens",
        "presentation/widgets",
    ]
    .iter()
    .map(|dir| root.join(dir))
    .chain(std::iter::once(
        root.join("presentation").join(state_dir(state)),
    ))
    .collect()
}

/// Render a relative path with forward slashes.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|part| match part {
            PathPart::Normal(s) => Some(s.to_string_lossy().into_owned()),
            PathPart::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Import string for `to` as seen from the file at `from`.
///
/// ```
/// use std::path::Path;
/// use strata_codegen::paths::relative_import;
///
/// let from = Path::new("lib/features/shop/data/models/item_model.dart");
/// let to = Path::new("lib/features/shop/domain/entities/item_entity.dart");
/// assert_eq!(relative_import(from, to), "../../domain/entities/item_entity.dart");
/// ```
pub fn relative_import(from: &Path, to: &Path) -> String {
    let from_dir: Vec<_> = from
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let target: Vec<_> = to.components().collect();

    let common = from_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from_dir.len() - common];
    parts.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

/// `package:<package>/...` import for a file below `lib/`.
pub fn package_import(package: &str, path: &Path) -> String {
    let inner = path.strip_prefix(LIB_DIR).unwrap_or(path);
    format!("package:{}/{}", package, to_slash(inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_path_table() {
        assert_eq!(
            derive_path("product", ComponentKind::Entity, "product"),
            PathBuf::from("lib/features/product/domain/entities/product_entity.dart")
        );
        assert_eq!(
            derive_path("UserProfile", ComponentKind::RepositoryImpl, "user-profile"),
            PathBuf::from(
                "lib/features/user_profile/data/repositories/user_profile_repository_impl.dart"
            )
        );
        assert_eq!(
            derive_path("cart", ComponentKind::BlocEvent, "cart"),
            PathBuf::from("lib/features/cart/presentation/bloc/cart_event.dart")
        );
        assert_eq!(
            derive_path("cart", ComponentKind::Card, "cart_item"),
            PathBuf::from("lib/features/cart/presentation/widgets/cart_item_card.dart")
        );
    }

    #[test]
    fn test_derive_path_is_deterministic() {
        for kind in ComponentKind::ALL {
            let a = derive_path("order history", kind, "OrderItem");
            let b = derive_path("order history", kind, "OrderItem");
            assert_eq!(a, b);
            assert!(a.starts_with("lib/features/order_history"));
            assert!(to_slash(&a).contains(kind.layer().as_str()));
        }
    }

    #[test]
    fn test_feature_skeleton() {
        let dirs = feature_skeleton("cart", StateManagement::Bloc);
        assert_eq!(dirs.len(), 9);
        assert_eq!(
            dirs.last(),
            Some(&PathBuf::from("lib/features/cart/presentation/bloc"))
        );
        let dirs = feature_skeleton("cart", StateManagement::Provider);
        assert!(dirs.contains(&PathBuf::from("lib/features/cart/presentation/providers")));
    }

    #[test]
    fn test_relative_import() {
        let screen = derive_path("product", ComponentKind::Screen, "product");
        let card = derive_path("product", ComponentKind::Card, "product");
        let provider = derive_path("product", ComponentKind::RiverpodProvider, "product");
        let state = derive_path("product", ComponentKind::RiverpodState, "product");

        assert_eq!(relative_import(&screen, &card), "../widgets/product_card.dart");
        assert_eq!(relative_import(&provider, &state), "product_state.dart");
    }

    #[test]
    fn test_package_import() {
        assert_eq!(
            package_import("shop_app", Path::new(core_paths::FAILURES)),
            "package:shop_app/core/errors/failures.dart"
        );
    }
}
