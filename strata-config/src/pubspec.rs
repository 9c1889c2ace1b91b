//! `pubspec.yaml` discovery for running inside existing projects.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

pub const PUBSPEC: &str = "pubspec.yaml";

/// The one pubspec key strata reads.
#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

/// Nearest ancestor of `start` (inclusive) containing a `pubspec.yaml`.
pub fn find_flutter_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PUBSPEC).is_file())
        .map(Path::to_path_buf)
}

/// The top-level `name:` of the pubspec at `root`, if readable.
pub fn read_package_name(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join(PUBSPEC)).ok()?;
    parse_package_name(&content)
}

/// Extract the top-level `name:` value. Malformed YAML yields `None`.
pub fn parse_package_name(content: &str) -> Option<String> {
    let pubspec: Pubspec = match serde_yaml::from_str(content) {
        Ok(pubspec) => pubspec,
        Err(err) => {
            debug!("unreadable {}: {}", PUBSPEC, err);
            return None;
        }
    };
    pubspec
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_package_name() {
        let pubspec = "name: shop_app\ndescription: A shop\nflutter:\n  name: nested\n";
        assert_eq!(parse_package_name(pubspec), Some("shop_app".into()));
        assert_eq!(parse_package_name("name: 'quoted' # c"), Some("quoted".into()));
        assert_eq!(parse_package_name("flutter:\n  name: nested\n"), None);
        assert_eq!(parse_package_name("name:"), None);
        assert_eq!(parse_package_name("name: [unclosed"), None);
    }

    #[test]
    fn test_find_flutter_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PUBSPEC), "name: demo\n").unwrap();
        let nested = temp.path().join("lib/src");
        fs::create_dir_all(&nested).unwrap();

        let root = find_flutter_root(&nested).unwrap();
        assert_eq!(root, temp.path());
        assert_eq!(read_package_name(&root), Some("demo".into()));
    }
}
