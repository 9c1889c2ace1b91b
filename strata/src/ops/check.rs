//! Check operation - strict configuration validation.

use std::path::Path;

use strata_config::ConfigStore;

use crate::reports::CheckReport;

/// Read `strata.json` strictly and validate it.
///
/// Parse and I/O errors are returned as diagnostics. Validation messages
/// and unknown enum values end up in the report.
pub fn check(root: &Path, store: &ConfigStore) -> strata_config::Result<CheckReport> {
    let (config, errors) = store.check(root)?;

    Ok(CheckReport {
        config_path: store.path(root),
        config,
        errors,
    })
}
