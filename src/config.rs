//! Store host configuration.
//!
//! The configuration maps scope codes to the hosts they serve, in two
//! tiers:
//!
//! ```toml
//! [store]
//! de = ["de.shop.test", "germany.shop.test"]
//! en = ["en.shop.test"]
//!
//! [website]
//! base = ["shop.test"]
//! ```
//!
//! A colocated `store-hosts.local.toml` can override the base file per
//! deployment; see [`crate::merge`] for the merge semantics.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConfigErrorKind, Result, StoreError};
use crate::merge::deep_merge;

/// Default location of the base configuration file, relative to the
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "app/etc/store-hosts.toml";

/// Inserted before the extension to form the local override file name.
const LOCAL_SUFFIX: &str = "local";

/// Two-tier mapping of scope codes to host lists.
///
/// Both tiers are always present after a load; a missing table in the
/// source file is coerced to an empty map. Codes iterate in lexicographic
/// order, which fixes the claim order when one host is listed under
/// several codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreHostConfig {
    /// Store code -> hosts served by that store
    pub store: BTreeMap<String, Vec<String>>,
    /// Website code -> hosts served by that website
    pub website: BTreeMap<String, Vec<String>>,
}

impl StoreHostConfig {
    /// Load the configuration from `path`, falling back to
    /// [`DEFAULT_CONFIG_PATH`] when no path is given.
    ///
    /// A missing base file yields an empty configuration. A local
    /// override next to the base file is merged on top when present;
    /// a malformed override is logged and ignored, a malformed base
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if !base_path.exists() {
            debug!(
                "no store hosts config at '{}', using empty configuration",
                base_path.display()
            );
            return Ok(Self::default());
        }

        let mut value = read_toml_value(&base_path)?;

        let local_path = local_override_path(&base_path);
        if local_path.exists() {
            match read_toml_value(&local_path) {
                Ok(local) => {
                    debug!("merging local override '{}'", local_path.display());
                    value = deep_merge(value, local);
                }
                Err(e) => {
                    warn!("ignoring local override '{}': {}", local_path.display(), e);
                }
            }
        }

        let config: Self = serde_json::from_value(value).map_err(|e| {
            StoreError::config(
                ConfigErrorKind::InvalidShape,
                format!("Invalid store hosts config '{}': {}", base_path.display(), e),
            )
        })?;

        debug!(
            "loaded store hosts config: {} store codes, {} website codes",
            config.store.len(),
            config.website.len()
        );
        Ok(config)
    }

    /// True when neither tier has any code configured.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty() && self.website.is_empty()
    }
}

/// Read a TOML file into a generic value suitable for merging.
fn read_toml_value(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StoreError::config(
            ConfigErrorKind::FileError,
            format!("Failed to read '{}': {}", path.display(), e),
        )
    })?;
    toml::from_str(&contents).map_err(|e| {
        StoreError::config(
            ConfigErrorKind::InvalidData,
            format!("Failed to parse '{}': {}", path.display(), e),
        )
    })
}

/// Path of the local override colocated with the base file.
///
/// `app/etc/store-hosts.toml` -> `app/etc/store-hosts.local.toml`
fn local_override_path(base: &Path) -> PathBuf {
    match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => base.with_extension(format!("{}.{}", LOCAL_SUFFIX, ext)),
        None => base.with_extension(LOCAL_SUFFIX),
    }
}
