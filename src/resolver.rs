//! Store resolver.
//!
//! Owns the lazily built (configuration, index) pair and answers host
//! lookups against it. Each resolver instance has its own cache, so
//! isolated instances can coexist in tests and in embedding servers.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::StoreHostConfig;
use crate::error::Result;
use crate::index::HostIndex;
use crate::params::ParamCarrier;
use crate::types::ResolvedScope;

/// Resolver builder options.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Base configuration file; `None` falls back to
    /// [`crate::config::DEFAULT_CONFIG_PATH`].
    pub config_path: Option<PathBuf>,
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base configuration file path.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

/// Configuration and derived index, published together.
struct CachedState {
    config: StoreHostConfig,
    index: HostIndex,
}

/// Counts over the currently cached state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverStats {
    pub store_codes: usize,
    pub website_codes: usize,
    pub indexed_hosts: usize,
}

/// Resolves host headers to configured store/website scopes.
///
/// The configuration is loaded and indexed on the first lookup and kept
/// for the lifetime of the resolver. [`StoreResolver::reset`] discards
/// the cache so the next lookup reloads from disk; there is no automatic
/// invalidation, staleness across config edits is an accepted tradeoff.
pub struct StoreResolver {
    options: ResolverOptions,
    state: RwLock<Option<Arc<CachedState>>>,
    loads: AtomicU64,
}

impl Default for StoreResolver {
    fn default() -> Self {
        Self::new(ResolverOptions::default())
    }
}

impl StoreResolver {
    /// Create a new resolver. No I/O happens until the first lookup.
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            options,
            state: RwLock::new(None),
            loads: AtomicU64::new(0),
        }
    }

    /// Resolve a host header against the configured hosts.
    ///
    /// An empty host returns `Ok(None)` without touching the cache or
    /// the filesystem. An unknown host returns `Ok(None)`.
    pub fn resolve(&self, host: &str) -> Result<Option<ResolvedScope>> {
        self.resolve_with_path(host, None)
    }

    /// Resolve with an explicit configuration path.
    ///
    /// The path is only consulted by the call that actually triggers a
    /// load; once the cache is populated a differing path is ignored
    /// until [`StoreResolver::reset`]. Repeated lookups stay cheap at
    /// the cost of per-call path flexibility.
    pub fn resolve_with_path(
        &self,
        host: &str,
        config_path: Option<&Path>,
    ) -> Result<Option<ResolvedScope>> {
        if host.is_empty() {
            return Ok(None);
        }
        let state = self.load_state(config_path)?;
        Ok(state.index.lookup(host).cloned())
    }

    /// Resolve the carrier's host header and, on a match, record the
    /// scope in the carrier.
    ///
    /// An absent or empty host header and an unmatched host both leave
    /// the carrier untouched, so the hosting framework falls back to its
    /// own default scope.
    pub fn apply<C: ParamCarrier>(&self, carrier: &mut C) -> Result<Option<ResolvedScope>> {
        let host = match carrier.host_header() {
            Some(host) if !host.is_empty() => host,
            _ => return Ok(None),
        };

        let resolved = self.resolve(&host)?;
        if let Some(scope) = &resolved {
            debug!("host '{}' resolved to {} '{}'", host, scope.kind, scope.code);
            carrier.set_scope(scope.kind, &scope.code);
        }
        Ok(resolved)
    }

    /// Discard the cached configuration and index unconditionally.
    ///
    /// The next lookup reloads from disk. Intended for test isolation
    /// and for long-lived processes picking up configuration edits.
    pub fn reset(&self) {
        *self.state.write() = None;
    }

    /// Number of completed load-and-build cycles.
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    /// True when a configuration is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.state.read().is_some()
    }

    /// Counts over the cached state, `None` before the first load.
    pub fn stats(&self) -> Option<ResolverStats> {
        self.state.read().as_ref().map(|state| ResolverStats {
            store_codes: state.config.store.len(),
            website_codes: state.config.website.len(),
            indexed_hosts: state.index.entry_count(),
        })
    }

    /// Get the cached state, populating it on first access.
    fn load_state(&self, path_override: Option<&Path>) -> Result<Arc<CachedState>> {
        if let Some(state) = self.state.read().as_ref() {
            return Ok(state.clone());
        }

        // First load: take the write lock and re-check, so concurrent
        // first callers neither double-load nor observe a partial state.
        let mut slot = self.state.write();
        if let Some(state) = slot.as_ref() {
            return Ok(state.clone());
        }

        let path = path_override.or(self.options.config_path.as_deref());
        let config = StoreHostConfig::load(path)?;
        let index = HostIndex::build(&config);
        debug!("host index built with {} entries", index.entry_count());

        let state = Arc::new(CachedState { config, index });
        *slot = Some(state.clone());
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScopeKind;
    use std::fs;
    use std::io::Write;

    fn write_config(path: &Path, contents: &str) {
        let mut file = fs::File::create(path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_empty_host_short_circuits() {
        let resolver = StoreResolver::default();

        assert_eq!(resolver.resolve("").unwrap(), None);
        assert_eq!(resolver.load_count(), 0);
        assert!(!resolver.is_loaded());
    }

    #[test]
    fn test_load_happens_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store-hosts.toml");
        write_config(&path, "[store]\nde = [\"de.shop.test\"]\n");

        let resolver = StoreResolver::new(ResolverOptions::new().with_config_path(&path));

        let first = resolver.resolve("de.shop.test").unwrap().unwrap();
        let second = resolver.resolve("de.shop.test").unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.kind, ScopeKind::Store);
        assert_eq!(resolver.load_count(), 1);
    }

    #[test]
    fn test_reset_forces_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store-hosts.toml");
        write_config(&path, "[store]\nde = [\"de.shop.test\"]\n");

        let resolver = StoreResolver::new(ResolverOptions::new().with_config_path(&path));
        assert!(resolver.resolve("de.shop.test").unwrap().is_some());

        // Edit the file; the cached index must not notice until reset.
        write_config(&path, "[store]\nfr = [\"fr.shop.test\"]\n");
        assert!(resolver.resolve("fr.shop.test").unwrap().is_none());

        resolver.reset();
        assert!(!resolver.is_loaded());

        let scope = resolver.resolve("fr.shop.test").unwrap().unwrap();
        assert_eq!(scope.code, "fr");
        assert!(resolver.resolve("de.shop.test").unwrap().is_none());
        assert_eq!(resolver.load_count(), 2);
    }

    #[test]
    fn test_config_path_ignored_after_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = dir.path().join("a.toml");
        let path_b = dir.path().join("b.toml");
        write_config(&path_a, "[store]\na = [\"a.test\"]\n");
        write_config(&path_b, "[store]\nb = [\"b.test\"]\n");

        let resolver = StoreResolver::default();

        // First call loads from a; the differing path on the second
        // call is ignored because the cache is already populated.
        assert!(resolver
            .resolve_with_path("a.test", Some(&path_a))
            .unwrap()
            .is_some());
        assert!(resolver
            .resolve_with_path("b.test", Some(&path_b))
            .unwrap()
            .is_none());
        assert_eq!(resolver.load_count(), 1);

        resolver.reset();
        assert!(resolver
            .resolve_with_path("b.test", Some(&path_b))
            .unwrap()
            .is_some());
        assert_eq!(resolver.load_count(), 2);
    }

    #[test]
    fn test_missing_config_resolves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let resolver = StoreResolver::new(ResolverOptions::new().with_config_path(&path));

        assert_eq!(resolver.resolve("anything.test").unwrap(), None);
        assert_eq!(resolver.load_count(), 1);
        assert_eq!(
            resolver.stats(),
            Some(ResolverStats {
                store_codes: 0,
                website_codes: 0,
                indexed_hosts: 0,
            })
        );
    }

    #[test]
    fn test_stats_reflect_cached_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store-hosts.toml");
        write_config(
            &path,
            "[store]\nde = [\"de.shop.test\", \"germany.shop.test\"]\n\n[website]\nbase = [\"shop.test\"]\n",
        );

        let resolver = StoreResolver::new(ResolverOptions::new().with_config_path(&path));
        assert_eq!(resolver.stats(), None);

        resolver.resolve("shop.test").unwrap();
        assert_eq!(
            resolver.stats(),
            Some(ResolverStats {
                store_codes: 1,
                website_codes: 1,
                indexed_hosts: 3,
            })
        );
    }
}
