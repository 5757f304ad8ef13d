//! Reverse host index.
//!
//! Compiles a [`StoreHostConfig`] into an exact-match map from host to
//! the scope that claims it. Hosts are matched case-sensitively, exactly
//! as configured.

use std::collections::HashMap;

use crate::config::StoreHostConfig;
use crate::types::{ResolvedScope, ScopeKind};

/// Exact host -> scope lookup table built from a configuration.
///
/// Claim rules:
/// - stores are indexed first; within the store pass the last code to
///   list a host wins
/// - websites are indexed second and never displace an existing claim,
///   so a store always beats a website and the first website code to
///   list a host keeps it
#[derive(Debug, Default)]
pub struct HostIndex {
    entries: HashMap<String, ResolvedScope>,
}

impl HostIndex {
    /// Build the index from a configuration. Pure; the configuration is
    /// not consumed or modified.
    pub fn build(config: &StoreHostConfig) -> Self {
        let mut entries = HashMap::new();

        for (code, hosts) in &config.store {
            for host in hosts {
                entries.insert(
                    host.clone(),
                    ResolvedScope::new(ScopeKind::Store, code.clone()),
                );
            }
        }

        for (code, hosts) in &config.website {
            for host in hosts {
                if !entries.contains_key(host) {
                    entries.insert(
                        host.clone(),
                        ResolvedScope::new(ScopeKind::Website, code.clone()),
                    );
                }
            }
        }

        Self { entries }
    }

    /// Look up a host. Exact, case-sensitive match.
    pub fn lookup(&self, host: &str) -> Option<&ResolvedScope> {
        self.entries.get(host)
    }

    /// Number of indexed hosts.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// True when no host is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
