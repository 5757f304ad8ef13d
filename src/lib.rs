//! Store Router - a host-to-store resolution engine for multi-tenant storefronts
//!
//! This library resolves an incoming request's host header to a configured
//! store or website code, so a multi-tenant e-commerce platform can select
//! tenant-specific configuration from the requesting domain. It provides:
//!
//! - Layered TOML configuration (base file + optional local override,
//!   merged with recursive-replace semantics)
//! - A reverse host index where store entries take priority over website
//!   entries
//! - Exact host lookup over a lazily built, per-resolver cache with an
//!   explicit reset
//! - A param-carrier seam for writing the matched scope back into
//!   framework-owned request variables
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use store_router_r::{CgiParams, ResolverOptions, ScopeKind, StoreResolver, HOST_HEADER_KEY};
//!
//! # fn main() -> store_router_r::Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let config_path = dir.path().join("store-hosts.toml");
//! std::fs::write(
//!     &config_path,
//!     r#"
//! [store]
//! de = ["de.shop.test", "germany.shop.test"]
//!
//! [website]
//! base = ["shop.test"]
//! "#,
//! )
//! .unwrap();
//!
//! let resolver = StoreResolver::new(ResolverOptions::new().with_config_path(&config_path));
//!
//! let mut params = CgiParams::new(HashMap::from([(
//!     HOST_HEADER_KEY.to_string(),
//!     "de.shop.test".to_string(),
//! )]));
//!
//! let scope = resolver.apply(&mut params)?.expect("host is configured");
//! assert_eq!(scope.kind, ScopeKind::Store);
//! assert_eq!(params.get("RUN_CODE"), Some("de"));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The base file (default `app/etc/store-hosts.toml`) maps scope codes to
//! host lists in two tiers:
//!
//! ```toml
//! [store]
//! de = ["de.shop.test"]
//!
//! [website]
//! base = ["shop.test"]
//! ```
//!
//! A `store-hosts.local.toml` in the same directory overrides the base
//! file per code: an override's host list replaces the base list for that
//! code, codes it does not mention survive unchanged, and codes only in
//! the override are added. A missing base file behaves as an empty
//! configuration; a missing or malformed override is ignored.
//!
//! # Priority
//!
//! When one host is listed under both tiers the store claim wins. Within
//! the store tier the last code (in configuration order) to list a host
//! claims it; within the website tier the first one does.

pub mod config;
pub mod error;
pub mod index;
pub mod merge;
pub mod params;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use config::{StoreHostConfig, DEFAULT_CONFIG_PATH};
pub use error::{ConfigErrorKind, Result, StoreError};
pub use index::HostIndex;
pub use params::{CgiParams, ParamCarrier, ParamKeys, HOST_HEADER_KEY};
pub use resolver::{ResolverOptions, ResolverStats, StoreResolver};
pub use types::{ResolvedScope, ScopeKind};
