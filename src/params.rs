//! Request parameter carrier.
//!
//! The hosting framework owns the request variables and their key names;
//! the resolver only needs to read a host header and write back a
//! (kind, code) pair. [`ParamCarrier`] is that seam, [`CgiParams`] the
//! stock implementation over CGI-style request variables.

use std::collections::HashMap;

use crate::types::ScopeKind;

/// CGI-style key the host header is read from.
pub const HOST_HEADER_KEY: &str = "HTTP_HOST";

/// Caller-supplied storage for the resolution outcome.
///
/// Implementations must not record anything on their own: the resolver
/// calls [`ParamCarrier::set_scope`] only on a match, so an unmatched
/// request leaves the carrier exactly as the caller filled it.
pub trait ParamCarrier {
    /// The request's host header, if any.
    fn host_header(&self) -> Option<String>;

    /// Record the matched scope in caller-owned storage.
    fn set_scope(&mut self, kind: ScopeKind, code: &str);
}

/// Key names written on a match.
///
/// These belong to the hosting framework (Magento-style frameworks use
/// their own run-type/run-code constants), so they are injectable rather
/// than hardcoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamKeys {
    /// Key receiving the scope tier ("store" or "website")
    pub run_type: String,
    /// Key receiving the matched scope code
    pub run_code: String,
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self {
            run_type: "RUN_TYPE".to_string(),
            run_code: "RUN_CODE".to_string(),
        }
    }
}

/// CGI-style request variables, keyed like a web server environment.
#[derive(Debug, Clone, Default)]
pub struct CgiParams {
    vars: HashMap<String, String>,
    keys: ParamKeys,
}

impl CgiParams {
    /// Wrap request variables using the default run-type/run-code keys.
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            keys: ParamKeys::default(),
        }
    }

    /// Wrap request variables with framework-specific key names.
    pub fn with_keys(vars: HashMap<String, String>, keys: ParamKeys) -> Self {
        Self { vars, keys }
    }

    /// Read a single request variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Borrow the underlying variables.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Unwrap into the underlying variables.
    pub fn into_vars(self) -> HashMap<String, String> {
        self.vars
    }
}

impl ParamCarrier for CgiParams {
    fn host_header(&self) -> Option<String> {
        self.vars.get(HOST_HEADER_KEY).cloned()
    }

    fn set_scope(&mut self, kind: ScopeKind, code: &str) {
        self.vars
            .insert(self.keys.run_type.clone(), kind.as_str().to_string());
        self.vars.insert(self.keys.run_code.clone(), code.to_string());
    }
}
