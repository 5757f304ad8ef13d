use std::fmt;

/// Scope tier a host can resolve to.
///
/// Stores are the narrower tier and always win over websites when the same
/// host is listed under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Store,
    Website,
}

impl ScopeKind {
    /// Lowercase wire name, as written into a request param carrier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Store => "store",
            ScopeKind::Website => "website",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a host to a configured scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
    /// The scope tier that claimed the host
    pub kind: ScopeKind,
    /// The scope code the host belongs to
    pub code: String,
}

impl ResolvedScope {
    /// Create a new resolved scope.
    pub fn new(kind: ScopeKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }
}
