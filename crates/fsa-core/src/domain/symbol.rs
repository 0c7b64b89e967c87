//! Symbol - 一意なシンボルトークン
//!
//! A `Symbol` is the second admissible tag kind next to plain labels.
//! Every call to [`Symbol::new`] yields a token that is equal only to itself
//! (and its clones), even when two symbols share a description.
//!
//! Identity is a ULID, the same identity model the domain IDs use.

use std::fmt;
use std::hash::{Hash, Hasher};

use ulid::Ulid;

/// Unique symbolic token with an optional human-readable description.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: Ulid,
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            description: Some(description.into()),
        }
    }

    /// Symbol without a description (`Symbol()`).
    pub fn anonymous() -> Self {
        Self {
            id: Ulid::new(),
            description: None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn id(&self) -> Ulid {
        self.id
    }
}

// description は比較に使わない（同じ説明でも別のシンボル）
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}
