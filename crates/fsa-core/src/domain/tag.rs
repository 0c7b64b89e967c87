use std::fmt;

use super::errors::ShapeError;
use super::symbol::Symbol;
use super::value::Value;

/// The `type` of an action: a textual label or a unique symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Label(String),
    Symbol(Symbol),
}

impl Tag {
    pub fn label(s: impl Into<String>) -> Self {
        Tag::Label(s.into())
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Tag::Label(s) => Some(s),
            Tag::Symbol(_) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Tag::Symbol(s) => Some(s),
            Tag::Label(_) => None,
        }
    }

    /// True when this is a label equal to `label`. Symbols never match.
    pub fn is(&self, label: &str) -> bool {
        self.as_label() == Some(label)
    }
}

impl TryFrom<&Value> for Tag {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Tag::Label(s.clone())),
            Value::Symbol(s) => Ok(Tag::Symbol(s.clone())),
            other => Err(ShapeError::InvalidTag { kind: other.kind() }),
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Label(s) => Value::String(s),
            Tag::Symbol(s) => Value::Symbol(s),
        }
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::Label(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::Label(s)
    }
}

impl From<Symbol> for Tag {
    fn from(s: Symbol) -> Self {
        Tag::Symbol(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Label(s) => s.fmt(f),
            Tag::Symbol(s) => s.fmt(f),
        }
    }
}
