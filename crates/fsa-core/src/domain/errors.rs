//! Errors - 形状チェックの不合格理由
//!
//! The predicates in `shape` never fail; they answer `false`. `ShapeError`
//! only exists for callers that want to know *why* a candidate was rejected
//! (`shape::validate`, `TryFrom<Value> for Action`).

use thiserror::Error;

use super::value::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("candidate is undefined")]
    Absent,

    #[error("candidate has no `type` field")]
    MissingType,

    #[error("`type` must be a string or symbol, got {kind}")]
    InvalidTag { kind: ValueKind },

    #[error("unexpected key '{0}' (allowed: type, payload, error, meta)")]
    UnexpectedKey(String),

    #[error("`error` is not strictly true")]
    NotErrorAction,
}
