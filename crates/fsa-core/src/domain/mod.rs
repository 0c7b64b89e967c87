//! Domain model (values, tags, actions, errors).
//!
//! - value: 動的型付けの入力値（Undefined を含む）
//! - symbol / tag: action の `type` に使えるもの
//! - action: Action / ErrorAction
//! - errors: 形状チェックの不合格理由

pub mod action;
pub mod errors;
pub mod symbol;
pub mod tag;
pub mod value;

pub use action::{ADMISSIBLE_KEYS, Action, ErrorAction, is_admissible_key};
pub use errors::ShapeError;
pub use symbol::Symbol;
pub use tag::Tag;
pub use value::{Object, Value, ValueKind};
