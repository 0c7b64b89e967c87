//! fsa-core
//!
//! Shape checks for tagged message objects ("actions").
//!
//! An action is an object with a `type` (string or symbol) and, optionally,
//! `payload`, `error` and `meta`. Nothing else.
//!
//! # モジュール構成
//! - **domain**: 値モデル（Value, Symbol, Tag, Action, ErrorAction, ShapeError）
//! - **shape**: `is_action` / `is_error` と、型付き Action への変換
//! - **kind**: `ActionKind` trait（`type` ラベルと型の対応付け）

pub mod domain;
pub mod kind;
pub mod shape;

pub use domain::{Action, ErrorAction, Object, ShapeError, Symbol, Tag, Value};
pub use kind::ActionKind;
pub use shape::{is_action, is_error, parse_action, parse_error_action, validate};
