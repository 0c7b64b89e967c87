//! Shape checks for action candidates.
//!
//! `is_action` / `is_error` are the two predicates. They are pure and total:
//! any input, including `Value::Undefined` or `Value::Null`, yields a boolean.
//!
//! Callers that want the checked record rather than a bare `true` use
//! [`parse_action`] / [`parse_error_action`] (or `Action::try_from`), and
//! [`validate`] says which check failed.
//!
//! # チェック順
//! 1. candidate が Undefined でない
//! 2. `type` フィールドがある
//! 3. `type` が string か symbol
//! 4. すべてのキーが `type, payload, error, meta` のどれか

use tracing::debug;

use crate::domain::{Action, ErrorAction, ShapeError, Tag, Value, is_admissible_key};

/// True iff `candidate` has the action shape.
pub fn is_action(candidate: &Value) -> bool {
    validate(candidate).is_ok()
}

/// True iff the `error` field is present and strictly `true`.
///
/// The action shape is assumed, not re-checked. Non-objects simply answer
/// `false`.
pub fn is_error(action: &Value) -> bool {
    matches!(action.get("error"), Some(Value::Bool(true)))
}

/// Like [`is_action`], but reports the first failing check.
pub fn validate(candidate: &Value) -> Result<(), ShapeError> {
    check(candidate).inspect_err(|err| {
        debug!(kind = %candidate.kind(), reason = %err, "action candidate rejected");
    })
}

fn check(candidate: &Value) -> Result<(), ShapeError> {
    if candidate.is_undefined() {
        return Err(ShapeError::Absent);
    }

    let tag = candidate.get("type").ok_or(ShapeError::MissingType)?;
    Tag::try_from(tag)?;

    // `type` が取れた時点で object であることは確定している
    if let Some(object) = candidate.as_object() {
        if let Some(key) = object.keys().find(|key| !is_admissible_key(key)) {
            return Err(ShapeError::UnexpectedKey(key.to_string()));
        }
    }

    Ok(())
}

/// The checked record, or `None` when `candidate` isn't an action.
pub fn parse_action(candidate: Value) -> Option<Action> {
    Action::try_from(candidate).ok()
}

/// The checked record narrowed to [`ErrorAction`], or `None`.
pub fn parse_error_action(candidate: Value) -> Option<ErrorAction> {
    parse_action(candidate)?.into_error().ok()
}

impl TryFrom<Value> for Action {
    type Error = ShapeError;

    fn try_from(candidate: Value) -> Result<Self, Self::Error> {
        validate(&candidate)?;
        let Value::Object(object) = candidate else {
            return Err(ShapeError::MissingType);
        };

        let mut tag = None;
        let mut payload = None;
        let mut error = None;
        let mut meta = None;
        for (key, value) in object {
            match key.as_str() {
                "type" => tag = Some(Tag::try_from(&value)?),
                "payload" => payload = Some(value),
                "error" => error = Some(value),
                "meta" => meta = Some(value),
                _ => return Err(ShapeError::UnexpectedKey(key)),
            }
        }

        let tag = tag.ok_or(ShapeError::MissingType)?;
        Ok(Action::from_parts(tag, payload, error, meta))
    }
}

impl TryFrom<serde_json::Value> for Action {
    type Error = ShapeError;

    fn try_from(candidate: serde_json::Value) -> Result<Self, Self::Error> {
        Action::try_from(Value::from(candidate))
    }
}

impl TryFrom<Action> for ErrorAction {
    type Error = ShapeError;

    fn try_from(action: Action) -> Result<Self, Self::Error> {
        action.into_error().map_err(|_| ShapeError::NotErrorAction)
    }
}
