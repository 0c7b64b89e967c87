//! Action record and its error refinement.
//!
//! An action is a tagged message object with a closed field set:
//! `type` (required), `payload`, `error`, `meta` (all optional).
//! `Action` is the typed form a candidate takes once it passed the shape
//! check in [`crate::shape`].

use std::ops::Deref;

use super::tag::Tag;
use super::value::{Object, Value};

/// The only keys an action may carry.
pub const ADMISSIBLE_KEYS: [&str; 4] = ["type", "payload", "error", "meta"];

pub fn is_admissible_key(key: &str) -> bool {
    ADMISSIBLE_KEYS.contains(&key)
}

/// A validated action.
///
/// Optional fields distinguish "key absent" (`None`) from "key present but
/// undefined" (`Some(Value::Undefined)`). `error` keeps the raw value: the
/// shape check does not constrain its kind, only [`Action::is_error`] does.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    tag: Tag,
    payload: Option<Value>,
    error: Option<Value>,
    meta: Option<Value>,
}

impl Action {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
            error: None,
            meta: None,
        }
    }

    pub(crate) fn from_parts(
        tag: Tag,
        payload: Option<Value>,
        error: Option<Value>,
        meta: Option<Value>,
    ) -> Self {
        Self {
            tag,
            payload,
            error,
            meta,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<Value>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<Value>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    /// `error` is present and strictly `true`. Truthy non-booleans don't count.
    pub fn is_error(&self) -> bool {
        matches!(self.error, Some(Value::Bool(true)))
    }

    /// Narrow to [`ErrorAction`]; hands the action back when it isn't one.
    pub fn into_error(self) -> Result<ErrorAction, Action> {
        if self.is_error() {
            Ok(ErrorAction(self))
        } else {
            Err(self)
        }
    }

    /// Rebuild the untyped object (keys in `type, payload, error, meta` order).
    pub fn into_value(self) -> Value {
        let mut object = Object::new().with("type", self.tag);
        if let Some(payload) = self.payload {
            object.insert("payload", payload);
        }
        if let Some(error) = self.error {
            object.insert("error", error);
        }
        if let Some(meta) = self.meta {
            object.insert("meta", meta);
        }
        Value::Object(object)
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        action.into_value()
    }
}

/// An action whose `error` is strictly `true`.
///
/// Only obtainable through [`Action::into_error`] (or
/// [`crate::shape::parse_error_action`]), so the flag can't be wrong.
/// `payload` conventionally holds the failure, but nothing enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorAction(Action);

impl ErrorAction {
    pub fn into_action(self) -> Action {
        self.0
    }
}

impl Deref for ErrorAction {
    type Target = Action;

    fn deref(&self) -> &Action {
        &self.0
    }
}

impl From<ErrorAction> for Action {
    fn from(error_action: ErrorAction) -> Self {
        error_action.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::type_key("type", true)]
    #[case::payload("payload", true)]
    #[case::error("error", true)]
    #[case::meta("meta", true)]
    #[case::unexpected("unexpected", false)]
    #[case::case_sensitive("Type", false)]
    #[case::empty("", false)]
    fn admissible_keys(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_admissible_key(key), expected);
    }

    #[rstest]
    #[case::missing(None, false)]
    #[case::undefined(Some(Value::Undefined), false)]
    #[case::false_flag(Some(Value::Bool(false)), false)]
    #[case::truthy_string(Some(Value::from("true")), false)]
    #[case::truthy_number(Some(Value::Number(1.0)), false)]
    #[case::true_flag(Some(Value::Bool(true)), true)]
    fn is_error_requires_strict_true(#[case] error: Option<Value>, #[case] expected: bool) {
        let action = Action::from_parts(Tag::label("foo"), None, error, None);
        assert_eq!(action.is_error(), expected);
    }

    #[test]
    fn into_error_narrows_or_hands_back() {
        let failing = Action::new("foo")
            .with_payload(Object::new().with("message", "bar"))
            .with_error(true);
        let narrowed = failing.clone().into_error().unwrap();
        assert_eq!(narrowed.tag(), &Tag::label("foo"));
        assert_eq!(narrowed.into_action(), failing);

        let plain = Action::new("foo").with_error(false);
        let back = plain.clone().into_error().unwrap_err();
        assert_eq!(back, plain);
    }

    #[test]
    fn into_value_keeps_present_keys_only() {
        let value = Action::new("foo")
            .with_meta("bar")
            .with_error(Value::Undefined)
            .into_value();

        let object = value.as_object().unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["type", "error", "meta"]);
        assert_eq!(object.get("error"), Some(&Value::Undefined));
    }
}
