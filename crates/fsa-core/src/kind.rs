//! ActionKind - `type` ラベルを型に結びつける
//!
//! # 使用例
//! ```ignore
//! struct UserCreated;
//!
//! impl ActionKind for UserCreated {
//!     const TYPE: &'static str = "users.created";
//! }
//!
//! if action.is_kind::<UserCreated>() { ... }
//! ```

use crate::domain::Action;

/// Associates a marker type with a label tag, so callers match on a type
/// instead of repeating string literals.
pub trait ActionKind {
    const TYPE: &'static str;
}

impl Action {
    /// True when the tag is the label `K::TYPE`. Symbol tags never match.
    pub fn is_kind<K: ActionKind>(&self) -> bool {
        self.tag().is(K::TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Symbol;

    struct UserCreated;

    impl ActionKind for UserCreated {
        const TYPE: &'static str = "users.created";
    }

    struct UserDeleted;

    impl ActionKind for UserDeleted {
        const TYPE: &'static str = "users.deleted";
    }

    #[test]
    fn label_matches_its_kind_only() {
        let action = Action::new("users.created");

        assert!(action.is_kind::<UserCreated>());
        assert!(!action.is_kind::<UserDeleted>());
    }

    #[test]
    fn symbol_tag_matches_no_kind() {
        let action = Action::new(Symbol::new("users.created"));
        assert!(!action.is_kind::<UserCreated>());
    }
}
