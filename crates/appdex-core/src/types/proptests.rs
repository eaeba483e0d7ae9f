//! Property-based tests for slug derivation.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::util::ids::slug;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_slug_idempotent(s in "\\PC*") {
            let once = slug(&s);
            prop_assert_eq!(slug(&once), once);
        }

        #[test]
        fn test_slug_is_normalized(s in "\\PC*") {
            let out = slug(&s);
            prop_assert!(!out.starts_with('-'));
            prop_assert!(!out.ends_with('-'));
            prop_assert!(!out.contains("--"));
            prop_assert!(!out.contains(char::is_whitespace));
            prop_assert!(!out.contains(char::is_uppercase));
        }

        #[test]
        fn test_slug_deterministic(s in "\\PC*") {
            prop_assert_eq!(slug(&s), slug(&s));
        }
    }
}
