//! Property-based tests for the identifier case normalizer
//!
//! These pin down the algebraic contract of `snakify`: uniform-case and
//! already-segmented tokens are fixed points, and the transform is
//! idempotent over arbitrary word tokens.

use proptest::prelude::*;
use unbrace::convert::snakify;

proptest! {
    #[test]
    fn all_lowercase_tokens_are_fixed_points(token in "[a-z]{1,16}") {
        prop_assert_eq!(snakify(&token), token);
    }

    #[test]
    fn all_uppercase_tokens_are_fixed_points(token in "[A-Z]{1,16}") {
        prop_assert_eq!(snakify(&token), token);
    }

    #[test]
    fn embedded_underscore_tokens_are_fixed_points(
        token in "[a-zA-Z][a-zA-Z0-9]{0,6}_[a-zA-Z0-9_]{0,6}"
    ) {
        prop_assert_eq!(snakify(&token), token);
    }

    #[test]
    fn snakify_is_idempotent(token in "[a-zA-Z][a-zA-Z0-9]{0,15}") {
        let once = snakify(&token);
        prop_assert_eq!(snakify(&once), once.clone());
    }

    #[test]
    fn camel_tokens_come_out_lowercase_with_underscores(
        token in "[a-z]{1,4}([A-Z][a-z]{1,4}){1,3}"
    ) {
        let result = snakify(&token);
        prop_assert_eq!(result.clone(), result.to_lowercase());
        prop_assert!(result.contains('_'));
    }
}
