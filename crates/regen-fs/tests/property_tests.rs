use proptest::prelude::*;
use regen_fs::NormalizedPath;

proptest! {
    #[test]
    fn normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));

        let remainder = if as_str.starts_with("//") { &as_str[2..] } else { as_str };
        prop_assert!(!remainder.contains("//"));

        // Normalizing twice changes nothing.
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn join_with_empty_or_dot_is_identity(a in "\\PC*") {
        let base = NormalizedPath::new(&a);
        prop_assert_eq!(base.join(""), base.clone());
        prop_assert_eq!(base.join("."), base);
    }
}
