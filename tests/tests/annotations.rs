//! Public annotations and their effect on comparison.

use intent_tests::prelude::*;

fn annotated(items: Vec<Annotation>) -> Method {
    let mut method = Method::new("Handle");
    method.base_mut().annotations_mut().add(items);
    method
}

mod equivalence {
    use super::*;

    #[test]
    fn test_permutation_does_not_change_outcome() {
        let a = annotated(annotations!["route" => "/users", "verb" => "GET", "weight" => 2i64]);
        let b = annotated(annotations!["weight" => 2i64, "route" => "/users", "verb" => "GET"]);
        let c = annotated(annotations!["verb" => "GET", "weight" => 2i64, "route" => "/users"]);

        Expect::same().verify("a-b", &a, &b).unwrap();
        Expect::same().verify("b-c", &b, &c).unwrap();
    }

    #[test]
    fn test_different_values_mismatch() {
        let a = annotated(annotations!["verb" => "GET"]);
        let b = annotated(annotations!["verb" => "POST"]);

        Expect::mismatch(Mismatch::Annotations)
            .verify("value", &a, &b)
            .unwrap();
    }

    #[test]
    fn test_extra_annotation_mismatches() {
        let a = annotated(annotations!["verb" => "GET"]);
        let b = annotated(annotations!["verb" => "GET", "cached" => true]);

        Expect::mismatch(Mismatch::Annotations)
            .verify("extra", &a, &b)
            .unwrap();
    }

    #[test]
    fn test_annotations_can_be_excluded() {
        let a = annotated(annotations!["verb" => "GET"]);
        let b = annotated(annotations![]);

        Expect::same()
            .without_annotations()
            .verify("excluded", &a, &b)
            .unwrap();
        assert!(!a.same_intent(&b));
        assert!(a.same_intent_with(&b, &CompareOptions::without_annotations()));
    }

    #[test]
    fn test_annotations_checked_after_facets() {
        let mut a = annotated(annotations!["verb" => "GET"]);
        let b = annotated(annotations!["verb" => "POST"]);
        a.modifiers_mut().is_static = true;

        Expect::mismatch(Mismatch::Facet(Facet::Static))
            .verify("order", &a, &b)
            .unwrap();
    }

    #[test]
    fn test_nested_annotations_respect_options() {
        let mut a = TypeDecl::new("Api");
        a.methods_mut()
            .add(annotated(annotations!["verb" => "GET"]))
            .unwrap();
        let mut b = TypeDecl::new("Api");
        b.methods_mut()
            .add(annotated(annotations!["verb" => "PUT"]))
            .unwrap();

        Expect::mismatch(Mismatch::Content)
            .verify("nested", &a, &b)
            .unwrap();
        Expect::same()
            .without_annotations()
            .verify("nested excluded", &a, &b)
            .unwrap();
    }
}

mod store {
    use super::*;

    #[test]
    fn test_store_edits() {
        let mut method = annotated(annotations!["tag" => "a", "tag" => "b", "owner" => "io"]);
        let store = method.base_mut().annotations_mut();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("owner"), Some(&Value::from("io")));
        assert_eq!(store.remove("tag"), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove("tag"), 0);
    }

    #[test]
    fn test_copied_annotations_get_fresh_ids() {
        let method = annotated(annotations!["tag" => "a"]);
        let copy = method.copy().unwrap();

        let source_id = method.base().annotations().iter().next().unwrap().id();
        let copy_id = copy.base().annotations().iter().next().unwrap().id();
        assert_ne!(source_id, copy_id);
        assert!(copy
            .base()
            .annotations()
            .equivalent(method.base().annotations()));
    }
}
