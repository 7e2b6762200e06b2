//! Explicit deep copy.

use intent_tests::prelude::*;

#[derive(Debug)]
struct NativeHandle(u64);

impl ExtensionPayload for NativeHandle {
    fn intent_key(&self) -> String {
        format!("native:{}", self.0)
    }

    fn duplicate(&self) -> Option<Box<dyn ExtensionPayload>> {
        None
    }
}

fn service() -> TypeDecl {
    let mut decl = TypeDecl::new("Service");
    decl.set_access(AccessModifier::Public);
    decl.base_mut()
        .annotations_mut()
        .add(annotations!["owner" => "core", "stable" => true]);

    let mut start = Method::new("Start");
    start.set_return_type(TypeRef::new("Bool")).unwrap();
    let mut timeout = Parameter::typed("timeout", TypeRef::new("Int")).unwrap();
    timeout.set_default_value(Some(Value::from(30i64)));
    start.add_parameter(timeout).unwrap();
    start.attributes_mut().add(Attribute::new("Async")).unwrap();
    decl.methods_mut().add(start).unwrap();

    let mut state = Property::new("State");
    state
        .set_property_type(TypeRef::generic("Option", [TypeRef::new("String")]).unwrap())
        .unwrap();
    decl.properties_mut().add(state).unwrap();

    decl.extensions_mut()
        .add(ExtensionNode::new(
            "meta",
            Box::new(TaggedPayload::new("tier", 1i64)),
        ))
        .unwrap();
    decl
}

mod deep_copy {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_has_same_intent() {
        let source = service();
        let copy = source.copy().unwrap();

        assert!(copy.same_intent(&source));
        assert!(source.same_intent(&copy));
    }

    #[test]
    fn test_copy_has_fresh_identities() {
        let source = service();
        let copy = source.copy().unwrap();

        let source_ids: Vec<NodeId> = descendants(&source).iter().map(|n| n.base().id()).collect();
        let copy_ids: Vec<NodeId> = descendants(&copy).iter().map(|n| n.base().id()).collect();

        assert_eq!(copy_ids.len(), source_ids.len());
        assert!(copy_ids.iter().all(|id| !source_ids.contains(id)));
    }

    #[test]
    fn test_copy_parent_links_stay_inside_copy() {
        let source = service();
        let copy = source.copy().unwrap();

        assert_eq!(copy.base().parent(), None);
        for node in descendants(&copy).into_iter().skip(1) {
            let parent = node.base().parent().unwrap();
            assert!(find_node(&copy, parent).is_some());
        }
    }

    #[test]
    fn test_mutating_copy_leaves_source_alone() {
        let source = service();
        let mut copy = source.copy().unwrap();

        copy.base_mut().set_name("Renamed");
        copy.base_mut().annotations_mut().remove("owner");
        copy.methods_mut()
            .iter_mut()
            .for_each(|m| m.set_access(AccessModifier::Private));

        assert_eq!(source.base().name(), "Service");
        assert_eq!(
            source.base().annotations().get("owner"),
            Some(&Value::from("core"))
        );
        assert_eq!(
            source.methods().get(0).unwrap().access(),
            AccessModifier::None
        );
        assert!(!copy.same_intent(&source));
    }

    #[test]
    fn test_copy_boxed_through_trait_object() {
        let source: Box<dyn IntentNode> = Box::new(service());
        let copy = source.copy_boxed().unwrap();

        assert_ne!(copy.base().id(), source.base().id());
        assert!(same_intent(
            copy.as_ref(),
            source.as_ref(),
            &CompareOptions::default()
        ));
    }
}

mod symbol_cache {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_resolves_again_on_demand() {
        let mut syntax = SyntaxSource::new();
        let resolver = syntax.resolver();
        let source = Method::bind(
            syntax.bound(
                "method",
                SemanticHandle::new("Run", SymbolKind::Method).nested_in("Job"),
            ),
            resolver.clone(),
        );
        assert_eq!(resolver.calls(), 1);

        let copy = source.copy().unwrap();
        assert!(!copy.base().is_resolved());
        assert_eq!(copy.base().outer_name().as_deref(), Some("Job.Run"));
        assert_eq!(resolver.calls(), 2);
        assert_eq!(copy.base().raw_item(), source.base().raw_item());
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_node_without_copy_path_fails() {
        let node = ExtensionNode::new("handle", Box::new(NativeHandle(3)));

        let err = node.copy().unwrap_err();
        assert!(matches!(
            err,
            TreeError::CloneConstruction { ref kind, ref name, .. }
                if kind == "extension" && name == "handle"
        ));
    }

    #[test]
    fn test_failure_propagates_from_owner_and_source_is_intact() {
        let mut decl = service();
        decl.extensions_mut()
            .add(ExtensionNode::new("handle", Box::new(NativeHandle(9))))
            .unwrap();
        let before = descendants(&decl).len();

        let err = decl.copy().unwrap_err();
        assert!(matches!(err, TreeError::CloneConstruction { .. }));

        assert_eq!(descendants(&decl).len(), before);
        assert_eq!(decl.extensions().len(), 2);
        assert!(decl
            .extensions()
            .iter()
            .all(|ext| ext.base().parent() == Some(decl.base().id())));
    }
}
