//! Ownership collections and the single-parent invariant.

use intent_tests::prelude::*;

fn params(names: &[&str]) -> Vec<Parameter> {
    names.iter().map(|name| Parameter::new(*name)).collect()
}

mod insertion {
    use super::*;

    #[test]
    fn test_add_range_sets_parents() {
        let mut method = Method::new("Run");
        method.add_parameters(params(&["a", "b", "c"])).unwrap();

        let owner = method.base().id();
        assert_eq!(method.parameters().len(), 3);
        assert!(method
            .parameters()
            .iter()
            .all(|p| p.base().parent() == Some(owner)));
        let ordinals: Vec<usize> = method.parameters().iter().map(Parameter::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[test]
    fn test_add_range_is_all_or_nothing() {
        let mut source = TypeDecl::new("Source");
        source.methods_mut().add(Method::new("Taken")).unwrap();
        // Swap the child out through a mutable reference; it keeps its parent.
        let slot = source.methods_mut().iter_mut().next().unwrap();
        let taken = std::mem::replace(slot, Method::new("Placeholder"));
        assert_eq!(taken.base().parent(), Some(source.base().id()));

        let mut target = TypeDecl::new("Target");
        let result = target
            .methods_mut()
            .add_range(vec![Method::new("Fresh"), taken]);

        assert!(matches!(result, Err(TreeError::AlreadyOwned { .. })));
        assert!(target.methods().is_empty());
    }

    #[test]
    fn test_refused_child_comes_back() {
        let mut source = TypeDecl::new("Source");
        source.methods_mut().add(Method::new("Taken")).unwrap();
        let slot = source.methods_mut().iter_mut().next().unwrap();
        let taken = std::mem::replace(slot, Method::new("Placeholder"));
        let id = taken.base().id();

        let mut target = TypeDecl::new("Target");
        let rejected = target.methods_mut().try_add(taken).unwrap_err();

        assert!(matches!(rejected.error, TreeError::AlreadyOwned { .. }));
        let method = rejected.into_inner();
        assert_eq!(method.base().id(), id);
        assert_eq!(method.base().name(), "Taken");
        assert!(target.methods().is_empty());
    }

    #[test]
    fn test_removed_child_can_be_reinserted() {
        let mut first = Method::new("First");
        first.add_parameter(Parameter::new("x")).unwrap();
        let id = first.parameters().get(0).unwrap().base().id();

        let param = first.remove_parameter(id).unwrap();
        assert_eq!(param.base().parent(), None);
        assert!(first.parameters().is_empty());

        let mut second = Method::new("Second");
        second.add_parameter(param).unwrap();
        assert_eq!(
            second.parameters().get(0).unwrap().base().parent(),
            Some(second.base().id())
        );
    }
}

mod parameter_order {
    use super::*;

    fn method(names: &[&str]) -> Method {
        let mut method = Method::new("Call");
        method.add_parameters(params(names)).unwrap();
        method
    }

    #[test]
    fn test_removal_then_compare_with_fresh_method() {
        let mut edited = method(&["x", "y"]);
        let x = edited.parameters().get(0).unwrap().base().id();
        edited.remove_parameter(x).unwrap();

        let fresh = method(&["y"]);
        assert_eq!(edited.parameters().get(0).unwrap().ordinal(), 0);
        Expect::same()
            .verify("edited vs fresh", &edited, &fresh)
            .unwrap();
    }

    #[test]
    fn test_moved_parameter_takes_next_position() {
        let mut from = method(&["a", "b"]);
        let mut to = method(&["c"]);
        let a = from.parameters().get(0).unwrap().base().id();

        from.move_parameter(a, &mut to).unwrap();

        Expect::same()
            .verify("source after move", &from, &method(&["b"]))
            .unwrap();
        Expect::same()
            .verify("destination after move", &to, &method(&["c", "a"]))
            .unwrap();
    }

    #[test]
    fn test_mutating_through_identity_keeps_position() {
        let mut method = method(&["a", "b"]);
        let b = method.parameters().get(1).unwrap().base().id();

        method
            .parameter_mut(b)
            .unwrap()
            .set_modifier(ParameterModifier::Out);

        let param = method.parameters().find(b).unwrap();
        assert_eq!(param.ordinal(), 1);
        assert_eq!(param.modifier(), ParameterModifier::Out);
    }
}

mod moves {
    use super::*;

    #[test]
    fn test_move_detaches_and_attaches() {
        let mut from = TypeDecl::new("From");
        let mut to = TypeDecl::new("To");
        from.methods_mut().add(Method::new("Shared")).unwrap();
        let id = from.methods().get(0).unwrap().base().id();

        from.methods_mut().move_to(id, to.methods_mut()).unwrap();

        assert!(from.methods().is_empty());
        assert_eq!(to.methods().len(), 1);
        assert_eq!(
            to.methods().find(id).unwrap().base().parent(),
            Some(to.base().id())
        );
    }

    #[test]
    fn test_move_of_unknown_child_changes_nothing() {
        let mut from = TypeDecl::new("From");
        let mut to = TypeDecl::new("To");
        from.methods_mut().add(Method::new("Kept")).unwrap();
        let stranger = NodeId::fresh();

        assert_eq!(
            from.methods_mut().move_to(stranger, to.methods_mut()),
            Err(TreeError::ChildNotFound(stranger))
        );
        assert_eq!(from.methods().len(), 1);
        assert!(to.methods().is_empty());
    }
}

mod slots {
    use super::*;

    #[test]
    fn test_replacing_return_type_detaches_old_one() {
        let mut method = Method::new("Parse");
        assert!(method.set_return_type(TypeRef::new("Int")).unwrap().is_none());

        let old = method.set_return_type(TypeRef::new("Long")).unwrap().unwrap();
        assert_eq!(old.base().name(), "Int");
        assert_eq!(old.base().parent(), None);
        assert_eq!(
            method.return_type().unwrap().base().parent(),
            Some(method.base().id())
        );
    }
}

mod walking {
    use super::*;

    #[test]
    fn test_descendants_follow_declaration_order() {
        let mut decl = TypeDecl::new("Root");
        let mut run = Method::new("Run");
        run.add_parameter(Parameter::new("arg")).unwrap();
        decl.methods_mut().add(run).unwrap();
        decl.properties_mut().add(Property::new("Size")).unwrap();

        let names: Vec<&str> = descendants(&decl)
            .into_iter()
            .map(|node| node.base().name())
            .collect();
        assert_eq!(names, vec!["Root", "Run", "arg", "Size"]);
    }
}
