//! Generic field lookup.

use intent_tests::prelude::*;
use pretty_assertions::assert_eq;

fn setter() -> Method {
    let mut method = Method::new("SetName");
    method.set_access(AccessModifier::Public);
    method.modifiers_mut().is_override = true;
    method.set_return_type(TypeRef::new("Void")).unwrap();
    let mut value = Parameter::typed("value", TypeRef::new("String")).unwrap();
    value.set_modifier(ParameterModifier::In);
    method.add_parameter(value).unwrap();
    method
        .attributes_mut()
        .add(Attribute::new("Logged"))
        .unwrap();
    method
}

#[test]
fn test_method_fields() {
    let method = setter();

    let read = |name: &str| request_value_by_name(&method, name);
    assert_eq!(read("Name"), Some(Value::from("SetName")));
    assert_eq!(read("Kind"), Some(Value::from("method")));
    assert_eq!(read("AccessModifier"), Some(Value::from("public")));
    assert_eq!(read("IsStatic"), Some(Value::Bool(false)));
    assert_eq!(read("IsOverride"), Some(Value::Bool(true)));
    assert_eq!(read("ReturnType"), Some(Value::from("Void")));
    assert_eq!(read("AttributeCount"), Some(Value::Int(1)));
    assert_eq!(read("ChildCount"), Some(Value::Int(3)));
    assert_eq!(read("IsExtension"), Some(Value::Bool(false)));
}

#[test]
fn test_fields_outside_a_nodes_facets_are_absent() {
    let method = setter();
    let attribute = Attribute::new("Logged");

    assert_eq!(request_value(&method, Field::Namespace), None);
    assert_eq!(request_value(&method, Field::CanGet), None);
    assert_eq!(request_value(&attribute, Field::AccessModifier), None);
    assert_eq!(request_value(&attribute, Field::AttributeCount), None);
    assert_eq!(request_value_by_name(&method, "NoSuchField"), None);
}

#[test]
fn test_parameter_fields() {
    let method = setter();
    let param = method.parameters().get(0).unwrap();

    assert_eq!(request_value(param, Field::Ordinal), Some(Value::Int(0)));
    assert_eq!(
        request_value(param, Field::ParameterModifier),
        Some(Value::from("in"))
    );
    assert_eq!(request_value(param, Field::IsOptional), Some(Value::Bool(false)));
    assert_eq!(request_value(param, Field::DefaultValue), Some(Value::Null));
    assert_eq!(request_value(param, Field::ReturnType), Some(Value::from("String")));
}

#[test]
fn test_facet_sets_by_node_type() {
    let expected = [
        (FacetSet::of(&TypeRef::new("Int")), 0),
        (FacetSet::of(&Attribute::new("A")), 0),
        (FacetSet::of(&Parameter::new("p")), 2),
        (FacetSet::of(&Property::new("P")), 5),
        (FacetSet::of(&Method::new("M")), 5),
        (FacetSet::of(&TypeDecl::new("T")), 4),
    ];
    let counts: Vec<usize> = expected.iter().map(|(set, _)| set.len()).collect();
    let wanted: Vec<usize> = expected.iter().map(|(_, n)| *n).collect();
    assert_eq!(counts, wanted);

    let decl = FacetSet::of(&TypeDecl::new("T"));
    assert!(decl.contains(Facet::Namespace));
    assert!(!decl.contains(Facet::ReturnType));
}
