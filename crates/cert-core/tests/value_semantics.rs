use cert_core::{Class, PrimitiveKind, Value};

#[test]
fn strings_compare_by_content() {
    assert_eq!(Value::from("foo"), Value::from(String::from("foo")));
    assert_ne!(Value::from("foo"), Value::from("bar"));
}

#[test]
fn numbers_compare_by_ieee_equality() {
    assert_eq!(Value::from(12), Value::from(12.0));
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_eq!(Value::from(0.0), Value::from(-0.0));
}

#[test]
fn cross_kind_values_are_never_equal() {
    assert_ne!(Value::from(0), Value::from(false));
    assert_ne!(Value::from(""), Value::Undefined);
    assert_ne!(Value::from("1"), Value::from(1));
}

#[test]
fn symbols_compare_by_identity() {
    let a = Value::symbol("tag");
    let b = Value::symbol("tag");
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn objects_compare_by_identity() {
    let map = Class::base("Object").derive("Map");
    let first = map.construct();
    let second = map.construct();
    assert_ne!(first, second);
    assert_eq!(first, first.clone());
}

#[test]
fn functions_compare_by_identity() {
    let f = Value::function("run");
    assert_ne!(f, Value::function("run"));
    assert_eq!(f, f.clone());
}

#[test]
fn every_variant_reports_its_kind() {
    let map = Class::base("Object").derive("Map");
    assert_eq!(Value::Undefined.kind(), PrimitiveKind::Undefined);
    assert_eq!(Value::from(true).kind(), PrimitiveKind::Boolean);
    assert_eq!(Value::from(1.5).kind(), PrimitiveKind::Number);
    assert_eq!(Value::from("x").kind(), PrimitiveKind::String);
    assert_eq!(Value::symbol("s").kind(), PrimitiveKind::Symbol);
    assert_eq!(map.construct().kind(), PrimitiveKind::Object);
    assert_eq!(Value::function("f").kind(), PrimitiveKind::Function);
}

#[test]
fn kind_tags_round_trip_through_parse() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(PrimitiveKind::parse("bar"), None);
    assert_eq!(PrimitiveKind::parse("Number"), None);
}

#[test]
fn instance_of_walks_the_class_chain() {
    let object = Class::base("Object");
    let collection = object.derive("Collection");
    let map = collection.derive("Map");
    let set = collection.derive("Set");

    let value = map.construct();
    assert!(value.instance_of(&map));
    assert!(value.instance_of(&collection));
    assert!(value.instance_of(&object));
    assert!(!value.instance_of(&set));
}

#[test]
fn same_name_classes_are_distinct() {
    let first = Class::base("Map");
    let second = Class::base("Map");
    assert_ne!(first, second);
    assert!(!first.construct().instance_of(&second));
}

#[test]
fn non_objects_are_never_instances() {
    let object = Class::base("Object");
    assert!(!Value::from(1).instance_of(&object));
    assert!(!Value::from("x").instance_of(&object));
    assert!(!Value::Undefined.instance_of(&object));
    assert!(!Value::function("f").instance_of(&object));
}
