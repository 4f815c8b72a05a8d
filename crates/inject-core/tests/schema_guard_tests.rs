use inject_core::{AssignError, InjectError, Injection, PropertyInjector, ResolveError};
use inject_domain::{PropertyDescriptor, PropertyKind, StepSchema, ValueType};
use serde_json::json;

fn sample_schema() -> StepSchema {
    let mut schema = StepSchema::new();
    schema.declare("Setup", PropertyDescriptor::new(PropertyKind::Step { order: 0 }, ValueType::Text))
          .unwrap();
    schema.declare("Items", PropertyDescriptor::new(PropertyKind::StepList { order: 1 }, ValueType::Text))
          .unwrap();
    schema.declare("Name", PropertyDescriptor::new(PropertyKind::VariableName { order: 2 }, ValueType::Text))
          .unwrap();
    schema.declare("Retries",
                   PropertyDescriptor::new(PropertyKind::VariableName { order: 3 }, ValueType::Integer))
          .unwrap();
    schema.declare("Ratio", PropertyDescriptor::new(PropertyKind::VariableName { order: 4 }, ValueType::Float))
          .unwrap();
    schema.declare("Enabled", PropertyDescriptor::new(PropertyKind::VariableName { order: 5 }, ValueType::Bool))
          .unwrap();
    schema.declare("Id",
                   PropertyDescriptor::new(PropertyKind::VariableName { order: 6 }, ValueType::Text).with_read_only(true))
          .unwrap();
    schema
}

fn sample_process() -> serde_json::Value {
    json!({
        "Setup": {"Name": null},
        "Items": [{"Name": null}],
        "Name": null,
        "Retries": null,
        "Ratio": null,
        "Enabled": null,
        "Id": "fixed"
    })
}

#[test]
fn declared_types_drive_coercion() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Retries", "3"));
    injector.add("k2", Injection::new("Ratio", "0.5"));
    injector.add("k3", Injection::new("Enabled", "true"));
    injector.add("k4", Injection::new("Name", "proceso"));

    let mut process = sample_process();
    injector.inject(&mut process).unwrap();
    assert_eq!(process["Retries"], json!(3));
    assert_eq!(process["Ratio"], json!(0.5));
    assert_eq!(process["Enabled"], json!(true));
    assert_eq!(process["Name"], json!("proceso"));
}

#[test]
fn declared_type_mismatch_is_rejected() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Retries", "tres"));

    let mut process = sample_process();
    let err = injector.inject(&mut process).unwrap_err();
    assert!(matches!(err,
                     InjectError::Assignment { source: AssignError::Coercion { .. }, .. }));
}

#[test]
fn read_only_property_rejects_assignment() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Id", "nuevo"));

    let mut process = sample_process();
    let err = injector.inject(&mut process).unwrap_err();
    assert!(matches!(err,
                     InjectError::Assignment { source: AssignError::ReadOnly { .. }, .. }));
    assert_eq!(process["Id"], json!("fixed"));
}

#[test]
fn step_slot_does_not_accept_scalars() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Setup", "texto"));

    let mut process = sample_process();
    let err = injector.inject(&mut process).unwrap_err();
    assert!(matches!(err,
                     InjectError::Assignment { source: AssignError::NotScalar { .. }, .. }));
}

#[test]
fn indexing_a_non_list_kind_is_a_resolution_error() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Setup[0].Name", "v"));

    let mut process = sample_process();
    let err = injector.inject(&mut process).unwrap_err();
    assert!(matches!(err,
                     InjectError::PathResolution { source: ResolveError::NotAList { .. }, .. }));
}

#[test]
fn traversing_a_list_kind_without_index_is_rejected() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Items.Name", "v"));

    let mut process = sample_process();
    let err = injector.inject(&mut process).unwrap_err();
    assert!(matches!(err,
                     InjectError::PathResolution { source: ResolveError::ListRequiresIndex { .. }, .. }));
}

#[test]
fn nested_variable_under_list_element_still_applies() {
    let mut injector = PropertyInjector::new().with_schema(sample_schema());
    injector.add("k1", Injection::new("Items[0].Name", "interno"));

    let mut process = sample_process();
    injector.inject(&mut process).unwrap();
    assert_eq!(process["Items"][0]["Name"], json!("interno"));
}
