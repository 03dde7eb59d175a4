//! End-to-end extraction tests: module and project assembly, partial-failure
//! isolation, idempotence, and the emitted JSON shape.
mod common;
use common::*;
use mokei::extract::{extract_module, extract_project};
use mokei::model::*;
use mokei::report::Warnings;
use mokei::schema::AttributeType;
use serde_json::json;

#[test]
fn sales_module_scenario() {
    let mut warnings = Warnings::new();
    let module = extract_module(&sales_module(), &mut warnings);

    assert!(warnings.is_empty());
    assert_eq!(
        serde_json::to_value(&module).unwrap(),
        json!({
            "name": "Sales",
            "domainModel": {
                "entities": [{
                    "name": "Order",
                    "documentation": "",
                    "generalization": null,
                    "attributes": [{
                        "name": "Amount",
                        "type": {"kind": "Decimal"},
                        "documentation": "",
                        "value": null
                    }],
                    "validationRules": [],
                    "eventHandlers": [],
                    "indexes": [],
                    "accessRules": []
                }],
                "associations": []
            },
            "microflows": [],
            "security": null
        })
    );
}

#[test]
fn entity_sub_structures_are_fully_projected() {
    let mut warnings = Warnings::new();
    let mut raw = sales_module();
    raw.domain_model = Handle::loaded(
        "Sales domain model",
        RawDomainModel {
            entities: vec![Handle::loaded("Customer", customer_entity())],
            associations: vec![Handle::loaded(
                "Order_Customer",
                RawAssociation {
                    name: "Order_Customer".to_string(),
                    documentation: String::new(),
                    parent: Ref::name("Sales.Order"),
                    child: Ref::name("Sales.Customer"),
                    association_type: RawAssociationType::Reference,
                    owner: RawAssociationOwner::Default,
                    parent_delete: RawDeleteBehavior::DeleteMeButKeepReferences,
                    child_delete: RawDeleteBehavior::DeleteMeIfNoReferences,
                },
            )],
        },
    );

    let module = extract_module(&raw, &mut warnings);
    assert!(warnings.is_empty());

    let entity = &module.domain_model.entities[0];
    assert_eq!(entity.generalization.as_deref(), Some("CRM.Party"));
    assert_eq!(entity.attributes.len(), 2);
    assert_eq!(
        entity.attributes[0].attribute_type,
        AttributeType::String { length: 200 }
    );
    assert_eq!(entity.validation_rules[0].attribute.as_deref(), Some("Sales.Customer.Name"));
    assert_eq!(entity.event_handlers[0].event, "Commit");
    assert_eq!(entity.event_handlers[0].moment, "Before");
    assert_eq!(entity.indexes[0].attributes, vec!["Sales.Customer.Name"]);
    assert_eq!(entity.access_rules[0].default_member_access, "ReadWrite");

    let association = &module.domain_model.associations[0];
    assert_eq!(association.parent.as_deref(), Some("Sales.Order"));
    assert_eq!(association.association_type, "Reference");
    assert_eq!(association.delete_behavior.child_delete, "DeleteMeIfNoReferences");
}

#[test]
fn one_failing_entity_does_not_drop_its_siblings() {
    let mut raw = sales_module();
    raw.domain_model = Handle::loaded(
        "Sales domain model",
        RawDomainModel {
            entities: vec![
                Handle::loaded("Order", order_entity()),
                Handle::failed("Invoice", "model host dropped the connection"),
                Handle::loaded("Shipment", {
                    let mut entity = order_entity();
                    entity.name = "Shipment".to_string();
                    entity
                }),
            ],
            associations: vec![],
        },
    );

    let mut warnings = Warnings::new();
    let module = extract_module(&raw, &mut warnings);

    let names: Vec<&str> = module
        .domain_model
        .entities
        .iter()
        .map(|entity| entity.name.as_str())
        .collect();
    assert_eq!(names, vec!["Order", "Shipment"]);

    assert_eq!(warnings.len(), 1);
    let recorded = warnings.into_vec();
    assert_eq!(recorded[0].unit, "entity 'Invoice'");
    assert!(recorded[0].detail.contains("dropped the connection"));
}

#[test]
fn failed_domain_model_degrades_to_empty_with_warning() {
    let mut raw = sales_module();
    raw.domain_model = Handle::failed("Sales domain model", "corrupt unit");

    let mut warnings = Warnings::new();
    let module = extract_module(&raw, &mut warnings);

    assert!(module.domain_model.entities.is_empty());
    assert!(module.domain_model.associations.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(warnings.summary().contains("domain model of module 'Sales'"));
}

#[test]
fn failed_microflow_is_skipped_not_fatal() {
    let mut raw = sales_module_with_flow();
    raw.documents.push(RawDocument::Microflow(Handle::failed(
        "Sales.Broken",
        "unit refused to materialize",
    )));

    let mut warnings = Warnings::new();
    let module = extract_module(&raw, &mut warnings);

    assert_eq!(module.microflows.len(), 1);
    assert_eq!(module.microflows[0].qualified_name, "Sales.Noop");
    assert_eq!(warnings.len(), 1);
    assert!(warnings.summary().contains("microflow 'Sales.Broken'"));
}

#[test]
fn non_flow_documents_are_filtered_by_kind_tag() {
    let mut warnings = Warnings::new();
    let module = extract_module(&sales_module_with_flow(), &mut warnings);

    // The Page document contributes nothing and raises nothing.
    assert!(warnings.is_empty());
    assert_eq!(module.microflows.len(), 1);
}

#[test]
fn project_extraction_assembles_security_and_modules_in_order() {
    let extraction = extract_project(&shop_model());
    let document = extraction.document;

    assert!(extraction.warnings.is_empty());
    assert_eq!(document.project_name, "Shop");
    assert_eq!(document.project_security.security_level, "CheckEverything");
    assert!(document.project_security.check_security);
    assert_eq!(
        document.project_security.user_roles[0].module_roles,
        vec!["Sales.Manager".to_string()]
    );

    let module_names: Vec<&str> = document
        .modules
        .iter()
        .map(|module| module.name.as_str())
        .collect();
    assert_eq!(module_names, vec!["Sales", "CRM"]);

    let security = document.modules[0].security.as_ref().unwrap();
    assert_eq!(security.module_roles[0].name, "Manager");
}

#[test]
fn missing_project_security_is_a_valid_state_not_an_error() {
    let model = RawModel {
        name: "Bare".to_string(),
        securities: vec![],
        modules: vec![],
    };

    let extraction = extract_project(&model);

    assert!(extraction.warnings.is_empty());
    assert_eq!(extraction.document.project_security.security_level, "none");
    assert!(!extraction.document.project_security.check_security);
    assert!(extraction.document.project_security.user_roles.is_empty());
}

#[test]
fn failing_module_is_skipped_and_siblings_survive() {
    let mut model = shop_model();
    model.modules.insert(
        1,
        Handle::failed("Warehouse", "checkout timed out"),
    );

    let extraction = extract_project(&model);

    let module_names: Vec<&str> = extraction
        .document
        .modules
        .iter()
        .map(|module| module.name.as_str())
        .collect();
    assert_eq!(module_names, vec!["Sales", "CRM"]);
    assert_eq!(extraction.warnings.len(), 1);
    assert_eq!(extraction.warnings[0].unit, "module 'Warehouse'");
}

#[test]
fn extraction_is_idempotent_apart_from_the_timestamp() {
    let model = shop_model();

    let mut first = serde_json::to_value(extract_project(&model).document).unwrap();
    let mut second = serde_json::to_value(extract_project(&model).document).unwrap();

    first.as_object_mut().unwrap().remove("extractedAt");
    second.as_object_mut().unwrap().remove("extractedAt");

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn document_json_uses_camel_case_keys_with_every_field_present() {
    let extraction = extract_project(&shop_model());
    let value = serde_json::to_value(&extraction.document).unwrap();

    let top = value.as_object().unwrap();
    assert_eq!(
        top.keys().collect::<Vec<_>>(),
        vec!["projectName", "extractedAt", "projectSecurity", "modules"]
    );

    // CRM has no module security; the key is still present, as null.
    let crm = &value["modules"][1];
    assert!(crm.as_object().unwrap().contains_key("security"));
    assert_eq!(crm["security"], serde_json::Value::Null);

    // Flow records carry the full closed schema.
    let flow = &value["modules"][0]["microflows"][0];
    for key in [
        "name",
        "qualifiedName",
        "documentation",
        "returnType",
        "security",
        "parameters",
        "activities",
        "flows",
    ] {
        assert!(flow.as_object().unwrap().contains_key(key), "missing {key}");
    }
    assert_eq!(flow["activities"][0]["type"], "StartEvent");
    assert_eq!(flow["flows"][0]["originConnectionIndex"], 0);
}

#[test]
fn timestamp_is_iso_8601_utc() {
    let extraction = extract_project(&shop_model());
    let stamp = &extraction.document.extracted_at;

    assert!(stamp.ends_with('Z'), "expected UTC suffix, got {stamp}");
    assert_eq!(stamp.len(), "2026-01-01T00:00:00Z".len());
}
