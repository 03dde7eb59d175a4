//! Common test utilities for building raw model fixtures.
use mokei::model::*;

/// The `Sales` module scenario: one entity `Order` with a single `Amount`
/// attribute of kind Decimal, no associations, zero microflows, no module
/// security.
#[allow(dead_code)]
pub fn sales_module() -> RawModule {
    RawModule {
        name: "Sales".to_string(),
        domain_model: Handle::loaded(
            "Sales domain model",
            RawDomainModel {
                entities: vec![Handle::loaded("Order", order_entity())],
                associations: vec![],
            },
        ),
        documents: vec![],
        security: None,
    }
}

#[allow(dead_code)]
pub fn order_entity() -> RawEntity {
    RawEntity {
        name: "Order".to_string(),
        documentation: String::new(),
        generalization: Ref::Absent,
        attributes: vec![RawAttribute {
            name: "Amount".to_string(),
            documentation: String::new(),
            attribute_type: RawAttributeType::Decimal,
            value: None,
        }],
        validation_rules: vec![],
        event_handlers: vec![],
        indexes: vec![],
        access_rules: vec![],
    }
}

/// An entity with every sub-sequence populated, for projection tests.
#[allow(dead_code)]
pub fn customer_entity() -> RawEntity {
    RawEntity {
        name: "Customer".to_string(),
        documentation: "A buying party.".to_string(),
        generalization: Ref::name("CRM.Party"),
        attributes: vec![
            RawAttribute {
                name: "Name".to_string(),
                documentation: String::new(),
                attribute_type: RawAttributeType::String { length: 200 },
                value: Some(RawAttributeValue::Stored {
                    default_value: String::new(),
                }),
            },
            RawAttribute {
                name: "Discount".to_string(),
                documentation: String::new(),
                attribute_type: RawAttributeType::Decimal,
                value: Some(RawAttributeValue::Calculated {
                    microflow: Ref::name("Sales.CalculateDiscount"),
                }),
            },
        ],
        validation_rules: vec![RawValidationRule {
            attribute: Ref::name("Sales.Customer.Name"),
            error_message: "Name is required".to_string(),
            rule: RawRuleKind::Required,
        }],
        event_handlers: vec![RawEventHandler {
            event: RawEventType::Commit,
            moment: RawEventMoment::Before,
            microflow: Ref::name("Sales.BeforeCommitCustomer"),
            raise_error_on_false: true,
        }],
        indexes: vec![RawIndex {
            attributes: vec![Ref::name("Sales.Customer.Name")],
        }],
        access_rules: vec![RawAccessRule {
            module_roles: vec![Ref::name("Sales.Clerk")],
            allow_create: true,
            allow_delete: false,
            default_member_access: RawMemberAccess::ReadWrite,
        }],
    }
}

/// A minimal flow: StartEvent connected by one unconditional edge to an
/// EndEvent.
#[allow(dead_code)]
pub fn start_end_flow() -> RawMicroflow {
    RawMicroflow {
        name: "Noop".to_string(),
        qualified_name: "Sales.Noop".to_string(),
        documentation: String::new(),
        return_type: RawDataType::Nothing,
        allowed_roles: vec![],
        apply_entity_access: false,
        allow_concurrent_execution: true,
        objects: vec![
            RawFlowObject {
                id: "start".to_string(),
                kind: RawFlowObjectKind::StartEvent,
            },
            RawFlowObject {
                id: "end".to_string(),
                kind: RawFlowObjectKind::EndEvent {
                    return_value: String::new(),
                },
            },
        ],
        flows: vec![RawSequenceFlow {
            origin: Some("start".to_string()),
            destination: Some("end".to_string()),
            origin_connection_index: 0,
            destination_connection_index: 0,
            case_value: None,
        }],
    }
}

/// A flow with a parameter, an action, a split and conditional edges.
#[allow(dead_code)]
pub fn approval_flow() -> RawMicroflow {
    RawMicroflow {
        name: "ApproveOrder".to_string(),
        qualified_name: "Sales.ApproveOrder".to_string(),
        documentation: "Approves an order above threshold.".to_string(),
        return_type: RawDataType::Boolean,
        allowed_roles: vec![Ref::name("Sales.Manager"), Ref::Broken("role gone".to_string())],
        apply_entity_access: true,
        allow_concurrent_execution: false,
        objects: vec![
            RawFlowObject {
                id: "p1".to_string(),
                kind: RawFlowObjectKind::Parameter {
                    name: "Order".to_string(),
                    parameter_type: RawDataType::Object(Ref::name("Sales.Order")),
                    documentation: String::new(),
                },
            },
            RawFlowObject {
                id: "start".to_string(),
                kind: RawFlowObjectKind::StartEvent,
            },
            RawFlowObject {
                id: "retrieve".to_string(),
                kind: RawFlowObjectKind::Action {
                    caption: "Retrieve customer".to_string(),
                    action: RawAction::Retrieve {
                        source: RawRetrieveSource::Association {
                            start_variable: "Order".to_string(),
                            association: Ref::name("Sales.Order_Customer"),
                        },
                        output_variable: "Customer".to_string(),
                    },
                },
            },
            RawFlowObject {
                id: "split".to_string(),
                kind: RawFlowObjectKind::ExclusiveSplit {
                    caption: "Above threshold?".to_string(),
                    condition: RawSplitCondition::Expression("$Order/Amount > 1000".to_string()),
                },
            },
            RawFlowObject {
                id: "end".to_string(),
                kind: RawFlowObjectKind::EndEvent {
                    return_value: "true".to_string(),
                },
            },
        ],
        flows: vec![
            RawSequenceFlow {
                origin: Some("start".to_string()),
                destination: Some("retrieve".to_string()),
                origin_connection_index: 0,
                destination_connection_index: 0,
                case_value: None,
            },
            RawSequenceFlow {
                origin: Some("retrieve".to_string()),
                destination: Some("split".to_string()),
                origin_connection_index: 0,
                destination_connection_index: 0,
                case_value: None,
            },
            RawSequenceFlow {
                origin: Some("split".to_string()),
                destination: Some("end".to_string()),
                origin_connection_index: 1,
                destination_connection_index: 0,
                case_value: Some(RawCaseValue::Enumeration {
                    value: "true".to_string(),
                }),
            },
        ],
    }
}

/// A project with security settings and two modules.
#[allow(dead_code)]
pub fn shop_model() -> RawModel {
    RawModel {
        name: "Shop".to_string(),
        securities: vec![Handle::loaded(
            "project security",
            RawProjectSecurity {
                security_level: "CheckEverything".to_string(),
                check_security: true,
                user_roles: vec![RawUserRole {
                    name: "Administrator".to_string(),
                    description: "Full access".to_string(),
                    module_roles: vec![Ref::name("Sales.Manager"), Ref::Absent],
                }],
            },
        )],
        modules: vec![
            Handle::loaded("Sales", sales_module_with_flow()),
            Handle::loaded("CRM", empty_module("CRM")),
        ],
    }
}

#[allow(dead_code)]
pub fn sales_module_with_flow() -> RawModule {
    let mut module = sales_module();
    module.documents = vec![
        RawDocument::Microflow(Handle::loaded("Sales.Noop", start_end_flow())),
        RawDocument::Other {
            kind: "Page".to_string(),
            name: "Sales.OrderOverview".to_string(),
        },
    ];
    module.security = Some(Handle::loaded(
        "Sales security",
        RawModuleSecurity {
            module_roles: vec![RawModuleRole {
                name: "Manager".to_string(),
                documentation: String::new(),
            }],
        },
    ));
    module
}

#[allow(dead_code)]
pub fn empty_module(name: &str) -> RawModule {
    RawModule {
        name: name.to_string(),
        domain_model: Handle::loaded(
            format!("{name} domain model"),
            RawDomainModel::default(),
        ),
        documents: vec![],
        security: None,
    }
}
