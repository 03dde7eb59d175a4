//! Per-unit projections: one materialized entity, association or security
//! record in, one normalized output record out.
//!
//! Each function assigns every output field, so the emitted schema is closed
//! and key order is stable for diffing.

use crate::classify::{
    association_owner_name, association_type_name, classify_attribute_type,
    classify_attribute_value, classify_rule_kind, delete_behavior_name, event_moment_name,
    event_type_name, member_access_name,
};
use crate::model::{
    RawAccessRule, RawAssociation, RawAttribute, RawEntity, RawEventHandler, RawIndex,
    RawModuleSecurity, RawProjectSecurity, RawUserRole, RawValidationRule,
};
use crate::resolve::resolve_ref;
use crate::schema::{
    AccessRule, Association, Attribute, DeleteBehavior, Entity, EventHandler, Index, ModuleRole,
    ModuleSecurity, ProjectSecurity, UserRole, ValidationRule,
};

pub fn extract_entity(raw: &RawEntity) -> Entity {
    Entity {
        name: raw.name.clone(),
        documentation: raw.documentation.clone(),
        generalization: resolve_ref(&raw.generalization),
        attributes: raw.attributes.iter().map(extract_attribute).collect(),
        validation_rules: raw
            .validation_rules
            .iter()
            .map(extract_validation_rule)
            .collect(),
        event_handlers: raw
            .event_handlers
            .iter()
            .map(extract_event_handler)
            .collect(),
        indexes: raw.indexes.iter().map(extract_index).collect(),
        access_rules: raw.access_rules.iter().map(extract_access_rule).collect(),
    }
}

fn extract_attribute(raw: &RawAttribute) -> Attribute {
    Attribute {
        name: raw.name.clone(),
        attribute_type: classify_attribute_type(&raw.attribute_type),
        documentation: raw.documentation.clone(),
        value: raw.value.as_ref().map(classify_attribute_value),
    }
}

fn extract_validation_rule(raw: &RawValidationRule) -> ValidationRule {
    ValidationRule {
        attribute: resolve_ref(&raw.attribute),
        error_message: raw.error_message.clone(),
        rule: classify_rule_kind(&raw.rule),
    }
}

fn extract_event_handler(raw: &RawEventHandler) -> EventHandler {
    EventHandler {
        event: event_type_name(&raw.event),
        moment: event_moment_name(&raw.moment),
        microflow: resolve_ref(&raw.microflow),
        raise_error_on_false: raw.raise_error_on_false,
    }
}

fn extract_index(raw: &RawIndex) -> Index {
    Index {
        attributes: raw.attributes.iter().filter_map(resolve_ref).collect(),
    }
}

fn extract_access_rule(raw: &RawAccessRule) -> AccessRule {
    AccessRule {
        module_roles: raw.module_roles.iter().filter_map(resolve_ref).collect(),
        allow_create: raw.allow_create,
        allow_delete: raw.allow_delete,
        default_member_access: member_access_name(&raw.default_member_access),
    }
}

pub fn extract_association(raw: &RawAssociation) -> Association {
    Association {
        name: raw.name.clone(),
        documentation: raw.documentation.clone(),
        parent: resolve_ref(&raw.parent),
        child: resolve_ref(&raw.child),
        association_type: association_type_name(&raw.association_type),
        owner: association_owner_name(&raw.owner),
        delete_behavior: DeleteBehavior {
            parent_delete: delete_behavior_name(&raw.parent_delete),
            child_delete: delete_behavior_name(&raw.child_delete),
        },
    }
}

pub fn extract_project_security(raw: &RawProjectSecurity) -> ProjectSecurity {
    ProjectSecurity {
        security_level: raw.security_level.clone(),
        check_security: raw.check_security,
        user_roles: raw.user_roles.iter().map(extract_user_role).collect(),
    }
}

pub fn extract_user_role(raw: &RawUserRole) -> UserRole {
    UserRole {
        name: raw.name.clone(),
        description: raw.description.clone(),
        module_roles: raw.module_roles.iter().filter_map(resolve_ref).collect(),
    }
}

pub fn extract_module_security(raw: &RawModuleSecurity) -> ModuleSecurity {
    ModuleSecurity {
        module_roles: raw
            .module_roles
            .iter()
            .map(|role| ModuleRole {
                name: role.name.clone(),
                documentation: role.documentation.clone(),
            })
            .collect(),
    }
}
