//! The type classifier: one exhaustive dispatch table per closed variant
//! family of the source model.
//!
//! Each function is a single `match` that maps a raw variant to its tagged
//! output projection. The match arms ARE the variant table: the full set is
//! auditable in one place per family, and the `Other` arm is the mandatory
//! fallback that turns anything outside the known set into an `Unknown`
//! projection carrying a diagnostic. Classification never fails. The input
//! families are disjoint, so arm order carries no semantics today; should
//! the platform ever introduce an overlapping variant, the first matching
//! arm wins.

mod action;

pub use action::classify_action;

use crate::model::{
    RawAssociationOwner, RawAssociationType, RawAttributeType, RawAttributeValue, RawCaseValue,
    RawDataType, RawDeleteBehavior, RawEventMoment, RawEventType, RawFlowObject,
    RawFlowObjectKind, RawMemberAccess, RawRuleKind, RawSplitCondition,
};
use crate::resolve::resolve_ref;
use crate::schema::{
    ActivityNode, AttributeType, AttributeValue, CaseValue, DataType, Parameter, ParameterMapping,
    RuleKind, SplitCondition,
};

/// Projection of one flow object: either a parameter, which the flow
/// extractor accumulates separately, or an activity node.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowObjectProjection {
    Parameter(Parameter),
    Activity(ActivityNode),
}

/// Classifies one flow object into its projection.
pub fn classify_flow_object(object: &RawFlowObject) -> FlowObjectProjection {
    let id = object.id.clone();
    let activity = match &object.kind {
        RawFlowObjectKind::Parameter {
            name,
            parameter_type,
            documentation,
        } => {
            return FlowObjectProjection::Parameter(Parameter {
                name: name.clone(),
                parameter_type: classify_data_type(parameter_type),
                documentation: documentation.clone(),
            });
        }
        RawFlowObjectKind::Action { caption, action } => ActivityNode::ActionActivity {
            id,
            caption: caption.clone(),
            action: classify_action(action),
        },
        RawFlowObjectKind::StartEvent => ActivityNode::StartEvent { id },
        RawFlowObjectKind::EndEvent { return_value } => ActivityNode::EndEvent {
            id,
            return_value: return_value.clone(),
        },
        RawFlowObjectKind::ExclusiveSplit { caption, condition } => ActivityNode::ExclusiveSplit {
            id,
            caption: caption.clone(),
            condition: classify_split_condition(condition),
        },
        RawFlowObjectKind::Loop { loop_variable_name } => ActivityNode::Loop {
            id,
            loop_variable_name: loop_variable_name.clone(),
        },
        RawFlowObjectKind::Continue => ActivityNode::Continue { id },
        RawFlowObjectKind::Break => ActivityNode::Break { id },
        RawFlowObjectKind::ErrorEvent => ActivityNode::Error { id },
        RawFlowObjectKind::Other(raw) => ActivityNode::Unknown {
            id,
            raw: raw.clone(),
        },
    };
    FlowObjectProjection::Activity(activity)
}

pub fn classify_attribute_type(attribute_type: &RawAttributeType) -> AttributeType {
    match attribute_type {
        RawAttributeType::String { length } => AttributeType::String { length: *length },
        RawAttributeType::Integer => AttributeType::Integer,
        RawAttributeType::Long => AttributeType::Long,
        RawAttributeType::Decimal => AttributeType::Decimal,
        RawAttributeType::Boolean => AttributeType::Boolean,
        RawAttributeType::DateTime { localized } => AttributeType::DateTime {
            localized: *localized,
        },
        RawAttributeType::Enumeration(enumeration) => AttributeType::Enumeration {
            enumeration: resolve_ref(enumeration),
        },
        RawAttributeType::AutoNumber => AttributeType::AutoNumber,
        RawAttributeType::Binary => AttributeType::Binary,
        RawAttributeType::HashedString => AttributeType::HashedString,
        RawAttributeType::Other(raw) => AttributeType::Unknown { raw: raw.clone() },
    }
}

pub fn classify_attribute_value(value: &RawAttributeValue) -> AttributeValue {
    match value {
        RawAttributeValue::Stored { default_value } => AttributeValue::StoredValue {
            default_value: default_value.clone(),
        },
        RawAttributeValue::Calculated { microflow } => AttributeValue::CalculatedValue {
            microflow: resolve_ref(microflow),
        },
        RawAttributeValue::Other(raw) => AttributeValue::Unknown { raw: raw.clone() },
    }
}

pub fn classify_rule_kind(rule: &RawRuleKind) -> RuleKind {
    match rule {
        RawRuleKind::Required => RuleKind::Required,
        RawRuleKind::Unique => RuleKind::Unique,
        RawRuleKind::Range { min, max } => RuleKind::Range {
            min: min.clone(),
            max: max.clone(),
        },
        RawRuleKind::RegEx { pattern } => RuleKind::RegEx {
            pattern: pattern.clone(),
        },
        RawRuleKind::MaxLength { max_length } => RuleKind::MaxLength {
            max_length: *max_length,
        },
        RawRuleKind::EqualsTo { value } => RuleKind::EqualsTo {
            value: value.clone(),
        },
        RawRuleKind::Other(raw) => RuleKind::Unknown { raw: raw.clone() },
    }
}

pub fn classify_data_type(data_type: &RawDataType) -> DataType {
    match data_type {
        RawDataType::String => DataType::String,
        RawDataType::Integer => DataType::Integer,
        RawDataType::Long => DataType::Long,
        RawDataType::Decimal => DataType::Decimal,
        RawDataType::Boolean => DataType::Boolean,
        RawDataType::DateTime => DataType::DateTime,
        RawDataType::Binary => DataType::Binary,
        RawDataType::Enumeration(enumeration) => DataType::Enumeration {
            enumeration: resolve_ref(enumeration),
        },
        RawDataType::Object(entity) => DataType::Object {
            entity: resolve_ref(entity),
        },
        RawDataType::List(entity) => DataType::List {
            entity: resolve_ref(entity),
        },
        RawDataType::Nothing => DataType::Nothing,
        RawDataType::Other(raw) => DataType::Unknown { raw: raw.clone() },
    }
}

pub fn classify_split_condition(condition: &RawSplitCondition) -> SplitCondition {
    match condition {
        RawSplitCondition::Expression(expression) => SplitCondition::Expression {
            expression: expression.clone(),
        },
        RawSplitCondition::Rule {
            rule,
            parameter_mappings,
        } => SplitCondition::Rule {
            rule: resolve_ref(rule),
            parameter_mappings: classify_parameter_mappings(parameter_mappings),
        },
        RawSplitCondition::Other(raw) => SplitCondition::Unknown { raw: raw.clone() },
    }
}

pub fn classify_case_value(case_value: &RawCaseValue) -> CaseValue {
    match case_value {
        RawCaseValue::Enumeration { value } => CaseValue::Enumeration {
            value: value.clone(),
        },
        RawCaseValue::Inheritance { entity } => CaseValue::Inheritance {
            entity: resolve_ref(entity),
        },
        RawCaseValue::NoCase => CaseValue::NoCase,
        RawCaseValue::Other(raw) => CaseValue::Unknown { raw: raw.clone() },
    }
}

pub(crate) fn classify_parameter_mappings(
    mappings: &[crate::model::RawParameterMapping],
) -> Vec<ParameterMapping> {
    mappings
        .iter()
        .map(|mapping| ParameterMapping {
            parameter: resolve_ref(&mapping.parameter),
            argument: mapping.argument.clone(),
        })
        .collect()
}

// The event and member-access families project to plain strings rather than
// tagged records; unknown variants pass their raw kind name through.

pub fn event_type_name(event: &RawEventType) -> String {
    match event {
        RawEventType::Create => "Create".to_string(),
        RawEventType::Commit => "Commit".to_string(),
        RawEventType::Delete => "Delete".to_string(),
        RawEventType::Rollback => "Rollback".to_string(),
        RawEventType::Other(raw) => raw.clone(),
    }
}

pub fn event_moment_name(moment: &RawEventMoment) -> String {
    match moment {
        RawEventMoment::Before => "Before".to_string(),
        RawEventMoment::After => "After".to_string(),
        RawEventMoment::Other(raw) => raw.clone(),
    }
}

pub fn member_access_name(access: &RawMemberAccess) -> String {
    match access {
        RawMemberAccess::None => "None".to_string(),
        RawMemberAccess::ReadOnly => "ReadOnly".to_string(),
        RawMemberAccess::ReadWrite => "ReadWrite".to_string(),
        RawMemberAccess::Other(raw) => raw.clone(),
    }
}

pub fn association_type_name(association_type: &RawAssociationType) -> String {
    match association_type {
        RawAssociationType::Reference => "Reference".to_string(),
        RawAssociationType::ReferenceSet => "ReferenceSet".to_string(),
        RawAssociationType::Other(raw) => raw.clone(),
    }
}

pub fn association_owner_name(owner: &RawAssociationOwner) -> String {
    match owner {
        RawAssociationOwner::Default => "Default".to_string(),
        RawAssociationOwner::Both => "Both".to_string(),
        RawAssociationOwner::Other(raw) => raw.clone(),
    }
}

pub fn delete_behavior_name(behavior: &RawDeleteBehavior) -> String {
    match behavior {
        RawDeleteBehavior::DeleteMeAndReferences => "DeleteMeAndReferences".to_string(),
        RawDeleteBehavior::DeleteMeButKeepReferences => "DeleteMeButKeepReferences".to_string(),
        RawDeleteBehavior::DeleteMeIfNoReferences => "DeleteMeIfNoReferences".to_string(),
        RawDeleteBehavior::Other(raw) => raw.clone(),
    }
}
