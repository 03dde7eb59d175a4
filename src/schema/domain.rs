//! Domain-model records: entities, attributes, associations and their typed
//! sub-structures.
//!
//! Every record field is always emitted (null / empty string / empty
//! sequence, never a missing key) so the schema stays closed. Tagged
//! variants are the one exception: a variant carries only the fields
//! meaningful to its kind.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DomainModel {
    pub entities: Vec<Entity>,
    pub associations: Vec<Association>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub documentation: String,
    /// Qualified name of the generalized entity, or null. Resolution failure
    /// collapses to null as well; it is never fatal.
    pub generalization: Option<String>,
    pub attributes: Vec<Attribute>,
    pub validation_rules: Vec<ValidationRule>,
    pub event_handlers: Vec<EventHandler>,
    pub indexes: Vec<Index>,
    pub access_rules: Vec<AccessRule>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub documentation: String,
    pub value: Option<AttributeValue>,
}

/// The attribute-type projection, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum AttributeType {
    String { length: u32 },
    Integer,
    Long,
    Decimal,
    Boolean,
    DateTime { localized: bool },
    Enumeration { enumeration: Option<String> },
    AutoNumber,
    Binary,
    HashedString,
    Unknown { raw: String },
}

/// How an attribute obtains its value, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum AttributeValue {
    StoredValue { default_value: String },
    CalculatedValue { microflow: Option<String> },
    Unknown { raw: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub attribute: Option<String>,
    pub error_message: String,
    pub rule: RuleKind,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum RuleKind {
    Required,
    Unique,
    Range { min: String, max: String },
    RegEx { pattern: String },
    MaxLength { max_length: u32 },
    EqualsTo { value: String },
    Unknown { raw: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventHandler {
    pub event: String,
    pub moment: String,
    pub microflow: Option<String>,
    pub raise_error_on_false: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    pub module_roles: Vec<String>,
    pub allow_create: bool,
    pub allow_delete: bool,
    pub default_member_access: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub name: String,
    pub documentation: String,
    pub parent: Option<String>,
    pub child: Option<String>,
    #[serde(rename = "type")]
    pub association_type: String,
    pub owner: String,
    pub delete_behavior: DeleteBehavior,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBehavior {
    pub parent_delete: String,
    pub child_delete: String,
}
