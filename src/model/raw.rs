//! The canonical in-memory shape of the source model's structural side:
//! project, modules, domain models and security settings.
//!
//! These are plain structs, not a serialization format. The shell that talks
//! to the model host converts whatever it checks out into this shape; the
//! extraction engine only ever reads it. Every variant family carries an
//! `Other(String)` arm because the platform's type hierarchy, while closed
//! today, gains variants over time and the engine must classify them as
//! `Unknown` rather than reject them.

use super::flow::RawMicroflow;
use super::handle::{Handle, Ref};

/// The root of one checked-out application model.
#[derive(Debug, Clone)]
pub struct RawModel {
    pub name: String,
    pub securities: Vec<Handle<RawProjectSecurity>>,
    pub modules: Vec<Handle<RawModule>>,
}

/// One named module: a domain model, a document list and optional security.
#[derive(Debug, Clone)]
pub struct RawModule {
    pub name: String,
    pub domain_model: Handle<RawDomainModel>,
    pub documents: Vec<RawDocument>,
    pub security: Option<Handle<RawModuleSecurity>>,
}

/// A module-level document, tagged by kind. Only `Microflow` documents are
/// flow graphs; everything else is carried so that filtering happens by kind
/// tag rather than by probing.
#[derive(Debug, Clone)]
pub enum RawDocument {
    Microflow(Handle<RawMicroflow>),
    Other { kind: String, name: String },
}

#[derive(Debug, Clone, Default)]
pub struct RawDomainModel {
    pub entities: Vec<Handle<RawEntity>>,
    pub associations: Vec<Handle<RawAssociation>>,
}

#[derive(Debug, Clone)]
pub struct RawEntity {
    pub name: String,
    pub documentation: String,
    pub generalization: Ref,
    pub attributes: Vec<RawAttribute>,
    pub validation_rules: Vec<RawValidationRule>,
    pub event_handlers: Vec<RawEventHandler>,
    pub indexes: Vec<RawIndex>,
    pub access_rules: Vec<RawAccessRule>,
}

#[derive(Debug, Clone)]
pub struct RawAttribute {
    pub name: String,
    pub documentation: String,
    pub attribute_type: RawAttributeType,
    pub value: Option<RawAttributeValue>,
}

/// The attribute-type family of the platform's type system.
#[derive(Debug, Clone)]
pub enum RawAttributeType {
    String { length: u32 },
    Integer,
    Long,
    Decimal,
    Boolean,
    DateTime { localized: bool },
    Enumeration(Ref),
    AutoNumber,
    Binary,
    HashedString,
    Other(String),
}

/// How an attribute obtains its value.
#[derive(Debug, Clone)]
pub enum RawAttributeValue {
    Stored { default_value: String },
    Calculated { microflow: Ref },
    Other(String),
}

#[derive(Debug, Clone)]
pub struct RawValidationRule {
    pub attribute: Ref,
    pub error_message: String,
    pub rule: RawRuleKind,
}

#[derive(Debug, Clone)]
pub enum RawRuleKind {
    Required,
    Unique,
    Range { min: String, max: String },
    RegEx { pattern: String },
    MaxLength { max_length: u32 },
    EqualsTo { value: String },
    Other(String),
}

#[derive(Debug, Clone)]
pub struct RawEventHandler {
    pub event: RawEventType,
    pub moment: RawEventMoment,
    pub microflow: Ref,
    pub raise_error_on_false: bool,
}

#[derive(Debug, Clone)]
pub enum RawEventType {
    Create,
    Commit,
    Delete,
    Rollback,
    Other(String),
}

#[derive(Debug, Clone)]
pub enum RawEventMoment {
    Before,
    After,
    Other(String),
}

#[derive(Debug, Clone)]
pub struct RawIndex {
    pub attributes: Vec<Ref>,
}

#[derive(Debug, Clone)]
pub struct RawAccessRule {
    pub module_roles: Vec<Ref>,
    pub allow_create: bool,
    pub allow_delete: bool,
    pub default_member_access: RawMemberAccess,
}

#[derive(Debug, Clone)]
pub enum RawMemberAccess {
    None,
    ReadOnly,
    ReadWrite,
    Other(String),
}

#[derive(Debug, Clone)]
pub struct RawAssociation {
    pub name: String,
    pub documentation: String,
    pub parent: Ref,
    pub child: Ref,
    pub association_type: RawAssociationType,
    pub owner: RawAssociationOwner,
    pub parent_delete: RawDeleteBehavior,
    pub child_delete: RawDeleteBehavior,
}

#[derive(Debug, Clone)]
pub enum RawAssociationType {
    Reference,
    ReferenceSet,
    Other(String),
}

#[derive(Debug, Clone)]
pub enum RawAssociationOwner {
    Default,
    Both,
    Other(String),
}

#[derive(Debug, Clone)]
pub enum RawDeleteBehavior {
    DeleteMeAndReferences,
    DeleteMeButKeepReferences,
    DeleteMeIfNoReferences,
    Other(String),
}

#[derive(Debug, Clone)]
pub struct RawProjectSecurity {
    pub security_level: String,
    pub check_security: bool,
    pub user_roles: Vec<RawUserRole>,
}

#[derive(Debug, Clone)]
pub struct RawUserRole {
    pub name: String,
    pub description: String,
    pub module_roles: Vec<Ref>,
}

#[derive(Debug, Clone)]
pub struct RawModuleSecurity {
    pub module_roles: Vec<RawModuleRole>,
}

#[derive(Debug, Clone)]
pub struct RawModuleRole {
    pub name: String,
    pub documentation: String,
}
