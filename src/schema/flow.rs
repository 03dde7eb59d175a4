//! Flow-graph records: the executable unit, its activity nodes, and the
//! tagged projections of the action, condition, case-value and data-type
//! families.

use serde::Serialize;

/// One extracted executable unit.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub name: String,
    pub qualified_name: String,
    pub documentation: String,
    pub return_type: DataType,
    pub security: FlowSecurity,
    pub parameters: Vec<Parameter>,
    /// Activity nodes in the model's own iteration order. Re-sorting would
    /// produce spurious diffs between extraction runs.
    pub activities: Vec<ActivityNode>,
    /// Edges in the model's own iteration order.
    pub flows: Vec<Edge>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowSecurity {
    pub allowed_roles: Vec<String>,
    pub apply_entity_access: bool,
    pub allow_concurrent_execution: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: DataType,
    pub documentation: String,
}

/// One node of the flow graph, tagged by `type`.
///
/// Every variant carries the node's identifier. Identifiers are unique
/// within their flow and exist only so edges can name their endpoints; they
/// imply no ownership. Merges are not modeled separately — they exist
/// implicitly via edges, matching the source model's own representation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ActivityNode {
    ActionActivity {
        id: String,
        caption: String,
        action: ActionDetail,
    },
    StartEvent {
        id: String,
    },
    EndEvent {
        id: String,
        return_value: String,
    },
    ExclusiveSplit {
        id: String,
        caption: String,
        condition: SplitCondition,
    },
    Loop {
        id: String,
        loop_variable_name: String,
    },
    Continue {
        id: String,
    },
    Break {
        id: String,
    },
    Error {
        id: String,
    },
    Unknown {
        id: String,
        raw: String,
    },
}

impl ActivityNode {
    /// The node identifier, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            ActivityNode::ActionActivity { id, .. }
            | ActivityNode::StartEvent { id }
            | ActivityNode::EndEvent { id, .. }
            | ActivityNode::ExclusiveSplit { id, .. }
            | ActivityNode::Loop { id, .. }
            | ActivityNode::Continue { id }
            | ActivityNode::Break { id }
            | ActivityNode::Error { id }
            | ActivityNode::Unknown { id, .. } => id,
        }
    }
}

/// The action-kind projection, tagged by `actionType`. Unmapped kinds fall
/// back to `Unknown` with the raw kind name — never a hard failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "actionType", rename_all_fields = "camelCase")]
pub enum ActionDetail {
    CreateObject {
        entity: Option<String>,
        output_variable: String,
        commit: String,
        refresh_in_client: bool,
    },
    ChangeObject {
        variable: String,
        commit: String,
        refresh_in_client: bool,
    },
    DeleteObject {
        variable: String,
        refresh_in_client: bool,
    },
    CommitObject {
        variable: String,
        with_events: bool,
        refresh_in_client: bool,
    },
    RollbackObject {
        variable: String,
        refresh_in_client: bool,
    },
    Retrieve {
        source: RetrieveSource,
        output_variable: String,
    },
    CastObject {
        output_variable: String,
    },
    CreateList {
        entity: Option<String>,
        output_variable: String,
    },
    ChangeList {
        list_variable: String,
        operation: String,
        value: String,
    },
    AggregateList {
        list_variable: String,
        function: String,
        attribute: String,
        output_variable: String,
    },
    ListOperation {
        operation: String,
        list_variable: String,
        output_variable: String,
    },
    CreateVariable {
        variable_name: String,
        variable_type: DataType,
        initial_value: String,
    },
    ChangeVariable {
        variable: String,
        value: String,
    },
    MicroflowCall {
        microflow: Option<String>,
        parameter_mappings: Vec<ParameterMapping>,
        output_variable: String,
        use_return_variable: bool,
    },
    JavaActionCall {
        java_action: Option<String>,
        parameter_mappings: Vec<ParameterMapping>,
        output_variable: String,
    },
    ShowPage {
        page: Option<String>,
        title: String,
    },
    ClosePage,
    ShowHomePage,
    ShowMessage {
        template: String,
        translations: Vec<Translation>,
        blocking: bool,
    },
    ValidationFeedback {
        variable: String,
        member: Option<String>,
        template: String,
    },
    DownloadFile {
        file_variable: String,
        show_file_in_browser: bool,
    },
    GenerateDocument {
        template: Option<String>,
        file_variable: String,
        document_type: String,
    },
    LogMessage {
        level: String,
        message_template: String,
        include_latest_stack_trace: bool,
    },
    RestCall {
        method: String,
        location: String,
        output_variable: String,
    },
    ImportMapping {
        mapping: Option<String>,
        input_variable: String,
        output_variable: String,
    },
    ExportMapping {
        mapping: Option<String>,
        input_variable: String,
        output_variable: String,
    },
    Unknown {
        raw: String,
    },
}

/// Where a retrieve action reads from, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum RetrieveSource {
    Database {
        entity: Option<String>,
        constraint: String,
        range: String,
    },
    Association {
        start_variable: String,
        association: Option<String>,
    },
    Unknown {
        raw: String,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterMapping {
    pub parameter: Option<String>,
    pub argument: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_code: String,
    pub text: String,
}

/// Condition attached to an exclusive split, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum SplitCondition {
    Expression {
        expression: String,
    },
    Rule {
        rule: Option<String>,
        parameter_mappings: Vec<ParameterMapping>,
    },
    Unknown {
        raw: String,
    },
}

/// Guard value on a conditional edge, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum CaseValue {
    Enumeration { value: String },
    Inheritance { entity: Option<String> },
    NoCase,
    Unknown { raw: String },
}

/// The data-type projection, tagged by `kind`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum DataType {
    String,
    Integer,
    Long,
    Decimal,
    Boolean,
    DateTime,
    Binary,
    Enumeration { enumeration: Option<String> },
    Object { entity: Option<String> },
    List { entity: Option<String> },
    Nothing,
    Unknown { raw: String },
}

/// One directed edge of the flow graph. Endpoints are node identifiers;
/// either is null when unset in the source or when it names a node the flow
/// does not contain.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub origin_connection_index: u32,
    pub destination_connection_index: u32,
    pub case_value: Option<CaseValue>,
}
