//! The canonical in-memory shape of one executable flow graph: its typed
//! object collection, its sequence flows, and the action family.
//!
//! The action family is by far the widest variant set in the platform. Each
//! variant here mirrors the attribute shape the platform gives that action
//! kind; cross-references stay as [`Ref`] until extraction resolves them.

use super::handle::Ref;

/// One executable unit as checked out from the model host.
#[derive(Debug, Clone)]
pub struct RawMicroflow {
    pub name: String,
    pub qualified_name: String,
    pub documentation: String,
    pub return_type: RawDataType,
    pub allowed_roles: Vec<Ref>,
    pub apply_entity_access: bool,
    pub allow_concurrent_execution: bool,
    pub objects: Vec<RawFlowObject>,
    pub flows: Vec<RawSequenceFlow>,
}

/// One node in the flow graph. The identifier is unique within the flow and
/// is what sequence flows point at.
#[derive(Debug, Clone)]
pub struct RawFlowObject {
    pub id: String,
    pub kind: RawFlowObjectKind,
}

#[derive(Debug, Clone)]
pub enum RawFlowObjectKind {
    Parameter {
        name: String,
        parameter_type: RawDataType,
        documentation: String,
    },
    Action {
        caption: String,
        action: RawAction,
    },
    StartEvent,
    EndEvent {
        return_value: String,
    },
    ExclusiveSplit {
        caption: String,
        condition: RawSplitCondition,
    },
    Loop {
        loop_variable_name: String,
    },
    Continue,
    Break,
    ErrorEvent,
    Other(String),
}

/// The platform's action family. Variant shapes follow the platform's own
/// attribute sets; unknown kinds travel through `Other`.
#[derive(Debug, Clone)]
pub enum RawAction {
    CreateObject {
        entity: Ref,
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
        source: RawRetrieveSource,
        output_variable: String,
    },
    CastObject {
        output_variable: String,
    },
    CreateList {
        entity: Ref,
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
        variable_type: RawDataType,
        initial_value: String,
    },
    ChangeVariable {
        variable: String,
        value: String,
    },
    MicroflowCall {
        microflow: Ref,
        parameter_mappings: Vec<RawParameterMapping>,
        output_variable: String,
        use_return_variable: bool,
    },
    JavaActionCall {
        java_action: Ref,
        parameter_mappings: Vec<RawParameterMapping>,
        output_variable: String,
    },
    ShowPage {
        page: Ref,
        title: String,
    },
    ClosePage,
    ShowHomePage,
    ShowMessage {
        template: String,
        translations: Vec<RawTranslation>,
        blocking: bool,
    },
    ValidationFeedback {
        variable: String,
        member: Ref,
        template: String,
    },
    DownloadFile {
        file_variable: String,
        show_file_in_browser: bool,
    },
    GenerateDocument {
        template: Ref,
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
        mapping: Ref,
        input_variable: String,
        output_variable: String,
    },
    ExportMapping {
        mapping: Ref,
        input_variable: String,
        output_variable: String,
    },
    Other(String),
}

/// Where a retrieve action reads from.
#[derive(Debug, Clone)]
pub enum RawRetrieveSource {
    Database {
        entity: Ref,
        constraint: String,
        range: String,
    },
    Association {
        start_variable: String,
        association: Ref,
    },
    Other(String),
}

/// One argument binding of a microflow, Java-action or rule call.
#[derive(Debug, Clone)]
pub struct RawParameterMapping {
    pub parameter: Ref,
    pub argument: String,
}

/// One translated text of a message template.
#[derive(Debug, Clone)]
pub struct RawTranslation {
    pub language_code: String,
    pub text: String,
}

/// Condition attached to an exclusive split.
#[derive(Debug, Clone)]
pub enum RawSplitCondition {
    Expression(String),
    Rule {
        rule: Ref,
        parameter_mappings: Vec<RawParameterMapping>,
    },
    Other(String),
}

/// Guard value on a conditional sequence flow.
#[derive(Debug, Clone)]
pub enum RawCaseValue {
    Enumeration { value: String },
    Inheritance { entity: Ref },
    NoCase,
    Other(String),
}

/// One directed edge between two flow objects. Endpoints are node
/// identifiers; either may be unset in a model that is mid-edit.
#[derive(Debug, Clone)]
pub struct RawSequenceFlow {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub origin_connection_index: u32,
    pub destination_connection_index: u32,
    pub case_value: Option<RawCaseValue>,
}

/// The data-type family used for flow return types, parameters and variables.
#[derive(Debug, Clone)]
pub enum RawDataType {
    String,
    Integer,
    Long,
    Decimal,
    Boolean,
    DateTime,
    Binary,
    Enumeration(Ref),
    Object(Ref),
    List(Ref),
    Nothing,
    Other(String),
}
