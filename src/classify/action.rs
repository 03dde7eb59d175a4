//! The action-kind dispatch table, the widest variant family in the model.

use super::{classify_data_type, classify_parameter_mappings};
use crate::model::{RawAction, RawRetrieveSource};
use crate::resolve::resolve_ref;
use crate::schema::{ActionDetail, RetrieveSource, Translation};

/// Classifies one action into its tagged detail record.
///
/// One arm per known kind; the `Other` arm is the mandatory fallback that
/// keeps the engine forward-compatible with platform versions that add
/// action kinds this table does not know.
pub fn classify_action(action: &RawAction) -> ActionDetail {
    match action {
        RawAction::CreateObject {
            entity,
            output_variable,
            commit,
            refresh_in_client,
        } => ActionDetail::CreateObject {
            entity: resolve_ref(entity),
            output_variable: output_variable.clone(),
            commit: commit.clone(),
            refresh_in_client: *refresh_in_client,
        },
        RawAction::ChangeObject {
            variable,
            commit,
            refresh_in_client,
        } => ActionDetail::ChangeObject {
            variable: variable.clone(),
            commit: commit.clone(),
            refresh_in_client: *refresh_in_client,
        },
        RawAction::DeleteObject {
            variable,
            refresh_in_client,
        } => ActionDetail::DeleteObject {
            variable: variable.clone(),
            refresh_in_client: *refresh_in_client,
        },
        RawAction::CommitObject {
            variable,
            with_events,
            refresh_in_client,
        } => ActionDetail::CommitObject {
            variable: variable.clone(),
            with_events: *with_events,
            refresh_in_client: *refresh_in_client,
        },
        RawAction::RollbackObject {
            variable,
            refresh_in_client,
        } => ActionDetail::RollbackObject {
            variable: variable.clone(),
            refresh_in_client: *refresh_in_client,
        },
        RawAction::Retrieve {
            source,
            output_variable,
        } => ActionDetail::Retrieve {
            source: classify_retrieve_source(source),
            output_variable: output_variable.clone(),
        },
        RawAction::CastObject { output_variable } => ActionDetail::CastObject {
            output_variable: output_variable.clone(),
        },
        RawAction::CreateList {
            entity,
            output_variable,
        } => ActionDetail::CreateList {
            entity: resolve_ref(entity),
            output_variable: output_variable.clone(),
        },
        RawAction::ChangeList {
            list_variable,
            operation,
            value,
        } => ActionDetail::ChangeList {
            list_variable: list_variable.clone(),
            operation: operation.clone(),
            value: value.clone(),
        },
        RawAction::AggregateList {
            list_variable,
            function,
            attribute,
            output_variable,
        } => ActionDetail::AggregateList {
            list_variable: list_variable.clone(),
            function: function.clone(),
            attribute: attribute.clone(),
            output_variable: output_variable.clone(),
        },
        RawAction::ListOperation {
            operation,
            list_variable,
            output_variable,
        } => ActionDetail::ListOperation {
            operation: operation.clone(),
            list_variable: list_variable.clone(),
            output_variable: output_variable.clone(),
        },
        RawAction::CreateVariable {
            variable_name,
            variable_type,
            initial_value,
        } => ActionDetail::CreateVariable {
            variable_name: variable_name.clone(),
            variable_type: classify_data_type(variable_type),
            initial_value: initial_value.clone(),
        },
        RawAction::ChangeVariable { variable, value } => ActionDetail::ChangeVariable {
            variable: variable.clone(),
            value: value.clone(),
        },
        RawAction::MicroflowCall {
            microflow,
            parameter_mappings,
            output_variable,
            use_return_variable,
        } => ActionDetail::MicroflowCall {
            microflow: resolve_ref(microflow),
            parameter_mappings: classify_parameter_mappings(parameter_mappings),
            output_variable: output_variable.clone(),
            use_return_variable: *use_return_variable,
        },
        RawAction::JavaActionCall {
            java_action,
            parameter_mappings,
            output_variable,
        } => ActionDetail::JavaActionCall {
            java_action: resolve_ref(java_action),
            parameter_mappings: classify_parameter_mappings(parameter_mappings),
            output_variable: output_variable.clone(),
        },
        RawAction::ShowPage { page, title } => ActionDetail::ShowPage {
            page: resolve_ref(page),
            title: title.clone(),
        },
        RawAction::ClosePage => ActionDetail::ClosePage,
        RawAction::ShowHomePage => ActionDetail::ShowHomePage,
        RawAction::ShowMessage {
            template,
            translations,
            blocking,
        } => ActionDetail::ShowMessage {
            template: template.clone(),
            translations: translations
                .iter()
                .map(|translation| Translation {
                    language_code: translation.language_code.clone(),
                    text: translation.text.clone(),
                })
                .collect(),
            blocking: *blocking,
        },
        RawAction::ValidationFeedback {
            variable,
            member,
            template,
        } => ActionDetail::ValidationFeedback {
            variable: variable.clone(),
            member: resolve_ref(member),
            template: template.clone(),
        },
        RawAction::DownloadFile {
            file_variable,
            show_file_in_browser,
        } => ActionDetail::DownloadFile {
            file_variable: file_variable.clone(),
            show_file_in_browser: *show_file_in_browser,
        },
        RawAction::GenerateDocument {
            template,
            file_variable,
            document_type,
        } => ActionDetail::GenerateDocument {
            template: resolve_ref(template),
            file_variable: file_variable.clone(),
            document_type: document_type.clone(),
        },
        RawAction::LogMessage {
            level,
            message_template,
            include_latest_stack_trace,
        } => ActionDetail::LogMessage {
            level: level.clone(),
            message_template: message_template.clone(),
            include_latest_stack_trace: *include_latest_stack_trace,
        },
        RawAction::RestCall {
            method,
            location,
            output_variable,
        } => ActionDetail::RestCall {
            method: method.clone(),
            location: location.clone(),
            output_variable: output_variable.clone(),
        },
        RawAction::ImportMapping {
            mapping,
            input_variable,
            output_variable,
        } => ActionDetail::ImportMapping {
            mapping: resolve_ref(mapping),
            input_variable: input_variable.clone(),
            output_variable: output_variable.clone(),
        },
        RawAction::ExportMapping {
            mapping,
            input_variable,
            output_variable,
        } => ActionDetail::ExportMapping {
            mapping: resolve_ref(mapping),
            input_variable: input_variable.clone(),
            output_variable: output_variable.clone(),
        },
        RawAction::Other(raw) => ActionDetail::Unknown { raw: raw.clone() },
    }
}

fn classify_retrieve_source(source: &RawRetrieveSource) -> RetrieveSource {
    match source {
        RawRetrieveSource::Database {
            entity,
            constraint,
            range,
        } => RetrieveSource::Database {
            entity: resolve_ref(entity),
            constraint: constraint.clone(),
            range: range.clone(),
        },
        RawRetrieveSource::Association {
            start_variable,
            association,
        } => RetrieveSource::Association {
            start_variable: start_variable.clone(),
            association: resolve_ref(association),
        },
        RawRetrieveSource::Other(raw) => RetrieveSource::Unknown { raw: raw.clone() },
    }
}
