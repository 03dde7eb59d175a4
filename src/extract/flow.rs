//! Flow-graph extraction: one executable unit into its normalized `Flow`.

use crate::classify::{classify_case_value, classify_data_type, classify_flow_object, FlowObjectProjection};
use crate::model::{RawMicroflow, RawSequenceFlow};
use crate::resolve::resolve_ref;
use crate::schema::{Edge, Flow, FlowSecurity};
use ahash::AHashSet;
use itertools::{Either, Itertools};

/// Projects one flow in a single pass over its object collection and a
/// single pass over its edge collection.
///
/// Parameters are split out of the node collection; every other node lands
/// in `activities`. Both sequences keep the model's native iteration order —
/// the output must diff cleanly across extraction runs, and re-ordering
/// would produce spurious diffs.
pub fn extract_flow(raw: &RawMicroflow) -> Flow {
    let known_ids: AHashSet<&str> = raw.objects.iter().map(|object| object.id.as_str()).collect();

    let (parameters, activities): (Vec<_>, Vec<_>) = raw
        .objects
        .iter()
        .map(classify_flow_object)
        .partition_map(|projection| match projection {
            FlowObjectProjection::Parameter(parameter) => Either::Left(parameter),
            FlowObjectProjection::Activity(activity) => Either::Right(activity),
        });

    let flows = raw
        .flows
        .iter()
        .map(|sequence_flow| extract_edge(sequence_flow, &known_ids))
        .collect();

    Flow {
        name: raw.name.clone(),
        qualified_name: raw.qualified_name.clone(),
        documentation: raw.documentation.clone(),
        return_type: classify_data_type(&raw.return_type),
        security: FlowSecurity {
            allowed_roles: raw.allowed_roles.iter().filter_map(resolve_ref).collect(),
            apply_entity_access: raw.apply_entity_access,
            allow_concurrent_execution: raw.allow_concurrent_execution,
        },
        parameters,
        activities,
        flows,
    }
}

/// Resolves one edge's endpoints against the flow's node identifiers. An
/// endpoint that is unset, or that names a node the flow does not contain,
/// becomes null.
fn extract_edge(raw: &RawSequenceFlow, known_ids: &AHashSet<&str>) -> Edge {
    Edge {
        origin: resolve_endpoint(raw.origin.as_deref(), known_ids),
        destination: resolve_endpoint(raw.destination.as_deref(), known_ids),
        origin_connection_index: raw.origin_connection_index,
        destination_connection_index: raw.destination_connection_index,
        case_value: raw.case_value.as_ref().map(classify_case_value),
    }
}

fn resolve_endpoint(endpoint: Option<&str>, known_ids: &AHashSet<&str>) -> Option<String> {
    match endpoint {
        Some(id) if known_ids.contains(id) => Some(id.to_string()),
        Some(id) => {
            tracing::debug!(id, "edge endpoint names a node outside this flow, emitting null");
            None
        }
        None => None,
    }
}
