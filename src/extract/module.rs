//! Module extraction with per-unit failure isolation.

use super::flow::extract_flow;
use super::node::{extract_association, extract_entity, extract_module_security};
use crate::model::{RawDocument, RawDomainModel, RawModule};
use crate::report::Warnings;
use crate::schema::{DomainModel, Module};

/// Extracts one module: domain model, flow graphs and module security.
///
/// Every unit load sits inside its own failure boundary. One entity that
/// fails to materialize must not drop the module's other entities, and a
/// failed sub-extraction degrades to its empty value with a recorded
/// warning. Partial data is strictly better than none.
pub fn extract_module(raw: &RawModule, warnings: &mut Warnings) -> Module {
    let domain_model = match raw.domain_model.load() {
        Ok(domain_model) => extract_domain_model(domain_model, warnings),
        Err(error) => {
            warnings.record(
                format!("domain model of module '{}'", raw.name),
                error.to_string(),
            );
            DomainModel::default()
        }
    };

    // Flow graphs are selected by document kind tag, never by probing.
    let microflows = raw
        .documents
        .iter()
        .filter_map(|document| match document {
            RawDocument::Microflow(handle) => match handle.load() {
                Ok(microflow) => Some(extract_flow(microflow)),
                Err(error) => {
                    warnings.record(
                        format!("microflow '{}'", handle.label()),
                        error.to_string(),
                    );
                    None
                }
            },
            RawDocument::Other { .. } => None,
        })
        .collect();

    let security = match &raw.security {
        Some(handle) => match handle.load() {
            Ok(security) => Some(extract_module_security(security)),
            Err(error) => {
                warnings.record(
                    format!("security of module '{}'", raw.name),
                    error.to_string(),
                );
                None
            }
        },
        None => None,
    };

    Module {
        name: raw.name.clone(),
        domain_model,
        microflows,
        security,
    }
}

fn extract_domain_model(raw: &RawDomainModel, warnings: &mut Warnings) -> DomainModel {
    DomainModel {
        entities: warnings
            .fold_loaded("entity", &raw.entities)
            .into_iter()
            .map(extract_entity)
            .collect(),
        associations: warnings
            .fold_loaded("association", &raw.associations)
            .into_iter()
            .map(extract_association)
            .collect(),
    }
}
