//! The extraction pipeline, leaves first: node projections, flow graphs,
//! modules, then the whole project.

pub mod flow;
pub mod module;
pub mod node;

pub use flow::extract_flow;
pub use module::extract_module;
pub use node::{
    extract_association, extract_entity, extract_module_security, extract_project_security,
    extract_user_role,
};

use crate::model::{Handle, RawModel, RawProjectSecurity};
use crate::report::{Warning, Warnings};
use crate::schema::{Document, ProjectSecurity};

/// The outcome of one extraction run: the assembled document plus every
/// warning recorded along the way. The engine itself never aborts.
#[derive(Debug)]
pub struct Extraction {
    pub document: Document,
    pub warnings: Vec<Warning>,
}

/// Extracts one whole project into its output document.
///
/// A single linear pass: project security first, then every module in the
/// model's own order. The source model is never mutated. A module that fails
/// to materialize is skipped with a warning; its siblings survive.
pub fn extract_project(model: &RawModel) -> Extraction {
    let mut warnings = Warnings::new();

    let project_security = extract_first_security(&model.securities, &mut warnings);

    let modules = model
        .modules
        .iter()
        .filter_map(|handle| match handle.load() {
            Ok(module) => Some(extract_module(module, &mut warnings)),
            Err(error) => {
                warnings.record(format!("module '{}'", handle.label()), error.to_string());
                None
            }
        })
        .collect();

    Extraction {
        document: Document::new(model.name.clone(), project_security, modules),
        warnings: warnings.into_vec(),
    }
}

/// A model with no security settings is a valid, common state, not an
/// error: the fallback is `{ securityLevel: "none", userRoles: [] }`. Only a
/// security unit that exists but fails to load earns a warning.
fn extract_first_security(
    securities: &[Handle<RawProjectSecurity>],
    warnings: &mut Warnings,
) -> ProjectSecurity {
    for handle in securities {
        match handle.load() {
            Ok(security) => return extract_project_security(security),
            Err(crate::error::LoadError::Absent) => continue,
            Err(error) => {
                warnings.record(
                    format!("project security '{}'", handle.label()),
                    error.to_string(),
                );
            }
        }
    }
    ProjectSecurity::none()
}
