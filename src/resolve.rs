//! Reference resolution: model-internal handles to stable qualified names.

use crate::model::Ref;

/// Resolves a cross-reference to its qualified name.
///
/// Returns `None` both when the reference is legitimately unset and when
/// resolution failed inside the platform; the upstream model is full of
/// optional and legacy-absent reference fields, so neither case may
/// propagate. A broken reference is logged at debug level only.
pub fn resolve_ref(reference: &Ref) -> Option<String> {
    match reference {
        Ref::Name(qualified_name) => Some(qualified_name.clone()),
        Ref::Absent => None,
        Ref::Broken(diagnostic) => {
            tracing::debug!(%diagnostic, "reference failed to resolve, emitting null");
            None
        }
    }
}
