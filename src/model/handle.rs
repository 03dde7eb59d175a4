use crate::error::LoadError;

/// A lazily loadable unit of the source model.
///
/// The platform hands out handles instead of materialized objects; loading a
/// handle may fail inside the platform. A `Handle` makes both outcomes
/// explicit so that extraction code (and tests) can exercise the failure path
/// without a live model host. The label is known before loading and is used
/// to name the unit in warnings when the load fails.
#[derive(Debug, Clone)]
pub struct Handle<T> {
    label: String,
    state: HandleState<T>,
}

#[derive(Debug, Clone)]
enum HandleState<T> {
    Loaded(T),
    Absent,
    Failed(String),
}

impl<T> Handle<T> {
    /// A handle whose target is already materialized.
    pub fn loaded(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            state: HandleState::Loaded(value),
        }
    }

    /// A handle whose target does not exist in the source model.
    pub fn absent(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: HandleState::Absent,
        }
    }

    /// A handle whose load attempt fails with the platform's diagnostic.
    pub fn failed(label: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: HandleState::Failed(diagnostic.into()),
        }
    }

    /// The unit's name as known before loading.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Materializes the handle's target.
    pub fn load(&self) -> Result<&T, LoadError> {
        match &self.state {
            HandleState::Loaded(value) => Ok(value),
            HandleState::Absent => Err(LoadError::Absent),
            HandleState::Failed(diagnostic) => Err(LoadError::Failed(diagnostic.clone())),
        }
    }
}

/// A cross-reference to another model object, resolved to its qualified name.
///
/// The upstream model allows many optional and legacy-absent reference
/// fields, and resolution itself can throw inside the platform. All three
/// states are explicit here; [`resolve_ref`](crate::resolve::resolve_ref)
/// collapses the last two to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    /// The reference resolves to this qualified name.
    Name(String),
    /// The reference field is unset in the source model.
    Absent,
    /// Resolution failed inside the platform with this diagnostic.
    Broken(String),
}

impl Ref {
    /// Convenience constructor for a resolvable reference.
    pub fn name(qualified_name: impl Into<String>) -> Self {
        Ref::Name(qualified_name.into())
    }
}
