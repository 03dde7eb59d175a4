//! Prelude module for convenient imports
//!
//! Re-exports the types needed for the common workflow: build a raw model,
//! extract it, serialize the document.

// Extraction entry points
pub use crate::extract::{extract_project, Extraction};

// Input model
pub use crate::model::{
    Handle, RawAssociation, RawAttribute, RawAttributeType, RawAttributeValue, RawDocument,
    RawDomainModel, RawEntity, RawMicroflow, RawModel, RawModule, RawProjectSecurity, Ref,
};

// Output schema
pub use crate::schema::{Document, DomainModel, Entity, Flow, Module, ProjectSecurity};

// Warnings and errors
pub use crate::error::LoadError;
pub use crate::report::Warning;
