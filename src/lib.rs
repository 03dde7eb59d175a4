//! # Mokei - Model Graph Extraction and Normalization Engine
//!
//! **Mokei** projects a richly polymorphic application model — entities,
//! associations, security roles, and executable flow graphs composed of
//! typed activity nodes — into a flat, stable, serializable JSON document.
//! It is strictly read-only: the source model is never mutated.
//!
//! ## Core Workflow
//!
//! The engine is host-agnostic. It operates on a canonical in-memory model
//! (the `Raw*` structs in [`model`]); the shell that authenticates to a
//! model host and checks out a working copy stays outside this crate. The
//! workflow is:
//!
//! 1.  **Load Your Model**: The shell (or a test) builds a [`model::RawModel`],
//!     wrapping lazily loadable units in [`model::Handle`] and cross-references
//!     in [`model::Ref`].
//! 2.  **Extract**: [`extract::extract_project`] walks the model in one pass
//!     and assembles a [`schema::Document`] plus the warnings recorded for
//!     units that failed to materialize. One bad unit never aborts the run.
//! 3.  **Persist**: The shell serializes the document
//!     ([`schema::Document::to_json_string`]) and writes it wherever it
//!     likes; the engine has no knowledge of the destination.
//!
//! Output ordering everywhere follows the model's own iteration order, so
//! two extractions of an unmodified model produce byte-identical documents
//! apart from the `extractedAt` timestamp — the output is meant to be
//! diffed.
//!
//! ## Quick Start
//!
//! ```rust
//! use mokei::prelude::*;
//!
//! // A minimal model: one module, one entity, no security.
//! let model = RawModel {
//!     name: "Shop".to_string(),
//!     securities: vec![],
//!     modules: vec![Handle::loaded(
//!         "Sales",
//!         RawModule {
//!             name: "Sales".to_string(),
//!             domain_model: Handle::loaded(
//!                 "Sales domain model",
//!                 RawDomainModel {
//!                     entities: vec![Handle::loaded(
//!                         "Order",
//!                         RawEntity {
//!                             name: "Order".to_string(),
//!                             documentation: String::new(),
//!                             generalization: Ref::Absent,
//!                             attributes: vec![RawAttribute {
//!                                 name: "Amount".to_string(),
//!                                 documentation: String::new(),
//!                                 attribute_type: RawAttributeType::Decimal,
//!                                 value: None,
//!                             }],
//!                             validation_rules: vec![],
//!                             event_handlers: vec![],
//!                             indexes: vec![],
//!                             access_rules: vec![],
//!                         },
//!                     )],
//!                     associations: vec![],
//!                 },
//!             ),
//!             documents: vec![],
//!             security: None,
//!         },
//!     )],
//! };
//!
//! let extraction = extract_project(&model);
//! assert!(extraction.warnings.is_empty());
//! assert_eq!(extraction.document.modules[0].domain_model.entities[0].name, "Order");
//!
//! let json = extraction.document.to_json_string().unwrap();
//! assert!(json.contains("\"projectName\": \"Shop\""));
//! ```

pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod prelude;
pub mod report;
pub mod resolve;
pub mod schema;
