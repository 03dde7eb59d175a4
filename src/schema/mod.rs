//! The closed, versioned output schema.
//!
//! Shape is fixed regardless of which model variants were encountered;
//! unknown variants surface as `Unknown`-tagged records instead of changing
//! the schema. All records serialize with camelCase keys in declaration
//! order.

pub mod document;
pub mod domain;
pub mod flow;

pub use document::*;
pub use domain::*;
pub use flow::*;
