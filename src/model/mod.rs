//! The input boundary: the canonical in-memory representation of one
//! checked-out application model.
//!
//! The engine never talks to a model host itself. The shell that does loads
//! the model into these structs (or a test builds them directly) and hands
//! the root [`RawModel`] to [`extract_project`](crate::extract::extract_project).

pub mod flow;
pub mod handle;
pub mod raw;

pub use flow::*;
pub use handle::*;
pub use raw::*;
