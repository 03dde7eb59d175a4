use thiserror::Error;

/// Errors produced when materializing a lazily loaded model handle.
///
/// These never escape the extraction pipeline: the extractors convert every
/// `LoadError` into a recorded [`Warning`](crate::report::Warning) and keep
/// going with the units that did load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("unit is absent from the source model")]
    Absent,

    #[error("load failed: {0}")]
    Failed(String),
}
