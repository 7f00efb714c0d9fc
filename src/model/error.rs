//! Pipeline boundary error types.

use thiserror::Error;

/// Errors from adapting the pipeline's raw JSON model to
/// [`PageModel`](super::PageModel).
///
/// The typed hooks themselves never fail; these only arise at the raw-JSON
/// boundary, where a host can hand over null, a non-object, or a malformed
/// model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The pipeline supplied no model at all.
    #[error("page model is null or missing")]
    Missing,

    /// The pipeline supplied a model that is not a JSON object.
    #[error("page model is not a JSON object")]
    NotAnObject,

    #[error("failed to decode page model")]
    Decode(#[source] serde_json::Error),

    #[error("failed to re-encode page model")]
    Encode(#[source] serde_json::Error),
}
