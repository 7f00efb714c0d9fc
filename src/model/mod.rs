//! Page model types: render data and boundary errors.

mod error;
mod page;

pub use error::ModelError;
pub use page::PageModel;

/// A JSON object map for storing arbitrary model fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
