//! Raw-JSON adapters for the hosting pipeline.
//!
//! The pipeline threads models as untyped JSON; these functions validate and
//! decode on the way in, re-encode on the way out. Null or non-object input
//! is rejected up front instead of faulting mid-transform.

use serde_json::Value;

use super::{post_transform, pre_transform};
use crate::model::{ModelError, PageModel};

/// [`pre_transform`] over the pipeline's raw JSON representation.
pub fn pre_transform_value(model: Value) -> Result<Value, ModelError> {
    encode(pre_transform(decode(model)?))
}

/// [`post_transform`] over the pipeline's raw JSON representation.
pub fn post_transform_value(model: Value) -> Result<Value, ModelError> {
    encode(post_transform(decode(model)?))
}

fn decode(model: Value) -> Result<PageModel, ModelError> {
    match model {
        Value::Null => Err(ModelError::Missing),
        Value::Object(_) => serde_json::from_value(model).map_err(ModelError::Decode),
        _ => Err(ModelError::NotAnObject),
    }
}

fn encode(page: PageModel) -> Result<Value, ModelError> {
    serde_json::to_value(page).map_err(ModelError::Encode)
}
