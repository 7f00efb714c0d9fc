//! Per-page render model threaded through the documentation pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonMap;

/// One reference-documentation page's render model.
///
/// The pipeline constructs this before calling the transform hooks and
/// consumes it afterwards; this crate neither creates nor destroys it.
///
/// # Standard Fields
///
/// | Field             | Type             | Description                     |
/// |-------------------|------------------|---------------------------------|
/// | `custom_overview` | `JsonValue`      | Template-injected overview text |
/// | `custom_details`  | `JsonValue`      | Template-injected details text  |
/// | `custom_examples` | `JsonValue`      | Template-injected examples text |
/// | `children`        | `Vec<PageModel>` | Nested member pages, in order   |
///
/// The custom fields are raw JSON rather than `String` because the pipeline
/// may thread any value through; [`fill_defaults`](Self::fill_defaults)
/// normalizes them by JSON truthiness.
///
/// # Other Fields (`extra`)
///
/// Everything else the pipeline put on the model is captured in `extra` as
/// raw JSON, in its original order, and round-trips unmodified. On output
/// the declared fields above are emitted first, then `extra`; relative
/// order is preserved within `extra` but not across the whole object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_overview: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_examples: Option<Value>,
    /// Nested member pages. [`fill_defaults`](Self::fill_defaults) does not
    /// descend into these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PageModel>>,
    /// All other pipeline-supplied fields (raw JSON, order preserved).
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PageModel {
    /// The template-injected fields normalized by
    /// [`fill_defaults`](Self::fill_defaults).
    pub const CUSTOM_FIELDS: [&'static str; 3] =
        ["custom_overview", "custom_details", "custom_examples"];

    /// Normalize the custom fields so templates can render them
    /// unconditionally: any absent or falsy value (null, `false`, `0`, `""`)
    /// becomes the empty string; truthy values are left as-is.
    ///
    /// Applies to this model only. Entries under `children` are NOT touched;
    /// callers that want per-child defaults must map this over `children`
    /// themselves.
    ///
    /// Returns the number of fields that were filled.
    pub fn fill_defaults(&mut self) -> usize {
        let mut filled = 0;
        for field in [
            &mut self.custom_overview,
            &mut self.custom_details,
            &mut self.custom_examples,
        ] {
            if !field.as_ref().is_some_and(is_truthy) {
                *field = Some(Value::String(String::new()));
                filled += 1;
            }
        }
        filled
    }
}

/// JavaScript truthiness over JSON: null and `false` are falsy, numbers are
/// falsy iff zero, strings iff empty; arrays and objects are always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
