//! Lifecycle hooks: identity before rendering, default-fill after.

use crate::model::PageModel;

// ============================================================================
// Capability
// ============================================================================

/// A transform over a page model: receives one, returns one.
///
/// Both lifecycle phases satisfy this, as does any
/// `Fn(PageModel) -> PageModel` closure, so a host can thread phases and
/// custom steps through the same seam.
pub trait ModelTransform {
    fn apply(&self, model: PageModel) -> PageModel;
}

impl<F> ModelTransform for F
where
    F: Fn(PageModel) -> PageModel,
{
    fn apply(&self, model: PageModel) -> PageModel {
        self(model)
    }
}

/// The phase invoked before the pipeline's template step.
pub struct PreTransform;

impl ModelTransform for PreTransform {
    fn apply(&self, model: PageModel) -> PageModel {
        pre_transform(model)
    }
}

/// The phase invoked after the pipeline's template step.
pub struct PostTransform;

impl ModelTransform for PostTransform {
    fn apply(&self, model: PageModel) -> PageModel {
        post_transform(model)
    }
}

// ============================================================================
// Hooks
// ============================================================================

/// Called before the template step. Passes the model through untouched.
#[inline]
pub fn pre_transform(model: PageModel) -> PageModel {
    model
}

/// Called after the template step. Fills empty-string defaults for the root
/// model's custom fields so templates can render them unconditionally.
///
/// Only the root model is filled; entries under `children` pass through
/// untouched (see [`PageModel::fill_defaults`]).
pub fn post_transform(mut model: PageModel) -> PageModel {
    let filled = model.fill_defaults();
    if filled > 0 {
        log::debug!("post_transform: filled {filled} custom field(s)");
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pre_transform_is_identity() {
        let model = PageModel {
            custom_overview: Some(json!(0)),
            children: Some(vec![PageModel::default()]),
            ..Default::default()
        };
        let expected = model.clone();
        assert_eq!(pre_transform(model), expected);
    }

    #[test]
    fn test_post_transform_fills_missing_fields() {
        let model = post_transform(PageModel::default());
        assert_eq!(model.custom_overview, Some(json!("")));
        assert_eq!(model.custom_details, Some(json!("")));
        assert_eq!(model.custom_examples, Some(json!("")));
    }

    #[test]
    fn test_post_transform_keeps_existing_text() {
        let model = PageModel {
            custom_overview: Some(json!("o")),
            custom_details: Some(json!("d")),
            custom_examples: Some(json!("e")),
            ..Default::default()
        };
        let expected = model.clone();
        assert_eq!(post_transform(model), expected);
    }

    #[test]
    fn test_post_transform_leaves_children_untouched() {
        let child_a = PageModel::default();
        let child_b = PageModel {
            custom_overview: Some(json!("x")),
            ..Default::default()
        };
        let model = PageModel {
            children: Some(vec![child_a.clone(), child_b.clone()]),
            ..Default::default()
        };

        let out = post_transform(model);
        assert_eq!(out.custom_overview, Some(json!("")));
        assert_eq!(out.custom_details, Some(json!("")));
        assert_eq!(out.custom_examples, Some(json!("")));
        assert_eq!(out.children, Some(vec![child_a, child_b]));
    }

    #[test]
    fn test_post_transform_idempotent() {
        let model = PageModel {
            custom_details: Some(json!(false)),
            ..Default::default()
        };
        let once = post_transform(model);
        let twice = post_transform(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_phases_through_capability_trait() {
        let phases: [&dyn ModelTransform; 2] = [&PreTransform, &PostTransform];
        let mut model = PageModel::default();
        for phase in phases {
            model = phase.apply(model);
        }
        assert_eq!(model.custom_overview, Some(json!("")));
    }

    #[test]
    fn test_closure_satisfies_capability() {
        let tag = |mut model: PageModel| {
            model.custom_overview = Some(json!("tagged"));
            model
        };
        let out = tag.apply(PageModel::default());
        assert_eq!(out.custom_overview, Some(json!("tagged")));
    }
}
