//! Refpage - pre/post transform hooks for reference documentation page models.
//!
//! An external rendering pipeline threads a per-page model through its
//! template step for reference-documentation pages. This crate is the
//! extension seam around that step: [`pre_transform`] runs before the
//! pipeline renders a page, [`post_transform`] after, each receiving the
//! model by value and handing it back to the pipeline.
//!
//! The hooks are stateless and synchronous. `pre_transform` is identity;
//! `post_transform` fills empty-string defaults for the three
//! template-injected custom fields so templates can render them
//! unconditionally.

pub mod model;
pub mod transform;

pub use model::{JsonMap, ModelError, PageModel};
pub use transform::{
    ModelTransform, PostTransform, PreTransform, post_transform, post_transform_value,
    pre_transform, pre_transform_value,
};
