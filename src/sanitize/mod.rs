//! Tree passes that make a parsed document safe to re-render.
//!
//! - [`filter_node`]: whitelist filter over tags and attributes (always run)
//! - [`remove_svg_images`]: drops `<img>` elements pointing at `.svg` files
//! - [`strip_attributes`]: blacklist removal of presentational attributes
//! - [`remove_empty_nodes`]: bottom-up pruning of content-empty elements
//!
//! The last three are independent, opt-in cleanup passes.

pub mod attribute_stripper;
pub mod empty_nodes;
pub mod svg_images;
pub mod tag_filter;
pub mod whitelist;

pub use attribute_stripper::strip_attributes;
pub use empty_nodes::remove_empty_nodes;
pub use svg_images::remove_svg_images;
pub use tag_filter::{filter_node, has_javascript_scheme, sanitize_attributes};
pub use whitelist::{
    ALLOWED_ATTRIBUTES, ALLOWED_TAGS, DEFAULT_STRIPPED_ATTRIBUTES, PRUNE_EXEMPT_TAGS,
};
