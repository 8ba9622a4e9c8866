//! XSS-safe HTML purification.
//!
//! Untrusted HTML is normalized, parsed leniently with html5ever, filtered
//! against fixed tag and attribute whitelists and re-serialized as XHTML.
//! Optional cleanup passes prune empty elements, drop SVG image references and
//! strip presentational attributes.

pub mod dom;
pub mod error;
pub mod normalize;
pub mod purifier;
pub mod sanitize;

pub use dom::{Document, load_html, serialize_node};
pub use error::PurifyError;
pub use normalize::normalize_html;
pub use purifier::{OutputMode, Purifier, PurifyOptions, purify_html};
pub use sanitize::{
    ALLOWED_ATTRIBUTES, ALLOWED_TAGS, DEFAULT_STRIPPED_ATTRIBUTES, filter_node,
    remove_empty_nodes, remove_svg_images, strip_attributes,
};
