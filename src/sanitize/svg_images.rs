//! Removal of `<img>` elements that reference SVG resources.
//!
//! An SVG loaded as an image can carry its own event handlers; the attribute
//! whitelist only sees the `<img>` tag, never the referenced file, so these
//! images are dropped outright.

use crate::dom::Document;
use crate::dom::node_util::{descendant_elements, detach, get_attribute, is_element_named};

/// Remove every `<img>` whose `src` ends with `.svg` (case-insensitive).
///
/// All images are collected before any is detached. Returns the number of
/// images removed.
///
/// # Example
/// ```
/// use kodegen_tools_purify::{load_html, remove_svg_images};
///
/// let doc = load_html(r#"<p><img src="logo.SVG"><img src="photo.jpg"></p>"#);
/// remove_svg_images(&doc);
/// assert_eq!(doc.body_xhtml(), r#"<p><img src="photo.jpg"/></p>"#);
/// ```
pub fn remove_svg_images(document: &Document) -> usize {
    let images: Vec<_> = descendant_elements(document.root())
        .into_iter()
        .filter(|node| is_element_named(node, "img"))
        .collect();

    let mut removed = 0;
    for img in images {
        let src = get_attribute(&img, "src").unwrap_or_default().to_lowercase();
        if src.ends_with(".svg") && detach(&img) {
            removed += 1;
        }
    }

    if removed > 0 {
        log::debug!("Removed {} SVG image references", removed);
    }

    removed
}
