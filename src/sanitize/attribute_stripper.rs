//! Blacklist attribute removal.
//!
//! The inverse of the whitelist attribute pass: instead of keeping a known-safe
//! set, it deletes a named set (styling hooks, framework bindings, lazy-load
//! bookkeeping) from every element in the document.

use markup5ever_rcdom::NodeData;

use crate::dom::Document;
use crate::dom::node_util::{attribute_name, descendant_elements};

/// Remove every attribute named in `names` from all elements.
///
/// Names are matched exactly, including any namespace prefix. Returns the
/// number of attributes removed.
///
/// # Example
/// ```
/// use kodegen_tools_purify::{DEFAULT_STRIPPED_ATTRIBUTES, load_html, strip_attributes};
///
/// let doc = load_html(r#"<p class="lead" id="p1" title="t">x</p>"#);
/// strip_attributes(&doc, DEFAULT_STRIPPED_ATTRIBUTES);
/// assert_eq!(doc.body_xhtml(), r#"<p title="t">x</p>"#);
/// ```
pub fn strip_attributes<S: AsRef<str>>(document: &Document, names: &[S]) -> usize {
    if names.is_empty() {
        return 0;
    }

    let mut removed = 0;
    for element in descendant_elements(document.root()) {
        let NodeData::Element { attrs, .. } = &element.data else {
            continue;
        };

        let mut attrs = attrs.borrow_mut();
        let before = attrs.len();
        attrs.retain(|attr| {
            let name = attribute_name(attr);
            !names.iter().any(|stripped| stripped.as_ref() == name)
        });
        removed += before - attrs.len();
    }

    if removed > 0 {
        log::debug!("Stripped {} blacklisted attributes", removed);
    }

    removed
}
