//! Whitelist filter over tags and attributes.
//!
//! Walks a subtree top-down. Each child list is scanned completely, children
//! whose tag is not whitelisted are marked, and only then are the marked
//! children detached. Disallowed elements go away with their whole subtree:
//! nothing is promoted and nothing is re-inserted as escaped text. Text inside
//! raw-text elements (`<style>`) that holds a `<` is dropped too: it would be
//! live markup anywhere the element is not parsed as raw text.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom::node_util::{
    attribute_name, compact_children, content_root, has_children, is_raw_text_element, tag_name,
};

use super::whitelist::{is_allowed_attribute, is_allowed_tag};

/// Filter the subtree rooted at `root` in place.
///
/// `root` itself is never removed or inspected; only its descendants are.
///
/// # Example
/// ```
/// use kodegen_tools_purify::{Document, filter_node};
///
/// let doc = Document::parse(r#"<p onclick="x()">hi<iframe src="a"></iframe></p>"#);
/// filter_node(doc.root());
/// assert_eq!(doc.body_xhtml(), "<p>hi</p>");
/// ```
pub fn filter_node(root: &Handle) {
    let mut removed_nodes = 0usize;
    let mut removed_attributes = 0usize;
    let mut stack = vec![content_root(root)];

    while let Some(parent) = stack.pop() {
        let raw_text = is_raw_text_element(&parent);
        let keep: Vec<bool> = {
            let children = parent.children.borrow();
            let mut keep = Vec::with_capacity(children.len());

            for child in children.iter() {
                if !is_allowed_tag(&tag_name(child)) || (raw_text && holds_markup(child)) {
                    keep.push(false);
                    continue;
                }

                removed_attributes += sanitize_attributes(child);
                if has_children(child) {
                    stack.push(content_root(child));
                }
                keep.push(true);
            }

            keep
        };

        removed_nodes += compact_children(&parent, &keep);
    }

    if removed_nodes > 0 || removed_attributes > 0 {
        log::debug!(
            "Whitelist filter removed {} nodes and {} attributes",
            removed_nodes,
            removed_attributes
        );
    }
}

fn holds_markup(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().contains('<'),
        _ => false,
    }
}

/// Drop non-whitelisted attributes and `href` values with a `javascript` scheme.
///
/// The `href` check runs for every attribute whose local name is `href`,
/// independent of the whitelist test. Returns the number removed.
pub fn sanitize_attributes(node: &Handle) -> usize {
    let NodeData::Element { attrs, .. } = &node.data else {
        return 0;
    };

    let mut attrs = attrs.borrow_mut();
    let before = attrs.len();

    attrs.retain(|attr| {
        let allowed = is_allowed_attribute(&attribute_name(attr));
        let script_link = &*attr.name.local == "href" && has_javascript_scheme(&attr.value);
        allowed && !script_link
    });

    before - attrs.len()
}

/// True when the trimmed, lower-cased value starts with `javascript`.
///
/// Only the literal prefix is checked. Control characters or whitespace
/// embedded inside the scheme token (`java\tscript:`) are not canonicalized.
pub fn has_javascript_scheme(value: &str) -> bool {
    value.trim().to_lowercase().starts_with("javascript")
}
