//! Implied `<p>` insertion for character data that opens the body.
//!
//! html5ever appends bare leading text straight into `<body>`. The purifier's
//! output contract wants such text inside a paragraph (`a <b>x</b>` becomes
//! `<p>a <b>x</b></p>`), so after parsing the leading run of body content is
//! moved into a synthesized `<p>` that ends at the first block element which
//! would close a paragraph.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::{LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};

use super::node_util::{
    HTML_NAMESPACE, append_child, descendant_elements, is_blank_text, is_html_element, tag_name,
};

/// Start tags that close an open paragraph.
const PARAGRAPH_CLOSING_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "center", "dd", "details", "dialog", "dir",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "li", "listing", "main", "menu", "nav", "ol", "p",
    "plaintext", "pre", "search", "section", "summary", "table", "ul", "xmp",
];

/// Start tags the tree builder moves into `<head>` when nothing precedes them.
const HEAD_BOUND_TAGS: &[&str] = &[
    "base", "basefont", "bgsound", "link", "meta", "noframes", "noscript", "script", "style",
    "template", "title",
];

fn closes_paragraph(node: &Handle) -> bool {
    is_html_element(node) && PARAGRAPH_CLOSING_TAGS.contains(&&*tag_name(node))
}

fn settles_into_head(node: &Handle) -> bool {
    is_blank_text(node) || (is_html_element(node) && HEAD_BOUND_TAGS.contains(&&*tag_name(node)))
}

/// True if `node` or any element below it would close an open paragraph.
///
/// An inline element holding a block cannot sit inside the implied `<p>`:
/// re-parsing the output would end the paragraph at the nested block.
fn breaks_paragraph(node: &Handle) -> bool {
    closes_paragraph(node) || descendant_elements(node).iter().any(closes_paragraph)
}

/// Create a detached HTML element with no attributes.
pub(crate) fn create_html_element(tag: &str) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag)),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Drop the leading run of `body` children matched by `settles`.
fn drop_leading(body: &Handle, settles: fn(&Handle) -> bool) -> usize {
    let leading = body
        .children
        .borrow()
        .iter()
        .take_while(|child| settles(child))
        .count();
    for child in body.children.borrow_mut().drain(..leading) {
        child.parent.set(None);
    }
    leading
}

/// Drop blank text and head-only elements (`style`, `title`, ...) that open
/// the body. A re-parse of the serialized body would move them into
/// `<head>`. Returns the number of nodes removed.
pub(crate) fn drop_head_bound_lead(body: &Handle) -> usize {
    let dropped = drop_leading(body, settles_into_head);
    if dropped > 0 {
        log::debug!("Dropped {} head-bound nodes opening the body", dropped);
    }
    dropped
}

/// Wrap the leading character data of `body` in an implied paragraph.
///
/// Blank text ahead of the first content node is dropped, matching what a
/// re-parse of the serialized body would do. The wrap only applies when the
/// first remaining child is a text node. Safe to run again after passes that
/// remove leading elements. Returns true if a paragraph was inserted.
pub(crate) fn wrap_leading_text(body: &Handle) -> bool {
    drop_leading(body, is_blank_text);

    let snapshot = body.children.borrow().clone();
    if !snapshot
        .first()
        .is_some_and(|first| matches!(first.data, NodeData::Text { .. }))
    {
        return false;
    }

    let end = snapshot
        .iter()
        .position(breaks_paragraph)
        .unwrap_or(snapshot.len());

    let paragraph = create_html_element("p");
    paragraph.parent.set(Some(Rc::downgrade(body)));

    let run: Vec<Handle> = body
        .children
        .borrow_mut()
        .splice(..end, std::iter::once(paragraph.clone()))
        .collect();

    log::debug!("Wrapped {} leading body nodes in an implied paragraph", run.len());

    for child in run {
        append_child(&paragraph, child);
    }

    true
}
