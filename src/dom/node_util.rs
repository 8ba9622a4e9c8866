//! Tree primitives over `markup5ever_rcdom` handles.
//!
//! Every pass in the crate goes through these helpers instead of poking at
//! `Node` internals directly, so parent links stay consistent when nodes are
//! detached.

use std::borrow::Cow;
use std::rc::Rc;
use std::rc::Weak;

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, Node, NodeData};

/// Pseudo tag name reported for text nodes.
pub const TEXT_NODE_NAME: &str = "#text";

/// Namespace the tree builder assigns to HTML elements.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// RAII guard to ensure parent reference is restored even on panic.
///
/// `Node::parent` is a `Cell<Option<Weak<Node>>>`, so reading it means taking
/// the value out; the guard puts it back when it goes out of scope.
struct ParentGuard<'a> {
    node: &'a Rc<Node>,
    value: Option<Option<Weak<Node>>>,
}

impl<'a> Drop for ParentGuard<'a> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.node.parent.set(value);
        }
    }
}

impl<'a> ParentGuard<'a> {
    fn new(node: &'a Rc<Node>) -> Self {
        let value = node.parent.take();
        Self {
            node,
            value: Some(value),
        }
    }

    fn get(&self) -> Option<&Weak<Node>> {
        self.value.as_ref().and_then(Option::as_ref)
    }
}

/// Name used for whitelist comparison.
///
/// Elements report their lower-cased local name; other node kinds report a
/// `#`-prefixed pseudo name (`#text`, `#comment`, ...) that can never collide
/// with a real tag.
pub fn tag_name(node: &Handle) -> Cow<'_, str> {
    match &node.data {
        NodeData::Element { name, .. } => {
            let local: &str = &name.local;
            if local.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(local.to_ascii_lowercase())
            } else {
                Cow::Borrowed(local)
            }
        }
        NodeData::Text { .. } => Cow::Borrowed(TEXT_NODE_NAME),
        NodeData::Comment { .. } => Cow::Borrowed("#comment"),
        NodeData::Doctype { .. } => Cow::Borrowed("#doctype"),
        NodeData::ProcessingInstruction { .. } => Cow::Borrowed("#pi"),
        NodeData::Document => Cow::Borrowed("#document"),
    }
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// True for elements in the HTML namespace (not SVG or MathML).
pub fn is_html_element(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => &*name.ns == HTML_NAMESPACE,
        _ => false,
    }
}

/// HTML elements whose content the tokenizer reads as raw text.
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

/// True for HTML elements whose text content is never parsed as markup.
pub fn is_raw_text_element(node: &Handle) -> bool {
    is_html_element(node) && RAW_TEXT_ELEMENTS.contains(&&*tag_name(node))
}

/// True for elements whose lower-cased tag name equals `tag`.
pub fn is_element_named(node: &Handle, tag: &str) -> bool {
    is_element(node) && tag_name(node) == tag
}

/// True for text nodes made only of whitespace.
pub fn is_blank_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

/// The node whose `children` hold this node's content.
///
/// For `<template>` the parser stores content in a separate fragment rather
/// than in the element's own child list; every pass has to see it.
pub fn content_root(node: &Handle) -> Handle {
    if let NodeData::Element {
        template_contents, ..
    } = &node.data
        && let Some(contents) = template_contents.borrow().as_ref()
    {
        return contents.clone();
    }
    node.clone()
}

/// Snapshot of a node's content children.
pub fn children(node: &Handle) -> Vec<Handle> {
    content_root(node).children.borrow().clone()
}

pub fn has_children(node: &Handle) -> bool {
    !content_root(node).children.borrow().is_empty()
}

pub fn get_parent_node(node: &Handle) -> Option<Handle> {
    let guard = ParentGuard::new(node);
    guard.get()?.upgrade()
}

/// Append `child` as the last child of `parent`, fixing up its parent link.
pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Remove `node` from its parent. Returns false if it had no parent.
pub fn detach(node: &Handle) -> bool {
    let Some(parent) = get_parent_node(node) else {
        return false;
    };
    let mut siblings = parent.children.borrow_mut();
    let before = siblings.len();
    siblings.retain(|sibling| !Rc::ptr_eq(sibling, node));
    node.parent.set(None);
    siblings.len() != before
}

/// Drop every child of `parent` whose entry in `keep` is false.
///
/// `keep` must be the result of a completed scan over the same child list;
/// compaction happens in place with a write cursor, so removal is O(n) for the
/// whole list. Returns the number of children removed.
pub fn compact_children(parent: &Handle, keep: &[bool]) -> usize {
    let mut children = parent.children.borrow_mut();
    debug_assert_eq!(children.len(), keep.len());

    let original_len = children.len();
    let mut write_idx = 0;

    for read_idx in 0..original_len {
        if keep.get(read_idx).copied().unwrap_or(true) {
            if write_idx != read_idx {
                children.swap(write_idx, read_idx);
            }
            write_idx += 1;
        } else {
            children[read_idx].parent.set(None);
        }
    }

    children.truncate(write_idx);
    original_len - write_idx
}

/// Attribute name as written in markup, including any namespace prefix.
pub fn attribute_name(attr: &Attribute) -> Cow<'_, str> {
    match &attr.name.prefix {
        Some(prefix) => Cow::Owned(format!("{}:{}", &**prefix, &*attr.name.local)),
        None => Cow::Borrowed(&*attr.name.local),
    }
}

/// Attribute list of an element as `(name, value)` pairs.
pub fn attributes(node: &Handle) -> Vec<(String, String)> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .map(|attr| (attribute_name(attr).into_owned(), attr.value.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn get_attribute(node: &Handle, name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|attr| attribute_name(attr) == name)
        .map(|attr| attr.value.to_string())
}

/// Remove the attribute called `name`. Returns true if one was removed.
pub fn remove_attribute(node: &Handle, name: &str) -> bool {
    let NodeData::Element { attrs, .. } = &node.data else {
        return false;
    };
    let mut attrs = attrs.borrow_mut();
    let before = attrs.len();
    attrs.retain(|attr| attribute_name(attr) != name);
    attrs.len() != before
}

/// Every element under `root` (excluding `root` itself) in document order.
///
/// Uses an explicit stack, so arbitrarily deep trees are safe.
pub fn descendant_elements(root: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = children(root).into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if !is_element(&node) {
            continue;
        }
        stack.extend(children(&node).into_iter().rev());
        found.push(node);
    }

    found
}

/// First element named `tag` under `root` in document order.
pub fn find_element(root: &Handle, tag: &str) -> Option<Handle> {
    let mut stack: Vec<Handle> = children(root).into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if !is_element(&node) {
            continue;
        }
        if tag_name(&node) == tag {
            return Some(node);
        }
        stack.extend(children(&node).into_iter().rev());
    }

    None
}
