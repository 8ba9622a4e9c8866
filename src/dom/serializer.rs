//! XML-syntax serialization of `markup5ever_rcdom` subtrees.
//!
//! Output follows XHTML conventions regardless of the element kind:
//! - elements without children self-close (`<p/>`, `<br/>`, `<svg/>`)
//! - attribute values are always double-quoted
//! - text escapes `&`, `<`, `>` and carriage returns (`&#13;`)
//! - attribute values additionally escape `"`, tabs and newlines
//!
//! Some HTML parsing rules leak into the output so that it re-parses to the
//! same tree:
//! - text inside raw-text elements (`<style>`) is written unescaped when it
//!   holds no `<`
//! - a leading newline in `<pre>` is doubled
//! - empty HTML elements nested in SVG or MathML get an explicit end tag
//!
//! The traversal keeps its own stack of pending open/close steps so deeply
//! nested input cannot exhaust the call stack.

use html5ever::LocalName;
use html5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, NodeData};

use super::node_util::{
    attribute_name, children, get_parent_node, is_html_element, is_raw_text_element, tag_name,
};

/// Doctype literal prepended to full-document output.
pub const HTML_DOCTYPE: &str = "<!DOCTYPE html>";

/// Character reference emitted for `\r` in text and attribute values.
pub const CARRIAGE_RETURN_REF: &str = "&#13;";

/// HTML elements whose first newline is eaten by the parser.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["listing", "pre", "textarea"];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

enum Step {
    Open(Handle),
    RawText(Handle),
    Close { name: LocalName, foreign: bool },
}

struct Serializer {
    output: String,
    stack: Vec<Step>,
    /// Number of open SVG/MathML ancestors.
    foreign_depth: usize,
}

/// Serialize `node` (or only its children) as XML-syntax markup.
///
/// # Example
/// ```
/// use html5ever::serialize::TraversalScope;
/// use kodegen_tools_purify::{Document, serialize_node};
///
/// let doc = Document::parse("<p>a<br>b</p>");
/// let body = doc.body().unwrap();
/// assert_eq!(serialize_node(&body, TraversalScope::ChildrenOnly(None)), "<p>a<br/>b</p>");
/// ```
pub fn serialize_node(node: &Handle, scope: TraversalScope) -> String {
    let (stack, context) = match scope {
        TraversalScope::IncludeNode => (vec![Step::Open(node.clone())], get_parent_node(node)),
        TraversalScope::ChildrenOnly(_) => (
            children(node).into_iter().rev().map(Step::Open).collect(),
            Some(node.clone()),
        ),
    };

    let mut serializer = Serializer {
        output: String::new(),
        stack,
        foreign_depth: context.map_or(0, |parent| foreign_ancestors(&parent)),
    };
    serializer.run();
    serializer.output
}

/// Count `node` and its ancestors that are SVG or MathML elements.
fn foreign_ancestors(node: &Handle) -> usize {
    let mut count = 0;
    let mut current = Some(node.clone());
    while let Some(node) = current {
        if is_foreign_element(&node) {
            count += 1;
        }
        current = get_parent_node(&node);
    }
    count
}

fn is_foreign_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. }) && !is_html_element(node)
}

impl Serializer {
    fn run(&mut self) {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Close { name, foreign } => {
                    if foreign {
                        self.foreign_depth -= 1;
                    }
                    self.output.push_str("</");
                    self.output.push_str(&name);
                    self.output.push('>');
                }
                Step::RawText(node) => {
                    if let NodeData::Text { contents } = &node.data {
                        self.output
                            .extend(contents.borrow().chars().filter(|&c| c != '\r'));
                    }
                }
                Step::Open(node) => self.write_node(&node),
            }
        }
    }

    fn write_node(&mut self, node: &Handle) {
        let output = &mut self.output;
        match &node.data {
            NodeData::Document => {
                self.stack
                    .extend(children(node).into_iter().rev().map(Step::Open));
            }
            NodeData::Doctype { name, .. } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(name);
                output.push('>');
            }
            NodeData::Text { contents } => {
                write_text(&contents.borrow(), output);
            }
            NodeData::Comment { contents } => {
                output.push_str("<!--");
                output.push_str(contents);
                output.push_str("-->");
            }
            NodeData::ProcessingInstruction { target, contents } => {
                output.push_str("<?");
                output.push_str(target);
                output.push(' ');
                output.push_str(contents);
                output.push_str("?>");
            }
            NodeData::Element { name, attrs, .. } => {
                output.push('<');
                output.push_str(&name.local);
                for attr in attrs.borrow().iter() {
                    output.push(' ');
                    output.push_str(&attribute_name(attr));
                    output.push_str("=\"");
                    write_attribute_value(&attr.value, output);
                    output.push('"');
                }

                let html = is_html_element(node);
                let tag = tag_name(node);
                let kids = children(node);

                if kids.is_empty() {
                    // Inside foreign content the parser ignores `/>` on HTML elements.
                    if html && self.foreign_depth > 0 && !VOID_ELEMENTS.contains(&&*tag) {
                        output.push_str("></");
                        output.push_str(&name.local);
                        output.push('>');
                    } else {
                        output.push_str("/>");
                    }
                    return;
                }

                output.push('>');
                if html
                    && LEADING_NEWLINE_ELEMENTS.contains(&&*tag)
                    && starts_with_newline(&kids[0])
                {
                    output.push('\n');
                }

                let foreign = !html;
                if foreign {
                    self.foreign_depth += 1;
                }
                self.stack.push(Step::Close {
                    name: name.local.clone(),
                    foreign,
                });

                let raw = is_raw_text_element(node);
                self.stack.extend(kids.into_iter().rev().map(|kid| {
                    if raw && is_raw_safe_text(&kid) {
                        Step::RawText(kid)
                    } else {
                        Step::Open(kid)
                    }
                }));
            }
        }
    }
}

fn starts_with_newline(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim_start_matches('\r').starts_with('\n'),
        _ => false,
    }
}

/// Raw text is only written unescaped when it cannot open or close a tag.
fn is_raw_safe_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => !contents.borrow().contains('<'),
        _ => false,
    }
}

fn write_text(text: &str, output: &mut String) {
    let escaped = html_escape::encode_text(text);
    if escaped.contains('\r') {
        output.push_str(&escaped.replace('\r', CARRIAGE_RETURN_REF));
    } else {
        output.push_str(&escaped);
    }
}

fn write_attribute_value(value: &str, output: &mut String) {
    let escaped = html_escape::encode_double_quoted_attribute(value);
    for ch in escaped.chars() {
        match ch {
            '\r' => output.push_str(CARRIAGE_RETURN_REF),
            '\n' => output.push_str("&#10;"),
            '\t' => output.push_str("&#9;"),
            c => output.push(c),
        }
    }
}
