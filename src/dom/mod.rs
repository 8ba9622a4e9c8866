//! Parser/serializer adapter around html5ever.
//!
//! `Document` owns one parsed tree for the duration of a purify call. Parsing is
//! always lenient: mismatched or unclosed tags and unquoted attributes are
//! recovered by the html5ever tree builder and never surface as errors. The
//! one departure from browser parsing is that `<div/>` closes the element, so
//! the crate's own XML-syntax output reads back as the same tree.
//! Output is XML syntax, either the body content alone or the whole document
//! behind a fixed `<!DOCTYPE html>` line.

pub mod implied_paragraph;
pub mod node_util;
pub mod serializer;
mod xhtml_sink;

use std::io::Write;

use html5ever::serialize::TraversalScope;
use markup5ever_rcdom::{Handle, RcDom};

use crate::error::PurifyError;
use crate::normalize::normalize_html;

pub use serializer::{CARRIAGE_RETURN_REF, HTML_DOCTYPE, serialize_node};

/// A parsed HTML document.
///
/// The tree is `Rc`-based and therefore confined to the thread that parsed it.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parse HTML text as-is (no normalization) into a document tree.
    pub fn parse(html: &str) -> Self {
        let document = Self {
            dom: xhtml_sink::parse_xhtml_document(html),
        };
        document.wrap_leading_text();
        document
    }

    /// Move leading body text into an implied `<p>`.
    ///
    /// Runs once at parse time; see [`Document::settle_leading_content`] for
    /// the variant run after leading body elements are removed. Returns true
    /// if a paragraph was inserted.
    pub fn wrap_leading_text(&self) -> bool {
        self.body()
            .is_some_and(|body| implied_paragraph::wrap_leading_text(&body))
    }

    /// Bring the start of the body into the shape a re-parse would give it.
    ///
    /// Drops leading blank text and head-only elements (`style`, `title`,
    /// `template`, ...), then wraps leading text in an implied `<p>`. Passes
    /// that remove body elements call this last so their output purifies to
    /// itself. Returns true if anything changed.
    pub fn settle_leading_content(&self) -> bool {
        self.body().is_some_and(|body| {
            let dropped = implied_paragraph::drop_head_bound_lead(&body);
            implied_paragraph::wrap_leading_text(&body) || dropped > 0
        })
    }

    /// The document node (parent of the doctype and `<html>`).
    pub fn root(&self) -> &Handle {
        &self.dom.document
    }

    /// The `<html>` element, if the parser produced one.
    pub fn document_element(&self) -> Option<Handle> {
        node_util::children(self.root())
            .into_iter()
            .find(node_util::is_element)
    }

    /// The first `<body>` element in document order.
    pub fn body(&self) -> Option<Handle> {
        node_util::find_element(self.root(), "body")
    }

    /// XHTML of the body content without the `<body>` wrapper.
    ///
    /// Carriage-return references produced by XML-mode escaping are dropped.
    /// A document without a body (e.g. a frameset) yields an empty string.
    pub fn body_xhtml(&self) -> String {
        match self.body() {
            Some(body) => serialize_node(&body, TraversalScope::ChildrenOnly(None))
                .replace(CARRIAGE_RETURN_REF, ""),
            None => String::new(),
        }
    }

    /// XHTML of the whole document prefixed with `<!DOCTYPE html>`.
    ///
    /// No XML declaration is ever emitted.
    pub fn xhtml(&self) -> String {
        let mut output = String::from(HTML_DOCTYPE);
        if let Some(html) = self.document_element() {
            output.push_str(&serialize_node(&html, TraversalScope::IncludeNode));
        }
        output
    }

    /// Stream [`Document::body_xhtml`] into `writer`.
    pub fn write_body_xhtml<W: Write>(&self, writer: &mut W) -> Result<(), PurifyError> {
        writer.write_all(self.body_xhtml().as_bytes())?;
        Ok(())
    }
}

/// Normalize raw text and parse it into a [`Document`].
///
/// This is the entry point for the standalone cleanup passes
/// (`remove_empty_nodes`, `remove_svg_images`, `strip_attributes`).
pub fn load_html(html: &str) -> Document {
    Document::parse(&normalize_html(html))
}
