//! Purify pipeline - the ONE entry point for sanitizing untrusted HTML
//!
//! 1. Normalize the raw text (entity-encode non-ASCII, LF line endings, `&nbsp;`)
//! 2. Parse leniently with html5ever
//! 3. Run the whitelist filter over the whole document
//! 4. Optionally run the cleanup passes selected in [`PurifyOptions`]
//! 5. Serialize as XHTML (body content, or the full document)
//!
//! # Usage
//!
//! ```rust
//! use kodegen_tools_purify::purify_html;
//!
//! let clean = purify_html(r#"<img src=x onerror=alert(1)//>"#);
//! assert_eq!(clean, r#"<img src="x"/>"#);
//! ```
//!
//! ## With cleanup passes
//! ```rust
//! use kodegen_tools_purify::{Purifier, PurifyOptions};
//!
//! let purifier = Purifier::new(PurifyOptions::cleanup());
//! let clean = purifier.purify(r#"<p class="x">a</p><p><br></p><img src="i.svg">"#);
//! assert_eq!(clean, "<p>a</p>");
//! ```

pub mod options;

pub use options::{OutputMode, PurifyOptions};

use crate::dom::{Document, load_html};
use crate::sanitize::{filter_node, remove_empty_nodes, remove_svg_images, strip_attributes};

/// Sanitize untrusted HTML into a canonical XHTML fragment.
///
/// Empty input returns an empty string without parsing. Malformed markup
/// never produces an error; disallowed tags vanish with their content and
/// disallowed attributes are dropped. Empty-node pruning and SVG-image
/// removal are NOT applied here; use [`Purifier`] or call them directly.
pub fn purify_html(html: &str) -> String {
    Purifier::default().purify(html)
}

/// Configurable purify pipeline.
#[derive(Debug, Clone, Default)]
pub struct Purifier {
    options: PurifyOptions,
}

impl Purifier {
    #[must_use]
    pub fn new(options: PurifyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PurifyOptions {
        &self.options
    }

    /// Run the full pipeline over `html` and serialize the result.
    pub fn purify(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let document = load_html(html);
        self.purify_document(&document);

        match self.options.output {
            OutputMode::Body => document.body_xhtml(),
            OutputMode::FullDocument => document.xhtml(),
        }
    }

    /// Apply the whitelist filter and the configured passes to a parsed document.
    ///
    /// The start of the body is settled afterwards (head-only elements dropped,
    /// uncovered leading text wrapped in an implied paragraph), so purifying
    /// the output again changes nothing.
    pub fn purify_document(&self, document: &Document) {
        filter_node(document.root());

        if self.options.remove_svg_images {
            remove_svg_images(document);
        }

        if !self.options.strip_attributes.is_empty() {
            strip_attributes(document, &self.options.strip_attributes);
        }

        if self.options.remove_empty_nodes {
            remove_empty_nodes(document);
        }

        document.settle_leading_content();
    }
}
