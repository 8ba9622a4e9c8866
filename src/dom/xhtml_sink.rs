//! Token sink that honors XML self-closing syntax on HTML elements.
//!
//! The HTML tree builder ignores the trailing `/` of `<div/>` and leaves the
//! element open, so everything after it becomes its content. The purifier
//! emits XML syntax, and its own output has to re-parse to the same tree, so
//! a self-closed start tag for a non-void HTML element is followed by a
//! synthesized end tag. Foreign content (SVG, MathML) already acknowledges
//! self-closing tags and is passed through untouched.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer,
};
use html5ever::tree_builder::TreeBuilder;
use html5ever::{ParseOpts, TokenizerResult};
use markup5ever_rcdom::{Handle, RcDom};

/// HTML elements that never have content; an end tag for them is either
/// ignored or, for `br`, turned into another element.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "image", "img",
    "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Start tags that switch the tree builder into foreign content.
const FOREIGN_ROOTS: &[&str] = &["svg", "math"];

struct XhtmlSink {
    tree_builder: TreeBuilder<Handle, RcDom>,
}

impl XhtmlSink {
    fn closes_itself(&self, tag: &Tag) -> bool {
        tag.kind == TagKind::StartTag
            && tag.self_closing
            && !VOID_ELEMENTS.contains(&&*tag.name)
            && !FOREIGN_ROOTS.contains(&&*tag.name)
            && !self
                .tree_builder
                .adjusted_current_node_present_but_not_in_html_namespace()
    }
}

impl TokenSink for XhtmlSink {
    type Handle = Handle;

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<Handle> {
        let Token::TagToken(tag) = token else {
            return self.tree_builder.process_token(token, line_number);
        };

        if !self.closes_itself(&tag) {
            return self.tree_builder.process_token(Token::TagToken(tag), line_number);
        }

        let end = Tag {
            kind: TagKind::EndTag,
            name: tag.name.clone(),
            self_closing: false,
            attrs: Vec::new(),
        };

        // Raw-text and plaintext switches are dropped: the element is closed
        // before any content could reach it.
        let _ = self
            .tree_builder
            .process_token(Token::TagToken(tag), line_number);
        self.tree_builder.process_token(Token::TagToken(end), line_number)
    }

    fn end(&self) {
        self.tree_builder.end();
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        self.tree_builder
            .adjusted_current_node_present_but_not_in_html_namespace()
    }
}

/// Parse a whole document into an `RcDom`.
pub(crate) fn parse_xhtml_document(html: &str) -> RcDom {
    let opts = ParseOpts::default();
    let sink = XhtmlSink {
        tree_builder: TreeBuilder::new(RcDom::default(), opts.tree_builder),
    };
    let tokenizer = Tokenizer::new(sink, opts.tokenizer);

    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    while let TokenizerResult::Script(_) = tokenizer.feed(&input) {}
    tokenizer.end();

    tokenizer.sink.tree_builder.sink
}
