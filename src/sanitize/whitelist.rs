//! Static whitelist and exemption tables.
//!
//! These sets are immutable process-wide data shared by every purify call.
//! Reference: https://www.w3schools.com/TAGS/default.ASP

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags that survive whitelist filtering. `#text` admits text nodes.
///
/// Deliberately absent, among others: `script`, `iframe`, `form`, `input`,
/// `button`, `select`, `option`, `textarea`, `object`, `embed`, `link`,
/// `meta`, `base`, `head`, `noscript`, `math`, `canvas`, `dialog`.
pub static ALLOWED_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "#text",
        "a",
        "abbr",
        "article",
        "audio",
        "b",
        "body",
        "blockquote",
        "br",
        "caption",
        "cite",
        "code",
        "col",
        "colgroup",
        "dd",
        "del",
        "details",
        "dfn",
        "div",
        "dl",
        "dt",
        "em",
        "fieldset",
        "figcaption",
        "figure",
        "footer",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "header",
        "hr",
        "html",
        "i",
        "img",
        "ins",
        "kbd",
        "label",
        "legend",
        "li",
        "ol",
        "optgroup",
        "output",
        "p",
        "param",
        "picture",
        "pre",
        "q",
        "rp",
        "rt",
        "ruby",
        "s",
        "samp",
        "section",
        "small",
        "source",
        "span",
        "strong",
        "style",
        "sub",
        "summary",
        "sup",
        "svg",
        "table",
        "tbody",
        "td",
        "template",
        "tfoot",
        "th",
        "thead",
        "time",
        "title",
        "tr",
        "track",
        "u",
        "ul",
        "var",
        "video",
        "wbr",
    ]
    .into_iter()
    .collect()
});

/// Attributes that survive whitelist filtering.
///
/// Event handlers (`onload`, `onerror`, ...) are never listed.
pub static ALLOWED_ATTRIBUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["class", "src", "href", "controls", "alt", "style", "target"]
        .into_iter()
        .collect()
});

/// Elements the empty-node pruner never removes or descends into.
pub static PRUNE_EXEMPT_TAGS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["img", "script", "table"].into_iter().collect());

/// Presentational and framework noise removed by
/// [`strip_attributes`](super::strip_attributes) when no explicit list is given.
pub const DEFAULT_STRIPPED_ATTRIBUTES: &[&str] = &[
    "style",
    "class",
    "id",
    "ng-if",
    "ng-click",
    "ng-non-bindable",
    "spellcheck",
    "border",
    "cellpadding",
    "cellspacing",
    "data-lazy-type",
    "data-lazy-src",
    "data-lazy-srcset",
    "data-lazy-sizes",
    "data-file",
    "data-filename",
    "data-reactid",
    "height",
    "width",
    "alt",
    "scope",
    "srcset",
];

pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(tag)
}

pub fn is_allowed_attribute(name: &str) -> bool {
    ALLOWED_ATTRIBUTES.contains(name)
}

pub fn is_prune_exempt(tag: &str) -> bool {
    PRUNE_EXEMPT_TAGS.contains(tag)
}
