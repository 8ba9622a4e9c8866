//! Input normalization applied before lenient parsing.
//!
//! Every non-ASCII character is rewritten as a decimal character reference so
//! the parser only ever sees ASCII bytes, CRLF line endings collapse to LF and
//! the `&nbsp;` entity becomes a plain space.

use htmlentity::entity::{CharacterSet, EncodeType, ICodedDataTrait, encode};

/// Normalize raw HTML text for parsing.
///
/// Never fails: if entity encoding cannot be completed the raw text is used
/// as-is for the remaining steps.
///
/// # Example
/// ```
/// use kodegen_tools_purify::normalize_html;
///
/// assert_eq!(normalize_html("a&nbsp;b\r\nc"), "a b\nc");
/// assert_eq!(normalize_html("Việt"), "Vi&#7879;t");
/// ```
pub fn normalize_html(html: &str) -> String {
    let encoded = match encode(html.as_bytes(), &EncodeType::Decimal, &CharacterSet::NonASCII)
        .to_string()
    {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!(
                "Failed to encode non-ASCII characters as entities: {}. Using raw input.",
                e
            );
            html.to_string()
        }
    };

    encoded.replace("\r\n", "\n").replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let html = r#"<p class="x">a &amp; b &lt; c</p>"#;
        assert_eq!(normalize_html(html), html);
    }

    #[test]
    fn test_non_ascii_becomes_decimal_references() {
        assert_eq!(normalize_html("Tiếng"), "Ti&#7871;ng");
        assert_eq!(normalize_html("日本"), "&#26085;&#26412;");
    }

    #[test]
    fn test_line_endings_collapse() {
        assert_eq!(normalize_html("a\r\nb\r\n"), "a\nb\n");
        // A lone CR is left for the parser's own input-stream handling
        assert_eq!(normalize_html("a\rb"), "a\rb");
    }

    #[test]
    fn test_nbsp_entity_becomes_space() {
        assert_eq!(normalize_html("<p>&nbsp;x&nbsp;&nbsp;y</p>"), "<p> x  y</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_html(""), "");
    }
}
