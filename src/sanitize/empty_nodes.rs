//! Bottom-up removal of content-empty nodes under `<body>`.
//!
//! A node's emptiness is decided only after all of its descendants have been
//! resolved, so a single pass reaches the fixed point: `<p><br/></p>` loses
//! the `<br/>` first and then the now-childless `<p>`.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom::Document;
use crate::dom::node_util::{compact_children, content_root, has_children, tag_name};

use super::whitelist::is_prune_exempt;

/// Remove empty elements and blank text from the document body.
///
/// The body itself is never removed. `img`, `script` and `table` elements are
/// kept regardless of content and are not descended into.
///
/// # Example
/// ```
/// use kodegen_tools_purify::{load_html, remove_empty_nodes};
///
/// let doc = load_html("<p>a</p><p><br/></p><div> <span></span> </div>");
/// remove_empty_nodes(&doc);
/// assert_eq!(doc.body_xhtml(), "<p>a</p>");
/// ```
pub fn remove_empty_nodes(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };

    let removed = prune_children(&body);
    if removed > 0 {
        log::debug!("Removed {} empty nodes from body", removed);
    }
}

/// Prune every descendant of `root`, leaving `root` in place.
///
/// Post-order walk on an explicit stack: a node is pushed once to expand its
/// children and once more to compact them after they have all been resolved.
/// Returns the number of nodes detached.
pub fn prune_children(root: &Handle) -> usize {
    let mut removed = 0usize;
    let mut stack = vec![(content_root(root), false)];

    while let Some((node, children_resolved)) = stack.pop() {
        if children_resolved {
            let keep: Vec<bool> = node
                .children
                .borrow()
                .iter()
                .map(|child| !is_empty(child))
                .collect();
            removed += compact_children(&node, &keep);
            continue;
        }

        stack.push((node.clone(), true));
        for child in node.children.borrow().iter() {
            if descends_into(child) {
                stack.push((content_root(child), false));
            }
        }
    }

    removed
}

fn descends_into(node: &Handle) -> bool {
    !matches!(node.data, NodeData::Text { .. })
        && !is_prune_exempt(&tag_name(node))
        && has_children(node)
}

/// Emptiness of a node whose own children have already been pruned.
fn is_empty(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ if is_prune_exempt(&tag_name(node)) => false,
        _ => !has_children(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::load_html;

    fn pruned(html: &str) -> String {
        let doc = load_html(html);
        remove_empty_nodes(&doc);
        doc.body_xhtml()
    }

    #[test]
    fn test_paragraphs_with_only_breaks_are_removed() {
        assert_eq!(
            pruned("<p>a</p><p>b</p><p><br/></p><p><br/></p><p><br/></p>"),
            "<p>a</p><p>b</p>"
        );
    }

    #[test]
    fn test_content_is_kept() {
        let html = "<p>Cảm ơn tác giả. Bài viết rất hay.</p>";
        assert_eq!(pruned(html), html);
    }

    #[test]
    fn test_exempt_tags_survive_without_content() {
        assert_eq!(
            pruned(r#"<div><img src="a.png"></div><table></table><p> </p>"#),
            r#"<div><img src="a.png"/></div><table/>"#
        );
    }

    #[test]
    fn test_exempt_tags_are_not_descended_into() {
        assert_eq!(
            pruned("<table><tr><td></td></tr></table>"),
            "<table><tbody><tr><td/></tr></tbody></table>"
        );
    }

    #[test]
    fn test_script_is_kept_and_not_descended_into() {
        assert_eq!(pruned("<p>a</p><script></script>"), "<p>a</p><script/>");
        assert_eq!(
            pruned("<div><script> </script></div><p></p>"),
            "<div><script> </script></div>"
        );
    }

    #[test]
    fn test_nested_empties_collapse_in_one_pass() {
        assert_eq!(
            pruned("<div><section><span> </span><b></b></section></div><i>x</i>"),
            "<i>x</i>"
        );
    }

    #[test]
    fn test_whitespace_between_blocks_is_removed() {
        assert_eq!(pruned("<p>a</p>\n  <p>b</p>\n"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_comments_count_as_empty() {
        assert_eq!(pruned("<p>a</p><!-- note --><div><!-- x --></div>"), "<p>a</p>");
    }

    #[test]
    fn test_text_inside_kept_nodes_is_untouched() {
        assert_eq!(pruned("<p> a <b> </b></p>"), "<p> a </p>");
    }

    #[test]
    fn test_empty_body_stays_empty() {
        let doc = load_html("<p></p>");
        remove_empty_nodes(&doc);
        assert!(doc.body().is_some());
        assert_eq!(doc.body_xhtml(), "");
    }

    #[test]
    fn test_deeply_nested_empties() {
        let depth = 20_000;
        let html = format!("{}{}<p>x</p>", "<span>".repeat(depth), "</span>".repeat(depth));
        assert_eq!(pruned(&html), "<p>x</p>");
    }
}
