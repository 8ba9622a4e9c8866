use kodegen_tools_purify::{load_html, remove_empty_nodes, remove_svg_images};

mod common;

fn prune(html: &str) -> String {
    let doc = load_html(html);
    remove_empty_nodes(&doc);
    doc.body_xhtml()
}

#[test]
fn test_remove_empty_node_cases() {
    common::init_logging();

    let cases = [
        (
            "<p>Cảm ơn tác giả. Bài viết rất hay.</p>",
            "<p>Cảm ơn tác giả. Bài viết rất hay.</p>",
        ),
        (
            "<p>a</p><p>b</p><p><br/></p><p><br/></p><p><br/></p>",
            "<p>a</p><p>b</p>",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(prune(input), expected, "remove_empty_nodes({input:?})");
    }
}

#[test]
fn test_exempt_elements_survive_pruning() {
    assert_eq!(prune("<p>a</p><script></script>"), "<p>a</p><script/>");
    assert_eq!(
        prune("<section><script>x</script><span> </span></section><table></table>"),
        "<section><script>x</script></section><table/>"
    );
    assert_eq!(prune(r#"<p><img src="a.png"></p>"#), r#"<p><img src="a.png"/></p>"#);
}

#[test]
fn test_nested_empty_wrappers_collapse() {
    assert_eq!(
        prune("<div><section><span> </span><em></em></section></div><b>x</b>"),
        "<b>x</b>"
    );
}

#[test]
fn test_whitespace_between_content_is_removed() {
    assert_eq!(prune("<ul>\n  <li>a</li>\n  <li> </li>\n</ul>"), "<ul><li>a</li></ul>");
}

#[test]
fn test_pruning_runs_after_svg_removal() {
    let doc = load_html(r#"<p><img src="icon.svg"></p><p><img src="photo.png"></p>"#);
    assert_eq!(remove_svg_images(&doc), 1);
    remove_empty_nodes(&doc);
    assert_eq!(doc.body_xhtml(), r#"<p><img src="photo.png"/></p>"#);
}

#[test]
fn test_pruning_is_idempotent() {
    let doc = load_html("<div><p></p>text<p><br></p></div>");
    remove_empty_nodes(&doc);
    let once = doc.body_xhtml();
    remove_empty_nodes(&doc);
    assert_eq!(doc.body_xhtml(), once);
    assert_eq!(once, "<div>text</div>");
}

#[test]
fn test_head_content_is_not_touched() {
    let doc = load_html("<title></title><p></p>");
    remove_empty_nodes(&doc);
    assert_eq!(
        doc.xhtml(),
        "<!DOCTYPE html><html><head><title/></head><body/></html>"
    );
}
