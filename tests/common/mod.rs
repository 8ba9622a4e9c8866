//! Test utilities shared by the purify integration tests

/// Route `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wraps body markup in a complete document with head boilerplate
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <script src="/app.js"></script>
</head>
<body>{}</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// Input/expected pairs for the public `purify_html` contract
#[allow(dead_code)]
pub const PURIFY_CASES: &[(&str, &str)] = &[
    ("", ""),
    ("a <script>alert(1)</script> b", "<p>a  b</p>"),
    (r#"<iframe src="abc.html"/>"#, ""),
    ("<p>abc<iframe//src=jAva&Tab;script:alert(3)>def</p>", "<p>abc</p>"),
    (r#"<svg onload="alert(document.cookie)"></svg>"#, "<svg/>"),
    (
        r#"<img src="abc.jpg" style="width: 100px"/>"#,
        r#"<img src="abc.jpg" style="width: 100px"/>"#,
    ),
    ("<img src=x onerror=alert(1)//>", r#"<img src="x"/>"#),
    ("<svg><g/onload=alert(2)//<p>", "<svg/>"),
    // html5ever inserts <tbody> per the WHATWG table rules
    (
        "<TABLE><tr><td>HELLO</tr></TABL>",
        "<table><tbody><tr><td>HELLO</td></tr></tbody></table>",
    ),
    (
        "<UL><li><A HREF=//google.com>click</UL>",
        r#"<ul><li><a href="//google.com">click</a></li></ul>"#,
    ),
    (
        "Tiếng Việt, Nguyễn Văn Huyên, Cao Thị Thùy Dương, Nguyễn Anh Tuấn",
        "<p>Tiếng Việt, Nguyễn Văn Huyên, Cao Thị Thùy Dương, Nguyễn Anh Tuấn</p>",
    ),
    (
        r#"<select name="pet" size="3" multiple>
                    <option selected>mouse</option>
                    <option>bird</option>
                    <option>cat</option>
                </select>"#,
        "",
    ),
    ("<p></p><p><br /></p>", "<p/><p><br/></p>"),
    (
        r#"<a href="javascript:alert(1);">Link 1</a><a href="http://vnexpress.net">Link 2</a>"#,
        r#"<a>Link 1</a><a href="http://vnexpress.net">Link 2</a>"#,
    ),
    (
        "<form><math><mtext><form><mglyph><style></math><img src onerror=alert(1)></style></mglyph></form></mtext></math></form>",
        "",
    ),
];
