use anyhow::Result;
use kodegen_tools_purify::{OutputMode, Purifier, PurifyError, PurifyOptions, load_html};

mod common;

const ARTICLE: &str = r#"<div class="post" style="color: red">
<h2 onclick="track()">Title</h2>
<p><img src="/static/logo.svg" alt="logo"></p>
<p>Body <a href="javascript:steal()">link</a></p>
<p><br></p>
<script>steal()</script>
</div>"#;

#[test]
fn test_default_options_only_filter() {
    common::init_logging();

    let clean = Purifier::default().purify(ARTICLE);
    assert!(clean.contains(r#"class="post""#));
    assert!(clean.contains("logo.svg"));
    assert!(clean.contains("<p><br/></p>"));
    assert!(!clean.contains("onclick"));
    assert!(!clean.contains("script"));
    assert!(!clean.contains("javascript"));
}

#[test]
fn test_cleanup_preset_runs_every_pass() {
    let clean = Purifier::new(PurifyOptions::cleanup()).purify(ARTICLE);
    // Blank text between blocks goes with the pruning pass
    assert_eq!(clean, "<div><h2>Title</h2><p>Body <a>link</a></p></div>");
}

#[test]
fn test_options_from_json() -> Result<()> {
    let options = PurifyOptions::from_json_str(
        r#"{"strip_attributes": ["class"], "output": "full_document"}"#,
    )?;
    let clean = Purifier::new(options).purify(r#"<p class="x" style="y">z</p>"#);
    assert_eq!(
        clean,
        r#"<!DOCTYPE html><html><body><p style="y">z</p></body></html>"#
    );
    Ok(())
}

#[test]
fn test_unknown_output_mode_is_rejected() {
    let result = PurifyOptions::from_json_str(r#"{"output": "fragment"}"#);
    assert!(matches!(result, Err(PurifyError::InvalidOptions(_))));
}

#[test]
fn test_purify_document_then_stream() -> Result<()> {
    let purifier = Purifier::new(PurifyOptions::new().with_output(OutputMode::Body));
    let doc = load_html(r#"<p onclick="x">a</p><iframe></iframe>"#);
    purifier.purify_document(&doc);

    let mut out = Vec::new();
    doc.write_body_xhtml(&mut out)?;
    assert_eq!(String::from_utf8(out)?, "<p>a</p>");
    Ok(())
}
