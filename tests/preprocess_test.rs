//! Preprocessing behavior observed through the public pipeline stages.

use rs_readability::dom;
use rs_readability::extractor::preprocess::{
    preprocess, remove_unlikely_candidates, transform_misused_divs,
};
use rs_readability::{extract_str, Options};

#[test]
fn strong_negative_class_is_removed_despite_override_term() {
    let doc = dom::parse(
        r#"<html><body><div class="g-plus article" id="share">+1</div><div class="article">kept</div></body></html>"#,
    );
    remove_unlikely_candidates(&doc);

    assert!(doc.select("#share").is_empty());
    assert!(doc.select("div.article").exists());
}

#[test]
fn unlikely_element_inside_code_block_survives() {
    let doc = dom::parse(
        r#"<html><body>
            <pre><code><span class="comment">// explain</span> let x = 1;</code></pre>
            <div class="comment">Reader comment</div>
        </body></html>"#,
    );
    remove_unlikely_candidates(&doc);

    assert!(doc.select("pre span.comment").exists());
    assert!(doc.select("div.comment").is_empty());
}

#[test]
fn body_and_root_are_never_removed() {
    let doc = dom::parse(r#"<html class="sidebar"><body id="comments"><p>text</p></body></html>"#);
    remove_unlikely_candidates(&doc);

    assert!(doc.select("html").exists());
    assert!(doc.select("body").exists());
    assert!(doc.select("p").exists());
}

#[test]
fn misused_div_rename_is_idempotent() {
    let doc = dom::parse(
        r#"<html><body>
            <div id="a">Inline <em>only</em> text</div>
            <div id="b"><table><tr><td>cell</td></tr></table></div>
            <div id="c"><div id="d">nested inline</div></div>
        </body></html>"#,
    );

    assert_eq!(transform_misused_divs(&doc), 2);
    let once = doc.html().to_string();
    assert_eq!(transform_misused_divs(&doc), 0);
    assert_eq!(doc.html().to_string(), once);

    assert!(doc.select("p#a").exists());
    assert!(doc.select("div#b").exists());
    assert!(doc.select("div#c").exists());
    assert!(doc.select("p#d").exists());
}

#[test]
fn full_preprocess_runs_all_steps() {
    let doc = dom::parse(
        r#"<html><head><style>body{}</style></head><body>
            <script>track()</script>
            <div id="plain">Some inline text</div>
            <div class="social">Share this</div>
        </body></html>"#,
    );
    preprocess(&doc, &Options::default());

    assert!(doc.select("script, style").is_empty());
    assert!(doc.select("p#plain").exists());
    assert!(doc.select(".social").is_empty());
}

#[test]
fn code_sample_survives_extraction() {
    let prose = "This walkthrough explains the snippet below, line by line, so that readers can follow along.";
    let html = format!(
        r#"<html><body><article class="post">
            <p>{prose}</p>
            <pre class="comment-code">fn main() {{ println!("hi"); }}</pre>
        </article></body></html>"#
    );
    let result = extract_str(&html);

    assert!(result.content.contains(prose));
    assert!(result.content.contains(r#"<pre class="comment-code">"#));
}
