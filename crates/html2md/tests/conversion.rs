//! End-to-end conversion of complete HTML documents.

use std::fs;

use html2md::{parse_html, ConvertOptions, Html2MdError, MarkdownConverter};
use tempfile::TempDir;

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head><title>Doc</title><style>body { margin: 0 }</style></head>
<body>
<h2>Install</h2>
<p>Run <code>cargo_install</code> then see <a href="https://x.io">docs</a>.</p>
<ul>
<li>First</li>
<li>Second
<ol>
<li>Nested one</li>
<li>Nested two</li>
</ol>
</li>
</ul>
<pre><code class="language-python">print(1)
</code></pre>
<table>
<tr><th>A</th><th>B</th><th>C</th></tr>
<tr><td>D</td></tr>
</table>
<script>var x = 1;</script>
</body>
</html>
"#;

const EXPECTED: &str = "## Install\n\
\n\
Run `cargo\\_install` then see [docs](https://x.io).\n\
\n\
- First\n\
- Second\n\
\x20 1. Nested one\n\
\x20 2. Nested two\n\
\n\
\n\
```python\n\
print(1)\n\
```\n\
\n\
| A | B | C |\n\
| --- | --- | --- |\n\
| D |  |  |\n";

#[test]
fn test_full_document() {
    let converter = MarkdownConverter::new();
    assert_eq!(converter.convert_html(DOCUMENT), EXPECTED);
}

#[test]
fn test_parse_then_convert_matches_convert_html() {
    let converter = MarkdownConverter::new();
    let mut root = parse_html(DOCUMENT);
    root.strip_elements(converter.options().strip_tags.as_slice());
    assert_eq!(converter.convert(&root), EXPECTED);
}

#[test]
fn test_text_is_escaped_but_syntax_is_not() {
    let converter = MarkdownConverter::new();
    let result = converter.convert_html("<p># not *a* heading <em>but_this</em></p>");
    assert_eq!(result, "\\# not \\*a\\* heading *but\\_this*\n");
}

#[test]
fn test_code_block_content_is_not_escaped() {
    let converter = MarkdownConverter::new();
    let result =
        converter.convert_html("<pre><code class=\"language-rust\">let *x = [1];</code></pre>");
    assert_eq!(result, "```rust\nlet *x = [1];\n```\n");
}

#[test]
fn test_unknown_wrappers_are_flattened() {
    let converter = MarkdownConverter::new();
    let result = converter.convert_html(
        "<div><section><article><h3>Deep</h3><p>Text</p></article></section></div>",
    );
    assert_eq!(result, "### Deep\n\nText\n");
}

#[test]
fn test_empty_link_uses_href() {
    let converter = MarkdownConverter::new();
    let result = converter.convert_html(r#"<p><a href="https://x.io"></a></p>"#);
    assert_eq!(result, "[https://x.io](https://x.io)\n");
}

#[test]
fn test_wider_list_indent() {
    let converter = MarkdownConverter::with_options(ConvertOptions {
        list_indent: 4,
        ..Default::default()
    });
    let result = converter.convert_html("<ul><li>a<ul><li>b</li></ul></li></ul>");
    assert_eq!(result, "- a\n    - b\n\n");
}

#[test]
fn test_convert_file_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("page.html");
    let output = temp_dir.path().join("page.md");
    fs::write(&input, "<h1>Title</h1><p>Body</p>").unwrap();

    MarkdownConverter::new()
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "# Title\n\nBody\n");
}

#[test]
fn test_convert_file_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.html");
    let output = temp_dir.path().join("out.md");

    let err = MarkdownConverter::new()
        .convert_file(&input, &output)
        .unwrap_err();

    assert!(matches!(err, Html2MdError::Io { ref path, .. } if path == &input));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin1.html");
    let output = temp_dir.path().join("out.md");
    fs::write(&input, b"<p>caf\xe9</p>").unwrap();

    let err = MarkdownConverter::new()
        .convert_file(&input, &output)
        .unwrap_err();

    assert!(matches!(err, Html2MdError::Decode { .. }));
    assert!(err.to_string().contains("not valid UTF-8"));
    assert!(!output.exists());
}

#[test]
fn test_convert_file_unwritable_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("page.html");
    let output = temp_dir.path().join("no-such-dir").join("page.md");
    fs::write(&input, "<p>x</p>").unwrap();

    let err = MarkdownConverter::new()
        .convert_file(&input, &output)
        .unwrap_err();

    assert!(matches!(err, Html2MdError::Io { ref path, .. } if path == &output));
}
