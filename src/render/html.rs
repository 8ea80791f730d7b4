//! Static HTML output for detached trees

use super::ElementNode;

pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub(super) fn write_node(node: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(node.tag_name);
    if !node.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape(&node.classes.join(" ")));
        out.push('"');
    }
    if node.hidden {
        out.push_str(" style=\"display: none;\"");
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&html_escape(text));
    }
    for child in &node.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(node.tag_name);
    out.push('>');
}
