//! HTML serialization of the view tree.

use super::{Element, ViewNode};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Attributes written without a value when empty.
const BOOLEAN_ATTRS: &[&str] = &["allowfullscreen"];

/// Escape HTML special characters for safe rendering.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize a node (and its subtree) to HTML.
pub fn to_html(node: &ViewNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serialize a list of sibling nodes.
pub fn nodes_to_html(nodes: &[ViewNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &ViewNode) {
    match node {
        ViewNode::Text(s) => out.push_str(&html_escape(s)),
        ViewNode::Markup(s) => out.push_str(s),
        ViewNode::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag);
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape(&el.classes.join(" ")));
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        if !(value.is_empty() && BOOLEAN_ATTRS.contains(&name.as_str())) {
            out.push_str("=\"");
            out.push_str(&html_escape(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag) {
        return;
    }

    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}
