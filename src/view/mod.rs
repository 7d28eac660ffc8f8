//! Structured view tree produced by the renderers.
//!
//! Renderers never build HTML strings directly; they return [`ViewNode`]s and
//! the [`html`] adapter serializes them at the boundary.

pub mod html;

pub use html::{html_escape, to_html};

/// A node in the rendered view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup from the datasets, emitted verbatim.
    Markup(String),
}

impl ViewNode {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Self::Markup(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text and markup content of this subtree.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) | Self::Markup(s) => s.clone(),
            Self::Element(el) => el.children.iter().map(ViewNode::text_content).collect(),
        }
    }
}

impl From<Element> for ViewNode {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element with classes, attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(ViewNode::Text(s.into()))
    }

    pub fn markup(self, s: impl Into<String>) -> Self {
        self.child(ViewNode::Markup(s.into()))
    }

    /// Append a child only when present.
    pub fn child_opt(self, child: Option<impl Into<ViewNode>>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(ViewNode::as_element)
    }

    /// First descendant (depth-first) with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for el in self.elements() {
            if el.tag == tag {
                return Some(el);
            }
            if let Some(found) = el.find(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(ViewNode::text_content).collect()
    }
}
