//! Configuration element tree
//!
//! The markup parser is not part of this crate. Definitions arrive either as an
//! already-parsed tree from the caller or as a YAML/JSON document deserialized
//! straight into [`Element`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Read-only view over a configuration element.
///
/// The assembler only ever reads through this trait; it never mutates a tree.
pub trait ConfigElement {
    /// Attribute value by name, `None` when the attribute is not present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// First child element with the given name
    fn first_child(&self, name: &str) -> Option<&Self>;

    /// All child elements with the given name, in document order
    fn children_named<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Self> + 'a>;

    /// First child element regardless of its name
    fn first_element(&self) -> Option<&Self>;

    /// Text content, `None` when the element carries no text node
    fn text(&self) -> Option<&str>;

    /// Serialized markup form of this element
    fn to_xml_string(&self) -> String;
}

/// In-memory configuration element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element name
    pub name: String,

    /// Attributes in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child elements in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add or replace an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            // Writing to a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }

        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text, false));
        }
        for child in &self.children {
            child.write_xml(out);
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

impl ConfigElement for Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn first_child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Self> + 'a> {
        Box::new(self.children.iter().filter(move |c| c.name == name))
    }

    fn first_element(&self) -> Option<&Self> {
        self.children.first()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out);
        out
    }
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
