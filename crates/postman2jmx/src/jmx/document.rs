//! A minimal ordered XML element tree and its serializer.
//!
//! JMeter's JMX format needs element and attribute order preserved, and
//! distinguishes `<stringProp/>` from `<stringProp></stringProp>` for some
//! fields, so the tree keeps attributes as an ordered list and the
//! serializer controls the empty-element form explicitly.

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// One node of the output tree: an element or a text leaf.
#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone)]
pub struct XmlElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element with no attributes or children.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style). Attributes keep insertion order.
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    /// Set text content (builder style).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Append a child element (builder style).
    pub fn child(mut self, child: XmlElement) -> Self {
        self.push(child);
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// The value of the given attribute, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Mutable lookup of the first child element with the given name and
    /// attribute. Used to re-find a sampler's argument container when
    /// query parameters are merged into it.
    pub fn element_mut(&mut self, name: &str, attr: (&str, &str)) -> Option<&mut XmlElement> {
        self.children.iter_mut().find_map(|node| match node {
            XmlNode::Element(el) if el.name == name && el.attribute(attr.0) == Some(attr.1) => {
                Some(el)
            }
            _ => None,
        })
    }

    fn is_childless(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this element must serialize as `<x></x>` rather than `<x/>`
    /// when childless. JMeter's loader does not reliably treat a
    /// self-closing port property as "present but blank", so the port
    /// field always carries an explicit empty body.
    fn requires_explicit_empty(&self) -> bool {
        self.name == "stringProp" && self.attribute("name") == Some("HTTPSampler.port")
    }
}

/// Serialize a document to 4-space-indented XML with a UTF-8 declaration.
///
/// Childless elements render self-closing, except fields that require an
/// explicit empty body (see [`XmlElement::requires_explicit_empty`]).
/// Whitespace-only lines are dropped from the rendered text and the
/// result ends with a single trailing newline.
pub fn serialize(root: &XmlElement) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    let text = String::from_utf8(writer.into_inner())?;
    Ok(strip_blank_lines(&text))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name);
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }

    if element.is_childless() && !element.requires_explicit_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if element.is_childless() {
        // An empty text event keeps the closing tag on the same line.
        writer.write_event(Event::Text(BytesText::new("")))?;
    }
    for child in &element.children {
        match child {
            XmlNode::Element(el) => write_element(writer, el)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name)))?;
    Ok(())
}

/// Drop whitespace-only lines left by pretty-printing and normalize the
/// trailing newline.
fn strip_blank_lines(text: &str) -> String {
    let mut out = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
