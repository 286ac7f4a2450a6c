use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, NodeType};
use xf_core::XFormError;

pub const XFORMS_NS: &str = "http://www.w3.org/2002/xforms";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: XmlElementNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElementNode),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlElementNode {
    /// Local tag name, without prefix.
    pub name: String,
    pub namespace: Option<String>,
    /// Unqualified attributes are keyed by local name, namespaced ones as
    /// `{namespace-uri}local`.
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlElementNode {
    /// True when the element has the given local name and is either in
    /// `namespace` or in no namespace at all.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name
            && self
                .namespace
                .as_deref()
                .map_or(true, |actual| actual == namespace)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn element_children(&self) -> impl Iterator<Item = &XmlElementNode> {
        self.children.iter().filter_map(|entry| match entry {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    pub fn has_element_children(&self) -> bool {
        self.element_children().next().is_some()
    }

    /// First direct child with the given name, see [`XmlElementNode::is`].
    pub fn child(&self, namespace: &str, name: &str) -> Option<&XmlElementNode> {
        self.element_children()
            .find(|element| element.is(namespace, name))
    }

    /// Pre-order walk over this element and every element below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }
}

fn collect_text(node: &XmlElementNode, out: &mut String) {
    for entry in &node.children {
        match entry {
            XmlNode::Text(value) => out.push_str(value),
            XmlNode::Element(element) => collect_text(element, out),
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a XmlElementNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let children = node.element_children().collect::<Vec<_>>();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

pub fn parse_xml_file(path: &Path) -> Result<XmlDocument, XFormError> {
    let source_name = path.display().to_string();
    let source = fs::read_to_string(path)
        .map_err(|error| XFormError::source_unreadable(&source_name, error))?;
    parse_xml_document(&source_name, &source)
}

pub fn parse_xml_document(source_name: &str, source: &str) -> Result<XmlDocument, XFormError> {
    let document = Document::parse(source)
        .map_err(|error| XFormError::source_unreadable(source_name, error))?;

    let Some(root) = document.root().children().find(|node| node.is_element()) else {
        return Err(XFormError::source_unreadable(
            source_name,
            "XML document must contain a root element.",
        ));
    };

    Ok(XmlDocument {
        root: parse_element(root),
    })
}

fn parse_element(node: Node<'_, '_>) -> XmlElementNode {
    let mut attributes = BTreeMap::new();
    for attribute in node.attributes() {
        let key = match attribute.namespace() {
            Some(namespace) => format!("{{{}}}{}", namespace, attribute.name()),
            None => attribute.name().to_string(),
        };
        attributes.insert(key, attribute.value().to_string());
    }

    let mut children = Vec::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => children.push(XmlNode::Element(parse_element(child))),
            NodeType::Text => {
                let value = child.text().unwrap_or_default();
                if value.is_empty() {
                    continue;
                }
                children.push(XmlNode::Text(value.to_string()));
            }
            _ => {}
        }
    }

    let tag_name = node.tag_name();
    XmlElementNode {
        name: tag_name.name().to_string(),
        namespace: tag_name.namespace().map(str::to_string),
        attributes,
        children,
    }
}
