//! Structured-content document nodes rendered by the lookup tool.
//!
//! A [`Glossary`] holds the ordered top-level sections of one entry. Each
//! section is a [`DocumentNode`]: either a real [`Element`] or the
//! [`DocumentNode::Empty`] placeholder, which keeps a slot in the section list
//! even when the entry has nothing to show there.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// HTML-like tags understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Span,
    Div,
    Ul,
    Li,
    A,
}

/// Inline style subset the renderer accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style_type: Option<String>,
}

impl Style {
    pub fn font_size(size: impl Into<String>) -> Self {
        Self {
            font_size: Some(size.into()),
            ..Self::default()
        }
    }

    pub fn list_style(kind: impl Into<String>) -> Self {
        Self {
            list_style_type: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_list_style(mut self, kind: impl Into<String>) -> Self {
        self.list_style_type = Some(kind.into());
        self
    }
}

/// Element body: plain text or child nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Nodes(Vec<DocumentNode>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            content: None,
            data: BTreeMap::new(),
            style: None,
            lang: None,
            href: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    pub fn children(mut self, nodes: Vec<DocumentNode>) -> Self {
        self.content = Some(Content::Nodes(nodes));
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Child nodes, or an empty slice for text or bodiless elements.
    pub fn child_nodes(&self) -> &[DocumentNode] {
        match &self.content {
            Some(Content::Nodes(nodes)) => nodes,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// One node of a structured-content document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// Slot that is intentionally left blank; rendered as a bare `span`.
    Empty,
    Element(Element),
}

impl DocumentNode {
    pub fn is_empty_placeholder(&self) -> bool {
        matches!(self, DocumentNode::Empty)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            DocumentNode::Element(element) => Some(element),
            DocumentNode::Empty => None,
        }
    }
}

impl From<Element> for DocumentNode {
    fn from(element: Element) -> Self {
        DocumentNode::Element(element)
    }
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentNode::Empty => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("tag", &Tag::Span)?;
                map.end()
            }
            DocumentNode::Element(element) => element.serialize(serializer),
        }
    }
}

/// The `structured-content` glossary item attached to a term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glossary {
    pub sections: Vec<DocumentNode>,
}

impl Glossary {
    pub fn push(&mut self, section: impl Into<DocumentNode>) {
        self.sections.push(section.into());
    }

    /// First section whose `data` carries `key = value`.
    pub fn section(&self, key: &str, value: &str) -> Option<&Element> {
        self.sections
            .iter()
            .filter_map(DocumentNode::as_element)
            .find(|element| element.data.get(key).is_some_and(|v| v == value))
    }
}

impl Serialize for Glossary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "structured-content")?;
        map.serialize_entry("content", &self.sections)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_placeholder_is_bare_span() {
        let value = serde_json::to_value(DocumentNode::Empty).unwrap();
        assert_eq!(value, json!({ "tag": "span" }));
    }

    #[test]
    fn test_element_skips_unset_fields() {
        let node: DocumentNode = Element::new(Tag::A)
            .href("?query=x&wildcards=off")
            .text("x")
            .into();
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({ "tag": "a", "content": "x", "href": "?query=x&wildcards=off" })
        );
    }

    #[test]
    fn test_empty_children_still_serialized() {
        let node = Element::new(Tag::Div).children(vec![]);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({ "tag": "div", "content": [] }));
    }

    #[test]
    fn test_glossary_wrapper() {
        let mut glossary = Glossary::default();
        glossary.push(Element::new(Tag::Li).text("one").style(Style::font_size("80%")));
        let value = serde_json::to_value(&glossary).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "structured-content",
                "content": [{ "tag": "li", "content": "one", "style": { "fontSize": "80%" } }],
            })
        );
    }
}
