//! DOM Node
//!
//! Node and element data: attributes, native widget flags, geometry.

use crate::{NodeId, Rect};

/// DOM Node
#[derive(Debug)]
pub struct Node {
    /// Parent node (None if root)
    pub parent: Option<NodeId>,
    /// Child nodes in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Text(content),
        }
    }

    /// Create a document node
    pub fn document() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Document,
        }
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes (linear scan; elements rarely carry more than a handful)
    attrs: Vec<Attribute>,
    /// Native disabled flag
    pub disabled: bool,
    /// Native checked flag
    pub checked: bool,
    /// Native selected flag
    pub selected: bool,
    /// Layout box, if the element is currently laid out
    pub layout: Option<Rect>,
    /// Client rects from fragmentation (inline boxes may have several)
    pub client_rects: Vec<Rect>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            disabled: false,
            checked: false,
            selected: false,
            layout: None,
            client_rects: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(index).value)
    }

    /// Check if an attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Iterate over attributes
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    /// The id attribute
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// The role attribute
    pub fn role(&self) -> Option<&str> {
        self.attribute("role")
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    /// Add classes from a space-separated list
    pub fn add_classes(&mut self, classes: &str) {
        let mut list: Vec<&str> = self
            .attribute("class")
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default();
        for class in classes.split_whitespace() {
            if !list.contains(&class) {
                list.push(class);
            }
        }
        let joined = list.join(" ");
        self.set_attribute("class", &joined);
    }

    /// Sequential focus order (tabindex attribute; invalid or absent means 0)
    pub fn tab_index(&self) -> i32 {
        self.attribute("tabindex")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Set the sequential focus order
    pub fn set_tab_index(&mut self, value: i32) {
        self.set_attribute("tabindex", &value.to_string());
    }

    /// Whether the element currently renders with a nonzero layout box
    /// or at least one client rect
    pub fn is_rendered(&self) -> bool {
        self.layout.is_some_and(|r| !r.is_empty()) || !self.client_rects.is_empty()
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut el = ElementData::new("button");
        el.set_attribute("id", "submit");
        el.set_attribute("aria-pressed", "false");
        el.set_attribute("aria-pressed", "true");

        assert_eq!(el.attribute("id"), Some("submit"));
        assert_eq!(el.attribute("aria-pressed"), Some("true"));
        assert_eq!(el.attributes().count(), 2);
    }

    #[test]
    fn test_remove_attribute() {
        let mut el = ElementData::new("a");
        el.set_attribute("href", "/home");

        assert!(el.has_attribute("href"));
        assert_eq!(el.remove_attribute("href"), Some("/home".to_string()));
        assert!(!el.has_attribute("href"));
        assert_eq!(el.remove_attribute("href"), None);
    }

    #[test]
    fn test_classes() {
        let mut el = ElementData::new("div");
        el.add_classes("panel active");
        el.add_classes("active wide");

        assert!(el.has_class("panel"));
        assert!(el.has_class("wide"));
        assert_eq!(el.attribute("class"), Some("panel active wide"));
    }

    #[test]
    fn test_tab_index() {
        let mut el = ElementData::new("input");
        assert_eq!(el.tab_index(), 0);

        el.set_tab_index(-1);
        assert_eq!(el.tab_index(), -1);
        assert_eq!(el.attribute("tabindex"), Some("-1"));

        el.set_attribute("tabindex", "garbage");
        assert_eq!(el.tab_index(), 0);
    }

    #[test]
    fn test_is_rendered() {
        let mut el = ElementData::new("span");
        assert!(!el.is_rendered());

        el.layout = Some(Rect::from_xywh(0.0, 0.0, 0.0, 0.0));
        assert!(!el.is_rendered());

        el.client_rects.push(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        assert!(el.is_rendered());
    }
}
