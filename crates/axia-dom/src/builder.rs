//! Element Constructor
//!
//! Generic factory options for creating elements with classes, dataset
//! entries, text content, and arbitrary attributes in one call.

use crate::{DomTree, NodeId};

/// Options for [`DomTree::build_element`]
#[derive(Debug, Clone, Default)]
pub struct ElementInit {
    classes: Option<String>,
    dataset: Vec<(String, String)>,
    text: Option<String>,
    attrs: Vec<(String, String)>,
}

impl ElementInit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space-separated class list to add
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes = Some(classes.to_string());
        self
    }

    /// Custom-data entry, written as a `data-<key>` attribute
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.push((key.to_string(), value.to_string()));
        self
    }

    /// Rendered text content
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Generic attribute name/value
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }
}

impl DomTree {
    /// Create an element under `parent` from the given options
    pub fn build_element(&mut self, parent: NodeId, tag: &str, init: ElementInit) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);

        if let Some(el) = self.element_mut(id) {
            if let Some(classes) = &init.classes {
                el.add_classes(classes);
            }
            for (key, value) in &init.dataset {
                el.set_attribute(&format!("data-{key}"), value);
            }
            for (name, value) in &init.attrs {
                el.set_attribute(name, value);
            }
        }
        if let Some(text) = &init.text {
            let text_node = self.create_text(text);
            self.append_child(id, text_node);
        }

        id
    }
}
