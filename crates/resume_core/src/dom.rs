//! Minimal node builder for the dashboard.
//!
//! Views are built as data and serialized with escaping, so untrusted fields
//! (role names, descriptions, file names) never become markup.

use std::fmt::Write;

use crate::Msg;

const VOID_TAGS: &[&str] = &["input", "br", "meta", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub styles: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    /// Message dispatched when the element is pressed. Not serialized.
    pub on_click: Option<Msg>,
}

pub fn element(tag: &'static str) -> Element {
    Element {
        tag,
        id: None,
        classes: Vec::new(),
        attributes: Vec::new(),
        styles: Vec::new(),
        children: Vec::new(),
        on_click: None,
    }
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds `class` only when `enabled`.
    pub fn class_if(self, enabled: bool, class: impl Into<String>) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    pub fn on_click(mut self, msg: Msg) -> Self {
        self.on_click = Some(msg);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(key, _)| *key == property)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search over this node and its descendants.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(predicate, &mut found);
        found
    }

    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        self.find_all(&|element| element.has_class(class))
    }

    pub fn find_by_id<'a>(&'a self, id: &str) -> Option<&'a Element> {
        self.find_all(&|element| element.id.as_deref() == Some(id))
            .into_iter()
            .next()
    }

    fn walk<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.walk(predicate, found);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_text(content)),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl Element {
    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attribute(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attribute(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_attribute(&style));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attribute(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
