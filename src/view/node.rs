use std::fmt::Write;

/// Declarative description of a piece of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup, emitted unescaped
    Raw(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["img", "br", "meta", "link", "input", "hr"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant element with the given tag, depth-first
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(element) = child {
                if element.tag == tag {
                    return Some(element);
                }
                if let Some(found) = element.find(tag) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Direct children that are elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
                Node::Raw(_) => {}
            }
        }
        out
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
            _ => None,
        }
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_nested() {
        let node: Node = Element::new("p")
            .class("note")
            .text("Fish & Chips")
            .child(Element::new("img").attr("src", "/img/1.jpg"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<p class="note">Fish &amp; Chips<img src="/img/1.jpg"></p>"#
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let node: Node = Element::new("a").attr("aria-label", "Katz's \"Deli\"").into();
        assert_eq!(node.to_html(), r#"<a aria-label="Katz&#39;s &quot;Deli&quot;"></a>"#);
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let node: Node = Element::new("div").child(Node::Raw("<b>x</b>".to_string())).into();
        assert_eq!(node.to_html(), "<div><b>x</b></div>");
    }

    #[test]
    fn test_find_and_text_content() {
        let element = Element::new("li")
            .child(Element::new("h1").child(Element::new("span").text("Emily")))
            .child(Element::new("p").text("Brooklyn"));
        assert_eq!(element.find("span").unwrap().text_content(), "Emily");
        assert_eq!(element.text_content(), "EmilyBrooklyn");
        assert_eq!(element.child_elements().count(), 2);
    }
}
