//! Render tree produced by the slider.
//!
//! A host turns this into real elements (see the browser binding) or into
//! markup with [`Node::to_html`].

use std::fmt::Write;

/// One element of the rendered slider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Element tag name
    pub tag: &'static str,
    /// Value of the `data-part` attribute, used for hit testing and lookup
    pub part: Option<&'static str>,
    /// Class names, already merged
    pub classes: Vec<String>,
    /// Inline style declarations in order
    pub style: Vec<(&'static str, String)>,
    /// Text content
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn part(mut self, part: &'static str) -> Self {
        self.part = Some(part);
        self
    }

    pub fn classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Merged `class` attribute value, if any classes are set.
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }

    /// Inline `style` attribute value, if any declarations are set.
    pub fn style_attr(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        Some(declarations.join("; "))
    }

    /// Look up a style declaration by property name.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the node with the given `data-part`.
    pub fn find_part(&self, part: &str) -> Option<&Node> {
        if self.part == Some(part) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_part(part))
    }

    /// Serialize the tree to HTML with escaped text and attributes.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(part) = self.part {
            let _ = write!(out, " data-part=\"{}\"", escape(part));
        }
        if let Some(class) = self.class_attr() {
            let _ = write!(out, " class=\"{}\"", escape(&class));
        }
        if let Some(style) = self.style_attr() {
            let _ = write!(out, " style=\"{}\"", escape(&style));
        }
        out.push('>');

        if let Some(ref text) = self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
