//! Typed page node tree
//!
//! Comment subtrees are lifted out of the parsed document into this owned
//! representation so the headline/body splitter can be tested against
//! constructed trees without a real parser.

/// One node of a comment subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNode {
    /// A run of text
    Text(String),

    /// An element with its tag name, attributes, and children in document order
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<PageNode>,
    },
}

impl PageNode {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<PageNode>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Returns the tag name for elements, None for text nodes
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Element { tag, .. } => Some(tag),
        }
    }

    /// Returns true if this is an element with the given tag name
    pub fn is_element(&self, name: &str) -> bool {
        self.tag() == Some(name)
    }

    /// Returns the immediate children, empty for text nodes
    pub fn children(&self) -> &[PageNode] {
        match self {
            Self::Text(_) => &[],
            Self::Element { children, .. } => children,
        }
    }

    /// Concatenates all descendant text, markup stripped
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(content) => content.clone(),
            Self::Element { children, .. } => {
                let mut out = String::new();
                for child in children {
                    out.push_str(&child.text_content());
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let node = PageNode::text("hello");
        assert_eq!(node.tag(), None);
        assert!(node.children().is_empty());
        assert_eq!(node.text_content(), "hello");
    }

    #[test]
    fn test_element_tag() {
        let node = PageNode::element("a", vec![PageNode::text("link")]);
        assert!(node.is_element("a"));
        assert!(!node.is_element("p"));
        assert_eq!(node.tag(), Some("a"));
    }

    #[test]
    fn test_nested_text_content() {
        let node = PageNode::element(
            "span",
            vec![
                PageNode::text("one "),
                PageNode::element("i", vec![PageNode::text("two")]),
                PageNode::text(" three"),
            ],
        );
        assert_eq!(node.text_content(), "one two three");
    }
}
