//! Minimal document-tree interface the extractor works against.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// An element of a parsed page.
///
/// Only elements are modelled; text is reachable through `text_content`.
pub trait DocumentNode: Sized {
    /// Element name as produced by the parser (lowercase for HTML elements).
    fn tag_name(&self) -> &str;

    /// Concatenated text of every descendant text node, untrimmed.
    fn text_content(&self) -> String;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;
}

impl<'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn children(&self) -> Vec<Self> {
        let node: &NodeRef<'a, Node> = self;
        node.children().filter_map(ElementRef::wrap).collect()
    }
}

/// Every element (including `root`) whose tag name equals `tag` exactly, in
/// document order.
pub fn collect_by_tag<N: DocumentNode>(root: N, tag: &str) -> Vec<N> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let mut children = node.children();
        if node.tag_name() == tag {
            found.push(node);
        }
        children.reverse();
        stack.extend(children);
    }
    found
}

/// A page body parsed leniently; malformed markup never fails.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementRef<'_>> {
        collect_by_tag(self.root(), tag)
    }
}
