//! Markup tree model
//!
//! The walker works on [`MarkupNode`], an element tree where text is attached
//! to elements instead of living in separate text nodes: `text` is the text
//! before an element's first child and `tail` is the text that follows an
//! element up to its next sibling. [`parse_markup`] builds this tree from the
//! DOM produced by `html5ever`.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use log::debug;
use markup5ever::QualName;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::data::tags::{is_table_section, TagKind};
use crate::utils::error::{ConversionError, ConversionResult};

const BODY_TAG: &str = "body";
const PARAGRAPH_TAG: &str = "p";

/// A parsed markup element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupNode {
    /// Tag name, lowercase as produced by the HTML parser
    pub tag: String,
    /// Text before the first child
    pub text: Option<String>,
    /// Text after this element, before its next sibling
    pub tail: Option<String>,
    /// Child elements in document order
    pub children: Vec<MarkupNode>,
    /// Paragraph inserted around leading body content, not written by the
    /// author
    pub implied: bool,
}

impl MarkupNode {
    /// Create an element without text or children
    pub fn new(tag: impl Into<String>) -> Self {
        MarkupNode {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Rewrite rule that applies to this element
    pub fn kind(&self) -> TagKind {
        TagKind::from_tag(&self.tag)
    }

    /// Number of child elements
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn first_child(&self) -> Option<&MarkupNode> {
        self.children.first()
    }

    /// Own text of the element and all its descendants, tails included
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(ref text) = self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
            if let Some(ref tail) = child.tail {
                out.push_str(tail);
            }
        }
    }
}

/// Position of an element among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingPosition {
    /// 0-based index
    pub index: usize,
    /// Number of siblings, the element included
    pub count: usize,
}

impl SiblingPosition {
    pub fn new(index: usize, count: usize) -> Self {
        SiblingPosition { index, count }
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

/// Parse an HTML-like string into a [`MarkupNode`] tree.
///
/// The returned node is the document's root element (`html`). Parser
/// artifacts are normalized on the way:
/// - `tbody`/`thead`/`tfoot` inside a table are flattened so the table's
///   children are its rows
/// - an empty `head` element is dropped
/// - comments and processing instructions are skipped
/// - body text and inline elements before the first paragraph or table are
///   wrapped in an implied `p`, so the body's first child is that wrapper
///   and every authored paragraph comes after it
pub fn parse_markup(input: &str) -> ConversionResult<MarkupNode> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .map_err(|e| ConversionError::parse(e.to_string()))?;

    debug!("parsed {} bytes of markup", input.len());

    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .ok_or_else(|| ConversionError::parse("document has no root element"))?;

    let mut root = build_element(&root);
    if let Some(body) = root.children.iter_mut().find(|c| c.tag == BODY_TAG) {
        wrap_leading_content(body);
    }
    Ok(root)
}

/// Move the body's own text and its leading inline elements into an
/// implied paragraph
fn wrap_leading_content(body: &mut MarkupNode) {
    let has_text = body.text.as_deref().is_some_and(|t| !t.trim().is_empty());
    let inline_run = body
        .children
        .iter()
        .take_while(|child| !child.kind().closes_paragraph())
        .count();
    if !has_text && inline_run == 0 {
        return;
    }

    let mut wrapper = MarkupNode::new(PARAGRAPH_TAG);
    wrapper.implied = true;
    wrapper.text = body.text.take();
    wrapper.children = body.children.drain(..inline_run).collect();
    debug!(
        "implied paragraph around {} leading element(s)",
        wrapper.children.len()
    );
    body.children.insert(0, wrapper);
}

fn build_element(handle: &Handle) -> MarkupNode {
    let tag = match &handle.data {
        NodeData::Element { name, .. } => tag_name(name),
        _ => String::new(),
    };
    let mut node = MarkupNode::new(tag);
    append_children(&mut node, handle);
    node
}

fn append_children(node: &mut MarkupNode, handle: &Handle) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                append_text(node, &contents.borrow());
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                if node.kind() == TagKind::Table && is_table_section(tag) {
                    append_children(node, child);
                } else if tag == "head" && child.children.borrow().is_empty() {
                    continue;
                } else {
                    node.children.push(build_element(child));
                }
            }
            _ => {}
        }
    }
}

fn tag_name(name: &QualName) -> String {
    name.local.as_ref().to_ascii_lowercase()
}

/// Attach text to the tail of the last child, or to the element's own text
fn append_text(node: &mut MarkupNode, text: &str) {
    let slot = match node.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut node.text,
    };
    slot.get_or_insert_with(String::new).push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(root: &MarkupNode) -> &MarkupNode {
        root.children
            .iter()
            .find(|c| c.tag == "body")
            .expect("body element")
    }

    #[test]
    fn test_root_is_html_without_empty_head() {
        let root = parse_markup("hello").unwrap();
        assert_eq!(root.tag, "html");
        assert_eq!(root.len(), 1);
        assert_eq!(root.children[0].tag, "body");
    }

    #[test]
    fn test_text_and_tail() {
        let root = parse_markup("before <b>bold</b> after <i>it</i>").unwrap();
        let wrapper = &body(&root).children[0];
        assert!(wrapper.implied);
        assert_eq!(wrapper.text.as_deref(), Some("before "));
        assert_eq!(wrapper.children[0].tag, "b");
        assert_eq!(wrapper.children[0].text.as_deref(), Some("bold"));
        assert_eq!(wrapper.children[0].tail.as_deref(), Some(" after "));
        assert_eq!(wrapper.children[1].tail, None);
    }

    #[test]
    fn test_leading_content_is_wrapped_up_to_first_paragraph() {
        let root = parse_markup("x <b>y</b><p>a</p> z <i>w</i><p>b</p>").unwrap();
        let body = body(&root);
        assert_eq!(body.text, None);
        assert_eq!(body.len(), 4);

        let wrapper = &body.children[0];
        assert!(wrapper.implied);
        assert_eq!(wrapper.tag, "p");
        assert_eq!(wrapper.text.as_deref(), Some("x "));
        assert_eq!(wrapper.len(), 1);

        assert!(!body.children[1].implied);
        assert_eq!(body.children[1].text.as_deref(), Some("a"));
        assert_eq!(body.children[1].tail.as_deref(), Some(" z "));
        assert_eq!(body.children[2].tag, "i");
        assert!(!body.children[3].implied);
    }

    #[test]
    fn test_no_wrapper_before_leading_block() {
        let root = parse_markup("<p>a</p>").unwrap();
        let paragraphs = body(&root);
        assert_eq!(paragraphs.len(), 1);
        assert!(!paragraphs.children[0].implied);

        let root = parse_markup("<table><tr><td>a</td></tr></table> tail").unwrap();
        let tables = body(&root);
        assert_eq!(tables.text, None);
        assert_eq!(tables.children[0].tag, "table");
    }

    #[test]
    fn test_table_sections_are_flattened() {
        let root = parse_markup("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>")
            .unwrap();
        let table = &body(&root).children[0];
        assert_eq!(table.tag, "table");
        assert_eq!(table.len(), 2);
        assert!(table.children.iter().all(|row| row.tag == "tr"));
        assert_eq!(table.children[0].len(), 2);
    }

    #[test]
    fn test_text_content() {
        let node = MarkupNode::new("p")
            .with_text("a ")
            .with_child(MarkupNode::new("b").with_text("b").with_tail(" c"));
        assert_eq!(node.text_content(), "a b c");
    }

    #[test]
    fn test_sibling_position() {
        let pos = SiblingPosition::new(0, 1);
        assert!(pos.is_first());
        assert!(pos.is_last());
        let pos = SiblingPosition::new(1, 3);
        assert!(!pos.is_first());
        assert!(!pos.is_last());
    }
}
