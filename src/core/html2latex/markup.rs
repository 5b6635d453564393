//! Markup tree walker
//!
//! Walks a [`MarkupNode`] tree depth-first and rewrites each element by its
//! [`TagKind`]. Every call builds its own fragment list and joins it with
//! single spaces; spacing is normalized afterwards by
//! [`postprocess`](super::postprocess).

use log::{debug, warn};

use super::context::D2LOptions;
use super::node::{MarkupNode, SiblingPosition};
use super::table::{wrap_cell, wrap_nested_table, wrap_row, ColumnFormat};
use crate::data::constants::{INCOMPLETE_TABLE, NEWLINE, TEXTBF, TEXTIT, UNDERLINE};
use crate::data::tags::TagKind;
use crate::utils::error::{ConversionError, ConversionResult};

/// Convert a markup tree to LaTeX without post-processing
pub fn convert_node(node: &MarkupNode, options: &D2LOptions) -> ConversionResult<String> {
    MarkupWalker::new(options).walk(node, 0)
}

struct MarkupWalker<'a> {
    options: &'a D2LOptions,
}

impl<'a> MarkupWalker<'a> {
    fn new(options: &'a D2LOptions) -> Self {
        MarkupWalker { options }
    }

    fn walk(&self, el: &MarkupNode, depth: usize) -> ConversionResult<String> {
        if depth > self.options.max_depth {
            return Err(ConversionError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        let mut fragments = Vec::with_capacity(1 + el.len() * 2);

        if let Some(text) = non_empty(&el.text) {
            fragments.push(text.trim().to_string());
        }

        let count = el.len();
        for (idx, child) in el.children.iter().enumerate() {
            let position = SiblingPosition::new(idx, count);
            fragments.push(self.rewrite_child(child, position, depth + 1)?);

            if let Some(tail) = non_empty(&child.tail) {
                fragments.push(tail.trim().to_string());
            }
        }

        Ok(fragments.join(" "))
    }

    /// Fragment for one child element
    fn rewrite_child(
        &self,
        child: &MarkupNode,
        position: SiblingPosition,
        depth: usize,
    ) -> ConversionResult<String> {
        let fragment = match child.kind() {
            // A paragraph in first position is the parser's wrapper
            TagKind::Paragraph if !position.is_first() => {
                format!("{} {} {}", NEWLINE, self.walk(child, depth)?, NEWLINE)
            }
            TagKind::LineBreak => format!("{} ", NEWLINE),
            TagKind::Bold => inline_command(TEXTBF, &self.walk(child, depth)?),
            TagKind::Italic => inline_command(TEXTIT, &self.walk(child, depth)?),
            TagKind::Underline => inline_command(UNDERLINE, &self.walk(child, depth)?),
            TagKind::Table => self.rewrite_table(child, depth)?,
            TagKind::Row => wrap_row(&self.walk(child, depth)?, position),
            TagKind::Cell(_) => wrap_cell(&self.walk(child, depth)?, position),
            TagKind::Paragraph | TagKind::Other => self.walk(child, depth)?,
        };
        Ok(fragment)
    }

    fn rewrite_table(&self, table: &MarkupNode, depth: usize) -> ConversionResult<String> {
        match ColumnFormat::for_nested_table(table) {
            Some(format) => {
                debug!(
                    "nested table: {} rows, column format {{{}}}",
                    table.len(),
                    format
                );
                Ok(wrap_nested_table(&format, &self.walk(table, depth)?))
            }
            None => {
                warn!("nested table without rows, emitting placeholder");
                Ok(INCOMPLETE_TABLE.to_string())
            }
        }
    }
}

fn inline_command(command: &str, content: &str) -> String {
    format!("{}{{{}}} ", command, content)
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(node: &MarkupNode) -> String {
        convert_node(node, &D2LOptions::default()).unwrap()
    }

    fn leaf(tag: &str, text: &str) -> MarkupNode {
        MarkupNode::new(tag).with_text(text)
    }

    #[test]
    fn test_own_text_is_trimmed() {
        assert_eq!(convert(&leaf("span", "  hello \n")), "hello");
    }

    #[test]
    fn test_inline_formatting() {
        let node = MarkupNode::new("div").with_children([
            leaf("b", "bold"),
            leaf("i", "italic"),
            leaf("u", "under"),
        ]);
        assert_eq!(
            convert(&node),
            "\\textbf{bold}  \\textit{italic}  \\underline{under} "
        );
    }

    #[test]
    fn test_tail_follows_child() {
        let node = MarkupNode::new("div")
            .with_text("a")
            .with_child(leaf("b", "b").with_tail(" c "));
        assert_eq!(convert(&node), "a \\textbf{b}  c");
    }

    #[test]
    fn test_whitespace_only_tail_is_empty_fragment() {
        let node = MarkupNode::new("div").with_child(leaf("b", "x").with_tail("   "));
        assert_eq!(convert(&node), "\\textbf{x}  ");
    }

    #[test]
    fn test_first_paragraph_is_transparent() {
        let node = MarkupNode::new("body").with_child(leaf("p", "wrapped"));
        assert_eq!(convert(&node), "wrapped");
    }

    #[test]
    fn test_later_paragraph_is_marked() {
        let node = MarkupNode::new("td").with_children([leaf("p", "one"), leaf("p", "two")]);
        assert_eq!(convert(&node), "one \\newline two \\newline");
    }

    #[test]
    fn test_line_break_discards_content() {
        let node = MarkupNode::new("td")
            .with_text("a")
            .with_child(leaf("br", "ignored").with_tail("b"));
        assert_eq!(convert(&node), "a \\newline  b");
    }

    #[test]
    fn test_unknown_tag_passes_content() {
        let node = MarkupNode::new("div")
            .with_child(MarkupNode::new("span").with_child(leaf("em", "kept")));
        assert_eq!(convert(&node), "kept");
    }

    #[test]
    fn test_empty_nested_table_placeholder() {
        let node = MarkupNode::new("td").with_child(MarkupNode::new("table"));
        assert_eq!(convert(&node), INCOMPLETE_TABLE);
    }

    #[test]
    fn test_depth_limit() {
        let mut node = leaf("span", "deep");
        for _ in 0..10 {
            node = MarkupNode::new("span").with_child(node);
        }
        let options = D2LOptions {
            max_depth: 4,
            ..Default::default()
        };
        let err = convert_node(&node, &options).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::DepthLimitExceeded { limit: 4 }
        ));

        let options = D2LOptions {
            max_depth: 11,
            ..Default::default()
        };
        assert_eq!(convert_node(&node, &options).unwrap(), "deep");
    }
}
