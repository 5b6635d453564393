//! Tests for nested table emission

use pretty_assertions::assert_eq;

use super::colspec::{ColumnAlign, ColumnFormat};
use super::layout::{wrap_cell, wrap_nested_table, wrap_row};
use super::rule::RuleStyle;
use crate::core::html2latex::context::D2LOptions;
use crate::core::html2latex::markup::convert_node;
use crate::core::html2latex::node::{MarkupNode, SiblingPosition};
use crate::core::html2latex::postprocess::postprocess;

fn cell(tag: &str, text: &str) -> MarkupNode {
    MarkupNode::new(tag).with_text(text)
}

fn row(tag: &str, texts: &[&str]) -> MarkupNode {
    MarkupNode::new("tr").with_children(texts.iter().map(|t| cell(tag, t)))
}

fn nested(rows: Vec<MarkupNode>) -> MarkupNode {
    MarkupNode::new("td").with_child(MarkupNode::new("table").with_children(rows))
}

fn render(node: &MarkupNode) -> String {
    postprocess(&convert_node(node, &D2LOptions::default()).unwrap())
}

#[test]
fn test_column_format_matches_first_row_width() {
    for width in 1..=6 {
        let texts: Vec<String> = (0..width).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let table = MarkupNode::new("table").with_child(row("td", &refs));

        let format = ColumnFormat::for_nested_table(&table).unwrap();
        assert_eq!(format.len(), width);
        assert!(format.columns.iter().all(|a| *a == ColumnAlign::Left));
        assert_eq!(format.to_string(), "l".repeat(width));
    }
}

#[test]
fn test_column_format_uses_first_row_only() {
    let table = MarkupNode::new("table")
        .with_child(row("th", &["a", "b"]))
        .with_child(row("td", &["1", "2", "3"]));
    assert_eq!(ColumnFormat::for_nested_table(&table).unwrap().to_string(), "ll");
}

#[test]
fn test_column_format_without_rows() {
    assert!(ColumnFormat::for_nested_table(&MarkupNode::new("table")).is_none());
}

#[test]
fn test_rule_styles() {
    assert_eq!(RuleStyle::TopRule.to_latex(), "\\toprule");
    assert_eq!(RuleStyle::MidRule.to_latex(), "\\midrule");
    assert_eq!(RuleStyle::BottomRule.to_latex(), "\\bottomrule");
}

#[test]
fn test_wrap_row_positions() {
    assert_eq!(
        wrap_row("a", SiblingPosition::new(0, 3)),
        "\n\\toprule \na \\\\ \n\\midrule "
    );
    assert_eq!(
        wrap_row("b", SiblingPosition::new(1, 3)),
        "\nb \\\\ \\midrule "
    );
    assert_eq!(wrap_row("c", SiblingPosition::new(2, 3)), "\nc \\\\");
}

#[test]
fn test_single_row_is_a_header() {
    let fragment = wrap_row("only", SiblingPosition::new(0, 1));
    assert!(fragment.contains("\\toprule"));
    assert!(fragment.contains("\\midrule"));
}

#[test]
fn test_wrap_cell_positions() {
    assert_eq!(wrap_cell("x", SiblingPosition::new(0, 2)), "x ");
    assert_eq!(wrap_cell("y", SiblingPosition::new(1, 2)), " & y ");
}

#[test]
fn test_wrap_nested_table() {
    let format = ColumnFormat::uniform(2, ColumnAlign::Left);
    assert_eq!(
        wrap_nested_table(&format, "body"),
        "\\newline \n\\begin{tabular}{ll} body \n\\bottomrule \n\\end{tabular} \\newline"
    );
}

#[test]
fn test_header_borders() {
    let out = render(&nested(vec![
        row("th", &["H1", "H2"]),
        row("td", &["a", "b"]),
    ]));
    assert_eq!(out.matches("\\toprule").count(), 1);
    let top = out.find("\\toprule").unwrap();
    let header = out.find("H1").unwrap();
    let mid = out.find("\\midrule").unwrap();
    assert!(top < header && header < mid);
    assert!(out[top..header].trim_start_matches("\\toprule").trim().is_empty());
    assert_eq!(out[header..mid].trim_end(), "H1 & H2 \\\\");
}

#[test]
fn test_cell_join_order() {
    let out = render(&nested(vec![row("td", &["c1", "c2", "c3", "c4"])]));
    let line = out
        .lines()
        .find(|l| l.contains("c1"))
        .expect("row line");
    assert_eq!(line.matches('&').count(), 3);
    let positions: Vec<usize> = ["c1", "c2", "c3", "c4"]
        .iter()
        .map(|c| line.find(c).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_single_cell_has_no_separator() {
    let out = render(&nested(vec![row("td", &["alone"])]));
    assert!(!out.contains('&'));
}

#[test]
fn test_multi_row_rule_placement() {
    let out = render(&nested(vec![
        row("th", &["A", "B"]),
        row("td", &["1", "2"]),
        row("td", &["3", "4"]),
    ]));
    assert_eq!(
        out,
        "\\newline \n\\begin{tabular}{ll} \n\\toprule \nA & B \\\\ \n\\midrule \n\
         1 & 2 \\\\ \\midrule \n3 & 4 \\\\ \n\\bottomrule \n\\end{tabular} \\newline"
    );
    // header rule plus one rule after the interior row; the text pass adds none
    assert_eq!(out.matches("\\midrule").count(), 2);
    assert_eq!(out.matches("\\bottomrule").count(), 1);
}

#[test]
fn test_empty_table_placeholder_in_context() {
    let node = MarkupNode::new("td")
        .with_text("before")
        .with_child(MarkupNode::new("table").with_tail("after"));
    assert_eq!(render(&node), "before got an incomplete table here after");
}
