//! Tag vocabulary understood by the markup walker

use phf::phf_map;

/// Kind of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<th>`
    Header,
    /// `<td>`
    Data,
}

/// Closed set of tags with a dedicated rewrite rule.
///
/// Every other tag maps to [`TagKind::Other`] and is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Paragraph,
    LineBreak,
    Bold,
    Italic,
    Underline,
    Table,
    Row,
    Cell(CellKind),
    Other,
}

/// Tag name to kind. Lookup is case-sensitive.
pub static TAG_KINDS: phf::Map<&'static str, TagKind> = phf_map! {
    "p" => TagKind::Paragraph,
    "br" => TagKind::LineBreak,
    "b" => TagKind::Bold,
    "i" => TagKind::Italic,
    "u" => TagKind::Underline,
    "table" => TagKind::Table,
    "tr" => TagKind::Row,
    "th" => TagKind::Cell(CellKind::Header),
    "td" => TagKind::Cell(CellKind::Data),
};

/// Wrappers inserted by the HTML parser around table rows.
///
/// They are flattened into their parent table when the tree is built.
pub const TABLE_SECTIONS: &[&str] = &["tbody", "thead", "tfoot"];

impl TagKind {
    /// Classify a tag name
    pub fn from_tag(tag: &str) -> Self {
        TAG_KINDS.get(tag).copied().unwrap_or(TagKind::Other)
    }

    /// Whether the tag has its own rewrite rule
    pub fn is_supported(&self) -> bool {
        !matches!(self, TagKind::Other)
    }

    /// Whether the tag is a table cell of either kind
    pub fn is_cell(&self) -> bool {
        matches!(self, TagKind::Cell(_))
    }

    /// Whether the element ends the paragraph the parser implies around
    /// leading body content
    pub fn closes_paragraph(&self) -> bool {
        matches!(self, TagKind::Paragraph | TagKind::Table)
    }
}

/// Check whether a tag is a parser-inserted table section
pub fn is_table_section(tag: &str) -> bool {
    TABLE_SECTIONS.contains(&tag)
}
