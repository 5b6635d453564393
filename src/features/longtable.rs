//! Longtable skeleton serializer
//!
//! Renders a [`DataTable`] as a LaTeX `longtable` with booktabs rules and a
//! repeated header, leaving cell contents untouched. Cells may carry inline
//! HTML; the result is the input of the markup walker.
//!
//! Cells are right-justified to their column width. After whitespace
//! collapsing a padded cell at the start of a row leaves one leading space,
//! which is what the row-rule pass keys on.

use std::fmt::Write;

use log::debug;

use super::dataframe::DataTable;
use crate::core::html2latex::table::{ColumnAlign, ColumnFormat};
use crate::data::constants::{
    BOTTOMRULE, COL_SEP, CONTINUED_LABEL, LONGTABLE_ENV, MIDRULE, ROW_END, TOPRULE,
};

/// Serializer settings
#[derive(Debug, Clone, Default)]
pub struct LongtableWriter<'a> {
    /// Caption, repeated (without list entry) on continuation pages
    pub caption: Option<&'a str>,
    /// Explicit column format; inferred from the data when `None`
    pub column_format: Option<&'a str>,
}

impl<'a> LongtableWriter<'a> {
    pub fn new(caption: Option<&'a str>, column_format: Option<&'a str>) -> Self {
        LongtableWriter {
            caption,
            column_format,
        }
    }

    /// Render the table
    pub fn write(&self, table: &DataTable) -> String {
        let mut output = String::new();
        let widths = column_widths(table);
        let format = match self.column_format {
            Some(format) => format.to_string(),
            None => infer_column_format(table).to_string(),
        };
        debug!(
            "longtable: {} columns, {} rows, format {{{}}}",
            table.width(),
            table.len(),
            format
        );

        let header = join_row(&table.columns, &widths);

        let _ = writeln!(output, "\\begin{{{}}}{{{}}}", LONGTABLE_ENV, format);

        // First page head
        if let Some(caption) = self.caption {
            let _ = writeln!(output, "\\caption{{{}}} {}", caption, ROW_END);
        }
        write_head(&mut output, &header);
        let _ = writeln!(output, "\\endfirsthead");

        // Continuation head
        if let Some(caption) = self.caption {
            let _ = writeln!(output, "\\caption[]{{{}}} {}", caption, ROW_END);
        }
        write_head(&mut output, &header);
        let _ = writeln!(output, "\\endhead");

        // Foot
        let _ = writeln!(output, "{}", MIDRULE);
        let _ = writeln!(
            output,
            "\\multicolumn{{{}}}{{r}}{{{}}} {}",
            table.width(),
            CONTINUED_LABEL,
            ROW_END
        );
        let _ = writeln!(output, "{}", MIDRULE);
        let _ = writeln!(output, "\\endfoot");
        let _ = writeln!(output, "{}", BOTTOMRULE);
        let _ = writeln!(output, "\\endlastfoot");

        for row in &table.rows {
            let _ = writeln!(output, "{}", join_row(row, &widths));
        }

        let _ = writeln!(output, "\\end{{{}}}", LONGTABLE_ENV);
        output
    }
}

/// Render a table with the given caption and column format
pub fn to_longtable(
    table: &DataTable,
    caption: Option<&str>,
    column_format: Option<&str>,
) -> String {
    LongtableWriter::new(caption, column_format).write(table)
}

/// `r` for numeric columns, `l` for everything else
pub fn infer_column_format(table: &DataTable) -> ColumnFormat {
    ColumnFormat::new(
        (0..table.width())
            .map(|i| {
                if table.is_numeric_column(i) {
                    ColumnAlign::Right
                } else {
                    ColumnAlign::Left
                }
            })
            .collect(),
    )
}

fn write_head(output: &mut String, header: &str) {
    let _ = writeln!(output, "{}", TOPRULE);
    let _ = writeln!(output, "{}", header);
    let _ = writeln!(output, "{}", MIDRULE);
}

/// Character width of each column, header included
fn column_widths(table: &DataTable) -> Vec<usize> {
    (0..table.width())
        .map(|i| {
            let header = table.columns[i].chars().count();
            table
                .column(i)
                .map(|cell| cell.chars().count())
                .fold(header, usize::max)
        })
        .collect()
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = width))
        .collect();
    format!("{} {}", padded.join(&format!(" {} ", COL_SEP)), ROW_END)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn people() -> DataTable {
        DataTable::new(["Name", "Age"])
            .with_row(["Alice", "30"])
            .unwrap()
            .with_row(["Bob", "4"])
            .unwrap()
    }

    #[test]
    fn test_layout_without_caption() {
        let expected = "\
\\begin{longtable}{lr}
\\toprule
 Name & Age \\\\
\\midrule
\\endfirsthead
\\toprule
 Name & Age \\\\
\\midrule
\\endhead
\\midrule
\\multicolumn{2}{r}{Continued on next page} \\\\
\\midrule
\\endfoot
\\bottomrule
\\endlastfoot
Alice &  30 \\\\
  Bob &   4 \\\\
\\end{longtable}
";
        assert_eq!(to_longtable(&people(), None, None), expected);
    }

    #[test]
    fn test_caption_on_both_heads() {
        let out = to_longtable(&people(), Some("People"), None);
        assert!(out.contains("\\caption{People} \\\\\n\\toprule"));
        assert!(out.contains("\\caption[]{People} \\\\\n\\toprule"));
        let first = out.find("\\endfirsthead").unwrap();
        assert!(out.find("\\caption{People}").unwrap() < first);
        assert!(out.find("\\caption[]{People}").unwrap() > first);
    }

    #[test]
    fn test_explicit_column_format() {
        let out = to_longtable(&people(), None, Some("p{0.2\\textwidth}|p{0.8\\textwidth}"));
        assert!(out.starts_with("\\begin{longtable}{p{0.2\\textwidth}|p{0.8\\textwidth}}\n"));
    }

    #[test]
    fn test_cells_are_not_escaped() {
        let table = DataTable::new(["Note"]).with_row(["<b>x</b> & y"]).unwrap();
        let out = to_longtable(&table, None, None);
        assert!(out.contains("<b>x</b> & y \\\\\n"));
    }

    #[test]
    fn test_infer_column_format() {
        let table = DataTable::new(["a", "b", "c"])
            .with_row(["x", "1.5", ""])
            .unwrap();
        assert_eq!(infer_column_format(&table).to_string(), "lrl");
    }
}
