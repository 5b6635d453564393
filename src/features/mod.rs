//! Feature modules - Data sources around the markup converter
//!
//! This module contains the pieces that produce the converter's input:
//! - Tabular data model and CSV loading
//! - Longtable skeleton serializer

pub mod dataframe;
pub mod longtable;

// Re-export commonly used types
pub use dataframe::DataTable;
pub use longtable::{infer_column_format, to_longtable, LongtableWriter};
