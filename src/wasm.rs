//! WASM bindings for frametex
//!
//! This module provides JavaScript-accessible functions for CSV/markup to
//! LaTeX conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct ConvertOptions {
    /// Longtable caption
    #[serde(default)]
    pub caption: Option<String>,
    /// Longtable column format, inferred when absent
    #[serde(default)]
    pub column_format: Option<String>,
    /// Whether to wrap the table in a complete document
    #[serde(default)]
    pub full_document: bool,
}

#[cfg(feature = "wasm")]
impl From<ConvertOptions> for crate::D2LOptions {
    fn from(opts: ConvertOptions) -> Self {
        crate::D2LOptions {
            caption: opts.caption,
            column_format: opts.column_format,
            full_document: opts.full_document,
            ..Default::default()
        }
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl From<crate::ConversionResult<crate::ConversionOutput>> for ConvertResult {
    fn from(result: crate::ConversionResult<crate::ConversionOutput>) -> Self {
        match result {
            Ok(output) => ConvertResult {
                warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
                output: output.content,
                success: true,
                error: None,
            },
            Err(err) => ConvertResult {
                output: String::new(),
                success: false,
                error: Some(format!("Conversion failed: {}", err)),
                warnings: vec![],
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert HTML-like table markup to LaTeX
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "markupToLatex")]
pub fn markup_to_latex_wasm(input: &str) -> Result<String, JsValue> {
    crate::markup_to_latex(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert CSV text to a LaTeX longtable with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "csvToLatex")]
pub fn csv_to_latex_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: ConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let opts = crate::D2LOptions::from(opts);

    let result: ConvertResult = crate::DataTable::from_csv_str(input)
        .and_then(|table| crate::dataframe_to_latex_with_diagnostics(&table, &opts))
        .into();

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check markup for potential issues
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkMarkup")]
pub fn check_markup_wasm(input: &str) -> JsValue {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_markup(input);

    // Group diagnostics by level
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Error => errors.push(d.message.clone()),
            DiagnosticLevel::Warning => warnings.push(d.message.clone()),
            DiagnosticLevel::Info => infos.push(d.message.clone()),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Summary of markup check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}
