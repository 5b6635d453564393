//! Booktabs rules used between table rows

use crate::data::constants::{BOTTOMRULE, MIDRULE, TOPRULE};

/// Style of horizontal rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStyle {
    /// Booktabs \toprule, above the header row
    TopRule,
    /// Booktabs \midrule, below the header and between body rows
    #[default]
    MidRule,
    /// Booktabs \bottomrule, closing a table
    BottomRule,
}

impl RuleStyle {
    /// Generate LaTeX code for this rule
    pub fn to_latex(&self) -> &'static str {
        match self {
            RuleStyle::TopRule => TOPRULE,
            RuleStyle::MidRule => MIDRULE,
            RuleStyle::BottomRule => BOTTOMRULE,
        }
    }
}
