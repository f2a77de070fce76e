//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_build_result, print_deduce_report, print_discriminate_result,
    print_impossible_result, print_narrow_result,
};
