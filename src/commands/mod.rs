//! Command implementations

pub mod analyze;
pub mod build;
pub mod deduce;
pub mod discriminate;
pub mod impossible;
pub mod narrow;

pub use analyze::{AnalysisResult, analyze_index};
pub use build::{BuildConfig, BuildResult, run_build};
pub use deduce::{DeduceOutcome, DeduceReport, run_deduce};
pub use discriminate::{DiscriminateResult, discriminate_words};
pub use impossible::{ImpossibleResult, find_impossible};
pub use narrow::{NarrowResult, narrow};
