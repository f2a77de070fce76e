//! Streaming deduction sessions
//!
//! Shared results are pulled page by page from an evidence feed, turned into
//! patterns and fed to the reduction engine until one answer is left.

mod driver;
pub mod evidence;
pub mod feed;
mod puzzle;
mod solution;
pub mod store;

pub use driver::{Applied, DeductionSession, ExhaustReason, SessionState};
pub use evidence::{EvidenceFilter, EvidenceUnit, Post};
pub use feed::{CancelToken, EvidenceFeed, FeedError, Page, PageRequest, ReplayFeed};
pub use puzzle::PuzzleId;
pub use solution::Solution;
pub use store::{JsonFileStore, MemoryStore, SolutionStore};
