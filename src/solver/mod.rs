//! Candidate reduction engine
//!
//! Narrows a set of possible answers as patterns arrive and analyses which
//! answers observable evidence can ever separate.

mod candidates;
mod distinguish;
mod reduction;

pub use candidates::CandidateSet;
pub use distinguish::{find_indistinguishable_pairs, scan_pairs};
pub use reduction::{ReductionStep, discriminate, reduce, reduce_all, reduce_all_traced};
