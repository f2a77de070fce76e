//! Paginated evidence feed
//!
//! The search client itself lives outside this crate; sessions talk to it
//! through [`EvidenceFeed`]. [`ReplayFeed`] serves a saved list of posts,
//! which is enough for offline runs and tests.

use super::evidence::Post;
use crate::config::RetryPolicy;
use crate::error::Result;
use crate::persistence::load_json;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use thiserror::Error;

/// Request for one page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    /// Opaque position returned by the previous page, `None` for the first
    pub cursor: Option<String>,
    pub page_size: usize,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub posts: Vec<Post>,
    /// `None` when there are no further pages
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("transient feed error: {0}")]
    Transient(String),

    #[error("feed error: {0}")]
    Fatal(String),

    #[error("request cancelled")]
    Cancelled,
}

/// Shared flag telling outstanding fetches to stop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Source of shared posts
pub trait EvidenceFeed {
    /// Fetch one page
    ///
    /// Implementations that prefetch or run requests in the background
    /// should abandon them once `cancel` is set.
    ///
    /// # Errors
    /// `FeedError::Transient` for failures worth retrying,
    /// `FeedError::Fatal` otherwise.
    fn fetch_page(
        &mut self,
        request: &PageRequest,
        cancel: &CancelToken,
    ) -> std::result::Result<Page, FeedError>;
}

/// Fetch a page, retrying transient failures up to `policy.max_retries` times
///
/// # Errors
/// Returns the last error once retries run out, a fatal error immediately,
/// and `FeedError::Cancelled` if `cancel` is set before an attempt.
pub fn fetch_with_retry<F: EvidenceFeed + ?Sized>(
    feed: &mut F,
    request: &PageRequest,
    cancel: &CancelToken,
    policy: &RetryPolicy,
) -> std::result::Result<Page, FeedError> {
    let mut attempt = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(FeedError::Cancelled);
        }

        match feed.fetch_page(request, cancel) {
            Err(FeedError::Transient(reason)) if attempt < policy.max_retries => {
                attempt += 1;
                log::warn!(
                    "Fetch failed ({reason}), retry {attempt}/{}",
                    policy.max_retries
                );
                if !policy.backoff.is_zero() {
                    thread::sleep(policy.backoff);
                }
            }
            result => return result,
        }
    }
}

/// Serves a fixed list of posts in pages
///
/// The cursor is the offset of the next post.
#[derive(Debug, Clone, Default)]
pub struct ReplayFeed {
    posts: Vec<Post>,
}

impl ReplayFeed {
    #[must_use]
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load a JSON array of `{"source": ..., "text": ...}` objects
    ///
    /// # Errors
    /// Returns an I/O or serialization error.
    pub fn load(path: &Path) -> Result<Self> {
        let posts: Vec<Post> = load_json(path)?;
        log::debug!("Loaded {} posts from {}", posts.len(), path.display());
        Ok(Self { posts })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl EvidenceFeed for ReplayFeed {
    fn fetch_page(
        &mut self,
        request: &PageRequest,
        _cancel: &CancelToken,
    ) -> std::result::Result<Page, FeedError> {
        let start = match &request.cursor {
            None => 0,
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|_| FeedError::Fatal(format!("bad cursor '{cursor}'")))?,
        };
        let start = start.min(self.posts.len());
        let end = start.saturating_add(request.page_size.max(1)).min(self.posts.len());

        Ok(Page {
            posts: self.posts[start..end].to_vec(),
            next_cursor: (end < self.posts.len()).then(|| end.to_string()),
        })
    }
}
