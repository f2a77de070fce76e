//! Deduction session configuration

use std::time::Duration;

/// Posts containing any of these belong to a different game variant
pub const DEFAULT_WRONG_VARIANT_MARKERS: &[&str] = &["https://t.co", "Wordle (RU)"];

/// Maximum length of a public announcement
pub const DEFAULT_ANNOUNCEMENT_LIMIT: usize = 280;

/// Bounded retry for page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Pause between attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Fail on the first error
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

/// Configuration for a streaming deduction session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionConfig {
    /// Pages requested before giving up
    pub max_pages: usize,
    /// Posts requested per page
    pub page_size: usize,
    /// Randomly keep at most this many posts per page
    pub sample_per_page: Option<usize>,
    pub retry: RetryPolicy,
    pub wrong_variant_markers: Vec<String>,
    pub announcement_limit: usize,
}

impl Default for DeductionConfig {
    fn default() -> Self {
        Self {
            max_pages: 60,
            page_size: 100,
            sample_per_page: None,
            retry: RetryPolicy::default(),
            wrong_variant_markers: DEFAULT_WRONG_VARIANT_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            announcement_limit: DEFAULT_ANNOUNCEMENT_LIMIT,
        }
    }
}

impl DeductionConfig {
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sample at most `sample` posts per page; zero disables sampling
    #[must_use]
    pub fn with_sample_per_page(mut self, sample: Option<usize>) -> Self {
        self.sample_per_page = sample.filter(|&n| n > 0);
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DeductionConfig::default();
        assert_eq!(config.max_pages, 60);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.sample_per_page, None);
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.wrong_variant_markers.len(), 2);
        assert_eq!(config.announcement_limit, 280);
    }

    #[test]
    fn page_size_at_least_one() {
        assert_eq!(DeductionConfig::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn zero_sample_disables_sampling() {
        let config = DeductionConfig::default().with_sample_per_page(Some(0));
        assert_eq!(config.sample_per_page, None);
        let config = config.with_sample_per_page(Some(5));
        assert_eq!(config.sample_per_page, Some(5));
    }
}
