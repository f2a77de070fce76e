//! Streaming deduction driver
//!
//! A session starts with every answer as a candidate and feeds patterns
//! from shared posts into the reduction engine one at a time. It ends
//! Resolved as soon as one candidate is left, or Exhausted when pages,
//! posts or the feed itself run out. An exhausted session has no answer,
//! even if only a few candidates remain.

use super::evidence::{EvidenceFilter, EvidenceUnit, Post};
use super::feed::{CancelToken, EvidenceFeed, FeedError, PageRequest, fetch_with_retry};
use super::{PuzzleId, Solution};
use crate::config::DeductionConfig;
use crate::index::PatternIndex;
use crate::solver::{CandidateSet, reduce};
use crate::wordlists::WordList;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

/// Why a session stopped without a unique answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustReason {
    /// `max_pages` pages were consumed
    PageBudget,
    /// The feed had no more pages
    FeedEnded,
    /// A page could not be fetched within the retry budget
    FeedFailed,
    /// The caller cancelled the session
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Searching,
    Resolved,
    Exhausted(ExhaustReason),
}

/// Effect of one evidence unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The candidate set shrank; the unit was recorded
    Narrowed { remaining: usize },
    /// Nothing was ruled out; the unit was discarded
    Uninformative,
    /// Every candidate would be ruled out; the unit was rejected as noise
    Contradiction,
    /// The session had already finished
    Ignored,
}

/// One deduction session for one puzzle
#[derive(Debug)]
pub struct DeductionSession<'a> {
    index: &'a PatternIndex,
    puzzle: PuzzleId,
    candidates: CandidateSet,
    useful: Vec<EvidenceUnit>,
    contributors: BTreeSet<String>,
    state: SessionState,
}

impl<'a> DeductionSession<'a> {
    /// Start a session with every answer as a candidate
    #[must_use]
    pub fn new(index: &'a PatternIndex, answers: &WordList, puzzle: PuzzleId) -> Self {
        Self::with_candidates(index, CandidateSet::full(answers), puzzle)
    }

    /// Start from an explicit candidate set
    ///
    /// A single candidate is already resolved.
    #[must_use]
    pub fn with_candidates(
        index: &'a PatternIndex,
        candidates: CandidateSet,
        puzzle: PuzzleId,
    ) -> Self {
        let state = if candidates.single().is_some() {
            SessionState::Resolved
        } else {
            SessionState::Searching
        };
        Self {
            index,
            puzzle,
            candidates,
            useful: Vec::new(),
            contributors: BTreeSet::new(),
            state,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> PuzzleId {
        self.puzzle
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Units that narrowed the candidates, in the order they arrived
    #[must_use]
    pub fn useful_evidence(&self) -> &[EvidenceUnit] {
        &self.useful
    }

    /// Distinct sources of useful evidence
    #[must_use]
    pub const fn contributors(&self) -> &BTreeSet<String> {
        &self.contributors
    }

    /// Apply one evidence unit
    pub fn apply(&mut self, unit: EvidenceUnit) -> Applied {
        if self.state != SessionState::Searching {
            return Applied::Ignored;
        }

        let narrowed = reduce(self.index, &self.candidates, unit.pattern);
        if narrowed.is_empty() {
            log::warn!(
                "{:25} | {} would rule out every candidate, rejecting",
                unit.source,
                unit.pattern
            );
            return Applied::Contradiction;
        }
        if narrowed.len() >= self.candidates.len() {
            return Applied::Uninformative;
        }

        let remaining = narrowed.len();
        log::info!(
            "{:25} | {} {} | {remaining} remaining",
            unit.source,
            unit.pattern.to_emoji(),
            unit.pattern
        );

        self.candidates = narrowed;
        self.contributors.insert(unit.source.clone());
        self.useful.push(unit);

        if remaining < 2 {
            self.state = SessionState::Resolved;
        }
        Applied::Narrowed { remaining }
    }

    /// Apply every pattern of every relevant post until resolved
    ///
    /// Each pattern line of a post counts separately: a post's source is
    /// credited if any of its lines narrowed the candidates.
    pub fn consume_posts<'p, I>(&mut self, filter: &EvidenceFilter, posts: I)
    where
        I: IntoIterator<Item = &'p Post>,
    {
        for post in posts {
            for unit in filter.extract(post) {
                if self.state != SessionState::Searching {
                    return;
                }
                self.apply(unit);
            }
        }
    }

    /// Pull pages from `feed` until the session finishes
    ///
    /// On resolution `cancel` is set so outstanding fetches can stop, and no
    /// further posts or pages are examined.
    pub fn run<F: EvidenceFeed + ?Sized>(
        &mut self,
        feed: &mut F,
        config: &DeductionConfig,
        cancel: &CancelToken,
    ) -> Option<Solution> {
        let filter = EvidenceFilter::new(
            self.puzzle,
            self.index.word_len(),
            &config.wrong_variant_markers,
        );
        let mut cursor = None;

        if self.state == SessionState::Resolved {
            cancel.cancel();
        }

        for page_number in 1..=config.max_pages {
            if self.state != SessionState::Searching {
                break;
            }
            if cancel.is_cancelled() {
                self.state = SessionState::Exhausted(ExhaustReason::Cancelled);
                break;
            }

            log::info!("Page {page_number}");
            let request = PageRequest {
                query: self.puzzle.query(),
                cursor: cursor.take(),
                page_size: config.page_size,
            };

            let page = match fetch_with_retry(feed, &request, cancel, &config.retry) {
                Ok(page) => page,
                Err(FeedError::Cancelled) => {
                    self.state = SessionState::Exhausted(ExhaustReason::Cancelled);
                    break;
                }
                Err(e) => {
                    log::warn!("Giving up on puzzle {}: {e}", self.puzzle);
                    self.state = SessionState::Exhausted(ExhaustReason::FeedFailed);
                    break;
                }
            };

            let posts = sample_posts(page.posts, config.sample_per_page);
            log::debug!("{} posts found", posts.len());
            self.consume_posts(&filter, &posts);

            if self.state == SessionState::Resolved {
                cancel.cancel();
                break;
            }
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    self.state = SessionState::Exhausted(ExhaustReason::FeedEnded);
                    break;
                }
            }
        }

        if self.state == SessionState::Searching {
            self.state = SessionState::Exhausted(ExhaustReason::PageBudget);
        }

        log::info!(
            "Puzzle {}: {:?}, {} candidates, {} useful patterns from {} sources",
            self.puzzle,
            self.state,
            self.candidates.len(),
            self.useful.len(),
            self.contributors.len()
        );
        self.solution()
    }

    /// The answer, once resolved
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        if self.state != SessionState::Resolved {
            return None;
        }
        self.candidates.single().map(|word| Solution {
            puzzle: self.puzzle,
            word: word.clone(),
            contributors: self.contributors.clone(),
        })
    }
}

/// Randomly keep at most `limit` posts
fn sample_posts(posts: Vec<Post>, limit: Option<usize>) -> Vec<Post> {
    match limit {
        Some(limit) if limit > 0 && limit < posts.len() => posts
            .choose_multiple(&mut rand::rng(), limit)
            .cloned()
            .collect(),
        _ => posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::core::{Pattern, Word};
    use crate::session::feed::{Page, ReplayFeed};
    use crate::wordlists::loader::words_from_slice;
    use std::time::Duration;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    fn answers() -> WordList {
        words_from_slice(&["aaa", "bbb", "ccc", "ddd", "eee"]).unwrap()
    }

    /// Each pattern rules out one more word
    fn index() -> PatternIndex {
        PatternIndex::from_buckets(
            3,
            [
                (pattern("X.."), vec![word("aaa"), word("bbb"), word("ccc"), word("ddd")]),
                (pattern(".X."), vec![word("aaa"), word("bbb"), word("ccc")]),
                (pattern("..X"), vec![word("aaa"), word("bbb")]),
                (pattern("XX."), vec![word("aaa")]),
                (pattern("OOO"), vec![word("aaa"), word("bbb"), word("ccc"), word("ddd"), word("eee")]),
                (pattern("..."), vec![word("eee")]),
            ],
        )
        .unwrap()
    }

    fn unit(p: &str, source: &str) -> EvidenceUnit {
        EvidenceUnit {
            pattern: pattern(p),
            source: source.to_string(),
        }
    }

    fn square(p: &str) -> String {
        p.chars()
            .map(|c| match c {
                'X' => '🟩',
                'O' => '🟨',
                _ => '⬜',
            })
            .collect()
    }

    fn post(source: &str, patterns: &[&str]) -> Post {
        let mut text = String::from("Wordle 210 3/6\n");
        for p in patterns {
            text.push('\n');
            text.push_str(&square(p));
        }
        Post::new(source, text)
    }

    fn config(max_pages: usize, page_size: usize) -> DeductionConfig {
        DeductionConfig::default()
            .with_max_pages(max_pages)
            .with_page_size(page_size)
            .with_retry(RetryPolicy::new(1, Duration::ZERO))
    }

    #[test]
    fn apply_records_only_narrowing_evidence() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));

        assert_eq!(session.apply(unit("OOO", "noise")), Applied::Uninformative);
        assert_eq!(session.apply(unit("X..", "alice")), Applied::Narrowed { remaining: 4 });
        assert_eq!(session.apply(unit("XXX", "unknown")), Applied::Uninformative);
        assert_eq!(session.apply(unit("X..", "copycat")), Applied::Uninformative);

        assert_eq!(session.useful_evidence(), [unit("X..", "alice")]);
        assert_eq!(session.state(), SessionState::Searching);
        assert!(session.solution().is_none());
    }

    #[test]
    fn contradiction_is_rejected() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));

        session.apply(unit("X..", "alice"));
        assert_eq!(session.apply(unit("...", "liar")), Applied::Contradiction);
        assert_eq!(session.candidates().len(), 4);
        assert!(!session.contributors().contains("liar"));
    }

    #[test]
    fn three_patterns_resolve_with_contributors() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));

        session.apply(unit(".X.", "alice"));
        session.apply(unit("OOO", "bob"));
        session.apply(unit("..X", "carol"));
        assert_eq!(session.apply(unit("XX.", "alice")), Applied::Narrowed { remaining: 1 });
        assert_eq!(session.apply(unit("X..", "dave")), Applied::Ignored);

        assert_eq!(session.state(), SessionState::Resolved);
        let solution = session.solution().unwrap();
        assert_eq!(solution.word, word("aaa"));
        assert_eq!(solution.puzzle, PuzzleId::new(210));
        let expected: BTreeSet<String> = ["alice", "carol"].iter().map(ToString::to_string).collect();
        assert_eq!(solution.contributors, expected);
    }

    #[test]
    fn run_resolves_and_stops_early() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let mut feed = ReplayFeed::from_posts(vec![
            post("alice", &["X..", "OOO"]),
            Post::new("eve", "Wordle 211 1/6\n\n🟩🟩⬜"),
            post("bob", &[".X."]),
            post("carol", &["..X", "XX."]),
            post("dave", &["..."]),
            post("erin", &["X.."]),
        ]);
        let cancel = CancelToken::new();

        let solution = session.run(&mut feed, &config(10, 2), &cancel).unwrap();

        assert_eq!(solution.word, word("aaa"));
        let expected: BTreeSet<String> =
            ["alice", "bob", "carol"].iter().map(ToString::to_string).collect();
        assert_eq!(solution.contributors, expected);
        assert!(cancel.is_cancelled());
        assert_eq!(session.useful_evidence().len(), 4);
    }

    #[test]
    fn page_budget_exhaustion_has_no_solution() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let mut feed = ReplayFeed::from_posts(vec![
            post("alice", &["OOO"]),
            post("bob", &["X.."]),
            post("carol", &["XX."]),
        ]);

        let solution = session.run(&mut feed, &config(1, 2), &CancelToken::new());

        assert!(solution.is_none());
        assert_eq!(session.state(), SessionState::Exhausted(ExhaustReason::PageBudget));
        assert_eq!(session.candidates().len(), 4);
    }

    #[test]
    fn feed_end_exhausts_session() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let mut feed = ReplayFeed::from_posts(vec![post("alice", &["X..", ".X."])]);

        assert!(session.run(&mut feed, &config(10, 5), &CancelToken::new()).is_none());
        assert_eq!(session.state(), SessionState::Exhausted(ExhaustReason::FeedEnded));
        assert_eq!(session.candidates().len(), 3);
    }

    struct BrokenFeed {
        calls: usize,
    }

    impl EvidenceFeed for BrokenFeed {
        fn fetch_page(
            &mut self,
            _request: &PageRequest,
            _cancel: &CancelToken,
        ) -> Result<Page, FeedError> {
            self.calls += 1;
            Err(FeedError::Transient("timeout".to_string()))
        }
    }

    #[test]
    fn feed_failure_exhausts_session_after_retries() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let mut feed = BrokenFeed { calls: 0 };

        assert!(session.run(&mut feed, &config(10, 5), &CancelToken::new()).is_none());
        assert_eq!(session.state(), SessionState::Exhausted(ExhaustReason::FeedFailed));
        assert_eq!(feed.calls, 2);
    }

    /// Cancels the shared token while its request is in flight
    struct CancellingFeed {
        token: CancelToken,
    }

    impl EvidenceFeed for CancellingFeed {
        fn fetch_page(
            &mut self,
            _request: &PageRequest,
            _cancel: &CancelToken,
        ) -> Result<Page, FeedError> {
            self.token.cancel();
            Err(FeedError::Transient("interrupted".to_string()))
        }
    }

    #[test]
    fn cancel_during_fetch_is_not_a_feed_failure() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let cancel = CancelToken::new();
        let mut feed = CancellingFeed {
            token: cancel.clone(),
        };

        assert!(session.run(&mut feed, &config(10, 5), &cancel).is_none());
        assert_eq!(session.state(), SessionState::Exhausted(ExhaustReason::Cancelled));
    }

    #[test]
    fn single_answer_corpus_resolves_without_evidence() {
        let index = index();
        let answers = words_from_slice(&["aaa"]).unwrap();
        let mut session = DeductionSession::new(&index, &answers, PuzzleId::new(210));
        assert_eq!(session.state(), SessionState::Resolved);

        let cancel = CancelToken::new();
        let solution = session
            .run(&mut ReplayFeed::default(), &config(10, 5), &cancel)
            .unwrap();

        assert_eq!(solution.word, word("aaa"));
        assert!(solution.contributors.is_empty());
        assert_eq!(session.state(), SessionState::Resolved);
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn cancelled_before_start() {
        let index = index();
        let mut session = DeductionSession::new(&index, &answers(), PuzzleId::new(210));
        let mut feed = ReplayFeed::from_posts(vec![post("alice", &["XX."])]);
        let cancel = CancelToken::new();
        cancel.cancel();

        assert!(session.run(&mut feed, &config(10, 5), &cancel).is_none());
        assert_eq!(session.state(), SessionState::Exhausted(ExhaustReason::Cancelled));
    }

    #[test]
    fn sampling_keeps_at_most_limit() {
        let posts: Vec<Post> = (0..10).map(|i| post(&format!("user{i}"), &["X.."])).collect();
        assert_eq!(sample_posts(posts.clone(), Some(3)).len(), 3);
        assert_eq!(sample_posts(posts.clone(), Some(50)), posts);
        assert_eq!(sample_posts(posts.clone(), None), posts);
        assert_eq!(sample_posts(posts.clone(), Some(0)), posts);
    }
}
