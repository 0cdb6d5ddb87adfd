//! Distinct-keyword membership matcher

use aho_corasick::AhoCorasick;
use fixline_core::{Error, Result};

/// Substring matcher over one category's keyword set.
///
/// Counts how many distinct keywords occur in a text; repeated occurrences
/// of the same keyword contribute once. Matching is a membership test over
/// literal substrings, so overlapping matches must be observed: with
/// non-overlapping iteration the text "leakage" would consume the "leak"
/// pattern and under-count.
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keyword_count: usize,
}

impl KeywordMatcher {
    /// Build a matcher from a keyword set
    pub fn new(keywords: &[&str]) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| Error::routing(format!("failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            automaton,
            keyword_count: keywords.len(),
        })
    }

    /// Number of distinct keywords present in the text
    pub fn distinct_hits(&self, text: &str) -> usize {
        if self.keyword_count == 0 {
            return 0;
        }

        let mut seen = vec![false; self.keyword_count];
        for mat in self.automaton.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }
        seen.iter().filter(|hit| **hit).count()
    }

    /// Whether this matcher has no keywords at all
    pub fn is_empty(&self) -> bool {
        self.keyword_count == 0
    }
}
