//! Candidate filtering
//!
//! Decides whether a candidate value row stays visible for the typed query.
//! Plain categorical list fields get fuzzy matching; everything else
//! (id-like fields, free-form and search fields) requires the query to be
//! a prefix of a token.

use std::borrow::Cow;
use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::config::{FilterConfig, FuzzyAlgorithm};
use crate::field::{FieldDescriptor, ValueMode, ValueRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Query must equal or prefix a token
    Prefix,
    /// Query may match anywhere in a token
    Fuzzy,
}

impl MatchMode {
    pub fn for_field(field: &FieldDescriptor) -> Self {
        if field.value_mode() == ValueMode::List && !field.is_id_like() {
            MatchMode::Fuzzy
        } else {
            MatchMode::Prefix
        }
    }
}

pub struct CandidateFilter {
    mode: MatchMode,
    algorithm: FuzzyAlgorithm,
    case_sensitive: bool,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for CandidateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFilter")
            .field("mode", &self.mode)
            .field("algorithm", &self.algorithm)
            .field("case_sensitive", &self.case_sensitive)
            .finish_non_exhaustive()
    }
}

impl CandidateFilter {
    pub fn new(mode: MatchMode, config: &FilterConfig) -> Self {
        // Tokens and queries reach the matcher already folded by `fold`
        Self {
            mode,
            algorithm: config.fuzzy,
            case_sensitive: config.case_sensitive,
            matcher: SkimMatcherV2::default().respect_case(),
        }
    }

    pub fn for_field(field: &FieldDescriptor, config: &FilterConfig) -> Self {
        Self::new(MatchMode::for_field(field), config)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// True when any token matches `query`
    ///
    /// An empty query matches every candidate.
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S], query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let query = self.fold(query);
        tokens
            .iter()
            .any(|token| self.token_matches(token.as_ref(), &query))
    }

    /// Rows that match `query`, in their original order, at most `limit`
    pub fn filter_rows<'a>(&self, rows: &'a [ValueRow], query: &str, limit: usize) -> Vec<&'a ValueRow> {
        rows.iter()
            .filter(|row| self.matches(&row.tokens(), query))
            .take(limit)
            .collect()
    }

    // `query` is already case-folded
    fn token_matches(&self, token: &str, query: &str) -> bool {
        match (self.mode, self.algorithm) {
            (MatchMode::Prefix, _) => self.fold(token).starts_with(query),
            (MatchMode::Fuzzy, FuzzyAlgorithm::Substring) => self.fold(token).contains(query),
            (MatchMode::Fuzzy, FuzzyAlgorithm::Subsequence) => {
                self.matcher.fuzzy_match(&self.fold(token), query).is_some()
            }
        }
    }

    fn fold<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.case_sensitive {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s.to_lowercase())
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
