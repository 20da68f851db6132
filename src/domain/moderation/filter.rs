//! Content moderation filter.
//!
//! Decides whether free-text user content is acceptable for the community
//! and can produce a redacted copy. Both operations are total functions over
//! strings: they never fail, perform no I/O, and share the same
//! case-insensitive whole-word matching semantics so they always agree on
//! what counts as a match.

use regex::Regex;

use super::term_set::ProhibitedTermSet;

/// Fixed user-facing message returned when content is rejected.
pub const REJECTION_MESSAGE: &str = "Your content contains words that don't align \
     with our positive community values. Please rephrase your message.";

/// Result of classifying a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationResult {
    /// True when no prohibited term matched.
    pub is_valid: bool,
    /// Terms that matched, in term-set declaration order, at most once each.
    pub matched_terms: Vec<String>,
    /// User-facing rejection message, present only when invalid.
    pub message: Option<String>,
}

impl ModerationResult {
    fn accepted() -> Self {
        Self {
            is_valid: true,
            matched_terms: Vec::new(),
            message: None,
        }
    }

    fn rejected(matched_terms: Vec<String>) -> Self {
        Self {
            is_valid: false,
            matched_terms,
            message: Some(REJECTION_MESSAGE.to_string()),
        }
    }
}

/// A compiled term with its whole-word matcher.
#[derive(Debug, Clone)]
struct CompiledTerm {
    term: String,
    pattern: Regex,
}

/// Moderation filter over a fixed prohibited term set.
///
/// Compiles one case-insensitive whole-word pattern per term at construction
/// time. Stateless after that; safe to share across any number of callers.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    terms: Vec<CompiledTerm>,
}

impl ModerationFilter {
    /// Builds a filter over the given term set.
    pub fn new(term_set: &ProhibitedTermSet) -> Self {
        let terms = term_set
            .iter()
            .filter_map(|term| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
                Regex::new(&pattern).ok().map(|pattern| CompiledTerm {
                    term: term.to_string(),
                    pattern,
                })
            })
            .collect();
        Self { terms }
    }

    /// Builds a filter over the process-wide default term set.
    pub fn with_default_terms() -> Self {
        Self::new(ProhibitedTermSet::default_set())
    }

    /// Checks whether content contains prohibited terms.
    ///
    /// Empty and whitespace-only content is valid with no matches. Matching
    /// is case-insensitive and whole-word: a term inside a larger word does
    /// not match ("ass" never matches "classic"). Multi-word terms match as
    /// contiguous phrases bounded by word boundaries.
    pub fn classify(&self, content: &str) -> ModerationResult {
        if content.trim().is_empty() {
            return ModerationResult::accepted();
        }

        let matched: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.pattern.is_match(content))
            .map(|t| t.term.clone())
            .collect();

        if matched.is_empty() {
            ModerationResult::accepted()
        } else {
            ModerationResult::rejected(matched)
        }
    }

    /// Replaces every whole-word occurrence of every prohibited term with a
    /// run of `*` of the matched term's length, preserving all surrounding
    /// text. Idempotent: `*` is not a word character, so masked runs never
    /// re-match.
    pub fn sanitize(&self, content: &str) -> String {
        let mut sanitized = content.to_string();
        for t in &self.terms {
            sanitized = t
                .pattern
                .replace_all(&sanitized, |caps: &regex::Captures<'_>| {
                    "*".repeat(caps[0].chars().count())
                })
                .into_owned();
        }
        sanitized
    }
}

impl Default for ModerationFilter {
    fn default() -> Self {
        Self::with_default_terms()
    }
}
