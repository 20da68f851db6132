//! Prohibited term set - the community-guideline word list.

use once_cell::sync::Lazy;

/// Terms that promote negativity, bullying, or harmful content.
///
/// Declaration order is significant: `ModerationFilter` reports matches in
/// this order. Some entries are context-dependent (e.g. "gay" belongs here
/// only when used as an insult); whole-word matching cannot distinguish
/// intent, so those entries carry a known false-positive risk. Operators
/// who need a different policy can build a filter from their own list.
pub const DEFAULT_PROHIBITED_TERMS: &[&str] = &[
    // Negative words
    "stupid", "idiot", "dumb", "moron", "fool", "loser", "pathetic",
    "worthless", "useless", "trash", "garbage", "rubbish", "crap",
    // Bullying/harassment terms
    "hate", "ugly", "disgusting", "gross", "freak", "weirdo",
    "creep", "stalker", "psycho", "crazy", "insane",
    // Offensive terms
    "shut up", "kill yourself", "kys", "die", "death",
    // Profanity
    "damn", "hell", "bastard", "bitch", "ass", "fuck",
    "shit", "dick", "cock", "pussy", "asshole",
    // Slurs and derogatory terms (context-dependent, see above)
    "retard", "retarded", "gay",
];

/// An ordered, immutable set of lowercase prohibited terms.
///
/// Fixed for the lifetime of the filter that owns it; there is no runtime
/// mutation path by design.
#[derive(Debug, Clone)]
pub struct ProhibitedTermSet {
    terms: Vec<String>,
}

impl ProhibitedTermSet {
    /// Builds a term set from the given terms, lowercasing each one and
    /// preserving declaration order. Empty and whitespace-only entries are
    /// dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .filter_map(|t| {
                let t = t.as_ref().trim().to_lowercase();
                if t.is_empty() {
                    None
                } else {
                    Some(t)
                }
            })
            .collect();
        Self { terms }
    }

    /// The process-wide default term set.
    pub fn default_set() -> &'static ProhibitedTermSet {
        static DEFAULT: Lazy<ProhibitedTermSet> =
            Lazy::new(|| ProhibitedTermSet::new(DEFAULT_PROHIBITED_TERMS.iter().copied()));
        &DEFAULT
    }

    /// Iterates terms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of terms in the set.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the set contains no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
