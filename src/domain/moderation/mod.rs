//! Content moderation - prohibited-term detection and sanitization.
//!
//! Pure, stateless functions over text. The filter gates post creation
//! (reject policy) and can alternatively redact content in place
//! (sanitize policy); both use identical whole-word matching semantics.

mod filter;
mod term_set;

pub use filter::{ModerationFilter, ModerationResult, REJECTION_MESSAGE};
pub use term_set::{ProhibitedTermSet, DEFAULT_PROHIBITED_TERMS};
