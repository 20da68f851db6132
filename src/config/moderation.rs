//! Moderation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::moderation::{ProhibitedTermSet, DEFAULT_PROHIBITED_TERMS};

/// Moderation configuration
///
/// The term list is fixed for the process lifetime; overriding it is a
/// deploy-time decision, never a runtime mutation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModerationConfig {
    /// Override for the prohibited term list (comma-separated). When unset,
    /// the built-in community-guideline list is used.
    pub prohibited_terms: Option<String>,
}

impl ModerationConfig {
    /// Builds the term set this deployment should filter with.
    pub fn term_set(&self) -> ProhibitedTermSet {
        match &self.prohibited_terms {
            Some(list) => ProhibitedTermSet::new(list.split(',')),
            None => ProhibitedTermSet::new(DEFAULT_PROHIBITED_TERMS.iter().copied()),
        }
    }

    /// Validate moderation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.term_set().is_empty() {
            return Err(ValidationError::EmptyTermList);
        }
        Ok(())
    }
}
