//! The matching capability the timing harness depends on.

use std::{error::Error, fmt};

use crate::backtrack::Backtracker;

/// Error raised by an engine while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    StepLimitExceeded { limit: u64 },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::StepLimitExceeded { limit } => {
                write!(f, "Search aborted after exceeding {limit} steps")
            }
        }
    }
}

impl Error for MatchError {}

/// Anything able to tell whether a subject matches a fixed pattern.
pub trait Matcher {
    fn is_match(&self, subject: &str) -> Result<bool, MatchError>;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn is_match(&self, subject: &str) -> Result<bool, MatchError> {
        (**self).is_match(subject)
    }
}

impl Matcher for Backtracker {
    fn is_match(&self, subject: &str) -> Result<bool, MatchError> {
        Backtracker::is_match(self, subject)
    }
}

impl Matcher for ::regex::Regex {
    fn is_match(&self, subject: &str) -> Result<bool, MatchError> {
        Ok(::regex::Regex::is_match(self, subject))
    }
}
