//! Common types and utilities shared across the tweetquiz crates.
//!
//! This crate holds the account pair model, the shared error type and the
//! observability helpers. It stays dependency-light so that every other crate in
//! the workspace can pull it in.
//!
//! # Overview
//!
//! - [`AccountPair`]: the two handles a game is played with
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`QuizError`] and [`Result`]: shared error handling
//!
//! # Examples
//!
//! ```rust
//! use tweetquiz_common::AccountPair;
//!
//! let pair = AccountPair::new("@kanyewest", " elonmusk ");
//! assert_eq!(pair.first, "kanyewest");
//! assert_eq!(pair.second, "elonmusk");
//! ```
use serde::{Deserialize, Serialize};

pub mod observability;

/// The two accounts whose posts are mixed together in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPair {
    pub first: String,
    pub second: String,
}

impl AccountPair {
    /// Build a pair from raw user input, normalising both handles.
    pub fn new(first: impl AsRef<str>, second: impl AsRef<str>) -> Self {
        Self {
            first: normalize_handle(first.as_ref()),
            second: normalize_handle(second.as_ref()),
        }
    }

    /// Both handles are non-empty after normalisation.
    pub fn is_complete(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }

    /// Both sides name one account. Screen names compare case-insensitively.
    pub fn is_same_account(&self) -> bool {
        self.first.eq_ignore_ascii_case(&self.second)
    }
}

/// Trim whitespace and a single leading `@` from a handle.
///
/// ```
/// assert_eq!(tweetquiz_common::normalize_handle("  @jack "), "jack");
/// assert_eq!(tweetquiz_common::normalize_handle("jack"), "jack");
/// ```
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('@')
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Error types used across the tweetquiz system.
#[derive(thiserror::Error, Debug)]
pub enum QuizError {
    /// Configuration was incomplete or invalid (for example missing credentials).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The player's input stream ended or could not be interpreted.
    #[error("Input error: {0}")]
    Input(String),

    /// A game with at least one round was requested but neither pool has posts.
    #[error("no eligible posts to quiz on for @{first} or @{second}")]
    EmptyPool { first: String, second: String },

    /// Console read/write failure.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results that use [`QuizError`].
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_normalises_both_handles() {
        let pair = AccountPair::new(" @Alice", "bob\n");
        assert_eq!(pair, AccountPair::new("Alice", "bob"));
        assert!(pair.is_complete());
    }

    #[test]
    fn blank_handle_makes_pair_incomplete() {
        assert!(!AccountPair::new("@", "bob").is_complete());
        assert!(!AccountPair::new("alice", "   ").is_complete());
    }

    #[test]
    fn same_account_ignores_case_and_at_sign() {
        assert!(AccountPair::new("jack", "@JACK").is_same_account());
        assert!(!AccountPair::new("jack", "jill").is_same_account());
    }

    #[test]
    fn empty_pool_error_names_accounts() {
        let err = QuizError::EmptyPool {
            first: "a".into(),
            second: "b".into(),
        };
        assert_eq!(err.to_string(), "no eligible posts to quiz on for @a or @b");
    }
}
