//! Errors reported by tree operations.
//!
//! None of these are fatal: the operation that reports one leaves the tree exactly as it found
//! it.

use thiserror::Error;

/// The ways a tree operation can decline to do anything.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// No node holds the requested value.
    #[error("value not found in tree")]
    NotFound,
    /// The tree has no root, so there is nothing to operate on.
    #[error("tree is empty")]
    EmptyTree,
    /// A raw input token could not be turned into a value.
    #[error("invalid input `{token}`: {reason}")]
    InvalidInput {
        /// The offending token, as supplied.
        token: String,
        /// Why it was rejected.
        reason: String,
    },
}
