//! Domain-specific errors for the bike loan system.
//!
//! Contains error variants for common failure cases like:
//! - Registration errors (id collision, unknown id)
//! - Loan preconditions (unknown user, bike unavailable, user already borrowing)
//! - Return-side failures (loan unknown, loan already closed)
//!
//! These errors represent expected business outcomes rather than faults:
//! every operation surfaces them as `Result` values and leaves no partial
//! state behind on failure.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An id collided with one already registered in the same set.
    #[error("id is already registered")]
    DuplicateId,
    /// A store mutation targeted an id that was never registered.
    #[error("no entry with this id")]
    NotFound,
    #[error("user is not registered")]
    UnknownUser,
    /// Covers both an unknown bike and a bike currently on loan.
    #[error("bike is not available for loan")]
    BikeUnavailable,
    #[error("user already has an open loan")]
    UserAlreadyBorrowing,
    #[error("no loan with this id")]
    LoanNotFound,
    #[error("loan has already been closed")]
    LoanAlreadyClosed,
}
