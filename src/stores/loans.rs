//! Loan record storage for history queries and open-loan tracking.
//!
//! Maintains every loan ever opened:
//! - Records are never removed; closed loans stay around for history
//! - An open loan is one with no close timestamp
//! - A user-to-open-loan index replaces rescanning the full record set

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::Error;

/// One borrow/return record linking a user and a bike. Open while
/// `closed_at` is `None`; immutable once closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub id: String,
    pub user_id: String,
    pub bike_id: String,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}

#[derive(Default)]
pub struct LoanStore {
    /// Loans in creation order; records are never removed.
    loans: Vec<Loan>,
    /// Loan id to position in `loans`.
    index: HashMap<String, usize>,
    /// User id to the position of that user's open loan. At most one entry
    /// per user, maintained on open and close.
    open_by_user: HashMap<String, usize>,
}

impl LoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a loan id has been used already.
    /// Used loan ids cannot be reused, even after the loan closes.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Stores a new open loan.
    /// Returns an error if a loan with the same id already exists.
    pub fn insert_open(
        &mut self,
        id: &str,
        user_id: &str,
        bike_id: &str,
        opened_at: DateTime<Utc>,
    ) -> Result<&Loan, Error> {
        if self.index.contains_key(id) {
            return Err(Error::DuplicateId);
        }
        let pos = self.loans.len();
        self.index.insert(id.to_string(), pos);
        self.open_by_user.insert(user_id.to_string(), pos);
        self.loans.push(Loan {
            id: id.to_string(),
            user_id: user_id.to_string(),
            bike_id: bike_id.to_string(),
            opened_at,
            closed_at: None,
        });
        Ok(&self.loans[pos])
    }

    /// Closes an open loan at the given time and drops it from the open-loan
    /// index. Returns an error if the loan does not exist or was already
    /// closed.
    pub fn close(&mut self, id: &str, at: DateTime<Utc>) -> Result<&Loan, Error> {
        let pos = *self.index.get(id).ok_or(Error::LoanNotFound)?;
        let loan = &mut self.loans[pos];
        if loan.closed_at.is_some() {
            return Err(Error::LoanAlreadyClosed);
        }
        // The wall clock may step backwards between open and close; the close
        // timestamp must never precede the open timestamp.
        loan.closed_at = Some(at.max(loan.opened_at));
        self.open_by_user.remove(&loan.user_id);
        Ok(&self.loans[pos])
    }

    pub fn find(&self, id: &str) -> Option<&Loan> {
        self.index.get(id).map(|&pos| &self.loans[pos])
    }

    /// The user's open loan, if any.
    pub fn open_loan_for_user(&self, user_id: &str) -> Option<&Loan> {
        self.open_by_user.get(user_id).map(|&pos| &self.loans[pos])
    }

    /// Every loan referencing the user, open and closed, in creation order.
    /// Empty for an unknown or loan-less user.
    pub fn history_for_user(&self, user_id: &str) -> Vec<&Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.user_id == user_id)
            .collect()
    }

    /// Every loan on record, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }
}
