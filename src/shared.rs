//! Concurrent facade over the loan ledger.
//!
//! Mutating operations take the write lock, so an open or close is a single
//! critical section over the combined bike/user/loan state. Read-only
//! operations take the read lock and return owned snapshots; a reader can
//! never observe a half-applied transaction.

use std::sync::{Arc, RwLock};

use crate::stores::{Bike, Loan, User};
use crate::{Error, LoanLedger};

/// Cloneable handle to one shared ledger instance. Each clone refers to the
/// same underlying state.
#[derive(Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<LoanLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_bike(&self, id: &str, label: &str) -> Result<(), Error> {
        self.write().register_bike(id, label)
    }

    pub fn register_user(&self, id: &str, name: &str) -> Result<(), Error> {
        self.write().register_user(id, name)
    }

    pub fn find_bike(&self, id: &str) -> Option<Bike> {
        self.read().find_bike(id).cloned()
    }

    pub fn find_user(&self, id: &str) -> Option<User> {
        self.read().find_user(id).cloned()
    }

    pub fn bikes(&self) -> Vec<Bike> {
        self.read().bikes().cloned().collect()
    }

    pub fn available_bikes(&self) -> Vec<Bike> {
        self.read().available_bikes().cloned().collect()
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users().cloned().collect()
    }

    pub fn find_loan(&self, id: &str) -> Option<Loan> {
        self.read().find_loan(id).cloned()
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.read().loans().cloned().collect()
    }

    pub fn open_loan_for_user(&self, user_id: &str) -> Option<Loan> {
        self.read().open_loan_for_user(user_id).cloned()
    }

    pub fn history_for_user(&self, user_id: &str) -> Vec<Loan> {
        self.read()
            .history_for_user(user_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn open_loan(&self, loan_id: &str, user_id: &str, bike_id: &str) -> Result<Loan, Error> {
        self.write()
            .open_loan(loan_id, user_id, bike_id)
            .map(Loan::clone)
    }

    pub fn close_loan(&self, loan_id: &str) -> Result<Loan, Error> {
        self.write().close_loan(loan_id).map(Loan::clone)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, LoanLedger> {
        self.inner.read().expect("lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, LoanLedger> {
        self.inner.write().expect("lock poisoned")
    }
}
