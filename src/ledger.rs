use chrono::Utc;
use tracing::debug;

use crate::stores::{Bike, BikeStore, Loan, LoanStore, User, UserStore};
use crate::Error;

/// The loan lifecycle engine. Owns the three stores and is the sole writer of
/// bike availability, user loan flags, and loan close timestamps, so the
/// flags always agree with the set of open loans.
pub struct LoanLedger {
    bikes: BikeStore,
    users: UserStore,
    loans: LoanStore,
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            bikes: BikeStore::new(),
            users: UserStore::new(),
            loans: LoanStore::new(),
        }
    }

    /// Registers a new bike, available for loan.
    pub fn register_bike(&mut self, id: &str, label: &str) -> Result<(), Error> {
        self.bikes.register(id, label)
    }

    /// Registers a new user with no open loan.
    pub fn register_user(&mut self, id: &str, name: &str) -> Result<(), Error> {
        self.users.register(id, name)
    }

    pub fn find_bike(&self, id: &str) -> Option<&Bike> {
        self.bikes.find(id)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.find(id)
    }

    /// All registered bikes, in registration order.
    pub fn bikes(&self) -> impl Iterator<Item = &Bike> {
        self.bikes.iter()
    }

    /// The bikes currently available for loan, in registration order.
    pub fn available_bikes(&self) -> impl Iterator<Item = &Bike> {
        self.bikes.iter_available()
    }

    /// All registered users, in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn find_loan(&self, id: &str) -> Option<&Loan> {
        self.loans.find(id)
    }

    /// Every loan on record, open and closed, in creation order.
    pub fn loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    /// The user's open loan, if any. Lets a caller discover which bike a
    /// user currently holds.
    pub fn open_loan_for_user(&self, user_id: &str) -> Option<&Loan> {
        self.loans.open_loan_for_user(user_id)
    }

    /// Every loan referencing the user, open and closed, in creation order.
    /// Empty for an unknown or loan-less user.
    pub fn history_for_user(&self, user_id: &str) -> Vec<&Loan> {
        self.loans.history_for_user(user_id)
    }

    /// Opens a loan: the user borrows the bike under the caller-supplied
    /// loan id.
    ///
    /// Preconditions are checked most-informative-first, and any failure
    /// returns before any state is touched:
    /// 1. the user is registered,
    /// 2. the bike is registered and available,
    /// 3. the user has no open loan,
    /// 4. the loan id is unused.
    pub fn open_loan(
        &mut self,
        loan_id: &str,
        user_id: &str,
        bike_id: &str,
    ) -> Result<&Loan, Error> {
        if self.users.find(user_id).is_none() {
            return Err(Error::UnknownUser);
        }
        match self.bikes.find(bike_id) {
            Some(bike) if bike.available => {}
            _ => return Err(Error::BikeUnavailable),
        }
        // The open-loan index is authoritative here, not the user flag.
        if self.loans.open_loan_for_user(user_id).is_some() {
            return Err(Error::UserAlreadyBorrowing);
        }
        if self.loans.contains(loan_id) {
            return Err(Error::DuplicateId);
        }

        self.bikes.set_availability(bike_id, false)?;
        self.users.set_has_open_loan(user_id, true)?;
        let loan = self.loans.insert_open(loan_id, user_id, bike_id, Utc::now())?;
        debug!(loan = loan_id, user = user_id, bike = bike_id, "loan opened");
        Ok(loan)
    }

    /// Closes an open loan: the bike comes back and the user may borrow
    /// again. The loan record is kept for history.
    pub fn close_loan(&mut self, loan_id: &str) -> Result<&Loan, Error> {
        let (user_id, bike_id) = {
            let loan = self.loans.find(loan_id).ok_or(Error::LoanNotFound)?;
            if !loan.is_open() {
                return Err(Error::LoanAlreadyClosed);
            }
            (loan.user_id.clone(), loan.bike_id.clone())
        };

        self.bikes.set_availability(&bike_id, true)?;
        self.users.set_has_open_loan(&user_id, false)?;
        let loan = self.loans.close(loan_id, Utc::now())?;
        debug!(loan = loan_id, user = %user_id, bike = %bike_id, "loan closed");
        Ok(loan)
    }
}
