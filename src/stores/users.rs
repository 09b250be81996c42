use std::collections::HashMap;

use crate::Error;

/// A registered borrower. The id and name are fixed at registration time;
/// the has-open-loan flag is owned by the loan ledger from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub has_open_loan: bool,
}

#[derive(Default)]
pub struct UserStore {
    /// Users in registration order, so listings stay stable.
    users: Vec<User>,
    /// User id to position in `users`.
    index: HashMap<String, usize>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user with no open loan.
    /// Returns an error if the id is already taken.
    pub fn register(&mut self, id: &str, name: &str) -> Result<(), Error> {
        if self.index.contains_key(id) {
            return Err(Error::DuplicateId);
        }
        self.index.insert(id.to_string(), self.users.len());
        self.users.push(User {
            id: id.to_string(),
            name: name.to_string(),
            has_open_loan: false,
        });
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.index.get(id).map(|&pos| &self.users[pos])
    }

    /// All registered users, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Flips the has-open-loan flag. Only the loan ledger calls this.
    pub fn set_has_open_loan(&mut self, id: &str, has_open_loan: bool) -> Result<(), Error> {
        let pos = *self.index.get(id).ok_or(Error::NotFound)?;
        self.users[pos].has_open_loan = has_open_loan;
        Ok(())
    }
}
