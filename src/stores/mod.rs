//! Storage layer for the bike loan system. Provides storage for:
//! - Registered bikes and their availability ([`BikeStore`])
//! - Registered users and their loan status ([`UserStore`])
//! - Loan records, open and closed ([`LoanStore`])
//!
//! All three are keyed in-memory stores that keep registration order for
//! listing. The availability and has-open-loan flags and the loan close
//! timestamps are written only by the loan ledger.

mod bikes;
mod loans;
mod users;

pub use bikes::{Bike, BikeStore};
pub use loans::{Loan, LoanStore};
pub use users::{User, UserStore};
