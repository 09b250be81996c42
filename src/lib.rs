mod dto;
mod error;
mod ledger;
mod runner;
mod shared;
mod stores;

pub use dto::{BikeRow, Operation, OperationType};
pub use error::Error;
pub use ledger::LoanLedger;
pub use runner::{run, run_async};
pub use shared::SharedLedger;
pub use stores::{Bike, Loan, User};
