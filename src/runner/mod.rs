//! The runner replays an operations script from CSV against a fresh ledger
//! and writes the resulting bike summary to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner
//! implementation. Malformed CSV is fatal in both; operations the ledger
//! rejects are logged and skipped, the way a front end would show the
//! failure and move on.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

use std::io::Write;

use tracing::debug;

use crate::dto::{BikeRow, Operation, OperationType};
use crate::{Error, LoanLedger};

/// Applies one scripted operation to the ledger.
fn apply(ledger: &mut LoanLedger, op: &Operation) -> Result<(), Error> {
    match op.op_type {
        OperationType::RegisterBike => {
            ledger.register_bike(&op.id, op.name.as_deref().unwrap_or_default())
        }
        OperationType::RegisterUser => {
            ledger.register_user(&op.id, op.name.as_deref().unwrap_or_default())
        }
        OperationType::OpenLoan => ledger
            .open_loan(
                &op.id,
                op.user.as_deref().unwrap_or_default(),
                op.bike.as_deref().unwrap_or_default(),
            )
            .map(|_| ()),
        OperationType::CloseLoan => ledger.close_loan(&op.id).map(|_| ()),
    }
}

/// Applies one operation, logging and counting a rejection instead of
/// failing the run.
fn apply_logged(ledger: &mut LoanLedger, op: &Operation, rejected: &mut usize) {
    if let Err(err) = apply(ledger, op) {
        debug!(?op, %err, "operation rejected");
        *rejected += 1;
    }
}

/// Writes the bike summary, sorted by bike id for deterministic output.
fn write_summary<W: Write>(ledger: &LoanLedger, writer: W) -> csv::Result<()> {
    let mut rows: Vec<_> = ledger.bikes().map(BikeRow::from).collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
