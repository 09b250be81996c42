//! Seeds a ledger with example data and walks one borrow/return round trip,
//! printing what a front end would render.

use cycleshare::{Error, LoanLedger};

fn main() -> Result<(), Error> {
    let mut ledger = LoanLedger::new();

    ledger.register_bike("B001", "Mountain")?;
    ledger.register_bike("B002", "City")?;
    ledger.register_bike("B003", "Road")?;
    ledger.register_user("U1", "Ada Lovelace")?;
    ledger.register_user("U2", "Grace Hopper")?;
    ledger.register_user("U3", "Margaret Hamilton")?;

    ledger.open_loan("P1", "U1", "B001")?;

    println!("Available bikes:");
    for bike in ledger.available_bikes() {
        println!("- {} ({})", bike.id, bike.label);
    }

    if let Some(loan) = ledger.open_loan_for_user("U1") {
        let bike = ledger.find_bike(&loan.bike_id);
        let label = bike.map(|b| b.label.as_str()).unwrap_or("?");
        println!("U1 currently holds {} ({})", loan.bike_id, label);
    }

    ledger.close_loan("P1")?;
    ledger.open_loan("P2", "U1", "B003")?;

    println!("History for U1:");
    for loan in ledger.history_for_user("U1") {
        let opened = loan.opened_at.format("%d/%m/%Y %H:%M");
        match loan.closed_at {
            Some(at) => println!(
                "- loan {}: bike {} from {} until {}",
                loan.id,
                loan.bike_id,
                opened,
                at.format("%d/%m/%Y %H:%M")
            ),
            None => println!("- loan {}: bike {} since {} (open)", loan.id, loan.bike_id, opened),
        }
    }

    Ok(())
}
