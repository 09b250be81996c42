use serde::{Deserialize, Serialize};

use crate::stores::Bike;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    RegisterBike,
    RegisterUser,
    OpenLoan,
    CloseLoan,
}

/// One row of an operations script. Columns an operation does not use stay
/// empty, e.g. `close_loan` carries only the loan id.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    #[serde(rename = "op")]
    pub op_type: OperationType,
    /// Bike id, user id, or loan id, depending on the operation.
    pub id: String,
    /// Borrower user id, for `open_loan`.
    pub user: Option<String>,
    /// Bike id, for `open_loan`.
    pub bike: Option<String>,
    /// Bike label or user display name, for the register operations.
    pub name: Option<String>,
}

/// One row of the bike summary the runners write out.
#[derive(Debug, Serialize, PartialEq)]
pub struct BikeRow {
    pub id: String,
    pub label: String,
    pub available: bool,
}

impl From<&Bike> for BikeRow {
    fn from(bike: &Bike) -> Self {
        Self {
            id: bike.id.clone(),
            label: bike.label.clone(),
            available: bike.available,
        }
    }
}
