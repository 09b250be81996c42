use std::collections::HashMap;

use crate::Error;

/// A loanable bike. The id and label are fixed at registration time; the
/// availability flag is owned by the loan ledger from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bike {
    pub id: String,
    pub label: String,
    pub available: bool,
}

#[derive(Default)]
pub struct BikeStore {
    /// Bikes in registration order, so listings stay stable.
    bikes: Vec<Bike>,
    /// Bike id to position in `bikes`.
    index: HashMap<String, usize>,
}

impl BikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new bike, available for loan.
    /// Returns an error if the id is already taken.
    pub fn register(&mut self, id: &str, label: &str) -> Result<(), Error> {
        if self.index.contains_key(id) {
            return Err(Error::DuplicateId);
        }
        self.index.insert(id.to_string(), self.bikes.len());
        self.bikes.push(Bike {
            id: id.to_string(),
            label: label.to_string(),
            available: true,
        });
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Bike> {
        self.index.get(id).map(|&pos| &self.bikes[pos])
    }

    /// All registered bikes, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Bike> {
        self.bikes.iter()
    }

    /// The bikes currently available for loan, in registration order.
    pub fn iter_available(&self) -> impl Iterator<Item = &Bike> {
        self.bikes.iter().filter(|bike| bike.available)
    }

    /// Flips the availability flag. Only the loan ledger calls this.
    pub fn set_availability(&mut self, id: &str, available: bool) -> Result<(), Error> {
        let pos = *self.index.get(id).ok_or(Error::NotFound)?;
        self.bikes[pos].available = available;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_available() {
        let mut store = BikeStore::new();
        store.register("B1", "Mountain").unwrap();

        let bike = store.find("B1").unwrap();
        assert_eq!(bike.label, "Mountain");
        assert!(bike.available);
    }

    #[test]
    fn test_register_duplicate_id() {
        let mut store = BikeStore::new();
        store.register("B1", "Mountain").unwrap();

        let result = store.register("B1", "City");
        assert!(matches!(result, Err(Error::DuplicateId)));

        // The original registration is untouched.
        assert_eq!(store.find("B1").unwrap().label, "Mountain");
    }

    #[test]
    fn test_find_missing_returns_none() {
        let store = BikeStore::new();
        assert!(store.find("B1").is_none());
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let mut store = BikeStore::new();
        store.register("B3", "Road").unwrap();
        store.register("B1", "Mountain").unwrap();
        store.register("B2", "City").unwrap();

        let ids: Vec<_> = store.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["B3", "B1", "B2"]);
    }

    #[test]
    fn test_iter_available_filters_in_order() {
        let mut store = BikeStore::new();
        store.register("B1", "Mountain").unwrap();
        store.register("B2", "City").unwrap();
        store.register("B3", "Road").unwrap();
        store.set_availability("B2", false).unwrap();

        let ids: Vec<_> = store.iter_available().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["B1", "B3"]);
    }

    #[test]
    fn test_set_availability_unknown_id() {
        let mut store = BikeStore::new();
        assert!(matches!(
            store.set_availability("B1", false),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn test_set_availability_round_trip() {
        let mut store = BikeStore::new();
        store.register("B1", "Mountain").unwrap();

        store.set_availability("B1", false).unwrap();
        assert!(!store.find("B1").unwrap().available);

        store.set_availability("B1", true).unwrap();
        assert!(store.find("B1").unwrap().available);
    }
}
