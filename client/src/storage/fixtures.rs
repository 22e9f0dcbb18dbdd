//! Sample bills used to seed the in-memory store.

use shared::Bill;

const BILLS_JSON: &str = include_str!("../../fixtures/bills.json");

pub fn bills() -> Result<Vec<Bill>, serde_json::Error> {
    serde_json::from_str(BILLS_JSON)
}
