//! Dining table reference
//!
//! Not owned by the order subsystem; mutated as a side effect when a
//! table-carrying order is confirmed.

use serde::{Deserialize, Serialize};

/// Table occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Serving,
    Reserved,
    Cleaning,
}

/// Table entity as returned by the Table Service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRef {
    pub id: String,
    pub table_number: u32,
    pub status: TableStatus,
}
