//! Backend entities referenced by the engine

pub mod table;

pub use table::{TableRef, TableStatus};
