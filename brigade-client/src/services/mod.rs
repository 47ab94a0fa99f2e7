//! Trait implementations over the REST API

pub mod order;
pub mod table;
pub mod ticket;

pub use order::OrdersApi;
pub use table::TablesApi;
pub use ticket::TicketsApi;
