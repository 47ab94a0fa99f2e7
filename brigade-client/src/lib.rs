//! REST client for the Brigade backend
//!
//! Reqwest-backed implementations of the collaborator contracts defined in
//! `shared::service`. The engine only ever sees the traits; this crate owns
//! the transport, the auth header, and the response envelope.

pub mod config;
pub mod error;
pub mod http;
pub mod services;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiResponse, HttpClient};
pub use services::{OrdersApi, TablesApi, TicketsApi};
