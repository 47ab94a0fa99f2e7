//! Order composition and kitchen-ticket dispatch engine
//!
//! The coordination core of the POS admin application: turns a cart of line
//! items into a priced order, fans the confirmed order out into per-station
//! Kitchen Order Tickets, tracks each ticket through its status lifecycle,
//! and keeps dependent state (table occupancy, printed receipts, waiter
//! notifications) consistent when any step fails.
//!
//! # Architecture
//!
//! ```text
//! Cart ──▶ Pricing (recomputed on every mutation)
//!   │
//!   ▼ confirm
//! OrderCoordinator ──▶ OrderService (exactly one attempt)
//!   │ success
//!   ├──▶ KotDispatcher ──▶ TicketService (one create per station, concurrent)
//!   │        │ per created ticket: print → printed-flag → waiter notify
//!   │        ▼ (best-effort, failures logged, never blocking)
//!   └──▶ TableSynchronizer ──▶ TableService (fire-and-forget)
//!
//! LifecycleTracker / KotBoard: long-lived read/update surface
//! ```
//!
//! The central failure-isolation invariant: once the order itself is
//! confirmed, no ticket or side-effect failure is ever surfaced as a
//! blocking error.

pub mod cart;
pub mod config;
pub mod effects;
pub mod kot;
pub mod notify;
pub mod orders;
pub mod pricing;
pub mod printing;
pub mod tables;
pub mod utils;

// Re-exports
pub use cart::{Cart, LineKey};
pub use config::EngineConfig;
pub use effects::{EffectOutcome, run_effect};
pub use kot::{DispatchError, DispatchReport, KotBoard, KotDispatcher, LifecycleTracker, TicketFilter};
pub use notify::{ChatDeepLink, NotificationSender, NotifyError, normalize_phone};
pub use orders::OrderCoordinator;
pub use printing::{PrintError, PrintSurface, TicketRenderer};
pub use tables::TableSynchronizer;
pub use utils::error::{FieldError, SubmitError, ValidationReport};
