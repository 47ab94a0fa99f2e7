//! Kitchen Order Ticket engine
//!
//! - **dispatcher**: per-station fan-out of a confirmed order plus the
//!   best-effort print/flag/notify effects
//! - **lifecycle**: the ticket status state machine and its coupled order
//!   status advance
//! - **view**: the management board's filter/sort projection

pub mod dispatcher;
pub mod lifecycle;
pub mod view;

pub use dispatcher::{DispatchError, DispatchReport, KotDispatcher, StationFailure};
pub use lifecycle::{LifecycleError, LifecycleTracker};
pub use view::{KotBoard, TicketFilter};
