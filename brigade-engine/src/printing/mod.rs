//! Ticket printing
//!
//! - **renderer**: monospace kitchen-ticket document
//! - [`PrintSurface`]: capability interface for the actual print dispatch

pub mod renderer;

use thiserror::Error;

pub use renderer::TicketRenderer;

/// Print dispatch failure
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Print surface unavailable: {0}")]
    Unavailable(String),

    #[error("Print failed: {0}")]
    Failed(String),
}

/// Capability interface for dispatching a rendered ticket document
///
/// Rendering is local and synchronous; implementations open the document as
/// a print-ready view and invoke it immediately. Failures are swallowed by
/// the caller (best-effort, logged only).
pub trait PrintSurface: Send + Sync {
    fn print(&self, document: &str) -> Result<(), PrintError>;
}

/// Print surface that writes the document to stdout
///
/// Stand-in for environments without a spooler; useful in demos and tests.
#[derive(Debug, Default)]
pub struct ConsolePrintSurface;

impl PrintSurface for ConsolePrintSurface {
    fn print(&self, document: &str) -> Result<(), PrintError> {
        println!("{document}");
        Ok(())
    }
}
