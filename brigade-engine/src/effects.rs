//! Post-success effect runner
//!
//! Best-effort side effects chained after an awaited primary call are
//! modeled as named, independently-wrapped effects: each failure is caught,
//! logged, and recorded as an outcome - never propagated to the caller and
//! never affecting a sibling effect. No effect is ever retried; every retry
//! is a new explicit user action.

use std::fmt::Display;
use std::future::Future;

use tracing::{debug, warn};

/// Result of one best-effort effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectOutcome {
    /// Effect name, e.g. "print_ticket" or "notify_waiter"
    pub name: String,
    pub ok: bool,
    /// Failure detail when `ok` is false
    pub detail: Option<String>,
}

impl EffectOutcome {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            detail: None,
        }
    }

    pub fn failure(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: false,
            detail: Some(detail.into()),
        }
    }

    /// An effect that was not attempted because its precondition did not
    /// hold (e.g. printed-flag update after a failed print)
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::failure(name, format!("skipped: {}", reason.into()))
    }
}

/// Run one best-effort effect, swallowing and logging any failure
pub async fn run_effect<F, T, E>(name: &str, fut: F) -> EffectOutcome
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match fut.await {
        Ok(_) => {
            debug!(effect = name, "Post-success effect completed");
            EffectOutcome::success(name)
        }
        Err(e) => {
            warn!(effect = name, error = %e, "Post-success effect failed, swallowing");
            EffectOutcome::failure(name, e.to_string())
        }
    }
}

/// Run one best-effort synchronous effect
pub fn run_effect_sync<F, T, E>(name: &str, f: F) -> EffectOutcome
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    match f() {
        Ok(_) => {
            debug!(effect = name, "Post-success effect completed");
            EffectOutcome::success(name)
        }
        Err(e) => {
            warn!(effect = name, error = %e, "Post-success effect failed, swallowing");
            EffectOutcome::failure(name, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let outcome = run_effect("doomed", async { Err::<(), _>("printer jam") }).await;
        assert!(!outcome.ok);
        assert_eq!(outcome.detail.as_deref(), Some("printer jam"));
    }

    #[tokio::test]
    async fn test_failures_do_not_affect_siblings() {
        let first = run_effect("a", async { Err::<(), _>("boom") }).await;
        let second = run_effect("b", async { Ok::<_, String>(()) }).await;
        assert!(!first.ok);
        assert!(second.ok);
    }

    #[test]
    fn test_sync_effect() {
        let outcome = run_effect_sync("print", || Ok::<_, String>(()));
        assert!(outcome.ok);
    }
}
