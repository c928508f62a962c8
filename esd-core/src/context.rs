//! Cancellation and deadline propagation for directory operations.
//!
//! Directory operations may be long-running (a backing store behind a network
//! hop), so every contract method takes a [`Context`]. Implementations check it
//! cooperatively before side effects and after any potentially long wait.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Cancellation signal plus an optional deadline, passed by reference into
/// directory operations.
///
/// Cloning shares the cancellation signal: cancelling any clone cancels them
/// all. Use [`Context::child`] for a scope that can be cancelled without
/// affecting the parent.
#[derive(Debug, Clone)]
pub struct Context {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and carries no deadline.
    pub fn background() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derive a child context: cancelling the child leaves the parent alive,
    /// cancelling the parent also cancels the child. The deadline is inherited.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and all contexts derived from it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// True once the context has been cancelled or its deadline has elapsed.
    pub fn is_done(&self) -> bool {
        self.check().is_err()
    }

    /// Returns an error describing why the context is done, or `Ok(())` if the
    /// operation may proceed.
    pub fn check(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::DeadlineExceeded);
            }
        }
        Ok(())
    }

    /// The underlying token, for `select!`-style composition in long-running
    /// implementations.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
