//! In-flight guard for asynchronous hook actions.
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::HooksError;

/// Runs an asynchronous action at most once at a time and keeps the outcome
/// of the latest run.
///
/// A call made while a previous run is pending fails with
/// `HooksError::AlreadyPending` without starting the new future.
#[derive(Debug, Default)]
pub struct AsyncAction {
    loading: AtomicBool,
    error: Mutex<Option<HooksError>>,
}

/// Clears the loading flag when the running future completes or is dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AsyncAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Error of the latest completed run, if it failed.
    pub fn error(&self) -> Option<HooksError> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn execute<F, T>(&self, action: F) -> Result<T, HooksError>
    where
        F: Future<Output = Result<T, HooksError>>,
    {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Action already in flight, skipping");
            return Err(HooksError::AlreadyPending);
        }
        let _guard = LoadingGuard(&self.loading);

        let result = action.await;
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = result.as_ref().err().cloned();
        result
    }
}
