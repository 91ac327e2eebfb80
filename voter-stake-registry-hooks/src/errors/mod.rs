//! Error types for the voter stake registry hooks.
//! Separates failures raised by the hooks themselves from failures reported by
//! the external provider, which are passed through untouched.
mod hooks;
mod provider;

pub use hooks::{HooksError, ACTIVE_VOTES_MESSAGE, NO_POSITIONS_MESSAGE};
pub use provider::ProviderError;
