//! This module defines and re-exports the interfaces for the sink repository.
//! It serves as a central point for accessing traits related to data interaction.
mod auth_token_signer;
mod cursor_repository;

pub use auth_token_signer::AuthTokenSigner;
pub use cursor_repository::{Cursor, CursorRepository};
