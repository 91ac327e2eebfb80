//! Account Postgres Sink Library
//!
//! This library wires the sink's database: configuration from the environment,
//! the connection pool with IAM token rotation, migrations, and the cursor
//! checkpoint the sink resumes from.

pub mod checkpoint;
pub mod config;
pub mod errors;

pub use checkpoint::report_checkpoint;
pub use config::Dependencies;
pub use errors::SinkError;
