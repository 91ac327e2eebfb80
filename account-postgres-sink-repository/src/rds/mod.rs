//! IAM auth token signers.
mod mock;
mod signer;

pub use mock::MockTokenSigner;
pub use signer::RdsAuthTokenSigner;
