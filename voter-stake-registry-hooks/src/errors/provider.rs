use thiserror::Error;

/// Failures reported by a [`GovernanceProvider`](crate::GovernanceProvider).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Transaction rejected: {0}")]
    TransactionRejected(String),

    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl ProviderError {
    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::TransactionRejected(msg.into())
    }
}
