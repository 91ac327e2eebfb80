use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// How a position's tokens are locked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum LockupKind {
    /// No lockup, tokens carry baseline weight only.
    #[default]
    None,
    /// Lockup counts down towards `end_ts`.
    Cliff,
    /// Lockup duration stays fixed until the position is decayed.
    Constant,
}

/// Lockup descriptor of a position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Lockup {
    pub start_ts: i64,
    pub end_ts: i64,
    pub kind: LockupKind,
}

impl Lockup {
    /// Total configured lockup duration in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.end_ts.saturating_sub(self.start_ts).max(0) as u64
    }

    /// Seconds of lockup that still count towards vote weight at `now`.
    ///
    /// Constant lockups never count down; cliff lockups count down to `end_ts`.
    pub fn seconds_remaining(&self, now: i64) -> u64 {
        match self.kind {
            LockupKind::None => 0,
            LockupKind::Constant => self.total_seconds(),
            LockupKind::Cliff => self.end_ts.saturating_sub(now).max(0) as u64,
        }
    }

    pub fn expired(&self, now: i64) -> bool {
        match self.kind {
            LockupKind::None => true,
            LockupKind::Constant => false,
            LockupKind::Cliff => now >= self.end_ts,
        }
    }
}
