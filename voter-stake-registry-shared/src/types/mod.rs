mod account;
mod delegation;
mod lockup;
mod position;
mod proposal;
mod registrar;
mod vote_marker;

pub use account::{account_discriminator, AnchorAccount, DISCRIMINATOR_LEN};
pub use delegation::{Delegation, VotingDelegation};
pub use lockup::{Lockup, LockupKind};
pub use position::{Position, PositionWithMeta};
pub use proposal::{Choice, Proposal, ProposalConfig};
pub use registrar::{Registrar, VotingMintConfig};
pub use vote_marker::VoteMarker;
