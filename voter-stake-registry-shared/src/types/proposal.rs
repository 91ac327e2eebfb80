use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    pub uri: Option<String>,
    pub weight: u128,
}

/// Governance proposal, limited to the fields the hooks read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub pubkey: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub uri: String,
    pub proposal_config: Pubkey,
    pub max_choices_per_voter: u16,
    pub choices: Vec<Choice>,
}

/// Controllers attached to a proposal through its config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalConfig {
    pub pubkey: Pubkey,
    pub vote_controller: Pubkey,
    pub state_controller: Pubkey,
    pub on_vote_hook: Pubkey,
}
