//! Vote hook: vote weights, eligibility and vote submission for one proposal.
mod eligibility;

use std::sync::Arc;

use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use tracing::{debug, info, instrument};
use voter_stake_registry_shared::types::{Proposal, ProposalConfig, VoteMarker};

pub use eligibility::{aggregate_vote_weights, can_vote, vote_kind, VoteKind};

use crate::sdk::instructions::{delegated_vote_v0, vote_v0};
use crate::sdk::pda::vote_marker_key;
use crate::{AsyncAction, GovernanceProvider, HooksError, VsrState};

/// Voting on a single proposal with the wallet's positions.
///
/// Markers are loaded with [`UseVote::load_markers`] (or set directly) and
/// stay parallel to `state.positions`.
pub struct UseVote<P: ?Sized> {
    provider: Arc<P>,
    proposal_key: Pubkey,
    proposal: Option<Proposal>,
    proposal_config: Option<ProposalConfig>,
    state: VsrState,
    markers: Option<Vec<Option<VoteMarker>>>,
    action: AsyncAction,
}

impl<P: GovernanceProvider + ?Sized> UseVote<P> {
    pub fn new(provider: Arc<P>, proposal_key: Pubkey, state: VsrState) -> Self {
        Self {
            provider,
            proposal_key,
            proposal: None,
            proposal_config: None,
            state,
            markers: None,
            action: AsyncAction::new(),
        }
    }

    /// Attaches the loaded proposal and its config.
    ///
    /// # Errors
    ///
    /// Returns `HooksError::Validation` if `proposal` is not the account at
    /// the hook's proposal key, or `config` is not the proposal's config.
    pub fn with_proposal(
        mut self,
        proposal: Proposal,
        config: ProposalConfig,
    ) -> Result<Self, HooksError> {
        if proposal.pubkey != self.proposal_key {
            return Err(HooksError::validation(format!(
                "Proposal {} does not match {}",
                proposal.pubkey, self.proposal_key
            )));
        }
        if config.pubkey != proposal.proposal_config {
            return Err(HooksError::validation(format!(
                "Proposal config {} does not belong to proposal {}",
                config.pubkey, proposal.pubkey
            )));
        }
        self.proposal = Some(proposal);
        self.proposal_config = Some(config);
        Ok(self)
    }

    pub fn proposal_key(&self) -> &Pubkey {
        &self.proposal_key
    }

    pub fn state(&self) -> &VsrState {
        &self.state
    }

    /// Vote marker addresses, one per position.
    pub fn vote_marker_keys(&self) -> Vec<Pubkey> {
        self.state
            .positions()
            .iter()
            .map(|position| vote_marker_key(&position.position.mint, &self.proposal_key).0)
            .collect()
    }

    /// Fetches the vote markers of every position.
    ///
    /// Leaves markers unloaded while positions are.
    #[instrument(skip(self), fields(proposal = %self.proposal_key))]
    pub async fn load_markers(&mut self) -> Result<(), HooksError> {
        if self.state.positions.is_none() {
            debug!("Positions not loaded, skipping vote markers");
            self.markers = None;
            return Ok(());
        }

        let keys = self.vote_marker_keys();
        let markers = self.provider.fetch_vote_markers(&keys).await?;
        if markers.len() != keys.len() {
            return Err(HooksError::validation(format!(
                "Expected {} vote markers, received {}",
                keys.len(),
                markers.len()
            )));
        }

        debug!(
            positions = keys.len(),
            voted = markers.iter().flatten().count(),
            "Loaded vote markers"
        );
        self.markers = Some(markers);
        Ok(())
    }

    pub fn set_markers(&mut self, markers: Vec<Option<VoteMarker>>) {
        self.markers = Some(markers);
    }

    pub fn markers(&self) -> Option<&[Option<VoteMarker>]> {
        self.markers.as_deref()
    }

    /// Weight cast for each choice, `None` until the proposal and markers are
    /// loaded.
    pub fn vote_weights(&self) -> Option<Vec<u128>> {
        let proposal = self.proposal.as_ref()?;
        let markers = self.markers.as_deref()?;
        Some(aggregate_vote_weights(proposal.choices.len(), markers))
    }

    pub fn can_vote(&self, choice: u16) -> bool {
        can_vote(
            choice,
            self.max_choices_per_voter(),
            self.state.positions(),
            self.markers.as_deref(),
        )
    }

    fn max_choices_per_voter(&self) -> u16 {
        self.proposal
            .as_ref()
            .map_or(0, |proposal| proposal.max_choices_per_voter)
    }

    /// Assembles one vote instruction per position able to vote for `choice`.
    pub fn vote_instructions(
        &self,
        wallet: &Pubkey,
        choice: u16,
    ) -> Result<Vec<Instruction>, HooksError> {
        let (Some(proposal), Some(config)) = (&self.proposal, &self.proposal_config) else {
            return Err(HooksError::validation("Proposal not loaded"));
        };
        let max_choices = proposal.max_choices_per_voter;
        let markers = self.markers.as_deref().unwrap_or_default();

        let mut instructions = Vec::new();
        for (index, position) in self.state.positions().iter().enumerate() {
            let marker = markers.get(index).and_then(Option::as_ref);
            match vote_kind(choice, max_choices, position, marker) {
                Some(VoteKind::Direct) => {
                    instructions.push(vote_v0(wallet, position, proposal, config, choice)?);
                }
                Some(VoteKind::Delegated) => {
                    let registrar = self
                        .state
                        .registrar
                        .as_ref()
                        .map_or(position.position.registrar, |registrar| registrar.pubkey);
                    instructions.push(delegated_vote_v0(
                        wallet, position, &registrar, proposal, config, choice,
                    )?);
                }
                None => debug!(position = %position.pubkey, choice, "Position cannot vote"),
            }
        }
        Ok(instructions)
    }

    /// Votes for `choice` with every eligible position.
    ///
    /// # Errors
    ///
    /// Fails without a wallet session or positions, while a previous vote is
    /// still pending, or with the provider's error when submission fails.
    #[instrument(skip(self), fields(proposal = %self.proposal_key))]
    pub async fn vote(&self, choice: u16) -> Result<(), HooksError> {
        self.action
            .execute(async {
                let wallet = match self.provider.wallet() {
                    Some(wallet) if !self.state.positions().is_empty() => wallet,
                    _ => return Err(HooksError::no_positions()),
                };

                let instructions = self.vote_instructions(&wallet, choice)?;
                info!(
                    choice,
                    instructions = instructions.len(),
                    "Submitting vote instructions"
                );
                self.provider
                    .batch_parallel_instructions(instructions)
                    .await?;
                Ok(())
            })
            .await
    }

    pub fn loading(&self) -> bool {
        self.action.loading()
    }

    pub fn error(&self) -> Option<HooksError> {
        self.action.error()
    }
}
