//! Vote weight aggregation and eligibility over loaded vote markers.
//!
//! Markers are parallel to positions: `markers[i]` belongs to `positions[i]`
//! and is `None` when that position has not voted on the proposal yet.
use voter_stake_registry_shared::types::{PositionWithMeta, VoteMarker};

/// How a position takes part in a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    /// The holder votes with the position.
    Direct,
    /// The wallet votes as the position's current delegate.
    Delegated,
}

/// Sums marker weights per choice index.
///
/// The result has one entry per proposal choice; a marker recording a choice
/// past the end grows the vector.
pub fn aggregate_vote_weights(num_choices: usize, markers: &[Option<VoteMarker>]) -> Vec<u128> {
    let mut weights = vec![0u128; num_choices];
    for marker in markers.iter().flatten() {
        for &choice in &marker.choices {
            let idx = choice as usize;
            if idx >= weights.len() {
                weights.resize(idx + 1, 0);
            }
            weights[idx] = weights[idx].saturating_add(marker.weight);
        }
    }
    weights
}

fn max_choices_reached(marker: &VoteMarker, max_choices_per_voter: u16) -> bool {
    marker.choice_count() >= max_choices_per_voter as usize
}

/// A delegate further down the chain than the one that voted now holds the
/// position's voting rights.
fn earlier_delegate_voted(position: Option<&PositionWithMeta>, marker: &VoteMarker) -> bool {
    position
        .and_then(|position| position.voting_delegation.as_ref())
        .is_some_and(|delegation| delegation.index() > marker.delegation_index)
}

/// Whether any position can still vote for `choice`.
///
/// Fails closed: returns `false` until markers are loaded.
pub fn can_vote(
    choice: u16,
    max_choices_per_voter: u16,
    positions: &[PositionWithMeta],
    markers: Option<&[Option<VoteMarker>]>,
) -> bool {
    let Some(markers) = markers else {
        return false;
    };
    markers.iter().enumerate().any(|(index, marker)| match marker {
        None => true,
        Some(marker) => {
            !max_choices_reached(marker, max_choices_per_voter)
                && !marker.has_choice(choice)
                && !earlier_delegate_voted(positions.get(index), marker)
        }
    })
}

/// Decides how `position` votes for `choice`, or `None` to leave it out.
pub fn vote_kind(
    choice: u16,
    max_choices_per_voter: u16,
    position: &PositionWithMeta,
    marker: Option<&VoteMarker>,
) -> Option<VoteKind> {
    if let Some(marker) = marker {
        if marker.has_choice(choice) || max_choices_reached(marker, max_choices_per_voter) {
            return None;
        }
    }

    if !position.is_voting_delegated_to_me {
        return Some(VoteKind::Direct);
    }

    // voting was taken over further down the delegation chain
    match marker {
        Some(marker) if marker.delegation_index < position.delegation_index() => None,
        _ => Some(VoteKind::Delegated),
    }
}
