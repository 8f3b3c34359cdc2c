// Pure arithmetic behind the session engine. Everything here is a function
// of its arguments only, so session and proposal states can be recomputed
// at any query time instead of being stored.

use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::BigUint;

use crate::types::SessionState;

/// Requirement fractions are expressed in parts-per-million.
pub const PPM: u64 = 1_000_000;

/// State of a session with the given timestamps, observed at `at`.
///
/// Non-decreasing step function of `at`; UNDEFINED/ARCHIVED are storage
/// properties and are resolved by the caller.
pub fn session_state(
    campaign_at: u64,
    vote_at: u64,
    execution_at: u64,
    grace_at: u64,
    closed_at: u64,
    at: u64,
) -> SessionState {
    if at < campaign_at {
        SessionState::Planned
    } else if at < vote_at {
        SessionState::Campaign
    } else if at < execution_at {
        SessionState::Voting
    } else if at < grace_at {
        SessionState::Execution
    } else if at < closed_at {
        SessionState::Grace
    } else {
        SessionState::Closed
    }
}

/// Next aligned vote start: the smallest `vote_at >= at + campaign_period`
/// with `vote_at % full_period == period_offset`. Sessions therefore run
/// on a stable cadence instead of drifting with each proposal.
pub fn next_vote_at(at: u64, campaign_period: u64, full_period: u64, period_offset: u64) -> u64 {
    let earliest = at + campaign_period;
    let base = earliest.saturating_sub(period_offset);
    base.div_ceil(full_period) * full_period + period_offset
}

/// Weight required to define proposal number `proposals_count + 1`.
///
/// Flat at `base_threshold` up to `open_proposals_limit`, then grows with
/// the square of the excess, scaled so that the threshold at `max_proposals`
/// equals half the snapshot supply:
///
/// `(count - open)^2 * (total_supply / 2 - base) / (max - open)^2 + base`
///
/// Floor division throughout. The curve keeps growing past `max_proposals`;
/// the proposal caps, not the price, are what stop counts from reaching it.
pub fn new_proposal_threshold<M: ManagedTypeApi>(
    proposals_count: u8,
    open_proposals_limit: u8,
    max_proposals: u8,
    base_threshold: &BigUint<M>,
    total_supply: &BigUint<M>,
) -> BigUint<M> {
    if max_proposals <= open_proposals_limit
        || proposals_count <= open_proposals_limit
        || total_supply <= base_threshold
    {
        return base_threshold.clone();
    }

    let excess = (proposals_count - open_proposals_limit) as u64;
    let span = (max_proposals - open_proposals_limit) as u64;
    let scale = total_supply.clone() / 2u64 - base_threshold;
    scale * (excess * excess) / (span * span) + base_threshold
}

/// Quorum and majority check, both in parts-per-million:
/// approvals against participation, participation against voting supply.
pub fn is_approved<M: ManagedTypeApi>(
    approvals: &BigUint<M>,
    participation: &BigUint<M>,
    voting_supply: &BigUint<M>,
    majority_ppm: u64,
    quorum_ppm: u64,
) -> bool {
    approvals * PPM >= participation * majority_ppm
        && participation * PPM >= voting_supply * quorum_ppm
}

/// Execution gate: approvals against voting supply, independent of majority.
pub fn meets_execution_threshold<M: ManagedTypeApi>(
    approvals: &BigUint<M>,
    voting_supply: &BigUint<M>,
    execution_threshold_ppm: u64,
) -> bool {
    approvals * PPM >= voting_supply * execution_threshold_ppm
}

/// Session periods and the grid offset share the same protocol bounds.
pub fn period_in_bounds(period: u64, min: u64, max: u64) -> bool {
    (min..=max).contains(&period)
}

/// Proposal caps must nest: open limit within the holder cap, holder cap
/// within the operator cap, operator cap within the bitmask width.
pub fn proposal_caps_valid(
    open_proposals_limit: u8,
    max_proposals: u8,
    max_proposals_operator: u8,
    hard_limit: u8,
) -> bool {
    max_proposals >= 1
        && open_proposals_limit <= max_proposals
        && max_proposals <= max_proposals_operator
        && max_proposals_operator <= hard_limit
}

/// A retained ballot blocks a second one in the same session. Ballots in a
/// later session overwrite the record instead.
pub fn is_double_vote(last_vote_session_id: u64, session_id: u64) -> bool {
    last_vote_session_id == session_id
}

/// Execution dependency gate: absent (0) or already resolved.
pub fn dependency_satisfied(depends_on: u8, dependency_executed: bool) -> bool {
    depends_on == 0 || dependency_executed
}

/// Only fully CLOSED sessions leave the retention window.
pub fn session_archivable(state: SessionState) -> bool {
    state == SessionState::Closed
}

/// Bit of a proposal id inside a vote bitmask. Ids start at 1.
pub fn proposal_bit(proposal_id: u8) -> u64 {
    1u64 << (proposal_id - 1)
}

/// A vote bitmask conflicts with an alternative group when it selects any
/// group member other than exactly `proposal_id`.
pub fn conflicts_with_group(votes: u64, group_mask: u64, proposal_id: u8) -> bool {
    group_mask != 0 && (votes & group_mask) != proposal_bit(proposal_id)
}
