// Pure engine arithmetic: session state derivation, schedule quantization,
// the proposal threshold curve, and the approval checks. Managed types are
// instantiated through StaticApi, no VM needed.

use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

use voting_session::math;
use voting_session::types::SessionState;

type Big = BigUint<StaticApi>;

const CAMPAIGN_AT: u64 = 1_000;
const VOTE_AT: u64 = 2_000;
const EXECUTION_AT: u64 = 3_000;
const GRACE_AT: u64 = 4_000;
const CLOSED_AT: u64 = 5_000;

fn state_at(at: u64) -> SessionState {
    math::session_state(CAMPAIGN_AT, VOTE_AT, EXECUTION_AT, GRACE_AT, CLOSED_AT, at)
}

fn state_rank(state: SessionState) -> u8 {
    match state {
        SessionState::Undefined => 0,
        SessionState::Planned => 1,
        SessionState::Campaign => 2,
        SessionState::Voting => 3,
        SessionState::Execution => 4,
        SessionState::Grace => 5,
        SessionState::Closed => 6,
        SessionState::Archived => 7,
    }
}

// ============================================================
// Session state
// ============================================================

#[test]
fn session_state_window_boundaries() {
    assert_eq!(state_at(0), SessionState::Planned);
    assert_eq!(state_at(CAMPAIGN_AT - 1), SessionState::Planned);
    assert_eq!(state_at(CAMPAIGN_AT), SessionState::Campaign);
    assert_eq!(state_at(VOTE_AT - 1), SessionState::Campaign);
    assert_eq!(state_at(VOTE_AT), SessionState::Voting);
    assert_eq!(state_at(EXECUTION_AT - 1), SessionState::Voting);
    assert_eq!(state_at(EXECUTION_AT), SessionState::Execution);
    assert_eq!(state_at(GRACE_AT - 1), SessionState::Execution);
    assert_eq!(state_at(GRACE_AT), SessionState::Grace);
    assert_eq!(state_at(CLOSED_AT - 1), SessionState::Grace);
    assert_eq!(state_at(CLOSED_AT), SessionState::Closed);
    assert_eq!(state_at(u64::MAX), SessionState::Closed);
}

#[test]
fn session_state_is_a_non_decreasing_step_function() {
    let mut previous = state_rank(state_at(0));
    for at in 0..6_000 {
        let rank = state_rank(state_at(at));
        assert!(rank >= previous, "state regressed at t={at}");
        previous = rank;
    }
}

#[test]
fn session_state_is_pure() {
    for at in [0, CAMPAIGN_AT, VOTE_AT + 37, GRACE_AT, CLOSED_AT + 123] {
        assert_eq!(state_at(at), state_at(at));
    }
}

// ============================================================
// Schedule quantization
// ============================================================

#[test]
fn next_vote_at_is_aligned_and_respects_campaign_period() {
    let campaign = 30;
    let full = 100;
    let offset = 7;
    for at in 0..1_000 {
        let vote_at = math::next_vote_at(at, campaign, full, offset);
        assert_eq!((vote_at - offset) % full, 0, "off-grid at t={at}");
        assert!(vote_at >= at + campaign, "campaign squeezed at t={at}");
        // Minimal: one grid step earlier would not leave room for campaign.
        assert!(vote_at - full < at + campaign, "not minimal at t={at}");
    }
}

#[test]
fn next_vote_at_keeps_a_stable_cadence() {
    let campaign = 5 * 86_400;
    let full = 14 * 86_400;
    let offset = 2 * 86_400;
    let first = math::next_vote_at(1_700_000_000, campaign, full, offset);
    let second = math::next_vote_at(first, campaign, full, offset);
    let third = math::next_vote_at(second, campaign, full, offset);
    assert_eq!((first - offset) % full, 0);
    assert_eq!(second - first, full);
    assert_eq!(third - second, full);
}

#[test]
fn next_vote_at_exact_grid_hit() {
    // earliest = 77 + 30 = 107 sits exactly on the grid.
    assert_eq!(math::next_vote_at(77, 30, 100, 7), 107);
    // One second later rolls over to the next grid slot.
    assert_eq!(math::next_vote_at(78, 30, 100, 7), 207);
}

// ============================================================
// Proposal threshold curve
// ============================================================

const OPEN_LIMIT: u8 = 5;
const MAX_PROPOSALS: u8 = 20;

fn threshold(count: u8) -> Big {
    math::new_proposal_threshold(
        count,
        OPEN_LIMIT,
        MAX_PROPOSALS,
        &Big::from(1u64),
        &Big::from(8_000_100u64),
    )
}

#[test]
fn proposal_threshold_anchor_points() {
    assert_eq!(threshold(0), Big::from(1u64));
    assert_eq!(threshold(5), Big::from(1u64));
    assert_eq!(threshold(12), Big::from(871_122u64));
    assert_eq!(threshold(20), Big::from(4_000_050u64));
    assert_eq!(threshold(100), Big::from(160_446_410u64));
}

#[test]
fn proposal_threshold_is_monotonically_non_decreasing() {
    let mut previous = threshold(0);
    for count in 1..=110u8 {
        let current = threshold(count);
        assert!(current >= previous, "threshold dropped at count={count}");
        previous = current;
    }
}

#[test]
fn proposal_threshold_strictly_increases_past_the_open_limit() {
    for count in OPEN_LIMIT + 1..=110u8 {
        assert!(threshold(count + 1) > threshold(count));
    }
}

#[test]
fn proposal_threshold_degenerate_rules_stay_at_base() {
    // max <= open limit disables the curve entirely.
    let flat = math::new_proposal_threshold(
        50,
        10,
        10,
        &Big::from(42u64),
        &Big::from(8_000_100u64),
    );
    assert_eq!(flat, Big::from(42u64));
    // A supply below the base threshold cannot scale it.
    let tiny = math::new_proposal_threshold(
        12,
        OPEN_LIMIT,
        MAX_PROPOSALS,
        &Big::from(1_000u64),
        &Big::from(999u64),
    );
    assert_eq!(tiny, Big::from(1_000u64));
}

// ============================================================
// Approval arithmetic
// ============================================================

const MAJORITY: u64 = 500_000;
const QUORUM: u64 = 200_000;

#[test]
fn approval_on_the_reference_session() {
    let voting_supply = Big::from(21_000_001u64);
    let participation = Big::from(7_000_100u64);

    // Every participant approved: quorum and majority both met.
    assert!(math::is_approved(
        &Big::from(7_000_100u64),
        &participation,
        &voting_supply,
        MAJORITY,
        QUORUM,
    ));
    // No votes at all: rejected.
    assert!(!math::is_approved(
        &Big::from(0u64),
        &participation,
        &voting_supply,
        MAJORITY,
        QUORUM,
    ));
    // Exactly half the participation meets a 50% majority.
    assert!(math::is_approved(
        &Big::from(3_500_050u64),
        &participation,
        &voting_supply,
        MAJORITY,
        QUORUM,
    ));
    assert!(!math::is_approved(
        &Big::from(3_500_049u64),
        &participation,
        &voting_supply,
        MAJORITY,
        QUORUM,
    ));
}

#[test]
fn quorum_boundary_is_exact() {
    let voting_supply = Big::from(21_000_001u64);
    // 20% of 21,000,001 is 4,200,000.2: integer participation must exceed it.
    let below = Big::from(4_200_000u64);
    let above = Big::from(4_200_001u64);
    assert!(!math::is_approved(&below.clone(), &below, &voting_supply, MAJORITY, QUORUM));
    assert!(math::is_approved(&above.clone(), &above, &voting_supply, MAJORITY, QUORUM));
}

#[test]
fn execution_threshold_is_independent_of_majority() {
    let voting_supply = Big::from(1_000_000u64);
    // 10% execution threshold.
    assert!(math::meets_execution_threshold(
        &Big::from(100_000u64),
        &voting_supply,
        100_000,
    ));
    assert!(!math::meets_execution_threshold(
        &Big::from(99_999u64),
        &voting_supply,
        100_000,
    ));
    // Zero threshold always passes.
    assert!(math::meets_execution_threshold(
        &Big::from(0u64),
        &voting_supply,
        0,
    ));
}

// ============================================================
// Session rule validation
// ============================================================

#[test]
fn periods_and_offset_share_the_same_bounds() {
    let min = 300;
    let max = 3_650 * 86_400;
    assert!(math::period_in_bounds(min, min, max));
    assert!(math::period_in_bounds(max, min, max));
    assert!(math::period_in_bounds(86_400, min, max));
    // A zero or sub-minimum offset is rejected like any other period.
    assert!(!math::period_in_bounds(0, min, max));
    assert!(!math::period_in_bounds(min - 1, min, max));
    assert!(!math::period_in_bounds(max + 1, min, max));
}

#[test]
fn proposal_caps_must_nest() {
    assert!(math::proposal_caps_valid(5, 20, 25, 64));
    assert!(math::proposal_caps_valid(0, 1, 1, 64));
    assert!(math::proposal_caps_valid(64, 64, 64, 64));
    // A zero holder cap disables proposals entirely.
    assert!(!math::proposal_caps_valid(0, 0, 0, 64));
    // Open limit above the holder cap.
    assert!(!math::proposal_caps_valid(21, 20, 25, 64));
    // Holder cap above the operator cap.
    assert!(!math::proposal_caps_valid(5, 26, 25, 64));
    // Operator cap above the bitmask width.
    assert!(!math::proposal_caps_valid(5, 20, 65, 64));
}

// ============================================================
// Ballot and execution gates
// ============================================================

#[test]
fn a_second_ballot_in_the_same_session_is_rejected() {
    assert!(math::is_double_vote(7, 7));
    // Ballots in other sessions never block; later sessions overwrite.
    assert!(!math::is_double_vote(6, 7));
    assert!(!math::is_double_vote(8, 7));
}

#[test]
fn execution_waits_for_the_dependency() {
    // No dependency at all.
    assert!(math::dependency_satisfied(0, false));
    // Dependency defined but not yet resolved.
    assert!(!math::dependency_satisfied(3, false));
    // Dependency resolved, in this batch or an earlier one.
    assert!(math::dependency_satisfied(3, true));
}

#[test]
fn only_closed_sessions_can_be_archived() {
    for at in [0, CAMPAIGN_AT, VOTE_AT, EXECUTION_AT, GRACE_AT, CLOSED_AT - 1] {
        assert!(
            !math::session_archivable(state_at(at)),
            "archivable before close at t={at}"
        );
    }
    assert!(math::session_archivable(state_at(CLOSED_AT)));
    assert!(!math::session_archivable(SessionState::Archived));
}

// ============================================================
// Vote bitmasks and alternative groups
// ============================================================

#[test]
fn proposal_bits_start_at_one() {
    assert_eq!(math::proposal_bit(1), 0b0001);
    assert_eq!(math::proposal_bit(4), 0b1000);
    assert_eq!(math::proposal_bit(64), 1u64 << 63);
}

#[test]
fn voting_for_two_group_members_conflicts() {
    // Proposals 2 and 3 are alternatives of each other.
    let group_mask = 0b0110;

    // Selecting exactly one member is fine.
    assert!(!math::conflicts_with_group(0b0010, group_mask, 2));
    assert!(!math::conflicts_with_group(0b0100, group_mask, 3));
    // Selecting both siblings conflicts, seen from either member.
    assert!(math::conflicts_with_group(0b0110, group_mask, 2));
    assert!(math::conflicts_with_group(0b0110, group_mask, 3));
    // Proposals outside the group do not interfere.
    assert!(!math::conflicts_with_group(0b1010, group_mask, 2));
    // No group, no conflict.
    assert!(!math::conflicts_with_group(0b0110, 0, 2));
}
