multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Session State: derived from stored timestamps + query time
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    /// No session with this id exists (yet).
    Undefined,
    /// Scheduled, campaign has not started.
    Planned,
    /// Proposals can be defined, updated and cancelled.
    Campaign,
    /// Votes are accepted.
    Voting,
    /// Approved resolutions can be executed.
    Execution,
    /// Late execution window.
    Grace,
    /// Past the grace period. Eligible for archiving.
    Closed,
    /// Evicted from the retention window. Storage freed.
    Archived,
}

// ============================================================
// Proposal State
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// No proposal with this id exists in the session.
    Undefined,
    /// Defined during PLANNED/CAMPAIGN, still editable by its author.
    Defined,
    /// Cancelled by its author before voting started. Terminal.
    Cancelled,
    /// Voting in progress, no further edits.
    Locked,
    /// Met quorum and majority at vote close (and won its alternative
    /// group, if any). Executable until the session closes.
    Approved,
    /// Did not meet the requirements. Terminal.
    Rejected,
    /// Resolution action executed. Terminal.
    Resolved,
    /// Parent session archived.
    Archived,
}

// ============================================================
// Session Rule: tunable parameters, singleton
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SessionRule<M: ManagedTypeApi> {
    pub campaign_period: u64,
    pub voting_period: u64,
    pub execution_period: u64,
    pub grace_period: u64,
    /// Shifts the session grid so vote starts land on a chosen weekday/hour.
    pub period_offset: u64,
    /// Proposal count up to which the base threshold applies unchanged.
    pub open_proposals_limit: u8,
    /// Proposal cap for regular holders.
    pub max_proposals: u8,
    /// Higher proposal cap for privileged operators.
    pub max_proposals_operator: u8,
    /// Base voting weight required to define a proposal.
    pub new_proposal_threshold: BigUint<M>,
}

// ============================================================
// Session: one campaign→vote→execute→grace cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Session<M: ManagedTypeApi> {
    pub campaign_at: u64,
    pub vote_at: u64,
    pub execution_at: u64,
    pub grace_at: u64,
    pub closed_at: u64,
    pub proposals_count: u8,
    /// Cumulative weight that has voted at least once this session.
    pub participation: BigUint<M>,
    /// Ledger supply snapshot taken when the session was scheduled.
    pub total_supply: BigUint<M>,
    /// Snapshot supply minus the non-voting addresses' weight.
    pub voting_supply: BigUint<M>,
}

// ============================================================
// Proposal: a single decision item within a session
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub url: ManagedBuffer<M>,
    /// Opaque hash binding the off-chain proposal document.
    pub content_hash: ManagedBuffer<M>,
    pub proposed_by: ManagedAddress<M>,
    /// Where the resolution action is dispatched. Ignored for blank proposals.
    pub resolution_target: ManagedAddress<M>,
    /// Endpoint name of the resolution action. Empty = blank proposal.
    pub resolution_endpoint: ManagedBuffer<M>,
    /// Raw, pre-encoded call arguments.
    pub resolution_args: ManagedVec<M, ManagedBuffer<M>>,
    /// Requirement snapshot taken at definition time, parts-per-million.
    pub requirement_majority: u64,
    pub requirement_quorum: u64,
    pub execution_threshold: u64,
    /// Proposal id that must be resolved before this one. 0 = none.
    pub depends_on: u8,
    /// Group base this proposal is mutually exclusive with. 0 = none.
    pub alternative_of: u8,
    /// Bitmask of the full alternative group, maintained on the group base.
    pub alternatives_mask: u64,
    pub approvals: BigUint<M>,
    pub resolution_executed: bool,
    pub cancelled: bool,
}

// ============================================================
// Resolution Requirement: per (target, method) approval policy
// ============================================================

/// All three thresholds are parts-per-million of the session voting supply
/// (majority is measured against participation instead).
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResolutionRequirement {
    pub majority: u64,
    pub quorum: u64,
    pub execution_threshold: u64,
}

// ============================================================
// Sponsor: vote delegation
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Sponsor<M: ManagedTypeApi> {
    pub delegate: ManagedAddress<M>,
    pub valid_until: u64,
}

// ============================================================
// Cast Vote: one record per voter, latest session only
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CastVote<M: ManagedTypeApi> {
    pub session_id: u64,
    /// Bitmask of the proposal ids voted for.
    pub proposals: u64,
    pub weight: BigUint<M>,
}
