multiversx_sc::imports!();

use crate::types::{ResolutionRequirement, SessionRule};

// One event per state-changing entry point. This is the contract's only
// persisted log and is consumed by off-chain indexers as-is.

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("sessionScheduled")]
    fn session_scheduled_event(&self, #[indexed] session_id: u64, #[indexed] vote_at: u64);

    #[event("sessionArchived")]
    fn session_archived_event(&self, #[indexed] session_id: u64);

    #[event("sessionRuleUpdated")]
    fn session_rule_updated_event(
        &self,
        #[indexed] updated_by: &ManagedAddress,
        rule: &SessionRule<Self::Api>,
    );

    #[event("resolutionRequirementUpdated")]
    fn resolution_requirement_updated_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] method: &ManagedBuffer,
        requirement: &ResolutionRequirement,
    );

    #[event("proposalDefined")]
    fn proposal_defined_event(
        &self,
        #[indexed] session_id: u64,
        #[indexed] proposal_id: u8,
        #[indexed] proposed_by: &ManagedAddress,
    );

    #[event("proposalUpdated")]
    fn proposal_updated_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] session_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposals: u64,
        weight: &BigUint,
    );

    #[event("sponsorDefined")]
    fn sponsor_defined_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        valid_until: u64,
    );

    #[event("selfManagedUpdated")]
    fn self_managed_updated_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] active: bool);

    #[event("resolutionExecuted")]
    fn resolution_executed_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);
}
