multiversx_sc::imports!();

use crate::types::{CastVote, Proposal, ResolutionRequirement, Session, SessionRule, Sponsor};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Collaborators ──

    #[storage_mapper("tokenLedgerAddress")]
    fn token_ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("accessControlAddress")]
    fn access_control_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Rules ──

    #[storage_mapper("sessionRule")]
    fn session_rule(&self) -> SingleValueMapper<SessionRule<Self::Api>>;

    /// Weight of these addresses is excluded from the quorum denominator.
    #[storage_mapper("nonVotingAddresses")]
    fn non_voting_addresses(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Wildcard default lives under (zero address, empty method).
    #[storage_mapper("resolutionRequirements")]
    fn resolution_requirement(
        &self,
        target: &ManagedAddress,
        method: &ManagedBuffer,
    ) -> SingleValueMapper<ResolutionRequirement>;

    // ── Sessions ──

    #[storage_mapper("sessions")]
    fn sessions(&self, session_id: u64) -> SingleValueMapper<Session<Self::Api>>;

    #[view(getCurrentSessionId)]
    #[storage_mapper("currentSessionId")]
    fn current_session_id(&self) -> SingleValueMapper<u64>;

    #[view(getOldestSessionId)]
    #[storage_mapper("oldestSessionId")]
    fn oldest_session_id(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, session_id: u64, proposal_id: u8) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Voters ──

    #[storage_mapper("sponsors")]
    fn sponsor(&self, voter: &ManagedAddress) -> SingleValueMapper<Sponsor<Self::Api>>;

    #[storage_mapper("selfManaged")]
    fn self_managed(&self, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    /// Only the latest vote per voter is retained; the session id inside the
    /// record is the double-vote check.
    #[storage_mapper("lastVotes")]
    fn last_vote(&self, voter: &ManagedAddress) -> SingleValueMapper<CastVote<Self::Api>>;
}
