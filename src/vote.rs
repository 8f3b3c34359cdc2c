multiversx_sc::imports!();

use crate::errors::*;
use crate::math;
use crate::types::{CastVote, SessionState, Sponsor};

#[multiversx_sc::module]
pub trait VoteModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::config::ConfigModule
    + crate::session::SessionModule
{
    // ========================================================
    // ENDPOINT: submitVote
    // Weight is the voter's live ledger balance; the ledger
    // holds a transfer lock for the voting window, so the
    // weight cannot be re-used across addresses.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, proposal_votes: u64) {
        let caller = self.blockchain().get_caller();
        let session_id = self.voting_session_id();
        let weight = self.voting_weight_of(&caller);
        self.cast_vote(session_id, &caller, proposal_votes, weight);
    }

    // ========================================================
    // ENDPOINT: submitVoteOnBehalf
    // A sponsor spends each voter's own weight, never their
    // own. One failing voter rejects the whole batch.
    // ========================================================

    #[endpoint(submitVoteOnBehalf)]
    fn submit_vote_on_behalf(
        &self,
        proposal_votes: u64,
        voters: MultiValueEncoded<ManagedAddress>,
    ) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let session_id = self.voting_session_id();

        for voter in voters {
            require!(!self.self_managed(&voter).get(), ERR_VOTER_SELF_MANAGED);
            require!(!self.sponsor(&voter).is_empty(), ERR_NOT_SPONSOR);
            let sponsor = self.sponsor(&voter).get();
            require!(sponsor.delegate == caller, ERR_NOT_SPONSOR);
            require!(sponsor.valid_until >= now, ERR_SPONSOR_EXPIRED);

            let weight = self.voting_weight_of(&voter);
            self.cast_vote(session_id, &voter, proposal_votes, weight);
        }
    }

    // ========================================================
    // ENDPOINT: defineSponsor
    // ========================================================

    #[endpoint(defineSponsor)]
    fn define_sponsor(&self, delegate: ManagedAddress, valid_until: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        require!(valid_until >= now, ERR_SPONSOR_UNTIL_PAST);

        self.sponsor(&caller).set(Sponsor {
            delegate: delegate.clone(),
            valid_until,
        });
        self.sponsor_defined_event(&caller, &delegate, valid_until);
    }

    // ========================================================
    // ENDPOINT: setSelfManaged
    // Self-managed voters cannot be voted for by any sponsor.
    // ========================================================

    #[endpoint(setSelfManaged)]
    fn set_self_managed(&self, active: bool) {
        let caller = self.blockchain().get_caller();
        self.self_managed(&caller).set(active);
        self.self_managed_updated_event(&caller, active);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(sponsorOf)]
    fn sponsor_of(&self, voter: ManagedAddress) -> Sponsor<Self::Api> {
        self.sponsor(&voter).get()
    }

    #[view(lastVoteOf)]
    fn last_vote_of(&self, voter: ManagedAddress) -> CastVote<Self::Api> {
        self.last_vote(&voter).get()
    }

    #[view(isSelfManaged)]
    fn is_self_managed(&self, voter: ManagedAddress) -> bool {
        self.self_managed(&voter).get()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// The session currently accepting votes. Voting windows never overlap,
    /// and a follow-up session can only have been scheduled one id ahead of
    /// the one in VOTING, so two ids suffice.
    fn voting_session_id(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let current = self.current_session_id().get();
        if self.session_state_at(current, now) == SessionState::Voting {
            return current;
        }
        if current > self.oldest_session_id().get()
            && self.session_state_at(current - 1, now) == SessionState::Voting
        {
            return current - 1;
        }
        sc_panic!(ERR_SESSION_NOT_VOTING)
    }

    fn cast_vote(
        &self,
        session_id: u64,
        voter: &ManagedAddress,
        proposal_votes: u64,
        weight: BigUint,
    ) {
        require!(weight > 0u64, ERR_NO_VOTING_WEIGHT);

        let last_vote = self.last_vote(voter);
        require!(
            last_vote.is_empty() || !math::is_double_vote(last_vote.get().session_id, session_id),
            ERR_ALREADY_VOTED
        );

        let mut session = self.sessions(session_id).get();
        require!(proposal_votes != 0, ERR_EMPTY_VOTE);
        require!(
            session.proposals_count == 64
                || proposal_votes < (1u64 << session.proposals_count),
            ERR_VOTE_OUT_OF_RANGE
        );

        for proposal_id in 1..=session.proposals_count {
            if proposal_votes & math::proposal_bit(proposal_id) == 0 {
                continue;
            }
            let mut proposal = self.proposals(session_id, proposal_id).get();
            require!(!proposal.cancelled, ERR_PROPOSAL_CANCELLED);

            let group_mask = if proposal.alternative_of == 0 {
                proposal.alternatives_mask
            } else {
                self.proposals(session_id, proposal.alternative_of)
                    .get()
                    .alternatives_mask
            };
            require!(
                !math::conflicts_with_group(proposal_votes, group_mask, proposal_id),
                ERR_ALTERNATIVE_CONFLICT
            );

            proposal.approvals += &weight;
            self.proposals(session_id, proposal_id).set(&proposal);
        }

        session.participation += &weight;
        self.sessions(session_id).set(&session);

        self.last_vote(voter).set(CastVote {
            session_id,
            proposals: proposal_votes,
            weight: weight.clone(),
        });
        self.vote_cast_event(session_id, voter, proposal_votes, &weight);
    }
}
