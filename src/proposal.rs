multiversx_sc::imports!();

use crate::config::PRIV_DEFINE_PROPOSAL;
use crate::errors::*;
use crate::math;
use crate::types::{Proposal, SessionState};

#[multiversx_sc::module]
pub trait ProposalModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::config::ConfigModule
    + crate::session::SessionModule
    + crate::requirements::RequirementsModule
{
    // ========================================================
    // ENDPOINT: defineProposal
    // Attaches to the open session, or schedules the next one
    // when none is in PLANNED/CAMPAIGN. The weight required
    // grows quadratically once the open-proposals limit is
    // passed; operators bypass the weight gate but get their
    // own cap.
    // ========================================================

    #[endpoint(defineProposal)]
    fn define_proposal(
        &self,
        name: ManagedBuffer,
        url: ManagedBuffer,
        content_hash: ManagedBuffer,
        depends_on: u8,
        alternative_of: u8,
        resolution_target: ManagedAddress,
        resolution_endpoint: ManagedBuffer,
        resolution_args: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValue2<u64, u8> {
        let caller = self.blockchain().get_caller();
        let session_id = self.open_session_id();
        let mut session = self.sessions(session_id).get();
        let count = session.proposals_count;

        let rule = self.session_rule().get();
        let is_operator = self.caller_has_privilege(&caller, PRIV_DEFINE_PROPOSAL);
        let cap = if is_operator {
            rule.max_proposals_operator
        } else {
            rule.max_proposals
        };
        require!(count < cap, ERR_TOO_MANY_PROPOSALS);

        if !is_operator {
            let threshold = math::new_proposal_threshold(
                count,
                rule.open_proposals_limit,
                rule.max_proposals,
                &rule.new_proposal_threshold,
                &session.total_supply,
            );
            require!(
                self.voting_weight_of(&caller) >= threshold,
                ERR_PROPOSAL_THRESHOLD
            );
        }

        if !resolution_endpoint.is_empty() {
            require!(resolution_target != ManagedAddress::zero(), ERR_BLANK_TARGET);
        }

        let proposal_id = count + 1;
        require!(depends_on <= count, ERR_INVALID_DEPENDENCY);
        let alternatives_mask = self.attach_to_group(session_id, proposal_id, alternative_of, count);

        let requirement = self.requirement_for(&resolution_target, &resolution_endpoint);
        let mut args = ManagedVec::new();
        for arg in resolution_args {
            args.push(arg);
        }

        let proposal = Proposal {
            name,
            url,
            content_hash,
            proposed_by: caller.clone(),
            resolution_target,
            resolution_endpoint,
            resolution_args: args,
            requirement_majority: requirement.majority,
            requirement_quorum: requirement.quorum,
            execution_threshold: requirement.execution_threshold,
            depends_on,
            alternative_of,
            alternatives_mask,
            approvals: BigUint::zero(),
            resolution_executed: false,
            cancelled: false,
        };
        self.proposals(session_id, proposal_id).set(&proposal);

        session.proposals_count = proposal_id;
        self.sessions(session_id).set(&session);

        self.proposal_defined_event(session_id, proposal_id, &caller);
        (session_id, proposal_id).into()
    }

    // ========================================================
    // ENDPOINT: updateProposal
    // Author-only, and only while the session is still in
    // PLANNED/CAMPAIGN. Re-resolves the requirement snapshot
    // and the alternative-group bookkeeping.
    // ========================================================

    #[endpoint(updateProposal)]
    fn update_proposal(
        &self,
        proposal_id: u8,
        name: ManagedBuffer,
        url: ManagedBuffer,
        content_hash: ManagedBuffer,
        depends_on: u8,
        alternative_of: u8,
        resolution_target: ManagedAddress,
        resolution_endpoint: ManagedBuffer,
        resolution_args: MultiValueEncoded<ManagedBuffer>,
    ) {
        let caller = self.blockchain().get_caller();
        let session_id = self.require_open_session();
        let session = self.sessions(session_id).get();
        require!(
            proposal_id >= 1 && proposal_id <= session.proposals_count,
            ERR_UNKNOWN_PROPOSAL
        );

        let mut proposal = self.proposals(session_id, proposal_id).get();
        require!(!proposal.cancelled, ERR_PROPOSAL_CANCELLED);
        require!(proposal.proposed_by == caller, ERR_NOT_AUTHOR);

        if !resolution_endpoint.is_empty() {
            require!(resolution_target != ManagedAddress::zero(), ERR_BLANK_TARGET);
        }
        require!(depends_on < proposal_id, ERR_INVALID_DEPENDENCY);

        if alternative_of != proposal.alternative_of {
            // A group base cannot be re-parented while siblings point at it.
            require!(
                alternative_of == 0 || proposal.alternatives_mask == 0,
                ERR_INVALID_ALTERNATIVE
            );
            self.detach_from_group(session_id, proposal_id, proposal.alternative_of);
            proposal.alternatives_mask =
                self.attach_to_group(session_id, proposal_id, alternative_of, proposal_id - 1);
            proposal.alternative_of = alternative_of;
        }

        let requirement = self.requirement_for(&resolution_target, &resolution_endpoint);
        let mut args = ManagedVec::new();
        for arg in resolution_args {
            args.push(arg);
        }

        proposal.name = name;
        proposal.url = url;
        proposal.content_hash = content_hash;
        proposal.resolution_target = resolution_target;
        proposal.resolution_endpoint = resolution_endpoint;
        proposal.resolution_args = args;
        proposal.requirement_majority = requirement.majority;
        proposal.requirement_quorum = requirement.quorum;
        proposal.execution_threshold = requirement.execution_threshold;
        proposal.depends_on = depends_on;
        self.proposals(session_id, proposal_id).set(&proposal);

        self.proposal_updated_event(session_id, proposal_id);
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u8) {
        let caller = self.blockchain().get_caller();
        let session_id = self.require_open_session();
        let session = self.sessions(session_id).get();
        require!(
            proposal_id >= 1 && proposal_id <= session.proposals_count,
            ERR_UNKNOWN_PROPOSAL
        );

        let mut proposal = self.proposals(session_id, proposal_id).get();
        require!(proposal.proposed_by == caller, ERR_NOT_AUTHOR);
        require!(!proposal.cancelled, ERR_ALREADY_CANCELLED);

        proposal.cancelled = true;
        self.proposals(session_id, proposal_id).set(&proposal);

        self.proposal_cancelled_event(session_id, proposal_id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, session_id: u64, proposal_id: u8) -> Proposal<Self::Api> {
        self.proposals(session_id, proposal_id).get()
    }

    #[view(getProposalData)]
    fn get_proposal_data(
        &self,
        session_id: u64,
        proposal_id: u8,
    ) -> MultiValue10<ManagedAddress, u64, u64, u64, u8, u8, u64, BigUint, bool, bool> {
        let proposal = self.proposals(session_id, proposal_id).get();
        (
            proposal.proposed_by,
            proposal.requirement_majority,
            proposal.requirement_quorum,
            proposal.execution_threshold,
            proposal.depends_on,
            proposal.alternative_of,
            proposal.alternatives_mask,
            proposal.approvals,
            proposal.resolution_executed,
            proposal.cancelled,
        )
            .into()
    }

    #[view(getSessionProposals)]
    fn get_session_proposals(
        &self,
        session_id: u64,
        from: u8,
        count: u8,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 || self.sessions(session_id).is_empty() {
            return result;
        }
        let total = self.sessions(session_id).get().proposals_count;
        let start = if from == 0 { 1u8 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_id in start..=end {
            result.push(self.proposals(session_id, proposal_id).get());
        }
        result
    }

    /// Weight a holder must carry to define proposal `proposals_count + 1`
    /// in the given session, under the current rule.
    #[view(newProposalThresholdAt)]
    fn new_proposal_threshold_at(&self, session_id: u64, proposals_count: u8) -> BigUint {
        require!(
            session_id >= 1
                && session_id >= self.oldest_session_id().get()
                && session_id <= self.current_session_id().get(),
            ERR_UNKNOWN_SESSION
        );
        let session = self.sessions(session_id).get();
        let rule = self.session_rule().get();
        math::new_proposal_threshold(
            proposals_count,
            rule.open_proposals_limit,
            rule.max_proposals,
            &rule.new_proposal_threshold,
            &session.total_supply,
        )
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Session accepting proposals right now, scheduling a fresh one when
    /// none is in PLANNED/CAMPAIGN.
    fn open_session_id(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let current = self.current_session_id().get();
        if current >= 1
            && matches!(
                self.session_state_at(current, now),
                SessionState::Planned | SessionState::Campaign
            )
        {
            current
        } else {
            self.schedule_session()
        }
    }

    /// Like `open_session_id`, but failing instead of scheduling. Updates
    /// and cancellations never open a new session.
    fn require_open_session(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let current = self.current_session_id().get();
        require!(
            current >= 1
                && matches!(
                    self.session_state_at(current, now),
                    SessionState::Planned | SessionState::Campaign
                ),
            ERR_SESSION_NOT_OPEN
        );
        current
    }

    /// Registers `proposal_id` in the alternative group rooted at
    /// `alternative_of` and returns the mask to store on the new member.
    /// The full group mask is kept on the base proposal.
    fn attach_to_group(
        &self,
        session_id: u64,
        proposal_id: u8,
        alternative_of: u8,
        defined_count: u8,
    ) -> u64 {
        if alternative_of == 0 {
            return 0;
        }
        require!(
            alternative_of >= 1 && alternative_of <= defined_count,
            ERR_INVALID_ALTERNATIVE
        );
        let mut base = self.proposals(session_id, alternative_of).get();
        require!(base.alternative_of == 0 && !base.cancelled, ERR_INVALID_ALTERNATIVE);

        if base.alternatives_mask == 0 {
            base.alternatives_mask = math::proposal_bit(alternative_of);
        }
        base.alternatives_mask |= math::proposal_bit(proposal_id);
        self.proposals(session_id, alternative_of).set(&base);
        0
    }

    fn detach_from_group(&self, session_id: u64, proposal_id: u8, old_alternative_of: u8) {
        if old_alternative_of == 0 {
            return;
        }
        let mut base = self.proposals(session_id, old_alternative_of).get();
        base.alternatives_mask &= !math::proposal_bit(proposal_id);
        if base.alternatives_mask == math::proposal_bit(old_alternative_of) {
            base.alternatives_mask = 0;
        }
        self.proposals(session_id, old_alternative_of).set(&base);
    }
}
