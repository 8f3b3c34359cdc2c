multiversx_sc::imports!();

use crate::errors::*;
use crate::math;
use crate::types::{ProposalState, SessionState};

#[multiversx_sc::module]
pub trait ExecuteModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::config::ConfigModule
    + crate::session::SessionModule
{
    // ========================================================
    // ENDPOINT: executeResolutions
    // Ids must arrive in dependency order: executing an id
    // whose dependsOn is still unresolved fails instead of
    // being reordered. A failing dispatch aborts the whole
    // batch; nothing is isolated per id.
    // ========================================================

    #[endpoint(executeResolutions)]
    fn execute_resolutions(&self, session_id: u64, proposal_ids: MultiValueEncoded<u8>) {
        let now = self.blockchain().get_block_timestamp();
        let state = self.session_state_at(session_id, now);
        require!(
            state == SessionState::Execution || state == SessionState::Grace,
            ERR_SESSION_NOT_EXECUTABLE
        );

        let session = self.sessions(session_id).get();
        for proposal_id in proposal_ids {
            require!(
                proposal_id >= 1 && proposal_id <= session.proposals_count,
                ERR_UNKNOWN_PROPOSAL
            );
            let mut proposal = self.proposals(session_id, proposal_id).get();
            require!(!proposal.cancelled, ERR_PROPOSAL_CANCELLED);
            require!(!proposal.resolution_executed, ERR_ALREADY_EXECUTED);
            require!(self.proposal_approval(session_id, proposal_id), ERR_NOT_APPROVED);
            require!(
                math::meets_execution_threshold(
                    &proposal.approvals,
                    &session.voting_supply,
                    proposal.execution_threshold,
                ),
                ERR_EXECUTION_THRESHOLD
            );
            let dependency_executed = proposal.depends_on != 0
                && self
                    .proposals(session_id, proposal.depends_on)
                    .get()
                    .resolution_executed;
            require!(
                math::dependency_satisfied(proposal.depends_on, dependency_executed),
                ERR_DEPENDENCY_NOT_RESOLVED
            );

            // Flag first, then dispatch: a re-entrant call back into this
            // contract must already see the proposal as resolved.
            proposal.resolution_executed = true;
            self.proposals(session_id, proposal_id).set(&proposal);

            if !proposal.resolution_endpoint.is_empty() {
                let mut args = ManagedArgBuffer::new();
                for arg in proposal.resolution_args.iter() {
                    args.push_arg_raw((*arg).clone());
                }
                self.tx()
                    .to(&proposal.resolution_target)
                    .raw_call(proposal.resolution_endpoint.clone())
                    .arguments_raw(args)
                    .sync_call();
            }

            self.resolution_executed_event(session_id, proposal_id);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Quorum and majority against the session snapshot, plus the
    /// alternative-group winner rule: inside a group only the proposal with
    /// the strictly highest approvals (lowest id on a tie) can be approved.
    #[view(proposalApproval)]
    fn proposal_approval(&self, session_id: u64, proposal_id: u8) -> bool {
        let session = self.sessions(session_id).get();
        if proposal_id == 0 || proposal_id > session.proposals_count {
            return false;
        }
        let proposal = self.proposals(session_id, proposal_id).get();
        if proposal.cancelled {
            return false;
        }
        if !math::is_approved(
            &proposal.approvals,
            &session.participation,
            &session.voting_supply,
            proposal.requirement_majority,
            proposal.requirement_quorum,
        ) {
            return false;
        }

        let base_id = if proposal.alternative_of == 0 {
            proposal_id
        } else {
            proposal.alternative_of
        };
        let group_mask = if base_id == proposal_id {
            proposal.alternatives_mask
        } else {
            self.proposals(session_id, base_id).get().alternatives_mask
        };
        if group_mask == 0 {
            return true;
        }
        for sibling_id in 1..=session.proposals_count {
            if sibling_id == proposal_id || group_mask & math::proposal_bit(sibling_id) == 0 {
                continue;
            }
            let sibling = self.proposals(session_id, sibling_id).get();
            if sibling.cancelled {
                continue;
            }
            if sibling.approvals > proposal.approvals
                || (sibling.approvals == proposal.approvals && sibling_id < proposal_id)
            {
                return false;
            }
        }
        true
    }

    #[view(proposalStateAt)]
    fn proposal_state_at(&self, session_id: u64, proposal_id: u8, at: u64) -> ProposalState {
        let session_state = self.session_state_at(session_id, at);
        match session_state {
            SessionState::Undefined => return ProposalState::Undefined,
            SessionState::Archived => return ProposalState::Archived,
            _ => {}
        }

        let session = self.sessions(session_id).get();
        if proposal_id == 0 || proposal_id > session.proposals_count {
            return ProposalState::Undefined;
        }
        let proposal = self.proposals(session_id, proposal_id).get();
        if proposal.cancelled {
            return ProposalState::Cancelled;
        }

        match session_state {
            SessionState::Planned | SessionState::Campaign => ProposalState::Defined,
            SessionState::Voting => ProposalState::Locked,
            _ => {
                if proposal.resolution_executed {
                    ProposalState::Resolved
                } else if self.proposal_approval(session_id, proposal_id) {
                    ProposalState::Approved
                } else {
                    ProposalState::Rejected
                }
            }
        }
    }
}
