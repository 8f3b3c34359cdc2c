multiversx_sc::imports!();

use crate::errors::*;
use crate::math;
use crate::types::{Session, SessionState};
use crate::SESSION_RETENTION_COUNT;

#[multiversx_sc::module]
pub trait SessionModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::config::ConfigModule
{
    // ========================================================
    // ENDPOINT: archiveSession
    // Evicts the oldest retained session, freeing its proposal
    // storage. Only CLOSED sessions can be archived.
    // ========================================================

    #[endpoint(archiveSession)]
    fn archive_session(&self) {
        self.archive_oldest_session();
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Pure function of stored timestamps and `at`; no state is persisted,
    /// so out-of-order queries always agree.
    #[view(sessionStateAt)]
    fn session_state_at(&self, session_id: u64, at: u64) -> SessionState {
        if session_id == 0 || session_id > self.current_session_id().get() {
            return SessionState::Undefined;
        }
        if session_id < self.oldest_session_id().get() {
            return SessionState::Archived;
        }
        let session = self.sessions(session_id).get();
        math::session_state(
            session.campaign_at,
            session.vote_at,
            session.execution_at,
            session.grace_at,
            session.closed_at,
            at,
        )
    }

    #[view(nextSessionAt)]
    fn next_session_at(&self, at: u64) -> u64 {
        let rule = self.session_rule().get();
        let full_period =
            rule.campaign_period + rule.voting_period + rule.execution_period + rule.grace_period;
        math::next_vote_at(at, rule.campaign_period, full_period, rule.period_offset)
    }

    #[view(getSession)]
    fn get_session(&self, session_id: u64) -> Session<Self::Api> {
        self.sessions(session_id).get()
    }

    // ========================================================
    // INTERNAL: scheduling
    // ========================================================

    /// Schedules the next session on the period grid, snapshotting supplies
    /// and requesting the ledger transfer lock for the voting window.
    /// Auto-archives the oldest session when the retention bound is hit, so
    /// a single defineProposal can archive + schedule + attach.
    fn schedule_session(&self) -> u64 {
        let current = self.current_session_id().get();
        let new_id = current + 1;
        if current == 0 {
            self.oldest_session_id().set(1u64);
        } else {
            let oldest = self.oldest_session_id().get();
            if new_id - oldest + 1 > SESSION_RETENTION_COUNT {
                self.archive_oldest_session();
            }
        }

        let rule = self.session_rule().get();
        let now = self.blockchain().get_block_timestamp();
        let full_period =
            rule.campaign_period + rule.voting_period + rule.execution_period + rule.grace_period;
        let vote_at = math::next_vote_at(now, rule.campaign_period, full_period, rule.period_offset);
        let execution_at = vote_at + rule.voting_period;
        let grace_at = execution_at + rule.execution_period;

        let total_supply = self.ledger_total_supply();
        let voting_supply = self.voting_supply_of(&total_supply);

        let session = Session {
            campaign_at: vote_at - rule.campaign_period,
            vote_at,
            execution_at,
            grace_at,
            closed_at: grace_at + rule.grace_period,
            proposals_count: 0,
            participation: BigUint::zero(),
            total_supply,
            voting_supply,
        };
        self.sessions(new_id).set(&session);
        self.current_session_id().set(new_id);

        self.request_voting_lock(vote_at, grace_at);
        self.session_scheduled_event(new_id, vote_at);

        new_id
    }

    fn voting_supply_of(&self, total_supply: &BigUint) -> BigUint {
        let mut non_voting = BigUint::zero();
        for address in self.non_voting_addresses().iter() {
            non_voting += self.voting_weight_of(&address);
        }
        if &non_voting >= total_supply {
            BigUint::zero()
        } else {
            total_supply - &non_voting
        }
    }

    // ========================================================
    // INTERNAL: archiving
    // ========================================================

    fn archive_oldest_session(&self) {
        let current = self.current_session_id().get();
        let oldest = self.oldest_session_id().get();
        require!(current >= 1 && oldest <= current, ERR_NO_SESSION_TO_ARCHIVE);

        let now = self.blockchain().get_block_timestamp();
        let session = self.sessions(oldest).get();
        let state = math::session_state(
            session.campaign_at,
            session.vote_at,
            session.execution_at,
            session.grace_at,
            session.closed_at,
            now,
        );
        require!(math::session_archivable(state), ERR_SESSION_NOT_CLOSED);

        for proposal_id in 1..=session.proposals_count {
            self.proposals(oldest, proposal_id).clear();
        }
        self.sessions(oldest).clear();
        self.oldest_session_id().set(oldest + 1);

        self.session_archived_event(oldest);
    }
}
