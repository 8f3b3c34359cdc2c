multiversx_sc::imports!();

use crate::errors::*;
use crate::math;
use crate::types::SessionRule;
use crate::{access_control_proxy, token_ledger_proxy};
use crate::{MAX_PERIOD_LENGTH, MAX_PROPOSALS_HARD_LIMIT, MIN_PERIOD_LENGTH};

// Privileges checked against the access-control collaborator. A resolution
// executed by this contract against itself bypasses them.
pub const PRIV_UPDATE_SESSION_RULE: &str = "updateSessionRule";
pub const PRIV_UPDATE_RESOLUTION_REQUIREMENTS: &str = "updateResolutionRequirements";
pub const PRIV_DEFINE_PROPOSAL: &str = "defineProposal";

#[multiversx_sc::module]
pub trait ConfigModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: updateSessionRule
    // Only through an approved resolution or the configuring
    // authority. Takes effect for sessions scheduled afterwards.
    // ========================================================

    #[endpoint(updateSessionRule)]
    fn update_session_rule(
        &self,
        campaign_period: u64,
        voting_period: u64,
        execution_period: u64,
        grace_period: u64,
        period_offset: u64,
        open_proposals_limit: u8,
        max_proposals: u8,
        max_proposals_operator: u8,
        new_proposal_threshold: BigUint,
        non_voting_addresses: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_privilege(PRIV_UPDATE_SESSION_RULE);

        let rule = SessionRule {
            campaign_period,
            voting_period,
            execution_period,
            grace_period,
            period_offset,
            open_proposals_limit,
            max_proposals,
            max_proposals_operator,
            new_proposal_threshold,
        };
        self.validate_session_rule(&rule);
        self.session_rule().set(&rule);

        self.non_voting_addresses().clear();
        for address in non_voting_addresses {
            self.non_voting_addresses().insert(address);
        }

        let caller = self.blockchain().get_caller();
        self.session_rule_updated_event(&caller, &rule);
    }

    fn validate_session_rule(&self, rule: &SessionRule<Self::Api>) {
        let bounded = [
            rule.campaign_period,
            rule.voting_period,
            rule.execution_period,
            rule.grace_period,
            rule.period_offset,
        ];
        for value in bounded {
            require!(
                math::period_in_bounds(value, MIN_PERIOD_LENGTH, MAX_PERIOD_LENGTH),
                ERR_PERIOD_OUT_OF_BOUNDS
            );
        }

        require!(
            math::proposal_caps_valid(
                rule.open_proposals_limit,
                rule.max_proposals,
                rule.max_proposals_operator,
                MAX_PROPOSALS_HARD_LIMIT,
            ),
            ERR_INVALID_PROPOSAL_CAPS
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSessionRule)]
    fn get_session_rule(&self) -> SessionRule<Self::Api> {
        self.session_rule().get()
    }

    #[view(getNonVotingAddresses)]
    fn get_non_voting_addresses(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for address in self.non_voting_addresses().iter() {
            result.push(address);
        }
        result
    }

    #[view(getTokenLedgerAddress)]
    fn get_token_ledger_address(&self) -> ManagedAddress {
        self.token_ledger_address().get()
    }

    #[view(getAccessControlAddress)]
    fn get_access_control_address(&self) -> ManagedAddress {
        self.access_control_address().get()
    }

    // ========================================================
    // INTERNAL: collaborator calls
    // ========================================================

    /// Live voting weight, read from the token ledger at call time.
    fn voting_weight_of(&self, holder: &ManagedAddress) -> BigUint {
        let ledger = self.token_ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .balance_of(holder)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn ledger_total_supply(&self) -> BigUint {
        let ledger = self.token_ledger_address().get();
        self.tx()
            .to(&ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn request_voting_lock(&self, start_at: u64, end_at: u64) {
        let ledger = self.token_ledger_address().get();
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&ledger)
            .typed(token_ledger_proxy::TokenLedgerProxy)
            .set_voting_lock(own_address, start_at, end_at)
            .sync_call();
    }

    /// True for the contract itself (a resolution dispatched to our own
    /// address) and for callers holding `privilege` on the access-control
    /// collaborator.
    fn caller_has_privilege(&self, caller: &ManagedAddress, privilege: &str) -> bool {
        if caller == &self.blockchain().get_sc_address() {
            return true;
        }
        let access_control = self.access_control_address().get();
        self.tx()
            .to(&access_control)
            .typed(access_control_proxy::AccessControlProxy)
            .has_privilege(caller, ManagedBuffer::from(privilege))
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn require_privilege(&self, privilege: &str) {
        let caller = self.blockchain().get_caller();
        require!(self.caller_has_privilege(&caller, privilege), ERR_NOT_AUTHORIZED);
    }
}
