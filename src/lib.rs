#![no_std]

multiversx_sc::imports!();

pub mod access_control_proxy;
pub mod config;
pub mod errors;
pub mod events;
pub mod execute;
pub mod math;
pub mod proposal;
pub mod requirements;
pub mod session;
pub mod storage;
pub mod token_ledger_proxy;
pub mod types;
pub mod vote;

use types::{ResolutionRequirement, SessionRule};

// ============================================================
// Protocol constants
// ============================================================

/// Lower bound for every session period: 5 minutes.
pub const MIN_PERIOD_LENGTH: u64 = 300;

/// Upper bound for every session period and the offset: ~10 years.
pub const MAX_PERIOD_LENGTH: u64 = 3_650 * 86_400;

/// Vote bitmasks are u64, so no rule may allow more proposals than this.
pub const MAX_PROPOSALS_HARD_LIMIT: u8 = 64;

/// Sliding window of retained sessions; older ones must be archived.
pub const SESSION_RETENTION_COUNT: u64 = 10;

// Default session rule, replaceable through updateSessionRule.
pub const DEFAULT_CAMPAIGN_PERIOD: u64 = 5 * 86_400;
pub const DEFAULT_VOTING_PERIOD: u64 = 2 * 86_400;
pub const DEFAULT_EXECUTION_PERIOD: u64 = 86_400;
pub const DEFAULT_GRACE_PERIOD: u64 = 6 * 86_400;
pub const DEFAULT_PERIOD_OFFSET: u64 = 2 * 86_400;
pub const DEFAULT_OPEN_PROPOSALS_LIMIT: u8 = 5;
pub const DEFAULT_MAX_PROPOSALS: u8 = 20;
pub const DEFAULT_MAX_PROPOSALS_OPERATOR: u8 = 25;
pub const DEFAULT_NEW_PROPOSAL_THRESHOLD: u64 = 1;

// Default wildcard requirement: 50% majority, 20% quorum, in ppm.
pub const DEFAULT_MAJORITY: u64 = 500_000;
pub const DEFAULT_QUORUM: u64 = 200_000;
pub const DEFAULT_EXECUTION_THRESHOLD: u64 = 1;

// ============================================================
// Contract
// ============================================================

/// Token-weighted governance sessions: holders propose during CAMPAIGN,
/// vote during VOTING, and approved resolutions execute during
/// EXECUTION/GRACE, all on a fixed period grid. Weights come from an
/// external token ledger; rule changes go through the access-control
/// collaborator or an approved resolution.
#[multiversx_sc::contract]
pub trait VotingSession:
    storage::StorageModule
    + events::EventsModule
    + config::ConfigModule
    + requirements::RequirementsModule
    + session::SessionModule
    + proposal::ProposalModule
    + vote::VoteModule
    + execute::ExecuteModule
{
    #[init]
    fn init(&self, token_ledger_address: ManagedAddress, access_control_address: ManagedAddress) {
        self.token_ledger_address().set(&token_ledger_address);
        self.access_control_address().set(&access_control_address);

        self.session_rule().set(&SessionRule {
            campaign_period: DEFAULT_CAMPAIGN_PERIOD,
            voting_period: DEFAULT_VOTING_PERIOD,
            execution_period: DEFAULT_EXECUTION_PERIOD,
            grace_period: DEFAULT_GRACE_PERIOD,
            period_offset: DEFAULT_PERIOD_OFFSET,
            open_proposals_limit: DEFAULT_OPEN_PROPOSALS_LIMIT,
            max_proposals: DEFAULT_MAX_PROPOSALS,
            max_proposals_operator: DEFAULT_MAX_PROPOSALS_OPERATOR,
            new_proposal_threshold: BigUint::from(DEFAULT_NEW_PROPOSAL_THRESHOLD),
        });

        // The wildcard requirement is the universal execution guard and is
        // never allowed to drop to zero afterwards.
        self.resolution_requirement(&ManagedAddress::zero(), &ManagedBuffer::new())
            .set(ResolutionRequirement {
                majority: DEFAULT_MAJORITY,
                quorum: DEFAULT_QUORUM,
                execution_threshold: DEFAULT_EXECUTION_THRESHOLD,
            });
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProtocolConstants)]
    fn get_protocol_constants(&self) -> MultiValue4<u64, u64, u8, u64> {
        (
            MIN_PERIOD_LENGTH,
            MAX_PERIOD_LENGTH,
            MAX_PROPOSALS_HARD_LIMIT,
            SESSION_RETENTION_COUNT,
        )
            .into()
    }
}
