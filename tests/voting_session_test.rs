// Tests for the voting session contract.
//
// NOTE: every state-changing endpoint reads the token ledger and/or the
// access-control contract through sync calls, which the whitebox test
// framework does not support. Endpoint-level flows are exercised via
// mandos/scenario JSON tests with mock collaborator contracts, or on devnet.
//
// This test verifies the contract compiles and the ABI is generated
// correctly; the engine arithmetic is covered in session_math_test.rs.

use multiversx_sc_scenario::api::DebugApi;

type VotingSessionContract = voting_session::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    // Verify the contract object can be instantiated with DebugApi
    let _: fn() -> VotingSessionContract = voting_session::contract_obj;
}
