use crate::storage::proposals::RegistrarParameters;
use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Entry points of a deployed GlobalConstraintRegistrar contract.
/// Voting, execution and the constraint logic itself all live behind this interface.
#[contractclient(name = "RegistrarClient")]
pub trait GlobalConstraintRegistrarInterface {
    /// Opens a proposal to add the constraint to the avatar and returns the proposal id
    fn propose_global_constraint(
        e: Env,
        avatar: Address,
        global_constraint: Address,
        global_constraint_params_hash: BytesN<32>,
        voting_machine_hash: BytesN<32>,
    ) -> BytesN<32>;

    /// Opens a proposal to remove the constraint from the avatar and returns the proposal id
    fn propose_to_remove_gc(e: Env, avatar: Address, global_constraint: Address) -> BytesN<32>;

    fn set_parameters(e: Env, vote_parameters_hash: BytesN<32>, voting_machine: Address)
        -> BytesN<32>;

    fn get_parameters_hash(
        e: Env,
        vote_parameters_hash: BytesN<32>,
        voting_machine: Address,
    ) -> BytesN<32>;

    fn get_parameters(e: Env, parameters_hash: BytesN<32>) -> RegistrarParameters;
}
