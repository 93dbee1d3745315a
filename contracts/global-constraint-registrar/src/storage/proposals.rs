use soroban_sdk::{contracttype, Address, BytesN};

/// Proposal to add (or modify) a global constraint on an avatar.
/// Every field is required; `None` is rejected before anything is sent to the registrar.
/// Not a contract type: the gateway takes the fields as separate optional arguments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AddConstraintRequest {
    pub avatar: Option<Address>,
    /// The global constraint contract to add
    pub global_constraint: Option<Address>,
    /// Hash of the parameters of the global constraint
    pub global_constraint_params_hash: Option<BytesN<32>>,
    /// Voting machine parameters used when voting to remove the constraint later on
    pub voting_machine_hash: Option<BytesN<32>>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RemoveConstraintRequest {
    pub avatar: Option<Address>,
    /// The global constraint contract to remove
    pub global_constraint: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetParamsRequest {
    pub vote_parameters_hash: BytesN<32>,
    pub voting_machine: Address,
}

/// Parameters registered in the registrar under a parameters hash
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrarParameters {
    pub vote_register_params: BytesN<32>,
    pub voting_machine: Address,
}

/// Result of a submitted proposal.
/// `proposal_id` is the id the registrar returned and is the same id carried by the
/// `NewGlobalConstraintsProposal` / `RemoveGlobalConstraintsProposal` events it emitted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionResult {
    pub registrar: Address,
    pub proposal_id: BytesN<32>,
    pub ledger: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddConstraintArgs {
    pub avatar: Address,
    pub global_constraint: Address,
    pub global_constraint_params_hash: BytesN<32>,
    pub voting_machine_hash: BytesN<32>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoveConstraintArgs {
    pub avatar: Address,
    pub global_constraint: Address,
}
