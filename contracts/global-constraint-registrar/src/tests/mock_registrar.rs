#![cfg(test)]

use crate::events::{
    EventRecord, NewGlobalConstraintsProposal, ProposalDeleted, ProposalExecuted,
    RemoveGlobalConstraintsProposal,
};
use crate::registrar::GlobalConstraintRegistrarInterface;
use crate::storage::proposals::RegistrarParameters;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, BytesN, Env,
    Vec,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockRegistrarErrors {
    Rejected = 900,
    UnknownParameters = 901,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposeCall {
    pub avatar: Address,
    pub global_constraint: Address,
    pub global_constraint_params_hash: BytesN<32>,
    pub voting_machine_hash: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoveCall {
    pub avatar: Address,
    pub global_constraint: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetParametersCall {
    pub vote_parameters_hash: BytesN<32>,
    pub voting_machine: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrarCall {
    ProposeGlobalConstraint(ProposeCall),
    ProposeToRemoveGc(RemoveCall),
    SetParameters(SetParametersCall),
}

#[contracttype]
pub enum MockDataKeys {
    VotingMachine,
    Rejecting,
    Calls,
    ProposalsCount,
    Parameters(BytesN<32>),
}

fn record_call(e: &Env, call: RegistrarCall) {
    let mut calls: Vec<RegistrarCall> = e
        .storage()
        .instance()
        .get(&MockDataKeys::Calls)
        .unwrap_or(Vec::new(e));
    calls.push_back(call);
    e.storage().instance().set(&MockDataKeys::Calls, &calls);
}

fn check_rejecting(e: &Env) {
    let rejecting: bool = e
        .storage()
        .instance()
        .get(&MockDataKeys::Rejecting)
        .unwrap_or(false);

    if rejecting {
        panic_with_error!(e, &MockRegistrarErrors::Rejected);
    }
}

// Proposal ids are [n; 32] with n the 1-based proposal counter
fn next_proposal_id(e: &Env) -> BytesN<32> {
    let count: u32 = e
        .storage()
        .instance()
        .get(&MockDataKeys::ProposalsCount)
        .unwrap_or(0)
        + 1;
    e.storage()
        .instance()
        .set(&MockDataKeys::ProposalsCount, &count);

    BytesN::from_array(e, &[count as u8; 32])
}

fn voting_machine(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&MockDataKeys::VotingMachine)
        .unwrap_or(e.current_contract_address())
}

/// Stands in for a deployed registrar: records what it receives and emits the registrar events
#[contract]
pub struct MockRegistrar;

#[contractimpl]
impl MockRegistrar {
    pub fn configure(e: Env, voting_machine: Address) {
        e.storage()
            .instance()
            .set(&MockDataKeys::VotingMachine, &voting_machine);
    }

    pub fn set_rejecting(e: Env, rejecting: bool) {
        e.storage()
            .instance()
            .set(&MockDataKeys::Rejecting, &rejecting);
    }

    pub fn calls(e: Env) -> Vec<RegistrarCall> {
        e.storage()
            .instance()
            .get(&MockDataKeys::Calls)
            .unwrap_or(Vec::new(&e))
    }

    pub fn execute_proposal(e: Env, avatar: Address, proposal_id: BytesN<32>, param: i128) {
        ProposalExecuted {
            avatar,
            proposal_id,
            param,
        }
        .publish(&e);
    }

    pub fn delete_proposal(e: Env, avatar: Address, proposal_id: BytesN<32>) {
        ProposalDeleted {
            avatar,
            proposal_id,
        }
        .publish(&e);
    }
}

#[contractimpl]
impl GlobalConstraintRegistrarInterface for MockRegistrar {
    fn propose_global_constraint(
        e: Env,
        avatar: Address,
        global_constraint: Address,
        global_constraint_params_hash: BytesN<32>,
        voting_machine_hash: BytesN<32>,
    ) -> BytesN<32> {
        check_rejecting(&e);
        record_call(
            &e,
            RegistrarCall::ProposeGlobalConstraint(ProposeCall {
                avatar: avatar.clone(),
                global_constraint: global_constraint.clone(),
                global_constraint_params_hash: global_constraint_params_hash.clone(),
                voting_machine_hash: voting_machine_hash.clone(),
            }),
        );

        let proposal_id: BytesN<32> = next_proposal_id(&e);
        NewGlobalConstraintsProposal {
            avatar,
            int_vote_interface: voting_machine(&e),
            gc: global_constraint,
            params: global_constraint_params_hash,
            proposal_id: proposal_id.clone(),
            vote_to_remove_params: voting_machine_hash,
        }
        .publish(&e);

        proposal_id
    }

    fn propose_to_remove_gc(e: Env, avatar: Address, global_constraint: Address) -> BytesN<32> {
        check_rejecting(&e);
        record_call(
            &e,
            RegistrarCall::ProposeToRemoveGc(RemoveCall {
                avatar: avatar.clone(),
                global_constraint: global_constraint.clone(),
            }),
        );

        let proposal_id: BytesN<32> = next_proposal_id(&e);
        RemoveGlobalConstraintsProposal {
            avatar,
            gc: global_constraint,
            int_vote_interface: voting_machine(&e),
            proposal_id: proposal_id.clone(),
        }
        .publish(&e);

        proposal_id
    }

    fn set_parameters(
        e: Env,
        vote_parameters_hash: BytesN<32>,
        voting_machine: Address,
    ) -> BytesN<32> {
        check_rejecting(&e);
        record_call(
            &e,
            RegistrarCall::SetParameters(SetParametersCall {
                vote_parameters_hash: vote_parameters_hash.clone(),
                voting_machine: voting_machine.clone(),
            }),
        );

        let parameters_hash: BytesN<32> = Self::get_parameters_hash(
            e.clone(),
            vote_parameters_hash.clone(),
            voting_machine.clone(),
        );
        e.storage().instance().set(
            &MockDataKeys::Parameters(parameters_hash.clone()),
            &RegistrarParameters {
                vote_register_params: vote_parameters_hash,
                voting_machine,
            },
        );

        parameters_hash
    }

    fn get_parameters_hash(
        e: Env,
        vote_parameters_hash: BytesN<32>,
        _voting_machine: Address,
    ) -> BytesN<32> {
        let mut raw: [u8; 32] = vote_parameters_hash.to_array();
        raw[31] ^= 0xff;
        BytesN::from_array(&e, &raw)
    }

    fn get_parameters(e: Env, parameters_hash: BytesN<32>) -> RegistrarParameters {
        e.storage()
            .instance()
            .get(&MockDataKeys::Parameters(parameters_hash))
            .unwrap_or_else(|| panic_with_error!(&e, &MockRegistrarErrors::UnknownParameters))
    }
}
