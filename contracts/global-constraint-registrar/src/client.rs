use crate::errors::ContractErrors;
use crate::events::{
    EventFetcher, NewGlobalConstraintsProposal, ProposalDeleted, ProposalExecuted,
    RemoveGlobalConstraintsProposal,
};
use crate::registrar::RegistrarClient;
use crate::storage::proposals::{
    AddConstraintRequest, RegistrarParameters, RemoveConstraintRequest, SetParamsRequest,
    TransactionResult,
};
use crate::utils::proposals::{
    missing_field, validate_add_request, validate_remove_request, DEFAULT_PERMISSIONS,
};
use soroban_sdk::{log, panic_with_error, Address, BytesN, Env, String, Symbol};

/// Typed binding to a deployed GlobalConstraintRegistrar.
///
/// Holds nothing but the registrar address, so it can be built on demand for any
/// registrar. Requests are validated field by field before anything is dispatched;
/// errors raised by the registrar itself reach the caller untouched.
pub struct GlobalConstraintRegistrar<'a> {
    env: Env,
    registrar: RegistrarClient<'a>,
}

impl<'a> GlobalConstraintRegistrar<'a> {
    pub fn new(e: &Env, address: &Address) -> GlobalConstraintRegistrar<'a> {
        GlobalConstraintRegistrar {
            env: e.clone(),
            registrar: RegistrarClient::new(e, address),
        }
    }

    pub fn address(&self) -> &Address {
        &self.registrar.address
    }

    pub fn propose_add_constraint(&self, request: &AddConstraintRequest) -> TransactionResult {
        let args = validate_add_request(request).unwrap_or_else(|error| {
            self.log_missing(error);
            panic_with_error!(&self.env, &error)
        });

        let proposal_id: BytesN<32> = self.registrar.propose_global_constraint(
            &args.avatar,
            &args.global_constraint,
            &args.global_constraint_params_hash,
            &args.voting_machine_hash,
        );

        self.wrap(proposal_id)
    }

    pub fn propose_remove_constraint(
        &self,
        request: &RemoveConstraintRequest,
    ) -> TransactionResult {
        let args = validate_remove_request(request).unwrap_or_else(|error| {
            self.log_missing(error);
            panic_with_error!(&self.env, &error)
        });

        let proposal_id: BytesN<32> = self
            .registrar
            .propose_to_remove_gc(&args.avatar, &args.global_constraint);

        self.wrap(proposal_id)
    }

    pub fn set_params(&self, params: &SetParamsRequest) -> BytesN<32> {
        self.registrar
            .set_parameters(&params.vote_parameters_hash, &params.voting_machine)
    }

    pub fn get_parameters_hash(&self, params: &SetParamsRequest) -> BytesN<32> {
        self.registrar
            .get_parameters_hash(&params.vote_parameters_hash, &params.voting_machine)
    }

    pub fn get_parameters(&self, parameters_hash: &BytesN<32>) -> RegistrarParameters {
        self.registrar.get_parameters(parameters_hash)
    }

    pub fn get_default_permissions(&self, override_value: Option<String>) -> String {
        default_permissions(&self.env, override_value)
    }

    pub fn new_global_constraints_proposal(&self) -> EventFetcher<NewGlobalConstraintsProposal> {
        EventFetcher::new(&self.env, self.address())
    }

    pub fn remove_global_constraints_proposal(
        &self,
    ) -> EventFetcher<RemoveGlobalConstraintsProposal> {
        EventFetcher::new(&self.env, self.address())
    }

    pub fn proposal_executed(&self) -> EventFetcher<ProposalExecuted> {
        EventFetcher::new(&self.env, self.address())
    }

    pub fn proposal_deleted(&self) -> EventFetcher<ProposalDeleted> {
        EventFetcher::new(&self.env, self.address())
    }

    fn wrap(&self, proposal_id: BytesN<32>) -> TransactionResult {
        TransactionResult {
            registrar: self.address().clone(),
            proposal_id,
            ledger: self.env.ledger().sequence(),
        }
    }

    fn log_missing(&self, error: ContractErrors) {
        if let Some(field) = missing_field(error) {
            log!(
                &self.env,
                "required field is not defined",
                Symbol::new(&self.env, field)
            );
        }
    }
}

pub fn default_permissions(e: &Env, override_value: Option<String>) -> String {
    match override_value {
        Some(value) if value.len() > 0 => value,
        _ => String::from_str(e, DEFAULT_PERMISSIONS),
    }
}
