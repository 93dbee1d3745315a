use crate::client::{default_permissions, GlobalConstraintRegistrar};
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use crate::storage::proposals::{
    AddConstraintRequest, RegistrarParameters, RemoveConstraintRequest, SetParamsRequest,
    TransactionResult,
};
use crate::utils::core::{can_init_contract, get_address, validate};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub trait GlobalConstraintRegistrarContractTrait {
    fn init(e: Env, admin: Address, registrar: Address);
    fn upgrade(e: Env, hash: BytesN<32>);
    fn set_admin(e: Env, address: Address);
    fn set_registrar(e: Env, address: Address);
    fn get_admin(e: Env) -> Address;
    fn get_registrar(e: Env) -> Address;

    // Registrar methods
    // Admin only: these reach the registrar under the gateway's identity
    fn propose_add_constraint(
        e: Env,
        avatar: Option<Address>,
        global_constraint: Option<Address>,
        global_constraint_params_hash: Option<BytesN<32>>,
        voting_machine_hash: Option<BytesN<32>>,
    ) -> TransactionResult;
    fn propose_remove_constraint(
        e: Env,
        avatar: Option<Address>,
        global_constraint: Option<Address>,
    ) -> TransactionResult;
    fn set_params(e: Env, params: SetParamsRequest) -> BytesN<32>;
    fn get_parameters_hash(e: Env, params: SetParamsRequest) -> BytesN<32>;
    fn get_parameters(e: Env, parameters_hash: BytesN<32>) -> RegistrarParameters;
    fn get_default_permissions(e: Env, override_value: Option<String>) -> String;
}

#[contract]
pub struct GlobalConstraintRegistrarContract;

#[contractimpl]
impl GlobalConstraintRegistrarContractTrait for GlobalConstraintRegistrarContract {
    fn init(e: Env, admin: Address, registrar: Address) {
        can_init_contract(&e);
        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core().set_address(&CoreDataKeys::Registrar, &registrar);
        e._core().bump();
    }

    fn upgrade(e: Env, hash: BytesN<32>) {
        validate(&e, CoreDataKeys::Admin);
        e.deployer().update_current_contract_wasm(hash);
        e._core().bump();
    }

    fn set_admin(e: Env, address: Address) {
        validate(&e, CoreDataKeys::Admin);
        e._core().set_address(&CoreDataKeys::Admin, &address);
        e._core().bump();
    }

    fn set_registrar(e: Env, address: Address) {
        validate(&e, CoreDataKeys::Admin);
        e._core().set_address(&CoreDataKeys::Registrar, &address);
        e._core().bump();
    }

    fn get_admin(e: Env) -> Address {
        get_address(&e, CoreDataKeys::Admin)
    }

    fn get_registrar(e: Env) -> Address {
        get_address(&e, CoreDataKeys::Registrar)
    }

    fn propose_add_constraint(
        e: Env,
        avatar: Option<Address>,
        global_constraint: Option<Address>,
        global_constraint_params_hash: Option<BytesN<32>>,
        voting_machine_hash: Option<BytesN<32>>,
    ) -> TransactionResult {
        validate(&e, CoreDataKeys::Admin);

        let request = AddConstraintRequest {
            avatar,
            global_constraint,
            global_constraint_params_hash,
            voting_machine_hash,
        };

        let registrar: Address = get_address(&e, CoreDataKeys::Registrar);
        let result =
            GlobalConstraintRegistrar::new(&e, &registrar).propose_add_constraint(&request);
        e._core().bump();
        result
    }

    fn propose_remove_constraint(
        e: Env,
        avatar: Option<Address>,
        global_constraint: Option<Address>,
    ) -> TransactionResult {
        validate(&e, CoreDataKeys::Admin);

        let request = RemoveConstraintRequest {
            avatar,
            global_constraint,
        };

        let registrar: Address = get_address(&e, CoreDataKeys::Registrar);
        let result =
            GlobalConstraintRegistrar::new(&e, &registrar).propose_remove_constraint(&request);
        e._core().bump();
        result
    }

    fn set_params(e: Env, params: SetParamsRequest) -> BytesN<32> {
        validate(&e, CoreDataKeys::Admin);

        let registrar: Address = get_address(&e, CoreDataKeys::Registrar);
        let parameters_hash = GlobalConstraintRegistrar::new(&e, &registrar).set_params(&params);
        e._core().bump();
        parameters_hash
    }

    fn get_parameters_hash(e: Env, params: SetParamsRequest) -> BytesN<32> {
        let registrar: Address = get_address(&e, CoreDataKeys::Registrar);
        GlobalConstraintRegistrar::new(&e, &registrar).get_parameters_hash(&params)
    }

    fn get_parameters(e: Env, parameters_hash: BytesN<32>) -> RegistrarParameters {
        let registrar: Address = get_address(&e, CoreDataKeys::Registrar);
        GlobalConstraintRegistrar::new(&e, &registrar).get_parameters(&parameters_hash)
    }

    fn get_default_permissions(e: Env, override_value: Option<String>) -> String {
        default_permissions(&e, override_value)
    }
}
