use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use soroban_sdk::{panic_with_error, Address, Env};

pub fn can_init_contract(e: &Env) {
    if e._core().is_started() {
        panic_with_error!(&e, &ContractErrors::AlreadyStarted);
    }
}

pub fn validate(e: &Env, typ: CoreDataKeys) {
    match e._core().address(&typ) {
        None => panic_with_error!(&e, &ContractErrors::NotStarted),
        Some(v) => v.require_auth(),
    }
}

pub fn get_address(e: &Env, typ: CoreDataKeys) -> Address {
    e._core()
        .address(&typ)
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}
