use crate::errors::ContractErrors;
use crate::storage::proposals::{
    AddConstraintArgs, AddConstraintRequest, RemoveConstraintArgs, RemoveConstraintRequest,
};

pub const DEFAULT_PERMISSIONS: &str = "0x00000007";

// Fields are checked in the same order the registrar receives them so the first missing one wins
pub fn validate_add_request(
    request: &AddConstraintRequest,
) -> Result<AddConstraintArgs, ContractErrors> {
    let avatar = request
        .avatar
        .clone()
        .ok_or(ContractErrors::AddAvatarIsMissing)?;

    let global_constraint = request
        .global_constraint
        .clone()
        .ok_or(ContractErrors::AddGlobalConstraintIsMissing)?;

    let global_constraint_params_hash = request
        .global_constraint_params_hash
        .clone()
        .ok_or(ContractErrors::AddParametersHashIsMissing)?;

    let voting_machine_hash = request
        .voting_machine_hash
        .clone()
        .ok_or(ContractErrors::AddVotingMachineHashIsMissing)?;

    Ok(AddConstraintArgs {
        avatar,
        global_constraint,
        global_constraint_params_hash,
        voting_machine_hash,
    })
}

pub fn validate_remove_request(
    request: &RemoveConstraintRequest,
) -> Result<RemoveConstraintArgs, ContractErrors> {
    let avatar = request
        .avatar
        .clone()
        .ok_or(ContractErrors::RemoveAvatarIsMissing)?;

    let global_constraint = request
        .global_constraint
        .clone()
        .ok_or(ContractErrors::RemoveGlobalConstraintIsMissing)?;

    Ok(RemoveConstraintArgs {
        avatar,
        global_constraint,
    })
}

/// Name of the request field a validation error refers to
pub fn missing_field(error: ContractErrors) -> Option<&'static str> {
    match error {
        ContractErrors::AddAvatarIsMissing | ContractErrors::RemoveAvatarIsMissing => {
            Some("avatar")
        }
        ContractErrors::AddGlobalConstraintIsMissing
        | ContractErrors::RemoveGlobalConstraintIsMissing => Some("globalConstraint"),
        ContractErrors::AddParametersHashIsMissing => Some("globalConstraintParametersHash"),
        ContractErrors::AddVotingMachineHashIsMissing => Some("votingMachineHash"),
        _ => None,
    }
}
