use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core Errors
    NotStarted = 0,
    AlreadyStarted = 1,

    // Add constraint proposal errors
    AddAvatarIsMissing = 10,
    AddGlobalConstraintIsMissing = 11,
    AddParametersHashIsMissing = 12,
    AddVotingMachineHashIsMissing = 13,

    // Remove constraint proposal errors
    RemoveAvatarIsMissing = 20,
    RemoveGlobalConstraintIsMissing = 21,
}
