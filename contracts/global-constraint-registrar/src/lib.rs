#![no_std]

mod client;
mod contract;
mod errors;
mod events;
mod registrar;
mod storage;
mod utils;

mod tests;

pub use crate::client::GlobalConstraintRegistrar;
pub use crate::contract::{
    GlobalConstraintRegistrarContract, GlobalConstraintRegistrarContractClient,
};
pub use crate::errors::ContractErrors;
pub use crate::events::{
    EventFetcher, EventLog, EventRecord, EventWatcher, NewGlobalConstraintsProposal,
    ProposalDeleted, ProposalExecuted, RawEvent, RegistrarEvent, RemoveGlobalConstraintsProposal,
};
pub use crate::registrar::{GlobalConstraintRegistrarInterface, RegistrarClient};
pub use crate::storage::proposals::{
    AddConstraintRequest, RegistrarParameters, RemoveConstraintRequest, SetParamsRequest,
    TransactionResult,
};
