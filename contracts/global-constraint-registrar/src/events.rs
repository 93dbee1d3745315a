use core::marker::PhantomData;
use soroban_sdk::{
    contracttype, Address, BytesN, Env, IntoVal, Map, Symbol, TryFromVal, Val, Vec,
};

/// Raw event as seen by a transport: (emitting contract, topics, data)
pub type RawEvent = (Address, Vec<Val>, Val);

/// Events emitted by the GlobalConstraintRegistrar.
/// Every one of them is published with the topics `(name, avatar, proposal_id)` and the record as data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegistrarEvent {
    NewGlobalConstraintsProposal,
    RemoveGlobalConstraintsProposal,
    ProposalExecuted,
    ProposalDeleted,
}

impl RegistrarEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            RegistrarEvent::NewGlobalConstraintsProposal => "NewGlobalConstraintsProposal",
            RegistrarEvent::RemoveGlobalConstraintsProposal => "RemoveGlobalConstraintsProposal",
            RegistrarEvent::ProposalExecuted => "ProposalExecuted",
            RegistrarEvent::ProposalDeleted => "ProposalDeleted",
        }
    }

    pub fn topic(&self, e: &Env) -> Symbol {
        Symbol::new(e, self.name())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewGlobalConstraintsProposal {
    pub avatar: Address,
    pub int_vote_interface: Address,
    pub gc: Address,
    pub params: BytesN<32>,
    pub proposal_id: BytesN<32>,
    pub vote_to_remove_params: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoveGlobalConstraintsProposal {
    pub avatar: Address,
    pub gc: Address,
    pub int_vote_interface: Address,
    pub proposal_id: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    pub avatar: Address,
    pub proposal_id: BytesN<32>,
    pub param: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalDeleted {
    pub avatar: Address,
    pub proposal_id: BytesN<32>,
}

/// Associates a record shape with the event that carries it
pub trait EventRecord: TryFromVal<Env, Val> + IntoVal<Env, Val> + Clone {
    const EVENT: RegistrarEvent;
    /// Keys of the map the record is encoded as
    const FIELDS: &'static [&'static str];

    fn avatar(&self) -> Address;
    fn proposal_id(&self) -> BytesN<32>;

    /// Publishes the record from the current contract using the registrar topic layout
    fn publish(&self, e: &Env) {
        e.events().publish(
            (Self::EVENT.topic(e), self.avatar(), self.proposal_id()),
            self.clone(),
        );
    }
}

macro_rules! event_record {
    ($record:ident, [$($field:ident),+]) => {
        impl EventRecord for $record {
            const EVENT: RegistrarEvent = RegistrarEvent::$record;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn avatar(&self) -> Address {
                self.avatar.clone()
            }

            fn proposal_id(&self) -> BytesN<32> {
                self.proposal_id.clone()
            }
        }
    };
}

event_record!(
    NewGlobalConstraintsProposal,
    [
        avatar,
        int_vote_interface,
        gc,
        params,
        proposal_id,
        vote_to_remove_params
    ]
);
event_record!(
    RemoveGlobalConstraintsProposal,
    [avatar, gc, int_vote_interface, proposal_id]
);
event_record!(ProposalExecuted, [avatar, proposal_id, param]);
event_record!(ProposalDeleted, [avatar, proposal_id]);

/// Source of emitted contract events, oldest first
pub trait EventLog {
    fn entries(&self) -> Vec<RawEvent>;
}

#[cfg(any(test, feature = "testutils"))]
impl EventLog for Env {
    fn entries(&self) -> Vec<RawEvent> {
        use soroban_sdk::testutils::Events as _;
        self.events().all()
    }
}

/// Typed view over one kind of registrar event emitted by one contract
pub struct EventFetcher<R: EventRecord> {
    env: Env,
    contract: Address,
    _record: PhantomData<R>,
}

impl<R: EventRecord> EventFetcher<R> {
    pub fn new(e: &Env, contract: &Address) -> EventFetcher<R> {
        EventFetcher {
            env: e.clone(),
            contract: contract.clone(),
            _record: PhantomData,
        }
    }

    pub fn event(&self) -> RegistrarEvent {
        R::EVENT
    }

    pub fn contract(&self) -> &Address {
        &self.contract
    }

    /// One shot query over everything the log holds
    pub fn get<L: EventLog>(&self, log: &L) -> Vec<R> {
        let mut records: Vec<R> = Vec::new(&self.env);
        for entry in log.entries().iter() {
            if let Some(record) = self.decode(entry) {
                records.push_back(record);
            }
        }

        records
    }

    pub fn watch<F: FnMut(&R)>(&self, callback: F) -> EventWatcher<R, F> {
        EventWatcher {
            fetcher: EventFetcher::new(&self.env, &self.contract),
            callback,
        }
    }

    fn decode(&self, entry: RawEvent) -> Option<R> {
        let (contract, topics, data) = entry;
        if contract != self.contract {
            return None;
        }

        let name: Symbol = topics
            .get(0)
            .and_then(|topic| Symbol::try_from_val(&self.env, &topic).ok())?;

        if name != R::EVENT.topic(&self.env) {
            return None;
        }

        if !self.has_record_keys(&data) {
            log::warn!("skipping {} event with an unexpected shape", R::EVENT.name());
            return None;
        }

        match R::try_from_val(&self.env, &data) {
            Ok(record) => Some(record),
            Err(_) => {
                log::warn!("skipping {} event with unexpected values", R::EVENT.name());
                None
            }
        }
    }

    // The host traps when a map is unpacked into a record with another key set,
    // so the keys are compared before decoding
    fn has_record_keys(&self, data: &Val) -> bool {
        let fields: Map<Val, Val> = match Map::try_from_val(&self.env, data) {
            Ok(fields) => fields,
            Err(_) => return false,
        };

        if fields.len() != R::FIELDS.len() as u32 {
            return false;
        }

        R::FIELDS.iter().all(|field| {
            let key: Val = Symbol::new(&self.env, field).into_val(&self.env);
            fields.contains_key(key)
        })
    }
}

/// Callback subscription. The transport hands every new batch of events to `notify` once.
pub struct EventWatcher<R: EventRecord, F: FnMut(&R)> {
    fetcher: EventFetcher<R>,
    callback: F,
}

impl<R: EventRecord, F: FnMut(&R)> EventWatcher<R, F> {
    /// Returns how many records were delivered to the callback
    pub fn notify(&mut self, batch: &Vec<RawEvent>) -> u32 {
        let mut delivered: u32 = 0;
        for entry in batch.iter() {
            if let Some(record) = self.fetcher.decode(entry) {
                (self.callback)(&record);
                delivered += 1;
            }
        }

        log::debug!("{} delivered {} records", R::EVENT.name(), delivered);
        delivered
    }
}
