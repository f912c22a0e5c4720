// Bang table model - entries, ids, and the stock default set

mod defaults;
mod id;
mod types;

pub use defaults::{BuiltinDefaults, DefaultsProvider, StaticDefaults};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use types::{BangEntry, BangId, BangTable, POS_FLOOR};
