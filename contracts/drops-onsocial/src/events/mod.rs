mod builder;
mod types;

mod contract;
mod drop;
pub(crate) mod nep171;

pub use contract::*;
pub use drop::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const DROP: &str = "DROP_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
