//! Record types exchanged between platform services.
//!
//! Records are grouped by domain. Every record implements
//! [`Contract`](platform_contracts_canonical::Contract), so it can be decoded
//! from JSON with all violations reported together and encoded back with a
//! [`WireEncoder`](platform_contracts_canonical::WireEncoder).
#![deny(missing_docs)]

mod defaults;

pub mod accounting;
pub mod events;
pub mod messaging;
pub mod registry;
pub mod tax;

pub use registry::{ContractKind, RegistryError};
