//! Properties, tenants, and the rules for letting one to the other.

pub mod clock;
mod error;
pub mod identifier;
mod name;
mod policy;
mod property;
pub mod report;
mod service;
mod tenant;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RegistryError;
pub use identifier::{PropertyCode, PropertyCodeIssuer, TenantId, TenantIdIssuer};
pub use name::Name;
pub use policy::{RefusalReason, RentalContract, RentalDecision, RentalPolicy};
pub use property::{Property, PropertyDetails, PropertyKind};
pub use report::RegistryReport;
pub use service::RentalRegistry;
pub use tenant::TenantRecord;
