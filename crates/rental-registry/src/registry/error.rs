use chrono::NaiveDate;

use super::identifier::{PropertyCode, TenantId};
use super::name::Name;

/// Failures the registry refuses to recover from silently.
///
/// Business-rule denials during rental issuance are not errors; they surface as
/// [`RentalDecision::Refused`](super::RentalDecision::Refused) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown property kind '{0}': we offer Villas and Apartments")]
    UnknownPropertyKind(String),
    #[error("{0} cannot be empty")]
    EmptyNamePart(&'static str),
    #[error("'{0}' must contain exactly a first and last name")]
    MalformedName(String),
    #[error("tenant {name} born {date_of_birth} already exists")]
    DuplicateTenant { name: Name, date_of_birth: NaiveDate },
    #[error("invalid property prefix '{0}': expected 'V' for villas or 'A' for apartments")]
    InvalidPrefix(char),
    #[error("tenant {0} is not on file with this registry")]
    UnknownTenant(TenantId),
    #[error("property {0} is not on file with this registry")]
    UnknownProperty(PropertyCode),
    #[error("property {0} is not a villa")]
    NotAVilla(PropertyCode),
    #[error("tenant {0} does not have an active rental")]
    NoActiveRental(TenantId),
    #[error("rental property {code} assigned to tenant {tenant_id} is missing")]
    MissingRentalProperty {
        tenant_id: TenantId,
        code: PropertyCode,
    },
    #[error("rental duration of {0} days is out of range")]
    DurationOutOfRange(i64),
    #[error("no identifiers left to issue for '{bucket}'")]
    IdentifierSpaceExhausted { bucket: String },
}
