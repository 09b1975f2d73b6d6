use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::identifier::TenantId;
use super::name::Name;

/// A person on file. Two records are the same person when name and date of
/// birth both match; the tenant ID is not part of equality.
#[derive(Debug, Clone, Serialize)]
pub struct TenantRecord {
    tenant_id: TenantId,
    name: Name,
    date_of_birth: NaiveDate,
    premium: bool,
}

impl TenantRecord {
    pub(crate) fn new(
        tenant_id: TenantId,
        name: Name,
        date_of_birth: NaiveDate,
        premium: bool,
    ) -> Self {
        Self {
            tenant_id,
            name,
            date_of_birth,
            premium,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    /// Whole years completed on `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.date_of_birth.year();
        if (today.month(), today.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age
    }

    pub(crate) fn same_person(&self, name: &Name, date_of_birth: NaiveDate) -> bool {
        self.name == *name && self.date_of_birth == date_of_birth
    }
}

impl PartialEq for TenantRecord {
    fn eq(&self, other: &Self) -> bool {
        self.same_person(&other.name, other.date_of_birth)
    }
}

impl Eq for TenantRecord {}

impl Hash for TenantRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.date_of_birth.hash(state);
    }
}

impl fmt::Display for TenantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tenant_id)
    }
}
