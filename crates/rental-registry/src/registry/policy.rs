use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::identifier::{PropertyCode, TenantId};
use super::property::PropertyKind;

/// Eligibility thresholds applied when issuing rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPolicy {
    pub villa_minimum_age: u8,
    pub apartment_minimum_age: u8,
    /// Days ahead of now that count as "terminating soon", inclusive.
    pub notice_window_days: u16,
}

impl RentalPolicy {
    pub const fn minimum_age(&self, kind: PropertyKind) -> u8 {
        match kind {
            PropertyKind::Villa => self.villa_minimum_age,
            PropertyKind::Apartment => self.apartment_minimum_age,
        }
    }
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self {
            villa_minimum_age: 21,
            apartment_minimum_age: 18,
            notice_window_days: 7,
        }
    }
}

/// Result of a rental request that passed argument validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RentalDecision {
    Issued(RentalContract),
    Refused(RefusalReason),
}

impl RentalDecision {
    pub fn is_issued(&self) -> bool {
        matches!(self, RentalDecision::Issued(_))
    }

    pub fn contract(&self) -> Option<&RentalContract> {
        match self {
            RentalDecision::Issued(contract) => Some(contract),
            RentalDecision::Refused(_) => None,
        }
    }

    pub fn refusal(&self) -> Option<&RefusalReason> {
        match self {
            RentalDecision::Issued(_) => None,
            RentalDecision::Refused(reason) => Some(reason),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RentalDecision::Issued(contract) => contract.summary(),
            RentalDecision::Refused(reason) => reason.summary(),
        }
    }
}

/// Terms recorded when a property is assigned to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalContract {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub property_code: PropertyCode,
    pub kind: PropertyKind,
    pub duration_days: i64,
    pub termination: NaiveDateTime,
}

impl RentalContract {
    pub fn summary(&self) -> String {
        format!(
            "tenant {} has rented {} {} for {} days",
            self.tenant_name, self.kind, self.property_code, self.duration_days
        )
    }
}

/// Business-rule reasons a rental request was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalReason {
    AlreadyRenting,
    NoCleanPoolVillas,
    AllRented { kind: PropertyKind },
    UnderAge {
        kind: PropertyKind,
        required: u8,
        shortfall: i32,
    },
    NotPremium,
}

impl RefusalReason {
    pub fn summary(&self) -> String {
        match self {
            RefusalReason::AlreadyRenting => {
                "tenant can only rent one property at a time".to_string()
            }
            RefusalReason::NoCleanPoolVillas => {
                "no vacant villas currently have a clean pool".to_string()
            }
            RefusalReason::AllRented { kind } => {
                format!("all {kind}s are currently rented")
            }
            RefusalReason::UnderAge {
                kind,
                required,
                shortfall,
            } => format!(
                "tenant must be {required} to rent a {kind}; eligible in {shortfall} year(s)"
            ),
            RefusalReason::NotPremium => {
                "tenant must be premium class to rent a Villa".to_string()
            }
        }
    }
}
