use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::error::RegistryError;
use super::identifier::PropertyCode;

/// The two kinds of rentable unit on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PropertyKind {
    Villa,
    Apartment,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 2] = [PropertyKind::Villa, PropertyKind::Apartment];

    pub const fn label(self) -> &'static str {
        match self {
            PropertyKind::Villa => "Villa",
            PropertyKind::Apartment => "Apartment",
        }
    }

    pub const fn code_prefix(self) -> char {
        match self {
            PropertyKind::Villa => 'V',
            PropertyKind::Apartment => 'A',
        }
    }

    pub const fn deposit(self) -> u32 {
        match self {
            PropertyKind::Villa => 500,
            PropertyKind::Apartment => 200,
        }
    }

    /// Match a label case-insensitively against the offered kinds.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw))
            .ok_or_else(|| RegistryError::UnknownPropertyKind(raw.to_string()))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyKind {
    type Err = RegistryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

/// Variant-specific state. Only villas carry anything extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyDetails {
    Villa { clean_pool: bool },
    Apartment,
}

impl PropertyDetails {
    pub const fn kind(self) -> PropertyKind {
        match self {
            PropertyDetails::Villa { .. } => PropertyKind::Villa,
            PropertyDetails::Apartment => PropertyKind::Apartment,
        }
    }
}

/// A rentable unit. Identity and equality follow the [`PropertyCode`].
#[derive(Debug, Clone)]
pub struct Property {
    code: PropertyCode,
    details: PropertyDetails,
    rented: bool,
    termination: Option<NaiveDateTime>,
}

impl Property {
    pub(crate) fn new(code: PropertyCode, kind: PropertyKind) -> Self {
        let details = match kind {
            PropertyKind::Villa => PropertyDetails::Villa { clean_pool: true },
            PropertyKind::Apartment => PropertyDetails::Apartment,
        };

        Self {
            code,
            details,
            rented: false,
            termination: None,
        }
    }

    pub fn code(&self) -> &PropertyCode {
        &self.code
    }

    pub fn kind(&self) -> PropertyKind {
        self.details.kind()
    }

    pub fn details(&self) -> PropertyDetails {
        self.details
    }

    pub fn deposit(&self) -> u32 {
        self.kind().deposit()
    }

    pub fn is_rented(&self) -> bool {
        self.rented
    }

    pub fn termination(&self) -> Option<NaiveDateTime> {
        self.termination
    }

    /// Pool state for villas, `None` for apartments.
    pub fn clean_pool(&self) -> Option<bool> {
        match self.details {
            PropertyDetails::Villa { clean_pool } => Some(clean_pool),
            PropertyDetails::Apartment => None,
        }
    }

    /// Vacant, and for villas the pool has been serviced.
    pub fn is_ready_to_let(&self) -> bool {
        !self.rented && self.clean_pool().unwrap_or(true)
    }

    pub(crate) fn set_clean_pool(&mut self, clean: bool) -> Result<(), RegistryError> {
        match &mut self.details {
            PropertyDetails::Villa { clean_pool } => {
                *clean_pool = clean;
                Ok(())
            }
            PropertyDetails::Apartment => Err(RegistryError::NotAVilla(self.code.clone())),
        }
    }

    pub(crate) fn assign(&mut self, termination: NaiveDateTime) {
        self.rented = true;
        self.termination = Some(termination);
        if let PropertyDetails::Villa { clean_pool } = &mut self.details {
            *clean_pool = false;
        }
    }

    pub(crate) fn release(&mut self) {
        self.rented = false;
        self.termination = None;
        if let PropertyDetails::Villa { clean_pool } = &mut self.details {
            *clean_pool = true;
        }
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.code)
    }
}
