//! Human-readable identifiers for properties and tenants.
//!
//! Both kinds are drawn at random and retried until the rendered string has not
//! been handed out before by the same issuer. Each registry owns its issuers, so
//! uniqueness holds per registry rather than per process.

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

use super::error::RegistryError;
use super::name::Name;

/// Distinct suffixes available under one property prefix (26 letters x 100 numbers).
pub const PROPERTY_CODE_CAPACITY: usize = 26 * 100;
/// Distinct serials available for one initials/year pair.
pub const TENANT_SERIAL_CAPACITY: usize = 100;

/// Property identifier rendered as `"<prefix>-<letter><digits>"`, e.g. `V-K07`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyCode {
    prefix: char,
    suffix: String,
}

impl PropertyCode {
    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for PropertyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.suffix)
    }
}

impl Serialize for PropertyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tenant identifier rendered as `"<initials>.<year>.<serial>"`, e.g. `TH.2025.42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId {
    initials: String,
    year_of_issue: i32,
    serial: String,
}

impl TenantId {
    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn year_of_issue(&self) -> i32 {
        self.year_of_issue
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:04}.{}",
            self.initials, self.year_of_issue, self.serial
        )
    }
}

impl Serialize for TenantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Remembers every rendered identifier, bucketed by its fixed part so a full
/// bucket can be detected instead of retrying forever.
#[derive(Debug, Default)]
struct IssuedSet {
    buckets: HashMap<String, HashSet<String>>,
}

impl IssuedSet {
    fn issue<T, F>(&mut self, bucket: &str, capacity: usize, mut draw: F) -> Result<T, RegistryError>
    where
        T: fmt::Display,
        F: FnMut() -> T,
    {
        let issued = self.buckets.entry(bucket.to_string()).or_default();
        if issued.len() >= capacity {
            return Err(RegistryError::IdentifierSpaceExhausted {
                bucket: bucket.to_string(),
            });
        }

        loop {
            let candidate = draw();
            if issued.insert(candidate.to_string()) {
                return Ok(candidate);
            }
        }
    }

    fn contains(&self, rendered: &str) -> bool {
        self.buckets.values().any(|issued| issued.contains(rendered))
    }

    fn len(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }
}

/// Issues [`PropertyCode`]s for the two property prefixes.
#[derive(Debug, Default)]
pub struct PropertyCodeIssuer {
    issued: IssuedSet,
}

impl PropertyCodeIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue<R: Rng + ?Sized>(
        &mut self,
        prefix: char,
        rng: &mut R,
    ) -> Result<PropertyCode, RegistryError> {
        if prefix != 'V' && prefix != 'A' {
            return Err(RegistryError::InvalidPrefix(prefix));
        }

        self.issued
            .issue(&prefix.to_string(), PROPERTY_CODE_CAPACITY, || {
                let letter = char::from(rng.gen_range(b'A'..=b'Z'));
                let digits: u8 = rng.gen_range(0..100);
                PropertyCode {
                    prefix,
                    suffix: format!("{letter}{digits:02}"),
                }
            })
    }

    pub fn is_issued(&self, rendered: &str) -> bool {
        self.issued.contains(rendered)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

/// Issues [`TenantId`]s; serials are unique per initials and year of issue.
#[derive(Debug, Default)]
pub struct TenantIdIssuer {
    issued: IssuedSet,
}

impl TenantIdIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue<R: Rng + ?Sized>(
        &mut self,
        name: &Name,
        year_of_issue: i32,
        rng: &mut R,
    ) -> Result<TenantId, RegistryError> {
        let initials = name.initials();
        let bucket = format!("{initials}.{year_of_issue:04}");

        self.issued.issue(&bucket, TENANT_SERIAL_CAPACITY, || {
            let serial: u8 = rng.gen_range(0..100);
            TenantId {
                initials: initials.clone(),
                year_of_issue,
                serial: format!("{serial:02}"),
            }
        })
    }

    pub fn is_issued(&self, rendered: &str) -> bool {
        self.issued.contains(rendered)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
