use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::error::RegistryError;
use super::identifier::{PropertyCode, PropertyCodeIssuer, TenantId, TenantIdIssuer};
use super::name::Name;
use super::policy::{RefusalReason, RentalContract, RentalDecision, RentalPolicy};
use super::property::{Property, PropertyKind};
use super::tenant::TenantRecord;

/// Central store of properties, tenants, and the tenant -> property assignments.
///
/// The clock and random source are injected so that ages, termination dates,
/// identifier draws, and property selection are reproducible under test.
/// Mutating operations take `&mut self`; wrap the registry in a single `Mutex`
/// for shared use.
pub struct RentalRegistry<C = SystemClock, G = StdRng> {
    clock: C,
    rng: G,
    policy: RentalPolicy,
    property_codes: PropertyCodeIssuer,
    tenant_ids: TenantIdIssuer,
    properties: HashMap<PropertyCode, Property>,
    tenants: HashMap<TenantId, TenantRecord>,
    assignments: HashMap<TenantId, PropertyCode>,
}

impl RentalRegistry {
    pub fn new() -> Self {
        Self::with_policy(RentalPolicy::default())
    }

    pub fn with_policy(policy: RentalPolicy) -> Self {
        Self::with_parts(SystemClock, StdRng::from_entropy(), policy)
    }
}

impl Default for RentalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G> RentalRegistry<C, G>
where
    C: Clock,
    G: RngCore,
{
    pub fn with_parts(clock: C, rng: G, policy: RentalPolicy) -> Self {
        Self {
            clock,
            rng,
            policy,
            property_codes: PropertyCodeIssuer::new(),
            tenant_ids: TenantIdIssuer::new(),
            properties: HashMap::new(),
            tenants: HashMap::new(),
            assignments: HashMap::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn policy(&self) -> &RentalPolicy {
        &self.policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn properties(&self) -> &HashMap<PropertyCode, Property> {
        &self.properties
    }

    pub fn tenants(&self) -> &HashMap<TenantId, TenantRecord> {
        &self.tenants
    }

    pub fn assignments(&self) -> &HashMap<TenantId, PropertyCode> {
        &self.assignments
    }

    pub fn property_codes(&self) -> &PropertyCodeIssuer {
        &self.property_codes
    }

    pub fn tenant_ids(&self) -> &TenantIdIssuer {
        &self.tenant_ids
    }

    pub fn property(&self, code: &PropertyCode) -> Option<&Property> {
        self.properties.get(code)
    }

    pub fn tenant(&self, tenant_id: &TenantId) -> Option<&TenantRecord> {
        self.tenants.get(tenant_id)
    }

    /// The property currently let to `tenant`, if any. Records not on file
    /// with this registry have no rental here.
    pub fn rented_property(&self, tenant: &TenantRecord) -> Option<&Property> {
        self.ensure_on_file(tenant).ok()?;
        self.assignments
            .get(tenant.tenant_id())
            .and_then(|code| self.properties.get(code))
    }

    /// Register a new vacant property of the given kind label.
    pub fn add_property(&mut self, kind: &str) -> Result<&Property, RegistryError> {
        let kind = PropertyKind::parse(kind)?;
        let code = self
            .property_codes
            .issue(kind.code_prefix(), &mut self.rng)?;

        debug!(property_code = %code, %kind, "property added");
        let property = self
            .properties
            .entry(code.clone())
            .or_insert_with(|| Property::new(code, kind));
        Ok(&*property)
    }

    /// Vacant properties of `kind`, regardless of pool state.
    pub fn count_available(&self, kind: &str) -> Result<usize, RegistryError> {
        let kind = PropertyKind::parse(kind)?;
        Ok(self
            .properties
            .values()
            .filter(|property| property.kind() == kind && !property.is_rented())
            .count())
    }

    pub fn add_tenant_record(
        &mut self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
        premium: bool,
    ) -> Result<TenantRecord, RegistryError> {
        let name = Name::new(first_name, last_name)?;

        if self
            .tenants
            .values()
            .any(|existing| existing.same_person(&name, date_of_birth))
        {
            return Err(RegistryError::DuplicateTenant {
                name,
                date_of_birth,
            });
        }

        let year_of_issue = self.clock.today().year();
        let tenant_id = self
            .tenant_ids
            .issue(&name, year_of_issue, &mut self.rng)?;
        let record = TenantRecord::new(tenant_id.clone(), name, date_of_birth, premium);

        debug!(%tenant_id, "tenant record added");
        self.tenants.insert(tenant_id, record.clone());
        Ok(record)
    }

    /// Try to let a property of `kind` to `tenant` for `duration_days`.
    ///
    /// Argument problems are errors; eligibility and inventory problems come back
    /// as [`RentalDecision::Refused`].
    pub fn issue_rental(
        &mut self,
        tenant: &TenantRecord,
        kind: &str,
        duration_days: i64,
    ) -> Result<RentalDecision, RegistryError> {
        let now = self.clock.now();
        let age = tenant.age_on(now.date());
        let kind = PropertyKind::parse(kind)?;
        self.ensure_on_file(tenant)?;

        let mut eligible: Vec<&PropertyCode> = self
            .properties
            .values()
            .filter(|property| property.kind() == kind && property.is_ready_to_let())
            .map(Property::code)
            .collect();
        // HashMap order is unstable; sort so a seeded rng picks reproducibly.
        eligible.sort();

        if self.assignments.contains_key(tenant.tenant_id()) {
            return Ok(refuse(tenant, kind, RefusalReason::AlreadyRenting));
        }

        if eligible.is_empty() {
            let vacant_villas = kind == PropertyKind::Villa
                && self
                    .properties
                    .values()
                    .any(|property| property.kind() == kind && !property.is_rented());
            let reason = if vacant_villas {
                RefusalReason::NoCleanPoolVillas
            } else {
                RefusalReason::AllRented { kind }
            };
            return Ok(refuse(tenant, kind, reason));
        }

        let required = self.policy.minimum_age(kind);
        if age < i32::from(required) {
            let reason = RefusalReason::UnderAge {
                kind,
                required,
                shortfall: i32::from(required) - age,
            };
            return Ok(refuse(tenant, kind, reason));
        }
        if kind == PropertyKind::Villa && !tenant.is_premium() {
            return Ok(refuse(tenant, kind, RefusalReason::NotPremium));
        }

        let code = eligible[self.rng.gen_range(0..eligible.len())].clone();
        let termination = termination_after(now, duration_days)?;
        let Some(property) = self.properties.get_mut(&code) else {
            return Err(RegistryError::UnknownProperty(code));
        };
        property.assign(termination);
        self.assignments
            .insert(tenant.tenant_id().clone(), code.clone());

        let contract = RentalContract {
            tenant_id: tenant.tenant_id().clone(),
            tenant_name: tenant.name().to_string(),
            property_code: code,
            kind,
            duration_days,
            termination,
        };
        info!(
            tenant_id = %contract.tenant_id,
            property_code = %contract.property_code,
            %termination,
            "{}",
            contract.summary()
        );
        Ok(RentalDecision::Issued(contract))
    }

    /// End the tenant's current rental and return the released property.
    pub fn terminate_rental(&mut self, tenant: &TenantRecord) -> Result<&Property, RegistryError> {
        self.ensure_on_file(tenant)?;
        let tenant_id = tenant.tenant_id();
        let code = self
            .assignments
            .get(tenant_id)
            .cloned()
            .ok_or_else(|| RegistryError::NoActiveRental(tenant_id.clone()))?;

        let Some(property) = self.properties.get_mut(&code) else {
            return Err(RegistryError::MissingRentalProperty {
                tenant_id: tenant_id.clone(),
                code,
            });
        };

        self.assignments.remove(tenant_id);
        property.release();

        info!(
            %tenant_id,
            property_code = %code,
            "{}'s rental of {} has been terminated",
            tenant.name(),
            property
        );
        Ok(&*property)
    }

    /// Rented properties whose termination falls within the notice window,
    /// inclusive at both ends.
    pub fn properties_terminating_soon(&self) -> HashSet<&Property> {
        let now = self.clock.now();
        let horizon = now
            .checked_add_signed(Duration::days(i64::from(self.policy.notice_window_days)))
            .unwrap_or(NaiveDateTime::MAX);

        self.assignments
            .values()
            .filter_map(|code| self.properties.get(code))
            .filter(|property| {
                property
                    .termination()
                    .is_some_and(|termination| termination >= now && termination <= horizon)
            })
            .collect()
    }

    /// Record that a villa's pool has been serviced or has gone dirty.
    pub fn set_pool_clean(
        &mut self,
        code: &PropertyCode,
        clean: bool,
    ) -> Result<&Property, RegistryError> {
        let property = self
            .properties
            .get_mut(code)
            .ok_or_else(|| RegistryError::UnknownProperty(code.clone()))?;
        property.set_clean_pool(clean)?;

        debug!(property_code = %code, clean, "pool status updated");
        Ok(&*property)
    }

    fn ensure_on_file(&self, tenant: &TenantRecord) -> Result<(), RegistryError> {
        match self.tenants.get(tenant.tenant_id()) {
            Some(record) if record == tenant => Ok(()),
            _ => Err(RegistryError::UnknownTenant(tenant.tenant_id().clone())),
        }
    }
}

#[cfg(test)]
impl<C, G> RentalRegistry<C, G> {
    /// Drop a property record while leaving any assignment to it in place.
    pub(crate) fn forget_property(&mut self, code: &PropertyCode) -> Option<Property> {
        self.properties.remove(code)
    }
}

fn refuse(tenant: &TenantRecord, kind: PropertyKind, reason: RefusalReason) -> RentalDecision {
    warn!(
        tenant_id = %tenant.tenant_id(),
        %kind,
        "rental refused for {}: {}",
        tenant.name(),
        reason.summary()
    );
    RentalDecision::Refused(reason)
}

fn termination_after(
    now: NaiveDateTime,
    duration_days: i64,
) -> Result<NaiveDateTime, RegistryError> {
    Duration::try_days(duration_days)
        .and_then(|duration| now.checked_add_signed(duration))
        .ok_or(RegistryError::DurationOutOfRange(duration_days))
}
