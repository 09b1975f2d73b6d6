use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::registry::{
    FixedClock, PropertyCode, RentalPolicy, RentalRegistry, TenantRecord,
};

pub(super) type TestRegistry = RentalRegistry<FixedClock, StdRng>;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn now() -> NaiveDateTime {
    date(2025, 9, 24)
        .and_hms_opt(10, 30, 0)
        .expect("valid timestamp")
}

pub(super) fn registry() -> TestRegistry {
    registry_with_seed(2025)
}

pub(super) fn registry_with_seed(seed: u64) -> TestRegistry {
    RentalRegistry::with_parts(
        FixedClock::new(now()),
        StdRng::seed_from_u64(seed),
        RentalPolicy::default(),
    )
}

pub(super) fn add(registry: &mut TestRegistry, kind: &str) -> PropertyCode {
    registry
        .add_property(kind)
        .expect("property added")
        .code()
        .clone()
}

/// Adult premium tenant, 30 on the fixture date.
pub(super) fn thomas(registry: &mut TestRegistry) -> TenantRecord {
    registry
        .add_tenant_record("Thomas", "Hague", date(1995, 6, 8), true)
        .expect("tenant added")
}

/// Premium tenant aged 19 on the fixture date.
pub(super) fn young_premium(registry: &mut TestRegistry) -> TenantRecord {
    registry
        .add_tenant_record("James", "May", date(2006, 5, 8), true)
        .expect("tenant added")
}

/// Standard-class tenant aged 31 on the fixture date.
pub(super) fn standard_adult(registry: &mut TestRegistry) -> TenantRecord {
    registry
        .add_tenant_record("Sharon", "Osbourne", date(1994, 2, 16), false)
        .expect("tenant added")
}

pub(super) fn rented_codes(registry: &TestRegistry) -> HashSet<PropertyCode> {
    registry
        .properties()
        .values()
        .filter(|property| property.is_rented())
        .map(|property| property.code().clone())
        .collect()
}

pub(super) fn assert_invariants(registry: &TestRegistry) {
    let assigned: HashSet<&PropertyCode> = registry.assignments().values().collect();
    assert_eq!(
        assigned.len(),
        registry.assignments().len(),
        "a property is assigned to more than one tenant"
    );

    for (tenant_id, code) in registry.assignments() {
        assert!(registry.tenants().contains_key(tenant_id), "unknown tenant {tenant_id}");
        assert!(registry.properties().contains_key(code), "unknown property {code}");
    }

    for property in registry.properties().values() {
        assert_eq!(
            property.is_rented(),
            assigned.contains(property.code()),
            "rented flag out of sync for {property}"
        );
        assert_eq!(
            property.is_rented(),
            property.termination().is_some(),
            "termination out of sync for {property}"
        );
    }

    let people: HashSet<&TenantRecord> = registry.tenants().values().collect();
    assert_eq!(people.len(), registry.tenants().len(), "duplicate tenant on file");
}
