use super::common::*;
use crate::registry::{PropertyKind, RegistryError, RegistryReport};

#[test]
fn add_and_count_properties() {
    let mut registry = registry();
    add(&mut registry, "Villa");
    add(&mut registry, "villa");
    let apartment = add(&mut registry, "APARTMENT");

    assert_eq!(registry.count_available("Villa"), Ok(2));
    assert_eq!(registry.count_available("apartment"), Ok(1));
    assert_eq!(registry.properties().len(), 3);
    assert_eq!(apartment.prefix(), 'A');
    assert_eq!(registry.property_codes().issued_count(), 3);

    assert_eq!(
        registry.add_property("Mansion").map(|property| property.code().clone()),
        Err(RegistryError::UnknownPropertyKind("Mansion".to_string()))
    );
    assert!(registry.count_available("").is_err());
    assert_eq!(registry.properties().len(), 3);
}

#[test]
fn created_property_is_vacant_with_clean_pool() {
    let mut registry = registry();
    let property = registry.add_property("Villa").expect("villa added");

    assert_eq!(property.kind(), PropertyKind::Villa);
    assert_eq!(property.deposit(), 500);
    assert_eq!(property.clean_pool(), Some(true));
    assert!(!property.is_rented());
    assert!(property.termination().is_none());
    assert!(property.to_string().starts_with("Villa V-"));
}

#[test]
fn tenant_ids_use_initials_and_clock_year() {
    let mut registry = registry();
    let tenant = thomas(&mut registry);

    let rendered = tenant.tenant_id().to_string();
    assert!(rendered.starts_with("TH.2025."), "unexpected id {rendered}");
    assert_eq!(rendered.len(), "TH.2025.00".len());
    assert_eq!(registry.tenant(tenant.tenant_id()), Some(&tenant));
    assert!(registry.tenant_ids().is_issued(&rendered));
}

#[test]
fn duplicate_tenant_is_rejected() {
    let mut registry = registry();
    thomas(&mut registry);

    match registry.add_tenant_record("Thomas", "Hague", date(1995, 6, 8), false) {
        Err(RegistryError::DuplicateTenant {
            name,
            date_of_birth,
        }) => {
            assert_eq!(name.to_string(), "Thomas Hague");
            assert_eq!(date_of_birth, date(1995, 6, 8));
        }
        other => panic!("expected duplicate tenant, got {other:?}"),
    }
    assert_eq!(registry.tenants().len(), 1);
}

#[test]
fn duplicate_detection_is_case_sensitive() {
    let mut registry = registry();
    thomas(&mut registry);

    registry
        .add_tenant_record("thomas", "hague", date(1995, 6, 8), true)
        .expect("differently cased name is a different person");
    registry
        .add_tenant_record("Thomas", "Hague", date(1995, 6, 9), true)
        .expect("different birthday is a different person");
    assert_eq!(registry.tenants().len(), 3);
    assert_invariants(&registry);
}

#[test]
fn empty_name_parts_are_rejected() {
    let mut registry = registry();
    assert_eq!(
        registry.add_tenant_record("", "Hague", date(1995, 6, 8), true),
        Err(RegistryError::EmptyNamePart("first name"))
    );
    assert_eq!(
        registry.add_tenant_record("Thomas", "", date(1995, 6, 8), true),
        Err(RegistryError::EmptyNamePart("last name"))
    );
    assert!(registry.tenants().is_empty());
    assert_eq!(registry.tenant_ids().issued_count(), 0);
}

#[test]
fn pool_status_only_applies_to_known_villas() {
    let mut registry = registry();
    let villa = add(&mut registry, "Villa");
    let apartment = add(&mut registry, "Apartment");

    let updated = registry
        .set_pool_clean(&villa, false)
        .expect("villa pool updated");
    assert_eq!(updated.clean_pool(), Some(false));

    assert_eq!(
        registry.set_pool_clean(&apartment, true).map(|_| ()),
        Err(RegistryError::NotAVilla(apartment.clone()))
    );

    let mut other = registry_with_seed(99);
    let foreign = (0..3)
        .map(|_| add(&mut other, "Villa"))
        .find(|code| registry.property(code).is_none())
        .expect("three distinct codes cannot all be on file in a two-property registry");
    assert_eq!(
        registry.set_pool_clean(&foreign, true).map(|_| ()),
        Err(RegistryError::UnknownProperty(foreign.clone()))
    );
}

#[test]
fn report_summarises_registry_state() {
    let mut registry = registry();
    let tenant = thomas(&mut registry);
    let villa = add(&mut registry, "Villa");
    let dirty = add(&mut registry, "Villa");
    add(&mut registry, "Apartment");
    registry
        .set_pool_clean(&dirty, false)
        .expect("pool updated");

    let decision = registry
        .issue_rental(&tenant, "Villa", 5)
        .expect("valid request");
    assert_eq!(
        decision.contract().map(|contract| &contract.property_code),
        Some(&villa)
    );

    let report = RegistryReport::capture(&registry);
    assert_eq!(report.today, date(2025, 9, 24));
    assert_eq!(report.properties.len(), 3);
    assert_eq!(report.assignments.len(), 1);
    assert_eq!(report.assignments[0].tenant_name, "Thomas Hague");
    assert_eq!(report.terminating_soon, vec![villa]);

    let villas = report
        .availability_for(PropertyKind::Villa)
        .expect("villa entry");
    assert_eq!((villas.total, villas.available, villas.ready_to_let), (2, 1, 0));
    let apartments = report
        .availability_for(PropertyKind::Apartment)
        .expect("apartment entry");
    assert_eq!(
        (apartments.total, apartments.available, apartments.ready_to_let),
        (1, 1, 1)
    );

    let json = report.to_json(false).expect("report serialises");
    assert!(json.contains("\"terminating_soon\""));
    assert!(json.contains(&tenant.tenant_id().to_string()));
}
