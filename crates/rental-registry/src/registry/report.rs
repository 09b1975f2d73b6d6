use chrono::{NaiveDate, NaiveDateTime};
use rand::RngCore;
use serde::Serialize;

use super::clock::Clock;
use super::identifier::{PropertyCode, TenantId};
use super::property::{Property, PropertyKind};
use super::service::RentalRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityEntry {
    pub kind: PropertyKind,
    pub kind_label: &'static str,
    pub total: usize,
    /// Not rented, pool state ignored.
    pub available: usize,
    /// Not rented and, for villas, pool clean.
    pub ready_to_let: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyView {
    pub code: PropertyCode,
    pub kind: PropertyKind,
    pub kind_label: &'static str,
    pub deposit: u32,
    pub rented: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_pool: Option<bool>,
}

impl From<&Property> for PropertyView {
    fn from(property: &Property) -> Self {
        Self {
            code: property.code().clone(),
            kind: property.kind(),
            kind_label: property.kind().label(),
            deposit: property.deposit(),
            rented: property.is_rented(),
            termination: property.termination(),
            clean_pool: property.clean_pool(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub tenant_id: TenantId,
    pub tenant_name: String,
    pub property_code: PropertyCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<NaiveDateTime>,
}

/// Point-in-time snapshot of a registry, ordered for stable output.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryReport {
    pub today: NaiveDate,
    pub availability: Vec<AvailabilityEntry>,
    pub properties: Vec<PropertyView>,
    pub assignments: Vec<AssignmentView>,
    pub terminating_soon: Vec<PropertyCode>,
}

impl RegistryReport {
    pub fn capture<C: Clock, G: RngCore>(registry: &RentalRegistry<C, G>) -> Self {
        let availability = PropertyKind::ALL
            .into_iter()
            .map(|kind| {
                let of_kind: Vec<&Property> = registry
                    .properties()
                    .values()
                    .filter(|property| property.kind() == kind)
                    .collect();
                AvailabilityEntry {
                    kind,
                    kind_label: kind.label(),
                    total: of_kind.len(),
                    available: of_kind.iter().filter(|property| !property.is_rented()).count(),
                    ready_to_let: of_kind
                        .iter()
                        .filter(|property| property.is_ready_to_let())
                        .count(),
                }
            })
            .collect();

        let mut properties: Vec<PropertyView> = registry
            .properties()
            .values()
            .map(PropertyView::from)
            .collect();
        properties.sort_by(|left, right| left.code.cmp(&right.code));

        let mut assignments: Vec<AssignmentView> = registry
            .assignments()
            .iter()
            .map(|(tenant_id, code)| AssignmentView {
                tenant_id: tenant_id.clone(),
                tenant_name: registry
                    .tenant(tenant_id)
                    .map(|tenant| tenant.name().to_string())
                    .unwrap_or_default(),
                property_code: code.clone(),
                termination: registry
                    .property(code)
                    .and_then(Property::termination),
            })
            .collect();
        assignments.sort_by(|left, right| left.tenant_id.cmp(&right.tenant_id));

        let mut terminating_soon: Vec<PropertyCode> = registry
            .properties_terminating_soon()
            .into_iter()
            .map(|property| property.code().clone())
            .collect();
        terminating_soon.sort();

        Self {
            today: registry.today(),
            availability,
            properties,
            assignments,
            terminating_soon,
        }
    }

    pub fn availability_for(&self, kind: PropertyKind) -> Option<&AvailabilityEntry> {
        self.availability.iter().find(|entry| entry.kind == kind)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
