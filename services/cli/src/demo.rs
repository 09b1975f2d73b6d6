use crate::infra::{demo_clock, demo_rng};
use chrono::NaiveDate;
use clap::Args;
use rand::rngs::StdRng;
use rental_registry::config::AppConfig;
use rental_registry::error::AppError;
use rental_registry::registry::{FixedClock, RegistryReport, RentalRegistry};
use rental_registry::telemetry;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of villas to register
    #[arg(long, default_value_t = 3)]
    pub(crate) villas: usize,
    /// Number of apartments to register
    #[arg(long, default_value_t = 3)]
    pub(crate) apartments: usize,
    /// Pin the registry clock to this date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Seed identifier draws and property selection for repeatable output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Pretty-print the JSON report
    #[arg(long)]
    pub(crate) pretty: bool,
}

struct SampleTenant {
    first_name: &'static str,
    last_name: &'static str,
    born: (i32, u32, u32),
    premium: bool,
    requests: &'static [(&'static str, i64)],
}

const SAMPLE_TENANTS: [SampleTenant; 3] = [
    SampleTenant {
        first_name: "Thomas",
        last_name: "Hague",
        born: (1995, 6, 8),
        premium: true,
        requests: &[("Villa", 20), ("Apartment", 10)],
    },
    SampleTenant {
        first_name: "James",
        last_name: "May",
        born: (2006, 5, 8),
        premium: true,
        requests: &[("Villa", 10), ("Apartment", 5)],
    },
    SampleTenant {
        first_name: "Sharon",
        last_name: "Osbourne",
        born: (1994, 2, 16),
        premium: false,
        requests: &[("Villa", 7), ("Apartment", 7)],
    },
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut registry = RentalRegistry::with_parts(
        demo_clock(args.today),
        demo_rng(args.seed),
        config.policy,
    );
    info!(
        ?config.environment,
        villas = args.villas,
        apartments = args.apartments,
        "seeding demo registry"
    );

    seed_registry(&mut registry, &args)?;
    let report = RegistryReport::capture(&registry);
    println!("{}", report.to_json(args.pretty)?);
    Ok(())
}

fn seed_registry(
    registry: &mut RentalRegistry<FixedClock, StdRng>,
    args: &DemoArgs,
) -> Result<(), AppError> {
    for _ in 0..args.villas {
        registry.add_property("Villa")?;
    }
    for _ in 0..args.apartments {
        registry.add_property("Apartment")?;
    }

    for sample in &SAMPLE_TENANTS {
        let (year, month, day) = sample.born;
        let Some(date_of_birth) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let tenant = registry.add_tenant_record(
            sample.first_name,
            sample.last_name,
            date_of_birth,
            sample.premium,
        )?;

        for (kind, duration_days) in sample.requests {
            if registry
                .issue_rental(&tenant, kind, *duration_days)?
                .is_issued()
            {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_registry::registry::{PropertyKind, RentalPolicy};

    fn args(villas: usize, apartments: usize) -> DemoArgs {
        DemoArgs {
            villas,
            apartments,
            today: NaiveDate::from_ymd_opt(2025, 9, 24),
            seed: Some(3),
            pretty: false,
        }
    }

    fn registry(args: &DemoArgs) -> RentalRegistry<FixedClock, StdRng> {
        RentalRegistry::with_parts(
            demo_clock(args.today),
            demo_rng(args.seed),
            RentalPolicy::default(),
        )
    }

    #[test]
    fn sample_tenants_settle_into_expected_kinds() {
        let args = args(3, 3);
        let mut registry = registry(&args);
        seed_registry(&mut registry, &args).expect("demo seeds");

        let report = RegistryReport::capture(&registry);
        assert_eq!(report.assignments.len(), 3);
        let villas = report
            .availability_for(PropertyKind::Villa)
            .expect("villa entry");
        assert_eq!((villas.total, villas.available), (3, 2));
        let apartments = report
            .availability_for(PropertyKind::Apartment)
            .expect("apartment entry");
        assert_eq!((apartments.total, apartments.available), (3, 1));
        assert_eq!(report.terminating_soon.len(), 2);
    }

    #[test]
    fn empty_inventory_still_reports() {
        let args = args(0, 0);
        let mut registry = registry(&args);
        seed_registry(&mut registry, &args).expect("demo seeds");

        let report = RegistryReport::capture(&registry);
        assert!(report.assignments.is_empty());
        assert_eq!(registry.tenants().len(), 3);
    }

    #[test]
    fn seeded_runs_are_repeatable() {
        let args = args(4, 4);
        let mut first = registry(&args);
        let mut second = registry(&args);
        seed_registry(&mut first, &args).expect("demo seeds");
        seed_registry(&mut second, &args).expect("demo seeds");

        let first = RegistryReport::capture(&first).to_json(false).expect("json");
        let second = RegistryReport::capture(&second).to_json(false).expect("json");
        assert_eq!(first, second);
    }
}
