use chrono::{Local, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rental_registry::registry::FixedClock;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Pin the clock to `today` at noon when given, otherwise to the current local time.
pub(crate) fn demo_clock(today: Option<NaiveDate>) -> FixedClock {
    let now = match today {
        Some(date) => date
            .and_hms_opt(12, 0, 0)
            .unwrap_or_else(|| date.and_time(NaiveTime::MIN)),
        None => Local::now().naive_local(),
    };
    FixedClock::new(now)
}

pub(crate) fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
