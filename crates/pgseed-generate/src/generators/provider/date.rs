use chrono::{DateTime, Duration, Months, Utc};
use fake::Fake;
use fake::faker::chrono::en::{DateTimeBefore, DateTimeBetween};
use rand::RngCore;

use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};
use crate::model::GeneratedValue;

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new("date.past", "Date - Past", |rng| {
        let now = Utc::now();
        between(now - Duration::days(365), now, rng)
    }));
    registry.register_builtin(FnGenerator::new("date.future", "Date - Future", |rng| {
        let now = Utc::now();
        between(now, now + Duration::days(365), rng)
    }));
    registry.register_builtin(FnGenerator::new("date.recent", "Date - Recent", |rng| {
        let now = Utc::now();
        between(now - Duration::days(1), now, rng)
    }));
    registry.register_builtin(FnGenerator::new(
        "date.birthdate",
        "Date - Birthdate",
        birthdate,
    ));
    registry.register_builtin(PoolGenerator::new("date.month", "Date - Month", MONTHS));
    registry.register_builtin(PoolGenerator::new(
        "date.weekday",
        "Date - Weekday",
        WEEKDAYS,
    ));
}

fn between(start: DateTime<Utc>, end: DateTime<Utc>, rng: &mut dyn RngCore) -> GeneratedValue {
    let value: DateTime<Utc> = DateTimeBetween(start, end).fake_with_rng(rng);
    GeneratedValue::Timestamp(value)
}

/// An adult's birth date: between 18 and 80 years ago.
fn birthdate(rng: &mut dyn RngCore) -> GeneratedValue {
    let now = Utc::now();
    let youngest = now.checked_sub_months(Months::new(18 * 12)).unwrap_or(now);
    let oldest = now
        .checked_sub_months(Months::new(80 * 12))
        .unwrap_or(youngest);
    let value: DateTime<Utc> = if oldest < youngest {
        DateTimeBetween(oldest, youngest).fake_with_rng(rng)
    } else {
        DateTimeBefore(youngest).fake_with_rng(rng)
    };
    GeneratedValue::Date(value.date_naive())
}
