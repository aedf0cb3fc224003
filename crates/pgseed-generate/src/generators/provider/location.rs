use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, TimeZone, ZipCode,
};

use crate::generators::faker_rs::{decimal, string, text};
use crate::generators::{FnGenerator, GeneratorRegistry};
use crate::model::GeneratedValue;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "location.city",
        "Location - City",
        |rng| text(CityName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.country",
        "Location - Country",
        |rng| text(CountryName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.state",
        "Location - State",
        |rng| text(StateName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.streetAddress",
        "Location - Street Address",
        |rng| {
            let number = string(BuildingNumber(), rng);
            let street = string(StreetName(), rng);
            GeneratedValue::Text(format!("{number} {street}"))
        },
    ));
    registry.register_builtin(FnGenerator::new(
        "location.zipCode",
        "Location - Zip Code",
        |rng| text(ZipCode(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.latitude",
        "Location - Latitude",
        |rng| decimal(-90.0, 90.0, 4, rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.longitude",
        "Location - Longitude",
        |rng| decimal(-180.0, 180.0, 4, rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "location.timeZone",
        "Location - Time Zone",
        |rng| text(TimeZone(), rng),
    ));
}
