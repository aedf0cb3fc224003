use fake::faker::phone_number::en::PhoneNumber;

use crate::generators::faker_rs::{luhn_check_digit, numeric, text};
use crate::generators::{FnGenerator, GeneratorRegistry};
use crate::model::GeneratedValue;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "phone.number",
        "Phone - Number",
        |rng| text(PhoneNumber(), rng),
    ));
    registry.register_builtin(FnGenerator::new("phone.imei", "Phone - IMEI", |rng| {
        let body = numeric(14, rng);
        let check = luhn_check_digit(&body);
        GeneratedValue::Text(format!("{body}{check}"))
    }));
}
