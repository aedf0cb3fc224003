//! Generators resolved against the `fake` provider's category namespace.

use crate::generators::GeneratorRegistry;

mod commerce;
mod company;
mod date;
mod finance;
mod internet;
mod location;
mod person;
mod phone;
mod vehicle;

pub fn register(registry: &mut GeneratorRegistry) {
    commerce::register(registry);
    company::register(registry);
    date::register(registry);
    finance::register(registry);
    internet::register(registry);
    location::register(registry);
    person::register(registry);
    phone::register(registry);
    vehicle::register(registry);
}
