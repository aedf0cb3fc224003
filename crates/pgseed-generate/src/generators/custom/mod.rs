use crate::generators::GeneratorRegistry;

pub mod education;
pub mod identity;
pub mod insurance;
pub mod medical;

pub fn register(registry: &mut GeneratorRegistry) {
    medical::register(registry);
    education::register(registry);
    insurance::register(registry);
    identity::register(registry);
}
