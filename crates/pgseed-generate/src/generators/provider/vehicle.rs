use crate::generators::faker_rs::from_charset;
use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};
use crate::model::GeneratedValue;

// VINs never use I, O or Q.
const VIN_CHARSET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

const TYPES: &[&str] = &[
    "Cargo Van",
    "Convertible",
    "Coupe",
    "Crew Cab Pickup",
    "Extended Cab Pickup",
    "Hatchback",
    "Minivan",
    "Passenger Van",
    "SUV",
    "Sedan",
    "Wagon",
];

const MANUFACTURERS: &[&str] = &[
    "Audi", "BMW", "Chevrolet", "Ford", "Honda", "Hyundai", "Kia", "Mazda", "Mercedes Benz",
    "Nissan", "Porsche", "Subaru", "Tesla", "Toyota", "Volkswagen", "Volvo",
];

const MODELS: &[&str] = &[
    "Accord", "Camry", "Civic", "Corolla", "Escalade", "Explorer", "F-150", "Golf", "Model 3",
    "Model S", "Mustang", "Prius", "Silverado", "Wrangler", "Outback", "CX-5",
];

const FUELS: &[&str] = &["Diesel", "Electric", "Gasoline", "Hybrid"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PoolGenerator::new("vehicle.type", "Vehicle - Type", TYPES));
    registry.register_builtin(PoolGenerator::new(
        "vehicle.manufacturer",
        "Vehicle - Manufacturer",
        MANUFACTURERS,
    ));
    registry.register_builtin(PoolGenerator::new("vehicle.model", "Vehicle - Model", MODELS));
    registry.register_builtin(FnGenerator::new("vehicle.vin", "Vehicle - VIN", |rng| {
        GeneratedValue::Text(from_charset(VIN_CHARSET, 17, rng))
    }));
    registry.register_builtin(PoolGenerator::new("vehicle.fuel", "Vehicle - Fuel", FUELS));
}
