use rand::RngCore;

use crate::generators::faker_rs::{alpha_upper, numeric};
use crate::generators::{Generator, GeneratorRegistry};
use crate::model::GeneratedValue;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(SsnGenerator);
    registry.register_builtin(PassportGenerator);
    registry.register_builtin(DriverLicenseGenerator);
}

struct SsnGenerator;

impl Generator for SsnGenerator {
    fn id(&self) -> &'static str {
        "custom.ssn"
    }

    fn label(&self) -> &'static str {
        "ID - SSN"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let area = numeric(3, rng);
        let group = numeric(2, rng);
        let serial = numeric(4, rng);
        GeneratedValue::Text(format!("{area}-{group}-{serial}"))
    }
}

struct PassportGenerator;

impl Generator for PassportGenerator {
    fn id(&self) -> &'static str {
        "custom.passport"
    }

    fn label(&self) -> &'static str {
        "ID - Passport Number"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let prefix = alpha_upper(2, rng);
        GeneratedValue::Text(format!("{prefix}{}", numeric(7, rng)))
    }
}

struct DriverLicenseGenerator;

impl Generator for DriverLicenseGenerator {
    fn id(&self) -> &'static str {
        "custom.driverLicense"
    }

    fn label(&self) -> &'static str {
        "ID - Driver License"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let prefix = alpha_upper(1, rng);
        GeneratedValue::Text(format!("{prefix}{}", numeric(7, rng)))
    }
}
