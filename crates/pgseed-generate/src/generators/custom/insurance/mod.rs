use rand::RngCore;

use crate::generators::faker_rs::{alphanumeric, numeric};
use crate::generators::{Generator, GeneratorRegistry, PoolGenerator};
use crate::model::GeneratedValue;

pub const POLICY_TYPES: &[&str] = &[
    "Life Insurance",
    "Health Insurance",
    "Auto Insurance",
    "Home Insurance",
    "Travel Insurance",
    "Disability Insurance",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PolicyNumberGenerator);
    registry.register_builtin(PoolGenerator::new(
        "custom.policyType",
        "Insurance - Policy Type",
        POLICY_TYPES,
    ));
    registry.register_builtin(ClaimNumberGenerator);
}

/// `POL-` followed by eight uppercase letters or digits.
struct PolicyNumberGenerator;

impl Generator for PolicyNumberGenerator {
    fn id(&self) -> &'static str {
        "custom.policy"
    }

    fn label(&self) -> &'static str {
        "Insurance - Policy Number"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let body = alphanumeric(8, rng).to_uppercase();
        GeneratedValue::Text(format!("POL-{body}"))
    }
}

struct ClaimNumberGenerator;

impl Generator for ClaimNumberGenerator {
    fn id(&self) -> &'static str {
        "custom.claimNumber"
    }

    fn label(&self) -> &'static str {
        "Insurance - Claim Number"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Text(format!("CLM-{}", numeric(10, rng)))
    }
}
