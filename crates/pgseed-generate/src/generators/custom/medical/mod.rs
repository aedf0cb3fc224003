use crate::generators::{GeneratorRegistry, PoolGenerator};

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const VACCINES: &[&str] = &[
    "Pfizer",
    "Moderna",
    "AstraZeneca",
    "J&J",
    "Sinovac",
    "Novavax",
    "Sputnik V",
];

pub const DIAGNOSES: &[&str] = &[
    "Hypertension",
    "Type 2 Diabetes",
    "Asthma",
    "Migraine",
    "Arthritis",
    "Depression",
    "Anxiety",
    "GERD",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PoolGenerator::new(
        "custom.bloodType",
        "Medical - Blood Type",
        BLOOD_TYPES,
    ));
    registry.register_builtin(PoolGenerator::new(
        "custom.vaccine",
        "Medical - Vaccine Name",
        VACCINES,
    ));
    registry.register_builtin(PoolGenerator::new(
        "custom.diagnosis",
        "Medical - Diagnosis",
        DIAGNOSES,
    ));
}
