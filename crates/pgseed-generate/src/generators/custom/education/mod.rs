use crate::generators::faker_rs::decimal;
use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};

pub const UNIVERSITIES: &[&str] = &[
    "Harvard University",
    "MIT",
    "Stanford University",
    "Oxford University",
    "Cambridge University",
    "Yale University",
    "Princeton University",
    "Columbia University",
];

pub const DEGREES: &[&str] = &[
    "Bachelor of Science",
    "Bachelor of Arts",
    "Master of Science",
    "Master of Arts",
    "MBA",
    "PhD",
    "Associate Degree",
];

pub const COURSES: &[&str] = &[
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Engineering",
    "Business Administration",
    "Psychology",
    "Economics",
    "Literature",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PoolGenerator::new(
        "custom.university",
        "Education - University",
        UNIVERSITIES,
    ));
    registry.register_builtin(PoolGenerator::new(
        "custom.degree",
        "Education - Degree",
        DEGREES,
    ));
    registry.register_builtin(FnGenerator::new("custom.gpa", "Education - GPA", |rng| {
        decimal(2.5, 4.0, 2, rng)
    }));
    registry.register_builtin(PoolGenerator::new(
        "custom.course",
        "Education - Course",
        COURSES,
    ));
}
