use fake::faker::job;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName, Name, Suffix, Title};

use crate::generators::faker_rs::text;
use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};

const GENDERS: &[&str] = &[
    "Male",
    "Female",
    "Non-binary",
    "Agender",
    "Genderfluid",
    "Bigender",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "person.fullName",
        "Person - Full Name",
        |rng| text(Name(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.firstName",
        "Person - First Name",
        |rng| text(FirstName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.lastName",
        "Person - Last Name",
        |rng| text(LastName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.middleName",
        "Person - Middle Name",
        |rng| text(FirstName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.prefix",
        "Person - Prefix",
        |rng| text(Title(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.suffix",
        "Person - Suffix",
        |rng| text(Suffix(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.jobTitle",
        "Person - Job Title",
        |rng| text(job::en::Title(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.jobArea",
        "Person - Job Area",
        |rng| text(job::en::Field(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "person.bio",
        "Person - Bio",
        |rng| text(Sentence(4..9), rng),
    ));
    registry.register_builtin(PoolGenerator::new(
        "person.gender",
        "Person - Gender",
        GENDERS,
    ));
}
