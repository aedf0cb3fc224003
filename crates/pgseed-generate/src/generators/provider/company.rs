use fake::faker::company::en::{Bs, CatchPhrase, CompanyName};

use crate::generators::faker_rs::text;
use crate::generators::{FnGenerator, GeneratorRegistry};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "company.name",
        "Company - Name",
        |rng| text(CompanyName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "company.catchPhrase",
        "Company - Catchphrase",
        |rng| text(CatchPhrase(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "company.buzzPhrase",
        "Company - Business Type",
        |rng| text(Bs(), rng),
    ));
}
