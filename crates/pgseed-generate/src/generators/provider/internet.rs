use fake::faker::internet::en::{
    DomainSuffix, FreeEmail, IPv4, IPv6, MACAddress, Password, UserAgent, Username,
};
use fake::faker::lorem::en::Word;
use rand::RngCore;

use crate::generators::faker_rs::{string, text};
use crate::generators::{FnGenerator, GeneratorRegistry};
use crate::model::GeneratedValue;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "internet.email",
        "Internet - Email",
        |rng| text(FreeEmail(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.username",
        "Internet - Username",
        |rng| text(Username(), rng),
    ));
    registry.register_builtin(FnGenerator::new("internet.url", "Internet - URL", |rng| {
        GeneratedValue::Text(format!("https://www.{}", domain_name(rng)))
    }));
    registry.register_builtin(FnGenerator::new(
        "internet.domainName",
        "Internet - Domain Name",
        |rng| GeneratedValue::Text(domain_name(rng)),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.ip",
        "Internet - IP Address",
        |rng| text(IPv4(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.ipv6",
        "Internet - IPv6",
        |rng| text(IPv6(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.userAgent",
        "Internet - User Agent",
        |rng| text(UserAgent(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.password",
        "Internet - Password",
        |rng| text(Password(12..17), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "internet.mac",
        "Internet - MAC Address",
        |rng| text(MACAddress(), rng),
    ));
}

fn domain_name(rng: &mut dyn RngCore) -> String {
    let word = string(Word(), rng).to_lowercase();
    let suffix = string(DomainSuffix(), rng);
    format!("{word}.{suffix}")
}
