use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::currency::en::{CurrencyCode, CurrencyName};
use fake::faker::finance::en::Bic;
use rand::RngCore;

use crate::generators::faker_rs::{alpha_upper, decimal, numeric, text};
use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};
use crate::model::GeneratedValue;

const ACCOUNT_NAMES: &[&str] = &[
    "Checking Account",
    "Savings Account",
    "Money Market Account",
    "Investment Account",
    "Home Loan Account",
    "Credit Card Account",
    "Auto Loan Account",
    "Personal Loan Account",
];

const TRANSACTION_TYPES: &[&str] = &["deposit", "withdrawal", "payment", "invoice"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PoolGenerator::new(
        "finance.accountName",
        "Finance - Account Name",
        ACCOUNT_NAMES,
    ));
    registry.register_builtin(FnGenerator::new("finance.iban", "Finance - IBAN", |rng| {
        GeneratedValue::Text(gb_iban(rng))
    }));
    registry.register_builtin(FnGenerator::new("finance.bic", "Finance - BIC", |rng| {
        text(Bic(), rng)
    }));
    registry.register_builtin(FnGenerator::new(
        "finance.amount",
        "Finance - Amount",
        |rng| decimal(0.0, 1000.0, 2, rng),
    ));
    registry.register_builtin(PoolGenerator::new(
        "finance.transactionType",
        "Finance - Transaction Type",
        TRANSACTION_TYPES,
    ));
    registry.register_builtin(FnGenerator::new(
        "finance.currencyCode",
        "Finance - Currency Code",
        |rng| text(CurrencyCode(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "finance.currencyName",
        "Finance - Currency Name",
        |rng| text(CurrencyName(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "finance.creditCardNumber",
        "Finance - Credit Card Number",
        |rng| text(CreditCardNumber(), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "finance.creditCardCVV",
        "Finance - Credit Card CVV",
        |rng| GeneratedValue::Text(numeric(3, rng)),
    ));
}

/// UK-format IBAN (`GBkk BBBB SSSS SSAA AAAA`) with valid check digits.
pub(crate) fn gb_iban(rng: &mut dyn RngCore) -> String {
    let bban = format!("{}{}", alpha_upper(4, rng), numeric(14, rng));
    let check = 98 - iban_mod97(&format!("{bban}GB00"));
    format!("GB{check:02}{bban}")
}

/// ISO 7064 mod 97-10 over an IBAN in rearranged form.
pub(crate) fn iban_mod97(rearranged: &str) -> u32 {
    rearranged.chars().fold(0_u32, |acc, ch| match ch.to_digit(36) {
        Some(value) if value >= 10 => (acc * 100 + value) % 97,
        Some(value) => (acc * 10 + value) % 97,
        None => acc,
    })
}
