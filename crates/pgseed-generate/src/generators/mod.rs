use std::collections::BTreeMap;
use std::fmt;

use rand::RngCore;
use serde::Serialize;

use crate::errors::GenerationError;
use crate::model::GeneratedValue;

pub mod custom;
pub mod faker_rs;
pub mod provider;

/// A nullary value producer registered under a `category.method` id.
///
/// Generators never fail and never touch external state; all randomness
/// comes from the `rng` they are handed.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    /// Human label shown in generator pickers, e.g. `Person - Full Name`.
    fn label(&self) -> &'static str;

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue;
}

/// Generator backed by a plain function.
pub struct FnGenerator {
    id: &'static str,
    label: &'static str,
    produce: fn(&mut dyn RngCore) -> GeneratedValue,
}

impl FnGenerator {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        produce: fn(&mut dyn RngCore) -> GeneratedValue,
    ) -> Self {
        Self { id, label, produce }
    }
}

impl Generator for FnGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        (self.produce)(rng)
    }
}

/// Generator drawing uniformly from a fixed literal pool.
pub struct PoolGenerator {
    id: &'static str,
    label: &'static str,
    values: &'static [&'static str],
}

impl PoolGenerator {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self { id, label, values }
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }
}

impl Generator for PoolGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn generate(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        faker_rs::pick(self.values, rng)
    }
}

/// Catalog entry describing one registered generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub id: &'static str,
    pub label: &'static str,
}

/// Split a generator id into `(category, method)`.
///
/// Returns `None` unless the id is exactly two non-empty dot-separated
/// segments.
pub fn parse_generator_id(id: &str) -> Option<(&str, &str)> {
    let (category, method) = id.split_once('.')?;
    if category.is_empty() || method.is_empty() || method.contains('.') {
        return None;
    }
    Some((category, method))
}

/// Registry of every generator pgseed knows, keyed by id.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// Registry holding the built-in provider and custom catalogs.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        provider::register(&mut registry);
        custom::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Add a generator, rejecting malformed or duplicate ids.
    pub fn register_generator(
        &mut self,
        generator: Box<dyn Generator>,
    ) -> Result<(), GenerationError> {
        let id = generator.id();
        if parse_generator_id(id).is_none() {
            return Err(GenerationError::InvalidId(id.to_string()));
        }
        if self.generators.contains_key(id) {
            return Err(GenerationError::DuplicateId(id.to_string()));
        }
        self.generators.insert(id, generator);
        Ok(())
    }

    pub(crate) fn register_builtin(&mut self, generator: impl Generator + 'static) {
        if let Err(err) = self.register_generator(Box::new(generator)) {
            tracing::error!(event = "generator_registration_failed", error = %err);
        }
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.generators.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Registered ids, sorted.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    /// `(id, label)` pairs, sorted by id.
    pub fn catalog(&self) -> Vec<GeneratorInfo> {
        self.generators
            .values()
            .map(|generator| GeneratorInfo {
                id: generator.id(),
                label: generator.label(),
            })
            .collect()
    }

    /// Produce one value for `id` from the thread-local random source.
    ///
    /// Unknown or malformed ids yield [`GeneratedValue::Null`].
    pub fn generate(&self, id: &str) -> GeneratedValue {
        self.generate_with_rng(id, &mut rand::rng())
    }

    pub fn generate_with_rng(&self, id: &str, rng: &mut dyn RngCore) -> GeneratedValue {
        if parse_generator_id(id).is_none() {
            return GeneratedValue::Null;
        }
        match self.generators.get(id) {
            Some(generator) => generator.generate(rng),
            None => GeneratedValue::Null,
        }
    }
}
