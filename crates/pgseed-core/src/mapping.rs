use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column name to generator identifier assignments for one table.
///
/// Columns without an entry are skipped during synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorMapping {
    entries: BTreeMap<String, String>,
}

impl GeneratorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a generator to a column, returning the previous assignment.
    ///
    /// An empty identifier clears the assignment, matching a "skip" choice.
    pub fn assign(
        &mut self,
        column: impl Into<String>,
        generator_id: impl Into<String>,
    ) -> Option<String> {
        let column = column.into();
        let generator_id = generator_id.into();
        if generator_id.trim().is_empty() {
            return self.entries.remove(&column);
        }
        self.entries.insert(column, generator_id)
    }

    pub fn unassign(&mut self, column: &str) -> Option<String> {
        self.entries.remove(column)
    }

    /// Drop every assignment, as happens when another table is selected.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(column, id)| (column.as_str(), id.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GeneratorMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (column, id) in iter {
            mapping.assign(column, id);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_assignment_clears_column() {
        let mut mapping = GeneratorMapping::new();
        mapping.assign("email", "internet.email");
        assert_eq!(mapping.get("email"), Some("internet.email"));

        let previous = mapping.assign("email", "");
        assert_eq!(previous.as_deref(), Some("internet.email"));
        assert!(!mapping.contains("email"));
    }

    #[test]
    fn reset_drops_everything() {
        let mut mapping: GeneratorMapping =
            [("a", "person.firstName"), ("b", "custom.vaccine")].into_iter().collect();
        assert_eq!(mapping.len(), 2);
        mapping.reset();
        assert!(mapping.is_empty());
    }
}
