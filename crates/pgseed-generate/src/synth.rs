use std::collections::BTreeSet;

use rand::RngCore;
use tracing::{debug, warn};

use pgseed_core::GeneratorMapping;

use crate::generators::GeneratorRegistry;
use crate::model::RowRecord;

/// Turns a column list and a generator mapping into in-memory rows.
#[derive(Debug, Clone, Copy)]
pub struct RowSynthesizer<'r> {
    registry: &'r GeneratorRegistry,
}

impl<'r> RowSynthesizer<'r> {
    pub fn new(registry: &'r GeneratorRegistry) -> Self {
        Self { registry }
    }

    /// Build exactly `row_count` rows from the thread-local random source.
    pub fn synthesize<S: AsRef<str>>(
        &self,
        columns: &[S],
        mapping: &GeneratorMapping,
        row_count: usize,
    ) -> Vec<RowRecord> {
        self.synthesize_with_rng(columns, mapping, row_count, &mut rand::rng())
    }

    /// Build exactly `row_count` rows.
    ///
    /// Mapped columns are present in every row, in `columns` order, even
    /// when their generator yields `Null`. Unmapped columns are absent.
    pub fn synthesize_with_rng<S: AsRef<str>>(
        &self,
        columns: &[S],
        mapping: &GeneratorMapping,
        row_count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<RowRecord> {
        let plan: Vec<(&str, &str)> = columns
            .iter()
            .filter_map(|column| {
                let column = column.as_ref();
                mapping.get(column).map(|id| (column, id))
            })
            .collect();

        self.report_mapping_issues(columns, mapping, &plan);
        debug!(
            columns = columns.len(),
            mapped = plan.len(),
            rows = row_count,
            "synthesizing rows"
        );

        (0..row_count)
            .map(|_| {
                plan.iter()
                    .map(|(column, id)| (*column, self.registry.generate_with_rng(id, rng)))
                    .collect::<RowRecord>()
            })
            .collect()
    }

    fn report_mapping_issues<S: AsRef<str>>(
        &self,
        columns: &[S],
        mapping: &GeneratorMapping,
        plan: &[(&str, &str)],
    ) {
        for (column, _) in mapping.iter() {
            if !columns.iter().any(|known| known.as_ref() == column) {
                warn!(column = %column, "mapping names a column the table does not have");
            }
        }

        let unknown: BTreeSet<&str> = plan
            .iter()
            .map(|(_, id)| *id)
            .filter(|id| !self.registry.contains(id))
            .collect();
        for id in unknown {
            warn!(generator = %id, "unknown generator id; column will be null");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_rows_yields_empty_sequence() {
        let registry = GeneratorRegistry::new();
        let mapping: GeneratorMapping = [("email", "internet.email")].into_iter().collect();
        let rows = RowSynthesizer::new(&registry).synthesize(&["email"], &mapping, 0);
        assert!(rows.is_empty());
    }

    #[test]
    fn keys_follow_column_order_not_mapping_order() {
        let registry = GeneratorRegistry::new();
        let mapping: GeneratorMapping = [("zeta", "person.firstName"), ("alpha", "phone.imei")]
            .into_iter()
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let rows = RowSynthesizer::new(&registry).synthesize_with_rng(
            &["zeta", "alpha"],
            &mapping,
            2,
            &mut rng,
        );

        for row in rows {
            assert_eq!(row.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        }
    }
}
