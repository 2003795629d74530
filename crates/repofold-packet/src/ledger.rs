//! Append-only record of every rejected path.

use repofold_utils::types::{SkipReason, SkipRecord};

/// Insertion-ordered collection of skip records.
///
/// The ledger does not deduplicate; uniqueness of paths is a property of
/// the orchestrator's single pass over the entry set, not of the ledger.
#[derive(Debug, Default, Clone)]
pub struct SkipLedger {
    records: Vec<SkipRecord>,
}

impl SkipLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a skip record.
    pub fn record(
        &mut self,
        path: impl Into<String>,
        reason: SkipReason,
        detail: impl Into<String>,
    ) {
        self.records.push(SkipRecord::new(path, reason, detail));
    }

    /// Append an already-built record (e.g. from classification).
    pub fn push(&mut self, record: SkipRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[SkipRecord] {
        &self.records
    }

    /// Consume the ledger, yielding the records in insertion order.
    #[must_use]
    pub fn into_records(self) -> Vec<SkipRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut ledger = SkipLedger::new();
        ledger.record("b.png", SkipReason::Binary, "binary content");
        ledger.record("a.md", SkipReason::TooLarge, "150 KiB");
        ledger.push(SkipRecord::new("c.log", SkipReason::Filtered, "ignored"));

        let paths: Vec<&str> = ledger.records().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["b.png", "a.md", "c.log"]);
    }

    #[test]
    fn does_not_deduplicate() {
        let mut ledger = SkipLedger::new();
        ledger.record("x", SkipReason::Binary, "binary content");
        ledger.record("x", SkipReason::Binary, "binary content");
        assert_eq!(ledger.len(), 2);
    }
}
