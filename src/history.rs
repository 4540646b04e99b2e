use crate::transaction::TransactionKind;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// A descriptive record of one applied transaction.
///
/// Fields are public so the display layer can render statements without
/// going through the ledger.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    /// Builds a record stamped with the current local time.
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Local::now(),
        }
    }
}

/// Append-only transaction log owned by exactly one account.
///
/// Records are never reordered or deleted; insertion order is chronological
/// order.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lazy replay of the log in insertion order.
    ///
    /// With a filter, only records whose kind tag matches it (case
    /// insensitively) are yielded. Each call re-scans from the start and
    /// never mutates the log.
    pub fn report<'a>(
        &'a self,
        kind: Option<&'a str>,
    ) -> impl Iterator<Item = &'a TransactionRecord> {
        self.records.iter().filter(move |record| match kind {
            Some(tag) => record.kind.as_str().eq_ignore_ascii_case(tag),
            None => true,
        })
    }

    /// Records whose date component equals the current local date,
    /// evaluated at call time.
    pub fn transactions_today(&self) -> Vec<&TransactionRecord> {
        let today = Local::now().date_naive();
        self.records
            .iter()
            .filter(|record| record.timestamp.date_naive() == today)
            .collect()
    }
}
