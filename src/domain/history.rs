use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{Transaction, TransactionKind, TransactionRecord};

/// Append-only log of the completed transactions of one account,
/// kept in the order they were recorded.
#[derive(Debug, Default, Clone)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: &Transaction, now: NaiveDateTime) {
        self.records.push(TransactionRecord {
            kind: transaction.kind,
            amount: transaction.amount,
            timestamp: now,
        });
    }

    /// Records of the given kind, or all of them for `None`. The returned
    /// iterator is `Clone`, so it can be walked more than once.
    pub fn filter_by_kind(
        &self,
        kind: Option<TransactionKind>,
    ) -> impl Iterator<Item = &TransactionRecord> + Clone + '_ {
        self.records
            .iter()
            .filter(move |r| kind.is_none_or(|k| r.kind == k))
    }

    pub fn occurred_on(&self, day: NaiveDate) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.records.iter().filter(move |r| r.timestamp.date() == day)
    }

    pub fn occurred_today(&self, today: NaiveDate) -> Vec<&TransactionRecord> {
        self.occurred_on(today).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
