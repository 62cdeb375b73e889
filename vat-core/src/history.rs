//! In-memory session history of calculations.
//!
//! The store is the only mutable state in the crate. It is ordered newest
//! first, unbounded, and mutable only through prepend, remove-by-id, and
//! clear. Nothing is persisted; history lives and dies with the session.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::models::{CalculationRecord, NewCalculationRecord};

/// Ordered, newest-first store of calculation records.
///
/// Ids are assigned from a per-store monotonic counter, so they are unique
/// within a session. Two calculations with identical inputs produce two
/// distinct records; there is no deduplication.
#[derive(Debug, Default)]
pub struct HistoryStore {
    next_id: i64,
    records: Vec<CalculationRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns identity and creation time to `new`, prepends the record,
    /// and returns a copy of what was stored.
    pub fn add(
        &mut self,
        new: NewCalculationRecord,
    ) -> CalculationRecord {
        self.next_id += 1;
        let record = CalculationRecord {
            id: self.next_id,
            amount: new.amount,
            rate: new.rate,
            direction: new.direction,
            currency: new.currency,
            base_amount: new.base_amount,
            vat_amount: new.vat_amount,
            total: new.total,
            created_at: Utc::now(),
        };
        self.records.insert(0, record.clone());
        record
    }

    /// Removes the record with the given id, if present.
    ///
    /// Removing an absent id is a no-op, not an error; returns whether a
    /// record was actually removed.
    pub fn remove(
        &mut self,
        id: i64,
    ) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    /// Empties the store unconditionally.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, newest first.
    pub fn list(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Newline-joined summary lines in list order, for text export.
    pub fn export_text(&self) -> String {
        self.records
            .iter()
            .map(CalculationRecord::summary_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A [`HistoryStore`] behind a mutex, for multi-caller adaptations.
///
/// The CLI never needs this (each command runs to completion before the
/// next), but a server-side deployment holds one store per session and must
/// serialise `add`/`remove`/`clear`. Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<HistoryStore>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &self,
        new: NewCalculationRecord,
    ) -> CalculationRecord {
        self.inner.lock().expect("history mutex poisoned").add(new)
    }

    pub fn remove(
        &self,
        id: i64,
    ) -> bool {
        self.inner.lock().expect("history mutex poisoned").remove(id)
    }

    pub fn clear(&self) {
        self.inner.lock().expect("history mutex poisoned").clear();
    }

    /// Snapshot of all records, newest first.
    pub fn list(&self) -> Vec<CalculationRecord> {
        self.inner
            .lock()
            .expect("history mutex poisoned")
            .list()
            .to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("history mutex poisoned").is_empty()
    }

    pub fn export_text(&self) -> String {
        self.inner
            .lock()
            .expect("history mutex poisoned")
            .export_text()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::calculate;
    use crate::models::{Currency, VatDirection};

    fn new_record(amount: rust_decimal::Decimal) -> NewCalculationRecord {
        let breakdown = calculate(amount, dec!(18), VatDirection::Excluded).unwrap();
        NewCalculationRecord::from_breakdown(
            amount,
            dec!(18),
            VatDirection::Excluded,
            Currency::Azn,
            breakdown,
        )
    }

    // =========================================================================
    // HistoryStore tests
    // =========================================================================

    #[test]
    fn store_starts_empty() {
        let store = HistoryStore::new();

        assert!(store.is_empty());
        assert_eq!(store.list(), &[]);
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = HistoryStore::new();

        let first = store.add(new_record(dec!(100)));
        let second = store.add(new_record(dec!(200)));

        let ids: Vec<i64> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn add_assigns_unique_monotonic_ids() {
        let mut store = HistoryStore::new();

        let a = store.add(new_record(dec!(1)));
        let b = store.add(new_record(dec!(2)));
        let c = store.add(new_record(dec!(3)));

        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn identical_inputs_produce_distinct_records() {
        let mut store = HistoryStore::new();

        let a = store.add(new_record(dec!(100)));
        let b = store.add(new_record(dec!(100)));

        assert_eq!(store.len(), 2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn remove_deletes_only_the_matching_record() {
        let mut store = HistoryStore::new();
        let first = store.add(new_record(dec!(100)));
        let second = store.add(new_record(dec!(200)));

        let removed = store.remove(first.id);

        assert!(removed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, second.id);
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut store = HistoryStore::new();
        store.add(new_record(dec!(100)));
        store.add(new_record(dec!(200)));
        let before: Vec<i64> = store.list().iter().map(|r| r.id).collect();

        let removed = store.remove(999);

        let after: Vec<i64> = store.list().iter().map(|r| r.id).collect();
        assert!(!removed);
        assert_eq!(before, after);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = HistoryStore::new();
        store.add(new_record(dec!(100)));
        store.add(new_record(dec!(200)));

        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn ids_stay_unique_after_clear() {
        let mut store = HistoryStore::new();
        let before = store.add(new_record(dec!(100)));

        store.clear();
        let after = store.add(new_record(dec!(200)));

        assert_ne!(before.id, after.id);
    }

    #[test]
    fn export_text_joins_summary_lines_in_list_order() {
        let mut store = HistoryStore::new();
        store.add(new_record(dec!(100)));
        store.add(new_record(dec!(200)));

        let export = store.export_text();

        let lines: Vec<&str> = export.lines().collect();
        assert_eq!(
            lines,
            vec![
                "200.00 + 36.00 = 236.00 AZN (18%)",
                "100.00 + 18.00 = 118.00 AZN (18%)",
            ]
        );
    }

    #[test]
    fn export_text_is_empty_for_empty_store() {
        let store = HistoryStore::new();

        assert_eq!(store.export_text(), "");
    }

    // =========================================================================
    // SharedHistory tests
    // =========================================================================

    #[test]
    fn shared_clones_see_the_same_store() {
        let shared = SharedHistory::new();
        let other = shared.clone();

        shared.add(new_record(dec!(100)));

        assert_eq!(other.len(), 1);
    }

    #[test]
    fn concurrent_adds_lose_nothing() {
        let shared = SharedHistory::new();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        shared.add(new_record(dec!(100)));
                    }
                })
            })
            .collect();

        for handle in threads {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 200);
        let mut ids: Vec<i64> = shared.list().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200, "duplicate ids after concurrent adds");
    }

    #[test]
    fn concurrent_remove_and_add_keep_the_store_consistent() {
        let shared = SharedHistory::new();
        let seeded: Vec<i64> = (0..50)
            .map(|_| shared.add(new_record(dec!(100))).id)
            .collect();

        let remover = {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for id in seeded {
                    shared.remove(id);
                }
            })
        };
        let adder = {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    shared.add(new_record(dec!(200)));
                }
            })
        };

        remover.join().unwrap();
        adder.join().unwrap();

        // All 50 seeded records removed, all 50 new ones present.
        assert_eq!(shared.len(), 50);
        assert!(shared.list().iter().all(|r| r.amount == dec!(200)));
    }
}
