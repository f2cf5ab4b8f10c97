//! The committed set of selected slots and rectangular draw/erase fills.

use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::models::slot::{Mode, SlotKey};
use crate::services::slot_index::SlotIndex;

#[derive(Debug, Clone)]
pub struct SelectionSet {
    index: SlotIndex,
    keys: BTreeSet<SlotKey>,
}

impl SelectionSet {
    pub fn new(index: SlotIndex) -> Self {
        Self {
            index,
            keys: BTreeSet::new(),
        }
    }

    pub fn index(&self) -> &SlotIndex {
        &self.index
    }

    /// Every key inside the day×time rectangle spanned by two corners, in
    /// either order. Empty when a corner is not a valid slot.
    fn rectangle(&self, a: SlotKey, b: SlotKey) -> Vec<SlotKey> {
        if !self.index.is_valid(a) || !self.index.is_valid(b) {
            log::debug!("Ignoring rectangle with off-grid corner {:?} / {:?}", a, b);
            return Vec::new();
        }

        let (day_low, day_high) = (a.day.min(b.day), a.day.max(b.day));
        let (time_low, time_high) = (a.minute.min(b.minute), a.minute.max(b.minute));
        let step = usize::from(self.index.step());

        (day_low..=day_high)
            .flat_map(|day| {
                (time_low..=time_high)
                    .step_by(step)
                    .map(move |minute| SlotKey::new(day, minute))
            })
            .collect()
    }

    /// Adds (draw) or removes (erase) the rectangle between two corners.
    /// Returns how many keys actually changed.
    pub fn apply_range(&mut self, a: SlotKey, b: SlotKey, mode: Mode) -> usize {
        let mut changed = 0;
        for key in self.rectangle(a, b) {
            let did_change = match mode {
                Mode::Draw => self.keys.insert(key),
                Mode::Erase => self.keys.remove(&key),
            };
            if did_change {
                changed += 1;
            }
        }
        changed
    }

    /// Same as [`apply_range`](Self::apply_range) but from day labels and
    /// `HH:MM` strings. Unresolvable corners leave the selection untouched.
    pub fn apply_labeled_range(
        &mut self,
        day_a: &str,
        time_a: &str,
        day_b: &str,
        time_b: &str,
        mode: Mode,
    ) -> usize {
        match (self.index.resolve(day_a, time_a), self.index.resolve(day_b, time_b)) {
            (Some(a), Some(b)) => self.apply_range(a, b, mode),
            _ => {
                log::debug!(
                    "Ignoring range {} {} .. {} {}: unknown cell",
                    day_a,
                    time_a,
                    day_b,
                    time_b
                );
                0
            }
        }
    }

    /// Keys the rectangle would cover, without touching the selection.
    pub fn preview(&self, a: SlotKey, b: SlotKey) -> BTreeSet<SlotKey> {
        self.rectangle(a, b).into_iter().collect()
    }

    /// Adds already-validated keys; off-grid keys are dropped.
    pub fn extend<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = SlotKey>,
    {
        let before = self.keys.len();
        for key in keys {
            if self.index.is_valid(key) {
                self.keys.insert(key);
            }
        }
        self.keys.len() - before
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: SlotKey) -> bool {
        self.keys.contains(&key)
    }

    /// Selected start minutes for one day, ascending.
    pub fn keys_for_day(&self, day: usize) -> Vec<u16> {
        self.keys
            .range(SlotKey::new(day, 0)..=SlotKey::new(day, u16::MAX))
            .map(|key| key.minute)
            .collect()
    }

    /// Days that have at least one selected slot, ascending.
    pub fn selected_days(&self) -> Vec<usize> {
        let mut days: Vec<usize> = self.keys.iter().map(|key| key.day).collect();
        days.dedup();
        days
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, SlotKey> {
        self.keys.iter()
    }

    pub fn keys(&self) -> &BTreeSet<SlotKey> {
        &self.keys
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}
