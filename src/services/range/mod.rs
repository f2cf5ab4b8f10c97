//! Collapses selected slots into per-day time ranges and expands persisted
//! ranges back into slots.
//!
//! Compression walks each day's minutes in numeric order and closes a run as
//! soon as the next selected minute is not exactly one step away. Each run is
//! written as `[HH:MM:00, HH:MM:59]` where the end is the last minute of the
//! run's final slot. Expansion walks `start..=end` by step, so the end marker
//! lands inside the final slot and a compress/expand round trip is lossless.

use std::collections::BTreeSet;

use crate::models::slot::{AvailabilityPayload, SlotKey, TimeRange};
use crate::services::selection::SelectionSet;
use crate::services::slot_index::SlotIndex;
use crate::utils::error::ParseError;

#[derive(Debug, Clone)]
pub struct RangeCompressor {
    index: SlotIndex,
}

impl RangeCompressor {
    pub fn new(index: SlotIndex) -> Self {
        Self { index }
    }

    pub fn compress(&self, selection: &SelectionSet) -> AvailabilityPayload {
        selection
            .selected_days()
            .into_iter()
            .map(|day| (day, self.compress_day(&selection.keys_for_day(day))))
            .collect()
    }

    /// Ranges for one day's selected start minutes, in any order. Minutes
    /// that do not start a slot on this grid are skipped.
    pub fn compress_day(&self, minutes: &[u16]) -> Vec<TimeRange> {
        let step = self.index.step();
        let mut sorted: Vec<u16> = minutes
            .iter()
            .copied()
            .filter(|&minute| self.index.is_aligned(minute))
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut ranges = Vec::new();
        let mut run_start: Option<u16> = None;

        for (i, &current) in sorted.iter().enumerate() {
            let start = *run_start.get_or_insert(current);
            let continues = sorted
                .get(i + 1)
                .is_some_and(|&next| current.checked_add(step) == Some(next));

            if !continues {
                ranges.push(self.range_for_run(start, current));
                run_start = None;
            }
        }

        ranges
    }

    fn range_for_run(&self, first: u16, last: u16) -> TimeRange {
        let (end_hour, end_minute) = self.index.slot_end_label(last);
        TimeRange::new(
            format!("{}:00", SlotIndex::to_time_string(first)),
            format!("{:02}:{:02}:59", end_hour, end_minute),
        )
    }

    /// Every slot key described by the payload. Fails as a whole on the first
    /// bad entry, so callers never see a partial expansion.
    pub fn expand(&self, payload: &AvailabilityPayload) -> Result<BTreeSet<SlotKey>, ParseError> {
        let mut keys = BTreeSet::new();
        for (&day, ranges) in payload {
            for range in ranges {
                keys.extend(self.expand_range(day, range)?);
            }
        }
        Ok(keys)
    }

    pub fn expand_range(&self, day: usize, range: &TimeRange) -> Result<Vec<SlotKey>, ParseError> {
        if day >= self.index.day_count() {
            return Err(ParseError::UnknownDay(day));
        }

        let start = SlotIndex::to_minutes(range.start())?;
        let end = SlotIndex::to_minutes(range.end())?;
        if !self.index.is_aligned(start) {
            return Err(ParseError::Misaligned {
                time: range.start().to_string(),
                step: self.index.step(),
            });
        }

        Ok((start..=end)
            .step_by(usize::from(self.index.step()))
            .map(|minute| SlotKey::new(day, minute))
            .collect())
    }
}
