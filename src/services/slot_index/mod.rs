//! Conversions between day labels, `HH:MM` strings, minutes of the day and
//! slot keys for one configured grid.

use chrono::{NaiveTime, Timelike};

use crate::models::settings::GridConfig;
use crate::models::slot::{SlotKey, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::utils::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIndex {
    config: GridConfig,
}

impl SlotIndex {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn step(&self) -> u16 {
        self.config.step()
    }

    pub fn day_count(&self) -> usize {
        self.config.day_count()
    }

    pub fn slots_per_day(&self) -> usize {
        usize::from(MINUTES_PER_DAY / self.step())
    }

    /// Start minute of every slot in a day, ascending.
    pub fn slot_minutes(&self) -> impl Iterator<Item = u16> {
        (0..MINUTES_PER_DAY).step_by(usize::from(self.step()))
    }

    /// Parses `HH:MM` (or `HH:MM:SS`, seconds ignored) into a minute of the day.
    pub fn to_minutes(time: &str) -> Result<u16, ParseError> {
        let trimmed = time.trim();
        let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map_err(|_| ParseError::MalformedTime(time.to_string()))?;

        // hour < 24 and minute < 60, so this always fits
        Ok((parsed.hour() * 60 + parsed.minute()) as u16)
    }

    /// Zero-padded `HH:MM` for a minute in `[0, 1440)`.
    pub fn to_time_string(minutes: u16) -> String {
        debug_assert!(minutes < MINUTES_PER_DAY);
        format!(
            "{:02}:{:02}",
            minutes / MINUTES_PER_HOUR,
            minutes % MINUTES_PER_HOUR
        )
    }

    /// Inclusive `(hour, minute)` end of the slot starting at `start`.
    pub fn slot_end_label(&self, start: u16) -> (u16, u16) {
        let mut end_hour = start / MINUTES_PER_HOUR;
        let mut end_minute = start % MINUTES_PER_HOUR + self.step() - 1;
        if end_minute >= MINUTES_PER_HOUR {
            end_hour += end_minute / MINUTES_PER_HOUR;
            end_minute %= MINUTES_PER_HOUR;
        }
        (end_hour, end_minute)
    }

    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.config.days().iter().position(|day| day == label)
    }

    pub fn day_label(&self, index: usize) -> Option<&str> {
        self.config.days().get(index).map(String::as_str)
    }

    pub fn is_aligned(&self, minute: u16) -> bool {
        minute < MINUTES_PER_DAY && minute % self.step() == 0
    }

    pub fn is_valid(&self, key: SlotKey) -> bool {
        key.day < self.day_count() && self.is_aligned(key.minute)
    }

    /// Row of a minute in the grid, when it starts a slot.
    pub fn slot_position(&self, minute: u16) -> Option<usize> {
        self.is_aligned(minute)
            .then(|| usize::from(minute / self.step()))
    }

    /// Resolves a labelled cell reference. Anything unknown or off-grid is `None`.
    pub fn resolve(&self, day: &str, time: &str) -> Option<SlotKey> {
        let day = self.day_index(day)?;
        let minute = Self::to_minutes(time).ok()?;
        let key = SlotKey::new(day, minute);
        self.is_valid(key).then_some(key)
    }
}
