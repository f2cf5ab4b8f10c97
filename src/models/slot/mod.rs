use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Identity of one grid cell: a day column and the minute its slot starts at.
///
/// Ordering is `(day, minute)`, so a sorted set of keys is already grouped by
/// day and ascending in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: usize,
    pub minute: u16,
}

impl SlotKey {
    pub fn new(day: usize, minute: u16) -> Self {
        Self { day, minute }
    }
}

/// How a committed drag mutates the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Draw,
    Erase,
}

/// Visual state of a single cell. Preview wins over Selected while a drag is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Preview,
    Selected,
}

/// A persisted `[start, end]` pair, serialized as a two-element JSON array.
///
/// Start is `HH:MM:00`, end is `HH:MM:59` ("through the end of that slot").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange(pub String, pub String);

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self(start.into(), end.into())
    }

    pub fn start(&self) -> &str {
        &self.0
    }

    pub fn end(&self) -> &str {
        &self.1
    }
}

/// Day index → ordered, non-adjacent ranges. Days without a selection are absent.
pub type AvailabilityPayload = BTreeMap<usize, Vec<TimeRange>>;
