use crate::models::slot::{CellState, SlotKey};
use crate::services::slot_index::SlotIndex;

use super::RenderSink;

/// Day × slot arena of cell states, addressed by key instead of searched.
#[derive(Debug, Clone)]
pub struct CellGrid {
    index: SlotIndex,
    cells: Vec<CellState>,
}

impl CellGrid {
    pub fn new(index: SlotIndex) -> Self {
        let cells = vec![CellState::Empty; index.day_count() * index.slots_per_day()];
        Self { index, cells }
    }

    pub fn day_count(&self) -> usize {
        self.index.day_count()
    }

    pub fn slots_per_day(&self) -> usize {
        self.index.slots_per_day()
    }

    fn position(&self, key: SlotKey) -> Option<usize> {
        if key.day >= self.index.day_count() {
            return None;
        }
        let row = self.index.slot_position(key.minute)?;
        Some(row * self.index.day_count() + key.day)
    }

    pub fn state(&self, key: SlotKey) -> CellState {
        self.position(key)
            .and_then(|position| self.cells.get(position).copied())
            .unwrap_or_default()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Key at a `(day, row)` coordinate, used by the view's hit testing.
    pub fn key_at(&self, day: usize, row: usize) -> Option<SlotKey> {
        if day >= self.index.day_count() || row >= self.index.slots_per_day() {
            return None;
        }
        let minute = u16::try_from(row).ok()? * self.index.step();
        Some(SlotKey::new(day, minute))
    }
}

impl RenderSink for CellGrid {
    fn mark(&mut self, key: SlotKey, state: CellState) {
        match self.position(key) {
            Some(position) => self.cells[position] = state,
            None => log::debug!("Dropping render update for off-grid key {:?}", key),
        }
    }
}
