//! Drag-to-paint gesture handling for one grid.
//!
//! A press anchors a drag, moves redraw a preview rectangle, and a release on
//! a cell commits the rectangle in the current mode. A release anywhere else
//! ([`GridController::global_release`]) drops the drag without committing.

mod cell_grid;

pub use cell_grid::CellGrid;

use std::collections::BTreeSet;

use crate::models::settings::GridConfig;
use crate::models::slot::{AvailabilityPayload, CellState, Mode, SlotKey};
use crate::services::range::RangeCompressor;
use crate::services::selection::SelectionSet;
use crate::services::slot_index::SlotIndex;
use crate::utils::error::ParseError;

/// Receives per-cell visual state changes.
pub trait RenderSink {
    fn mark(&mut self, key: SlotKey, state: CellState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor: SlotKey },
}

#[derive(Debug, Clone)]
pub struct GridController {
    index: SlotIndex,
    selection: SelectionSet,
    compressor: RangeCompressor,
    mode: Mode,
    state: DragState,
    preview: BTreeSet<SlotKey>,
}

impl GridController {
    pub fn new(config: GridConfig) -> Self {
        let index = SlotIndex::new(config);
        Self {
            selection: SelectionSet::new(index.clone()),
            compressor: RangeCompressor::new(index.clone()),
            index,
            mode: Mode::Draw,
            state: DragState::Idle,
            preview: BTreeSet::new(),
        }
    }

    pub fn index(&self) -> &SlotIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("Switching paint mode to {:?}", mode);
            self.mode = mode;
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<SlotKey> {
        match self.state {
            DragState::Dragging { anchor } => Some(anchor),
            DragState::Idle => None,
        }
    }

    pub fn preview_keys(&self) -> &BTreeSet<SlotKey> {
        &self.preview
    }

    /// What a cell should look like right now.
    pub fn cell_state(&self, key: SlotKey) -> CellState {
        if self.preview.contains(&key) {
            CellState::Preview
        } else if self.selection.contains(key) {
            CellState::Selected
        } else {
            CellState::Empty
        }
    }

    fn valid_cell(&self, cell: Option<SlotKey>) -> Option<SlotKey> {
        let cell = cell.filter(|key| self.index.is_valid(*key));
        if cell.is_none() {
            log::debug!("Ignoring pointer event on an unknown cell");
        }
        cell
    }

    /// Swaps the preview layer and repaints only the cells whose state moved.
    fn replace_preview(&mut self, next: BTreeSet<SlotKey>, sink: &mut dyn RenderSink) {
        let previous = std::mem::replace(&mut self.preview, next);
        for key in previous.symmetric_difference(&self.preview) {
            sink.mark(*key, self.cell_state(*key));
        }
    }

    pub fn press(&mut self, cell: Option<SlotKey>, sink: &mut dyn RenderSink) {
        let Some(anchor) = self.valid_cell(cell) else {
            return;
        };
        self.replace_preview(BTreeSet::new(), sink);
        self.state = DragState::Dragging { anchor };
    }

    pub fn drag_to(&mut self, cell: Option<SlotKey>, sink: &mut dyn RenderSink) {
        let DragState::Dragging { anchor } = self.state else {
            return;
        };
        let Some(cell) = self.valid_cell(cell) else {
            return;
        };
        let preview = self.selection.preview(anchor, cell);
        self.replace_preview(preview, sink);
    }

    pub fn release(&mut self, cell: Option<SlotKey>, sink: &mut dyn RenderSink) {
        let DragState::Dragging { anchor } = self.state else {
            return;
        };
        let Some(cell) = self.valid_cell(cell) else {
            return;
        };

        let touched = self.selection.preview(anchor, cell);
        let changed = self.selection.apply_range(anchor, cell, self.mode);
        log::debug!(
            "Committed {:?} over {} cells ({} changed)",
            self.mode,
            touched.len(),
            changed
        );

        self.state = DragState::Idle;
        let stale_preview = std::mem::take(&mut self.preview);
        for key in touched.union(&stale_preview) {
            sink.mark(*key, self.cell_state(*key));
        }
    }

    /// Pointer released outside the grid: forget the drag, commit nothing.
    pub fn global_release(&mut self, sink: &mut dyn RenderSink) {
        if self.is_dragging() {
            log::debug!("Drag ended outside the grid; discarding");
        }
        self.state = DragState::Idle;
        self.replace_preview(BTreeSet::new(), sink);
    }

    /// Compressed form of the committed selection. A drag in flight is not part of it.
    pub fn save_payload(&self) -> AvailabilityPayload {
        self.compressor.compress(&self.selection)
    }

    /// Adds every slot in `payload` to the selection. Nothing is applied if any
    /// entry fails to parse.
    pub fn load_payload(
        &mut self,
        payload: &AvailabilityPayload,
        sink: &mut dyn RenderSink,
    ) -> Result<usize, ParseError> {
        let keys = self.compressor.expand(payload)?;
        let added = self.selection.extend(keys.iter().copied());
        for key in &keys {
            sink.mark(*key, self.cell_state(*key));
        }
        Ok(added)
    }

    pub fn clear(&mut self, sink: &mut dyn RenderSink) {
        let cleared: Vec<SlotKey> = self.selection.iter().copied().collect();
        self.selection.clear();
        for key in cleared {
            sink.mark(key, self.cell_state(key));
        }
    }

    /// Pushes the state of every cell, e.g. into a freshly built sink.
    pub fn repaint(&self, sink: &mut dyn RenderSink) {
        for day in 0..self.index.day_count() {
            for minute in self.index.slot_minutes() {
                let key = SlotKey::new(day, minute);
                sink.mark(key, self.cell_state(key));
            }
        }
    }
}
