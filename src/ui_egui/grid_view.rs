//! Day × time grid widget.
//!
//! The whole grid is one allocated rect; pointer positions are mapped to cells
//! arithmetically and fed to the controller. Releasing the button anywhere
//! that is not a cell counts as a release outside the grid.

use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::GridPalette;
use crate::models::slot::{SlotKey, MINUTES_PER_HOUR};
use crate::services::grid::{CellGrid, GridController};
use crate::utils::date::TimeLabelFormatter;

pub const LABEL_WIDTH: f32 = 120.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const ROW_HEIGHT: f32 = 18.0;
pub const MIN_COLUMN_WIDTH: f32 = 64.0;

#[derive(Clone, Copy)]
struct GridLayout {
    origin: Pos2,
    col_width: f32,
}

impl GridLayout {
    fn header_rect(&self, day: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                self.origin.x + LABEL_WIDTH + day as f32 * self.col_width,
                self.origin.y,
            ),
            Vec2::new(self.col_width, HEADER_HEIGHT),
        )
    }

    fn label_rect(&self, row: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.origin.x, self.row_top(row)),
            Vec2::new(LABEL_WIDTH, ROW_HEIGHT),
        )
    }

    fn cell_rect(&self, day: usize, row: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                self.origin.x + LABEL_WIDTH + day as f32 * self.col_width,
                self.row_top(row),
            ),
            Vec2::new(self.col_width, ROW_HEIGHT),
        )
    }

    fn row_top(&self, row: usize) -> f32 {
        self.origin.y + HEADER_HEIGHT + row as f32 * ROW_HEIGHT
    }

    /// `(day, row)` under a point, before bounds checks against the grid size.
    fn coordinate_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        let x = pos.x - self.origin.x - LABEL_WIDTH;
        let y = pos.y - self.origin.y - HEADER_HEIGHT;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        Some(((x / self.col_width) as usize, (y / ROW_HEIGHT) as usize))
    }
}

pub struct GridView {
    cells: CellGrid,
    row_labels: Vec<String>,
    last_hover: Option<SlotKey>,
}

impl GridView {
    pub fn new(controller: &GridController, formatter: &TimeLabelFormatter) -> Self {
        let mut cells = CellGrid::new(controller.index().clone());
        controller.repaint(&mut cells);
        let row_labels = controller
            .index()
            .slot_minutes()
            .map(|minute| formatter.slot_label(minute))
            .collect();

        Self {
            cells,
            row_labels,
            last_hover: None,
        }
    }

    pub fn cells_mut(&mut self) -> &mut CellGrid {
        &mut self.cells
    }

    pub fn show(&mut self, ui: &mut egui::Ui, controller: &mut GridController) {
        let palette = GridPalette::from_visuals(ui.visuals());
        let days = self.cells.day_count();
        let rows = self.cells.slots_per_day();

        let col_width = ((ui.available_width() - LABEL_WIDTH) / days as f32).max(MIN_COLUMN_WIDTH);
        let size = Vec2::new(
            LABEL_WIDTH + col_width * days as f32,
            HEADER_HEIGHT + ROW_HEIGHT * rows as f32,
        );
        let (rect, _response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let layout = GridLayout {
            origin: rect.min,
            col_width,
        };

        let hovered = self.handle_pointer(ui, rect, &layout, controller);
        self.paint(ui, rect, &layout, controller, &palette, hovered);
    }

    fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        rect: Rect,
        layout: &GridLayout,
        controller: &mut GridController,
    ) -> Option<SlotKey> {
        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos().or(i.pointer.hover_pos()),
            )
        });

        let visible = ui.clip_rect().intersect(rect);
        let hovered = pointer
            .filter(|pos| visible.contains(*pos))
            .and_then(|pos| layout.coordinate_at(pos))
            .and_then(|(day, row)| self.cells.key_at(day, row));

        if pressed && hovered.is_some() {
            controller.press(hovered, &mut self.cells);
            self.last_hover = hovered;
        } else if controller.is_dragging() && hovered.is_some() && hovered != self.last_hover {
            controller.drag_to(hovered, &mut self.cells);
            self.last_hover = hovered;
        }

        // A quick click can press and release within one frame.
        if released {
            if controller.is_dragging() {
                match hovered {
                    Some(_) => controller.release(hovered, &mut self.cells),
                    None => controller.global_release(&mut self.cells),
                }
            }
            self.last_hover = None;
        }

        hovered
    }

    fn paint(
        &self,
        ui: &egui::Ui,
        rect: Rect,
        layout: &GridLayout,
        controller: &GridController,
        palette: &GridPalette,
        hovered: Option<SlotKey>,
    ) {
        let painter = ui.painter_at(rect);
        let index = controller.index();
        let days = self.cells.day_count();
        let rows = self.cells.slots_per_day();

        for (day, label) in index.config().days().iter().enumerate() {
            painter.text(
                layout.header_rect(day).center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(13.0),
                palette.header_text,
            );
        }

        // Only rows inside the scroll viewport are painted.
        let clip = ui.clip_rect();
        let first_row = (((clip.top() - layout.row_top(0)) / ROW_HEIGHT).floor().max(0.0) as usize).min(rows);
        let last_row = (((clip.bottom() - layout.row_top(0)) / ROW_HEIGHT).ceil().max(0.0) as usize).min(rows);

        let grid_right = layout.origin.x + LABEL_WIDTH + layout.col_width * days as f32;

        for row in first_row..last_row {
            let Some(key) = self.cells.key_at(0, row) else {
                continue;
            };
            let minute = key.minute;
            let is_hour_start = minute % MINUTES_PER_HOUR == 0;

            let label_rect = layout.label_rect(row);
            painter.text(
                label_rect.right_center() - Vec2::new(6.0, 0.0),
                Align2::RIGHT_CENTER,
                &self.row_labels[row],
                FontId::monospace(10.5),
                palette.label_text,
            );

            for day in 0..days {
                let cell = SlotKey::new(day, minute);
                let cell_rect = layout.cell_rect(day, row);
                painter.rect_filled(
                    cell_rect.shrink(0.5),
                    0.0,
                    palette.cell_fill(self.cells.state(cell), is_hour_start),
                );
                if hovered == Some(cell) {
                    painter.rect_filled(cell_rect, 0.0, palette.hover_overlay);
                }
            }

            let line_color = if is_hour_start {
                palette.hour_line
            } else {
                palette.cell_border
            };
            let y = label_rect.top();
            painter.line_segment(
                [
                    Pos2::new(layout.origin.x + LABEL_WIDTH, y),
                    Pos2::new(grid_right, y),
                ],
                Stroke::new(if is_hour_start { 1.0 } else { 0.5 }, line_color),
            );
        }

        for day in 0..=days {
            let x = layout.origin.x + LABEL_WIDTH + day as f32 * layout.col_width;
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                Stroke::new(1.0, palette.cell_border),
            );
        }
    }
}
