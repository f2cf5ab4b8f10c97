use egui::{Color32, Visuals};

use crate::models::slot::CellState;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub empty_bg: Color32,
    pub hour_bg: Color32,
    pub selected_bg: Color32,
    pub preview_bg: Color32,
    pub cell_border: Color32,
    pub hour_line: Color32,
    pub header_text: Color32,
    pub label_text: Color32,
    pub hover_overlay: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let accent = visuals.selection.bg_fill;
        let text = visuals.text_color();
        Self {
            empty_bg: base,
            hour_bg: blend(base, text, 0.04),
            selected_bg: accent,
            preview_bg: blend(base, accent, 0.45),
            cell_border: blend(base, text, 0.12),
            hour_line: blend(base, text, 0.3),
            header_text: text,
            label_text: with_alpha(text, 170),
            hover_overlay: with_alpha(accent, 40),
        }
    }

    pub fn cell_fill(&self, state: CellState, is_hour_start: bool) -> Color32 {
        match state {
            CellState::Selected => self.selected_bg,
            CellState::Preview => self.preview_bg,
            CellState::Empty if is_hour_start => self.hour_bg,
            CellState::Empty => self.empty_bg,
        }
    }
}
