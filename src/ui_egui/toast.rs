//! Brief, non-blocking save/load feedback stacked in the bottom-right corner.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, RichText, Visuals};

const SHOW_FOR: Duration = Duration::from_secs(3);
const SHOW_ERRORS_FOR: Duration = Duration::from_secs(6);
const FADE_OUT: Duration = Duration::from_millis(500);
const MAX_STACKED: usize = 4;

const WIDTH: f32 = 320.0;
const ROW_HEIGHT: f32 = 40.0;
const EDGE_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    /// Accent colour taken from the active theme where it has one.
    fn accent(self, visuals: &Visuals) -> Color32 {
        match self {
            ToastLevel::Success if visuals.dark_mode => Color32::from_rgb(100, 220, 120),
            ToastLevel::Success => Color32::from_rgb(30, 120, 50),
            ToastLevel::Info => visuals.hyperlink_color,
            ToastLevel::Error => visuals.error_fg_color,
        }
    }

    fn lifetime(self) -> Duration {
        match self {
            ToastLevel::Error => SHOW_ERRORS_FOR,
            _ => SHOW_FOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    level: ToastLevel,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
            lifetime: level.lifetime(),
        }
    }

    /// 1.0 while fresh, fading linearly to 0.0 over the final half second.
    pub fn opacity(&self) -> f32 {
        let remaining = self.lifetime.saturating_sub(self.shown_at.elapsed());
        (remaining.as_secs_f32() / FADE_OUT.as_secs_f32()).min(1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.lifetime
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Error));
    }

    /// Oldest toasts are dropped once the stack is full.
    fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_STACKED {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }
        // Keep frames coming so the fade animates without pointer input.
        ctx.request_repaint();

        let visuals = ctx.style().visuals.clone();
        let screen = ctx.screen_rect();

        for (slot, toast) in self.toasts.iter().rev().enumerate() {
            let alpha = toast.opacity();
            let top = screen.bottom() - EDGE_MARGIN - (slot as f32 + 1.0) * (ROW_HEIGHT + 5.0);
            let accent = toast.level.accent(&visuals).gamma_multiply(alpha);
            let fill = visuals.window_fill.gamma_multiply(0.9 * alpha);

            egui::Area::new(egui::Id::new(("timebrush_toast", slot)))
                .fixed_pos(Pos2::new(screen.right() - WIDTH - EDGE_MARGIN, top))
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.set_min_width(WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(accent).strong());
                                ui.label(RichText::new(&toast.message).color(accent));
                            });
                        });
                });
        }
    }
}
