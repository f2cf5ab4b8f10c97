mod app;
mod grid_view;
mod palette;
mod toast;

pub use app::TimeBrushApp;
