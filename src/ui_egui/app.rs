use std::time::Duration;

use super::grid_view::GridView;
use super::toast::ToastManager;
use crate::models::settings::{GridConfig, ToolbarLabels};
use crate::models::slot::Mode;
use crate::services::grid::GridController;
use crate::services::sync::{SyncAction, SyncOutcome, SyncWorker};
use crate::services::transport::SharedTransport;
use crate::utils::date::TimeLabelFormatter;

const SYNC_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct TimeBrushApp {
    controller: GridController,
    grid_view: GridView,
    formatter: TimeLabelFormatter,
    labels: ToolbarLabels,
    worker: SyncWorker,
    toasts: ToastManager,
}

impl eframe::App for TimeBrushApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_sync_outcomes();

        self.render_toolbar(ctx);
        self.render_summary(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.grid_view.show(ui, &mut self.controller);
                });
        });

        self.toasts.render(ctx);

        if self.worker.in_flight() > 0 {
            ctx.request_repaint_after(SYNC_POLL_INTERVAL);
        }
    }
}

impl TimeBrushApp {
    /// Builds the grid and immediately starts loading persisted availability.
    pub fn new(grid_config: GridConfig, labels: ToolbarLabels, transport: SharedTransport) -> Self {
        log::info!(
            "Building {}-day grid with {}-minute slots ({}, {})",
            grid_config.day_count(),
            grid_config.step(),
            grid_config.locale(),
            grid_config.time_format()
        );

        let formatter = TimeLabelFormatter::new(&grid_config);
        let controller = GridController::new(grid_config);
        let grid_view = GridView::new(&controller, &formatter);

        let mut worker = SyncWorker::new(transport);
        worker.request_load();

        Self {
            controller,
            grid_view,
            formatter,
            labels,
            worker,
            toasts: ToastManager::new(),
        }
    }

    fn drain_sync_outcomes(&mut self) {
        while let Some(outcome) = self.worker.poll() {
            match outcome {
                SyncOutcome::Loaded(payload) => {
                    match self
                        .controller
                        .load_payload(&payload, self.grid_view.cells_mut())
                    {
                        Ok(added) => {
                            log::info!("Loaded {} slots", added);
                            self.toasts.info(format!("Loaded {} slots", added));
                        }
                        Err(err) => {
                            log::error!("Rejected persisted availability: {}", err);
                            self.toasts
                                .error(format!("Could not load availability: {}", err));
                        }
                    }
                }
                SyncOutcome::Saved => self.toasts.success("Saved!"),
                SyncOutcome::Failed {
                    action: SyncAction::Save,
                    message,
                } => self.toasts.error(format!("Failed to save. {}", message)),
                SyncOutcome::Failed {
                    action: SyncAction::Load,
                    message,
                } => self.toasts.error(format!("Failed to load. {}", message)),
            }
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("timebrush_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut mode = self.controller.mode();
                ui.radio_value(&mut mode, Mode::Draw, self.labels.draw.as_str());
                ui.add_space(15.0);
                ui.radio_value(&mut mode, Mode::Erase, self.labels.erase.as_str());
                self.controller.set_mode(mode);

                ui.add_space(15.0);
                if ui.button(self.labels.save.as_str()).clicked() {
                    self.worker.request_save(self.controller.save_payload());
                }
                if ui.button(self.labels.clear.as_str()).clicked() {
                    self.controller.clear(self.grid_view.cells_mut());
                }

                if self.worker.in_flight() > 0 {
                    ui.add_space(10.0);
                    ui.spinner();
                }
            });
        });
    }

    fn render_summary(&self, ctx: &egui::Context) {
        egui::SidePanel::right("timebrush_summary")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Availability");
                ui.separator();

                let payload = self.controller.save_payload();
                if payload.is_empty() {
                    ui.label("Nothing selected yet.");
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (day, ranges) in &payload {
                        for range in ranges {
                            match self.formatter.range_label(*day, range) {
                                Ok(label) => {
                                    ui.label(label);
                                }
                                Err(err) => {
                                    log::debug!("Skipping summary entry: {}", err);
                                }
                            }
                        }
                    }
                });
            });
    }
}
