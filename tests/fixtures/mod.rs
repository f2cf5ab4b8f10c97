// Test fixtures - reusable test data
// Provides consistent grids and payloads across all test files
#![allow(dead_code)]

use timebrush::models::settings::GridConfig;
use timebrush::models::slot::{AvailabilityPayload, TimeRange};
use timebrush::services::grid::{CellGrid, GridController};

/// Sample grid shapes
pub mod grids {
    use super::*;

    /// Monday-first week, 10-minute slots
    pub fn default_week() -> GridConfig {
        GridConfig::default()
    }

    /// Monday-first week, 15-minute slots
    pub fn quarter_hours() -> GridConfig {
        GridConfig::new(GridConfig::default().days().to_vec(), 15).unwrap()
    }

    /// Two-day grid with hour-long slots
    pub fn weekend_hours() -> GridConfig {
        GridConfig::new(vec!["Saturday".to_string(), "Sunday".to_string()], 60).unwrap()
    }

    pub fn with_step(step: u16) -> GridConfig {
        GridConfig::new(GridConfig::default().days().to_vec(), step).unwrap()
    }
}

/// Sample persisted payloads (for the default 10-minute week)
pub mod payloads {
    use super::*;

    /// Mon 09:00–10:00, Wed 14:00–15:30
    pub fn office_hours() -> AvailabilityPayload {
        let mut payload = AvailabilityPayload::new();
        payload.insert(0, vec![TimeRange::new("09:00:00", "09:59:59")]);
        payload.insert(2, vec![TimeRange::new("14:00:00", "15:29:59")]);
        payload
    }

    /// The last slot of Sunday only
    pub fn late_sunday() -> AvailabilityPayload {
        let mut payload = AvailabilityPayload::new();
        payload.insert(6, vec![TimeRange::new("23:50:00", "23:59:59")]);
        payload
    }

    pub fn office_hours_json() -> serde_json::Value {
        serde_json::json!({
            "0": [["09:00:00", "09:59:59"]],
            "2": [["14:00:00", "15:29:59"]]
        })
    }
}

/// Controller plus a sink already in sync with it
pub fn controller_with_grid(config: GridConfig) -> (GridController, CellGrid) {
    let controller = GridController::new(config);
    let mut grid = CellGrid::new(controller.index().clone());
    controller.repaint(&mut grid);
    (controller, grid)
}
