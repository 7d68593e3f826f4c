//! Shared color constants for the UI.

use egui::Color32;

/// Red for the failed-request panel.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Accent for header buttons whose search is applied, and for the current page.
pub const COLOR_ACTIVE: Color32 = Color32::from_rgb(22, 119, 255);

/// Border of the table frame.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
