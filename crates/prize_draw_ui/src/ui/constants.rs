//! Colors and layout constants used throughout the UI.

use std::time::Duration;

use eframe::egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(46, 125, 50);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(232, 245, 233);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(198, 40, 40);
pub const MUTED_TEXT: Color32 = Color32::from_gray(110);

pub const SILVER: Color32 = Color32::from_rgb(176, 190, 197);
pub const BRONZE: Color32 = Color32::from_rgb(205, 127, 50);

pub const DOME_FILL: Color32 = Color32::from_rgba_premultiplied(200, 230, 255, 90);
pub const DOME_STROKE: Color32 = Color32::from_rgb(120, 160, 200);
pub const BASE_FILL: Color32 = Color32::from_rgb(239, 83, 80);

pub const BALL_COLORS: [Color32; 6] = [
    Color32::from_rgb(255, 193, 7),
    Color32::from_rgb(66, 165, 245),
    Color32::from_rgb(239, 83, 80),
    Color32::from_rgb(102, 187, 106),
    Color32::from_rgb(171, 71, 188),
    Color32::from_rgb(255, 138, 101),
];

/// Ball centers relative to the dome center, in dome radii.
pub const BALL_LAYOUT: [(f32, f32); 9] = [
    (-0.45, 0.35),
    (-0.15, 0.45),
    (0.2, 0.4),
    (0.5, 0.3),
    (-0.3, 0.05),
    (0.05, 0.1),
    (0.35, 0.0),
    (-0.1, -0.25),
    (0.2, -0.3),
];

pub const CONTENT_WIDTH: f32 = 360.0;
pub const MACHINE_SIZE: f32 = 220.0;
pub const REPAINT_INTERVAL_MS: u64 = 16;

/// Length of the result card's pop-in.
pub const REVEAL_DURATION: Duration = Duration::from_millis(450);
