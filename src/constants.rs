//! Application constants and fixed content

pub const APP_NAME: &str = "Door Access Control";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "door-access-control.log";
/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,door_access_control=debug";

pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1100.0, 720.0);
pub const MIN_WINDOW_SIZE: (f32, f32) = (360.0, 560.0);

/// Windows at or below this width use the compact layout (app bar + overlay drawer)
pub const COMPACT_BREAKPOINT: f32 = 768.0;
/// Instruction cards sit side by side from this width up
pub const CARD_COLUMNS_BREAKPOINT: f32 = 900.0;

pub const DRAWER_TITLE: &str = "Access Control";
pub const DRAWER_SUBTITLE: &str = "Sample Website for IETP";
pub const TEAM_CAPTION: &str = "IETP Group 16";
pub const FOOTER_TEXT: &str = "Secure & Reliable";

pub const SUPPORT_EMAIL: &str = "IETP16@gmail.com";
pub const EMERGENCY_PHONE: &str = "0911121314";

/// (icon, title, detail) rows of the "Basic Operation" card
pub const BASIC_OPERATION: &[(&str, &str, &str)] = &[
    (
        egui_phosphor::regular::LOCK,
        "Single Button Control",
        "Click the large button to toggle lock/unlock",
    ),
    (
        egui_phosphor::regular::DEVICE_MOBILE,
        "Mobile Access",
        "Access your door from anywhere",
    ),
    (
        egui_phosphor::regular::WIFI_HIGH,
        "Internet Required",
        "Stable connection needed for remote access",
    ),
];

pub const TROUBLESHOOTING_STEPS: &[&str] = &[
    "Check internet connection",
    "Verify lock has power",
    "Refresh the app",
];
