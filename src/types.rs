//! Common types and data structures

use crate::theme::Palette;
use egui::Color32;

/// Whether the main door is locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

impl LockState {
    pub fn toggled(self) -> Self {
        match self {
            LockState::Locked => LockState::Unlocked,
            LockState::Unlocked => LockState::Locked,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LockState::Locked => "LOCKED",
            LockState::Unlocked => "UNLOCKED",
        }
    }

    /// Hint shown under the toggle button, naming what a click will do
    pub fn action_hint(self) -> &'static str {
        match self {
            LockState::Locked => "Click to unlock the main door",
            LockState::Unlocked => "Click to lock the main door",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LockState::Locked => egui_phosphor::regular::LOCK,
            LockState::Unlocked => egui_phosphor::regular::LOCK_OPEN,
        }
    }

    pub fn color(self, palette: &Palette) -> Color32 {
        match self {
            LockState::Locked => palette.error,
            LockState::Unlocked => palette.success,
        }
    }
}

/// Page shown in the content area. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Instructions,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Instructions];

    /// Label in the navigation drawer
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Door Control",
            Page::Instructions => "How to Use",
        }
    }

    /// Title in the compact app bar
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Door Control",
            Page::Instructions => "Instructions",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => egui_phosphor::regular::LOCK,
            Page::Instructions => egui_phosphor::regular::INFO,
        }
    }
}
