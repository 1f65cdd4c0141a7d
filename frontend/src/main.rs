//! Marco Polo's Travels - frontend entry point

use std::sync::OnceLock;
use zoon::*;

// ===== CENTRALIZED DEBUG FLAGS =====
pub(crate) const DEBUG_CONFIG: bool = false; // Embedded config parsing
pub(crate) const DEBUG_SELECTION: bool = false; // Selection commands and resulting state
pub(crate) const DEBUG_MAP: bool = false; // Map surface lifecycle and redraws

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            zoon::println!($($arg)*);
        }
    };
}

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod config;
mod dataflow;
mod detail_panel;
mod explorer;
mod map_surface;
mod map_view;
mod theme;
mod timeline_view;
mod views;
mod widgets;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::ExplorerApp::new();
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
