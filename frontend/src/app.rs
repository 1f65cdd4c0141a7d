//! ExplorerApp - owns the explorer coordinator and the loaded configuration.

use crate::config::load_explorer_config;
use crate::explorer::Explorer;
use crate::theme::*;
use crate::views::{main_layout, page_header};
use shared::ExplorerConfig;
use zoon::*;

pub struct ExplorerApp {
    pub explorer: Explorer,
    pub config: ExplorerConfig,
}

impl ExplorerApp {
    pub fn new() -> Self {
        let config = load_explorer_config();
        let explorer = Explorer::new();

        if crate::DEBUG_SELECTION {
            Self::trace_selection(&explorer);
        }

        Self { explorer, config }
    }

    fn trace_selection(explorer: &Explorer) {
        Task::start(explorer.selected_event_signal().for_each_sync(|event| {
            debug_log!(
                crate::DEBUG_SELECTION,
                "Selected event: {:?}",
                event.map(|event| event.id)
            );
        }));
        Task::start(explorer.selected_location_signal().for_each_sync(|location| {
            debug_log!(
                crate::DEBUG_SELECTION,
                "Selected location: {:?}",
                location.map(|location| location.id)
            );
        }));
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Scrollbars::y_and_clip_x())
            .s(Background::new().color(PAGE_BACKGROUND))
            .s(Font::new().color(TEXT_PRIMARY).family([
                FontFamily::new("Inter"),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .item(page_header())
            .item(main_layout(&self.explorer, &self.config))
    }
}
