//! Explorer coordinator: owns the year filter and the single selections.
//!
//! Views never talk to each other. Each one sends on its own relay, the
//! selection actor turns the event into a [`SelectionCommand`] and every view
//! re-derives what it shows from the resulting state.

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, stream};
use shared::{ExplorerSelection, Location, SelectionCommand, TimelineEntry, TimelineEvent, dataset};
use zoon::*;

#[derive(Clone, Debug)]
pub struct Explorer {
    selection_actor: Actor<ExplorerSelection>,

    /// A location marker on the map was clicked
    pub marker_clicked_relay: Relay<Location>,
    /// The close control of the detail panel was pressed
    pub detail_panel_closed_relay: Relay<()>,
    /// A year preset above the timeline was pressed; `None` is "All Years"
    pub year_preset_clicked_relay: Relay<Option<i32>>,
    /// The "Show All" button in the map header was pressed
    pub show_all_clicked_relay: Relay<()>,
    /// A timeline event card was clicked
    pub event_clicked_relay: Relay<TimelineEvent>,
}

impl Explorer {
    pub fn new() -> Self {
        let (marker_clicked_relay, marker_clicked_stream) = relay::<Location>();
        let (detail_panel_closed_relay, detail_panel_closed_stream) = relay::<()>();
        let (year_preset_clicked_relay, year_preset_clicked_stream) = relay::<Option<i32>>();
        let (show_all_clicked_relay, show_all_clicked_stream) = relay::<()>();
        let (event_clicked_relay, event_clicked_stream) = relay::<TimelineEvent>();

        let commands = stream::select_all([
            marker_clicked_stream
                .map(|location| SelectionCommand::SelectLocation(Some(location)))
                .boxed(),
            detail_panel_closed_stream
                .map(|()| SelectionCommand::SelectLocation(None))
                .boxed(),
            year_preset_clicked_stream.map(SelectionCommand::SetYear).boxed(),
            show_all_clicked_stream.map(|()| SelectionCommand::ClearAll).boxed(),
            event_clicked_stream.map(SelectionCommand::SelectEvent).boxed(),
        ]);

        let selection_actor = Actor::new(ExplorerSelection::default(), commands, |selection, command| {
            debug_log!(crate::DEBUG_SELECTION, "Selection command: {:?}", command);
            selection.apply(command)
        });

        Self {
            selection_actor,
            marker_clicked_relay,
            detail_panel_closed_relay,
            year_preset_clicked_relay,
            show_all_clicked_relay,
            event_clicked_relay,
        }
    }

    pub fn selected_year_signal(&self) -> impl Signal<Item = Option<i32>> + use<> {
        self.selection_actor
            .signal()
            .map(|selection| selection.selected_year())
            .dedupe()
    }

    pub fn selected_location_signal(&self) -> impl Signal<Item = Option<Location>> + use<> {
        self.selection_actor
            .signal()
            .map(|selection| selection.selected_location().cloned())
            .dedupe_cloned()
    }

    pub fn selected_event_signal(&self) -> impl Signal<Item = Option<TimelineEvent>> + use<> {
        self.selection_actor
            .signal()
            .map(|selection| selection.selected_event().cloned())
            .dedupe_cloned()
    }

    /// All timeline events in display order with their emphasis decided.
    pub fn timeline_signal(&self) -> impl Signal<Item = Vec<TimelineEntry>> + use<> {
        self.selected_year_signal()
            .map(|year| shared::timeline_entries(dataset::timeline_events(), year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }

    async fn current<T>(signal: impl Signal<Item = T>) -> T {
        Box::pin(signal.to_stream()).next().await.unwrap()
    }

    fn location(id: &str) -> Location {
        dataset::location_by_id(id).unwrap().clone()
    }

    #[tokio::test]
    async fn test_marker_click_then_close() {
        let explorer = Explorer::new();
        settle().await;

        explorer.marker_clicked_relay.send(location("khanbaliq"));
        settle().await;
        let selected = current(explorer.selected_location_signal()).await;
        assert_eq!(selected.map(|l| l.id), Some("khanbaliq".to_string()));

        explorer.detail_panel_closed_relay.send(());
        settle().await;
        assert_eq!(current(explorer.selected_location_signal()).await, None);
    }

    #[tokio::test]
    async fn test_year_preset_and_show_all() {
        let explorer = Explorer::new();
        settle().await;

        explorer.marker_clicked_relay.send(location("venice"));
        explorer.year_preset_clicked_relay.send(Some(1275));
        settle().await;
        assert_eq!(current(explorer.selected_year_signal()).await, Some(1275));

        let faded = current(explorer.timeline_signal())
            .await
            .iter()
            .filter(|entry| entry.de_emphasized)
            .count();
        assert_eq!(faded, 4);

        explorer.show_all_clicked_relay.send(());
        settle().await;
        assert_eq!(current(explorer.selected_year_signal()).await, None);
        // show all leaves the location selection alone
        assert!(current(explorer.selected_location_signal()).await.is_some());
    }

    #[tokio::test]
    async fn test_event_click_does_not_select_location() {
        let explorer = Explorer::new();
        settle().await;

        let event = dataset::timeline_events()
            .iter()
            .find(|event| event.id == "polos-reach-court")
            .unwrap()
            .clone();
        explorer.event_clicked_relay.send(event.clone());
        settle().await;

        assert_eq!(current(explorer.selected_event_signal()).await, Some(event));
        assert_eq!(current(explorer.selected_location_signal()).await, None);
    }
}
