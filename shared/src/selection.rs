//! Year filter and single-selection state owned by the explorer coordinator.
//!
//! Every operation is total. Each reset touches only its own field: "show
//! all" clears the year and leaves the location and event selections alone.

use crate::{Location, TimelineEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerSelection {
    selected_year: Option<i32>,
    selected_location: Option<Location>,
    selected_event: Option<TimelineEvent>,
}

/// State change requests coming from the views.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCommand {
    SetYear(Option<i32>),
    SelectLocation(Option<Location>),
    SelectEvent(TimelineEvent),
    ClearAll,
}

impl ExplorerSelection {
    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.selected_location.as_ref()
    }

    pub fn selected_event(&self) -> Option<&TimelineEvent> {
        self.selected_event.as_ref()
    }

    /// Any year is accepted, including years that match no record.
    pub fn set_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
    }

    /// The location is trusted to come from the dataset; it is not looked up.
    pub fn select_location(&mut self, location: Option<Location>) {
        self.selected_location = location;
    }

    /// Does not touch the selected location, even when the event names a
    /// place or carries coordinates.
    pub fn select_event(&mut self, event: TimelineEvent) {
        self.selected_event = Some(event);
    }

    pub fn clear_all(&mut self) {
        self.selected_year = None;
    }

    /// Apply a command and report whether anything observable changed.
    pub fn apply(&mut self, command: SelectionCommand) -> bool {
        let before = self.clone();
        match command {
            SelectionCommand::SetYear(year) => self.set_year(year),
            SelectionCommand::SelectLocation(location) => self.select_location(location),
            SelectionCommand::SelectEvent(event) => self.select_event(event),
            SelectionCommand::ClearAll => self.clear_all(),
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::filter::{visible_locations, visible_routes};

    fn khanbaliq() -> Location {
        dataset::location_by_id("khanbaliq").unwrap().clone()
    }

    fn event(id: &str) -> TimelineEvent {
        dataset::timeline_events()
            .iter()
            .find(|e| e.id == id)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let selection = ExplorerSelection::default();
        assert_eq!(selection.selected_year(), None);
        assert!(selection.selected_location().is_none());
        assert!(selection.selected_event().is_none());
    }

    #[test]
    fn test_set_year_replaces_unconditionally() {
        let mut selection = ExplorerSelection::default();
        selection.set_year(Some(1271));
        selection.set_year(Some(-40));
        assert_eq!(selection.selected_year(), Some(-40));
        selection.set_year(None);
        assert_eq!(selection.selected_year(), None);
    }

    #[test]
    fn test_set_year_twice_yields_same_visible_sets() {
        let mut selection = ExplorerSelection::default();
        selection.set_year(Some(1275));
        let first = visible_locations(dataset::locations(), selection.selected_year());
        let first_routes = visible_routes(dataset::routes(), selection.selected_year());
        assert!(!selection.apply(SelectionCommand::SetYear(Some(1275))));
        assert_eq!(visible_locations(dataset::locations(), selection.selected_year()), first);
        assert_eq!(visible_routes(dataset::routes(), selection.selected_year()), first_routes);
    }

    #[test]
    fn test_clearing_location_is_idempotent() {
        let mut selection = ExplorerSelection::default();
        assert!(!selection.apply(SelectionCommand::SelectLocation(None)));
        assert_eq!(selection, ExplorerSelection::default());

        assert!(selection.apply(SelectionCommand::SelectLocation(Some(khanbaliq()))));
        assert!(selection.apply(SelectionCommand::SelectLocation(None)));
        assert!(selection.selected_location().is_none());
    }

    #[test]
    fn test_single_location_selection() {
        let mut selection = ExplorerSelection::default();
        let venice = dataset::location_by_id("venice").unwrap().clone();
        selection.select_location(Some(venice));
        selection.select_location(Some(khanbaliq()));
        assert_eq!(selection.selected_location().map(|l| l.id.as_str()), Some("khanbaliq"));
    }

    #[test]
    fn test_event_selection_does_not_cascade_to_location() {
        let mut selection = ExplorerSelection::default();
        let arrival = event("polos-reach-court");
        assert!(arrival.location.is_some() && arrival.coordinates.is_some());

        selection.select_event(arrival.clone());
        assert_eq!(selection.selected_event(), Some(&arrival));
        assert!(selection.selected_location().is_none());
    }

    #[test]
    fn test_clear_all_only_resets_year() {
        let mut selection = ExplorerSelection::default();
        selection.set_year(Some(1292));
        selection.select_location(Some(khanbaliq()));
        selection.select_event(event("book-written"));

        selection.apply(SelectionCommand::ClearAll);
        assert_eq!(selection.selected_year(), None);
        assert!(selection.selected_location().is_some());
        assert!(selection.selected_event().is_some());
    }

    #[test]
    fn test_unknown_location_is_accepted() {
        let mut selection = ExplorerSelection::default();
        let mut invented = khanbaliq();
        invented.id = "xanadu".to_string();
        selection.select_location(Some(invented));
        assert_eq!(selection.selected_location().map(|l| l.id.as_str()), Some("xanadu"));
    }
}
