//! Year filter rules shared by the map and the timeline.
//!
//! The map omits anything outside the filter while the timeline keeps every
//! event and only de-emphasizes the ones after the selected year. Both views
//! treat an unset year as "show everything".

use crate::{Location, Route, TimelineEvent};

pub fn location_visible(location: &Location, selected_year: Option<i32>) -> bool {
    match (selected_year, location.year_visited) {
        (None, _) | (_, None) => true,
        (Some(year), Some(visited)) => visited <= year,
    }
}

pub fn route_visible(route: &Route, selected_year: Option<i32>) -> bool {
    selected_year.is_none_or(|year| route.year_active <= year)
}

pub fn event_de_emphasized(event: &TimelineEvent, selected_year: Option<i32>) -> bool {
    selected_year.is_some_and(|year| event.year > year)
}

pub fn visible_locations(locations: &[Location], selected_year: Option<i32>) -> Vec<&Location> {
    locations
        .iter()
        .filter(|location| location_visible(location, selected_year))
        .collect()
}

pub fn visible_routes(routes: &[Route], selected_year: Option<i32>) -> Vec<&Route> {
    routes
        .iter()
        .filter(|route| route_visible(route, selected_year))
        .collect()
}

/// Timeline row with its emphasis decided.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub event: TimelineEvent,
    pub de_emphasized: bool,
}

/// All events sorted by year; same-year events keep dataset order.
pub fn timeline_entries(events: &[TimelineEvent], selected_year: Option<i32>) -> Vec<TimelineEntry> {
    let mut sorted: Vec<&TimelineEvent> = events.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|event| event.year);
    sorted
        .into_iter()
        .map(|event| TimelineEntry {
            event: event.clone(),
            de_emphasized: event_de_emphasized(event, selected_year),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    fn ids<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        items.into_iter().collect()
    }

    #[test]
    fn test_no_year_shows_everything() {
        assert_eq!(visible_locations(dataset::locations(), None).len(), dataset::locations().len());
        assert_eq!(visible_routes(dataset::routes(), None).len(), dataset::routes().len());
        assert!(
            timeline_entries(dataset::timeline_events(), None)
                .iter()
                .all(|entry| !entry.de_emphasized)
        );
    }

    #[test]
    fn test_departure_year_scenario() {
        let visible = visible_locations(dataset::locations(), Some(1271));
        assert_eq!(
            ids(visible.iter().map(|l| l.id.as_str())),
            vec!["venice", "constantinople", "trebizond", "tabriz", "balkh", "acre", "tyre"]
        );

        let routes = visible_routes(dataset::routes(), Some(1271));
        assert_eq!(ids(routes.iter().map(|r| r.id.as_str())), vec!["northern-silk-road"]);
    }

    #[test]
    fn test_location_without_visit_year_is_always_visible() {
        let mut region = dataset::location_by_id("balkh").unwrap().clone();
        region.year_visited = None;
        assert!(location_visible(&region, Some(1000)));
        assert!(location_visible(&region, None));
    }

    #[test]
    fn test_visibility_matches_predicate_for_every_year() {
        for year in 1200..=1320 {
            for location in dataset::locations() {
                let expected = location.year_visited.is_none_or(|visited| visited <= year);
                assert_eq!(location_visible(location, Some(year)), expected);
            }
            for route in dataset::routes() {
                assert_eq!(route_visible(route, Some(year)), route.year_active <= year);
            }
            for event in dataset::timeline_events() {
                assert_eq!(event_de_emphasized(event, Some(year)), event.year > year);
            }
        }
    }

    #[test]
    fn test_year_without_records_hides_everything_dated() {
        assert!(visible_locations(dataset::locations(), Some(1100)).is_empty());
        assert!(visible_routes(dataset::routes(), Some(1100)).is_empty());
    }

    #[test]
    fn test_timeline_sorted_with_stable_ties() {
        let entries = timeline_entries(dataset::timeline_events(), None);
        assert_eq!(entries.len(), dataset::timeline_events().len());
        assert!(entries.windows(2).all(|pair| pair[0].event.year <= pair[1].event.year));

        let order = ids(entries.iter().map(|e| e.event.id.as_str()));
        let first_journey = order.iter().position(|id| *id == "first-polo-journey").unwrap();
        let kublai = order.iter().position(|id| *id == "kublai-becomes-khan").unwrap();
        let byzantine = order.iter().position(|id| *id == "byzantine-reconquest").unwrap();
        assert!(first_journey < kublai);
        assert!(kublai < byzantine);
        assert_eq!(&order[11..], &["marco-imprisoned", "book-written"]);
    }

    #[test]
    fn test_timeline_de_emphasis_keeps_events() {
        let entries = timeline_entries(dataset::timeline_events(), Some(1275));
        assert_eq!(entries.len(), 13);
        let faded = ids(
            entries
                .iter()
                .filter(|e| e.de_emphasized)
                .map(|e| e.event.id.as_str()),
        );
        assert_eq!(
            faded,
            vec!["polos-return-journey", "polos-return-venice", "marco-imprisoned", "book-written"]
        );
    }
}
