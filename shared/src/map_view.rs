//! Map view synchronization against an abstract drawing surface.
//!
//! [`MapSurface`] is the whole contract with the rendering widget.
//! [`MapViewSync`] owns at most one surface for its lifetime: it is acquired
//! by [`MapViewSync::mount`] and released by [`MapViewSync::unmount`] (or on
//! drop), and a released view never mounts again.

use crate::filter::{visible_locations, visible_routes};
use crate::geo::ZoomBounds;
use crate::style::{MarkerIcon, PolylineStyle, marker_icon, route_style};
use crate::{Coordinates, Location, Route};
use std::rc::Rc;

pub type MarkerCallback = Rc<dyn Fn()>;

/// Text a map layer shows in its popup when clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    pub footnote: Option<String>,
}

impl PopupContent {
    pub fn for_location(location: &Location) -> Self {
        Self {
            title: location.name.clone(),
            subtitle: location.modern_name.as_ref().map(|modern| format!("({modern})")),
            body: location.significance.clone(),
            footnote: location.year_visited.map(|year| format!("Visited: {year}")),
        }
    }

    pub fn for_route(route: &Route) -> Self {
        Self {
            title: route.name.clone(),
            subtitle: None,
            body: route.description.clone(),
            footnote: None,
        }
    }
}

/// Construction parameters of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    pub center: Coordinates,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl SurfaceOptions {
    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds {
            min: self.min_zoom,
            max: self.max_zoom,
        }
    }
}

pub trait MapSurface {
    fn add_marker(
        &mut self,
        at: Coordinates,
        icon: MarkerIcon,
        popup: PopupContent,
        on_click: MarkerCallback,
    );

    fn add_polyline(&mut self, path: &[Coordinates], style: PolylineStyle, popup: PopupContent);

    fn clear_layers(&mut self);

    fn set_view(&mut self, center: Coordinates, zoom: f64);

    fn destroy(&mut self);

    /// Called after a batch of layer changes.
    fn present(&mut self) {}
}

pub struct MapViewSync<S: MapSurface> {
    options: SurfaceOptions,
    focus_zoom: f64,
    locations: Vec<Location>,
    routes: Vec<Route>,
    on_location_selected: Rc<dyn Fn(Location)>,
    surface: Option<S>,
    released: bool,
    center: Coordinates,
    zoom: f64,
    selected_year: Option<i32>,
}

impl<S: MapSurface> MapViewSync<S> {
    pub fn new(
        options: SurfaceOptions,
        focus_zoom: f64,
        locations: &[Location],
        routes: &[Route],
        on_location_selected: impl Fn(Location) + 'static,
    ) -> Self {
        Self {
            options,
            focus_zoom: options.zoom_bounds().clamp(focus_zoom),
            locations: locations.to_vec(),
            routes: routes.to_vec(),
            on_location_selected: Rc::new(on_location_selected),
            surface: None,
            released: false,
            center: options.center,
            zoom: options.zoom,
            selected_year: None,
        }
    }

    /// Take ownership of a freshly constructed surface and draw on it.
    /// Returns `false` (and drops `surface` untouched) when a surface is
    /// already mounted or the view was released.
    pub fn mount(&mut self, surface: S) -> bool {
        if self.surface.is_some() || self.released {
            return false;
        }
        self.surface = Some(surface);
        self.apply_view();
        self.redraw();
        true
    }

    pub fn unmount(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.clear_layers();
            surface.destroy();
        }
        self.released = true;
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Replace every drawn layer with the set visible for `year`.
    pub fn set_year(&mut self, year: Option<i32>) {
        self.selected_year = year;
        self.redraw();
    }

    /// Center on a newly selected location at the focus zoom; `None` keeps
    /// the current viewport.
    pub fn focus(&mut self, location: Option<&Location>) {
        if let Some(location) = location {
            self.center = location.coordinates;
            self.zoom = self.focus_zoom;
            self.apply_view();
        }
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = self.options.zoom_bounds().clamp(self.zoom + delta);
        self.apply_view();
    }

    pub fn reset_view(&mut self) {
        self.center = self.options.center;
        self.zoom = self.options.zoom;
        self.apply_view();
    }

    fn apply_view(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_view(self.center, self.zoom);
            surface.present();
        }
    }

    fn redraw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear_layers();

        for route in visible_routes(&self.routes, self.selected_year) {
            surface.add_polyline(
                &route.coordinates,
                route_style(route.category),
                PopupContent::for_route(route),
            );
        }

        for location in visible_locations(&self.locations, self.selected_year) {
            let on_click: MarkerCallback = {
                let on_location_selected = Rc::clone(&self.on_location_selected);
                let location = location.clone();
                Rc::new(move || on_location_selected(location.clone()))
            };
            surface.add_marker(
                location.coordinates,
                marker_icon(location.category),
                PopupContent::for_location(location),
                on_click,
            );
        }

        surface.present();
    }
}

impl<S: MapSurface> Drop for MapViewSync<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::selection::ExplorerSelection;
    use crate::style::MarkerGlyph;
    use std::cell::RefCell;

    #[derive(Default)]
    struct SurfaceLog {
        markers: Vec<(Coordinates, MarkerIcon, MarkerCallback)>,
        marker_popups: Vec<PopupContent>,
        polylines: Vec<(Vec<Coordinates>, PolylineStyle)>,
        route_popups: Vec<PopupContent>,
        views: Vec<(Coordinates, f64)>,
        clears: usize,
        presents: usize,
        destroyed: bool,
    }

    struct RecordingSurface {
        log: Rc<RefCell<SurfaceLog>>,
    }

    impl MapSurface for RecordingSurface {
        fn add_marker(
            &mut self,
            at: Coordinates,
            icon: MarkerIcon,
            popup: PopupContent,
            on_click: MarkerCallback,
        ) {
            let mut log = self.log.borrow_mut();
            log.markers.push((at, icon, on_click));
            log.marker_popups.push(popup);
        }

        fn add_polyline(&mut self, path: &[Coordinates], style: PolylineStyle, popup: PopupContent) {
            let mut log = self.log.borrow_mut();
            log.polylines.push((path.to_vec(), style));
            log.route_popups.push(popup);
        }

        fn clear_layers(&mut self) {
            let mut log = self.log.borrow_mut();
            log.markers.clear();
            log.marker_popups.clear();
            log.polylines.clear();
            log.route_popups.clear();
            log.clears += 1;
        }

        fn set_view(&mut self, center: Coordinates, zoom: f64) {
            self.log.borrow_mut().views.push((center, zoom));
        }

        fn destroy(&mut self) {
            self.log.borrow_mut().destroyed = true;
        }

        fn present(&mut self) {
            self.log.borrow_mut().presents += 1;
        }
    }

    fn options() -> SurfaceOptions {
        SurfaceOptions {
            center: Coordinates::new(35.0, 75.0),
            zoom: 4.0,
            min_zoom: 2.0,
            max_zoom: 10.0,
        }
    }

    fn mounted_view(
        selection: Rc<RefCell<ExplorerSelection>>,
    ) -> (MapViewSync<RecordingSurface>, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        let mut view = MapViewSync::new(
            options(),
            6.0,
            dataset::locations(),
            dataset::routes(),
            move |location| selection.borrow_mut().select_location(Some(location)),
        );
        assert!(view.mount(RecordingSurface { log: log.clone() }));
        (view, log)
    }

    fn drawn_location_ids(log: &SurfaceLog) -> Vec<&'static str> {
        log.markers
            .iter()
            .map(|(at, _, _)| {
                dataset::locations()
                    .iter()
                    .find(|l| l.coordinates == *at)
                    .map(|l| l.id.as_str())
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_mount_draws_everything_at_overview() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (_view, log) = mounted_view(selection);
        let log = log.borrow();
        assert_eq!(log.views, vec![(Coordinates::new(35.0, 75.0), 4.0)]);
        assert_eq!(log.markers.len(), dataset::locations().len());
        assert_eq!(log.polylines.len(), dataset::routes().len());
    }

    #[test]
    fn test_year_change_replaces_layers() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (mut view, log) = mounted_view(selection);

        view.set_year(Some(1271));
        {
            let log = log.borrow();
            assert_eq!(
                drawn_location_ids(&log),
                vec!["venice", "constantinople", "trebizond", "tabriz", "balkh", "acre", "tyre"]
            );
            assert_eq!(log.polylines.len(), 1);
            assert!(log.polylines[0].1.dash.is_none());
        }

        // narrowing the filter must not leave stale markers behind
        view.set_year(Some(1254));
        assert_eq!(drawn_location_ids(&log.borrow()), vec!["venice"]);
        assert!(log.borrow().polylines.is_empty());

        view.set_year(None);
        assert_eq!(log.borrow().markers.len(), dataset::locations().len());
        assert_eq!(log.borrow().polylines.len(), 2);
    }

    #[test]
    fn test_sea_route_is_dashed() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (_view, log) = mounted_view(selection);
        let log = log.borrow();
        let dashed: Vec<bool> = log.polylines.iter().map(|(_, s)| s.dash.is_some()).collect();
        assert_eq!(dashed, vec![false, true]);
    }

    #[test]
    fn test_marker_click_selects_and_focus_recenters() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (mut view, log) = mounted_view(selection.clone());

        let khanbaliq = dataset::location_by_id("khanbaliq").unwrap();
        let callback = log
            .borrow()
            .markers
            .iter()
            .find(|(at, _, _)| *at == khanbaliq.coordinates)
            .map(|(_, icon, callback)| {
                assert_eq!(icon.glyph, MarkerGlyph::Crown);
                callback.clone()
            })
            .unwrap();
        callback();

        assert_eq!(selection.borrow().selected_location(), Some(khanbaliq));

        view.focus(selection.borrow().selected_location());
        assert_eq!(log.borrow().views.last(), Some(&(khanbaliq.coordinates, 6.0)));
    }

    #[test]
    fn test_layers_carry_popups() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (_view, log) = mounted_view(selection);
        let log = log.borrow();

        let khanbaliq_index = drawn_location_ids(&log)
            .iter()
            .position(|id| *id == "khanbaliq")
            .unwrap();
        let popup = &log.marker_popups[khanbaliq_index];
        let khanbaliq = dataset::location_by_id("khanbaliq").unwrap();
        assert_eq!(popup.title, khanbaliq.name);
        assert_eq!(popup.body, khanbaliq.significance);
        assert_eq!(popup.footnote.as_deref(), Some("Visited: 1275"));
        assert_eq!(
            popup.subtitle,
            khanbaliq.modern_name.as_ref().map(|modern| format!("({modern})"))
        );

        let route_titles: Vec<&str> = log.route_popups.iter().map(|p| p.title.as_str()).collect();
        let route_names: Vec<&str> = dataset::routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(route_titles, route_names);
        assert_eq!(log.route_popups[1].body, dataset::routes()[1].description);
        assert!(log.route_popups.iter().all(|p| p.footnote.is_none()));
    }

    #[test]
    fn test_clearing_selection_keeps_viewport() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (mut view, log) = mounted_view(selection);
        view.focus(None);
        assert_eq!(log.borrow().views.len(), 1);
    }

    #[test]
    fn test_zoom_is_bounded() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (mut view, log) = mounted_view(selection);
        let last_view = || log.borrow().views.last().copied();
        for _ in 0..20 {
            view.zoom_by(1.0);
        }
        assert_eq!(last_view().map(|(_, zoom)| zoom), Some(10.0));
        for _ in 0..20 {
            view.zoom_by(-1.0);
        }
        assert_eq!(last_view().map(|(_, zoom)| zoom), Some(2.0));
        view.reset_view();
        assert_eq!(last_view(), Some((Coordinates::new(35.0, 75.0), 4.0)));
    }

    #[test]
    fn test_unmount_releases_surface_once() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (mut view, log) = mounted_view(selection);

        view.unmount();
        assert!(log.borrow().destroyed);
        assert!(log.borrow().markers.is_empty());
        assert!(view.surface().is_none());

        // no re-acquisition after release
        let second = Rc::new(RefCell::new(SurfaceLog::default()));
        assert!(!view.mount(RecordingSurface { log: second.clone() }));
        view.set_year(Some(1300));
        assert_eq!(second.borrow().clears, 0);
    }

    #[test]
    fn test_drop_destroys_surface() {
        let selection = Rc::new(RefCell::new(ExplorerSelection::default()));
        let (view, log) = mounted_view(selection);
        drop(view);
        assert!(log.borrow().destroyed);
    }

    #[test]
    fn test_year_before_mount_is_applied_on_mount() {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        let mut view = MapViewSync::new(
            options(),
            6.0,
            dataset::locations(),
            dataset::routes(),
            |_| {},
        );
        view.set_year(Some(1292));
        assert!(view.mount(RecordingSurface { log: log.clone() }));
        assert_eq!(log.borrow().markers.len(), 10);
        assert_eq!(log.borrow().polylines.len(), 2);
    }
}
