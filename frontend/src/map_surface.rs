//! `MapSurface` drawn with fast2d on a plain canvas.
//!
//! There are no map tiles: the surface paints a water-colored background,
//! a 10° graticule, the route polylines and the location markers, all
//! projected with Web Mercator around the current view.

use crate::theme::{MAP_GRATICULE, MAP_WATER};
use shared::geo::{
    Point, Viewport, ZoomBounds, dash_segments, glyph_outline, hit_test, polyline_hit_test, visible_runs,
};
use shared::style::{MARKER_BORDER, MarkerGlyph};
use shared::{
    Coordinates, MapSurface, MarkerCallback, MarkerIcon, PolylineStyle, PopupContent, Rgba, SurfaceOptions,
};

const GRATICULE_STEP: i32 = 10;
const GRATICULE_LAT_LIMIT: i32 = 80;
// Extra pixels around a marker that still count as a click on it.
const HIT_SLOP: f32 = 4.0;

struct DrawnMarker {
    at: Coordinates,
    icon: MarkerIcon,
    popup: PopupContent,
    on_click: MarkerCallback,
}

struct DrawnPolyline {
    path: Vec<Coordinates>,
    style: PolylineStyle,
    popup: PopupContent,
}

/// What a click on the canvas landed on.
pub struct MapHit {
    pub popup: PopupContent,
    /// Only markers select something; routes just open their popup.
    pub on_click: Option<MarkerCallback>,
}

pub struct Fast2dSurface {
    canvas: fast2d::CanvasWrapper,
    zoom_bounds: ZoomBounds,
    viewport: Viewport,
    markers: Vec<DrawnMarker>,
    polylines: Vec<DrawnPolyline>,
    destroyed: bool,
}

impl Fast2dSurface {
    pub fn new(canvas: fast2d::CanvasWrapper, options: SurfaceOptions) -> Self {
        let zoom_bounds = options.zoom_bounds();
        Self {
            canvas,
            zoom_bounds,
            viewport: Viewport {
                center: options.center,
                zoom: zoom_bounds.clamp(options.zoom),
                width: 0.0,
                height: 0.0,
            },
            markers: Vec::new(),
            polylines: Vec::new(),
            destroyed: false,
        }
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        if self.destroyed {
            return;
        }
        self.canvas.resized(width, height);
        self.viewport.width = width as f32;
        self.viewport.height = height as f32;
        self.present();
    }

    /// The topmost feature under `point` (canvas pixels). Markers are drawn
    /// above routes, so they are tested first.
    pub fn feature_at(&self, point: Point) -> Option<MapHit> {
        if let Some(marker) = self.marker_at(point) {
            return Some(MapHit {
                popup: marker.popup.clone(),
                on_click: Some(marker.on_click.clone()),
            });
        }
        self.polyline_at(point).map(|polyline| MapHit {
            popup: polyline.popup.clone(),
            on_click: None,
        })
    }

    fn marker_at(&self, point: Point) -> Option<&DrawnMarker> {
        let positions: Vec<Point> = self
            .markers
            .iter()
            .map(|marker| self.viewport.project(marker.at))
            .collect();
        let radius = self
            .markers
            .iter()
            .map(|marker| marker.icon.radius)
            .fold(0.0, f32::max);
        hit_test(&positions, point, radius + HIT_SLOP).map(|index| &self.markers[index])
    }

    fn polyline_at(&self, point: Point) -> Option<&DrawnPolyline> {
        let paths: Vec<Vec<Point>> = self
            .polylines
            .iter()
            .map(|polyline| self.viewport.project_path(&polyline.path))
            .collect();
        let tolerance = self
            .polylines
            .iter()
            .map(|polyline| polyline.style.width)
            .fold(0.0, f32::max);
        polyline_hit_test(&paths, point, tolerance + HIT_SLOP).map(|index| &self.polylines[index])
    }

    fn objects(&self) -> Vec<fast2d::Object2d> {
        let mut objects = Vec::new();
        let (r, g, b, a) = MAP_WATER;
        objects.push(
            fast2d::Rectangle::new()
                .position(0., 0.)
                .size(self.viewport.width, self.viewport.height)
                .color(r, g, b, a)
                .into(),
        );
        self.push_graticule(&mut objects);

        for polyline in &self.polylines {
            self.push_polyline(&mut objects, &self.viewport.project_path(&polyline.path), polyline.style);
        }
        for marker in &self.markers {
            push_marker(&mut objects, self.viewport.project(marker.at), marker.icon);
        }
        objects
    }

    fn push_graticule(&self, objects: &mut Vec<fast2d::Object2d>) {
        let (r, g, b, a) = MAP_GRATICULE;
        let limit = GRATICULE_LAT_LIMIT as f64;

        for lon in (-180..=180).step_by(GRATICULE_STEP as usize) {
            let lon = lon as f64;
            let points = self.viewport.project_path(&[
                Coordinates::new(-limit, lon),
                Coordinates::new(limit, lon),
            ]);
            objects.push(fast2d::Line::new().points(&points).color(r, g, b, a).width(1.).into());
        }
        for lat in (-GRATICULE_LAT_LIMIT..=GRATICULE_LAT_LIMIT).step_by(GRATICULE_STEP as usize) {
            let lat = lat as f64;
            let points = self.viewport.project_path(&[
                Coordinates::new(lat, -180.0),
                Coordinates::new(lat, 180.0),
            ]);
            objects.push(fast2d::Line::new().points(&points).color(r, g, b, a).width(1.).into());
        }
    }

    // Only the on-canvas part of a path is stroked; a zoomed-in route can
    // project to thousands of pixels outside the surface.
    fn push_polyline(&self, objects: &mut Vec<fast2d::Object2d>, points: &[Point], style: PolylineStyle) {
        let Rgba(r, g, b, a) = style.color;
        let runs = visible_runs(points, self.viewport.width, self.viewport.height, style.width);
        for run in runs {
            match style.dash {
                Some(pattern) => {
                    for segment in dash_segments(&run, pattern.dash, pattern.gap) {
                        objects.push(
                            fast2d::Line::new()
                                .points(&segment)
                                .color(r, g, b, a)
                                .width(style.width)
                                .into(),
                        );
                    }
                }
                None => {
                    objects.push(
                        fast2d::Line::new()
                            .points(&run)
                            .color(r, g, b, a)
                            .width(style.width)
                            .into(),
                    );
                }
            }
        }
    }
}

fn push_marker(objects: &mut Vec<fast2d::Object2d>, center: Point, icon: MarkerIcon) {
    let Rgba(r, g, b, a) = icon.color;
    let Rgba(br, bg, bb, ba) = MARKER_BORDER;
    objects.push(
        fast2d::Circle::new()
            .center(center.0, center.1)
            .radius(icon.radius)
            .color(r, g, b, a)
            .inner_border(2., br, bg, bb, ba)
            .into(),
    );

    let glyph_size = icon.radius * 0.5;
    match glyph_outline(icon.glyph, center, glyph_size) {
        Some(outline) => objects.push(
            fast2d::Line::new()
                .points(&outline)
                .color(br, bg, bb, ba)
                .width(1.5)
                .into(),
        ),
        None => {
            debug_assert_eq!(icon.glyph, MarkerGlyph::Dot);
            objects.push(
                fast2d::Circle::new()
                    .center(center.0, center.1)
                    .radius(glyph_size * 0.6)
                    .color(br, bg, bb, ba)
                    .into(),
            );
        }
    }
}

impl MapSurface for Fast2dSurface {
    fn add_marker(
        &mut self,
        at: Coordinates,
        icon: MarkerIcon,
        popup: PopupContent,
        on_click: MarkerCallback,
    ) {
        self.markers.push(DrawnMarker {
            at,
            icon,
            popup,
            on_click,
        });
    }

    fn add_polyline(&mut self, path: &[Coordinates], style: PolylineStyle, popup: PopupContent) {
        self.polylines.push(DrawnPolyline {
            path: path.to_vec(),
            style,
            popup,
        });
    }

    fn clear_layers(&mut self) {
        self.markers.clear();
        self.polylines.clear();
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64) {
        self.viewport.center = center;
        self.viewport.zoom = self.zoom_bounds.clamp(zoom);
    }

    fn destroy(&mut self) {
        self.clear_layers();
        self.canvas.update_objects(|objects| objects.clear());
        self.destroyed = true;
    }

    fn present(&mut self) {
        if self.destroyed || self.viewport.width == 0.0 || self.viewport.height == 0.0 {
            return;
        }
        let mut objects = self.objects();
        self.canvas.update_objects(move |canvas_objects| {
            std::mem::swap(canvas_objects, &mut objects);
        });
    }
}
