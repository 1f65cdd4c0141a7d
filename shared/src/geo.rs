//! Web-Mercator projection and the small amount of 2D geometry the map
//! surface needs (dashes, glyph outlines, marker hit-testing).

use crate::Coordinates;
use crate::style::MarkerGlyph;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

pub type Point = (f32, f32);

/// Absolute pixel position on the world plane at `zoom`.
pub fn world_pixel(coordinates: Coordinates, zoom: f64) -> (f64, f64) {
    let scale = TILE_SIZE * 2f64.powf(zoom);
    let lat = coordinates.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let sin = (lat * PI / 180.0).sin();
    let x = (coordinates.lon + 180.0) / 360.0 * scale;
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * scale;
    (x, y)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// What part of the world a surface of `width`×`height` pixels shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: f64,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn project(&self, coordinates: Coordinates) -> Point {
        let (cx, cy) = world_pixel(self.center, self.zoom);
        let (x, y) = world_pixel(coordinates, self.zoom);
        (
            (x - cx + self.width as f64 / 2.0) as f32,
            (y - cy + self.height as f64 / 2.0) as f32,
        )
    }

    pub fn project_path(&self, path: &[Coordinates]) -> Vec<Point> {
        path.iter().map(|c| self.project(*c)).collect()
    }
}

/// Split a polyline into `dash`-long pieces separated by `gap` pixels.
pub fn dash_segments(points: &[Point], dash: f32, gap: f32) -> Vec<[Point; 2]> {
    let mut segments = Vec::new();
    if dash <= 0.0 || points.len() < 2 {
        return segments;
    }
    let period = dash + gap.max(0.0);
    // Distance already walked inside the current dash/gap period.
    let mut phase = 0.0f32;

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt();
        if length == 0.0 {
            continue;
        }
        let direction = ((end.0 - start.0) / length, (end.1 - start.1) / length);
        let at = |distance: f32| {
            (
                start.0 + direction.0 * distance,
                start.1 + direction.1 * distance,
            )
        };

        let mut walked = 0.0f32;
        while walked < length {
            if phase < dash {
                let step = (dash - phase).min(length - walked);
                segments.push([at(walked), at(walked + step)]);
                walked += step;
                phase += step;
            } else {
                let step = (period - phase).min(length - walked);
                walked += step;
                phase += step;
            }
            if phase >= period {
                phase = 0.0;
            }
        }
    }
    segments
}

/// Index of the topmost marker whose disc of `radius` contains `click`.
/// Markers are drawn in slice order, so the last hit is the one on top.
pub fn hit_test(markers: &[Point], click: Point, radius: f32) -> Option<usize> {
    markers
        .iter()
        .rposition(|marker| distance(*marker, click) <= radius)
}

/// Index of the topmost polyline passing within `tolerance` of `click`.
pub fn polyline_hit_test(polylines: &[Vec<Point>], click: Point, tolerance: f32) -> Option<usize> {
    polylines.iter().rposition(|points| {
        points
            .windows(2)
            .any(|pair| distance_to_segment(click, pair[0], pair[1]) <= tolerance)
    })
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn distance_to_segment(point: Point, start: Point, end: Point) -> f32 {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return distance(point, start);
    }
    let t = (((point.0 - start.0) * dx + (point.1 - start.1) * dy) / length_sq).clamp(0.0, 1.0);
    distance(point, (start.0 + t * dx, start.1 + t * dy))
}

/// Pieces of a projected polyline that fall inside a `width`×`height`
/// surface grown by `margin` on every side. Consecutive visible segments
/// stay joined in one run.
pub fn visible_runs(points: &[Point], width: f32, height: f32, margin: f32) -> Vec<Vec<Point>> {
    let bounds = ((-margin, -margin), (width + margin, height + margin));
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut run_open = false;

    for pair in points.windows(2) {
        let Some(clipped) = clip_segment(pair[0], pair[1], bounds) else {
            run_open = false;
            continue;
        };
        match runs.last_mut() {
            Some(run) if run_open && clipped.starts_inside => run.push(clipped.end),
            _ => runs.push(vec![clipped.start, clipped.end]),
        }
        run_open = clipped.ends_inside;
    }
    runs
}

struct ClippedSegment {
    start: Point,
    end: Point,
    starts_inside: bool,
    ends_inside: bool,
}

// Liang-Barsky against an axis-aligned rectangle.
fn clip_segment(a: Point, b: Point, (min, max): (Point, Point)) -> Option<ClippedSegment> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f32, 1.0f32);

    for (p, q) in [
        (-dx, a.0 - min.0),
        (dx, max.0 - a.0),
        (-dy, a.1 - min.1),
        (dy, max.1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f32| (a.0 + t * dx, a.1 + t * dy);
    Some(ClippedSegment {
        start: if t0 == 0.0 { a } else { at(t0) },
        end: if t1 == 1.0 { b } else { at(t1) },
        starts_inside: t0 == 0.0,
        ends_inside: t1 == 1.0,
    })
}

/// Closed outline of a marker glyph, or `None` for glyphs drawn as a dot.
pub fn glyph_outline(glyph: MarkerGlyph, center: Point, size: f32) -> Option<Vec<Point>> {
    let (cx, cy) = center;
    let outline = match glyph {
        MarkerGlyph::Dot => return None,
        MarkerGlyph::Triangle => regular_polygon(center, size, 3),
        MarkerGlyph::Pentagon => regular_polygon(center, size, 5),
        MarkerGlyph::Crown => vec![
            (cx - size, cy + size * 0.6),
            (cx - size, cy - size * 0.5),
            (cx - size * 0.5, cy),
            (cx, cy - size * 0.8),
            (cx + size * 0.5, cy),
            (cx + size, cy - size * 0.5),
            (cx + size, cy + size * 0.6),
        ],
    };
    let mut closed = outline;
    if let Some(first) = closed.first().copied() {
        closed.push(first);
    }
    Some(closed)
}

fn regular_polygon(center: Point, radius: f32, sides: usize) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            // first vertex points up
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::TAU / sides as f32;
            (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
        })
        .collect()
}
