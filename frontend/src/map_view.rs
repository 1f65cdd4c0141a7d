//! Map card: header with the active filter, the canvas and zoom controls.
//!
//! The canvas hosts one [`MapViewSync`] over a [`Fast2dSurface`]. The surface
//! is acquired once the fast2d wrapper is ready and released when the canvas
//! leaves the DOM. Clicking a marker or a route opens its popup over the
//! canvas; clicking empty water closes it.

use crate::dataflow::{Atom, Relay, relay};
use crate::explorer::Explorer;
use crate::map_surface::Fast2dSurface;
use crate::theme::*;
use crate::widgets::{BadgeTone, ButtonVariant, badge, button, card, card_title};
use futures::StreamExt;
use shared::geo::Point;
use shared::{ExplorerConfig, MapViewSync, PopupContent, dataset};
use std::cell::RefCell;
use std::rc::Rc;
use zoon::*;

type SharedMapView = Rc<RefCell<MapViewSync<Fast2dSurface>>>;

const CANVAS_HEIGHT: u32 = 520;
const POPUP_WIDTH: f32 = 260.0;
// Gap between the clicked point and the popup's corner.
const POPUP_OFFSET: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
struct MapPopup {
    anchor: Point,
    content: PopupContent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ZoomControl {
    In,
    Out,
    Reset,
}

pub fn map_card(explorer: &Explorer, config: &ExplorerConfig) -> impl Element {
    card(map_header(explorer), map_body(explorer, config))
}

fn map_header(explorer: &Explorer) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_12))
        .item(card_title("Historical Map"))
        .item_signal(
            explorer
                .selected_year_signal()
                .map(|year| year.map(|year| badge(format!("Filtered to {year}"), BadgeTone::Accent))),
        )
        .item(El::new().s(Width::fill()))
        .item({
            let show_all_clicked_relay = explorer.show_all_clicked_relay.clone();
            button("Show All", ButtonVariant::Outline, move || show_all_clicked_relay.send(()))
        })
}

fn map_body(explorer: &Explorer, config: &ExplorerConfig) -> impl Element {
    let (zoom_clicked_relay, zoom_clicked_stream) = relay::<ZoomControl>();
    let zoom_clicked_stream = Rc::new(RefCell::new(Some(zoom_clicked_stream)));
    let popup: Atom<Option<MapPopup>> = Atom::default();

    Stack::new()
        .s(Width::fill())
        .s(Height::exact(CANVAS_HEIGHT))
        .s(RoundedCorners::all(CORNER_RADIUS))
        .s(Clip::both())
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .layer(
            El::new()
                .s(Width::fill())
                .s(Height::fill())
                .child_signal(
                    map_canvas(explorer.clone(), config.clone(), zoom_clicked_stream, popup.clone())
                        .into_signal_option(),
                ),
        )
        .layer_signal(popup.signal().map({
            let popup_atom = popup.clone();
            move |popup| popup.map(|popup| popup_card(popup, popup_atom.clone()))
        }))
        .layer(zoom_controls(zoom_clicked_relay))
}

fn popup_card(popup: MapPopup, popup_atom: Atom<Option<MapPopup>>) -> impl Element {
    let MapPopup { anchor, content } = popup;
    Column::new()
        .s(Align::new().top().left())
        .s(Transform::new().move_right(anchor.0).move_down(anchor.1))
        .s(Width::exact(POPUP_WIDTH as u32))
        .s(Padding::all(SPACING_12))
        .s(Gap::new().y(SPACING_4))
        .s(Background::new().color(CARD_BACKGROUND))
        .s(RoundedCorners::all(CORNER_RADIUS))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .s(Shadows::new([Shadow::new().y(2).blur(8).color(SHADOW_COLOR)]))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_8))
                .item(
                    Paragraph::new()
                        .s(Width::fill())
                        .s(Font::new()
                            .size(FONT_SIZE_16)
                            .weight(FontWeight::SemiBold)
                            .family([FontFamily::new(FONT_FAMILY_SERIF), FontFamily::Serif])
                            .color(TEXT_PRIMARY))
                        .content(content.title),
                )
                .item(button("✕", ButtonVariant::Ghost, move || popup_atom.set_neq(None))),
        )
        .item(content.subtitle.map(|subtitle| {
            El::new()
                .s(Font::new().size(FONT_SIZE_12).italic().color(TEXT_MUTED))
                .child(Text::new(subtitle))
        }))
        .item(
            Paragraph::new()
                .s(Font::new().size(FONT_SIZE_14).color(TEXT_PRIMARY).line_height(20))
                .content(content.body),
        )
        .item(content.footnote.map(|footnote| {
            El::new()
                .s(Font::new().size(FONT_SIZE_12).weight(FontWeight::Medium).color(TEXT_MUTED))
                .child(Text::new(footnote))
        }))
}

/// Top-left corner of a popup opened at `click`, flipped to the other side
/// of the click when it would overflow the `width`×`height` canvas.
fn popup_anchor(click: Point, width: f32, height: f32) -> Point {
    let x = if click.0 + POPUP_OFFSET + POPUP_WIDTH > width {
        (click.0 - POPUP_OFFSET - POPUP_WIDTH).max(0.0)
    } else {
        click.0 + POPUP_OFFSET
    };
    let y = if click.1 > height / 2.0 {
        (click.1 - POPUP_OFFSET - height / 3.0).max(0.0)
    } else {
        click.1 + POPUP_OFFSET
    };
    (x, y)
}

fn zoom_controls(zoom_clicked_relay: Relay<ZoomControl>) -> impl Element {
    let zoom_button = move |label: &str, control: ZoomControl| {
        let zoom_clicked_relay = zoom_clicked_relay.clone();
        El::new()
            .s(Background::new().color(CARD_BACKGROUND))
            .s(RoundedCorners::all(CORNER_RADIUS - 2))
            .child(button(label, ButtonVariant::Outline, move || {
                zoom_clicked_relay.send(control)
            }))
    };

    Column::new()
        .s(Align::new().top().right())
        .s(Padding::all(SPACING_12))
        .s(Gap::new().y(SPACING_4))
        .item(zoom_button("+", ZoomControl::In))
        .item(zoom_button("−", ZoomControl::Out))
        .item(zoom_button("⟲", ZoomControl::Reset))
}

async fn map_canvas(
    explorer: Explorer,
    config: ExplorerConfig,
    zoom_clicked_stream: Rc<RefCell<Option<futures::channel::mpsc::UnboundedReceiver<ZoomControl>>>>,
    popup: Atom<Option<MapPopup>>,
) -> impl Element {
    let mut zoon_canvas = Canvas::new()
        .width(0)
        .height(0)
        .s(Width::fill())
        .s(Height::fill())
        .s(Cursor::new(CursorIcon::Pointer));

    let dom_canvas = zoon_canvas.raw_el_mut().dom_element();
    let canvas_wrapper = fast2d::CanvasWrapper::new_with_canvas(dom_canvas.clone()).await;

    let map_view: SharedMapView = Rc::new(RefCell::new(MapViewSync::new(
        config.surface_options(),
        config.map.focus_zoom,
        dataset::locations(),
        dataset::routes(),
        {
            let marker_clicked_relay = explorer.marker_clicked_relay.clone();
            move |location| marker_clicked_relay.send(location)
        },
    )));
    let mounted = map_view
        .borrow_mut()
        .mount(Fast2dSurface::new(canvas_wrapper, config.surface_options()));
    debug_log!(crate::DEBUG_MAP, "Map surface mounted: {mounted}");

    let year_task = Task::start_droppable(explorer.selected_year_signal().for_each_sync({
        let map_view = map_view.clone();
        let popup = popup.clone();
        move |year| {
            debug_log!(crate::DEBUG_MAP, "Map redraw for year {year:?}");
            // the popup may belong to a layer the new year hides
            popup.set_neq(None);
            map_view.borrow_mut().set_year(year);
        }
    }));

    let focus_task = Task::start_droppable(explorer.selected_location_signal().for_each_sync({
        let map_view = map_view.clone();
        move |location| map_view.borrow_mut().focus(location.as_ref())
    }));

    let zoom_task = zoom_clicked_stream.borrow_mut().take().map(|mut stream| {
        let map_view = map_view.clone();
        Task::start_droppable(async move {
            while let Some(control) = stream.next().await {
                let mut map_view = map_view.borrow_mut();
                match control {
                    ZoomControl::In => map_view.zoom_by(1.0),
                    ZoomControl::Out => map_view.zoom_by(-1.0),
                    ZoomControl::Reset => map_view.reset_view(),
                }
            }
        })
    });

    zoon_canvas
        .on_pointer_down_event({
            let map_view = map_view.clone();
            move |event: PointerEvent| {
                let raw_pointer_down = match &event.raw_event {
                    RawPointerEvent::PointerDown(raw_event) => raw_event,
                    _ => return,
                };

                if raw_pointer_down.button() != events::MouseButton::Left {
                    return;
                }

                let rect = dom_canvas.get_bounding_client_rect();
                let point = (
                    (event.x() as f64 - rect.left()) as f32,
                    (event.y() as f64 - rect.top()) as f32,
                );

                // Release the borrow before the marker callback runs.
                let hit = map_view
                    .borrow()
                    .surface()
                    .and_then(|surface| surface.feature_at(point));
                let Some(hit) = hit else {
                    popup.set_neq(None);
                    return;
                };
                let (width, height) = (rect.width() as f32, rect.height() as f32);
                // Selecting a marker recenters the map on it.
                let opened_at = if hit.on_click.is_some() {
                    (width / 2.0, height / 2.0)
                } else {
                    point
                };
                popup.set_neq(Some(MapPopup {
                    anchor: popup_anchor(opened_at, width, height),
                    content: hit.popup,
                }));
                if let Some(on_click) = hit.on_click {
                    on_click();
                }
            }
        })
        .update_raw_el({
            let map_view = map_view.clone();
            move |raw_el| {
                raw_el.on_resize(move |width, height| {
                    if let Some(surface) = map_view.borrow_mut().surface_mut() {
                        surface.resized(width, height);
                    }
                })
            }
        })
        .after_remove(move |_| {
            drop(year_task);
            drop(focus_task);
            drop(zoom_task);
            map_view.borrow_mut().unmount();
            debug_log!(crate::DEBUG_MAP, "Map surface released");
        })
}
