//! Timeline card: year presets, every event in chronological order and a
//! footer hint.
//!
//! Events after the selected year stay in the list at reduced opacity. The
//! ring around a card is local state toggled by clicking it; the shared
//! event selection is updated on every click regardless.

use crate::dataflow::Atom;
use crate::explorer::Explorer;
use crate::theme::*;
use crate::widgets::{BadgeTone, ButtonVariant, badge, button_signal, card, card_title, muted_text};
use shared::config::YearPreset;
use shared::style::{event_color, event_glyph};
use shared::{ExplorerConfig, TimelineEntry};
use zoon::*;

const FOOTER_HINT: &str = "Click events to explore • Use year filters to see historical progression";

pub fn timeline_card(explorer: &Explorer, config: &ExplorerConfig) -> impl Element {
    let header = Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(card_title("Historical Timeline"))
        .item(muted_text(config.timeline.era_label.clone()))
        .item(preset_row(explorer, &config.timeline.presets));

    let body = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_12))
        .item(event_list(explorer))
        .item(
            El::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .s(Font::new().size(FONT_SIZE_12).color(TEXT_MUTED).center())
                .child(Text::new(FOOTER_HINT)),
        );

    card(header, body)
}

fn preset_row(explorer: &Explorer, presets: &[YearPreset]) -> impl Element {
    let preset_button = |preset: &YearPreset| {
        let year = preset.year;
        let year_preset_clicked_relay = explorer.year_preset_clicked_relay.clone();
        let variant = explorer.selected_year_signal().map(move |selected| {
            if selected == year {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Outline
            }
        });
        button_signal(preset.label.clone(), variant, move || {
            year_preset_clicked_relay.send(year)
        })
    };

    Row::new()
        .multiline()
        .s(Gap::new().x(SPACING_8).y(SPACING_8))
        .items(presets.iter().map(preset_button))
}

fn event_list(explorer: &Explorer) -> impl Element {
    let highlighted_event: Atom<Option<String>> = Atom::default();

    El::new()
        .s(Width::fill())
        .s(Height::exact(560))
        .s(Scrollbars::y_and_clip_x())
        .child_signal(explorer.timeline_signal().map({
            let explorer = explorer.clone();
            move |entries| {
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(SPACING_12))
                    .s(Padding::new().right(SPACING_4))
                    .items(entries.into_iter().map(|entry| {
                        event_card(entry, &explorer, highlighted_event.clone())
                    }))
            }
        }))
}

fn event_card(entry: TimelineEntry, explorer: &Explorer, highlighted_event: Atom<Option<String>>) -> impl Element {
    let TimelineEntry { event, de_emphasized } = entry;
    let accent = event_color(event.category);
    let event_id = event.id.clone();

    let icon = El::new()
        .s(Width::exact(32))
        .s(Height::exact(32))
        .s(RoundedCorners::all_max())
        .s(Background::new().color(accent.with_alpha(0.2).css()))
        .s(Font::new().size(FONT_SIZE_16).color(accent.css()).center())
        .child(El::new().s(Align::center()).child(Text::new(event_glyph(event.category))));

    let mut details = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_4))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .item(badge(event.year.to_string(), BadgeTone::Outline))
                .item(badge(event.category.tag(), BadgeTone::Tint(accent))),
        )
        .item(
            Paragraph::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::SemiBold)
                    .color(TEXT_PRIMARY))
                .content(event.title.clone()),
        )
        .item(
            Paragraph::new()
                .s(Font::new().size(FONT_SIZE_12).color(TEXT_MUTED).line_height(18))
                .content(event.description.clone()),
        );
    if let Some(place) = &event.location {
        details = details.item(
            El::new()
                .s(Font::new().size(FONT_SIZE_12).color(ACCENT_HOVER))
                .child(Text::new(format!("⌖ {place}"))),
        );
    }

    let is_highlighted = highlighted_event.signal_ref(move |highlighted| {
        highlighted.as_deref() == Some(event_id.as_str())
    });

    Row::new()
        .s(Width::fill())
        .s(Align::new().top())
        .s(Gap::new().x(SPACING_12))
        .s(Padding::all(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS))
        .s(Background::new().color(CARD_BACKGROUND))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Borders::all_signal(is_highlighted.map(|highlighted| {
            if highlighted {
                Border::new().width(2).color(ACCENT)
            } else {
                Border::new().width(2).color(BORDER_COLOR)
            }
        })))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("opacity", if de_emphasized { FADED_OPACITY } else { "1" })
                .style("transition", "opacity 300ms")
        })
        .item(icon)
        .item(details)
        .on_click({
            let event_clicked_relay = explorer.event_clicked_relay.clone();
            move || {
                highlighted_event.toggle(Some(event.id.clone()));
                event_clicked_relay.send(event.clone());
            }
        })
}
