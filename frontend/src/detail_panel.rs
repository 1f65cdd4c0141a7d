//! Right-hand column: the selected location's details, or the About card
//! with the legend when nothing is selected.

use crate::explorer::Explorer;
use crate::theme::*;
use crate::widgets::{
    BadgeTone, ButtonVariant, badge, button, card, card_title, divider, muted_text, text_section,
};
use shared::style::{SEA_BLUE, SILK_GOLD, marker_icon};
use shared::{Location, LocationCategory, format_coordinates};
use zoon::*;

pub fn side_panel(explorer: &Explorer) -> impl Element {
    El::new().s(Width::fill()).child_signal(explorer.selected_location_signal().map({
        let explorer = explorer.clone();
        move |location| match location {
            Some(location) => detail_panel(location, &explorer).unify(),
            None => about_card().unify(),
        }
    }))
}

// Optional narrative fields in display order.
fn optional_sections(location: &Location) -> Vec<(&'static str, &str)> {
    [
        ("Economic Importance", location.economic_importance.as_deref()),
        ("Cultural Notes", location.cultural_notes.as_deref()),
    ]
    .into_iter()
    .filter_map(|(title, body)| body.map(|body| (title, body)))
    .collect()
}

fn detail_panel(location: Location, explorer: &Explorer) -> impl Element {
    let icon = marker_icon(location.category);

    let mut heading = Column::new()
        .s(Gap::new().y(2))
        .item(card_title(location.name.clone()));
    if let Some(modern_name) = &location.modern_name {
        heading = heading.item(muted_text(format!("Modern: {modern_name}")));
    }

    let mut badges = Row::new()
        .s(Gap::new().x(SPACING_8))
        .item(badge(location.category.label(), BadgeTone::Neutral));
    if let Some(year) = location.year_visited {
        badges = badges.item(badge(format!("Visited {year}"), BadgeTone::Accent));
    }

    let close_button = {
        let detail_panel_closed_relay = explorer.detail_panel_closed_relay.clone();
        button("✕", ButtonVariant::Ghost, move || detail_panel_closed_relay.send(()))
    };

    let header = Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_12))
                .item(glyph_disc(icon.glyph.symbol(), icon.color.css(), 36))
                .item(heading)
                .item(El::new().s(Width::fill()))
                .item(El::new().s(Align::new().top()).child(close_button)),
        )
        .item(badges);

    let mut body = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(text_section("Historical Significance", &location.significance))
        .item(divider())
        .item(text_section("Description", &location.description))
        .item(divider())
        .item(text_section("Historical Context", &location.historical_context));
    for (title, text) in optional_sections(&location) {
        body = body.item(divider()).item(text_section(title, text));
    }
    body = body
        .item(divider())
        .item(text_section("Coordinates", &format_coordinates(location.coordinates)));

    card(header, body)
}

fn glyph_disc(symbol: &'static str, color: String, size: u32) -> impl Element {
    El::new()
        .s(Width::exact(size))
        .s(Height::exact(size))
        .s(RoundedCorners::all_max())
        .s(Background::new().color(color))
        .s(Font::new().size(size / 2).color(HEADER_TEXT).center())
        .child(El::new().s(Align::center()).child(Text::new(symbol)))
}

fn about_card() -> impl Element {
    let how_to = [
        "• Click timeline events to filter by year",
        "• Click map markers for detailed information",
        "• Explore trade routes and political context",
        "• Discover the multicultural medieval world",
    ];

    let body = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(text_section(
            "Educational Purpose",
            "This interactive map explores Marco Polo's legendary journey (1271-1295) and the rich historical context of the 13th century Mongol Empire and Silk Road trade networks.",
        ))
        .item(divider())
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(legend_heading("How to Explore"))
                .items(how_to.into_iter().map(muted_text)),
        )
        .item(divider())
        .item(legend());

    card(card_title("About This Map"), body)
}

fn legend_heading(text: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::SemiBold)
            .color(TEXT_PRIMARY))
        .child(Text::new(text))
}

fn legend() -> impl Element {
    let marker_entry = |category: LocationCategory, label: &'static str| {
        let icon = marker_icon(category);
        legend_row(glyph_disc(icon.glyph.symbol(), icon.color.css(), 18).unify(), label)
    };
    let route_entry = |color: String, dashed: bool, label: &'static str| {
        let stroke = El::new()
            .s(Width::exact(18))
            .s(Height::exact(4))
            .update_raw_el(move |raw_el| {
                if dashed {
                    raw_el.style(
                        "background",
                        &format!("repeating-linear-gradient(to right, {color} 0, {color} 3px, transparent 3px, transparent 7px)"),
                    )
                } else {
                    raw_el.style("background", &color)
                }
            });
        legend_row(stroke.unify(), label)
    };

    Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(legend_heading("Legend"))
        .item(marker_entry(LocationCategory::City, "Major Cities"))
        .item(marker_entry(LocationCategory::Court, "Imperial Courts"))
        .item(marker_entry(LocationCategory::TradeCenter, "Trade Centers"))
        .item(marker_entry(LocationCategory::Region, "Regions"))
        .item(route_entry(SILK_GOLD.css(), false, "Silk Road (Overland)"))
        .item(route_entry(SEA_BLUE.css(), true, "Sea Routes"))
}

fn legend_row(marker: RawElOrText, label: &'static str) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .s(Font::new().size(FONT_SIZE_12).color(TEXT_PRIMARY))
        .item(marker)
        .item(Text::new(label))
}
