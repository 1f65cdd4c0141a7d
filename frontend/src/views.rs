//! Page chrome: the title banner and the three-column body.

use crate::detail_panel::side_panel;
use crate::explorer::Explorer;
use crate::map_view::map_card;
use crate::theme::*;
use crate::timeline_view::timeline_card;
use shared::ExplorerConfig;
use zoon::*;

const TITLE: &str = "Marco Polo's Travels";
const SUBTITLE: &str = "Interactive Map of 13th Century Trade Routes & Historical Context";

// Column weights of timeline, map and side panel.
const COLUMN_RATIO: [u32; 3] = [3, 6, 3];

pub fn page_header() -> impl Element {
    let header_badge = |text: &'static str| {
        El::new()
            .s(Padding::new().x(SPACING_12).y(SPACING_4))
            .s(RoundedCorners::all(PILL_RADIUS))
            .s(Borders::all(Border::new().width(1).color(ACCENT)))
            .s(Font::new().size(FONT_SIZE_14).color(ACCENT).no_wrap())
            .child(Text::new(text))
    };

    El::new()
        .s(Width::fill())
        .s(Background::new().color(HEADER_BACKGROUND))
        .s(Padding::new().x(SPACING_24).y(SPACING_24))
        .child(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_16))
                .item(
                    Column::new()
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_30)
                                    .weight(FontWeight::Bold)
                                    .family([FontFamily::new(FONT_FAMILY_SERIF), FontFamily::Serif])
                                    .color(HEADER_TEXT))
                                .child(Text::new(TITLE)),
                        )
                        .item(
                            Paragraph::new()
                                .s(Font::new().size(FONT_SIZE_16).color(HEADER_TEXT))
                                .content(SUBTITLE),
                        ),
                )
                .item(El::new().s(Width::fill()))
                .item(
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .item(header_badge("1254-1324"))
                        .item(header_badge("Silk Road Era")),
                ),
        )
}

pub fn main_layout(explorer: &Explorer, config: &ExplorerConfig) -> impl Element {
    let [timeline_weight, map_weight, side_weight] = COLUMN_RATIO;
    let column = |weight: u32, child: RawElOrText| {
        El::new()
            .s(Width::growable())
            .s(Align::new().top())
            .update_raw_el(move |raw_el| raw_el.style("flex", &format!("{weight} 1 0")))
            .child(child)
    };

    Row::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().x(SPACING_24))
        .s(Align::new().top())
        .item(column(timeline_weight, timeline_card(explorer, config).unify()))
        .item(column(map_weight, map_card(explorer, config).unify()))
        .item(column(side_weight, side_panel(explorer).unify()))
}
