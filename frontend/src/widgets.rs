// Small presentational building blocks: cards, badges, buttons, text sections.
// None of them own state beyond their own hover flag.

use crate::dataflow::Atom;
use crate::theme::*;
use shared::Rgba;
use std::rc::Rc;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    // (background, hovered background, text, border)
    fn colors(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            ButtonVariant::Primary => (ACCENT, ACCENT_HOVER, TEXT_ON_ACCENT, ACCENT),
            ButtonVariant::Outline => ("transparent", MUTED_BACKGROUND, TEXT_PRIMARY, BORDER_COLOR),
            ButtonVariant::Ghost => ("transparent", MUTED_BACKGROUND, TEXT_MUTED, "transparent"),
        }
    }
}

pub fn button(
    label: impl Into<String>,
    variant: ButtonVariant,
    on_press: impl FnMut() + 'static,
) -> impl Element {
    let (background, hover_background, text_color, border_color) = variant.colors();
    let hovered = Atom::new(false);

    Button::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_4 + 2))
        .s(RoundedCorners::all(CORNER_RADIUS - 2))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Medium)
            .color(text_color))
        .s(Borders::all(Border::new().width(1).color(border_color)))
        .s(Background::new().color_signal(
            hovered
                .signal()
                .map(move |is_hovered| if is_hovered { hover_background } else { background }),
        ))
        .s(Cursor::new(CursorIcon::Pointer))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label.into()))
        .on_press(on_press)
}

/// Button whose variant follows a signal, e.g. the active year preset.
pub fn button_signal(
    label: impl Into<String>,
    variant: impl Signal<Item = ButtonVariant> + Unpin + 'static,
    on_press: impl Fn() + 'static,
) -> impl Element {
    let label = label.into();
    let on_press = Rc::new(on_press);
    El::new().child_signal(variant.map(move |variant| {
        let on_press = on_press.clone();
        button(label.clone(), variant, move || on_press())
    }))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeTone {
    Neutral,
    Accent,
    Outline,
    Tint(Rgba),
}

pub fn badge(text: impl Into<String>, tone: BadgeTone) -> impl Element {
    let (background, color, border) = match tone {
        BadgeTone::Neutral => (MUTED_BACKGROUND.to_string(), TEXT_PRIMARY.to_string(), MUTED_BACKGROUND.to_string()),
        BadgeTone::Accent => (ACCENT_SOFT.to_string(), TEXT_PRIMARY.to_string(), ACCENT.to_string()),
        BadgeTone::Outline => ("transparent".to_string(), TEXT_MUTED.to_string(), BORDER_COLOR.to_string()),
        BadgeTone::Tint(rgba) => (
            rgba.with_alpha(0.15).css(),
            rgba.css(),
            rgba.with_alpha(0.4).css(),
        ),
    };

    El::new()
        .s(Padding::new().x(SPACING_8).y(2))
        .s(RoundedCorners::all(PILL_RADIUS))
        .s(Background::new().color(background))
        .s(Borders::all(Border::new().width(1).color(border)))
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Medium)
            .color(color)
            .no_wrap())
        .child(Text::new(text.into()))
}

pub fn card(header: impl Element, body: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Background::new().color(CARD_BACKGROUND))
        .s(RoundedCorners::all(CORNER_RADIUS))
        .s(Borders::all(Border::new().width(1).color(BORDER_COLOR)))
        .s(Shadows::new([Shadow::new().y(2).blur(8).color(SHADOW_COLOR)]))
        .item(
            El::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).top(SPACING_16).bottom(SPACING_8))
                .child(header),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).bottom(SPACING_16))
                .child(body),
        )
}

pub fn card_title(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_20)
            .weight(FontWeight::SemiBold)
            .family([FontFamily::new(FONT_FAMILY_SERIF), FontFamily::Serif])
            .color(TEXT_PRIMARY))
        .child(Text::new(text.into()))
}

pub fn muted_text(text: impl Into<String>) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(FONT_SIZE_14).color(TEXT_MUTED))
        .content(text.into())
}

/// Titled block of narrative text.
pub fn text_section(title: &str, body: &str) -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_4))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::SemiBold)
                    .color(TEXT_PRIMARY))
                .child(Text::new(title)),
        )
        .item(
            Paragraph::new()
                .s(Font::new().size(FONT_SIZE_14).color(TEXT_MUTED).line_height(20))
                .content(body.to_string()),
        )
}

pub fn divider() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::exact(1))
        .s(Background::new().color(BORDER_COLOR))
}
