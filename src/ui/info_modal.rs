//! About dialog shown over the gallery

use chrono::Datelike;
use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{alignment, Element, Length};

use super::style;
use crate::layout::Viewport;
use crate::state::modal::{InfoLink, ModalEvent};
use crate::Message;

/// Widest the dialog gets on large windows (design units)
const MAX_WIDTH: f32 = 360.0;

/// Layer the modal on top of `base`
///
/// Presses on the dimmed backdrop send `BackdropPressed`. The content is
/// wrapped in `opaque` so presses inside it never reach the backdrop.
pub fn overlay<'a>(base: Element<'a, Message>, viewport: &Viewport) -> Element<'a, Message> {
    let content = mouse_area(dialog(viewport)).on_press(Message::Modal(ModalEvent::ContentPressed));

    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(style::scrim(0.55)))
                .on_press(Message::Modal(ModalEvent::BackdropPressed)),
        ),
    ]
    .into()
}

fn dialog<'a>(v: &Viewport) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);
    let width = v.width_percent(88.0).min(s(MAX_WIDTH));

    let close = button(text("✕").size(s(14.0)).font(style::BOLD))
        .padding([s(4.0), s(10.0)])
        .on_press(Message::Modal(ModalEvent::Close))
        .style(style::pill_button(style::DESCRIPTION_BG, style::PRIMARY, s(12.0)));

    let title = row![
        column![
            text("MikaBites")
                .size(s(22.0))
                .font(style::HEAVY)
                .color(style::PRIMARY),
            text(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .size(s(11.0))
                .color(style::SUBTLE),
        ]
        .width(Length::Fill),
        close,
    ]
    .align_y(alignment::Vertical::Top);

    let about = text(
        "A pocket collection of home-style Pakistani recipes, from weeknight \
         daal to slow-cooked nihari. Every recipe is bundled with the app, so \
         it works anywhere.",
    )
    .size(s(13.0))
    .color(style::DESCRIPTION);

    let links = InfoLink::ALL.iter().map(|link| link_row(*link, v));

    container(
        column![
            title,
            about,
            text("Get in touch")
                .size(s(14.0))
                .font(style::BOLD)
                .color(style::TEXT),
            column(links).spacing(s(8.0)),
            text(format!("© {} MikaBites", chrono::Local::now().year()))
                .size(s(11.0))
                .color(style::SUBTLE)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        ]
        .spacing(s(14.0)),
    )
    .padding(s(20.0))
    .width(Length::Fixed(width))
    .style(style::filled(style::CARD, s(20.0), s(8.0)))
    .into()
}

fn link_row<'a>(link: InfoLink, v: &Viewport) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);

    button(
        row![
            text(link.label())
                .size(s(13.0))
                .font(style::BOLD)
                .color(style::PRIMARY)
                .width(Length::Fixed(s(84.0))),
            text(link.display()).size(s(13.0)).color(style::TEXT),
        ]
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([s(10.0), s(12.0)])
    .on_press(Message::Modal(ModalEvent::LinkPressed(link)))
    .style(style::pill_button(style::SURFACE, style::TEXT, s(12.0)))
    .into()
}
