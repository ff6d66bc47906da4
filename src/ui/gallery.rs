//! Home screen: header plus the two-column recipe grid

use iced::widget::{button, column, container, row, scrollable, stack, text, Column, Space};
use iced::{alignment, Element, Length, Padding};
use std::path::Path;

use super::{picture, style};
use crate::layout::grid::{row_count, CardGeometry, RenderWindow, COLUMNS};
use crate::layout::Viewport;
use crate::state::catalog::Catalog;
use crate::state::data::FoodRecord;
use crate::state::modal::ModalEvent;
use crate::Message;

/// Scrollable id, used to restore the offset when returning from a recipe
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

/// Records materialized for the current render window, in catalog order
pub fn visible_records<'a>(catalog: &'a Catalog, window: &RenderWindow) -> &'a [FoodRecord] {
    &catalog.records()[window.card_range(catalog.len())]
}

pub fn view<'a>(
    catalog: &'a Catalog,
    window: &RenderWindow,
    viewport: &Viewport,
    assets_dir: &Path,
) -> Element<'a, Message> {
    let geometry = CardGeometry::for_viewport(viewport);
    let total_rows = row_count(catalog.len());
    let pitch = geometry.row_pitch();
    let (above, below) = window.spacers(total_rows, pitch);

    let rows = visible_records(catalog, window)
        .chunks(COLUMNS)
        .map(|pair| grid_row(pair, &geometry, viewport, assets_dir));

    let grid = column![
        Space::with_height(Length::Fixed(above)),
        Column::with_children(rows),
        Space::with_height(Length::Fixed(below)),
    ];

    let list = scrollable(container(grid).padding(Padding {
        top: geometry.top_padding,
        right: geometry.outer_padding,
        bottom: viewport.moderate_scale(20.0),
        left: geometry.outer_padding,
    }))
    .direction(scrollable::Direction::Vertical(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    ))
    .id(scroll_id())
    .on_scroll(Message::GalleryScrolled)
    .width(Length::Fill)
    .height(Length::Fill);

    column![header(viewport), divider(viewport), list].into()
}

fn header<'a>(v: &Viewport) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);

    let titles = column![
        text("MikaBites")
            .size(v.pick(26.0, 30.0))
            .font(style::HEAVY)
            .color(iced::Color::WHITE),
        text("Authentic Pakistani Recipes")
            .size(v.font_scale(13.0))
            .color(style::HEADER_SUBTITLE),
    ]
    .spacing(s(2.0))
    .width(Length::Fill);

    let details = button(text("Details").size(v.font_scale(13.0)).font(style::BOLD))
        .padding([s(6.0), s(14.0)])
        .on_press(Message::Modal(ModalEvent::Open))
        .style(style::pill_button(style::ACCENT, style::TEXT, s(14.0)));

    let content = column![
        row![titles, details].align_y(alignment::Vertical::Center),
        text("پاکستانی کھانے")
            .size(v.pick(20.0, 22.0))
            .font(style::BOLD)
            .color(style::ACCENT)
            .shaping(text::Shaping::Advanced)
            .align_x(alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .spacing(s(10.0));

    let (top, bottom) = header_insets(v);

    container(content)
        .padding(Padding {
            top,
            right: s(18.0),
            bottom,
            left: s(18.0),
        })
        .width(Length::Fill)
        .style(style::header(s(28.0)))
        .into()
}

/// Vertical padding of the header band; follows the window height
pub fn header_insets(viewport: &Viewport) -> (f32, f32) {
    (viewport.scale_by_height(18.0), viewport.scale_by_height(22.0))
}

fn divider<'a>(v: &Viewport) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);

    container(
        container(Space::new(Length::Fill, Length::Fixed(s(4.0))))
            .style(style::filled(style::ACCENT, s(2.0), 0.0)),
    )
    .padding([0.0, s(40.0)])
    .width(Length::Fill)
    .into()
}

fn grid_row<'a>(
    pair: &[FoodRecord],
    geometry: &CardGeometry,
    v: &Viewport,
    assets_dir: &Path,
) -> Element<'a, Message> {
    let mut cards = row![].spacing(geometry.column_gap);
    for record in pair {
        cards = cards.push(card(record, geometry, v, assets_dir));
    }
    if pair.len() < COLUMNS {
        cards = cards.push(Space::with_width(Length::Fixed(geometry.card_width)));
    }

    container(cards)
        .height(Length::Fixed(geometry.row_pitch()))
        .align_y(alignment::Vertical::Top)
        .into()
}

fn card<'a>(
    record: &FoodRecord,
    geometry: &CardGeometry,
    v: &Viewport,
    assets_dir: &Path,
) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);
    let image_height = geometry.image_height;

    let badge = container(
        text(record.difficulty.as_str().to_uppercase())
            .size(s(9.0))
            .font(style::BOLD)
            .color(iced::Color::WHITE),
    )
    .padding([s(3.0), s(8.0)])
    .style(style::filled(style::BADGE, s(10.0), 0.0));

    let image = stack![
        picture(record, assets_dir, Length::Fill, image_height, s(40.0)),
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(image_height))
            .style(style::scrim(0.1)),
        container(badge)
            .padding(s(8.0))
            .width(Length::Fill)
            .height(Length::Fixed(image_height))
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top),
    ];

    let meta = row![
        text(record.cook_time.clone())
            .size(s(10.0))
            .color(style::MUTED)
            .width(Length::Fill),
        text(format!("Serves {}", record.servings))
            .size(s(10.0))
            .color(style::MUTED),
    ];

    let content = column![
        text(record.name.clone())
            .size(s(14.0))
            .font(style::BOLD)
            .color(style::TEXT)
            .wrapping(text::Wrapping::None),
        text(record.localized_name.clone())
            .size(s(13.0))
            .color(style::BURNT)
            .shaping(text::Shaping::Advanced)
            .wrapping(text::Wrapping::None),
        meta,
    ]
    .spacing(s(3.0));

    let body = container(
        column![
            image,
            container(content)
                .padding(s(10.0))
                .height(Length::Fixed(geometry.content_height))
                .clip(true),
        ],
    )
    .width(Length::Fixed(geometry.card_width))
    .height(Length::Fixed(geometry.card_height()))
    .clip(true)
    .style(style::filled(style::CARD, s(18.0), 6.0));

    button(body)
        .padding(0)
        .on_press(Message::OpenRecipe(record.clone()))
        .style(style::bare_button)
        .into()
}
