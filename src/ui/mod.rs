/// User interface module
///
/// - Home screen grid (gallery.rs)
/// - Recipe screen (detail.rs)
/// - About dialog (info_modal.rs)
/// - Palette and widget styles (style.rs)

pub mod detail;
pub mod gallery;
pub mod info_modal;
pub mod style;

use iced::widget::{container, image, stack, text};
use iced::{ContentFit, Element, Length};
use std::path::Path;

use crate::state::data::{FoodRecord, ImageSource};
use crate::Message;

/// Recipe image over a placeholder backdrop
///
/// The backdrop shows the dish's initial and stays visible while the image
/// widget is loading, when the file is missing, and for remote URLs.
pub fn picture<'a>(
    record: &FoodRecord,
    assets_dir: &Path,
    width: Length,
    height: f32,
    monogram_size: f32,
) -> Element<'a, Message> {
    let backdrop = container(
        text(record.monogram())
            .size(monogram_size)
            .font(style::HEAVY)
            .color(style::BURNT),
    )
    .width(width)
    .height(Length::Fixed(height))
    .center_x(width)
    .center_y(Length::Fixed(height))
    .style(style::filled(style::PLACEHOLDER, 0.0, 0.0));

    match record.image_source(assets_dir) {
        ImageSource::Bundled(path) => stack![
            backdrop,
            image(image::Handle::from_path(path))
                .width(width)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover),
        ]
        .into(),
        ImageSource::Remote(_) => backdrop.into(),
    }
}
