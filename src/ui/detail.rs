//! Recipe detail screen
//!
//! The screen is built in two steps: `DetailModel::new` turns the record
//! carried by the navigation payload into display rows, then `view` lays
//! those rows out for the current viewport.

use iced::widget::{button, column, container, row, scrollable, stack, text, Column, Space};
use iced::{alignment, Element, Length, Padding};
use std::path::Path;

use super::{picture, style};
use crate::config::EmptyListPolicy;
use crate::layout::Viewport;
use crate::state::data::FoodRecord;
use crate::Message;

/// Hero image takes this percentage of the window height...
const HERO_HEIGHT_PERCENT: f32 = 38.0;
/// ...up to this many logical pixels
const HERO_MAX_HEIGHT: f32 = 350.0;

const LARGE_CONTENT_WIDTH: f32 = 720.0;

const EMPTY_PLACEHOLDER: &str = "Nothing listed for this recipe yet.";

/// One of the four fixed metadata tiles under the hero image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTile {
    pub label: &'static str,
    pub value: String,
}

/// A numbered instruction; numbers start at 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: usize,
    pub text: String,
}

/// Rendering of one list section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    Items(Vec<T>),
    Placeholder(&'static str),
    Hidden,
}

impl<T> Section<T> {
    fn from_items(items: Vec<T>, policy: EmptyListPolicy) -> Self {
        match (items.is_empty(), policy) {
            (false, _) => Section::Items(items),
            (true, EmptyListPolicy::Placeholder) => Section::Placeholder(EMPTY_PLACEHOLDER),
            (true, EmptyListPolicy::Hide) => Section::Hidden,
        }
    }

    /// Number of item rows rendered (placeholders do not count)
    pub fn row_count(&self) -> usize {
        match self {
            Section::Items(items) => items.len(),
            _ => 0,
        }
    }
}

/// Everything the detail screen displays for one record
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub name: String,
    pub localized_name: String,
    pub description: String,
    pub tiles: [MetaTile; 4],
    pub ingredients: Section<String>,
    pub instructions: Section<Step>,
    pub tips: Section<String>,
}

impl DetailModel {
    pub fn new(record: &FoodRecord, empty_lists: EmptyListPolicy) -> Self {
        let steps = record
            .instructions
            .iter()
            .enumerate()
            .map(|(index, instruction)| Step {
                number: index + 1,
                text: instruction.clone(),
            })
            .collect();

        Self {
            name: record.name.clone(),
            localized_name: record.localized_name.clone(),
            description: record.description.clone(),
            tiles: [
                MetaTile {
                    label: "Prep",
                    value: record.prep_time.clone(),
                },
                MetaTile {
                    label: "Cook",
                    value: record.cook_time.clone(),
                },
                MetaTile {
                    label: "Serves",
                    value: record.servings.to_string(),
                },
                MetaTile {
                    label: "Level",
                    value: record.difficulty.to_string(),
                },
            ],
            ingredients: Section::from_items(record.ingredients.clone(), empty_lists),
            instructions: Section::from_items(steps, empty_lists),
            tips: Section::from_items(record.tips.clone(), empty_lists),
        }
    }
}

/// Height of the hero image for this viewport
pub fn hero_height(viewport: &Viewport) -> f32 {
    viewport.height_percent(HERO_HEIGHT_PERCENT).min(HERO_MAX_HEIGHT)
}

/// Widest the detail column gets, on tablet-class windows only
pub fn content_max_width(viewport: &Viewport) -> Option<f32> {
    viewport.is_large().then_some(LARGE_CONTENT_WIDTH)
}

pub fn view<'a>(
    record: &FoodRecord,
    viewport: &Viewport,
    empty_lists: EmptyListPolicy,
    assets_dir: &Path,
) -> Element<'a, Message> {
    let v = *viewport;
    let s = |size: f32| v.moderate_scale(size);
    let model = DetailModel::new(record, empty_lists);

    let hero = hero(record, &model, &v, assets_dir);
    let tiles = meta_tiles(&model.tiles, &v);

    let description = container(
        text(model.description)
            .size(s(14.0))
            .line_height(iced::widget::text::LineHeight::Absolute(s(24.0).into()))
            .font(style::ITALIC)
            .color(style::DESCRIPTION)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .padding(s(16.0))
    .width(Length::Fill)
    .style(style::filled(style::DESCRIPTION_BG, s(14.0), 0.0));

    let mut body = Column::new()
        .push(hero)
        .push(container(tiles).padding([s(8.0), s(12.0)]))
        .push(container(description).padding(s(16.0)));

    if let Some(section) = ingredients_section(model.ingredients, &v) {
        body = body.push(section);
    }
    if let Some(section) = instructions_section(model.instructions, &v) {
        body = body.push(section);
    }
    if let Some(section) = tips_section(model.tips, &v) {
        body = body.push(section);
    }

    body = body.push(
        container(
            text("Made with love for Pakistani food lovers")
                .size(s(13.0))
                .color(style::FOOTER),
        )
        .width(Length::Fill)
        .padding(s(26.0))
        .center_x(Length::Fill),
    );

    if let Some(max_width) = content_max_width(&v) {
        body = body.max_width(max_width);
    }

    scrollable(container(body).center_x(Length::Fill))
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn hero<'a>(
    record: &FoodRecord,
    model: &DetailModel,
    v: &Viewport,
    assets_dir: &Path,
) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);
    let height = hero_height(v);

    let back = button(
        container(text("←").size(s(22.0)).font(style::BOLD).color(style::PRIMARY))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(s(42.0)))
    .height(Length::Fixed(s(42.0)))
    .padding(0)
    .on_press(Message::Back)
    .style(style::pill_button(
        iced::Color { a: 0.95, ..iced::Color::WHITE },
        style::PRIMARY,
        s(21.0),
    ));

    let titles = column![
        text(model.localized_name.clone())
            .size(v.pick(22.0, 26.0))
            .font(style::BOLD)
            .color(style::ACCENT)
            .shaping(text::Shaping::Advanced)
            .align_x(alignment::Horizontal::Right)
            .width(Length::Fill),
        text(model.name.clone())
            .size(v.pick(28.0, 32.0))
            .font(style::HEAVY)
            .color(iced::Color::WHITE),
    ]
    .spacing(s(2.0));

    stack![
        picture(record, assets_dir, Length::Fill, height, s(64.0)),
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .style(style::scrim(0.35)),
        container(back)
            .padding(Padding {
                top: s(10.0),
                left: s(16.0),
                ..Padding::ZERO
            })
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Top),
        container(titles)
            .padding(Padding {
                left: s(18.0),
                right: s(18.0),
                bottom: s(24.0),
                ..Padding::ZERO
            })
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_y(alignment::Vertical::Bottom),
    ]
    .into()
}

fn meta_tiles<'a>(tiles: &[MetaTile; 4], v: &Viewport) -> Element<'a, Message> {
    let s = |size: f32| v.moderate_scale(size);

    let cards = tiles.iter().map(|tile| {
        container(
            column![
                text(tile.label.to_uppercase())
                    .size(v.pick(9.0, 10.0))
                    .font(style::BOLD)
                    .color(style::SUBTLE),
                text(tile.value.clone())
                    .size(v.pick(10.0, 12.0))
                    .font(style::BOLD)
                    .color(style::TEXT)
                    .align_x(alignment::Horizontal::Center),
            ]
            .spacing(s(2.0))
            .align_x(alignment::Horizontal::Center),
        )
        .padding([s(12.0), s(4.0)])
        .width(Length::Fill)
        .style(style::filled(style::SURFACE, s(14.0), s(3.0)))
        .into()
    });

    row(cards).spacing(s(6.0)).into()
}

fn section_header<'a>(title: &'static str, v: &Viewport) -> Element<'a, Message> {
    text(title)
        .size(v.pick(18.0, 20.0))
        .font(style::HEAVY)
        .color(style::PRIMARY)
        .into()
}

/// Hairline between list rows
fn rule<'a>(v: &Viewport) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fixed(1.0)))
        .style(style::filled(style::DESCRIPTION_BG, v.moderate_scale(1.0), 0.0))
        .into()
}

fn placeholder_line<'a>(message: &'static str, v: &Viewport) -> Element<'a, Message> {
    text(message)
        .size(v.moderate_scale(13.0))
        .font(style::ITALIC)
        .color(style::MUTED)
        .into()
}

fn ingredients_section<'a>(section: Section<String>, v: &Viewport) -> Option<Element<'a, Message>> {
    let s = |size: f32| v.moderate_scale(size);

    let last = section.row_count().saturating_sub(1);

    let list: Element<'a, Message> = match section {
        Section::Hidden => return None,
        Section::Placeholder(message) => placeholder_line(message, v),
        Section::Items(items) => {
            let rows = items.into_iter().enumerate().map(|(index, ingredient)| {
                let line = row![
                    container(Space::new(s(7.0), s(7.0))).style(style::filled(
                        style::BADGE,
                        s(4.0),
                        0.0
                    )),
                    text(ingredient)
                        .size(s(14.0))
                        .color(style::TEXT)
                        .width(Length::Fill),
                ]
                .spacing(s(12.0))
                .padding([s(9.0), 0.0])
                .align_y(alignment::Vertical::Center);

                if index < last {
                    column![line, rule(v)].into()
                } else {
                    line.into()
                }
            });

            container(Column::with_children(rows))
                .padding(s(14.0))
                .width(Length::Fill)
                .style(style::filled(style::SURFACE, s(14.0), s(2.0)))
                .into()
        }
    };

    Some(
        column![section_header("Ingredients", v), list]
            .spacing(s(14.0))
            .padding(s(16.0))
            .into(),
    )
}

fn instructions_section<'a>(section: Section<Step>, v: &Viewport) -> Option<Element<'a, Message>> {
    let s = |size: f32| v.moderate_scale(size);

    let list: Element<'a, Message> = match section {
        Section::Hidden => return None,
        Section::Placeholder(message) => placeholder_line(message, v),
        Section::Items(steps) => {
            let rows = steps.into_iter().map(|step| {
                let badge = container(
                    text(step.number.to_string())
                        .size(s(12.0))
                        .font(style::BOLD)
                        .color(iced::Color::WHITE),
                )
                .width(Length::Fixed(s(28.0)))
                .height(Length::Fixed(s(28.0)))
                .center_x(Length::Fixed(s(28.0)))
                .center_y(Length::Fixed(s(28.0)))
                .style(style::filled(style::PRIMARY, s(14.0), 0.0));

                container(
                    row![
                        badge,
                        text(step.text)
                            .size(s(14.0))
                            .line_height(iced::widget::text::LineHeight::Absolute(s(22.0).into()))
                            .color(style::TEXT)
                            .width(Length::Fill),
                    ]
                    .spacing(s(12.0)),
                )
                .padding(s(14.0))
                .width(Length::Fill)
                .style(style::filled(style::SURFACE, s(14.0), s(2.0)))
                .into()
            });

            Column::with_children(rows).spacing(s(14.0)).into()
        }
    };

    Some(
        column![section_header("Instructions", v), list]
            .spacing(s(14.0))
            .padding(s(16.0))
            .into(),
    )
}

fn tips_section<'a>(section: Section<String>, v: &Viewport) -> Option<Element<'a, Message>> {
    let s = |size: f32| v.moderate_scale(size);

    let list: Element<'a, Message> = match section {
        Section::Hidden => return None,
        Section::Placeholder(message) => placeholder_line(message, v),
        Section::Items(tips) => {
            let rows = tips.into_iter().map(|tip| {
                row![
                    text("✦").size(s(14.0)).color(style::ACCENT),
                    text(tip)
                        .size(s(13.0))
                        .color(style::TIPS_TEXT)
                        .width(Length::Fill),
                ]
                .spacing(s(8.0))
                .into()
            });

            Column::with_children(rows).spacing(s(10.0)).into()
        }
    };

    let body = container(column![section_header("Pro Tips", v), list].spacing(s(14.0)))
        .padding(s(16.0))
        .width(Length::Fill)
        .style(style::filled(style::TIPS_BG, s(18.0), 0.0));

    Some(container(body).padding([s(8.0), s(14.0)]).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::record;
    use crate::state::data::Difficulty;

    #[test]
    fn test_biryani_scenario() {
        let mut item = record("biryani-1", "Chicken Biryani");
        item.servings = 4;
        item.difficulty = Difficulty::Medium;
        item.ingredients = vec!["rice".to_string(), "chicken".to_string()];

        let model = DetailModel::new(&item, EmptyListPolicy::Hide);

        assert_eq!(model.tiles[2].label, "Serves");
        assert_eq!(model.tiles[2].value, "4");
        assert_eq!(model.tiles[3].label, "Level");
        assert_eq!(model.tiles[3].value, "Medium");
        assert_eq!(
            model.ingredients,
            Section::Items(vec!["rice".to_string(), "chicken".to_string()])
        );
        assert_eq!(model.ingredients.row_count(), 2);
    }

    #[test]
    fn test_tiles_in_fixed_order() {
        let model = DetailModel::new(&record("daal-1", "Daal"), EmptyListPolicy::Hide);
        let labels: Vec<&str> = model.tiles.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Prep", "Cook", "Serves", "Level"]);
        assert_eq!(model.tiles[0].value, "20 mins");
        assert_eq!(model.tiles[1].value, "45 mins");
    }

    #[test]
    fn test_single_element_lists() {
        let mut item = record("chai-1", "Doodh Patti");
        item.ingredients = vec!["tea".to_string()];
        item.instructions = vec!["Boil everything".to_string()];
        item.tips = vec!["Boil twice".to_string()];

        let model = DetailModel::new(&item, EmptyListPolicy::Hide);

        assert_eq!(model.ingredients.row_count(), 1);
        assert_eq!(model.tips.row_count(), 1);
        assert_eq!(
            model.instructions,
            Section::Items(vec![Step {
                number: 1,
                text: "Boil everything".to_string()
            }])
        );
    }

    #[test]
    fn test_steps_numbered_by_position() {
        let mut item = record("halwa-1", "Gajar Halwa");
        item.instructions = vec!["a".into(), "b".into(), "c".into()];

        let model = DetailModel::new(&item, EmptyListPolicy::Hide);
        match model.instructions {
            Section::Items(steps) => {
                let numbers: Vec<usize> = steps.iter().map(|s| s.number).collect();
                assert_eq!(numbers, [1, 2, 3]);
                assert_eq!(steps[2].text, "c");
            }
            other => panic!("expected steps, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_lists_follow_policy() {
        let mut item = record("empty-1", "Plain Rice");
        item.ingredients.clear();
        item.instructions.clear();
        item.tips.clear();

        let hidden = DetailModel::new(&item, EmptyListPolicy::Hide);
        assert_eq!(hidden.ingredients, Section::Hidden);
        assert_eq!(hidden.instructions, Section::Hidden);
        assert_eq!(hidden.tips, Section::Hidden);

        let placeholder = DetailModel::new(&item, EmptyListPolicy::Placeholder);
        assert_eq!(placeholder.ingredients, Section::Placeholder(EMPTY_PLACEHOLDER));
        assert_eq!(placeholder.instructions.row_count(), 0);
    }

    #[test]
    fn test_hero_height_is_capped() {
        assert!((hero_height(&Viewport::new(393.0, 800.0)) - 304.0).abs() < 1e-3);
        assert_eq!(hero_height(&Viewport::new(393.0, 2000.0)), HERO_MAX_HEIGHT);
    }

    #[test]
    fn test_content_width_only_capped_on_large_windows() {
        assert_eq!(content_max_width(&Viewport::new(393.0, 852.0)), None);
        assert_eq!(content_max_width(&Viewport::new(767.0, 1024.0)), None);
        assert_eq!(
            content_max_width(&Viewport::new(1024.0, 768.0)),
            Some(LARGE_CONTENT_WIDTH)
        );
    }
}
