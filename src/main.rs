use iced::widget::scrollable;
use iced::{keyboard, window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod layout;
mod links;
mod logging;
mod state;
mod ui;

use config::Config;
use layout::grid::{row_count, CardGeometry, RenderWindow, ScrollPosition, WindowTuning};
use layout::Viewport;
use links::LinkOutcome;
use state::catalog::Catalog;
use state::data::FoodRecord;
use state::modal::{ModalEvent, ModalState};
use state::navigation::{Navigator, Screen};

/// Main application state
struct MikaBites {
    /// Read-only recipe list
    catalog: Catalog,
    /// User configuration
    config: Config,
    /// Where bundled recipe images live
    assets_dir: PathBuf,
    /// Current window size and density
    viewport: Viewport,
    /// Screen stack
    navigator: Navigator,
    /// Info dialog over the gallery
    modal: ModalState,
    /// Gallery virtualization tunables
    tuning: WindowTuning,
    /// Gallery rows currently materialized
    gallery_window: RenderWindow,
    /// Last scroll state reported by the gallery
    gallery_scroll: Option<scrollable::Viewport>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The window was resized
    WindowResized(window::Id, Size),
    /// Scale factor reported for the window
    ScaleFactorChanged(f32),
    /// The gallery was scrolled
    GalleryScrolled(scrollable::Viewport),
    /// A gallery card was pressed; carries the whole record
    OpenRecipe(FoodRecord),
    /// Back button on the detail screen
    Back,
    /// Input for the info modal
    Modal(ModalEvent),
    /// A link handoff finished
    LinkOpened(LinkOutcome),
    /// Escape key
    EscapePressed,
}

impl MikaBites {
    /// Create a new instance of the application
    fn new(catalog: Catalog, config: Config) -> (Self, Task<Message>) {
        let (width, height) = config.window.size();
        let tuning = config.gallery.tuning();
        let assets_dir = config.assets.resolve_dir();
        let gallery_window = RenderWindow::initial(row_count(catalog.len()), &tuning);

        tracing::info!(
            "MikaBites initialized with {} recipes, assets in {}",
            catalog.len(),
            assets_dir.display()
        );

        let app = MikaBites {
            catalog,
            config,
            assets_dir,
            viewport: Viewport::new(width, height),
            navigator: Navigator::default(),
            modal: ModalState::default(),
            tuning,
            gallery_window,
            gallery_scroll: None,
        };

        // The first resize event is not guaranteed, so ask for the real size
        let measure = window::get_oldest().and_then(|id| {
            window::get_size(id).map(move |size| Message::WindowResized(id, size))
        });

        (app, measure)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(id, size) => {
                self.viewport = self.viewport.resized(size.width, size.height);
                self.refresh_gallery_window();
                tracing::debug!("Viewport resized to {}x{}", size.width, size.height);

                window::get_scale_factor(id).map(Message::ScaleFactorChanged)
            }
            Message::ScaleFactorChanged(scale_factor) => {
                self.viewport = self.viewport.with_scale_factor(scale_factor);
                Task::none()
            }
            Message::GalleryScrolled(viewport) => {
                self.gallery_scroll = Some(viewport);
                self.refresh_gallery_window();
                Task::none()
            }
            Message::OpenRecipe(record) => {
                if self.modal.is_open() || !matches!(self.navigator.current(), Screen::Home) {
                    return Task::none();
                }
                tracing::info!("Opening recipe {}", record.id);
                self.navigator.push(Screen::RecipeDetail(record));
                Task::none()
            }
            Message::Back => self.go_back(),
            Message::Modal(event) => match self.modal.handle(event) {
                Some(link) => {
                    tracing::info!("Opening {} link", link.label());
                    Task::perform(
                        links::open_external(link.uri().to_string()),
                        Message::LinkOpened,
                    )
                }
                None => Task::none(),
            },
            Message::LinkOpened(outcome) => {
                links::log_outcome(&outcome);
                Task::none()
            }
            Message::EscapePressed => {
                if self.modal.is_open() {
                    self.modal.handle(ModalEvent::Close);
                    Task::none()
                } else {
                    self.go_back()
                }
            }
        }
    }

    /// Pop the current screen; restore the gallery's scroll offset on return
    fn go_back(&mut self) -> Task<Message> {
        if self.navigator.pop().is_none() {
            return Task::none();
        }

        match (self.navigator.current(), self.gallery_scroll) {
            (Screen::Home, Some(scroll)) => {
                scrollable::scroll_to(ui::gallery::scroll_id(), scroll.absolute_offset())
            }
            _ => Task::none(),
        }
    }

    /// Recompute which gallery rows are materialized
    fn refresh_gallery_window(&mut self) {
        let total_rows = row_count(self.catalog.len());
        let geometry = CardGeometry::for_viewport(&self.viewport);

        self.gallery_window = match self.gallery_scroll {
            Some(scroll) => {
                let position = ScrollPosition::from_scrollable(
                    scroll.absolute_offset().y,
                    scroll.bounds().height,
                    geometry.top_padding,
                );
                self.gallery_window
                    .advance(total_rows, geometry.row_pitch(), position, &self.tuning)
            }
            None => RenderWindow::initial(total_rows, &self.tuning),
        };
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.navigator.current() {
            Screen::Home => {
                let gallery = ui::gallery::view(
                    &self.catalog,
                    &self.gallery_window,
                    &self.viewport,
                    &self.assets_dir,
                );

                if self.modal.is_open() {
                    ui::info_modal::overlay(gallery, &self.viewport)
                } else {
                    gallery
                }
            }
            Screen::RecipeDetail(record) => ui::detail::view(
                record,
                &self.viewport,
                self.config.detail.empty_lists,
                &self.assets_dir,
            ),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(id, size)| Message::WindowResized(id, size)),
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::EscapePressed)
                }
                _ => None,
            }),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::style::theme()
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        }
    };

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Bundled catalog is invalid: {}", e);
            eprintln!("MikaBites cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let (width, height) = config.window.size();

    iced::application("MikaBites", MikaBites::update, MikaBites::view)
        .theme(MikaBites::theme)
        .subscription(MikaBites::subscription)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || MikaBites::new(catalog, config))
}
