use iced::widget::{button, column, container, row, scrollable, stack, text};
use iced::{keyboard, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod anim;
mod photos;
mod state;
mod ui;

use anim::stagger::StaggerReveal;
use anim::timing;
use anim::transition::{LightboxTransition, TransitionEvent};
use photos::loader;
use state::config::GalleryConfig;
use state::data::Photo;
use state::gallery::{Direction, GalleryState};

/// Main application state
struct PhotoGallery {
    /// Persisted configuration (photos folder, thumbnail size)
    config: GalleryConfig,
    /// The fixed, ordered photo sequence of the current gallery
    photos: Vec<Photo>,
    /// Overlay state machine, current index, reveal guard, scroll lock
    gallery: GalleryState,
    /// Entrance animation over the thumbnails, while it runs
    reveal: Option<StaggerReveal>,
    /// Lightbox appear/exit/enter sequencer
    transition: LightboxTransition,
    /// Whether the window currently has focus
    is_active: bool,
    /// Instant of the previous animation tick
    last_tick: Option<Instant>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Window gained or lost focus
    Activated(bool),
    /// Background gallery load completed
    GalleryLoaded(Result<Vec<Photo>, String>),
    /// User clicked the "Open Folder…" button
    OpenFolder,
    /// User clicked thumbnail `index`
    OpenLightbox(usize),
    /// Close the lightbox (button, backdrop, or Escape)
    CloseLightbox,
    /// Step to the next or previous photo
    Navigate(Direction),
    /// Click landed on the lightbox photo; swallowed
    LightboxImagePressed,
    /// Animation frame
    Tick(Instant),
}

impl PhotoGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::load();
        let folder = config.photos_dir.clone().or_else(dirs::picture_dir);

        let (status, task) = match folder {
            Some(folder) => (
                format!("Loading {}…", folder.display()),
                load_task(folder, config.thumbnail_px),
            ),
            None => (
                String::from("No photos folder found. Open one to get started."),
                Task::none(),
            ),
        };

        (
            PhotoGallery {
                config,
                photos: Vec::new(),
                gallery: GalleryState::new(0),
                reveal: None,
                transition: LightboxTransition::new(),
                is_active: true,
                last_tick: None,
                status,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Activated(active) => {
                self.is_active = active;
                if active {
                    self.maybe_start_reveal();
                }
                Task::none()
            }
            Message::GalleryLoaded(Ok(photos)) => {
                self.status = format!("✅ {} photos. Click one to view.", photos.len());

                // A fresh sequence is a remount: all viewing state resets.
                self.gallery = GalleryState::new(photos.len());
                self.photos = photos;
                self.reveal = None;
                self.transition.reset();
                self.maybe_start_reveal();
                Task::none()
            }
            Message::GalleryLoaded(Err(error)) => {
                log::warn!("gallery load failed: {error}");
                self.status = format!("⚠️  {error}");
                self.photos = Vec::new();
                self.gallery = GalleryState::new(0);
                self.reveal = None;
                self.transition.reset();
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Photos Folder")
                    .pick_folder();

                if let Some(folder) = folder {
                    self.status = format!("Loading {}…", folder.display());
                    self.config.photos_dir = Some(folder.clone());
                    if let Err(e) = self.config.save() {
                        log::warn!("could not save config: {e}");
                    }
                    return load_task(folder, self.config.thumbnail_px);
                }

                Task::none()
            }
            Message::OpenLightbox(index) => {
                if self.gallery.open_at(index) {
                    self.transition.appear();
                }
                Task::none()
            }
            Message::CloseLightbox => {
                self.gallery.close();
                self.transition.reset();
                Task::none()
            }
            Message::Navigate(direction) => {
                if self.gallery.is_open() {
                    self.transition.navigate(direction);
                } else {
                    // No lightbox on screen, nothing to animate: step now.
                    self.gallery.advance(direction);
                }
                Task::none()
            }
            Message::LightboxImagePressed => Task::none(),
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
                self.last_tick = Some(now);

                if let Some(reveal) = &mut self.reveal {
                    reveal.tick(dt);
                }
                if let Some(TransitionEvent::CommitNavigation(direction)) =
                    self.transition.tick(dt)
                {
                    self.gallery.advance(direction);
                }

                if !self.is_animating() {
                    self.last_tick = None;
                }
                Task::none()
            }
        }
    }

    /// Start the one-shot entrance if the gallery just became both active
    /// and populated. The guard in the state makes this idempotent.
    fn maybe_start_reveal(&mut self) {
        if self.is_active && !self.photos.is_empty() && self.gallery.mark_revealed() {
            self.reveal = Some(StaggerReveal::new(self.photos.len()));
        }
    }

    fn is_animating(&self) -> bool {
        self.transition.is_animating()
            || self.reveal.as_ref().is_some_and(StaggerReveal::is_running)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("📸 Photo Gallery").size(28),
            iced::widget::horizontal_space(),
            text(&self.status).size(14),
            button("Open Folder…").on_press(Message::OpenFolder).padding(8),
        ]
        .spacing(16)
        .padding(16)
        .align_y(Alignment::Center);

        let grid = ui::grid::thumbnail_grid(
            &self.photos,
            self.reveal.as_ref(),
            self.gallery.is_revealed(),
        );

        // Scrolling is suppressed while the lightbox holds the lock.
        let body: Element<Message> = if self.gallery.scroll_locked() {
            container(grid).height(Length::Fill).into()
        } else {
            scrollable(grid).height(Length::Fill).into()
        };

        let page = column![header, body];

        let open_photo = self
            .photos
            .get(self.gallery.current_index())
            .filter(|_| self.gallery.is_open());

        match open_photo {
            Some(photo) => stack![
                page,
                ui::lightbox::lightbox(photo, self.transition.keyframe())
            ]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => page.into(),
        }
    }

    /// Animation ticks while something moves; keyboard only while the
    /// lightbox is open (attached on open, detached on close); window
    /// focus always.
    fn subscription(&self) -> Subscription<Message> {
        let ticks = if self.is_animating() {
            iced::time::every(Duration::from_millis(timing::TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let keys = if self.gallery.is_open() {
            keyboard::on_key_press(handle_key)
        } else {
            Subscription::none()
        };

        let focus = iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(iced::window::Event::Focused) => Some(Message::Activated(true)),
            Event::Window(iced::window::Event::Unfocused) => Some(Message::Activated(false)),
            _ => None,
        });

        Subscription::batch([ticks, keys, focus])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map a key press to a message. Only subscribed while the lightbox is
/// open, so these bindings are inert the rest of the time.
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseLightbox),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            Some(Message::Navigate(Direction::Previous))
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(Message::Navigate(Direction::Next))
        }
        _ => None,
    }
}

/// Launch the background gallery load for `folder`.
fn load_task(folder: PathBuf, thumbnail_px: u32) -> Task<Message> {
    Task::perform(
        async move {
            loader::load_gallery(folder, thumbnail_px)
                .await
                .map_err(|e| e.to_string())
        },
        Message::GalleryLoaded,
    )
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Photo Gallery", PhotoGallery::update, PhotoGallery::view)
        .subscription(PhotoGallery::subscription)
        .theme(PhotoGallery::theme)
        .centered()
        .run_with(PhotoGallery::new)
}
