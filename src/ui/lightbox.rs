/// Lightbox overlay view
///
/// Stacked on top of the grid: a dimmed backdrop that closes on click, the
/// centered photo (opaque, so clicks on it never reach the backdrop), and
/// the close/previous/next controls. Presses that no control captures
/// fall through to the backdrop below.

use iced::widget::{button, center, container, image, mouse_area, opaque, row, stack, text};
use iced::{alignment, Background, Color, ContentFit, Element, Length};

use super::grid::offset_padding;
use crate::anim::tween::Keyframe;
use crate::state::data::Photo;
use crate::state::gallery::Direction;
use crate::Message;

/// Resting size of the enlarged photo, in logical pixels.
const PHOTO_WIDTH: f32 = 960.0;
const PHOTO_HEIGHT: f32 = 640.0;

pub fn lightbox(photo: &Photo, frame: Keyframe) -> Element<'_, Message> {
    let picture = image(image::Handle::from_path(&photo.path))
        .content_fit(ContentFit::Contain)
        .opacity(frame.opacity)
        .width(Length::Fixed(PHOTO_WIDTH * frame.scale))
        .height(Length::Fixed(PHOTO_HEIGHT * frame.scale));

    // Clicks on the photo stop here; clicks anywhere else close.
    let picture = opaque(mouse_area(picture).on_press(Message::LightboxImagePressed));

    let backdrop = mouse_area(
        center(picture)
            .padding(offset_padding(frame))
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color {
                    a: 0.85,
                    ..Color::BLACK
                })),
                ..container::Style::default()
            }),
    )
    .on_press(Message::CloseLightbox);

    let close = container(control("✕", Message::CloseLightbox))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(16);

    let arrows = container(
        row![
            control("‹", Message::Navigate(Direction::Previous)),
            iced::widget::horizontal_space(),
            control("›", Message::Navigate(Direction::Next)),
        ]
        .width(Length::Fill)
        .padding(12),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let caption = container(text(&photo.label).size(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(24);

    stack![opaque(backdrop), arrows, close, caption]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control(glyph: &str, message: Message) -> Element<'_, Message> {
    button(text(glyph).size(30))
        .style(button::text)
        .padding(10)
        .on_press(message)
        .into()
}
