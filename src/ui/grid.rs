/// Thumbnail grid view
///
/// A wrapping grid of fixed-size cells. During the entrance animation each
/// cell applies its own keyframe: opacity and scale on the image, and the
/// positional offset through asymmetric padding (a centered child shifts
/// by half the padding difference, hence the doubled values).

use iced::widget::{container, image, mouse_area};
use iced::{alignment, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use crate::anim::stagger::{self, StaggerReveal};
use crate::anim::tween::Keyframe;
use crate::state::data::Photo;
use crate::Message;

/// Cell width in logical pixels.
pub const CELL_WIDTH: f32 = 256.0;
/// Cell height in logical pixels.
pub const CELL_HEIGHT: f32 = 180.0;
const CELL_SPACING: f32 = 14.0;

/// Build the thumbnail grid. `reveal` carries the entrance animation while
/// it runs; before the first activation the cells are fully transparent.
pub fn thumbnail_grid<'a>(
    photos: &'a [Photo],
    reveal: Option<&StaggerReveal>,
    revealed: bool,
) -> Element<'a, Message> {
    let cells = photos
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let frame = match reveal {
                Some(reveal) => reveal.keyframe(index),
                None if revealed => Keyframe::REST,
                None => stagger::START,
            };
            cell(index, photo, frame)
        })
        .collect();

    container(
        Wrap::with_elements(cells)
            .spacing(CELL_SPACING)
            .line_spacing(CELL_SPACING),
    )
    .width(Length::Fill)
    .padding(24)
    .into()
}

fn cell(index: usize, photo: &Photo, frame: Keyframe) -> Element<'_, Message> {
    let thumbnail = image(image::Handle::from_path(&photo.thumbnail))
        .content_fit(ContentFit::Cover)
        .opacity(frame.opacity)
        .width(Length::Fixed(CELL_WIDTH * frame.scale))
        .height(Length::Fixed(CELL_HEIGHT * frame.scale));

    let cell = container(thumbnail)
        .width(Length::Fixed(CELL_WIDTH))
        .height(Length::Fixed(CELL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(offset_padding(frame));

    mouse_area(cell)
        .on_press(Message::OpenLightbox(index))
        .into()
}

/// Padding that shifts a centered child by the keyframe offset.
pub(crate) fn offset_padding(frame: Keyframe) -> Padding {
    Padding {
        top: (2.0 * frame.offset.y).max(0.0),
        bottom: (-2.0 * frame.offset.y).max(0.0),
        left: (2.0 * frame.offset.x).max(0.0),
        right: (-2.0 * frame.offset.x).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn offsets_become_one_sided_padding() {
        let frame = Keyframe {
            offset: Vector2::new(-30.0, 10.0),
            ..Keyframe::REST
        };
        let padding = offset_padding(frame);
        assert_eq!(padding.left, 0.0);
        assert_eq!(padding.right, 60.0);
        assert_eq!(padding.top, 20.0);
        assert_eq!(padding.bottom, 0.0);
    }

    #[test]
    fn rest_pose_has_no_padding() {
        let padding = offset_padding(Keyframe::REST);
        assert_eq!(
            (padding.top, padding.right, padding.bottom, padding.left),
            (0.0, 0.0, 0.0, 0.0)
        );
    }
}
