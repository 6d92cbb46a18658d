// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the current image zoomed and panned, and turns
//! mouse drags into pan messages.

use super::Message;
use iced::widget::canvas::{self, Frame};
use iced::widget::image;
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme, Vector};

pub struct Stage<'a> {
    pub handle: &'a image::Handle,
    pub image_size: Size,
    pub zoom: f32,
    pub pan: Vector,
    pub can_pan: bool,
    pub panning: bool,
}

/// Where the image lands inside a stage of `bounds` size.
///
/// The image is fitted (contain), scaled by `zoom` around the stage center
/// and shifted by `pan`.
#[must_use]
pub fn image_rect(bounds: Size, image: Size, zoom: f32, pan: Vector) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let img_aspect = image.width / image.height;
    let bounds_aspect = bounds.width / bounds.height;

    let fitted = if img_aspect > bounds_aspect {
        Size::new(bounds.width, bounds.width / img_aspect)
    } else {
        Size::new(bounds.height * img_aspect, bounds.height)
    };
    let scaled = Size::new(fitted.width * zoom, fitted.height * zoom);

    let top_left = Point::new(
        (bounds.width - scaled.width) / 2.0 + pan.x,
        (bounds.height - scaled.height) / 2.0 + pan.y,
    );
    Rectangle::new(top_left, scaled)
}

impl canvas::Program<Message> for Stage<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let local = cursor.position_in(bounds)?;
                if self.can_pan {
                    let position = cursor.position()?;
                    return Some(Action::publish(Message::PanStarted(position)).and_capture());
                }
                // A click on the backdrop around an unzoomed image closes.
                let rect = image_rect(bounds.size(), self.image_size, self.zoom, self.pan);
                if !rect.contains(local) {
                    return Some(Action::publish(Message::Close).and_capture());
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if self.panning => {
                return Some(Action::publish(Message::PanMoved(*position)).and_capture());
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft)
                if self.panning =>
            {
                return Some(Action::publish(Message::PanEnded).and_capture());
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let rect = image_rect(bounds.size(), self.image_size, self.zoom, self.pan);
        frame.draw_image(rect, canvas::Image::new(self.handle.clone()));
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.panning {
            mouse::Interaction::Grabbing
        } else if self.can_pan && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
