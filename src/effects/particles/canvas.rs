// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the particle backdrop.

use super::{Message, ParticleConfig, Simulation};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};

/// Read-only view of a [`Simulation`] for one frame.
pub struct Backdrop<'a> {
    simulation: &'a Simulation,
    config: &'a ParticleConfig,
}

impl<'a> Backdrop<'a> {
    pub fn new(simulation: &'a Simulation, config: &'a ParticleConfig) -> Self {
        Self { simulation, config }
    }

    /// Full-size, non-interactive canvas element.
    pub fn view(self) -> Element<'a, Message> {
        iced::widget::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl canvas::Program<Message> for Backdrop<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        // Any event is a chance to notice that the surface changed size,
        // including the very first redraw.
        if bounds.size() != self.simulation.size() {
            return Some(Action::publish(Message::SurfaceResized(bounds.size())));
        }

        // The cursor, unlike the raw event, is already translated by any
        // scrollable above us. Landing it keeps tracking under the header text.
        // Nothing is captured.
        if let iced::Event::Mouse(mouse::Event::CursorMoved { .. }) = event {
            let local = cursor.land().position_from(bounds.position())?;
            return Some(Action::publish(Message::PointerMoved(local)));
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
        let particles = self.simulation.particles();

        for particle in particles {
            frame.fill(
                &Path::circle(particle.position, particle.size),
                self.config.particle_color,
            );
        }

        for connection in self.simulation.connections(self.config.connection_distance) {
            let alpha = connection.alpha(
                self.config.connection_distance,
                self.config.connection_alpha,
            );
            let line = Path::line(
                particles[connection.from].position,
                particles[connection.to].position,
            );
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(self.config.line_width)
                    .with_color(Color {
                        a: alpha,
                        ..self.config.connection_color
                    }),
            );
        }

        vec![frame.into_geometry()]
    }
}
