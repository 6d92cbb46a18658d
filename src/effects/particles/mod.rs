// SPDX-License-Identifier: MPL-2.0
//! Animated particle backdrop.
//!
//! The backdrop is a [`Simulation`] stepped once per rendered frame while its
//! [`FrameLoop`] is running. Pointer and surface-size notifications come from
//! the canvas program in [`canvas`], which only exists while the backdrop is
//! mounted; [`State::teardown`] cancels the loop and forgets all particle state
//! until [`State::remount`].

pub mod canvas;
mod config;
mod simulation;

pub use config::{Attraction, ParticleConfig, Preset};
pub use simulation::{Connection, Particle, Simulation};

use iced::{window, Element, Point, Size, Subscription};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Owned handle for the per-frame callback.
///
/// While running, [`FrameLoop::subscription`] yields the window's frame
/// clock. Once cancelled it yields nothing, so the runtime drops the
/// underlying subscription and no further frames are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn subscription(&self) -> Subscription<Instant> {
        if self.running {
            window::frames()
        } else {
            Subscription::none()
        }
    }
}

/// Messages for the particle backdrop.
#[derive(Debug, Clone)]
pub enum Message {
    /// The frame clock ticked.
    Frame(Instant),
    /// Pointer moved; position is local to the drawing surface.
    PointerMoved(Point),
    /// The drawing surface changed size.
    SurfaceResized(Size),
}

/// Particle backdrop state.
#[derive(Debug)]
pub struct State {
    config: ParticleConfig,
    simulation: Simulation,
    pointer: Option<Point>,
    frame_loop: FrameLoop,
    rng: StdRng,
}

impl State {
    /// Creates a mounted backdrop. Particles are seeded on the first resize.
    #[must_use]
    pub fn new(config: ParticleConfig) -> Self {
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();
        Self {
            config,
            simulation: Simulation::new(),
            pointer: None,
            frame_loop,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Handle a backdrop message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Frame(_) => {
                if self.frame_loop.is_running() {
                    self.simulation.step(&self.config, self.pointer);
                }
            }
            Message::PointerMoved(position) => {
                if self.frame_loop.is_running() {
                    self.pointer = Some(position);
                }
            }
            Message::SurfaceResized(size) => {
                if self.frame_loop.is_running() && size != self.simulation.size() {
                    log::debug!(
                        "reseeding {} particles for {}x{} surface",
                        self.config.count,
                        size.width,
                        size.height
                    );
                    self.simulation.reset(size, &self.config, &mut self.rng);
                }
            }
        }
    }

    /// Cancels the frame loop and drops every particle.
    pub fn teardown(&mut self) {
        self.frame_loop.cancel();
        self.pointer = None;
        self.simulation.clear();
    }

    /// Restarts the frame loop after [`State::teardown`]. Particles are
    /// reseeded on the next surface notification.
    pub fn remount(&mut self) {
        if !self.frame_loop.is_running() {
            self.frame_loop.start();
        }
    }

    /// Whether the backdrop is mounted and animating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.frame_loop.is_running()
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.frame_loop.subscription().map(Message::Frame)
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas::Backdrop::new(&self.simulation, &self.config).view()
    }
}
