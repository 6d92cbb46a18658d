// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Masonry column count and responsive breakpoints
//! - **Carousel**: Auto-play interval and drag thresholds
//! - **Lightbox**: Zoom range and pan bounds
//! - **Particles**: Simulation defaults shared by both presets
//! - **Counter**: Animated counter duration

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default masonry column count on wide layouts.
pub const DEFAULT_GALLERY_COLUMNS: usize = 3;

/// Minimum configurable column count.
pub const MIN_GALLERY_COLUMNS: usize = 1;

/// Maximum configurable column count.
pub const MAX_GALLERY_COLUMNS: usize = 6;

/// Below this layout width the gallery always uses two columns.
pub const NARROW_BREAKPOINT: f32 = 640.0;

/// Below this layout width the gallery always uses three columns.
pub const MEDIUM_BREAKPOINT: f32 = 1024.0;

/// Number of placeholder cards shown while the manifest loads.
pub const SKELETON_CARD_COUNT: usize = 6;

/// Default manifest file name, looked up in the config directory.
pub const DEFAULT_MANIFEST_FILE: &str = "media.toml";

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default auto-play interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Minimum auto-play interval in milliseconds.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum auto-play interval in milliseconds.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Horizontal drag distance that turns a drag into a slide change.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Releases that moved less than this are treated as clicks.
pub const CLICK_SLOP: f32 = 4.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Zoom factor when an item is first shown.
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom factor.
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom increment per step.
pub const ZOOM_STEP: f32 = 0.5;

/// Pan bound per unit of zoom above 1.
pub const PAN_LIMIT_PER_ZOOM: f32 = 100.0;

// ==========================================================================
// Particle Defaults
// ==========================================================================

/// Default number of particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 100;

/// Maximum configurable number of particles (pairwise pass is quadratic).
pub const MAX_PARTICLE_COUNT: usize = 400;

/// Default pointer attraction radius.
pub const DEFAULT_POINTER_RADIUS: f32 = 200.0;

/// Default pointer attraction strength.
pub const DEFAULT_POINTER_STRENGTH: f32 = 0.02;

/// Default velocity damping per frame.
pub const DEFAULT_DAMPING: f32 = 0.99;

/// Default maximum connection distance.
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 150.0;

/// Maximum absolute initial velocity component.
pub const DEFAULT_INITIAL_SPEED: f32 = 0.25;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Default duration of the header counters animation in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
    assert!(NARROW_BREAKPOINT < MEDIUM_BREAKPOINT);

    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    assert!(CLICK_SLOP < SWIPE_THRESHOLD);

    assert!(MIN_ZOOM < MAX_ZOOM);
    assert!(ZOOM_STEP > 0.0);

    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    assert!(DEFAULT_DAMPING > 0.0 && DEFAULT_DAMPING <= 1.0);
    assert!(DEFAULT_POINTER_RADIUS > 0.0);
    assert!(DEFAULT_CONNECTION_DISTANCE > 0.0);
};
