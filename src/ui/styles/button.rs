// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Accent-filled button for primary actions.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, glow) = match status {
        button::Status::Hovered => (palette::ACCENT_300, shadow::GLOW),
        button::Status::Disabled => (palette::GRAY_700, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (palette::ACCENT_500, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: palette::ACCENT_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: glow,
        snap: true,
    }
}

/// Translucent round button used on top of media (arrows, lightbox toolbar).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered => (opacity::OVERLAY_HOVER, palette::ACCENT_500),
        button::Status::Pressed => (opacity::OVERLAY_PRESSED, palette::ACCENT_500),
        button::Status::Disabled => (opacity::OVERLAY_SUBTLE, palette::GRAY_400),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, WHITE),
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Carousel position dot; `active` marks the current slide.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::ACCENT_500,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
        };

        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

/// Borderless button wrapping a media card or thumbnail.
pub fn card(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = selected || matches!(status, button::Status::Hovered);
        button::Style {
            background: None,
            border: Border {
                color: if highlighted {
                    palette::ACCENT_500
                } else {
                    Color::TRANSPARENT
                },
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: if highlighted { shadow::GLOW } else { shadow::NONE },
            ..button::Style::default()
        }
    }
}
