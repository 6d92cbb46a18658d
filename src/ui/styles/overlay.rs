// SPDX-License-Identifier: MPL-2.0
//! Styles for elements drawn over media: badges, counters and the lightbox scrim.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn indicator_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Rounded indicator such as the slide counter or the video badge.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the lightbox.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Caption bar at the bottom of a slide or the lightbox.
pub fn caption_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}
