// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Media card surface, derived from the active theme background.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pulsing skeleton block; `phase` in `[0, 1]` drives the brightness.
pub fn skeleton(phase: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.strong.color;
        let alpha = opacity::OVERLAY_SUBTLE + (opacity::OVERLAY_MEDIUM - opacity::OVERLAY_SUBTLE) * phase;
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Placeholder for media that cannot be shown inline (videos, failed images).
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Header band over the particle backdrop.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::GRAY_950
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
