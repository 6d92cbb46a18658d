// SPDX-License-Identifier: MPL-2.0
//! Placeholder cards shown while the media manifest loads.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::masonry::distribute;
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};
use std::f32::consts::TAU;
use std::time::Duration;

/// Length of one pulse cycle.
const PULSE_PERIOD: Duration = Duration::from_millis(1500);

/// Pulse brightness in `[0, 1]` after `elapsed`; starts dim.
#[must_use]
pub fn pulse_phase(elapsed: Duration) -> f32 {
    let t = elapsed.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
    0.5 - 0.5 * (t * TAU).cos()
}

fn card<'a, Message: 'a>(height: f32, phase: f32) -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(styles::container::skeleton(phase))
        .into()
}

/// `count` cards in `cols` columns, laid out like the real gallery.
pub fn masonry<'a, Message: 'a>(count: usize, cols: usize, phase: f32) -> Element<'a, Message> {
    let indices: Vec<usize> = (0..count).collect();
    let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);

    for cells in distribute(&indices, cols) {
        let column = cells.into_iter().fold(
            Column::new().spacing(spacing::MD).width(Length::Fill),
            |column, index| {
                let height = if index % 2 == 0 {
                    sizing::TILE_HEIGHT
                } else {
                    sizing::TILE_HEIGHT_TALL
                };
                column.push(card(height, phase))
            },
        );
        row = row.push(column);
    }

    row.into()
}

/// One wide slide over a strip of thumbnails.
pub fn carousel<'a, Message: 'a>(thumbnails: usize, phase: f32) -> Element<'a, Message> {
    let strip = (0..thumbnails).fold(Row::new().spacing(spacing::XS), |strip, _| {
        strip.push(
            Container::new(text(""))
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .style(styles::container::skeleton(phase)),
        )
    });

    Column::new()
        .spacing(spacing::SM)
        .push(card(sizing::CAROUSEL_HEIGHT, phase))
        .push(strip)
        .into()
}
