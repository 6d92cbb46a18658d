// SPDX-License-Identifier: MPL-2.0
//! Renders one media item according to its load state.
//!
//! Shared by the carousel slides, masonry cells and thumbnails. Videos are
//! never decoded; they show a placeholder with their file name.

use crate::i18n::fluent::I18n;
use crate::media::{ImageState, MediaItem};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, text, Column, Container, Stack};
use iced::{ContentFit, Element, Length};

/// Video glyph used on badges and placeholders.
pub const PLAY_GLYPH: &str = "▶";

pub fn view<'a, Message: 'a>(
    item: &'a MediaItem,
    state: Option<&'a ImageState>,
    fit: ContentFit,
    i18n: &I18n,
) -> Element<'a, Message> {
    if item.is_video() {
        return video_placeholder(item);
    }

    match state {
        Some(ImageState::Loaded(loaded)) => image(loaded.handle.clone())
            .content_fit(fit)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(ImageState::Failed(_)) => failed_placeholder(item, i18n),
        Some(ImageState::Loading) | None => Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::skeleton(0.5))
            .into(),
    }
}

/// Adds a play badge in the top-right corner of `content` for video items.
pub fn with_video_badge<'a, Message: 'a>(
    item: &MediaItem,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    if !item.is_video() {
        return content;
    }

    let badge = Container::new(text(PLAY_GLYPH).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL));

    Stack::new()
        .push(content)
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        )
        .into()
}

fn video_placeholder<'a, Message: 'a>(item: &MediaItem) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text(PLAY_GLYPH).size(typography::TITLE_LG))
        .push(text(item.file_name()).size(typography::BODY_SM));

    centered(content.into())
}

fn failed_placeholder<'a, Message: 'a>(item: &MediaItem, i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("image-unavailable")).size(typography::BODY))
        .push(text(item.url.clone()).size(typography::CAPTION));

    centered(content.into())
}

fn centered<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(spacing::SM)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::placeholder)
        .into()
}
