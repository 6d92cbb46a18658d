// SPDX-License-Identifier: MPL-2.0
//! Carousel layout: draggable slide with overlays, dots and a thumbnail strip.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::image_tile;
use crate::ui::state::Direction;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, scrollable, text, Column, Container, Row, Space, Stack};
use iced::{mouse, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let Some(item) = state.current() else {
        return Space::new().into();
    };

    let slide = image_tile::view(item, ctx.images.get(&item.url), ContentFit::Cover, ctx.i18n);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .push(Container::new(slide).style(styles::container::card))
        .push(top_overlay(ctx.i18n, state));

    if let Some(caption) = &item.caption {
        layers = layers.push(caption_overlay(caption, item.details()));
    }
    if state.len() > 1 {
        layers = layers.push(arrows());
    }

    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Pointer
    };

    let slide_area = mouse_area(layers)
        .on_move(Message::DragMoved)
        .on_press(Message::DragStarted)
        .on_release(Message::DragEnded)
        .on_exit(Message::DragCancelled)
        .interaction(interaction);

    let mut column = Column::new().spacing(spacing::SM).push(slide_area);
    if state.len() > 1 {
        column = column.push(dots(state)).push(thumbnails(&ctx, state));
    }
    column.into()
}

fn top_overlay<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let current = (state.index() + 1).to_string();
    let total = state.len().to_string();
    let counter = Container::new(
        text(i18n.tr_with_args(
            "carousel-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(radius::FULL));

    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if state.len() > 1 {
        let (glyph, label) = if state.autoplay().is_enabled() {
            ("⏸", i18n.tr("carousel-pause"))
        } else {
            ("▶", i18n.tr("carousel-play"))
        };
        row = row.push(
            button(text(format!("{glyph} {label}")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::overlay)
                .on_press(Message::ToggleAutoPlay),
        );
    }
    row = row.push(counter);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .into()
}

fn caption_overlay<'a>(caption: &str, meta: Option<String>) -> Element<'a, Message> {
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(text(caption.to_string()).size(typography::TITLE_MD));
    if let Some(meta) = meta {
        details = details.push(text(meta).size(typography::BODY_SM));
    }

    Container::new(
        Container::new(details)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::overlay::caption_bar),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}

fn arrows<'a>() -> Element<'a, Message> {
    let arrow = |glyph: &'a str, direction: Direction| {
        button(
            Container::new(text(glyph).size(typography::TITLE_LG))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .padding(0)
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .style(styles::button::overlay)
        .on_press(Message::Navigate(direction))
    };

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(arrow("‹", Direction::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow("›", Direction::Next)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(Vertical::Center)
    .into()
}

fn dots<'a>(state: &State) -> Element<'a, Message> {
    let row = (0..state.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
        let active = index == state.index();
        let width = if active { sizing::DOT * 4.0 } else { sizing::DOT };
        row.push(
            button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .style(styles::button::dot(active))
                .on_press(Message::JumpTo(index)),
        )
    });

    Container::new(row).center_x(Length::Fill).into()
}

fn thumbnails<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let strip = state.items().iter().enumerate().fold(
        Row::new().spacing(spacing::XS),
        |row, (index, item)| {
            let tile = image_tile::with_video_badge(
                item,
                image_tile::view(item, ctx.images.get(&item.url), ContentFit::Cover, ctx.i18n),
            );
            row.push(
                button(tile)
                    .padding(0)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .style(styles::button::card(index == state.index()))
                    .on_press(Message::JumpTo(index)),
            )
        },
    );

    scrollable(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}
