// SPDX-License-Identifier: MPL-2.0
//! Page layout: particle header, featured carousel, masonry gallery, with the
//! lightbox and toasts layered on top.

use super::{HeaderCounter, Message};
use crate::config::SKELETON_CARD_COUNT;
use crate::effects::particles;
use crate::i18n::fluent::I18n;
use crate::media::{ImageStore, MediaItem};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::{carousel, lightbox, masonry, skeleton};
use iced::alignment::Horizontal;
use iced::widget::{opaque, scrollable, text, Column, Container, Row, Stack};
use iced::{Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: Option<&'a str>,
    pub particles: Option<&'a particles::State>,
    pub counters: &'a [HeaderCounter],
    pub carousel: &'a carousel::State,
    pub gallery: &'a [MediaItem],
    pub lightbox: Option<&'a lightbox::State>,
    pub images: &'a ImageStore,
    pub notifications: &'a notifications::Manager,
    pub columns: usize,
    pub loading: bool,
    pub pulse: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::XL)
        .push(header(&ctx))
        .push(
            Column::new()
                .spacing(spacing::XL)
                .padding([0.0, spacing::LG])
                .push(featured(&ctx))
                .push(gallery(&ctx)),
        )
        .padding(Padding::ZERO.bottom(spacing::XXL));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable(page).width(Length::Fill).height(Length::Fill));

    if let Some(state) = ctx.lightbox {
        // The lightbox swallows pointer input meant for the page beneath.
        layers = layers.push(opaque(
            lightbox::view(
                lightbox::ViewContext {
                    i18n: ctx.i18n,
                    images: ctx.images,
                },
                state,
            )
            .map(Message::Lightbox),
        ));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx
        .title
        .map_or_else(|| ctx.i18n.tr("header-title"), str::to_string);

    let stats = ctx.counters.iter().fold(
        Row::new().spacing(spacing::XXL),
        |row, (label, counter)| {
            row.push(
                Column::new()
                    .align_x(Horizontal::Center)
                    .push(text(counter.display()).size(typography::TITLE_LG))
                    .push(text(ctx.i18n.tr(label)).size(typography::CAPTION)),
            )
        },
    );

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(text(title).size(typography::DISPLAY))
            .push(text(ctx.i18n.tr("header-subtitle")).size(typography::BODY))
            .push(stats),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT));
    if let Some(particles) = ctx.particles {
        layers = layers.push(particles.view().map(Message::Particles));
    }

    Container::new(layers.push(content))
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_MD).into()
}

fn featured<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.loading && ctx.carousel.is_empty() {
        return Column::new().into();
    }

    let body: Element<'a, Message> = if ctx.loading {
        skeleton::carousel(SKELETON_CARD_COUNT, ctx.pulse)
    } else {
        carousel::view(
            carousel::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            },
            ctx.carousel,
        )
        .map(Message::Carousel)
    };

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx.i18n.tr("featured-title")))
        .push(body)
        .into()
}

fn gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = if ctx.loading {
        skeleton::masonry(SKELETON_CARD_COUNT, ctx.columns, ctx.pulse)
    } else {
        masonry::view(
            masonry::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
                columns: ctx.columns,
            },
            ctx.gallery,
            Message::OpenGallery,
        )
    };

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx.i18n.tr("gallery-title")))
        .push(body)
        .into()
}
