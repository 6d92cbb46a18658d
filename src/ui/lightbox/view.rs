// SPDX-License-Identifier: MPL-2.0
//! Lightbox layout: toolbar, stage with navigation arrows, caption footer.

use super::stage::Stage;
use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::{ImageState, ImageStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_tile::{self, PLAY_GLYPH};
use crate::ui::state::Direction;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Canvas, Column, Container, Row, Space, Stack};
use iced::{ContentFit, Element, Length, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let content = Column::new()
        .push(toolbar(&ctx, state))
        .push(stage(&ctx, state))
        .push(footer(state));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::scrim)
        .into()
}

fn tool_button<'a>(glyph: &'a str, msg: Option<Message>) -> Element<'a, Message> {
    button(
        Container::new(text(glyph).size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .padding(0)
    .width(Length::Fixed(sizing::BUTTON_HEIGHT))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::overlay)
    .on_press_maybe(msg)
    .into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let current = (state.index() + 1).to_string();
    let total = state.len().to_string();
    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let mut info = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(counter).size(typography::BODY));
    if let Some(caption) = &state.current().caption {
        info = info.push(text(format!("• {caption}")).size(typography::BODY));
    }

    let fullscreen_glyph = if state.is_fullscreen() { "🗗" } else { "⛶" };
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(tool_button(fullscreen_glyph, Some(Message::ToggleFullscreen)))
        .push(tool_button("⤓", Some(Message::Download)))
        .push(tool_button("⇪", Some(Message::Share)))
        .push(tool_button("✕", Some(Message::Close)));

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(info)
            .push(Space::new().width(Length::Fill))
            .push(actions),
    )
    .padding(spacing::MD)
    .style(styles::overlay::caption_bar)
    .into()
}

fn stage<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let item = state.current();

    let media: Element<'a, Message> = match ctx.images.get(&item.url) {
        Some(ImageState::Loaded(loaded)) if !item.is_video() => Canvas::new(Stage {
            handle: &loaded.handle,
            image_size: Size::new(loaded.width as f32, loaded.height as f32),
            zoom: state.zoom(),
            pan: state.pan(),
            can_pan: state.can_pan(),
            panning: state.is_panning(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        _ if item.is_video() => video_notice(ctx.i18n, &item.file_name()),
        state_ref => Container::new(image_tile::view(
            item,
            state_ref,
            ContentFit::Contain,
            ctx.i18n,
        ))
        .padding(spacing::XXL)
        .into(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(media);

    if state.len() > 1 {
        let previous = tool_button(
            "‹",
            state
                .has_previous()
                .then_some(Message::Navigate(Direction::Previous)),
        );
        let next = tool_button(
            "›",
            state.has_next().then_some(Message::Navigate(Direction::Next)),
        );
        layers = layers.push(
            Container::new(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(previous)
                    .push(Space::new().width(Length::Fill))
                    .push(next),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_y(Vertical::Center),
        );
    }

    layers.into()
}

fn video_notice<'a>(i18n: &I18n, file_name: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text(PLAY_GLYPH).size(sizing::ICON_XL))
        .push(
            text(i18n.tr_with_args("lightbox-video-label", &[("name", file_name)]))
                .size(typography::BODY_SM),
        )
        .push(text(i18n.tr("lightbox-video-unsupported")).size(typography::CAPTION));

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn footer<'a>(state: &'a State) -> Element<'a, Message> {
    let item = state.current();

    let mut details = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(caption) = &item.caption {
        details = details.push(text(caption.as_str()).size(typography::BODY));
    }
    if let Some(meta) = item.details() {
        details = details.push(text(meta).size(typography::CAPTION));
    }

    let mut row = Row::new().align_y(Vertical::Center).push(details);
    if state.can_zoom() {
        let zoom = state.zoom();
        row = row.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(tool_button(
                    "−",
                    (zoom > crate::config::MIN_ZOOM).then_some(Message::ZoomOut),
                ))
                .push(text(format!("{zoom}x")).size(typography::BODY))
                .push(tool_button(
                    "+",
                    (zoom < crate::config::MAX_ZOOM).then_some(Message::ZoomIn),
                )),
        );
    }

    Container::new(row)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::overlay::caption_bar)
        .into()
}
