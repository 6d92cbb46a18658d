// SPDX-License-Identifier: MPL-2.0
//! Round-robin masonry layout for the media gallery.
//!
//! Item `i` goes to column `i % cols`, so reading row by row reproduces the
//! original order. The layout is a pure function of the sequence and the
//! column count; [`source_index`] maps a cell back to its sequence index.

use crate::config::{MEDIUM_BREAKPOINT, MIN_GALLERY_COLUMNS, NARROW_BREAKPOINT};
use crate::i18n::fluent::I18n;
use crate::media::{ImageState, ImageStore, MediaItem};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_tile;
use crate::ui::styles;
use iced::widget::{button, responsive, text, Column, Container, Row};
use iced::{ContentFit, Element, Length, Size};

/// Splits `items` into `cols` columns, round-robin, preserving order within each column.
///
/// `cols == 0` is treated as a single column.
#[must_use]
pub fn distribute<T: Clone>(items: &[T], cols: usize) -> Vec<Vec<T>> {
    let cols = cols.max(1);
    let mut columns: Vec<Vec<T>> = vec![Vec::new(); cols];
    for (index, item) in items.iter().enumerate() {
        columns[index % cols].push(item.clone());
    }
    columns
}

/// Column count for a layout `width`; `configured` applies only on wide layouts.
#[must_use]
pub fn column_count(width: f32, configured: usize) -> usize {
    if width < NARROW_BREAKPOINT {
        2
    } else if width < MEDIUM_BREAKPOINT {
        3
    } else {
        configured.max(MIN_GALLERY_COLUMNS)
    }
}

/// Sequence index of the cell at (`col`, `row`) in a `cols`-column layout.
#[must_use]
pub fn source_index(col: usize, row: usize, cols: usize) -> usize {
    col + row * cols.max(1)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
    /// Column count for wide layouts.
    pub columns: usize,
}

/// Responsive masonry grid. `on_open` receives the sequence index of a clicked cell.
pub fn view<'a, Message: Clone + 'a>(
    ctx: ViewContext<'a>,
    items: &'a [MediaItem],
    on_open: fn(usize) -> Message,
) -> Element<'a, Message> {
    if items.is_empty() {
        return Container::new(
            text(ctx.i18n.tr("gallery-empty")).size(typography::BODY),
        )
        .center_x(Length::Fill)
        .padding(spacing::XXL)
        .into();
    }

    responsive(move |size: Size| grid(&ctx, items, on_open, size.width)).into()
}

fn grid<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    items: &'a [MediaItem],
    on_open: fn(usize) -> Message,
    width: f32,
) -> Element<'a, Message> {
    let cols = column_count(width, ctx.columns);
    let column_width = ((width - spacing::MD * (cols - 1) as f32) / cols as f32).max(1.0);
    let indices: Vec<usize> = (0..items.len()).collect();

    let mut row = Row::new().spacing(spacing::MD);
    for (col, cells) in distribute(&indices, cols).into_iter().enumerate() {
        let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);
        for (row_index, index) in cells.into_iter().enumerate() {
            debug_assert_eq!(source_index(col, row_index, cols), index);
            let item = &items[index];
            let state = ctx.images.get(&item.url);
            let height = cell_height(state, index, column_width);

            let tile = image_tile::with_video_badge(
                item,
                image_tile::view(item, state, ContentFit::Cover, ctx.i18n),
            );
            let cell = button(Container::new(tile).style(styles::container::card))
                .padding(0)
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(styles::button::card(false))
                .on_press(on_open(index));
            column = column.push(cell);
        }
        row = row.push(column);
    }

    row.width(Length::Fill).into()
}

/// Loaded images keep their aspect ratio; everything else alternates between
/// two fixed heights so columns stay staggered.
fn cell_height(state: Option<&ImageState>, index: usize, column_width: f32) -> f32 {
    match state {
        Some(ImageState::Loaded(image)) if image.width > 0 => (column_width
            * image.height as f32
            / image.width as f32)
            .clamp(sizing::TILE_HEIGHT * 0.5, sizing::TILE_HEIGHT_TALL * 2.0),
        _ if index % 2 == 0 => sizing::TILE_HEIGHT,
        _ => sizing::TILE_HEIGHT_TALL,
    }
}
