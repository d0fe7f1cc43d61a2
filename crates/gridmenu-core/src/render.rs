//! Per-frame view models consumed by the front-end renderer.
//!
//! A [`Screen`] carries everything needed to draw one frame of the grid:
//! no navigation state leaks through, so the renderer stays a dumb painter.

use crate::{anim::Vec2, content::SortMode, theme::Theme};

pub use crate::layout::Rect;

/// Packed `0xAARRGGBB` color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const ORANGE_U: Self = Self(0xFFFF_6D00);
    pub const ORANGE_J: Self = Self(0xFFFF_9A1F);
    pub const BLUE: Self = Self(0xFF1F_5FD8);
}

/// One visible grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileView<H> {
    pub rect: Rect,
    pub icon: H,
    /// Absolute index into the sorted list.
    pub index: usize,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightView {
    pub rect: Rect,
    pub color: Color,
    /// Mid-transition; drawn above the tiles.
    pub animated: bool,
}

/// Enlarged cover art, drawn centered on `center` above everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewView<H> {
    pub center: Vec2,
    pub size: Vec2,
    pub art: H,
}

/// Selected item name, centered and auto-sized by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleView<'a> {
    pub text: &'a str,
    pub color: Color,
    pub center_x: f32,
    pub baseline_y: f32,
    pub max_width: f32,
}

/// App-level view model consumed by the front-end renderer.
pub enum Screen<'a, H> {
    /// Backing list is empty; nothing is selectable.
    Empty { theme: Theme, sort: SortMode },
    Grid {
        tiles: &'a [TileView<H>],
        highlight: HighlightView,
        preview: Option<PreviewView<H>>,
        title: TitleView<'a>,
        /// `"<selected>/<total>"`, one-based.
        position: &'a str,
        theme: Theme,
        sort: SortMode,
        /// Selection has rested long enough to fetch high-resolution art.
        focus_settled: bool,
    },
}
