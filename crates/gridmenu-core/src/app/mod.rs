//! Grid menu session: cursor, input debounce, highlight and preview motion.

use log::{debug, warn};

use crate::{
    anim::Vec2,
    content::{GameItem, ItemSource, LaunchIdOf, SortMode},
    grid::{GridCursor, GridPosition},
    host::{AssetProvider, Launcher, UiCycler},
    input::{Control, DEFAULT_INPUT_TIMEOUT, InputProvider, NavDebouncer},
    layout::{GridLayout, MAX_VISIBLE_TILES},
    render::{HighlightView, PreviewView, Rect, Screen, TileView, TitleView},
    text_policy::{POSITION_BUFFER_BYTES, TITLE_BUFFER_BYTES, position_label, title_limited},
    theme::Theme,
};

mod preview;
mod selection;

pub use preview::{PREVIEW_FRAMES, PreviewAnimator};
pub use selection::{HIGHLIGHT_FRAMES, SelectionAnimator};

/// Frames a selection must rest before it counts as settled (one second).
const FOCUS_SETTLE_FRAMES: u16 = 60;
const TITLE_MAX_CHARS: usize = 48;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuConfig {
    pub layout: GridLayout,
    pub input_timeout: u8,
    pub highlight_frames: u16,
    pub preview_frames: u16,
    pub focus_settle_frames: u16,
    pub title_max_chars: usize,
    pub initial_theme: Theme,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::standard(),
            input_timeout: DEFAULT_INPUT_TIMEOUT,
            highlight_frames: HIGHLIGHT_FRAMES,
            preview_frames: PREVIEW_FRAMES,
            focus_settle_frames: FOCUS_SETTLE_FRAMES,
            title_max_chars: TITLE_MAX_CHARS,
            initial_theme: Theme::NtscU,
        }
    }
}

impl MenuConfig {
    pub const fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub const fn with_input_timeout(mut self, input_timeout: u8) -> Self {
        self.input_timeout = input_timeout;
        self
    }

    pub const fn with_highlight_frames(mut self, highlight_frames: u16) -> Self {
        self.highlight_frames = highlight_frames;
        self
    }

    pub const fn with_preview_frames(mut self, preview_frames: u16) -> Self {
        self.preview_frames = preview_frames;
        self
    }

    pub const fn with_focus_settle_frames(mut self, focus_settle_frames: u16) -> Self {
        self.focus_settle_frames = focus_settle_frames;
        self
    }

    pub const fn with_title_max_chars(mut self, title_max_chars: usize) -> Self {
        self.title_max_chars = title_max_chars;
        self
    }

    pub const fn with_initial_theme(mut self, initial_theme: Theme) -> Self {
        self.initial_theme = initial_theme;
        self
    }
}

/// Row movement requested by one control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NavStep {
    Up(usize),
    Down(usize),
    Left,
    Right,
}

/// One menu session over a backing list, stepped once per display frame.
pub struct GridMenu<S, IN>
where
    S: ItemSource,
    IN: InputProvider,
{
    source: S,
    input: IN,
    config: MenuConfig,
    cursor: GridCursor,
    debounce: NavDebouncer,
    selection: SelectionAnimator,
    preview: PreviewAnimator,
    sort: SortMode,
    theme: Theme,
    preview_held: bool,
    frames_focused: u16,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("input.rs");
include!("navigation.rs");
include!("view.rs");
