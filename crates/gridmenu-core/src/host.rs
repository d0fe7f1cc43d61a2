//! Side-effecting collaborators supplied by the front-end.

use crate::{content::GameItem, theme::Theme};

/// Texture lookups and theme asset loading.
pub trait AssetProvider<I: GameItem> {
    /// Renderer-side image handle.
    type Image: Copy;

    /// (Re)load background and icon assets for `theme`.
    fn load_theme(&mut self, theme: Theme);

    /// Grid icon for `item`. Providers return a placeholder when missing.
    fn small_icon(&mut self, item: &I) -> Self::Image;

    /// Cover art for the preview; `None` when the item has no large art.
    fn large_art(&mut self, item: &I) -> Option<Self::Image>;
}

/// Boots a selected item. Fire-and-forget.
pub trait Launcher<Id> {
    fn run(&mut self, launch_id: Id);
}

/// Hands control to the next screen in the front-end's screen stack.
pub trait UiCycler {
    fn advance_to_next_screen(&mut self);
}
