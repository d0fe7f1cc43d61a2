#![cfg_attr(not(test), no_std)]

//! Frame-stepped grid navigator for a console game launcher.
//!
//! [`GridMenu`] owns the cursor, input debounce and the highlight and preview
//! animations. The platform layer feeds it one [`input::Control`] per frame
//! through an [`input::InputProvider`], calls [`GridMenu::tick`] with a host
//! implementing the [`host`] traits, then paints the [`render::Screen`]
//! handed out by [`GridMenu::with_screen`].

pub mod anim;
pub mod app;
pub mod content;
pub mod grid;
pub mod host;
pub mod input;
pub mod layout;
pub mod render;
pub mod text_policy;
pub mod theme;

pub use app::{GridMenu, MenuConfig, TickResult};
