//! Highlight box motion between grid cells.

use crate::anim::{Anim2d, Vec2};

/// Default highlight move duration in frames.
pub const HIGHLIGHT_FRAMES: u16 = 15;

/// Drives the highlight box. A retarget always starts from wherever the box
/// is drawn right now, so rapid navigation chains into one smooth motion
/// instead of snapping back to a cell first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionAnimator {
    highlight: Anim2d,
    rest: Vec2,
    frames: u16,
}

impl SelectionAnimator {
    pub const fn new(frames: u16, rest: Vec2) -> Self {
        Self {
            highlight: Anim2d::new(),
            rest,
            frames,
        }
    }

    /// Head towards `target` from the current on-screen position.
    pub fn retarget(&mut self, target: Vec2) {
        let from = if self.highlight.is_active() {
            self.highlight.current
        } else {
            self.rest
        };
        self.highlight.start(from, target, self.frames);
    }

    pub fn update(&mut self) {
        if self.highlight.is_alive() {
            self.highlight.step_forward();
        }
    }

    /// Record the static position once the box is no longer moving.
    pub fn settle(&mut self, rest: Vec2) {
        if !self.highlight.is_alive() {
            self.rest = rest;
        }
    }

    pub const fn is_alive(&self) -> bool {
        self.highlight.is_alive()
    }

    /// Position to draw at, or `None` when the box is at rest.
    pub fn animated_position(&self) -> Option<Vec2> {
        self.highlight.is_alive().then_some(self.highlight.current)
    }

    pub const fn rest(&self) -> Vec2 {
        self.rest
    }

    pub fn clear(&mut self, rest: Vec2) {
        self.highlight.clear();
        self.rest = rest;
    }
}
