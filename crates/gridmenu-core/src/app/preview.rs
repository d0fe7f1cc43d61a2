//! Large cover-art zoom shown while the preview trigger is held.

use log::debug;

use crate::anim::{Anim2d, Vec2};

/// Default zoom duration in frames.
pub const PREVIEW_FRAMES: u16 = 30;

/// Position and scale animations played as a pair: forward while the trigger
/// is held, backward once it is released. Reaching frame 0 on the way back
/// hides the preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewAnimator {
    position: Anim2d,
    scale: Anim2d,
    frames: u16,
}

impl PreviewAnimator {
    pub const fn new(frames: u16) -> Self {
        Self {
            position: Anim2d::new(),
            scale: Anim2d::new(),
            frames,
        }
    }

    /// Start zooming from a tile towards the enlarged geometry. Ignored while
    /// a preview is already showing, so a re-press resumes instead of
    /// restarting. Returns `true` when a new zoom started.
    pub fn begin(&mut self, from_center: Vec2, to_center: Vec2, from_size: Vec2, to_size: Vec2) -> bool {
        if self.position.is_active() || self.scale.is_active() {
            return false;
        }

        self.position.start(from_center, to_center, self.frames);
        self.scale.start(from_size, to_size, self.frames);
        true
    }

    pub fn update(&mut self, held: bool) {
        if !self.scale.is_active() {
            return;
        }

        if held {
            self.position.step_forward();
            self.scale.step_forward();
            return;
        }

        self.position.step_backward();
        self.scale.step_backward();
        if self.scale.clock.frame_now == 0 {
            debug!("grid-anim: preview rewound");
            self.cancel();
        }
    }

    pub fn cancel(&mut self) {
        self.position.deactivate();
        self.scale.deactivate();
    }

    pub fn clear(&mut self) {
        self.position.clear();
        self.scale.clear();
    }

    pub const fn is_visible(&self) -> bool {
        self.scale.is_active()
    }

    pub const fn is_alive(&self) -> bool {
        self.scale.is_alive()
    }

    pub const fn frame(&self) -> u16 {
        self.scale.clock.frame_now
    }

    pub const fn center(&self) -> Vec2 {
        self.position.current
    }

    pub const fn size(&self) -> Vec2 {
        self.scale.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> PreviewAnimator {
        let mut preview = PreviewAnimator::new(30);
        assert!(preview.begin(
            Vec2::new(0.0, 0.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(120.0, 120.0),
            Vec2::new(420.0, 420.0),
        ));
        preview
    }

    #[test]
    fn holding_zooms_to_full_size() {
        let mut preview = started();
        for _ in 0..40 {
            preview.update(true);
        }

        assert!(preview.is_visible());
        assert!(!preview.is_alive());
        assert_eq!(preview.center(), Vec2::new(300.0, 300.0));
        assert_eq!(preview.size(), Vec2::new(420.0, 420.0));
    }

    #[test]
    fn release_then_repress_resumes_without_snapping() {
        let mut preview = started();
        for _ in 0..12 {
            preview.update(true);
        }
        assert_eq!(preview.frame(), 12);

        for _ in 0..5 {
            preview.update(false);
        }
        assert_eq!(preview.frame(), 7);
        let rewound = preview.center();

        // A re-press while visible must not restart the zoom.
        assert!(!preview.begin(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO));
        assert_eq!(preview.center(), rewound);

        preview.update(true);
        assert_eq!(preview.frame(), 8);
        let expected = Vec2::ZERO.lerp(Vec2::new(300.0, 300.0), 8.0 / 30.0);
        assert_eq!(preview.center(), expected);
    }

    #[test]
    fn rewinding_to_start_hides_preview() {
        let mut preview = started();
        for _ in 0..3 {
            preview.update(true);
        }
        for _ in 0..3 {
            preview.update(false);
        }

        assert!(!preview.is_visible());
        assert!(preview.begin(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO));
    }

    #[test]
    fn cancel_hides_immediately() {
        let mut preview = started();
        preview.update(true);
        preview.cancel();

        assert!(!preview.is_visible());
        preview.update(true);
        assert_eq!(preview.frame(), 1);
    }
}
