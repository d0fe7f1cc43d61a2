//! Frame-stepped linear interpolation of 2D values.
//!
//! Animations advance one frame per call instead of reading a clock, so the
//! menu plays back identically regardless of the display refresh rate.

/// Screen-space 2D value (position or size).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Interpolate each axis independently; `t` is expected in `0.0..=1.0`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Frame counter shared by every animated value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameClock {
    pub frame_now: u16,
    pub frame_len: u16,
    pub active: bool,
}

impl FrameClock {
    pub const fn idle() -> Self {
        Self {
            frame_now: 0,
            frame_len: 0,
            active: false,
        }
    }

    pub fn restart(&mut self, frame_len: u16) {
        self.frame_now = 0;
        self.frame_len = frame_len;
        self.active = true;
    }

    pub fn tick_forward(&mut self) {
        if self.active {
            self.frame_now = self.frame_now.saturating_add(1).min(self.frame_len);
        }
    }

    pub fn tick_backward(&mut self) {
        if self.active {
            self.frame_now = self.frame_now.saturating_sub(1);
        }
    }

    /// Enabled, whatever the progress.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Enabled and still mid-transition.
    pub const fn is_alive(&self) -> bool {
        self.active && self.frame_now < self.frame_len
    }

    /// Progress in `0.0..=1.0`. A zero-length clock is always complete.
    pub fn progress(&self) -> f32 {
        if self.frame_len == 0 {
            return 1.0;
        }

        f32::from(self.frame_now.min(self.frame_len)) / f32::from(self.frame_len)
    }
}

/// A 2D value animated linearly from `start` to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anim2d {
    pub current: Vec2,
    pub start: Vec2,
    pub end: Vec2,
    pub clock: FrameClock,
}

impl Anim2d {
    pub const fn new() -> Self {
        Self {
            current: Vec2::ZERO,
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            clock: FrameClock::idle(),
        }
    }

    /// Begin a transition. `current` snaps to `from` until the next recompute.
    pub fn start(&mut self, from: Vec2, to: Vec2, frames: u16) {
        self.start = from;
        self.end = to;
        self.current = from;
        self.clock.restart(frames);
    }

    pub fn tick_forward(&mut self) {
        self.clock.tick_forward();
    }

    pub fn tick_backward(&mut self) {
        self.clock.tick_backward();
    }

    pub fn recompute(&mut self) {
        self.current = self.start.lerp(self.end, self.clock.progress());
    }

    pub fn step_forward(&mut self) {
        self.tick_forward();
        self.recompute();
    }

    pub fn step_backward(&mut self) {
        self.tick_backward();
        self.recompute();
    }

    pub const fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    pub const fn is_alive(&self) -> bool {
        self.clock.is_alive()
    }

    pub fn deactivate(&mut self) {
        self.clock.active = false;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_is_linear_midpoint() {
        let mut anim = Anim2d::new();
        anim.start(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0), 10);

        for _ in 0..5 {
            anim.tick_forward();
        }
        anim.recompute();

        assert_eq!(anim.current, Vec2::new(50.0, 25.0));
        assert!(anim.is_alive());
    }

    #[test]
    fn completed_animation_stays_active_but_not_alive() {
        let mut anim = Anim2d::new();
        anim.start(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0), 10);

        for _ in 0..25 {
            anim.step_forward();
        }

        assert_eq!(anim.clock.frame_now, 10);
        assert_eq!(anim.current, Vec2::new(100.0, 50.0));
        assert!(anim.is_active());
        assert!(!anim.is_alive());

        anim.deactivate();
        assert!(!anim.is_active());
    }

    #[test]
    fn backward_ticks_clamp_at_zero() {
        let mut anim = Anim2d::new();
        anim.start(Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0), 4);
        anim.step_forward();
        anim.step_backward();
        anim.step_backward();

        assert_eq!(anim.clock.frame_now, 0);
        assert_eq!(anim.current, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn zero_length_completes_immediately() {
        let mut anim = Anim2d::new();
        anim.start(Vec2::new(0.0, 0.0), Vec2::new(8.0, 4.0), 0);
        anim.recompute();

        assert_eq!(anim.current, Vec2::new(8.0, 4.0));
        assert!(anim.is_active());
        assert!(!anim.is_alive());
    }

    #[test]
    fn inactive_clock_ignores_ticks() {
        let mut anim = Anim2d::new();
        anim.tick_forward();
        assert_eq!(anim.clock.frame_now, 0);
    }
}
