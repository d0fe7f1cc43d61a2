//! Held-input repeat suppression.
//!
//! A first press always acts. A press only counts as held once it was seen
//! on two consecutive frames; while held, commands are suppressed until the
//! cooldown drains, then fire once and re-arm the cooldown.

/// Default repeat cooldown in frames.
pub const DEFAULT_INPUT_TIMEOUT: u8 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavDebouncer {
    held_last: bool,
    held_current: bool,
    cooldown: u8,
    timeout: u8,
}

impl Default for NavDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_TIMEOUT)
    }
}

impl NavDebouncer {
    pub const fn new(timeout: u8) -> Self {
        Self {
            held_last: false,
            held_current: false,
            cooldown: timeout,
            timeout,
        }
    }

    /// Shift in this frame's raw "navigation pressed" signal.
    pub fn begin_frame(&mut self, pressed: bool) {
        self.held_last = self.held_current;
        self.held_current = pressed;
    }

    pub const fn is_held(&self) -> bool {
        self.held_last && self.held_current
    }

    pub const fn cooldown(&self) -> u8 {
        self.cooldown
    }

    pub const fn timeout(&self) -> u8 {
        self.timeout
    }

    /// Gate one command. Returns `false` (and drains one frame of cooldown)
    /// while a held input is still cooling down; otherwise re-arms the
    /// cooldown and lets the command run.
    pub fn try_accept(&mut self) -> bool {
        if self.is_held() && self.cooldown > 0 {
            self.cooldown -= 1;
            return false;
        }

        self.cooldown = self.timeout;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(debouncer: &mut NavDebouncer, pressed: &[bool]) -> usize {
        let mut executed = 0;
        for &p in pressed {
            debouncer.begin_frame(p);
            if p && debouncer.try_accept() {
                executed += 1;
            }
        }
        executed
    }

    #[test]
    fn single_press_always_executes() {
        let mut debouncer = NavDebouncer::new(10);
        assert_eq!(run(&mut debouncer, &[true]), 1);
    }

    #[test]
    fn holding_fifteen_frames_executes_twice() {
        let mut debouncer = NavDebouncer::new(10);
        assert_eq!(run(&mut debouncer, &[true; 15]), 2);
    }

    #[test]
    fn repeat_fires_on_twelfth_frame() {
        let mut debouncer = NavDebouncer::new(10);
        let mut fired_on = [false; 12];
        for slot in fired_on.iter_mut() {
            debouncer.begin_frame(true);
            *slot = debouncer.try_accept();
        }

        assert!(fired_on[0]);
        assert!(fired_on[1..11].iter().all(|fired| !fired));
        assert!(fired_on[11]);
    }

    #[test]
    fn tapping_executes_every_press() {
        let mut debouncer = NavDebouncer::new(10);
        let taps = [true, false, true, false, true, false];
        assert_eq!(run(&mut debouncer, &taps), 3);
    }

    #[test]
    fn one_frame_gap_breaks_the_hold() {
        let mut debouncer = NavDebouncer::new(10);
        debouncer.begin_frame(true);
        debouncer.begin_frame(true);
        assert!(debouncer.is_held());

        debouncer.begin_frame(false);
        debouncer.begin_frame(true);
        assert!(!debouncer.is_held());
        assert!(debouncer.try_accept());
    }

    #[test]
    fn zero_timeout_repeats_every_frame() {
        let mut debouncer = NavDebouncer::new(0);
        assert_eq!(run(&mut debouncer, &[true; 5]), 5);
    }
}
