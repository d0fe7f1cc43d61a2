//! Input abstraction layer.

mod debounce;
pub mod mock;

pub use debounce::{DEFAULT_INPUT_TIMEOUT, NavDebouncer};

/// Controller state sampled once per frame. At most one control is reported.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Control {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    TriggerL,
    TriggerR,
    A,
    B,
    X,
    Y,
    Start,
}

impl Control {
    /// Controls that repeat at the cooldown rate while held.
    pub const fn is_debounced(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::TriggerL
                | Self::TriggerR
                | Self::Start
                | Self::Y
                | Self::B
        )
    }
}

/// Polled per-frame input provider.
pub trait InputProvider {
    type Error;

    fn poll_control(&mut self) -> Result<Control, Self::Error>;
}
