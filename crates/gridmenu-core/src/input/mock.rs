use super::{Control, InputProvider};

/// No-hardware input source: never reports a control.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_control(&mut self) -> Result<Control, Self::Error> {
        Ok(Control::None)
    }
}
