use super::draw::{Color, DrawCommand};
use super::input::HeldKeys;

/// What a frame loop needs from the windowing and drawing layer.
///
/// Initialization is the implementor's constructor. The loop calls
/// `poll_input`, then brackets its draw commands with `begin_frame` and
/// `end_frame`, until `should_close` reports a close request.
pub trait Platform {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pumps pending window events and samples the directional keys.
    fn poll_input(&mut self) -> HeldKeys;

    fn should_close(&self) -> bool;

    fn begin_frame(&mut self, clear: Color);

    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;

    /// Presents the batch, blocking until the frame budget is spent.
    fn end_frame(&mut self);
}
