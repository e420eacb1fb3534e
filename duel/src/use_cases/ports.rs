use crate::domain::InputSnapshot;
use crate::use_cases::types::WorldUpdate;

// Port for the host that owns the window, input devices and drawing.
pub trait Presentation {
    /// Samples both players' controls for the coming tick. `None` means the host
    /// has closed and the match loop should stop.
    fn poll_input(&mut self) -> Option<InputSnapshot>;

    /// Draws the state produced by the tick that just ran.
    fn render(&mut self, update: &WorldUpdate);
}
