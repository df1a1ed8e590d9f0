/// Terminal dimensions available to a render pass, in cells.
///
/// Passed to every render so responsive visibility can be evaluated fresh.
/// Hosts should re-render on resize to pick up the new dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in terminal columns
    pub width: u16,
    /// Height in terminal rows
    pub height: u16,
}

impl Viewport {
    /// Create a new viewport
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
