//! Command-based control for strip animators.

use crate::colors::Color;
use crate::mode::Mode;

/// Configuration actions for a strip. One variant per mode setter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripAction {
    /// Blank the strip.
    Off,
    /// Fill with one color.
    Solid(Color),
    /// Run a single cell forward.
    RunForward(Color),
    /// Run a single cell in reverse.
    RunReverse(Color),
    /// Seed a rainbow and rotate it forward.
    RainbowForward,
    /// Seed a rainbow and rotate it in reverse.
    RainbowReverse,
    /// Bounce a single cell between both ends.
    Bounce(Color),
    /// Light the cells selected by `mask`.
    BitPattern { color: Color, mask: u32 },
}

impl StripAction {
    /// Mode the strip reports once this action is applied.
    pub fn mode(&self) -> Mode {
        match self {
            StripAction::Off => Mode::Off,
            StripAction::Solid(_) => Mode::SolidOn,
            StripAction::RunForward(_) => Mode::RunForward,
            StripAction::RunReverse(_) => Mode::RunReverse,
            StripAction::RainbowForward => Mode::RainbowForward,
            StripAction::RainbowReverse => Mode::RainbowReverse,
            StripAction::Bounce(_) => Mode::Bounce,
            StripAction::BitPattern { .. } => Mode::BitPattern,
        }
    }
}

/// Command targeting a specific strip.
#[derive(Debug, Clone, Copy)]
pub struct StripCommand<Id> {
    pub strip_id: Id,
    pub action: StripAction,
}

impl<Id> StripCommand<Id> {
    /// Creates command.
    pub fn new(strip_id: Id, action: StripAction) -> Self {
        Self { strip_id, action }
    }
}
