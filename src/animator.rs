//! Per-strip animation state machine.
//!
//! Provides [`StripAnimator`], which owns the mode of one strip and advances a
//! caller-owned color buffer by one step each time [`StripAnimator::tick`] is
//! called. Setters only record the new mode; all buffer writes happen inside
//! `tick`.

use crate::colors::{self, BLACK, Color};
use crate::command::StripAction;
use crate::mode::{Direction, MODE_CODE_MARQUEE, Mode};

/// Number of cells a bit pattern mask can address.
pub const BIT_PATTERN_WIDTH: usize = 32;

/// Errors reported by a strip animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// The pixel buffer has no cells.
    EmptyStrip,
    /// `tick` found the animator in a state no setter can produce.
    ///
    /// The buffer is left untouched and the animator keeps running.
    UnexpectedState {
        /// Mode reported at the time of the tick
        mode: Mode,
    },
    /// Raw mode code that does not name any mode.
    UnknownMode(u8),
    /// Raw mode code that is reserved but has no behavior.
    UnsupportedMode(u8),
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::EmptyStrip => {
                write!(f, "strip must have at least one pixel")
            }
            StripError::UnexpectedState { mode } => {
                write!(f, "unexpected animator state in mode {}", mode)
            }
            StripError::UnknownMode(code) => {
                write!(f, "unknown mode code {}", code)
            }
            StripError::UnsupportedMode(code) => {
                write!(f, "mode code {} is reserved and not supported", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

/// Active mode together with the parameters only that mode uses.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pattern {
    Undefined,
    Off,
    Solid { color: Color },
    Run { color: Color, direction: Direction },
    // Only exists until the entry tick, which turns it into `Run`.
    Rainbow { direction: Direction },
    Bounce { color: Color, heading: Direction },
    BitPattern { color: Color, mask: u32 },
}

impl Pattern {
    fn mode(&self) -> Mode {
        match self {
            Pattern::Undefined => Mode::Undefined,
            Pattern::Off => Mode::Off,
            Pattern::Solid { .. } => Mode::SolidOn,
            Pattern::Run { direction: Direction::Forward, .. } => Mode::RunForward,
            Pattern::Run { direction: Direction::Reverse, .. } => Mode::RunReverse,
            Pattern::Rainbow { direction: Direction::Forward } => Mode::RainbowForward,
            Pattern::Rainbow { direction: Direction::Reverse } => Mode::RainbowReverse,
            Pattern::Bounce { .. } => Mode::Bounce,
            Pattern::BitPattern { .. } => Mode::BitPattern,
        }
    }
}

/// Drives one strip of addressable LEDs through its animation modes.
///
/// The animator borrows the strip's pixel buffer for its whole lifetime and is
/// the only writer while it exists. Rendering the buffer to hardware after
/// each tick is the caller's job, as is deciding how often to tick.
///
/// A freshly created animator is in [`Mode::Off`] with its entry pending, so
/// the first tick blanks the strip.
///
/// # Example
///
/// ```
/// use strip_animator::{StripAnimator, colors::{BLACK, RED}};
///
/// let mut pixels = [BLACK; 5];
/// let mut strip = StripAnimator::new(&mut pixels).unwrap();
///
/// strip.set_run_forward(RED);
/// strip.tick().unwrap(); // entry: RED at index 0
/// strip.tick().unwrap(); // moves to index 1
/// assert_eq!(strip.pixels()[1], RED);
/// ```
#[derive(Debug)]
pub struct StripAnimator<'a> {
    pixels: &'a mut [Color],
    pattern: Pattern,
    pending_entry: bool,
}

impl<'a> StripAnimator<'a> {
    /// Binds a new animator to `pixels`.
    ///
    /// # Errors
    /// * `EmptyStrip` - `pixels` has no cells
    pub fn new(pixels: &'a mut [Color]) -> Result<Self, StripError> {
        if pixels.is_empty() {
            return Err(StripError::EmptyStrip);
        }

        Ok(Self {
            pixels,
            pattern: Pattern::Off,
            pending_entry: true,
        })
    }

    /// Applies a configuration action by dispatching to the matching setter.
    pub fn handle_action(&mut self, action: StripAction) {
        match action {
            StripAction::Off => self.set_off(),
            StripAction::Solid(color) => self.set_solid_color(color),
            StripAction::RunForward(color) => self.set_run_forward(color),
            StripAction::RunReverse(color) => self.set_run_reverse(color),
            StripAction::RainbowForward => self.set_rainbow_forward(),
            StripAction::RainbowReverse => self.set_rainbow_reverse(),
            StripAction::Bounce(color) => self.set_bounce(color),
            StripAction::BitPattern { color, mask } => self.set_bit_pattern(color, mask),
        }
    }

    /// Turns every cell off.
    pub fn set_off(&mut self) {
        self.enter(Pattern::Off);
    }

    /// Fills the whole strip with `color`.
    pub fn set_solid_color(&mut self, color: Color) {
        self.enter(Pattern::Solid { color });
    }

    /// Runs a single `color` cell from the first index to the last,
    /// wrapping back to the start.
    pub fn set_run_forward(&mut self, color: Color) {
        self.enter(Pattern::Run {
            color,
            direction: Direction::Forward,
        });
    }

    /// Runs a single `color` cell from the last index to the first,
    /// wrapping back to the end.
    pub fn set_run_reverse(&mut self, color: Color) {
        self.enter(Pattern::Run {
            color,
            direction: Direction::Reverse,
        });
    }

    /// Loads a rainbow across the strip and rotates it forward.
    pub fn set_rainbow_forward(&mut self) {
        self.enter(Pattern::Rainbow {
            direction: Direction::Forward,
        });
    }

    /// Loads a rainbow across the strip and rotates it in reverse.
    pub fn set_rainbow_reverse(&mut self) {
        self.enter(Pattern::Rainbow {
            direction: Direction::Reverse,
        });
    }

    /// Moves a single `color` cell back and forth between both ends.
    pub fn set_bounce(&mut self, color: Color) {
        self.enter(Pattern::Bounce {
            color,
            heading: Direction::Forward,
        });
    }

    /// Lights cell `i` with `color` for every set bit `i` of `bitmask`.
    ///
    /// Only the first `min(len, 32)` cells are addressable.
    pub fn set_bit_pattern(&mut self, color: Color, bitmask: u32) {
        self.enter(Pattern::BitPattern {
            color,
            mask: bitmask,
        });
    }

    /// Configures the strip from a numeric mode code.
    ///
    /// `color` is used by the modes that take one and `bitmask` only by
    /// [`Mode::BitPattern`]. On error the current mode is kept.
    ///
    /// # Errors
    /// * `UnsupportedMode` - the reserved marquee code
    /// * `UnknownMode` - any other code without a mode
    pub fn set_raw_mode(&mut self, code: u8, color: Color, bitmask: u32) -> Result<(), StripError> {
        let Some(mode) = Mode::from_raw(code) else {
            let err = if code == MODE_CODE_MARQUEE {
                StripError::UnsupportedMode(code)
            } else {
                StripError::UnknownMode(code)
            };
            warn!("rejected mode code {}", code);
            return Err(err);
        };

        match mode {
            Mode::Undefined => self.enter(Pattern::Undefined),
            Mode::Off => self.set_off(),
            Mode::SolidOn => self.set_solid_color(color),
            Mode::RunForward => self.set_run_forward(color),
            Mode::RunReverse => self.set_run_reverse(color),
            Mode::RainbowForward => self.set_rainbow_forward(),
            Mode::RainbowReverse => self.set_rainbow_reverse(),
            Mode::Bounce => self.set_bounce(color),
            Mode::BitPattern => self.set_bit_pattern(color, bitmask),
        }
        Ok(())
    }

    /// Advances the strip by one step.
    ///
    /// The first tick after a setter performs the mode's one-time entry
    /// setup; later ticks perform one step of the running animation. Static
    /// modes do nothing after entry.
    ///
    /// # Errors
    /// * `UnexpectedState` - the animator is in a state no setter produces.
    ///   Nothing is written and the next tick proceeds normally.
    pub fn tick(&mut self) -> Result<(), StripError> {
        let entering = core::mem::replace(&mut self.pending_entry, false);
        let pattern = self.pattern;

        match pattern {
            Pattern::Undefined => {}
            Pattern::Off => {
                if entering {
                    self.pixels.fill(BLACK);
                }
            }
            Pattern::Solid { color } => {
                if entering {
                    self.pixels.fill(color);
                }
            }
            Pattern::Run { color, direction } => {
                if entering {
                    self.pixels.fill(BLACK);
                    let start = self.start_index(direction);
                    self.pixels[start] = color;
                } else {
                    self.shift(direction);
                }
            }
            Pattern::Rainbow { direction } => {
                if !entering {
                    let mode = pattern.mode();
                    warn!("rainbow tick without pending entry in mode {:?}", mode);
                    return Err(StripError::UnexpectedState { mode });
                }

                let len = self.pixels.len();
                for (i, pixel) in self.pixels.iter_mut().enumerate() {
                    *pixel = colors::hue(colors::rainbow_hue(i, len));
                }
                self.pattern = Pattern::Run {
                    color: self.pixels[0],
                    direction,
                };
            }
            Pattern::Bounce { color, heading } => {
                if entering {
                    self.pixels.fill(BLACK);
                    self.pixels[0] = color;
                    self.pattern = Pattern::Bounce {
                        color,
                        heading: Direction::Forward,
                    };
                } else if self.pixels[self.end_index(heading)] == color {
                    // Turnaround costs one tick without movement.
                    self.pattern = Pattern::Bounce {
                        color,
                        heading: heading.reversed(),
                    };
                } else {
                    self.shift(heading);
                }
            }
            Pattern::BitPattern { color, mask } => {
                if entering {
                    self.pixels.fill(BLACK);
                    let width = self.pixels.len().min(BIT_PATTERN_WIDTH);
                    for (i, pixel) in self.pixels[..width].iter_mut().enumerate() {
                        if mask & (1 << i) != 0 {
                            *pixel = color;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the current mode.
    ///
    /// Rainbow modes report themselves until their entry tick and the
    /// matching run mode afterwards.
    pub fn mode(&self) -> Mode {
        self.pattern.mode()
    }

    /// Returns true if the next tick will perform entry setup.
    pub fn is_entry_pending(&self) -> bool {
        self.pending_entry
    }

    /// Heading of the bouncing cell, or `None` outside [`Mode::Bounce`].
    pub fn bounce_heading(&self) -> Option<Direction> {
        match self.pattern {
            Pattern::Bounce { heading, .. } => Some(heading),
            _ => None,
        }
    }

    /// Number of cells on the strip. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Current contents of the pixel buffer.
    pub fn pixels(&self) -> &[Color] {
        &*self.pixels
    }

    /// Releases the pixel buffer.
    pub fn into_pixels(self) -> &'a mut [Color] {
        self.pixels
    }

    /// Leaves the animator in a rainbow mode whose entry already ran, a
    /// state the setters never produce.
    #[cfg(test)]
    pub(crate) fn stall_in_rainbow(&mut self, direction: Direction) {
        self.pattern = Pattern::Rainbow { direction };
        self.pending_entry = false;
    }

    fn enter(&mut self, pattern: Pattern) {
        debug!("strip mode -> {:?}", pattern.mode());
        self.pattern = pattern;
        self.pending_entry = true;
    }

    fn start_index(&self, direction: Direction) -> usize {
        match direction {
            Direction::Forward => 0,
            Direction::Reverse => self.pixels.len() - 1,
        }
    }

    fn end_index(&self, direction: Direction) -> usize {
        self.start_index(direction.reversed())
    }

    /// Rotates the buffer by one cell, wrapping the cell pushed off one end
    /// into the other.
    fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.pixels.rotate_right(1),
            Direction::Reverse => self.pixels.rotate_left(1),
        }
    }
}
