//! Animation mode table.

const MODE_CODE_UNDEFINED: u8 = 0;
const MODE_CODE_OFF: u8 = 1;
const MODE_CODE_SOLID_ON: u8 = 2;
const MODE_CODE_RUN_FORWARD: u8 = 3;
const MODE_CODE_RUN_REVERSE: u8 = 4;
const MODE_CODE_RAINBOW_FORWARD: u8 = 5;
const MODE_CODE_RAINBOW_REVERSE: u8 = 6;
const MODE_CODE_BOUNCE: u8 = 7;
const MODE_CODE_BIT_PATTERN: u8 = 8;

/// Code reserved for a marquee mode that has no defined behavior.
pub const MODE_CODE_MARQUEE: u8 = 9;

/// The animation a strip is currently running.
///
/// The numeric codes are stable and can be used on the wire; see
/// [`Mode::from_raw`] and [`Mode::as_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Nothing configured. Ticks are no-ops.
    Undefined = MODE_CODE_UNDEFINED,
    /// Every cell dark.
    Off = MODE_CODE_OFF,
    /// Every cell the same color.
    SolidOn = MODE_CODE_SOLID_ON,
    /// A single lit cell travelling from the first index to the last, wrapping.
    RunForward = MODE_CODE_RUN_FORWARD,
    /// A single lit cell travelling from the last index to the first, wrapping.
    RunReverse = MODE_CODE_RUN_REVERSE,
    /// Rainbow seeded on entry, then rotated forward.
    RainbowForward = MODE_CODE_RAINBOW_FORWARD,
    /// Rainbow seeded on entry, then rotated in reverse.
    RainbowReverse = MODE_CODE_RAINBOW_REVERSE,
    /// A single lit cell travelling back and forth between both ends.
    Bounce = MODE_CODE_BOUNCE,
    /// Static pattern selected by a 32-bit mask.
    BitPattern = MODE_CODE_BIT_PATTERN,
}

impl Mode {
    /// Looks up a mode by its numeric code.
    ///
    /// Returns `None` for unknown codes and for [`MODE_CODE_MARQUEE`].
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_CODE_UNDEFINED => Self::Undefined,
            MODE_CODE_OFF => Self::Off,
            MODE_CODE_SOLID_ON => Self::SolidOn,
            MODE_CODE_RUN_FORWARD => Self::RunForward,
            MODE_CODE_RUN_REVERSE => Self::RunReverse,
            MODE_CODE_RAINBOW_FORWARD => Self::RainbowForward,
            MODE_CODE_RAINBOW_REVERSE => Self::RainbowReverse,
            MODE_CODE_BOUNCE => Self::Bounce,
            MODE_CODE_BIT_PATTERN => Self::BitPattern,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Off => "off",
            Self::SolidOn => "solid",
            Self::RunForward => "run_forward",
            Self::RunReverse => "run_reverse",
            Self::RainbowForward => "rainbow_forward",
            Self::RainbowReverse => "rainbow_reverse",
            Self::Bounce => "bounce",
            Self::BitPattern => "bit_pattern",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// From index 0 toward the last index.
    #[default]
    Forward,
    /// From the last index toward index 0.
    Reverse,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}
