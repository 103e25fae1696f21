//! Proximity zones and the indicators derived from them.
//!
//! [`classify`] maps a distance in meters to one of seven [`Zone`]s. Every
//! consumer (gauge bars, numeric readout, LED bar, buzzer) derives its state
//! from the zone alone, never from the raw distance.
//!
//! # Zone Table
//!
//! | Distance (m)     | Zone         | Red | Yellow | Green | LEDs | Buzzer     |
//! |------------------|--------------|-----|--------|-------|------|------------|
//! | d <= 0.3         | `RedFull`    | on  | on     | on    | 7    | continuous |
//! | 0.3 < d <= 0.5   | `Red`        | on  | on     | on    | 6    | 50 ms      |
//! | 0.5 < d <= 0.7   | `YellowFull` |     | on     | on    | 5    | 100 ms     |
//! | 0.7 < d <= 0.9   | `Yellow`     |     | on     | on    | 4    | 300 ms     |
//! | 0.9 < d <= 1.1   | `GreenFull`  |     |        | on    | 3    | 400 ms     |
//! | 1.1 < d <= 1.3   | `Green`      |     |        | on    | 2    | 600 ms     |
//! | d > 1.3          | `None`       |     |        |       | 1    | silent     |
//!
//! # Non-finite Input
//!
//! `NaN` classifies as [`Zone::None`]: a reading that is not a number carries
//! no proximity information, so no warning is raised. `+inf` is beyond every
//! threshold (`None`) and `-inf` is below every threshold (`RedFull`). The
//! serial line decoder rejects non-finite values before they get here.

use crate::thresholds::{
    BEEP_GREEN_FULL_MS,
    BEEP_GREEN_MS,
    BEEP_RED_MS,
    BEEP_YELLOW_FULL_MS,
    BEEP_YELLOW_MS,
    GREEN_FULL_MAX,
    GREEN_MAX,
    RED_FULL_MAX,
    RED_MAX,
    YELLOW_FULL_MAX,
    YELLOW_MAX,
};

/// Discrete proximity category, ordered by increasing distance.
///
/// `RedFull < Red < ... < Green < None`, so a larger zone means a farther
/// obstacle. Use [`Zone::severity`] when "more dangerous" ordering reads better.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Zone {
    /// Critical distance, closest range.
    RedFull,
    /// Very close range.
    Red,
    /// Medium range, caution.
    YellowFull,
    /// Medium distance.
    Yellow,
    /// Safe distance.
    GreenFull,
    /// Slightly further distance.
    Green,
    /// Out of range, no warning.
    #[default]
    None,
}

/// All zones from closest to farthest.
pub const ZONES: [Zone; 7] = [
    Zone::RedFull,
    Zone::Red,
    Zone::YellowFull,
    Zone::Yellow,
    Zone::GreenFull,
    Zone::Green,
    Zone::None,
];

/// Classify a distance (meters) into its proximity zone.
///
/// Thresholds are evaluated in ascending order with inclusive upper bounds.
/// Pure and total: `NaN` and `+inf` fall through every comparison to
/// [`Zone::None`].
#[inline]
pub fn classify(distance: f64) -> Zone {
    if distance <= RED_FULL_MAX {
        Zone::RedFull
    } else if distance <= RED_MAX {
        Zone::Red
    } else if distance <= YELLOW_FULL_MAX {
        Zone::YellowFull
    } else if distance <= YELLOW_MAX {
        Zone::Yellow
    } else if distance <= GREEN_FULL_MAX {
        Zone::GreenFull
    } else if distance <= GREEN_MAX {
        Zone::Green
    } else {
        Zone::None
    }
}

/// Which parts of the gauge are active for a zone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Indicators {
    /// Numeric readout visible.
    pub readout: bool,
    /// Red bar group lit.
    pub red: bool,
    /// Yellow bar group lit.
    pub yellow: bool,
    /// Green bar group lit.
    pub green: bool,
}

impl Indicators {
    /// Number of lit bar groups (0-3).
    #[inline]
    pub const fn active_groups(&self) -> u8 { self.red as u8 + self.yellow as u8 + self.green as u8 }
}

/// Buzzer behaviour for a zone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuzzerPattern {
    /// Solid tone.
    Continuous,
    /// Toggle every `period_ms`.
    Beep { period_ms: u16 },
    /// No tone.
    Silent,
}

impl BuzzerPattern {
    /// Whether the tone is sounding `elapsed_ms` after the pattern started.
    ///
    /// Beeps are on during even half-periods, starting on.
    pub const fn is_on(
        self,
        elapsed_ms: u64,
    ) -> bool {
        match self {
            Self::Continuous => true,
            Self::Silent => false,
            Self::Beep { period_ms } => {
                if period_ms == 0 {
                    return true;
                }
                (elapsed_ms / period_ms as u64) % 2 == 0
            }
        }
    }
}

impl Zone {
    /// Derive gauge indicator state.
    ///
    /// The groups nest: red implies yellow, yellow implies green.
    pub const fn indicators(self) -> Indicators {
        Indicators {
            readout: !matches!(self, Self::None),
            red: matches!(self, Self::RedFull | Self::Red),
            yellow: matches!(self, Self::RedFull | Self::Red | Self::YellowFull | Self::Yellow),
            green: !matches!(self, Self::None),
        }
    }

    /// Number of lit LEDs on the seven-LED bar (the first LED is always on).
    pub const fn led_count(self) -> u8 {
        match self {
            Self::RedFull => 7,
            Self::Red => 6,
            Self::YellowFull => 5,
            Self::Yellow => 4,
            Self::GreenFull => 3,
            Self::Green => 2,
            Self::None => 1,
        }
    }

    /// Buzzer cadence for this zone.
    pub const fn buzzer(self) -> BuzzerPattern {
        match self {
            Self::RedFull => BuzzerPattern::Continuous,
            Self::Red => BuzzerPattern::Beep { period_ms: BEEP_RED_MS },
            Self::YellowFull => BuzzerPattern::Beep {
                period_ms: BEEP_YELLOW_FULL_MS,
            },
            Self::Yellow => BuzzerPattern::Beep { period_ms: BEEP_YELLOW_MS },
            Self::GreenFull => BuzzerPattern::Beep {
                period_ms: BEEP_GREEN_FULL_MS,
            },
            Self::Green => BuzzerPattern::Beep { period_ms: BEEP_GREEN_MS },
            Self::None => BuzzerPattern::Silent,
        }
    }

    /// Danger level: 6 for `RedFull` down to 0 for `None`.
    #[inline]
    pub const fn severity(self) -> u8 { self.led_count() - 1 }

    /// Short uppercase label for the status line and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RedFull => "RED FULL",
            Self::Red => "RED",
            Self::YellowFull => "YELLOW FULL",
            Self::Yellow => "YELLOW",
            Self::GreenFull => "GREEN FULL",
            Self::Green => "GREEN",
            Self::None => "CLEAR",
        }
    }
}

impl core::fmt::Display for Zone {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
