//! Control state and interdependency rules.
//!
//! The five logical controls (gain, exposure, horizontal blank, vertical
//! blank, flip) share underlying registers and have coupled valid ranges.
//! This module keeps the rules as pure functions over plain numbers so the
//! hardware-facing code in [`driver`](crate::driver) stays a thin sequencing
//! layer and the invariants are testable without a transport:
//!
//! - `effective_frame_length = mode.height + vertical_blank`
//! - the physical exposure register is `effective_frame_length - exposure - 1`
//!   (inverted: a larger register value means shorter integration)
//! - the HMAX register is `(horizontal_blank + mode.width) / 2` (the device
//!   doubles it internally)
//! - the VMAX register is `vertical_blank + mode.height`
//! - conversion gain flips to HCG below a fixed gain-code threshold

use crate::mode::Mode;
use crate::registers::{FDG_SEL0_HCG, FDG_SEL0_LCG, HMAX_MAX, VMAX_MAX};

/// Shortest supported exposure in lines.
pub const EXPOSURE_MIN: u32 = 8;
/// Exposure changes occur in steps of this many lines.
pub const EXPOSURE_STEP: u32 = 2;
/// Exposure must be this many lines less than the frame length.
pub const EXPOSURE_OFFSET: u32 = 4;

/// Lowest gain code.
pub const GAIN_MIN: u32 = 0;
/// Highest gain code.
pub const GAIN_MAX: u32 = 100;
/// Gain codes below this select high conversion gain.
pub const GAIN_HCG_THRESHOLD: u32 = 0x22;

/// An inclusive control range with a step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Lower bound, inclusive.
    pub min: u32,
    /// Upper bound, inclusive.
    pub max: u32,
    /// Step between valid values.
    pub step: u32,
}

impl Range {
    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// The currently published valid ranges, recomputed on mode changes and
/// vertical-blank changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRanges {
    /// Analog gain code range.
    pub gain: Range,
    /// Exposure range in lines.
    pub exposure: Range,
    /// Horizontal blank range in device clock units.
    pub hblank: Range,
    /// Vertical blank range in lines.
    pub vblank: Range,
}

impl ControlRanges {
    /// Ranges published when `mode` becomes current.
    pub fn for_mode(mode: &Mode) -> Self {
        ControlRanges {
            gain: Range {
                min: GAIN_MIN,
                max: GAIN_MAX,
                step: 1,
            },
            exposure: Range {
                min: EXPOSURE_MIN,
                max: mode.vmax - 2,
                step: EXPOSURE_STEP,
            },
            hblank: Range {
                min: mode.hmax - mode.width,
                max: HMAX_MAX - mode.width,
                step: 1,
            },
            vblank: Range {
                min: mode.vmax - mode.height,
                max: VMAX_MAX - mode.height,
                step: 1,
            },
        }
    }
}

/// Current logical control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Analog gain code.
    pub gain: u32,
    /// Exposure in lines.
    pub exposure: u32,
    /// Horizontal blank in device clock units.
    pub hblank: u32,
    /// Vertical blank in lines.
    pub vblank: u32,
    /// Horizontal mirror.
    pub hflip: bool,
    /// Vertical mirror.
    pub vflip: bool,
}

impl ControlState {
    /// Control defaults when `mode` becomes current: blanks at their range
    /// minimum (the mode's nominal timing), exposure at its maximum, gain
    /// at zero, no mirroring.
    pub fn defaults_for(mode: &Mode) -> Self {
        ControlState {
            gain: GAIN_MIN,
            exposure: mode.vmax - 2,
            hblank: mode.hmax - mode.width,
            vblank: mode.vmax - mode.height,
            hflip: false,
            vflip: false,
        }
    }
}

/// Effective frame length in lines for a given vertical blank.
pub fn frame_length(mode_height: u32, vblank: u32) -> u32 {
    mode_height + vblank
}

/// Physical exposure register value (SHR0) for a logical exposure.
///
/// Inverted relative to the logical value: the register counts lines of
/// *shutter closed* time from the frame start.
pub fn exposure_register(frame_length: u32, exposure: u32) -> u32 {
    frame_length - exposure - 1
}

/// HMAX register value for a horizontal blank. The device halves the line
/// length internally, so odd sums round down.
pub fn hmax_register(hblank: u32, mode_width: u32) -> u32 {
    (hblank + mode_width) >> 1
}

/// VMAX register value for a vertical blank.
pub fn vmax_register(vblank: u32, mode_height: u32) -> u32 {
    vblank + mode_height
}

/// Conversion-gain mode register value for a gain code. Must be re-applied
/// on every gain change.
pub fn gain_mode(gain: u32) -> u8 {
    if gain < GAIN_HCG_THRESHOLD {
        FDG_SEL0_HCG
    } else {
        FDG_SEL0_LCG
    }
}

/// Exposure range published after VMAX is rewritten to `vmax`.
pub fn exposure_range_for_vmax(vmax: u32) -> Range {
    Range {
        min: EXPOSURE_MIN,
        max: vmax - EXPOSURE_OFFSET,
        step: EXPOSURE_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::MODES;

    #[test]
    fn test_exposure_register_inversion() {
        // Default mode: height 2180, nominal vblank 70 -> frame length 2250.
        let fl = frame_length(2180, 70);
        assert_eq!(fl, 0x08ca);
        assert_eq!(exposure_register(fl, 8), 2241);
        assert_eq!(exposure_register(fl, 2248), 1);
        // Longer integration -> smaller register value.
        assert!(exposure_register(fl, 100) > exposure_register(fl, 200));
    }

    #[test]
    fn test_exposure_register_tracks_frame_length() {
        // Same logical exposure, two different vertical blanks: the
        // physical register value must differ.
        let e = 1000;
        let short = exposure_register(frame_length(2180, 70), e);
        let long = exposure_register(frame_length(2180, 500), e);
        assert_eq!(long - short, 430);
    }

    #[test]
    fn test_gain_mode_threshold() {
        assert_eq!(gain_mode(0x21), FDG_SEL0_HCG);
        assert_eq!(gain_mode(0x22), FDG_SEL0_LCG);
        assert_eq!(gain_mode(0), FDG_SEL0_HCG);
        assert_eq!(gain_mode(100), FDG_SEL0_LCG);
    }

    #[test]
    fn test_hmax_halving() {
        assert_eq!(hmax_register(4032, 3856), 3944);
        // Odd sum rounds down.
        assert_eq!(hmax_register(4033, 3856), 3944);
        assert_eq!(hmax_register(4034, 3856), 3945);
    }

    #[test]
    fn test_vmax_identity() {
        assert_eq!(vmax_register(70, 2180), 2250);
        assert_eq!(vmax_register(0, 2180), 2180);
    }

    #[test]
    fn test_default_mode_ranges() {
        let mode = &MODES[0];
        let ranges = ControlRanges::for_mode(mode);
        assert_eq!(ranges.exposure, Range { min: 8, max: 2248, step: 2 });
        assert_eq!(ranges.hblank.min, mode.hmax - mode.width);
        assert_eq!(ranges.hblank.max, 0xffff - mode.width);
        assert_eq!(ranges.vblank.min, 70);
        assert_eq!(ranges.vblank.max, 0x0f_ffff - mode.height);
    }

    #[test]
    fn test_defaults_satisfy_exposure_invariant() {
        let mode = &MODES[0];
        let state = ControlState::defaults_for(mode);
        let fl = frame_length(mode.height, state.vblank);
        assert!(state.exposure + EXPOSURE_OFFSET <= fl);
        assert!(state.exposure >= EXPOSURE_MIN);
    }

    #[test]
    fn test_exposure_range_follows_vmax() {
        let r = exposure_range_for_vmax(2250);
        assert_eq!(r, Range { min: 8, max: 2246, step: 2 });
        let r = exposure_range_for_vmax(3000);
        assert_eq!(r.max, 2996);
    }

    #[test]
    fn test_range_clamp() {
        let r = Range { min: 8, max: 2248, step: 2 };
        assert_eq!(r.clamp(4), 8);
        assert_eq!(r.clamp(5000), 2248);
        assert!(r.contains(2248));
        assert!(!r.contains(2250));
    }
}
