//! Geometry presets and pixel formats.
//!
//! The mode table is a compiled-in catalog of supported readout geometries;
//! each mode carries its nominal line/frame timing (`hmax`/`vmax`), a crop
//! rectangle relative to the native pixel array, and the register list
//! applied only for that mode. Pixel formats come from one of two fixed
//! catalogs (colour or mono) selected once at attach by device variant.

use crate::registers::{RegVal, FR_FDG_SEL1, FR_FDG_SEL2};

/// Full native array width in pixels.
pub const NATIVE_WIDTH: u32 = 3876;
/// Full native array height in pixels.
pub const NATIVE_HEIGHT: u32 = 2204;
/// Left edge of the active pixel array.
pub const PIXEL_ARRAY_LEFT: u32 = 0;
/// Top edge of the active pixel array.
pub const PIXEL_ARRAY_TOP: u32 = 20;
/// Active pixel array width.
pub const PIXEL_ARRAY_WIDTH: u32 = 3856;
/// Active pixel array height.
pub const PIXEL_ARRAY_HEIGHT: u32 = 2180;

/// Pixel rate on the image wire, constant across modes and formats.
pub const PIXEL_RATE: u64 = 148_500_000;

/// A crop rectangle relative to the native sensor array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels.
    pub left: u32,
    /// Top edge in pixels.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One readout geometry preset.
///
/// Invariant: `hmax >= width` and `vmax >= height`, both measured in the
/// line/clock units the device expects.
#[derive(Debug)]
pub struct Mode {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Nominal line length in device clock units.
    pub hmax: u32,
    /// Nominal frame length in lines.
    pub vmax: u32,
    /// Readout window relative to the native array.
    pub crop: Rect,
    /// Register list applied only for this mode.
    pub registers: &'static [RegVal],
}

/// Per-mode settings for the all-pixel readout.
const ALL_PIXEL_SETTINGS: &[RegVal] = &[
    // WINMODE all-pixel
    RegVal { addr: 0x3018, value: 0x10 },
    RegVal { addr: FR_FDG_SEL1, value: 0x00 },
    RegVal { addr: FR_FDG_SEL2, value: 0x00 },
];

/// Supported geometry presets.
///
/// The single mode reads out the areas documented as "effective margin for
/// color processing" and "effective pixel ignored area" in the datasheet.
/// `hmax` was determined by experiment.
pub const MODES: &[Mode] = &[Mode {
    width: 3856,
    height: 2180,
    hmax: 3944 * 2,
    vmax: 0x08ca,
    crop: Rect {
        left: PIXEL_ARRAY_LEFT,
        top: PIXEL_ARRAY_TOP,
        width: NATIVE_WIDTH,
        height: NATIVE_HEIGHT,
    },
    registers: ALL_PIXEL_SETTINGS,
}];

/// Picks the mode whose geometry is nearest to the request.
///
/// Exact matches always win; otherwise the mode minimizing the squared
/// distance on (width, height) is selected, with no priority beyond
/// minimal distance.
pub fn nearest_mode(width: u32, height: u32) -> &'static Mode {
    let distance = |m: &Mode| {
        let dw = i64::from(m.width) - i64::from(width);
        let dh = i64::from(m.height) - i64::from(height);
        dw * dw + dh * dh
    };
    let mut best = &MODES[0];
    for mode in &MODES[1..] {
        if distance(mode) < distance(best) {
            best = mode;
        }
    }
    best
}

/// Semantic pixel encoding on the image wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    /// Packed 10-bit Bayer RGGB.
    Srggb10,
    /// Packed 12-bit Bayer RGGB.
    Srggb12,
    /// Packed 10-bit monochrome.
    Y10,
    /// Packed 12-bit monochrome.
    Y12,
}

/// A pixel encoding paired with its bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    /// Wire encoding.
    pub code: FormatCode,
    /// Bits per pixel, 10 or 12.
    pub bpp: u8,
}

/// Formats offered by the colour device variant.
pub const COLOUR_FORMATS: &[PixelFormat; 2] = &[
    PixelFormat { code: FormatCode::Srggb10, bpp: 10 },
    PixelFormat { code: FormatCode::Srggb12, bpp: 12 },
];

/// Formats offered by the mono device variant.
pub const MONO_FORMATS: &[PixelFormat; 2] = &[
    PixelFormat { code: FormatCode::Y10, bpp: 10 },
    PixelFormat { code: FormatCode::Y12, bpp: 12 },
];

/// Device variant, fixed by the fitted sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorVariant {
    /// Bayer colour filter array.
    Colour,
    /// Monochrome.
    Mono,
}

impl SensorVariant {
    /// The format catalog this variant offers.
    pub fn formats(self) -> &'static [PixelFormat; 2] {
        match self {
            SensorVariant::Colour => COLOUR_FORMATS,
            SensorVariant::Mono => MONO_FORMATS,
        }
    }
}

/// Selects a format by exact code match within `catalog`, falling back to
/// the catalog's first entry when the code is not offered.
pub fn select_format(catalog: &'static [PixelFormat; 2], code: FormatCode) -> PixelFormat {
    catalog
        .iter()
        .find(|f| f.code == code)
        .copied()
        .unwrap_or(catalog[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_invariants() {
        for mode in MODES {
            assert!(mode.hmax >= mode.width);
            assert!(mode.vmax >= mode.height);
        }
    }

    #[test]
    fn test_nearest_mode_selects_only_mode() {
        // The attach-time default format request.
        let mode = nearest_mode(1936, 1100);
        assert_eq!((mode.width, mode.height), (3856, 2180));
        assert_eq!(mode.vmax, 0x08ca);
    }

    #[test]
    fn test_exact_match_wins() {
        let mode = nearest_mode(3856, 2180);
        assert_eq!((mode.width, mode.height), (3856, 2180));
    }

    #[test]
    fn test_format_fallback_to_first_entry() {
        // Mono codes are not in the colour catalog.
        let fmt = select_format(COLOUR_FORMATS, FormatCode::Y12);
        assert_eq!(fmt, COLOUR_FORMATS[0]);

        let fmt = select_format(MONO_FORMATS, FormatCode::Y12);
        assert_eq!(fmt.bpp, 12);
    }
}
