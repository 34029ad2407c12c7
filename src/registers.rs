//! IMX585 register map.
//!
//! The contractually significant subset of the sensor's 16-bit address /
//! 8-bit value register space, plus the field values the driver writes.
//! Multi-byte quantities (VMAX, HMAX, EXPOSURE, GAIN) are little-endian,
//! written low byte first through the buffered-write latch.

/// 1 = standby, 0 = run.
pub const STANDBY: u16 = 0x3000;
/// Buffered-write latch. 1 holds register updates, 0 releases them.
pub const REGHOLD: u16 = 0x3001;
/// 0 = start master timing, 1 = stop.
pub const XMSTA: u16 = 0x3002;
/// Internal clock divider class, see [`InckSel`](crate::config::InckSel).
pub const INCK_SEL: u16 = 0x3014;
/// PHY bit rate class.
pub const LANE_RATE: u16 = 0x3015;
/// Horizontal mirror flag.
pub const FLIP_WINMODEH: u16 = 0x3020;
/// Vertical mirror flag.
pub const FLIP_WINMODEV: u16 = 0x3021;
/// AD-conversion bit depth select.
pub const ADBIT: u16 = 0x3022;
/// Output-mode bit depth select.
pub const MDBIT: u16 = 0x3023;
/// Frame length in lines, 3 bytes.
pub const VMAX: u16 = 0x3028;
/// Line length, 2 bytes. The device doubles this value internally.
pub const HMAX: u16 = 0x302c;
/// Conversion-gain mode select (LCG/HCG).
pub const FR_FDG_SEL0: u16 = 0x3030;
/// Conversion-gain mode, second frame (HDR, fixed to LCG here).
pub const FR_FDG_SEL1: u16 = 0x3031;
/// Conversion-gain mode, third frame (HDR, fixed to LCG here).
pub const FR_FDG_SEL2: u16 = 0x3032;
/// 0x01 = 2 lane, 0x03 = 4 lane.
pub const CSI_LANE_MODE: u16 = 0x3040;
/// Physical exposure register (SHR0), 3 bytes. Larger value means shorter
/// integration.
pub const EXPOSURE: u16 = 0x3050;
/// Analog gain code, 2 bytes.
pub const GAIN: u16 = 0x306c;

/// Low conversion gain.
pub const FDG_SEL0_LCG: u8 = 0x00;
/// High conversion gain.
pub const FDG_SEL0_HCG: u8 = 0x01;

/// 2376 Mbps/lane rate class.
pub const LANE_RATE_2376: u8 = 0x00;
/// 2079 Mbps/lane rate class.
pub const LANE_RATE_2079: u8 = 0x01;
/// 1782 Mbps/lane rate class.
pub const LANE_RATE_1782: u8 = 0x02;
/// 1440 Mbps/lane rate class.
pub const LANE_RATE_1440: u8 = 0x03;
/// 1188 Mbps/lane rate class.
pub const LANE_RATE_1188: u8 = 0x04;
/// 891 Mbps/lane rate class.
pub const LANE_RATE_891: u8 = 0x05;
/// 720 Mbps/lane rate class.
pub const LANE_RATE_720: u8 = 0x06;
/// 594 Mbps/lane rate class.
pub const LANE_RATE_594: u8 = 0x07;

/// Largest frame length the VMAX register can hold.
pub const VMAX_MAX: u32 = 0x0f_ffff;
/// Largest line length the HMAX register can hold.
pub const HMAX_MAX: u32 = 0xffff;

/// One register/value pair in a compiled-in settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegVal {
    /// Register address.
    pub addr: u16,
    /// Value to write.
    pub value: u8,
}
