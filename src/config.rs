//! Attach-time configuration.
//!
//! The platform supplies the external clock frequency, the number of CSI-2
//! data lanes and the set of link frequencies its receiver accepts. All
//! three are validated once at attach; a mismatch is fatal there and no
//! configuration error can surface later.
//!
//! ```toml
//! [sensor]
//! xclk_hz = 24000000
//! lanes = 2
//! link_frequencies = [594000000]
//! ```

use serde::Deserialize;

use crate::error::{SensorError, SensorResult};
use crate::registers;

/// Link frequencies the driver uses in 2-lane operation.
pub const LINK_FREQS_2LANE: &[u64] = &[594_000_000];

/// Link frequencies the driver uses in 4-lane operation.
pub const LINK_FREQS_4LANE: &[u64] = &[297_000_000];

/// Internal clock divider class, keyed by external clock frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InckSel {
    /// 74.25 MHz external clock.
    Mhz74_25 = 0x00,
    /// 37.125 MHz external clock.
    Mhz37_125 = 0x01,
    /// 72 MHz external clock.
    Mhz72 = 0x02,
    /// 27 MHz external clock.
    Mhz27 = 0x03,
    /// 24 MHz external clock.
    Mhz24 = 0x04,
}

impl InckSel {
    /// Maps an external clock frequency to its divider class.
    ///
    /// The sensor supports exactly five input frequencies; anything else is
    /// a configuration error.
    pub fn from_xclk_hz(hz: u32) -> SensorResult<Self> {
        match hz {
            74_250_000 => Ok(InckSel::Mhz74_25),
            37_125_000 => Ok(InckSel::Mhz37_125),
            72_000_000 => Ok(InckSel::Mhz72),
            27_000_000 => Ok(InckSel::Mhz27),
            24_000_000 => Ok(InckSel::Mhz24),
            _ => Err(SensorError::Configuration(format!(
                "external clock frequency {hz} is not supported"
            ))),
        }
    }

    /// Register value for INCK_SEL.
    pub fn register_value(self) -> u8 {
        self as u8
    }
}

/// Number of active CSI-2 data lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneCount {
    /// 2-lane operation, 594 MHz link, 1188 Mbps/lane.
    Two,
    /// 4-lane operation, 297 MHz link, 594 Mbps/lane.
    Four,
}

impl LaneCount {
    /// Validates the configured lane count.
    pub fn from_lanes(lanes: u8) -> SensorResult<Self> {
        match lanes {
            2 => Ok(LaneCount::Two),
            4 => Ok(LaneCount::Four),
            _ => Err(SensorError::Configuration(format!(
                "invalid data lanes: {lanes}"
            ))),
        }
    }

    /// Register value for CSI_LANE_MODE.
    pub fn lane_mode(self) -> u8 {
        match self {
            LaneCount::Two => 0x01,
            LaneCount::Four => 0x03,
        }
    }

    /// PHY rate class for LANE_RATE. A static choice keyed only by lane
    /// count; not independently configurable.
    pub fn lane_rate(self) -> u8 {
        match self {
            LaneCount::Two => registers::LANE_RATE_1188,
            LaneCount::Four => registers::LANE_RATE_594,
        }
    }

    /// Link frequencies the receiver must accept for this lane count.
    pub fn link_frequencies(self) -> &'static [u64] {
        match self {
            LaneCount::Two => LINK_FREQS_2LANE,
            LaneCount::Four => LINK_FREQS_4LANE,
        }
    }
}

/// Raw configuration as supplied by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorConfig {
    /// External clock frequency in Hz. Must be one of the five supported
    /// values.
    pub xclk_hz: u32,
    /// Number of CSI-2 data lanes, 2 or 4.
    pub lanes: u8,
    /// Link frequencies the receiver accepts, in Hz.
    pub link_frequencies: Vec<u64>,
}

/// Configuration after attach-time validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedConfig {
    /// Internal clock divider class for the configured external clock.
    pub inck_sel: InckSel,
    /// Validated lane count.
    pub lanes: LaneCount,
}

impl SensorConfig {
    /// Validates the configuration, resolving the clock divider class and
    /// lane count.
    ///
    /// Every link frequency the driver will use for the configured lane
    /// count must appear in `link_frequencies`; the first missing one is
    /// reported.
    pub fn validate(&self) -> SensorResult<ValidatedConfig> {
        let inck_sel = InckSel::from_xclk_hz(self.xclk_hz)?;
        let lanes = LaneCount::from_lanes(self.lanes)?;

        if self.link_frequencies.is_empty() {
            return Err(SensorError::Configuration(
                "no link frequencies configured".into(),
            ));
        }

        for freq in lanes.link_frequencies() {
            if !self.link_frequencies.contains(freq) {
                return Err(SensorError::Configuration(format!(
                    "link frequency {freq} is not supported by the receiver"
                )));
            }
        }

        Ok(ValidatedConfig { inck_sel, lanes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(xclk_hz: u32, lanes: u8, link_frequencies: Vec<u64>) -> SensorConfig {
        SensorConfig {
            xclk_hz,
            lanes,
            link_frequencies,
        }
    }

    #[test]
    fn test_supported_clocks() {
        for (hz, sel) in [
            (74_250_000, InckSel::Mhz74_25),
            (37_125_000, InckSel::Mhz37_125),
            (72_000_000, InckSel::Mhz72),
            (27_000_000, InckSel::Mhz27),
            (24_000_000, InckSel::Mhz24),
        ] {
            assert_eq!(InckSel::from_xclk_hz(hz).unwrap(), sel);
        }
        assert!(InckSel::from_xclk_hz(25_000_000).is_err());
    }

    #[test]
    fn test_valid_two_lane_config() {
        let validated = config(24_000_000, 2, vec![594_000_000]).validate().unwrap();
        assert_eq!(validated.inck_sel, InckSel::Mhz24);
        assert_eq!(validated.lanes, LaneCount::Two);
        assert_eq!(validated.lanes.lane_mode(), 0x01);
        assert_eq!(validated.lanes.lane_rate(), crate::registers::LANE_RATE_1188);
    }

    #[test]
    fn test_four_lane_needs_297mhz_link() {
        let err = config(24_000_000, 4, vec![594_000_000])
            .validate()
            .unwrap_err();
        assert!(matches!(err, SensorError::Configuration(_)));

        let validated = config(24_000_000, 4, vec![297_000_000]).validate().unwrap();
        assert_eq!(validated.lanes.lane_rate(), crate::registers::LANE_RATE_594);
    }

    #[test]
    fn test_rejects_odd_lane_counts() {
        for lanes in [0, 1, 3, 8] {
            assert!(config(24_000_000, lanes, vec![594_000_000])
                .validate()
                .is_err());
        }
    }

    #[test]
    fn test_config_parses_from_toml() {
        let parsed: SensorConfig = toml::from_str(
            r#"
            xclk_hz = 24000000
            lanes = 2
            link_frequencies = [594000000]
            "#,
        )
        .unwrap();
        assert!(parsed.validate().is_ok());
    }
}
