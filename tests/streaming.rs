//! End-to-end lifecycle tests against the mock hardware.
//!
//! These exercise the full attach / configure / power / stream path the way
//! a platform integration would, asserting on the exact register traffic
//! the sensor sees.

use imx585::hal::mock::{MockPins, MockTransport};
use imx585::registers;
use imx585::{
    FormatCode, FormatRequest, Imx585, SensorConfig, SensorError, SensorVariant,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(lanes: u8) -> SensorConfig {
    SensorConfig {
        xclk_hz: 24_000_000,
        lanes,
        link_frequencies: match lanes {
            4 => vec![297_000_000],
            _ => vec![594_000_000],
        },
    }
}

fn attach(lanes: u8) -> Imx585<MockTransport, MockPins> {
    init_logging();
    Imx585::attach(
        MockTransport::new(),
        MockPins::new(),
        SensorVariant::Colour,
        &config(lanes),
    )
    .unwrap()
}

#[test]
fn test_full_streaming_session() {
    let sensor = attach(2);

    let applied = sensor
        .set_format(FormatRequest {
            width: 3856,
            height: 2180,
            code: FormatCode::Srggb12,
        })
        .unwrap();
    assert_eq!((applied.width, applied.height, applied.bpp), (3856, 2180, 12));

    sensor.set_gain(30).unwrap();
    sensor.set_exposure(1500).unwrap();

    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();
    assert!(sensor.is_streaming());

    sensor.with_transport(|t| {
        // Clock class for the 24 MHz external clock.
        assert_eq!(t.written(registers::INCK_SEL), Some(0x04));
        // 12-bit AD conversion and output mode.
        assert_eq!(t.written(registers::ADBIT), Some(0x01));
        assert_eq!(t.written(registers::MDBIT), Some(0x01));
        // 2-lane link at 1188 Mbps/lane.
        assert_eq!(t.written(registers::CSI_LANE_MODE), Some(0x01));
        assert_eq!(
            t.written(registers::LANE_RATE),
            Some(registers::LANE_RATE_1188)
        );
        // Deferred controls landed: gain 30 selects high conversion gain.
        assert_eq!(t.written(registers::GAIN), Some(30));
        assert_eq!(
            t.written(registers::FR_FDG_SEL0),
            Some(registers::FDG_SEL0_HCG)
        );
        // Frame length 2250, exposure 1500 -> register 749 = 0x02ed.
        assert_eq!(t.written(registers::EXPOSURE), Some(0xed));
        assert_eq!(t.written(registers::EXPOSURE + 1), Some(0x02));
        // Running: out of standby, master timing started.
        assert_eq!(t.written(registers::STANDBY), Some(0x00));
        assert_eq!(t.written(registers::XMSTA), Some(0x00));
    });

    sensor.stop_streaming().unwrap();
    assert!(!sensor.is_streaming());
    sensor.with_transport(|t| {
        assert_eq!(t.written(registers::STANDBY), Some(0x01));
        assert_eq!(t.written(registers::XMSTA), Some(0x01));
    });

    sensor.power_off();
    assert!(!sensor.is_powered());
}

#[test]
fn test_four_lane_link_setup() {
    let sensor = attach(4);
    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();

    sensor.with_transport(|t| {
        assert_eq!(t.written(registers::CSI_LANE_MODE), Some(0x03));
        assert_eq!(
            t.written(registers::LANE_RATE),
            Some(registers::LANE_RATE_594)
        );
    });
    assert_eq!(sensor.link_frequencies(), &[297_000_000]);
}

#[test]
fn test_configure_before_power_up() {
    let sensor = attach(2);

    // Everything configured while the device is off.
    sensor.set_gain(50).unwrap();
    sensor.set_exposure(2000).unwrap();
    sensor.set_horizontal_blank(4032).unwrap();
    sensor.set_flip(false, true).unwrap();
    sensor.with_transport(|t| assert!(t.journal().is_empty()));

    // Streaming requires the caller to power the device first.
    assert!(matches!(
        sensor.start_streaming(),
        Err(SensorError::Sequence(_))
    ));

    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();

    sensor.with_transport(|t| {
        assert_eq!(t.written(registers::GAIN), Some(50));
        assert_eq!(
            t.written(registers::FR_FDG_SEL0),
            Some(registers::FDG_SEL0_LCG)
        );
        // (4032 + 3856) / 2 = 3944 = 0x0f68.
        assert_eq!(t.written(registers::HMAX), Some(0x68));
        assert_eq!(t.written(registers::HMAX + 1), Some(0x0f));
        assert_eq!(t.written(registers::FLIP_WINMODEH), Some(0x00));
        assert_eq!(t.written(registers::FLIP_WINMODEV), Some(0x01));
    });
}

#[test]
fn test_exposure_bound_follows_published_range() {
    let sensor = attach(2);

    // Default mode: frame length 2250, so 2248 is the last valid value.
    assert!(matches!(
        sensor.set_exposure(2250),
        Err(SensorError::Range { .. })
    ));
    sensor.set_exposure(2248).unwrap();

    // Raising the vertical blank widens the window.
    sensor.set_vertical_blank(500).unwrap();
    sensor.set_exposure(2500).unwrap();

    // Shrinking it back clamps the stored exposure.
    sensor.set_vertical_blank(70).unwrap();
    assert_eq!(sensor.controls().exposure, 2246);
    assert!(matches!(
        sensor.set_exposure(2500),
        Err(SensorError::Range { .. })
    ));
}

#[test]
fn test_exposure_constant_across_vblank_changes_while_streaming() {
    let sensor = attach(2);
    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();
    sensor.set_exposure(1000).unwrap();

    sensor.with_transport(|t| {
        // 2250 - 1000 - 1 = 1249 = 0x04e1.
        assert_eq!(t.written(registers::EXPOSURE), Some(0xe1));
        assert_eq!(t.written(registers::EXPOSURE + 1), Some(0x04));
    });

    sensor.set_vertical_blank(400).unwrap();
    sensor.with_transport(|t| {
        // New frame length 2580 landed in VMAX...
        assert_eq!(t.written(registers::VMAX), Some(0x14));
        assert_eq!(t.written(registers::VMAX + 1), Some(0x0a));
        // ...and the exposure register moved to keep 1000 lines: 1579.
        assert_eq!(t.written(registers::EXPOSURE), Some(0x2b));
        assert_eq!(t.written(registers::EXPOSURE + 1), Some(0x06));
    });
    assert_eq!(sensor.controls().exposure, 1000);
}

#[test]
fn test_mono_variant_format_catalog() {
    init_logging();
    let sensor = Imx585::attach(
        MockTransport::new(),
        MockPins::new(),
        SensorVariant::Mono,
        &config(2),
    )
    .unwrap();

    let applied = sensor
        .set_format(FormatRequest {
            width: 3856,
            height: 2180,
            code: FormatCode::Y12,
        })
        .unwrap();
    assert_eq!(applied.code, FormatCode::Y12);

    // Colour codes fall back to the mono catalog's first entry.
    let applied = sensor
        .set_format(FormatRequest {
            width: 3856,
            height: 2180,
            code: FormatCode::Srggb10,
        })
        .unwrap();
    assert_eq!(applied.code, FormatCode::Y10);
}

#[test]
fn test_restart_reprograms_everything() {
    let sensor = attach(2);
    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();
    sensor.stop_streaming().unwrap();
    sensor.power_off();

    // Second session from cold: the full init sequence runs again.
    sensor.with_transport_mut(|t| t.clear_journal());
    sensor.power_on().unwrap();
    sensor.start_streaming().unwrap();
    sensor.with_transport(|t| {
        assert_eq!(t.written(registers::STANDBY), Some(0x00));
        assert_eq!(t.written(registers::INCK_SEL), Some(0x04));
        assert!(!t.journal().is_empty());
    });
}
