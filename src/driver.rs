//! The IMX585 device driver.
//!
//! [`Imx585`] owns the whole control plane: the register I/O front end, the
//! power sequencer, the mode/format negotiation and the control parameter
//! manager. The platform injects the two hardware seams (register transport
//! and power pins) at attach; everything else is driven through explicit
//! method calls.
//!
//! # Locking
//!
//! All mutable device state lives behind one mutex. Every public method
//! takes the lock once and holds it for the full read-modify-write
//! sequence, so a control change arriving from another thread cannot
//! interleave with a format change or a stream transition. No method is
//! asynchronous: each one blocks until its register writes and settle
//! delays complete or an error is returned.
//!
//! # Deferred controls
//!
//! Control mutators called while the device is unpowered validate the
//! request, update the in-memory state, and return success without touching
//! hardware. The pending state is replayed as part of the next stream
//! start, which is how "configure before power-up" works without
//! special-casing.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{InckSel, LaneCount, SensorConfig};
use crate::controls::{
    self, ControlRanges, ControlState, Range,
};
use crate::error::{SensorError, SensorResult};
use crate::hal::{PowerPins, RegisterTransport};
use crate::mode::{
    self, FormatCode, Mode, PixelFormat, Rect, SensorVariant, PIXEL_RATE,
};
use crate::power::PowerSequencer;
use crate::regio::RegisterIo;
use crate::registers;
use crate::settings::GLOBAL_SETTINGS;

/// Settle time between the standby transition and master start/stop.
const STANDBY_SETTLE: Duration = Duration::from_millis(30);

/// Default format request used at attach, before the platform asks for
/// anything. Negotiation maps it to the nearest supported mode.
const DEFAULT_WIDTH: u32 = 1936;
/// See [`DEFAULT_WIDTH`].
const DEFAULT_HEIGHT: u32 = 1100;

/// A requested output format and size.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest {
    /// Requested width in pixels.
    pub width: u32,
    /// Requested height in pixels.
    pub height: u32,
    /// Requested wire encoding.
    pub code: FormatCode,
}

/// The format and size actually negotiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedFormat {
    /// Negotiated width in pixels.
    pub width: u32,
    /// Negotiated height in pixels.
    pub height: u32,
    /// Negotiated wire encoding.
    pub code: FormatCode,
    /// Bit depth of the negotiated encoding.
    pub bpp: u8,
}

struct Inner<T: RegisterTransport, P: PowerPins> {
    io: RegisterIo<T>,
    power: PowerSequencer<P>,
    formats: &'static [PixelFormat; 2],
    inck_sel: InckSel,
    lanes: LaneCount,
    mode: &'static Mode,
    format: PixelFormat,
    controls: ControlState,
    ranges: ControlRanges,
    streaming: bool,
    controls_pending: bool,
}

/// Sony IMX585 control-plane driver.
pub struct Imx585<T: RegisterTransport, P: PowerPins> {
    inner: Mutex<Inner<T, P>>,
}

fn check_range(ctrl: &'static str, value: u32, range: Range) -> SensorResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(SensorError::Range {
            ctrl,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

impl<T: RegisterTransport, P: PowerPins> Imx585<T, P> {
    /// Attaches the driver to a sensor.
    ///
    /// Validates the configuration (fatal on any mismatch), negotiates the
    /// default format and publishes the initial control ranges. No register
    /// is touched: the device starts unpowered and in standby.
    pub fn attach(
        transport: T,
        pins: P,
        variant: SensorVariant,
        config: &SensorConfig,
    ) -> SensorResult<Self> {
        let validated = config.validate()?;
        let formats = variant.formats();

        let mode = mode::nearest_mode(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let format = formats[0];

        info!(
            "attached {:?} variant: {}x{}, {} lanes, inck {:?}",
            variant, mode.width, mode.height, config.lanes, validated.inck_sel
        );

        Ok(Self {
            inner: Mutex::new(Inner {
                io: RegisterIo::new(transport),
                power: PowerSequencer::new(pins),
                formats,
                inck_sel: validated.inck_sel,
                lanes: validated.lanes,
                mode,
                format,
                controls: ControlState::defaults_for(mode),
                ranges: ControlRanges::for_mode(mode),
                streaming: false,
                controls_pending: true,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T, P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the power-up sequence. Register access is permitted once this
    /// returns successfully.
    pub fn power_on(&self) -> SensorResult<()> {
        self.lock().power.power_on()
    }

    /// Runs the power-down sequence. Any streaming state is lost.
    pub fn power_off(&self) {
        let mut inner = self.lock();
        inner.power.power_off();
        if inner.streaming {
            inner.streaming = false;
            inner.controls_pending = true;
        }
    }

    /// Whether register access is currently permitted.
    pub fn is_powered(&self) -> bool {
        self.lock().power.is_on()
    }

    /// Whether the sensor is currently streaming.
    pub fn is_streaming(&self) -> bool {
        self.lock().streaming
    }

    /// Sets the analog gain code.
    ///
    /// Also re-applies the conversion-gain mode, which is derived from the
    /// gain code. Deferred while unpowered.
    pub fn set_gain(&self, gain: u32) -> SensorResult<()> {
        let mut inner = self.lock();
        check_range("gain", gain, inner.ranges.gain)?;
        inner.controls.gain = gain;
        if !inner.power.is_on() {
            return inner.defer("gain");
        }
        inner.write_gain()
    }

    /// Sets the exposure in lines.
    ///
    /// The value is aligned down to the published step before use. Deferred
    /// while unpowered.
    pub fn set_exposure(&self, lines: u32) -> SensorResult<()> {
        let mut inner = self.lock();
        let range = inner.ranges.exposure;
        check_range("exposure", lines, range)?;
        inner.controls.exposure = lines - ((lines - range.min) % range.step);
        if !inner.power.is_on() {
            return inner.defer("exposure");
        }
        inner.write_exposure()
    }

    /// Sets the horizontal blank in device clock units.
    ///
    /// Deferred while unpowered.
    pub fn set_horizontal_blank(&self, value: u32) -> SensorResult<()> {
        let mut inner = self.lock();
        check_range("hblank", value, inner.ranges.hblank)?;
        inner.controls.hblank = value;
        if !inner.power.is_on() {
            return inner.defer("hblank");
        }
        inner.write_hmax()
    }

    /// Sets the vertical blank in lines.
    ///
    /// Changing the vertical blank changes the frame length, which both
    /// shifts the physical exposure register's meaning and moves the valid
    /// exposure range. The range is republished first, the logical exposure
    /// is clamped into it, and the exposure register is rewritten after
    /// VMAX so the effective integration time stays what the caller asked
    /// for. Deferred while unpowered (the range still moves immediately).
    pub fn set_vertical_blank(&self, value: u32) -> SensorResult<()> {
        let mut inner = self.lock();
        check_range("vblank", value, inner.ranges.vblank)?;
        inner.controls.vblank = value;

        let vmax = controls::vmax_register(value, inner.mode.height);
        inner.ranges.exposure = controls::exposure_range_for_vmax(vmax);
        inner.controls.exposure = inner.ranges.exposure.clamp(inner.controls.exposure);

        if !inner.power.is_on() {
            return inner.defer("vblank");
        }
        inner.write_vmax()?;
        inner.write_exposure()
    }

    /// Sets the mirror flags.
    ///
    /// Rejected while streaming; the sensor cannot change readout direction
    /// mid-stream. Deferred while unpowered.
    pub fn set_flip(&self, hflip: bool, vflip: bool) -> SensorResult<()> {
        let mut inner = self.lock();
        if inner.streaming {
            return Err(SensorError::Sequence(
                "flip cannot change while streaming".into(),
            ));
        }
        inner.controls.hflip = hflip;
        inner.controls.vflip = vflip;
        if !inner.power.is_on() {
            return inner.defer("flip");
        }
        inner.write_flips()
    }

    /// Probes what a format request would negotiate to, without side
    /// effects.
    pub fn try_format(&self, request: FormatRequest) -> AppliedFormat {
        let inner = self.lock();
        let mode = mode::nearest_mode(request.width, request.height);
        let format = mode::select_format(inner.formats, request.code);
        AppliedFormat {
            width: mode.width,
            height: mode.height,
            code: format.code,
            bpp: format.bpp,
        }
    }

    /// Negotiates and commits a format request.
    ///
    /// Picks the nearest mode and the matching catalog format (falling back
    /// to the catalog's first entry), republishes every control range for
    /// the new geometry, resets the blanking controls to the new nominal
    /// timing, and reinterprets the previous logical exposure against the
    /// new range. Rejected while streaming.
    pub fn set_format(&self, request: FormatRequest) -> SensorResult<AppliedFormat> {
        let mut inner = self.lock();
        if inner.streaming {
            return Err(SensorError::Sequence(
                "format cannot change while streaming".into(),
            ));
        }

        let mode = mode::nearest_mode(request.width, request.height);
        let format = mode::select_format(inner.formats, request.code);
        let previous_exposure = inner.controls.exposure;

        inner.mode = mode;
        inner.format = format;
        inner.ranges = ControlRanges::for_mode(mode);
        inner.controls.hblank = inner.ranges.hblank.min;
        inner.controls.vblank = inner.ranges.vblank.min;
        inner.controls.exposure = inner.ranges.exposure.clamp(previous_exposure);
        inner.controls_pending = true;

        debug!(
            "format committed: {}x{} {:?} {}bpp",
            mode.width, mode.height, format.code, format.bpp
        );

        if inner.power.is_on() {
            inner.write_exposure()?;
        }

        Ok(AppliedFormat {
            width: mode.width,
            height: mode.height,
            code: format.code,
            bpp: format.bpp,
        })
    }

    /// Runs the full device initialization sequence and starts streaming.
    ///
    /// Requires the device to be powered; this never powers it implicitly,
    /// so the caller keeps sole ownership of the power reference. On any
    /// transport failure the sequence aborts where it is, streaming stays
    /// off, and the device is left powered for the caller to release.
    pub fn start_streaming(&self) -> SensorResult<()> {
        let mut inner = self.lock();
        if !inner.power.is_on() {
            return Err(SensorError::Sequence(
                "stream start requires the device to be powered".into(),
            ));
        }
        if inner.streaming {
            return Err(SensorError::Sequence("already streaming".into()));
        }

        info!(
            "starting stream: {}x{} {:?}",
            inner.mode.width, inner.mode.height, inner.format.code
        );

        inner.io.write_table(GLOBAL_SETTINGS)?;
        let inck_sel = inner.inck_sel.register_value();
        inner.io.write_reg(registers::INCK_SEL, inck_sel)?;

        // 10-bit and 12-bit use the same selector for AD conversion and
        // output mode.
        let ad_md_bit = if inner.format.bpp == 12 { 0x01 } else { 0x00 };
        inner.io.write_reg(registers::ADBIT, ad_md_bit)?;
        inner.io.write_reg(registers::MDBIT, ad_md_bit)?;

        let mode_registers = inner.mode.registers;
        inner.io.write_table(mode_registers)?;

        let lane_mode = inner.lanes.lane_mode();
        inner.io.write_reg(registers::CSI_LANE_MODE, lane_mode)?;
        let lane_rate = inner.lanes.lane_rate();
        inner.io.write_reg(registers::LANE_RATE, lane_rate)?;

        inner.apply_controls()?;
        inner.controls_pending = false;

        inner.io.write_reg(registers::STANDBY, 0x00)?;
        thread::sleep(STANDBY_SETTLE);
        inner.io.write_reg(registers::XMSTA, 0x00)?;

        inner.streaming = true;
        info!("stream running");
        Ok(())
    }

    /// Stops streaming and returns the sensor to standby. A no-op when not
    /// streaming.
    pub fn stop_streaming(&self) -> SensorResult<()> {
        let mut inner = self.lock();
        if !inner.streaming {
            warn!("stop requested while not streaming");
            return Ok(());
        }

        inner.io.write_reg(registers::STANDBY, 0x01)?;
        thread::sleep(STANDBY_SETTLE);
        inner.io.write_reg(registers::XMSTA, 0x01)?;

        inner.streaming = false;
        info!("stream stopped");
        Ok(())
    }

    /// The currently negotiated mode.
    pub fn current_mode(&self) -> &'static Mode {
        self.lock().mode
    }

    /// The currently negotiated pixel format.
    pub fn current_format(&self) -> PixelFormat {
        self.lock().format
    }

    /// The currently published control ranges.
    pub fn ranges(&self) -> ControlRanges {
        self.lock().ranges
    }

    /// The current logical control values.
    pub fn controls(&self) -> ControlState {
        self.lock().controls
    }

    /// The active mode's crop rectangle relative to the native array.
    pub fn crop(&self) -> Rect {
        self.lock().mode.crop
    }

    /// Pixel rate on the image wire.
    pub fn pixel_rate(&self) -> u64 {
        PIXEL_RATE
    }

    /// Link frequencies in use for the configured lane count.
    pub fn link_frequencies(&self) -> &'static [u64] {
        self.lock().lanes.link_frequencies()
    }

    /// Runs `f` against the register transport, for diagnostics.
    pub fn with_transport<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.lock().io.transport())
    }

    /// Runs `f` against the register transport with exclusive access.
    pub fn with_transport_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self.lock().io.transport_mut())
    }

    /// Runs `f` against the power pins, for diagnostics.
    pub fn with_pins<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(self.lock().power.pins())
    }
}

impl<T: RegisterTransport, P: PowerPins> Inner<T, P> {
    /// Records a deferred control write while unpowered. Always `Ok`: this
    /// is a defined success with deferred effect, not an error.
    fn defer(&mut self, ctrl: &str) -> SensorResult<()> {
        self.controls_pending = true;
        debug!("{ctrl} deferred until next stream start (device unpowered)");
        Ok(())
    }

    fn write_gain(&mut self) -> SensorResult<()> {
        self.io
            .write_buffered(registers::GAIN, 2, self.controls.gain)?;
        self.io.write_reg(
            registers::FR_FDG_SEL0,
            controls::gain_mode(self.controls.gain),
        )
    }

    fn write_exposure(&mut self) -> SensorResult<()> {
        let fl = controls::frame_length(self.mode.height, self.controls.vblank);
        let reg = controls::exposure_register(fl, self.controls.exposure);
        self.io.write_buffered(registers::EXPOSURE, 3, reg)
    }

    fn write_hmax(&mut self) -> SensorResult<()> {
        let hmax = controls::hmax_register(self.controls.hblank, self.mode.width);
        self.io.write_buffered(registers::HMAX, 2, hmax)
    }

    fn write_vmax(&mut self) -> SensorResult<()> {
        let vmax = controls::vmax_register(self.controls.vblank, self.mode.height);
        self.io.write_buffered(registers::VMAX, 3, vmax)
    }

    fn write_flips(&mut self) -> SensorResult<()> {
        self.io
            .write_reg(registers::FLIP_WINMODEH, u8::from(self.controls.hflip))?;
        self.io
            .write_reg(registers::FLIP_WINMODEV, u8::from(self.controls.vflip))
    }

    /// Replays every current control value. Order does not matter for
    /// consistency (the values are mutually consistent by construction),
    /// but VMAX goes out before the exposure register it reinterprets.
    fn apply_controls(&mut self) -> SensorResult<()> {
        self.write_gain()?;
        self.write_hmax()?;
        self.write_vmax()?;
        self.write_exposure()?;
        self.write_flips()
    }
}
