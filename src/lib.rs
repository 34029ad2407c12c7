//! Control-plane driver for the Sony IMX585 CMOS image sensor.
//!
//! The IMX585 is a 4K rolling-shutter sensor configured over a 16-bit
//! address / 8-bit value register interface and streaming over a CSI-2
//! serial link. This crate owns everything on the control side: power
//! sequencing, register programming, mode and pixel-format negotiation,
//! the five interdependent exposure/gain/blanking/flip controls, and the
//! standby/run stream lifecycle. Image data never passes through it.
//!
//! The platform provides two small trait implementations — a
//! [`RegisterTransport`](hal::RegisterTransport) for register access and
//! [`PowerPins`](hal::PowerPins) for the clock, supply and reset lines —
//! and drives the sensor through [`Imx585`].
//!
//! # Example
//!
//! ```no_run
//! use imx585::{FormatCode, FormatRequest, Imx585, SensorConfig, SensorVariant};
//! # use imx585::hal::mock::{MockPins, MockTransport};
//!
//! # fn main() -> imx585::SensorResult<()> {
//! let config = SensorConfig {
//!     xclk_hz: 24_000_000,
//!     lanes: 2,
//!     link_frequencies: vec![594_000_000],
//! };
//!
//! let sensor = Imx585::attach(
//!     MockTransport::new(),
//!     MockPins::new(),
//!     SensorVariant::Colour,
//!     &config,
//! )?;
//!
//! sensor.set_format(FormatRequest {
//!     width: 3856,
//!     height: 2180,
//!     code: FormatCode::Srggb12,
//! })?;
//! sensor.set_exposure(1000)?;
//!
//! sensor.power_on()?;
//! sensor.start_streaming()?;
//! // ...
//! sensor.stop_streaming()?;
//! sensor.power_off();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controls;
pub mod driver;
pub mod error;
pub mod hal;
pub mod mode;
pub mod power;
pub mod regio;
pub mod registers;
pub mod settings;

pub use config::{InckSel, LaneCount, SensorConfig};
pub use controls::{ControlRanges, ControlState, Range};
pub use driver::{AppliedFormat, FormatRequest, Imx585};
pub use error::{SensorError, SensorResult};
pub use mode::{FormatCode, Mode, PixelFormat, Rect, SensorVariant};
pub use power::PowerState;
