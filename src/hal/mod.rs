//! Hardware abstraction seams.
//!
//! The driver core is generic over two collaborator traits supplied by the
//! platform at construction: a byte-addressed register transport and the
//! power pins (clock, supply rails, reset line). Everything the driver
//! knows about the outside world flows through these two traits, which is
//! what lets the whole control path run against the journaling fakes in
//! [`mock`].

pub mod mock;

use crate::error::SensorResult;

/// Byte-addressed register transport to the sensor.
///
/// Implementations provide whatever bus addressing, caching and wire-level
/// retry the platform wants; the driver treats every call as a single
/// transfer and never retries a failure itself.
pub trait RegisterTransport: Send {
    /// Reads one register.
    fn read(&mut self, addr: u16) -> SensorResult<u8>;

    /// Writes one register.
    fn write(&mut self, addr: u16, value: u8) -> SensorResult<()>;
}

/// Clock, supply-rail and reset-line access for the power sequencer.
///
/// Enables are fallible; disables are not, matching the usual platform
/// contract that tearing resources down cannot fail.
pub trait PowerPins: Send {
    /// Enables the external clock.
    fn enable_clock(&mut self) -> SensorResult<()>;

    /// Disables the external clock.
    fn disable_clock(&mut self);

    /// Enables the supply rails in their declared order (vdda, vddd, vdddo).
    fn enable_supplies(&mut self) -> SensorResult<()>;

    /// Disables the supply rails.
    fn disable_supplies(&mut self);

    /// Drives the reset line. `true` holds the sensor in reset.
    fn set_reset(&mut self, asserted: bool);
}
