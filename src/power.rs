//! Power sequencing state machine.
//!
//! Orders clock, supply and reset-line transitions with the mandated settle
//! delays. Register access is only meaningful in the `On` state; the driver
//! checks [`PowerSequencer::is_on`] before touching hardware.
//!
//! Power-up: clock, then supplies, a short settle, reset release, then a
//! 30ms settle before the first register access. Power-down is the exact
//! reverse with no settle. A failed enable step unwinds whatever was
//! already enabled before the error propagates.

use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::error::SensorResult;
use crate::hal::PowerPins;

/// Settle after the supply rails come up, before reset release.
const SUPPLY_SETTLE: Duration = Duration::from_micros(2);

/// Settle after reset release, before register access is permitted.
const RESET_SETTLE: Duration = Duration::from_millis(30);

/// Power state of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Everything off, reset asserted.
    Off,
    /// Power-up sequence in progress.
    Powering,
    /// Powered and settled; register access permitted.
    On,
    /// Power-down sequence in progress.
    PoweringDown,
}

/// Drives the sensor's power pins through the ordered on/off sequences.
pub struct PowerSequencer<P: PowerPins> {
    pins: P,
    state: PowerState,
}

impl<P: PowerPins> PowerSequencer<P> {
    /// Starts in the `Off` state.
    pub fn new(pins: P) -> Self {
        Self {
            pins,
            state: PowerState::Off,
        }
    }

    /// Whether register access is currently permitted.
    pub fn is_on(&self) -> bool {
        self.state == PowerState::On
    }

    /// Current state.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Shared access to the pins, for inspection.
    pub fn pins(&self) -> &P {
        &self.pins
    }

    /// Runs the power-up sequence. A no-op when already on.
    ///
    /// On failure the already-enabled resources are unwound: a clock
    /// failure leaves nothing enabled, a supply failure disables the clock
    /// again, and the state returns to `Off`.
    pub fn power_on(&mut self) -> SensorResult<()> {
        if self.state == PowerState::On {
            return Ok(());
        }
        self.state = PowerState::Powering;
        debug!("power up: enabling clock and supplies");

        if let Err(err) = self.pins.enable_clock() {
            self.state = PowerState::Off;
            return Err(err);
        }

        if let Err(err) = self.pins.enable_supplies() {
            self.pins.disable_clock();
            self.state = PowerState::Off;
            return Err(err);
        }

        thread::sleep(SUPPLY_SETTLE);
        self.pins.set_reset(false);
        thread::sleep(RESET_SETTLE);

        self.state = PowerState::On;
        info!("sensor powered on");
        Ok(())
    }

    /// Runs the power-down sequence. A no-op when already off. No settle
    /// delay is required on the way down.
    pub fn power_off(&mut self) {
        if self.state == PowerState::Off {
            return;
        }
        self.state = PowerState::PoweringDown;

        self.pins.disable_clock();
        self.pins.set_reset(true);
        self.pins.disable_supplies();

        self.state = PowerState::Off;
        info!("sensor powered off");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::{MockPins, PinEvent};

    #[test]
    fn test_power_on_order() {
        let mut seq = PowerSequencer::new(MockPins::new());
        seq.power_on().unwrap();
        assert!(seq.is_on());
        assert_eq!(
            seq.pins().events(),
            &[
                PinEvent::ClockOn,
                PinEvent::SuppliesOn,
                PinEvent::ResetReleased,
            ]
        );
    }

    #[test]
    fn test_power_off_reverse_order() {
        let mut seq = PowerSequencer::new(MockPins::new());
        seq.power_on().unwrap();
        seq.power_off();
        assert_eq!(seq.state(), PowerState::Off);
        assert_eq!(
            &seq.pins().events()[3..],
            &[
                PinEvent::ClockOff,
                PinEvent::ResetAsserted,
                PinEvent::SuppliesOff,
            ]
        );
    }

    #[test]
    fn test_clock_failure_leaves_nothing_enabled() {
        let mut pins = MockPins::new();
        pins.fail_clock();
        let mut seq = PowerSequencer::new(pins);

        assert!(seq.power_on().is_err());
        assert_eq!(seq.state(), PowerState::Off);
        assert!(seq.pins().events().is_empty());
    }

    #[test]
    fn test_supply_failure_unwinds_clock() {
        let mut pins = MockPins::new();
        pins.fail_supplies();
        let mut seq = PowerSequencer::new(pins);

        assert!(seq.power_on().is_err());
        assert_eq!(seq.state(), PowerState::Off);
        assert_eq!(seq.pins().events(), &[PinEvent::ClockOn, PinEvent::ClockOff]);
    }

    #[test]
    fn test_repeated_transitions_are_noops() {
        let mut seq = PowerSequencer::new(MockPins::new());
        seq.power_off();
        assert!(seq.pins().events().is_empty());

        seq.power_on().unwrap();
        seq.power_on().unwrap();
        // Second power_on added no events.
        assert_eq!(seq.pins().events().len(), 3);
    }
}
