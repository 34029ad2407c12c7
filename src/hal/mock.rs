//! Mock hardware implementations.
//!
//! Journaling fakes for the two collaborator traits, used by the unit and
//! integration tests to assert on exact register write order and power
//! sequencing without physical hardware.
//!
//! # Available Mocks
//!
//! - `MockTransport` - In-memory register file that records every write
//! - `MockPins` - Power pin recorder with programmable enable failures

use std::collections::HashMap;

use crate::error::{SensorError, SensorResult};
use crate::hal::{PowerPins, RegisterTransport};

/// In-memory register transport that journals every write.
///
/// Reads come from a register map seeded by previous writes (unwritten
/// registers read as zero). A single address can be marked as failing to
/// exercise mid-sequence error paths.
#[derive(Default)]
pub struct MockTransport {
    regs: HashMap<u16, u8>,
    journal: Vec<(u16, u8)>,
    fail_on: Option<u16>,
}

impl MockTransport {
    /// Creates an empty register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every transfer touching `addr` fail.
    pub fn fail_on(&mut self, addr: u16) {
        self.fail_on = Some(addr);
    }

    /// Clears a previously configured failure address.
    pub fn clear_failure(&mut self) {
        self.fail_on = None;
    }

    /// Last value written to `addr`, if any.
    pub fn written(&self, addr: u16) -> Option<u8> {
        self.regs.get(&addr).copied()
    }

    /// Full write journal in issue order.
    pub fn journal(&self) -> &[(u16, u8)] {
        &self.journal
    }

    /// Writes issued to addresses in `range`, in issue order.
    pub fn writes_in(&self, range: std::ops::RangeInclusive<u16>) -> Vec<(u16, u8)> {
        self.journal
            .iter()
            .filter(|(addr, _)| range.contains(addr))
            .copied()
            .collect()
    }

    /// Forgets the journal, keeping register contents.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn check(&self, addr: u16) -> SensorResult<()> {
        if self.fail_on == Some(addr) {
            return Err(SensorError::transport(addr, "injected failure"));
        }
        Ok(())
    }
}

impl RegisterTransport for MockTransport {
    fn read(&mut self, addr: u16) -> SensorResult<u8> {
        self.check(addr)?;
        Ok(self.regs.get(&addr).copied().unwrap_or(0))
    }

    fn write(&mut self, addr: u16, value: u8) -> SensorResult<()> {
        self.check(addr)?;
        self.regs.insert(addr, value);
        self.journal.push((addr, value));
        Ok(())
    }
}

/// One observed power pin transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// External clock enabled.
    ClockOn,
    /// External clock disabled.
    ClockOff,
    /// Supply rails enabled.
    SuppliesOn,
    /// Supply rails disabled.
    SuppliesOff,
    /// Reset line asserted (sensor held in reset).
    ResetAsserted,
    /// Reset line released.
    ResetReleased,
}

/// Power pin recorder with programmable enable failures.
#[derive(Default)]
pub struct MockPins {
    events: Vec<PinEvent>,
    fail_clock: bool,
    fail_supplies: bool,
}

impl MockPins {
    /// Creates a recorder with all enables succeeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next clock enable fail.
    pub fn fail_clock(&mut self) {
        self.fail_clock = true;
    }

    /// Makes the next supply enable fail.
    pub fn fail_supplies(&mut self) {
        self.fail_supplies = true;
    }

    /// Observed pin transitions in order.
    pub fn events(&self) -> &[PinEvent] {
        &self.events
    }
}

impl PowerPins for MockPins {
    fn enable_clock(&mut self) -> SensorResult<()> {
        if self.fail_clock {
            return Err(SensorError::Sequence("clock enable failed".into()));
        }
        self.events.push(PinEvent::ClockOn);
        Ok(())
    }

    fn disable_clock(&mut self) {
        self.events.push(PinEvent::ClockOff);
    }

    fn enable_supplies(&mut self) -> SensorResult<()> {
        if self.fail_supplies {
            return Err(SensorError::Sequence("supply enable failed".into()));
        }
        self.events.push(PinEvent::SuppliesOn);
        Ok(())
    }

    fn disable_supplies(&mut self) {
        self.events.push(PinEvent::SuppliesOff);
    }

    fn set_reset(&mut self, asserted: bool) {
        self.events.push(if asserted {
            PinEvent::ResetAsserted
        } else {
            PinEvent::ResetReleased
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_journals_writes_in_order() {
        let mut t = MockTransport::new();
        t.write(0x3000, 0x01).unwrap();
        t.write(0x3001, 0x00).unwrap();
        assert_eq!(t.journal(), &[(0x3000, 0x01), (0x3001, 0x00)]);
        assert_eq!(t.written(0x3000), Some(0x01));
    }

    #[test]
    fn test_transport_reads_back_writes() {
        let mut t = MockTransport::new();
        assert_eq!(t.read(0x3014).unwrap(), 0);
        t.write(0x3014, 0x04).unwrap();
        assert_eq!(t.read(0x3014).unwrap(), 0x04);
    }

    #[test]
    fn test_transport_injected_failure() {
        let mut t = MockTransport::new();
        t.fail_on(0x3050);
        assert!(t.write(0x3050, 0xff).is_err());
        // The failed write must not land in the register file.
        assert_eq!(t.written(0x3050), None);
    }

    #[test]
    fn test_pins_record_transitions() {
        let mut pins = MockPins::new();
        pins.enable_clock().unwrap();
        pins.set_reset(false);
        pins.disable_clock();
        assert_eq!(
            pins.events(),
            &[PinEvent::ClockOn, PinEvent::ResetReleased, PinEvent::ClockOff]
        );
    }
}
