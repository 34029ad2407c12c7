//! Register I/O helpers over a [`RegisterTransport`].
//!
//! Wraps the raw byte transport with the three access patterns the driver
//! needs: single-register writes, settings-table application, and the
//! atomic buffered multi-byte write protocol built on the REGHOLD latch.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::error::SensorResult;
use crate::hal::RegisterTransport;
use crate::registers::{RegVal, REGHOLD};

/// Settle time after applying a settings table.
const TABLE_SETTLE: Duration = Duration::from_millis(10);

/// Register I/O front end. No state is retained between calls.
pub struct RegisterIo<T: RegisterTransport> {
    transport: T,
}

impl<T: RegisterTransport> RegisterIo<T> {
    /// Wraps a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Consumes the wrapper, returning the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Shared access to the transport, for inspection.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exclusive access to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Reads one register.
    pub fn read_reg(&mut self, addr: u16) -> SensorResult<u8> {
        self.transport.read(addr)
    }

    /// Writes one register.
    pub fn write_reg(&mut self, addr: u16, value: u8) -> SensorResult<()> {
        self.transport.write(addr, value)
    }

    /// Applies a settings table in order, then blocks for the mandatory
    /// 10ms settle time.
    pub fn write_table(&mut self, table: &[RegVal]) -> SensorResult<()> {
        for entry in table {
            self.transport.write(entry.addr, entry.value)?;
        }
        thread::sleep(TABLE_SETTLE);
        Ok(())
    }

    /// Writes a multi-byte little-endian value to `nr_regs` consecutive
    /// registers starting at `base`, atomically with respect to the
    /// sensor's internal latch timing.
    ///
    /// Protocol: REGHOLD is set, each byte is written low to high, then
    /// REGHOLD is released so the sensor applies all bytes as one update.
    ///
    /// On a mid-sequence transport failure the error propagates and
    /// REGHOLD is intentionally left set: releasing it after a known-bad
    /// partial write would latch a torn value into the running frame.
    /// Recovery is a stream restart, which rewrites every control.
    pub fn write_buffered(&mut self, base: u16, nr_regs: u8, value: u32) -> SensorResult<()> {
        debug!("buffered write: 0x{base:04x} x{nr_regs} = 0x{value:06x}");

        self.transport.write(REGHOLD, 0x01)?;

        for i in 0..nr_regs {
            let byte = (value >> (i * 8)) as u8;
            self.transport.write(base + u16::from(i), byte)?;
        }

        self.transport.write(REGHOLD, 0x00)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::MockTransport;

    #[test]
    fn test_buffered_write_protocol() {
        let mut io = RegisterIo::new(MockTransport::new());
        io.write_buffered(0x3028, 3, 0x0008ca).unwrap();

        // Exactly: hold set, three value bytes in ascending address order,
        // hold clear. Nothing else.
        assert_eq!(
            io.transport().journal(),
            &[
                (REGHOLD, 0x01),
                (0x3028, 0xca),
                (0x3029, 0x08),
                (0x302a, 0x00),
                (REGHOLD, 0x00),
            ]
        );
    }

    #[test]
    fn test_buffered_write_two_bytes() {
        let mut io = RegisterIo::new(MockTransport::new());
        io.write_buffered(0x306c, 2, 0x1234).unwrap();
        assert_eq!(
            io.transport().journal(),
            &[
                (REGHOLD, 0x01),
                (0x306c, 0x34),
                (0x306d, 0x12),
                (REGHOLD, 0x00),
            ]
        );
    }

    #[test]
    fn test_buffered_write_failure_leaves_hold_set() {
        let mut transport = MockTransport::new();
        transport.fail_on(0x3029);
        let mut io = RegisterIo::new(transport);

        assert!(io.write_buffered(0x3028, 3, 0x0008ca).is_err());

        // Hold was set, the first byte landed, and no hold-clear followed.
        assert_eq!(
            io.transport().journal(),
            &[(REGHOLD, 0x01), (0x3028, 0xca)]
        );
    }

    #[test]
    fn test_table_write_order() {
        let table = [
            RegVal { addr: 0x3018, value: 0x10 },
            RegVal { addr: 0x3031, value: 0x00 },
        ];
        let mut io = RegisterIo::new(MockTransport::new());
        io.write_table(&table).unwrap();
        assert_eq!(io.transport().journal(), &[(0x3018, 0x10), (0x3031, 0x00)]);
    }
}
