//! Paged register transport over the I2C bus.
//!
//! The controller exposes its RAM through five pages selected via a locked
//! page-select register. [`Transport`] owns the bus handle and the one piece
//! of session state: which page is currently selected. Selection is cached,
//! so consecutive operations on one page pay for a single select.
//!
//! No operation retries and none short-circuits: every sub-step of a
//! multi-step operation is attempted even after an earlier failure, and the
//! first error observed is what the caller gets back.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::{
    Error, Result,
    registers::{COMMAND_LOCK, DEVICE_ADDRESS, EVEN_PAGE_REGISTERS, LOCK_KEY, PAGE_COUNT, PAGE_SELECT},
};

// Register byte plus the largest page's worth of values.
const BULK_MESSAGE_CAPACITY: usize = EVEN_PAGE_REGISTERS + 1;

/// Blocking transport session for one controller on one bus.
///
/// The page cache assumes this session is the only writer of the chip's
/// page-select register; `&mut self` on every operation enforces a single
/// logical owner. Sharing a bus between sessions requires external mutual
/// exclusion.
pub struct Transport<I2C> {
    i2c: I2C,
    /// Currently selected RAM page; `None` until the first successful
    /// selection and after any failed one.
    current_page: Option<u8>,
}

impl<I2C: I2c> Transport<I2C> {
    /// Create a session over the given bus. No bus traffic is issued; the
    /// selected page starts out unknown.
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            current_page: None,
        }
    }

    /// Consume the session and hand the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Unlock the page-select register for one write.
    ///
    /// The lock re-arms after every page select, so this precedes each one.
    pub fn unlock(&mut self) -> Result<(), I2C::Error> {
        self.i2c
            .write(DEVICE_ADDRESS, &[COMMAND_LOCK, LOCK_KEY])
            .map_err(Error::Bus)
    }

    /// Select the RAM page for subsequent reads and writes.
    ///
    /// A cache hit returns without touching the bus. Otherwise both the
    /// unlock and the select write are attempted; the cache is updated only
    /// when both succeed and is reset to unknown on any failure, so the next
    /// call re-attempts the full sequence.
    pub fn select_page(&mut self, page: u8) -> Result<(), I2C::Error> {
        if page >= PAGE_COUNT {
            return Err(Error::PageOutOfRange);
        }
        if self.current_page == Some(page) {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("select_page: {=u8}", page);

        let unlocked = self.unlock();
        let selected = self
            .i2c
            .write(DEVICE_ADDRESS, &[PAGE_SELECT, page])
            .map_err(Error::Bus);

        if unlocked.is_ok() && selected.is_ok() {
            self.current_page = Some(page);
        } else {
            self.current_page = None;
        }
        unlocked.and(selected)
    }

    /// Read one register from a page.
    ///
    /// The address write and value read happen in one exchange; it is
    /// attempted even if the page selection failed.
    pub fn read_register(&mut self, page: u8, register: u8) -> Result<u8, I2C::Error> {
        let paged = self.select_page(page);
        let mut value = [0u8; 1];
        let exchanged = self
            .i2c
            .write_read(DEVICE_ADDRESS, &[register], &mut value)
            .map_err(Error::Bus);
        paged.and(exchanged)?;
        Ok(value[0])
    }

    /// Write one register on a page.
    pub fn write_register(&mut self, page: u8, register: u8, value: u8) -> Result<(), I2C::Error> {
        let paged = self.select_page(page);
        let written = self
            .i2c
            .write(DEVICE_ADDRESS, &[register, value])
            .map_err(Error::Bus);
        paged.and(written)
    }

    /// Stream `values` into consecutive registers starting at
    /// `start_register`, in a single transaction.
    ///
    /// Relies on the chip's address auto-increment mode; one page select and
    /// one bus transaction cover the whole slice, which is what makes whole-
    /// frame updates cheap. At most 180 values fit in one message.
    pub fn write_bulk(
        &mut self,
        page: u8,
        start_register: u8,
        values: &[u8],
    ) -> Result<(), I2C::Error> {
        let paged = self.select_page(page);

        let mut message: Vec<u8, BULK_MESSAGE_CAPACITY> = Vec::new();
        if message.push(start_register).is_err() || message.extend_from_slice(values).is_err() {
            // Still report a page-select failure first; it happened first.
            return paged.and(Err(Error::BufferOverrun));
        }

        let written = self.i2c.write(DEVICE_ADDRESS, &message).map_err(Error::Bus);
        paged.and(written)
    }
}
