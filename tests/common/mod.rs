#![allow(missing_docs, dead_code)]
//! Simulated matrix controller for host-level tests.
//!
//! Models the chip behaviors the driver relies on: the page-select lock that
//! re-arms after every select, paged RAM banks, address auto-increment within
//! one write, and read-back through a write-address/read-value exchange.
//! Every attempted write payload is logged so tests can assert transaction
//! shape, and upcoming transactions can be made to fail for error-path tests.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};
use matrix_envoy::registers::DEVICE_ADDRESS;

pub struct ChipSim {
    pages: [[u8; 256]; 5],
    page_select: u8,
    unlocked: bool,
    address_pointer: u8,
    /// Every write payload attempted, in order, including failed ones.
    pub writes: Vec<Vec<u8>>,
    fail_next: usize,
}

impl ChipSim {
    pub fn new() -> Self {
        Self {
            pages: [[0; 256]; 5],
            page_select: 0,
            unlocked: false,
            address_pointer: 0,
            writes: Vec::new(),
            fail_next: 0,
        }
    }

    /// Make the next `count` transactions fail. Failed writes are still
    /// logged but have no effect on chip state.
    pub fn fail_transactions(&mut self, count: usize) {
        self.fail_next = count;
    }

    pub fn register(&self, page: u8, register: u8) -> u8 {
        self.pages[page as usize][register as usize]
    }

    pub fn selected_page(&self) -> u8 {
        self.page_select
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    fn apply_write(&mut self, bytes: &[u8]) {
        let Some((&register, values)) = bytes.split_first() else {
            return;
        };
        self.address_pointer = register;
        match register {
            0xFE => {
                self.unlocked = values.first() == Some(&0xC5);
            }
            0xFD => {
                // The lock re-arms after a single page-select write.
                if self.unlocked {
                    if let Some(&page) = values.first() {
                        self.page_select = page;
                    }
                }
                self.unlocked = false;
            }
            _ => {
                let page = &mut self.pages[self.page_select as usize];
                for (offset, &value) in values.iter().enumerate() {
                    page[register as usize + offset] = value;
                }
            }
        }
    }
}

impl ErrorType for ChipSim {
    type Error = ErrorKind;
}

impl I2c for ChipSim {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, DEVICE_ADDRESS, "unexpected device address");

        let failing = self.fail_next > 0;
        if failing {
            self.fail_next -= 1;
        }

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    self.writes.push(bytes.to_vec());
                    if !failing {
                        let bytes = bytes.to_vec();
                        self.apply_write(&bytes);
                    }
                }
                Operation::Read(buffer) => {
                    if !failing {
                        let page = self.pages[self.page_select as usize];
                        for (offset, slot) in buffer.iter_mut().enumerate() {
                            *slot = page[self.address_pointer as usize + offset];
                        }
                    }
                }
            }
        }

        if failing { Err(ErrorKind::Other) } else { Ok(()) }
    }
}
