use core::cell::Cell;

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource, SevenBitAddress};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorType, I2c, Operation};
use heapless::{LinearMap, Vec};

use crate::error::Bmp280Error;
use crate::measurement::Measurement;
use crate::register::Register;
use crate::register::data::DATA_REGISTERS;
use crate::sampler::{Sink, StopSignal};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FakeBusError {
    Nack,
}

impl embedded_hal::i2c::Error for FakeBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
    }
}

/// One I2C transaction as seen by the fake bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    Write { address: SevenBitAddress, byte: u8 },
    Read { address: SevenBitAddress, len: usize },
}

/// Register-addressed fake I2C device.
///
/// A write sets the register pointer, a read returns the mocked bytes starting at the pointer.
/// Every transaction is logged, including one that fails.
pub struct FakeBus {
    regs: LinearMap<u8, u8, 16>,
    fail_on: Option<u8>,
    pointer: u8,
    transfers: Vec<Transfer, 128>,
}

impl FakeBus {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
            fail_on: None,
            pointer: 0,
            transfers: Vec::new(),
        }
    }

    pub fn with_register(&mut self, reg: Register, value: u8) {
        self.regs.insert(reg.addr(), value).unwrap();
    }

    /// Mocks registers 0xF7..=0xFC in address order.
    pub fn with_data(&mut self, data: [u8; 6]) {
        for (reg, value) in DATA_REGISTERS.into_iter().zip(data) {
            self.with_register(reg, value);
        }
    }

    /// NACKs every address write that selects `reg`.
    pub fn fail_on(&mut self, reg: Register) {
        self.fail_on = Some(reg.addr());
    }

    pub fn recover(&mut self) {
        self.fail_on = None;
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Register addresses selected so far, in order.
    pub fn selected_registers(&self) -> Vec<u8, 128> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Write { byte, .. } => Some(*byte),
                Transfer::Read { .. } => None,
            })
            .collect()
    }
}

impl ErrorType for FakeBus {
    type Error = FakeBusError;
}

impl I2c for FakeBus {
    async fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let byte = bytes[0];
                    self.transfers.push(Transfer::Write { address, byte }).unwrap();
                    if self.fail_on == Some(byte) {
                        return Err(FakeBusError::Nack);
                    }
                    self.pointer = byte;
                }
                Operation::Read(buf) => {
                    self.transfers.push(Transfer::Read { address, len: buf.len() }).unwrap();
                    for (i, b) in buf.iter_mut().enumerate() {
                        let addr = self.pointer.wrapping_add(i as u8);
                        *b = match self.regs.get(&addr) {
                            Some(value) => *value,
                            None => panic!("No mocked value for register 0x{:x}", addr),
                        };
                    }
                }
            }
        }

        Ok(())
    }
}

/// Delay that returns immediately and keeps count of the requested time.
pub struct FakeDelay {
    pub waited_ns: u64,
}

impl FakeDelay {
    pub fn new() -> Self {
        FakeDelay { waited_ns: 0 }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waited_ns += ns as u64;
    }
}

pub struct RecordingSink {
    pub outcomes: Vec<Result<Measurement, Bmp280Error<FakeBusError>>, 16>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink { outcomes: Vec::new() }
    }
}

impl Sink<FakeBusError> for RecordingSink {
    fn report(&mut self, outcome: &Result<Measurement, Bmp280Error<FakeBusError>>) {
        self.outcomes.push(*outcome).unwrap();
    }
}

/// Lets `cycles` sampling cycles start, then requests a stop.
pub struct StopAfter {
    remaining: Cell<u32>,
}

impl StopAfter {
    pub fn new(cycles: u32) -> Self {
        StopAfter { remaining: Cell::new(cycles) }
    }
}

impl StopSignal for StopAfter {
    fn is_stop_requested(&self) -> bool {
        match self.remaining.get() {
            0 => true,
            n => {
                self.remaining.set(n - 1);
                false
            }
        }
    }
}
