//! Error type shared across the crate.

use derive_more::Display;

/// Errors reported by matrix operations.
///
/// `BusE` is the error type of the underlying I2C implementation. Nothing
/// here is fatal and nothing is retried internally; multi-step operations
/// attempt every step and surface the first error observed.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusE> {
    /// The underlying I2C exchange failed.
    #[display("I2C bus error")]
    Bus(BusE),
    /// A RAM page outside 0..=4 was requested.
    #[display("page out of range")]
    PageOutOfRange,
    /// The (x, y) coordinate lies outside the 9x34 matrix.
    #[display("coordinate outside the matrix")]
    UnmappedCoordinate,
    /// A bulk write exceeded the transport's message buffer.
    #[display("bulk write exceeds message buffer")]
    BufferOverrun,
}

impl<BusE: core::fmt::Debug> core::error::Error for Error<BusE> {}

/// Result alias used throughout the crate.
pub type Result<T, BusE> = core::result::Result<T, Error<BusE>>;
