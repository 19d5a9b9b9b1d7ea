//! Driver for IS31FL3741-class LED matrix controllers over I2C.
//!
//! The controller spreads one 9x34 matrix across four paged RAM banks whose
//! register order does not follow the visible raster. This crate hides both:
//! callers address logical `(x, y)` pixels and pick a value [`Domain`]
//! (brightness vs. current scale); the crate handles page unlocking,
//! selection caching, the piecewise coordinate mapping, and whole-frame
//! streaming over the chip's auto-increment mode.
//!
//! Generic over any [`embedded_hal::i2c::I2c`] implementation; blocking and
//! single-owner by design. Bus/GPIO bring-up (including the shutdown pin)
//! stays with the application.
//!
//! # Glossary
//!
//! - **Page**: one bank of controller RAM, selected through a locked
//!   register before reads and writes.
//! - **Domain**: which of two parallel register layouts an operation
//!   targets: PWM duty ([`Domain::Brightness`]) or current-limiting scale
//!   ([`Domain::CurrentScale`]).
//! - **Gap set**: odd-page register offsets with no LED behind them, written
//!   as zero when streaming.
//! - **Auto-increment mode**: consecutive writes in one transaction land in
//!   consecutive registers, so a full page updates in a single exchange.

#![cfg_attr(not(test), no_std)]

mod error;
pub mod frame;
pub mod mapping;
pub mod registers;
pub mod transport;

mod matrix;

pub use crate::{
    error::{Error, Result},
    frame::{Frame, Gamma},
    mapping::{Domain, PixelAddress},
    matrix::LedMatrix,
};
