//! Device abstraction for the LED matrix module.
//!
//! [`LedMatrix`] wraps a [`Transport`] session and speaks in logical pixels:
//! single-pixel pokes go through the coordinate mapper, whole frames are
//! streamed in register order through the mapper's inverse tables, and the
//! reset sequencer restores the controller's known-good defaults.

use embedded_hal::i2c::I2c;

use crate::{
    Error, Frame, Gamma, Result,
    mapping::{Domain, EVEN_PAGE_PIXELS, ODD_PAGE_PIXELS, pixel_address},
    registers::{
        CONFIGURATION, CONFIGURATION_DEFAULT, EVEN_PAGE_REGISTERS, FUNCTION_PAGE, GLOBAL_CURRENT,
        GLOBAL_CURRENT_DEFAULT, ODD_PAGE_REGISTERS, PULL_RESISTORS, PULL_RESISTORS_DEFAULT,
        PWM_FREQUENCY, PWM_FREQUENCY_DEFAULT, RESET, RESET_KEY,
    },
    transport::Transport,
};

/// Driver for one IS31FL3741-class matrix controller.
///
/// # Example
///
/// ```rust,no_run
/// use matrix_envoy::{Domain, Frame, Gamma, LedMatrix};
///
/// fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> matrix_envoy::Result<(), I2C::Error> {
///     let mut matrix = LedMatrix::new(i2c);
///     matrix.reset_and_configure()?;
///
///     // Safe current limit everywhere, then one bright pixel.
///     matrix.write_all(Domain::CurrentScale, 0x7F)?;
///     matrix.set_pixel(4, 17, 255)?;
///
///     // Or stream a whole frame in two bus transactions.
///     let mut frame = Frame::new();
///     frame[(0, 0)] = 128;
///     matrix.write_frame(&frame, Domain::Brightness, Gamma::Squared)?;
///     Ok(())
/// }
/// ```
pub struct LedMatrix<I2C> {
    transport: Transport<I2C>,
}

impl<I2C: I2c> LedMatrix<I2C> {
    /// Create a driver over the given bus.
    ///
    /// Issues no bus traffic; call [`reset_and_configure`](Self::reset_and_configure)
    /// once at startup to bring the controller to known-good defaults.
    pub fn new(i2c: I2C) -> Self {
        Self {
            transport: Transport::new(i2c),
        }
    }

    /// Consume the driver and hand the bus back.
    pub fn release(self) -> I2C {
        self.transport.release()
    }

    /// Set the brightness (PWM duty) of one pixel.
    pub fn set_pixel(&mut self, x: u8, y: u8, pwm: u8) -> Result<(), I2C::Error> {
        self.set_value(x, y, Domain::Brightness, pwm)
    }

    /// Set the current scale of one pixel.
    ///
    /// Excessive scale may overdrive the LED; modules are usually kept at
    /// 0x7F or below.
    pub fn set_pixel_scale(&mut self, x: u8, y: u8, scale: u8) -> Result<(), I2C::Error> {
        self.set_value(x, y, Domain::CurrentScale, scale)
    }

    fn set_value(&mut self, x: u8, y: u8, domain: Domain, value: u8) -> Result<(), I2C::Error> {
        let addr = pixel_address(x, y, domain).ok_or(Error::UnmappedCoordinate)?;
        self.transport.write_register(addr.page, addr.register, value)
    }

    /// Stream a whole frame to the domain's page pair.
    ///
    /// Registers are walked in ascending order per page and queued into one
    /// bulk write each, so a full update costs exactly two bus transactions
    /// regardless of how many pixels changed. Gap registers are written as
    /// zero. Both pages are attempted even if the first fails.
    pub fn write_frame(&mut self, frame: &Frame, domain: Domain, gamma: Gamma) -> Result<(), I2C::Error> {
        let base = domain.base_page();

        let mut values = [0u8; EVEN_PAGE_REGISTERS];
        for (value, &(x, y)) in values.iter_mut().zip(EVEN_PAGE_PIXELS.iter()) {
            *value = gamma.apply(frame[(x as usize, y as usize)]);
        }
        let even = self.transport.write_bulk(base, 0x00, &values);

        let mut values = [0u8; ODD_PAGE_REGISTERS];
        for (value, pixel) in values.iter_mut().zip(ODD_PAGE_PIXELS.iter()) {
            if let Some((x, y)) = *pixel {
                *value = gamma.apply(frame[(x as usize, y as usize)]);
            }
        }
        let odd = self.transport.write_bulk(base + 1, 0x00, &values);

        even.and(odd)
    }

    /// Paint every pixel of a domain with one intensity.
    ///
    /// Same two-transaction shape as [`write_frame`](Self::write_frame),
    /// without needing a frame: non-gap registers get `value`, gap registers
    /// get zero.
    pub fn write_all(&mut self, domain: Domain, value: u8) -> Result<(), I2C::Error> {
        let base = domain.base_page();

        let even = self
            .transport
            .write_bulk(base, 0x00, &[value; EVEN_PAGE_REGISTERS]);

        let mut values = [0u8; ODD_PAGE_REGISTERS];
        for (slot, pixel) in values.iter_mut().zip(ODD_PAGE_PIXELS.iter()) {
            if pixel.is_some() {
                *slot = value;
            }
        }
        let odd = self.transport.write_bulk(base + 1, 0x00, &values);

        even.and(odd)
    }

    /// Reset the controller, then restore the function-register defaults.
    ///
    /// A linear one-shot sequence, typically run once at startup. Every
    /// write is issued unconditionally; the first error observed is
    /// returned.
    pub fn reset_and_configure(&mut self) -> Result<(), I2C::Error> {
        let reset = self.reset();
        let configured = self.configure_defaults();
        reset.and(configured)
    }

    /// Reset every controller register to its hardware default.
    pub fn reset(&mut self) -> Result<(), I2C::Error> {
        self.transport
            .write_register(FUNCTION_PAGE, RESET, RESET_KEY)
    }

    /// Write the four function registers in fixed order with fixed defaults:
    /// configuration, global current, pull resistors, PWM frequency.
    pub fn configure_defaults(&mut self) -> Result<(), I2C::Error> {
        let configuration = self.set_configuration(CONFIGURATION_DEFAULT);
        let current = self.set_global_current(GLOBAL_CURRENT_DEFAULT);
        let pulls = self.set_pull_resistors(PULL_RESISTORS_DEFAULT);
        let frequency = self.set_pwm_frequency(PWM_FREQUENCY_DEFAULT);
        configuration.and(current).and(pulls).and(frequency)
    }

    /// Set the configuration register (scan width, logic level, detection,
    /// software shutdown).
    pub fn set_configuration(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.transport
            .write_register(FUNCTION_PAGE, CONFIGURATION, value)
    }

    /// Set the global current control register, 0..=255.
    pub fn set_global_current(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.transport
            .write_register(FUNCTION_PAGE, GLOBAL_CURRENT, value)
    }

    /// Set the row pull-down / column pull-up resistor selection.
    pub fn set_pull_resistors(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.transport
            .write_register(FUNCTION_PAGE, PULL_RESISTORS, value)
    }

    /// Set the PWM frequency register.
    pub fn set_pwm_frequency(&mut self, value: u8) -> Result<(), I2C::Error> {
        self.transport
            .write_register(FUNCTION_PAGE, PWM_FREQUENCY, value)
    }

    /// Read back one register, for diagnostics.
    pub fn read_register(&mut self, page: u8, register: u8) -> Result<u8, I2C::Error> {
        self.transport.read_register(page, register)
    }

    /// The underlying transport session, for callers that need raw paged
    /// register access.
    pub fn transport(&mut self) -> &mut Transport<I2C> {
        &mut self.transport
    }
}
