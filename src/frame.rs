//! In-memory frame buffer for the 9x34 matrix.
//!
//! A [`Frame`] is just a 2-D array of byte intensities indexed as
//! `frame[(x, y)]`. It implements [`DrawTarget`] so text and primitives from
//! the [`embedded-graphics`](https://docs.rs/embedded-graphics) crate can be
//! drawn directly into it before handing it to
//! [`LedMatrix::write_frame`](crate::LedMatrix::write_frame).

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut, Index, IndexMut},
};

use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::Gray8,
    prelude::{GrayColor, OriginDimensions, Pixel, Point, Size},
};

use crate::mapping::{HEIGHT, WIDTH};

/// Intensity correction curve applied while streaming a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gamma {
    /// Transmit intensities unmodified.
    #[default]
    Linear,
    /// Remap each intensity to `pwm * pwm / 255`.
    ///
    /// LED brightness is perceived non-linearly; the quadratic curve spreads
    /// the visible steps across the whole 0..=255 range.
    Squared,
}

impl Gamma {
    /// Apply the curve to one intensity.
    ///
    /// The endpoints are fixed (`0 -> 0`, `255 -> 255`) and the curve is
    /// non-decreasing.
    #[must_use]
    pub const fn apply(self, pwm: u8) -> u8 {
        match self {
            Self::Linear => pwm,
            Self::Squared => ((pwm as u16 * pwm as u16) / 255) as u8,
        }
    }
}

/// A 9x34 buffer of byte intensities, stored row-major.
///
/// # Example
///
/// ```
/// use embedded_graphics::{
///     pixelcolor::Gray8,
///     prelude::*,
///     primitives::{PrimitiveStyle, Rectangle},
/// };
/// use matrix_envoy::Frame;
///
/// let mut frame = Frame::new();
///
/// // Direct pixel access.
/// frame[(0, 0)] = 255;
///
/// // Or draw with embedded-graphics.
/// Rectangle::new(Frame::TOP_LEFT, Frame::SIZE)
///     .into_styled(PrimitiveStyle::with_stroke(Gray8::new(128), 1))
///     .draw(&mut frame)
///     .expect("infallible");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame(pub [[u8; WIDTH]; HEIGHT]);

impl Frame {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = WIDTH;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = HEIGHT;
    /// Frame dimensions as a [`Size`].
    pub const SIZE: Size = Size::new(WIDTH as u32, HEIGHT as u32);
    /// Top-left corner coordinate as a [`Point`].
    pub const TOP_LEFT: Point = Point::new(0, 0);
    /// Bottom-right corner coordinate as a [`Point`].
    pub const BOTTOM_RIGHT: Point = Point::new(WIDTH as i32 - 1, HEIGHT as i32 - 1);

    /// Create a new blank (all dark) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[0; WIDTH]; HEIGHT])
    }

    /// Create a frame filled with a single intensity.
    #[must_use]
    pub const fn filled(intensity: u8) -> Self {
        Self([[intensity; WIDTH]; HEIGHT])
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Frame {
    type Target = [[u8; WIDTH]; HEIGHT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Frame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Index<(usize, usize)> for Frame {
    type Output = u8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < WIDTH, "x_index must be within width");
        assert!(y_index < HEIGHT, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl IndexMut<(usize, usize)> for Frame {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < WIDTH, "x_index must be within width");
        assert!(y_index < HEIGHT, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl From<[[u8; WIDTH]; HEIGHT]> for Frame {
    fn from(array: [[u8; WIDTH]; HEIGHT]) -> Self {
        Self(array)
    }
}

impl From<Frame> for [[u8; WIDTH]; HEIGHT] {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl DrawTarget for Frame {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.x < WIDTH as i32 && coord.y >= 0 && coord.y < HEIGHT as i32 {
                self.0[coord.y as usize][coord.x as usize] = color.luma();
            }
        }
        Ok(())
    }
}
