//! Logical `(x, y)` pixel coordinates to chip `(page, register)` addresses.
//!
//! The physical LED wiring does not follow a uniform raster order: most of
//! the matrix packs 30 LEDs per controller pin group, but the leftmost two
//! columns, the bottom four rows, and the x = 0 column each land in their own
//! regions of the odd RAM page. [`pixel_address`] encodes that piecewise
//! arithmetic; [`EVEN_PAGE_PIXELS`] and [`ODD_PAGE_PIXELS`] are its inverse,
//! computed at compile time by inverting the forward map, so the two can
//! never drift apart.
//!
//! ```text
//! x:  0      1  2      3 ............ 8
//!     D      B  B      A  A  A  A  A  A     y 0..=29  (A on even page,
//!     D      B  B      A  A  A  A  A  A                the rest on odd)
//!     ...
//!     D      C  C      C  C  C  C  C  C     y 30..=33
//! ```

use crate::registers::{EVEN_PAGE_REGISTERS, ODD_PAGE_REGISTERS};

/// Columns of the visible matrix.
pub const WIDTH: usize = 9;

/// Rows of the visible matrix.
pub const HEIGHT: usize = 34;

/// Which of the two parallel register layouts an operation targets.
///
/// Brightness (PWM duty) and current scale share one address layout and
/// differ only in which page pair backs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Domain {
    /// PWM duty registers, pages 0 and 1.
    Brightness,
    /// Current-limiting scale registers, pages 2 and 3.
    ///
    /// Excessive scale may overdrive the LEDs; modules are usually kept at
    /// 0x7F or below.
    CurrentScale,
}

impl Domain {
    /// First page of the domain's page pair.
    #[must_use]
    pub const fn base_page(self) -> u8 {
        match self {
            Self::Brightness => 0,
            Self::CurrentScale => 2,
        }
    }
}

/// Chip-side address of one LED register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelAddress {
    /// RAM page, 0..=3 for pixel data.
    pub page: u8,
    /// Register offset within the page.
    pub register: u8,
}

/// Map a logical pixel to its chip address for the given domain.
///
/// Returns `None` when `(x, y)` falls outside the 9x34 rectangle. Every
/// in-range coordinate has a physical LED, so in-range lookups always
/// succeed.
///
/// ```
/// use matrix_envoy::mapping::{Domain, PixelAddress, pixel_address};
///
/// assert_eq!(
///     pixel_address(3, 0, Domain::Brightness),
///     Some(PixelAddress { page: 0, register: 150 })
/// );
/// assert_eq!(
///     pixel_address(0, 5, Domain::Brightness),
///     Some(PixelAddress { page: 1, register: 104 })
/// );
/// assert_eq!(pixel_address(9, 0, Domain::Brightness), None);
/// ```
#[must_use]
pub const fn pixel_address(x: u8, y: u8, domain: Domain) -> Option<PixelAddress> {
    if x as usize >= WIDTH || y as usize >= HEIGHT {
        return None;
    }

    let base = domain.base_page();
    let (page, register) = if x >= 3 && y <= 29 {
        // Region A: the bulk of the matrix, 30 registers per column.
        (base, 30 * (8 - x) + y)
    } else if x >= 1 && y <= 29 {
        // Region B: columns 1 and 2 spill onto the odd page.
        (base + 1, 30 * (2 - x) + y)
    } else if x >= 1 {
        // Region C: the bottom four rows, 9 registers per column group.
        (base + 1, 9 * (8 - x) + (y - 30) + 90)
    } else if y <= 9 {
        // Region D: column 0 has fewer LEDs per pin group; packing density
        // changes at y = 10.
        (base + 1, (y + 1) % 5 + 9 * (y / 5) + 94)
    } else {
        (base + 1, (y - 1) % 4 + 9 * ((y - 2) / 4) + 94)
    };
    Some(PixelAddress { page, register })
}

/// Whether an odd-page register offset has no LED behind it.
///
/// Gap registers must be written as zero when streaming and are never
/// produced by [`pixel_address`]. The set is identical for both page pairs.
#[must_use]
pub const fn is_gap(register: u8) -> bool {
    matches!(register, 60..=89 | 116 | 125 | 134 | 143 | 152)
}

/// `(x, y)` for each even-page register, in register order.
///
/// Even pages are dense: every one of the 180 registers backs a pixel.
pub const EVEN_PAGE_PIXELS: [(u8, u8); EVEN_PAGE_REGISTERS] = even_page_pixels();

/// `(x, y)` for each odd-page register, in register order; `None` marks a
/// gap register.
pub const ODD_PAGE_PIXELS: [Option<(u8, u8)>; ODD_PAGE_REGISTERS] = odd_page_pixels();

const fn even_page_pixels() -> [(u8, u8); EVEN_PAGE_REGISTERS] {
    let mut table = [(0u8, 0u8); EVEN_PAGE_REGISTERS];
    let mut covered = [false; EVEN_PAGE_REGISTERS];

    let mut x = 0u8;
    while (x as usize) < WIDTH {
        let mut y = 0u8;
        while (y as usize) < HEIGHT {
            match pixel_address(x, y, Domain::Brightness) {
                Some(addr) if addr.page == 0 => {
                    let register = addr.register as usize;
                    assert!(register < EVEN_PAGE_REGISTERS, "register beyond even page");
                    assert!(!covered[register], "two pixels map to one even-page register");
                    table[register] = (x, y);
                    covered[register] = true;
                }
                _ => {}
            }
            y += 1;
        }
        x += 1;
    }

    let mut register = 0;
    while register < EVEN_PAGE_REGISTERS {
        assert!(covered[register], "even-page register backs no pixel");
        register += 1;
    }
    table
}

const fn odd_page_pixels() -> [Option<(u8, u8)>; ODD_PAGE_REGISTERS] {
    let mut table: [Option<(u8, u8)>; ODD_PAGE_REGISTERS] = [None; ODD_PAGE_REGISTERS];

    let mut x = 0u8;
    while (x as usize) < WIDTH {
        let mut y = 0u8;
        while (y as usize) < HEIGHT {
            match pixel_address(x, y, Domain::Brightness) {
                Some(addr) if addr.page == 1 => {
                    let register = addr.register as usize;
                    assert!(register < ODD_PAGE_REGISTERS, "register beyond odd page");
                    assert!(table[register].is_none(), "two pixels map to one odd-page register");
                    table[register] = Some((x, y));
                }
                _ => {}
            }
            y += 1;
        }
        x += 1;
    }

    // A register is unreachable exactly when it is in the gap set.
    let mut register = 0;
    while register < ODD_PAGE_REGISTERS {
        assert!(
            table[register].is_none() == is_gap(register as u8),
            "gap set disagrees with the mapper's reachable registers"
        );
        register += 1;
    }
    table
}
