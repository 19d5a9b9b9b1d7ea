#![allow(missing_docs)]
//! Host-level tests for the coordinate mapper and its inverse tables.

use std::collections::HashMap;

use matrix_envoy::{
    Domain, PixelAddress,
    mapping::{EVEN_PAGE_PIXELS, HEIGHT, ODD_PAGE_PIXELS, WIDTH, is_gap, pixel_address},
};

#[test]
fn known_addresses_match_datasheet_layout() {
    // Region A: top of the matrix, dense even page.
    assert_eq!(
        pixel_address(3, 0, Domain::Brightness),
        Some(PixelAddress { page: 0, register: 150 })
    );
    assert_eq!(
        pixel_address(8, 0, Domain::Brightness),
        Some(PixelAddress { page: 0, register: 0 })
    );
    assert_eq!(
        pixel_address(3, 29, Domain::Brightness),
        Some(PixelAddress { page: 0, register: 179 })
    );

    // Region B: columns 1 and 2 on the odd page.
    assert_eq!(
        pixel_address(2, 0, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 0 })
    );
    assert_eq!(
        pixel_address(1, 29, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 59 })
    );

    // Region C: bottom four rows.
    assert_eq!(
        pixel_address(8, 30, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 90 })
    );
    assert_eq!(
        pixel_address(1, 33, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 156 })
    );

    // Region D: the leftmost column, both packing densities.
    assert_eq!(
        pixel_address(0, 0, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 95 })
    );
    assert_eq!(
        pixel_address(0, 5, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 104 })
    );
    assert_eq!(
        pixel_address(0, 10, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 113 })
    );
    assert_eq!(
        pixel_address(0, 33, Domain::Brightness),
        Some(PixelAddress { page: 1, register: 157 })
    );
}

#[test]
fn out_of_range_coordinates_are_unmapped() {
    assert_eq!(pixel_address(9, 0, Domain::Brightness), None);
    assert_eq!(pixel_address(0, 34, Domain::Brightness), None);
    assert_eq!(pixel_address(255, 255, Domain::CurrentScale), None);
}

#[test]
fn current_scale_uses_the_second_page_pair() {
    for x in 0..WIDTH as u8 {
        for y in 0..HEIGHT as u8 {
            let brightness = pixel_address(x, y, Domain::Brightness).unwrap();
            let scale = pixel_address(x, y, Domain::CurrentScale).unwrap();
            assert_eq!(scale.page, brightness.page + 2);
            assert_eq!(scale.register, brightness.register);
        }
    }
}

#[test]
fn mapping_is_a_bijection_onto_non_gap_registers() {
    let mut seen: HashMap<(u8, u8), (u8, u8)> = HashMap::new();
    for x in 0..WIDTH as u8 {
        for y in 0..HEIGHT as u8 {
            let addr = pixel_address(x, y, Domain::Brightness)
                .expect("every in-range coordinate has an LED");
            assert!(addr.page <= 1);
            let previous = seen.insert((addr.page, addr.register), (x, y));
            assert_eq!(previous, None, "two pixels share {addr:?}");
        }
    }
    assert_eq!(seen.len(), WIDTH * HEIGHT);

    // Every even-page register is covered; odd-page coverage is exactly the
    // complement of the gap set.
    for register in 0..EVEN_PAGE_PIXELS.len() as u8 {
        assert!(seen.contains_key(&(0, register)));
    }
    for register in 0..ODD_PAGE_PIXELS.len() as u8 {
        assert_eq!(seen.contains_key(&(1, register)), !is_gap(register));
    }
}

#[test]
fn inverse_tables_agree_with_the_forward_map() {
    for (register, &(x, y)) in EVEN_PAGE_PIXELS.iter().enumerate() {
        assert_eq!(
            pixel_address(x, y, Domain::Brightness),
            Some(PixelAddress { page: 0, register: register as u8 })
        );
    }
    for (register, pixel) in ODD_PAGE_PIXELS.iter().enumerate() {
        match *pixel {
            Some((x, y)) => assert_eq!(
                pixel_address(x, y, Domain::Brightness),
                Some(PixelAddress { page: 1, register: register as u8 })
            ),
            None => assert!(is_gap(register as u8)),
        }
    }
}

#[test]
fn gap_set_matches_the_fixed_constant() {
    for register in 0u8..=0xA0 {
        let expected = (60..=89).contains(&register)
            || [116, 125, 134, 143, 152].contains(&register);
        assert_eq!(is_gap(register), expected, "register {register}");
    }
}
