//! Classification of 3- and 4-bit four-state groups into octal/hex digits.

use ember_common::Logic;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bits per hex digit.
pub const HEX_GROUP: u32 = 4;
/// Bits per octal digit.
pub const OCTAL_GROUP: u32 = 3;

/// Maps a group of four-state bits, least significant first, to one digit.
///
/// A fully determinate group yields its numeral. Otherwise `'X'` if any bit is
/// X, else `'Z'`.
///
/// # Panics
///
/// Panics unless the group holds 1 to 4 bits.
pub(crate) fn classify_digit(group: &[Logic]) -> char {
    assert!(
        (1..=HEX_GROUP as usize).contains(&group.len()),
        "digit group of {} bits",
        group.len()
    );
    let mut value = 0usize;
    let mut has_x = false;
    let mut has_z = false;
    for (i, bit) in group.iter().enumerate() {
        match bit {
            Logic::Zero => {}
            Logic::One => value |= 1 << i,
            Logic::X => has_x = true,
            Logic::Z => has_z = true,
        }
    }
    if has_x {
        'X'
    } else if has_z {
        'Z'
    } else {
        char::from(DIGITS[value])
    }
}

/// Hex digit of four bits, least significant first.
pub fn hex_digit(group: [Logic; 4]) -> char {
    classify_digit(&group)
}

/// Octal digit of three bits, least significant first.
pub fn octal_digit(group: [Logic; 3]) -> char {
    classify_digit(&group)
}
