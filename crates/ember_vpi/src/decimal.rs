//! Bit-vector to decimal string conversion.

use ember_common::Logic;
use num_bigint::BigUint;
use num_traits::One;

/// Converts a four-state bit vector, index 0 least significant, to decimal.
pub trait DecimalFormatter {
    /// Renders `bits` as a decimal string, two's complement when `signed`.
    fn bits_to_decimal(&self, bits: &[Logic], signed: bool) -> String;
}

/// Arbitrary-width decimal conversion.
///
/// Vectors that are entirely X or entirely Z render as `x` or `z`. A vector
/// with only some unknown bits renders as `X` (any X present) or `Z`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Radix10;

impl DecimalFormatter for Radix10 {
    fn bits_to_decimal(&self, bits: &[Logic], signed: bool) -> String {
        let width = bits.len();
        if width == 0 {
            return "0".to_string();
        }
        let count_x = bits.iter().filter(|b| **b == Logic::X).count();
        let count_z = bits.iter().filter(|b| **b == Logic::Z).count();
        if count_x == width {
            return "x".to_string();
        }
        if count_z == width {
            return "z".to_string();
        }
        if count_x > 0 {
            return "X".to_string();
        }
        if count_z > 0 {
            return "Z".to_string();
        }

        let mut bytes = vec![0u8; width.div_ceil(8)];
        for (idx, bit) in bits.iter().enumerate() {
            if *bit == Logic::One {
                bytes[idx / 8] |= 1 << (idx % 8);
            }
        }
        let magnitude = BigUint::from_bytes_le(&bytes);
        if signed && bits[width - 1] == Logic::One {
            let negated = (BigUint::one() << width) - magnitude;
            format!("-{negated}")
        } else {
            magnitude.to_string()
        }
    }
}
