//! Per-bit two-plane patterns, shared by the read and write paths.

use ember_common::Logic;
use ember_config::PlaneMapping;

/// `(aval, bval)` for one four-state bit.
pub fn to_planes(mapping: PlaneMapping, value: Logic) -> (bool, bool) {
    match (mapping, value) {
        (_, Logic::Zero) => (false, false),
        (_, Logic::One) => (true, false),
        (PlaneMapping::Ieee, Logic::Z) | (PlaneMapping::Legacy, Logic::X) => (false, true),
        (PlaneMapping::Ieee, Logic::X) | (PlaneMapping::Legacy, Logic::Z) => (true, true),
    }
}

/// Four-state bit for the 2-bit code `aval | bval << 1`.
pub fn from_code(mapping: PlaneMapping, code: u8) -> Logic {
    match (mapping, code & 0b11) {
        (_, 0) => Logic::Zero,
        (_, 1) => Logic::One,
        (PlaneMapping::Ieee, 2) | (PlaneMapping::Legacy, 3) => Logic::Z,
        _ => Logic::X,
    }
}
