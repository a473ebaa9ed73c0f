//! Read path: rendering a signal's cells in a caller-selected format.
//!
//! [`ValueEncoder`] owns the scratch storage its results borrow from, so each
//! caller that reads concurrently needs its own encoder. Reading never
//! modifies cell state.

use crate::cell::CellSource;
use crate::decimal::{DecimalFormatter, Radix10};
use crate::digit::{classify_digit, HEX_GROUP, OCTAL_GROUP};
use crate::error::{Direction, VpiError};
use crate::format::{Value, ValueFormat, VecVal};
use crate::planes::to_planes;
use crate::scratch::ScratchBuffer;
use crate::signal::SignalDescriptor;
use ember_common::Logic;
use ember_config::{CodecConfig, ScratchPolicy, WordSize};

/// Encodes signal values. Results borrow from the encoder until its next call.
#[derive(Debug, Clone)]
pub struct ValueEncoder<D: DecimalFormatter = Radix10> {
    config: CodecConfig,
    scratch: ScratchBuffer,
    planes: Vec<VecVal>,
    decimal: D,
}

impl ValueEncoder<Radix10> {
    /// Creates an encoder using the built-in decimal conversion.
    pub fn new(config: CodecConfig) -> Self {
        Self::with_decimal(config, Radix10)
    }
}

impl Default for ValueEncoder<Radix10> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<D: DecimalFormatter> ValueEncoder<D> {
    /// Creates an encoder delegating decimal strings to `decimal`.
    pub fn with_decimal(config: CodecConfig, decimal: D) -> Self {
        Self {
            config,
            scratch: ScratchBuffer::new(config.scratch),
            planes: Vec::new(),
            decimal,
        }
    }

    /// The settings this encoder was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Current capacity of the string scratch buffer.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Reads `signal` from `cells` as `format`.
    pub fn encode(
        &mut self,
        signal: &SignalDescriptor,
        cells: &impl CellSource,
        format: ValueFormat,
    ) -> Result<Value<'_>, VpiError> {
        match format {
            ValueFormat::Int => self.encode_int(signal, cells).map(Value::Int),
            ValueFormat::BinStr => {
                self.encode_binary(signal, cells);
                self.scratch.as_str().map(Value::Str)
            }
            ValueFormat::HexStr => {
                self.encode_radix(signal, cells, HEX_GROUP);
                self.scratch.as_str().map(Value::Str)
            }
            ValueFormat::OctStr => {
                self.encode_radix(signal, cells, OCTAL_GROUP);
                self.scratch.as_str().map(Value::Str)
            }
            ValueFormat::DecStr => {
                self.encode_decimal(signal, cells);
                self.scratch.as_str().map(Value::Str)
            }
            ValueFormat::String => {
                self.encode_chars(signal, cells);
                Ok(Value::Chars(self.scratch.as_bytes()))
            }
            ValueFormat::Vector => {
                self.encode_vector(signal, cells);
                Ok(Value::Vector(&self.planes))
            }
            ValueFormat::Scalar
            | ValueFormat::Real
            | ValueFormat::Strength
            | ValueFormat::Time => {
                log::error!("get_value: {format} values are not implemented for signals");
                Err(VpiError::UnsupportedFormat {
                    format,
                    direction: Direction::Read,
                })
            }
        }
    }

    /// Any X or Z bit makes the whole result 0.
    fn encode_int(
        &self,
        signal: &SignalDescriptor,
        cells: &impl CellSource,
    ) -> Result<i64, VpiError> {
        let width = signal.width();
        let word_bits = self.config.word.bits();
        if width > word_bits {
            log::error!("get_value: integer read of {width} bits exceeds the {word_bits}-bit word");
            return Err(VpiError::WidthOverflow {
                width,
                word_bits,
                format: ValueFormat::Int,
            });
        }

        let mut acc = 0u64;
        for idx in 0..width {
            match signal.bit(cells, idx) {
                Logic::Zero => {}
                Logic::One => acc |= 1 << idx,
                Logic::X | Logic::Z => return Ok(0),
            }
        }

        let value = if width == word_bits {
            match self.config.word {
                WordSize::W32 => i64::from(acc as u32 as i32),
                WordSize::W64 => acc as i64,
            }
        } else if signal.is_signed() && (acc >> (width - 1)) & 1 == 1 {
            (acc | (u64::MAX << width)) as i64
        } else {
            acc as i64
        };
        Ok(value)
    }

    fn encode_binary(&mut self, signal: &SignalDescriptor, cells: &impl CellSource) {
        let width = signal.width();
        self.scratch.need(width as usize + 1);
        for idx in (0..width).rev() {
            self.scratch.push(signal.bit(cells, idx).to_bin_char() as u8);
        }
    }

    /// Hex and octal share this: digits are formed from bit 0 upward and
    /// stored right to left.
    fn encode_radix(&mut self, signal: &SignalDescriptor, cells: &impl CellSource, group: u32) {
        let width = signal.width();
        let digits = width.div_ceil(group) as usize;
        self.scratch.need_filled(digits + 1, digits, b'0');

        let mut slot = digits;
        let mut buf = [Logic::Zero; HEX_GROUP as usize];
        let mut base = 0;
        while base < width {
            let real = group.min(width - base);
            for k in 0..group {
                buf[k as usize] = if k < real {
                    signal.bit(cells, base + k)
                } else {
                    Logic::Zero
                };
            }
            let mut digit = classify_digit(&buf[..group as usize]);

            // A short leading group takes on its own unknown state.
            if real < group {
                let pad = match digit {
                    'X' => Some(Logic::X),
                    'Z' => Some(Logic::Z),
                    _ => None,
                };
                if let Some(pad) = pad {
                    for k in real..group {
                        buf[k as usize] = pad;
                    }
                    digit = classify_digit(&buf[..group as usize]);
                }
            }

            slot -= 1;
            self.scratch.put(slot, digit as u8);
            base += group;
        }
    }

    fn encode_decimal(&mut self, signal: &SignalDescriptor, cells: &impl CellSource) {
        let width = signal.width();
        let bits: Vec<Logic> = (0..width).map(|idx| signal.bit(cells, idx)).collect();
        let text = self.decimal.bits_to_decimal(&bits, signal.is_signed());
        self.scratch
            .need((width.div_ceil(3) as usize + 2).max(text.len()));
        self.scratch.push_str(&text);
    }

    /// Bytes are aligned to bit 0, so a width that is not a multiple of 8
    /// leaves the short byte first.
    fn encode_chars(&mut self, signal: &SignalDescriptor, cells: &impl CellSource) {
        let width = signal.width();
        self.scratch.need(width.div_ceil(8) as usize + 1);
        let mut tmp = 0u8;
        for bitnr in (0..width).rev() {
            tmp <<= 1;
            if signal.bit(cells, bitnr) == Logic::One {
                tmp |= 1;
            }
            if bitnr % 8 == 0 {
                self.scratch.push(if tmp == 0 { b' ' } else { tmp });
                tmp = 0;
            }
        }
    }

    fn encode_vector(&mut self, signal: &SignalDescriptor, cells: &impl CellSource) {
        let width = signal.width();
        let word_bits = self.config.word.bits();
        let words = width.div_ceil(word_bits) as usize;
        self.planes.clear();
        self.planes.resize(words, VecVal::default());
        if self.config.scratch == ScratchPolicy::Exact {
            self.planes.shrink_to(words);
        }
        for idx in 0..width {
            let (a, b) = to_planes(self.config.plane_mapping, signal.bit(cells, idx));
            let word = &mut self.planes[(idx / word_bits) as usize];
            let pos = idx % word_bits;
            if a {
                word.aval |= 1 << pos;
            }
            if b {
                word.bval |= 1 << pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellNetwork;
    use crate::scope::ScopeTree;
    use ember_common::LogicVec;
    use ember_config::PlaneMapping;

    struct Fixture {
        net: CellNetwork,
        scopes: ScopeTree,
    }

    impl Fixture {
        fn new() -> Self {
            let mut scopes = ScopeTree::new();
            scopes.push_scope("tb");
            Self {
                net: CellNetwork::new(),
                scopes,
            }
        }

        /// Signal `[w-1:0]` holding `pattern` (msb-first binary string).
        fn signal(&mut self, pattern: &str, signed: bool) -> SignalDescriptor {
            let v = LogicVec::from_binary_str(pattern).unwrap();
            let bits = self.net.alloc_pattern(&v);
            let msb = v.width() as i32 - 1;
            SignalDescriptor::make_reg(self.scopes.intern("sig"), msb, 0, signed, bits, &self.scopes)
                .unwrap()
        }
    }

    fn read_str(enc: &mut ValueEncoder, fx: &Fixture, sig: &SignalDescriptor, f: ValueFormat) -> String {
        enc.encode(sig, &fx.net, f).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn int_determinate() {
        let mut fx = Fixture::new();
        let sig = fx.signal("1011", false);
        let mut enc = ValueEncoder::default();
        assert_eq!(enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(), Value::Int(11));
    }

    #[test]
    fn int_unknown_bit_zeroes_result() {
        let mut fx = Fixture::new();
        // lsb-first [1,1,X,0]
        let sig = fx.signal("0x11", false);
        let mut enc = ValueEncoder::default();
        assert_eq!(enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(), Value::Int(0));
        let sig = fx.signal("z000_0001", false);
        assert_eq!(enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(), Value::Int(0));
    }

    #[test]
    fn int_signed_extends() {
        let mut fx = Fixture::new();
        let sig = fx.signal("1110", true);
        let mut enc = ValueEncoder::default();
        assert_eq!(enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(), Value::Int(-2));
        let unsigned = fx.signal("1110", false);
        assert_eq!(enc.encode(&unsigned, &fx.net, ValueFormat::Int).unwrap(), Value::Int(14));
    }

    #[test]
    fn int_full_word_is_native_signed() {
        let mut fx = Fixture::new();
        let mut pattern = String::from("1");
        pattern.push_str(&"0".repeat(31));
        let sig = fx.signal(&pattern, false);
        let mut enc = ValueEncoder::default();
        assert_eq!(
            enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(),
            Value::Int(i64::from(i32::MIN))
        );
        let mut wide = ValueEncoder::new(CodecConfig::default().with_word(WordSize::W64));
        assert_eq!(
            wide.encode(&sig, &fx.net, ValueFormat::Int).unwrap(),
            Value::Int(0x8000_0000)
        );
    }

    #[test]
    fn int_width_overflow() {
        let mut fx = Fixture::new();
        let sig = fx.signal(&"1".repeat(33), false);
        let mut enc = ValueEncoder::default();
        let err = enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap_err();
        assert!(matches!(
            err,
            VpiError::WidthOverflow {
                width: 33,
                word_bits: 32,
                format: ValueFormat::Int
            }
        ));
    }

    #[test]
    fn binary_string() {
        let mut fx = Fixture::new();
        let sig = fx.signal("10xz", false);
        let mut enc = ValueEncoder::default();
        assert_eq!(read_str(&mut enc, &fx, &sig, ValueFormat::BinStr), "10xz");
        let all_x = fx.signal("xxxxx", false);
        assert_eq!(read_str(&mut enc, &fx, &all_x, ValueFormat::BinStr), "xxxxx");
        let all_z = fx.signal("zzz", false);
        assert_eq!(read_str(&mut enc, &fx, &all_z, ValueFormat::BinStr), "zzz");
    }

    #[test]
    fn hex_partial_groups() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let x6 = fx.signal("xxxxxx", false);
        assert_eq!(read_str(&mut enc, &fx, &x6, ValueFormat::HexStr), "XX");
        let z6 = fx.signal("zzzzzz", false);
        assert_eq!(read_str(&mut enc, &fx, &z6, ValueFormat::HexStr), "ZZ");
        // lsb-first [1,0,1,1,X]
        let five = fx.signal("x1101", false);
        assert_eq!(read_str(&mut enc, &fx, &five, ValueFormat::HexStr), "XD");
        let det = fx.signal("1_1010_0101", false);
        assert_eq!(read_str(&mut enc, &fx, &det, ValueFormat::HexStr), "1A5");
    }

    #[test]
    fn hex_group_mixing() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let sig = fx.signal("zz1x_0011_z111", false);
        assert_eq!(read_str(&mut enc, &fx, &sig, ValueFormat::HexStr), "X3Z");
    }

    #[test]
    fn octal_string() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let sig = fx.signal("10_111_000", false);
        assert_eq!(read_str(&mut enc, &fx, &sig, ValueFormat::OctStr), "270");
        let mixed = fx.signal("z_1x1_zz0", false);
        assert_eq!(read_str(&mut enc, &fx, &mixed, ValueFormat::OctStr), "ZXZ");
    }

    #[test]
    fn decimal_string() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let sig = fx.signal("11111111", false);
        assert_eq!(read_str(&mut enc, &fx, &sig, ValueFormat::DecStr), "255");
        let signed = fx.signal("11111111", true);
        assert_eq!(read_str(&mut enc, &fx, &signed, ValueFormat::DecStr), "-1");
        assert!(enc.scratch_capacity() >= 8usize.div_ceil(3) + 2);
    }

    #[test]
    fn decimal_uses_custom_formatter() {
        struct Fixed;
        impl DecimalFormatter for Fixed {
            fn bits_to_decimal(&self, bits: &[Logic], signed: bool) -> String {
                format!("{}{}", bits.len(), if signed { "s" } else { "u" })
            }
        }
        let mut fx = Fixture::new();
        let sig = fx.signal("0101", true);
        let mut enc = ValueEncoder::with_decimal(CodecConfig::default(), Fixed);
        let v = enc.encode(&sig, &fx.net, ValueFormat::DecStr).unwrap();
        assert_eq!(v.as_str(), Some("4s"));
    }

    #[test]
    fn char_string() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        // "Hi" = 0x48 0x69
        let sig = fx.signal("0100_1000_0110_1001", false);
        let v = enc.encode(&sig, &fx.net, ValueFormat::String).unwrap();
        assert_eq!(v.as_chars(), Some(&b"Hi"[..]));
    }

    #[test]
    fn char_string_zero_bytes_are_spaces() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let sig = fx.signal(&"0".repeat(16), false);
        let v = enc.encode(&sig, &fx.net, ValueFormat::String).unwrap();
        assert_eq!(v.as_chars(), Some(&b"  "[..]));
        let xz = fx.signal("xxxx_zzzz_0100_0001", false);
        let v = enc.encode(&xz, &fx.net, ValueFormat::String).unwrap();
        assert_eq!(v.as_chars(), Some(&b" A"[..]));
    }

    #[test]
    fn char_string_short_leading_byte() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        // 12 bits: 0x1 then 0x41
        let sig = fx.signal("0001_0100_0001", false);
        let v = enc.encode(&sig, &fx.net, ValueFormat::String).unwrap();
        assert_eq!(v.as_chars(), Some(&[0x01u8, b'A'][..]));
    }

    #[test]
    fn vector_ieee_planes() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        // lsb-first [0, 1, Z, X]
        let sig = fx.signal("xz10", false);
        let v = enc.encode(&sig, &fx.net, ValueFormat::Vector).unwrap();
        assert_eq!(v.as_vector(), Some(&[VecVal::new(0b1010, 0b1100)][..]));
    }

    #[test]
    fn vector_legacy_planes() {
        let mut fx = Fixture::new();
        let mut enc =
            ValueEncoder::new(CodecConfig::default().with_plane_mapping(PlaneMapping::Legacy));
        let sig = fx.signal("xz10", false);
        let v = enc.encode(&sig, &fx.net, ValueFormat::Vector).unwrap();
        assert_eq!(v.as_vector(), Some(&[VecVal::new(0b0110, 0b1100)][..]));
    }

    #[test]
    fn vector_spans_words() {
        let mut fx = Fixture::new();
        let mut enc = ValueEncoder::default();
        let mut pattern = String::from("x1");
        pattern.push_str(&"0".repeat(31));
        pattern.push('1');
        let sig = fx.signal(&pattern, false);
        let words = enc
            .encode(&sig, &fx.net, ValueFormat::Vector)
            .unwrap()
            .as_vector()
            .unwrap()
            .to_vec();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], VecVal::new(0x1, 0));
        assert_eq!(words[1], VecVal::new(0b11, 0b10));
    }

    #[test]
    fn ascending_range_reads_lsb_first() {
        let mut fx = Fixture::new();
        let v = LogicVec::from_binary_str("0011").unwrap();
        let bits = fx.net.alloc_pattern(&v);
        // [0:3]: lsb index 3 is cell 0.
        let sig = SignalDescriptor::make_net(fx.scopes.intern("asc"), 0, 3, false, bits, &fx.scopes)
            .unwrap();
        let mut enc = ValueEncoder::default();
        assert_eq!(enc.encode(&sig, &fx.net, ValueFormat::Int).unwrap(), Value::Int(3));
        assert_eq!(read_str(&mut enc, &fx, &sig, ValueFormat::BinStr), "0011");

        // [0:5], lsb-first [0,1,0,1,1,X]
        let v = LogicVec::from_binary_str("x11010").unwrap();
        let bits = fx.net.alloc_pattern(&v);
        let wide = SignalDescriptor::make_net(fx.scopes.intern("asc6"), 0, 5, false, bits, &fx.scopes)
            .unwrap();
        assert!(wide.is_ascending());
        assert_eq!(read_str(&mut enc, &fx, &wide, ValueFormat::HexStr), "XA");
        assert_eq!(read_str(&mut enc, &fx, &wide, ValueFormat::OctStr), "X2");
        let chars = enc.encode(&wide, &fx.net, ValueFormat::String).unwrap();
        assert_eq!(chars.as_chars(), Some(&[0x1au8][..]));
    }

    #[test]
    fn unsupported_read_formats() {
        let mut fx = Fixture::new();
        let sig = fx.signal("1", false);
        let mut enc = ValueEncoder::default();
        for f in [
            ValueFormat::Scalar,
            ValueFormat::Real,
            ValueFormat::Strength,
            ValueFormat::Time,
        ] {
            let err = enc.encode(&sig, &fx.net, f).unwrap_err();
            assert!(matches!(
                err,
                VpiError::UnsupportedFormat {
                    direction: Direction::Read,
                    ..
                }
            ));
        }
    }

    #[test]
    fn reading_has_no_side_effects() {
        let mut fx = Fixture::new();
        let sig = fx.signal("1x0z", false);
        let before = sig.snapshot(&fx.net);
        let mut enc = ValueEncoder::default();
        for f in [
            ValueFormat::Int,
            ValueFormat::BinStr,
            ValueFormat::HexStr,
            ValueFormat::OctStr,
            ValueFormat::DecStr,
            ValueFormat::String,
            ValueFormat::Vector,
        ] {
            enc.encode(&sig, &fx.net, f).unwrap();
        }
        assert_eq!(sig.snapshot(&fx.net), before);
        assert_eq!(fx.net.poke_count(), 0);
    }

    #[test]
    fn scratch_grows_only() {
        let mut fx = Fixture::new();
        let wide = fx.signal(&"1".repeat(200), false);
        let narrow = fx.signal("1", false);
        let mut enc = ValueEncoder::default();
        enc.encode(&wide, &fx.net, ValueFormat::BinStr).unwrap();
        let cap = enc.scratch_capacity();
        assert!(cap >= 201);
        enc.encode(&narrow, &fx.net, ValueFormat::BinStr).unwrap();
        assert_eq!(enc.scratch_capacity(), cap);
    }
}
