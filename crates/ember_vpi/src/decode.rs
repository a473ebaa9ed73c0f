//! Write path: poking a caller-supplied value into a signal's cells.

use crate::cell::{CellSink, StrengthTag};
use crate::error::{Direction, VpiError};
use crate::format::{DelayMode, PutValue, ValueFormat, VecVal};
use crate::planes::from_code;
use crate::signal::SignalDescriptor;
use ember_common::Logic;
use ember_config::CodecConfig;

/// Decodes values into cell pokes. Every poke is immediate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueDecoder {
    config: CodecConfig,
}

impl ValueDecoder {
    /// Creates a decoder for the given settings.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The settings this decoder was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Writes `value` into `signal` and returns the signal.
    ///
    /// No cell is touched when the request is refused.
    pub fn put_value<'s>(
        &self,
        signal: &'s SignalDescriptor,
        cells: &mut impl CellSink,
        value: &PutValue<'_>,
        delay: DelayMode,
    ) -> Result<&'s SignalDescriptor, VpiError> {
        if delay != DelayMode::NoDelay {
            log::error!("put_value: {delay} is not supported, only immediate writes");
            return Err(VpiError::UnsupportedDelay(delay));
        }

        match *value {
            PutValue::Int(v) => self.put_int(signal, cells, v)?,
            PutValue::Scalar(s) => Self::put_scalar(signal, cells, s),
            PutValue::Vector(words) => self.put_vector(signal, cells, words)?,
            PutValue::Text { .. } | PutValue::Real(_) => {
                let format = value.format();
                log::error!("put_value: {format} values are not implemented for signals");
                return Err(VpiError::UnsupportedFormat {
                    format,
                    direction: Direction::Write,
                });
            }
        }
        Ok(signal)
    }

    fn check_width(&self, signal: &SignalDescriptor, format: ValueFormat) -> Result<(), VpiError> {
        let width = signal.width();
        let word_bits = self.config.word.bits();
        if width > word_bits {
            log::error!("put_value: {format} write of {width} bits exceeds the {word_bits}-bit word");
            return Err(VpiError::WidthOverflow {
                width,
                word_bits,
                format,
            });
        }
        Ok(())
    }

    /// Integers only ever produce strong 0 and 1.
    fn put_int(
        &self,
        signal: &SignalDescriptor,
        cells: &mut impl CellSink,
        value: i64,
    ) -> Result<(), VpiError> {
        self.check_width(signal, ValueFormat::Int)?;
        for idx in 0..signal.width() {
            let bit = Logic::from_bool((value >> idx) & 1 != 0);
            cells.poke(signal.bits(), idx, bit, StrengthTag::for_logic(bit), true);
        }
        Ok(())
    }

    fn put_scalar(signal: &SignalDescriptor, cells: &mut impl CellSink, value: Logic) {
        cells.poke(signal.bits(), 0, value, StrengthTag::for_logic(value), true);
    }

    fn put_vector(
        &self,
        signal: &SignalDescriptor,
        cells: &mut impl CellSink,
        words: &[VecVal],
    ) -> Result<(), VpiError> {
        self.check_width(signal, ValueFormat::Vector)?;
        let word = words.first().ok_or_else(|| {
            log::error!("put_value: vector value has no words");
            VpiError::MissingVectorWord
        })?;
        for idx in 0..signal.width() {
            let (a, b) = word.planes_at(idx);
            let code = u8::from(a) | (u8::from(b) << 1);
            let bit = from_code(self.config.plane_mapping, code);
            cells.poke(signal.bits(), idx, bit, StrengthTag::for_logic(bit), true);
        }
        Ok(())
    }
}
