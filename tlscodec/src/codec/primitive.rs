/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::codec::error::{CodecError, Result, Violation};
use crate::codec::{Codec, Reader};

/// Unsigned 24-bit big-endian integer, the width TLS uses for handshake and
/// certificate lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U24(u32);

impl U24 {
    pub const MAX: u32 = (1 << 24) - 1;

    pub fn new(value: u32) -> Result<U24> {
        if value > Self::MAX {
            return Err(CodecError::invalid(
                "uint24",
                value as u64,
                Violation::AboveMax(Self::MAX as u64),
            ));
        }
        Ok(U24(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn to_be_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl TryFrom<u32> for U24 {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<U24> {
        U24::new(value)
    }
}

impl TryFrom<usize> for U24 {
    type Error = CodecError;

    fn try_from(value: usize) -> Result<U24> {
        if value > Self::MAX as usize {
            return Err(CodecError::invalid(
                "uint24",
                value as u64,
                Violation::AboveMax(Self::MAX as u64),
            ));
        }
        Ok(U24(value as u32))
    }
}

impl From<U24> for u32 {
    fn from(value: U24) -> u32 {
        value.0
    }
}

impl Codec for U24 {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(U24(r.read_u24("uint24")?))
    }
}

impl Codec for u8 {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.push(*self);
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        r.read_u8("uint8")
    }
}

impl Codec for u16 {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        r.read_u16("uint16")
    }
}

impl Codec for u32 {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&self.to_be_bytes());
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        r.read_u32("uint32")
    }
}

/// Fixed-length opaque field, e.g. `opaque random_bytes[28]`.
impl<const N: usize> Codec for [u8; N] {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(self);
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        r.take_array("opaque")
    }
}

/// Writes `value` as a 24-bit integer, failing for anything above 2^24-1.
pub fn write_u24(out: &mut Vec<u8>, value: usize, field: &'static str) -> Result<()> {
    if value > U24::MAX as usize {
        return Err(CodecError::invalid(
            field,
            value as u64,
            Violation::AboveMax(U24::MAX as u64),
        ));
    }
    out.extend_from_slice(&U24(value as u32).to_be_bytes());
    Ok(())
}
