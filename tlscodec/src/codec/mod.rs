/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod array;
pub mod bounds;
pub mod error;
pub mod length;
pub mod primitive;
pub mod reader;
pub mod switch;

pub use bounds::Bounds;
pub use error::{CodecError, Result, Structural, Violation};
pub use length::LengthPrefix;
pub use primitive::U24;
pub use reader::Reader;
pub use switch::TaggedUnion;

/// Bidirectional transform between wire bytes and a typed value.
pub trait Codec: Sized {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()>;

    fn decode(r: &mut Reader<'_>) -> Result<Self>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = vec![];
        self.encode(&mut out)?;
        Ok(out)
    }

    /// Decodes one value from the start of `buf` and returns it together
    /// with the number of bytes it took.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize)> {
        Self::from_bytes_at(buf, 0)
    }

    fn from_bytes_at(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut r = Reader::with_offset(buf, offset, "offset")?;
        let value = Self::decode(&mut r)?;
        Ok((value, r.consumed() - offset))
    }
}
