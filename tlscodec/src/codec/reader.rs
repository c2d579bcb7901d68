/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::codec::error::{CodecError, Result};

/// Read cursor over an immutable input buffer.
///
/// Every read checks the remaining length before it slices, so a declared
/// length can never make the decoder copy or allocate more than what
/// actually arrived.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    consumed: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, consumed: 0 }
    }

    /// Starts reading at `offset`. An offset past the end of the buffer is
    /// reported as a truncation of `field`.
    pub fn with_offset(buf: &'a [u8], offset: usize, field: &'static str) -> Result<Reader<'a>> {
        if offset > buf.len() {
            return Err(CodecError::truncated(field, offset, buf.len()));
        }
        Ok(Reader {
            buf,
            consumed: offset,
        })
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.consumed
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.consumed..]
    }

    pub fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(CodecError::truncated(field, len, self.remaining()));
        }
        let out = &self.buf[self.consumed..self.consumed + len];
        self.consumed += len;
        Ok(out)
    }

    pub fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    /// Carves the next `len` bytes out as an independent reader.
    pub fn sub(&mut self, len: usize, field: &'static str) -> Result<Reader<'a>> {
        Ok(Reader::new(self.take(len, field)?))
    }

    /// Fails unless every byte has been read.
    pub fn finish(&self, field: &'static str) -> Result<()> {
        if !self.is_empty() {
            return Err(CodecError::trailing(field, self.remaining()));
        }
        Ok(())
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.take_array::<1>(field)?[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take_array(field)?))
    }

    pub fn read_u24(&mut self, field: &'static str) -> Result<u32> {
        let b = self.take_array::<3>(field)?;
        Ok((b[0] as u32) << 16 | (b[1] as u32) << 8 | b[2] as u32)
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take_array(field)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_reads_big_endian() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
        let mut r = Reader::new(&buf);
        assert_eq!(r.read_u8("a").unwrap(), 0x01);
        assert_eq!(r.read_u16("b").unwrap(), 0x0203);
        assert_eq!(r.read_u24("c").unwrap(), 0x040506);
        assert_eq!(r.read_u32("d").unwrap(), 0x0708090a);
        assert!(r.is_empty());
        assert_eq!(r.consumed(), 10);
    }

    #[test]
    fn test_reader_checks_length_before_slicing() {
        let buf = [0u8; 4];
        let mut r = Reader::new(&buf);
        let err = r.take(usize::MAX, "blob").unwrap_err();
        assert_eq!(err, CodecError::truncated("blob", usize::MAX, 4));
        // nothing was consumed by the failed read
        assert_eq!(r.remaining(), 4);
    }

    #[test]
    fn test_reader_offset() {
        let buf = [0xaa, 0xbb, 0xcc];
        let mut r = Reader::with_offset(&buf, 2, "start").unwrap();
        assert_eq!(r.read_u8("x").unwrap(), 0xcc);
        assert!(Reader::with_offset(&buf, 4, "start").is_err());
    }

    #[test]
    fn test_sub_reader_is_isolated() {
        let buf = [0x01, 0x02, 0x03];
        let mut r = Reader::new(&buf);
        let mut sub = r.sub(2, "span").unwrap();
        assert_eq!(sub.read_u16("v").unwrap(), 0x0102);
        assert!(sub.read_u8("v").is_err());
        assert_eq!(r.read_u8("after").unwrap(), 0x03);
    }
}
