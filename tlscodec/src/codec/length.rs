/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-4.3
 */

use log::trace;

use crate::codec::bounds::Bounds;
use crate::codec::error::{CodecError, Result, Violation};
use crate::codec::primitive::U24;
use crate::codec::{Codec, Reader};

/// Width of the length field in front of a variable-length vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthPrefix {
    U8,
    U16,
    U24,
    U32,
}

impl LengthPrefix {
    pub fn width(self) -> usize {
        match self {
            LengthPrefix::U8 => 1,
            LengthPrefix::U16 => 2,
            LengthPrefix::U24 => 3,
            LengthPrefix::U32 => 4,
        }
    }

    pub fn max(self) -> u64 {
        match self {
            LengthPrefix::U8 => u8::MAX as u64,
            LengthPrefix::U16 => u16::MAX as u64,
            LengthPrefix::U24 => U24::MAX as u64,
            LengthPrefix::U32 => u32::MAX as u64,
        }
    }

    pub fn read(self, r: &mut Reader<'_>, field: &'static str) -> Result<usize> {
        Ok(match self {
            LengthPrefix::U8 => r.read_u8(field)? as usize,
            LengthPrefix::U16 => r.read_u16(field)? as usize,
            LengthPrefix::U24 => r.read_u24(field)? as usize,
            LengthPrefix::U32 => r.read_u32(field)? as usize,
        })
    }

    fn to_bytes(self, len: usize, field: &'static str) -> Result<Vec<u8>> {
        if len as u64 > self.max() {
            return Err(CodecError::invalid(
                field,
                len as u64,
                Violation::AboveMax(self.max()),
            ));
        }
        let be = (len as u32).to_be_bytes();
        Ok(be[4 - self.width()..].to_vec())
    }
}

/// Reads a length of width `prefix`, checks it against `bounds` and returns
/// exactly that many bytes.
pub fn read_prefixed<'a>(
    r: &mut Reader<'a>,
    prefix: LengthPrefix,
    bounds: Bounds,
    field: &'static str,
) -> Result<&'a [u8]> {
    let len = prefix.read(r, field)?;
    bounds.check(field, len as u64)?;
    r.take(len, field)
}

/// Writes `body` behind its own length.
pub fn write_prefixed(
    out: &mut Vec<u8>,
    prefix: LengthPrefix,
    bounds: Bounds,
    field: &'static str,
    body: &[u8],
) -> Result<()> {
    write_prefixed_with(out, prefix, bounds, field, |out| {
        out.extend_from_slice(body);
        Ok(())
    })?;
    Ok(())
}

/// Runs `f` to produce the payload and then fills in the length in front
/// of it. On failure `out` is left as it was.
pub fn write_prefixed_with<F>(
    out: &mut Vec<u8>,
    prefix: LengthPrefix,
    bounds: Bounds,
    field: &'static str,
    f: F,
) -> Result<usize>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let start = out.len();
    let body_start = start + prefix.width();
    out.resize(body_start, 0);

    let patched = f(out).and_then(|_| {
        let size = out.len() - body_start;
        bounds.check(field, size as u64)?;
        let len = prefix.to_bytes(size, field)?;
        out[start..body_start].copy_from_slice(&len);
        Ok(size)
    });

    if patched.is_err() {
        out.truncate(start);
    }
    patched
}

/// Decodes `bytes` as one `T` in isolation. The value has to fill the span
/// exactly.
pub fn tunnel<T: Codec>(bytes: &[u8], field: &'static str) -> Result<T> {
    tunnel_with(bytes, field, T::decode)
}

pub fn tunnel_with<T, F>(bytes: &[u8], field: &'static str, decode: F) -> Result<T>
where
    F: FnOnce(&mut Reader<'_>) -> Result<T>,
{
    let mut r = Reader::new(bytes);
    let value = decode(&mut r)?;
    r.finish(field)?;
    trace!("{field}: tunnelled {} bytes", bytes.len());
    Ok(value)
}

/// `opaque field<0..2^16-1>` wrapping a single structured value.
pub fn read_opaque<T: Codec>(r: &mut Reader<'_>, field: &'static str) -> Result<T> {
    let bytes = read_prefixed(r, LengthPrefix::U16, Bounds::ANY, field)?;
    tunnel(bytes, field)
}

pub fn write_opaque<T: Codec>(out: &mut Vec<u8>, value: &T, field: &'static str) -> Result<()> {
    write_prefixed_with(out, LengthPrefix::U16, Bounds::ANY, field, |out| {
        value.encode(out)
    })?;
    Ok(())
}

/// Body of a handshake message behind a 24-bit length. The length is handed
/// back to the enclosing message instead of being hidden inside the body.
pub fn read_handshake_body<T, F>(r: &mut Reader<'_>, field: &'static str, decode: F) -> Result<(T, U24)>
where
    F: FnOnce(&mut Reader<'_>) -> Result<T>,
{
    let bytes = read_prefixed(r, LengthPrefix::U24, Bounds::ANY, field)?;
    let length = U24::try_from(bytes.len())?;
    Ok((tunnel_with(bytes, field, decode)?, length))
}

pub fn write_handshake_body<F>(out: &mut Vec<u8>, field: &'static str, encode: F) -> Result<U24>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let size = write_prefixed_with(out, LengthPrefix::U24, Bounds::ANY, field, encode)?;
    U24::try_from(size)
}
