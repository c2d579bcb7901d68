/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-4.3
 */

use log::{debug, trace};

use crate::codec::bounds::Bounds;
use crate::codec::error::{CodecError, Result};
use crate::codec::length::{read_prefixed, write_prefixed_with, LengthPrefix};
use crate::codec::{Codec, Reader};

/// Decodes a vector of `T` behind a byte length (not an element count).
///
/// Elements are read back to back until the span is used up. A structural
/// failure inside an element only ends the repetition, and the bytes that
/// could not be decoded are reported against the vector together with the
/// element's own failure. A validation failure inside an element rejects the
/// vector as a whole.
pub fn read_array<T: Codec>(
    r: &mut Reader<'_>,
    prefix: LengthPrefix,
    bounds: Bounds,
    field: &'static str,
) -> Result<Vec<T>> {
    let mut span = Reader::new(read_prefixed(r, prefix, bounds, field)?);
    let mut elements = vec![];
    while !span.is_empty() {
        let mut element = span.clone();
        match T::decode(&mut element) {
            Ok(value) => {
                elements.push(value);
                span = element;
            }
            Err(e) if e.is_structural() => {
                debug!("{field}: element {} does not decode: {e}", elements.len());
                return Err(CodecError::undecodable_element(
                    field,
                    elements.len(),
                    span.remaining(),
                    e,
                ));
            }
            Err(e) => return Err(e),
        }
    }
    trace!("{field}: {} elements", elements.len());
    Ok(elements)
}

pub fn write_array<T: Codec>(
    out: &mut Vec<u8>,
    elements: &[T],
    prefix: LengthPrefix,
    bounds: Bounds,
    field: &'static str,
) -> Result<()> {
    write_prefixed_with(out, prefix, bounds, field, |out| {
        for element in elements {
            element.encode(out)?;
        }
        Ok(())
    })?;
    Ok(())
}

/// The TLS vector type: 16-bit byte length followed by the elements.
pub fn read_tls_array<T: Codec>(
    r: &mut Reader<'_>,
    bounds: Bounds,
    field: &'static str,
) -> Result<Vec<T>> {
    read_array(r, LengthPrefix::U16, bounds, field)
}

pub fn write_tls_array<T: Codec>(
    out: &mut Vec<u8>,
    elements: &[T],
    bounds: Bounds,
    field: &'static str,
) -> Result<()> {
    write_array(out, elements, LengthPrefix::U16, bounds, field)
}
