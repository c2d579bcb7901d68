/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

//! Encoder and decoder for the TLS 1.2 handshake wire format.
//!
//! `codec` holds the building blocks (bounded integers, length-prefixed
//! vectors, tagged unions, tunnelled sub-decodes), `net` the messages of
//! RFC 5246 built from them.

pub mod codec;
pub mod net;

pub use codec::{Codec, CodecError, Reader, Result};
pub use net::{Handshake, HandshakeMessage, HandshakeType};
