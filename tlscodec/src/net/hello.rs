/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.2
 */

use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::codec::switch::tls_enum;
use crate::net::limits::{MAX_SESSION_ID_LEN, RANDOM_BYTES_LEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
    pub major: u8,
    pub minor: u8,
}

impl ProtocolVersion {
    pub const SSL_3_0: ProtocolVersion = ProtocolVersion { major: 3, minor: 0 };
    pub const TLS_1_0: ProtocolVersion = ProtocolVersion { major: 3, minor: 1 };
    pub const TLS_1_1: ProtocolVersion = ProtocolVersion { major: 3, minor: 2 };
    pub const TLS_1_2: ProtocolVersion = ProtocolVersion { major: 3, minor: 3 };

    pub fn as_u16(&self) -> u16 {
        (self.major as u16) << 8 | self.minor as u16
    }
}

impl Codec for ProtocolVersion {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.push(self.major);
        out.push(self.minor);
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(ProtocolVersion {
            major: r.read_u8("major")?,
            minor: r.read_u8("minor")?,
        })
    }
}

/// 32 bytes: a timestamp followed by 28 random bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Random {
    pub gmt_unix_time: u32,
    pub random_bytes: [u8; RANDOM_BYTES_LEN],
}

impl Random {
    pub fn from_array(buf: [u8; 32]) -> Random {
        let mut random_bytes = [0; RANDOM_BYTES_LEN];
        random_bytes.copy_from_slice(&buf[4..]);
        Random {
            gmt_unix_time: u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]),
            random_bytes,
        }
    }

    pub fn as_array(&self) -> [u8; 32] {
        let mut out = [0; 32];
        out[..4].copy_from_slice(&self.gmt_unix_time.to_be_bytes());
        out[4..].copy_from_slice(&self.random_bytes);
        out
    }
}

impl Codec for Random {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&self.as_array());
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Random {
            gmt_unix_time: r.read_u32("gmt_unix_time")?,
            random_bytes: r.take_array("random_bytes")?,
        })
    }
}

/// `opaque SessionID<0..32>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionId(pub Vec<u8>);

impl SessionId {
    const BOUNDS: Bounds = Bounds::at_most(MAX_SESSION_ID_LEN);

    pub fn empty() -> SessionId {
        SessionId(vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Codec for SessionId {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_prefixed(out, LengthPrefix::U8, Self::BOUNDS, "session_id", &self.0)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let id = read_prefixed(r, LengthPrefix::U8, Self::BOUNDS, "session_id")?;
        Ok(SessionId(id.to_vec()))
    }
}

tls_enum!(
    open CompressionMethod: u8, "compression_method" => {
        Null = 0,
    }
);
