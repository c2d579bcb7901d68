/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.3
 */

use crate::codec::{Codec, Reader, Result};
use crate::net::cipher_suite::CipherSuite;
use crate::net::extensions::{ExtensionType, Extensions};
use crate::net::hello::{CompressionMethod, ProtocolVersion, Random, SessionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerHello {
    pub server_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suite: CipherSuite,
    pub compression_method: CompressionMethod,
    pub extensions: Extensions,
}

impl ServerHello {
    /// Extensions a server may answer with.
    pub const ALLOWED_EXTENSIONS: &'static [ExtensionType] =
        &[ExtensionType::MaxFragmentLength, ExtensionType::ClientCertificateUrl];

    /// Decoding and encoding carry any extension through; this is the
    /// separate check against `ALLOWED_EXTENSIONS`.
    pub fn check_extensions(&self) -> Result<()> {
        self.extensions.check_allowed(Self::ALLOWED_EXTENSIONS)
    }
}

impl Codec for ServerHello {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.server_version.encode(out)?;
        self.random.encode(out)?;
        self.session_id.encode(out)?;
        self.cipher_suite.encode(out)?;
        self.compression_method.encode(out)?;
        self.extensions.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(ServerHello {
            server_version: ProtocolVersion::decode(r)?,
            random: Random::decode(r)?,
            session_id: SessionId::decode(r)?,
            cipher_suite: CipherSuite::decode(r)?,
            compression_method: CompressionMethod::decode(r)?,
            extensions: Extensions::decode(r)?,
        })
    }
}
