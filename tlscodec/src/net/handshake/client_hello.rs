/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.2
 */

use crate::codec::array::{read_array, read_tls_array, write_array, write_tls_array};
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::cipher_suite::CipherSuite;
use crate::net::extensions::{Extension, ExtensionType, Extensions};
use crate::net::hello::{CompressionMethod, ProtocolVersion, Random, SessionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientHello {
    pub client_version: ProtocolVersion,
    pub random: Random,
    pub session_id: SessionId,
    pub cipher_suites: Vec<CipherSuite>,
    pub compression_methods: Vec<CompressionMethod>,
    pub extensions: Extensions,
}

impl ClientHello {
    const CIPHER_SUITES: Bounds = Bounds::at_least(1);
    const COMPRESSION_METHODS: Bounds = Bounds::at_least(1);

    /// Extensions a client may offer.
    pub const ALLOWED_EXTENSIONS: &'static [ExtensionType] = &[
        ExtensionType::ServerName,
        ExtensionType::MaxFragmentLength,
        ExtensionType::ClientCertificateUrl,
        ExtensionType::SignatureAlgorithms,
    ];

    /// A fresh hello without a session to resume and without compression.
    pub fn new(random: Random, cipher_suites: Vec<CipherSuite>) -> ClientHello {
        ClientHello {
            client_version: ProtocolVersion::TLS_1_2,
            random,
            session_id: SessionId::empty(),
            cipher_suites,
            compression_methods: vec![CompressionMethod::Null],
            extensions: Extensions::new(),
        }
    }

    pub fn with_extension(mut self, extension: Extension) -> ClientHello {
        self.extensions.push(extension);
        self
    }

    /// Decoding and encoding carry any extension through; this is the
    /// separate check against `ALLOWED_EXTENSIONS`.
    pub fn check_extensions(&self) -> Result<()> {
        self.extensions.check_allowed(Self::ALLOWED_EXTENSIONS)
    }
}

impl Codec for ClientHello {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.client_version.encode(out)?;
        self.random.encode(out)?;
        self.session_id.encode(out)?;
        write_tls_array(out, &self.cipher_suites, Self::CIPHER_SUITES, "cipher_suites")?;
        write_array(
            out,
            &self.compression_methods,
            LengthPrefix::U8,
            Self::COMPRESSION_METHODS,
            "compression_methods",
        )?;
        self.extensions.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(ClientHello {
            client_version: ProtocolVersion::decode(r)?,
            random: Random::decode(r)?,
            session_id: SessionId::decode(r)?,
            cipher_suites: read_tls_array(r, Self::CIPHER_SUITES, "cipher_suites")?,
            compression_methods: read_array(
                r,
                LengthPrefix::U8,
                Self::COMPRESSION_METHODS,
                "compression_methods",
            )?,
            extensions: Extensions::decode(r)?,
        })
    }
}
