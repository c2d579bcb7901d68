/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.4
 */

use crate::codec::array::{read_array, read_tls_array, write_array, write_tls_array};
use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::switch::tls_enum;
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::extensions::SupportedSignatureAlgorithms;

tls_enum!(
    open ClientCertificateType: u8, "certificate_type" => {
        RsaSign = 1,
        DssSign = 2,
        RsaFixedDh = 3,
        DssFixedDh = 4,
        RsaEphemeralDh = 5,
        DssEphemeralDh = 6,
        FortezzaDms = 20,
    }
);

/// `opaque DistinguishedName<1..2^16-1>`, DER encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistinguishedName(pub Vec<u8>);

impl DistinguishedName {
    const BOUNDS: Bounds = Bounds::at_least(1);
}

impl Codec for DistinguishedName {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_prefixed(out, LengthPrefix::U16, Self::BOUNDS, "distinguished_name", &self.0)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let der = read_prefixed(r, LengthPrefix::U16, Self::BOUNDS, "distinguished_name")?;
        Ok(DistinguishedName(der.to_vec()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRequest {
    pub certificate_types: Vec<ClientCertificateType>,
    pub supported_signature_algorithms: SupportedSignatureAlgorithms,
    /// Empty when the server accepts any authority.
    pub certificate_authorities: Vec<DistinguishedName>,
}

impl CertificateRequest {
    const CERTIFICATE_TYPES: Bounds = Bounds::at_least(1);
}

impl Codec for CertificateRequest {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_array(
            out,
            &self.certificate_types,
            LengthPrefix::U8,
            Self::CERTIFICATE_TYPES,
            "certificate_types",
        )?;
        self.supported_signature_algorithms.encode(out)?;
        write_tls_array(out, &self.certificate_authorities, Bounds::ANY, "certificate_authorities")
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(CertificateRequest {
            certificate_types: read_array(
                r,
                LengthPrefix::U8,
                Self::CERTIFICATE_TYPES,
                "certificate_types",
            )?,
            supported_signature_algorithms: SupportedSignatureAlgorithms::decode(r)?,
            certificate_authorities: read_tls_array(r, Bounds::ANY, "certificate_authorities")?,
        })
    }
}
