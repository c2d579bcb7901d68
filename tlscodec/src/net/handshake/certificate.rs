/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.2
 */

use crate::codec::array::{read_array, write_array};
use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::limits::{MAX_CERT_LEN, MIN_CERT_LEN};

const CERT_BOUNDS: Bounds = Bounds::within(MIN_CERT_LEN, MAX_CERT_LEN);

/// `opaque ASN.1Cert<1..2^24-1>`, a DER certificate kept as bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asn1Cert(pub Vec<u8>);

impl Codec for Asn1Cert {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_prefixed(out, LengthPrefix::U24, CERT_BOUNDS, "asn1_cert", &self.0)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let der = read_prefixed(r, LengthPrefix::U24, CERT_BOUNDS, "asn1_cert")?;
        Ok(Asn1Cert(der.to_vec()))
    }
}

/// The sender's chain, leaf first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub certificate_list: Vec<Asn1Cert>,
}

impl Certificate {
    pub fn new(chain: Vec<Vec<u8>>) -> Certificate {
        Certificate {
            certificate_list: chain.into_iter().map(Asn1Cert).collect(),
        }
    }

    pub fn leaf(&self) -> Option<&[u8]> {
        self.certificate_list.first().map(|c| c.0.as_slice())
    }
}

impl Codec for Certificate {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_array(
            out,
            &self.certificate_list,
            LengthPrefix::U24,
            CERT_BOUNDS,
            "certificate_list",
        )
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Certificate {
            certificate_list: read_array(r, LengthPrefix::U24, CERT_BOUNDS, "certificate_list")?,
        })
    }
}
