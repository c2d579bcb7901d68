/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.3
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.7.1
 */

use ibig::UBig;

use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::hello::ProtocolVersion;
use crate::net::limits::PRE_MASTER_RANDOM_LEN;

/// Ephemeral Diffie-Hellman parameters as sent by the server. The big-endian
/// values are kept exactly as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerDhParams {
    pub dh_p: Vec<u8>,
    pub dh_g: Vec<u8>,
    pub dh_ys: Vec<u8>,
}

impl ServerDhParams {
    pub fn from_ubig(p: &UBig, g: &UBig, ys: &UBig) -> ServerDhParams {
        ServerDhParams {
            dh_p: p.to_be_bytes(),
            dh_g: g.to_be_bytes(),
            dh_ys: ys.to_be_bytes(),
        }
    }

    pub fn p(&self) -> UBig {
        UBig::from_be_bytes(&self.dh_p)
    }

    pub fn g(&self) -> UBig {
        UBig::from_be_bytes(&self.dh_g)
    }

    pub fn ys(&self) -> UBig {
        UBig::from_be_bytes(&self.dh_ys)
    }
}

impl Codec for ServerDhParams {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_prefixed(out, LengthPrefix::U16, Bounds::ANY, "dh_p", &self.dh_p)?;
        write_prefixed(out, LengthPrefix::U16, Bounds::ANY, "dh_g", &self.dh_g)?;
        write_prefixed(out, LengthPrefix::U16, Bounds::ANY, "dh_Ys", &self.dh_ys)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(ServerDhParams {
            dh_p: read_prefixed(r, LengthPrefix::U16, Bounds::ANY, "dh_p")?.to_vec(),
            dh_g: read_prefixed(r, LengthPrefix::U16, Bounds::ANY, "dh_g")?.to_vec(),
            dh_ys: read_prefixed(r, LengthPrefix::U16, Bounds::ANY, "dh_Ys")?.to_vec(),
        })
    }
}

/// The RSA-encrypted secret of a ClientKeyExchange, before encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreMasterSecret {
    pub client_version: ProtocolVersion,
    pub random: [u8; PRE_MASTER_RANDOM_LEN],
}

impl Codec for PreMasterSecret {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.client_version.encode(out)?;
        self.random.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(PreMasterSecret {
            client_version: ProtocolVersion::decode(r)?,
            random: r.take_array("random")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibig::ubig;

    #[test]
    fn test_server_dh_params() {
        let raw = b"\x00\x03\x01\x00\x01\x00\x01\x02\x00\x02\x00\xff";
        let (params, consumed) = ServerDhParams::from_bytes(raw).unwrap();
        assert_eq!(consumed, raw.len());
        assert_eq!(params.p(), ubig!(65537));
        assert_eq!(params.g(), ubig!(2));
        // the leading zero is part of the wire value
        assert_eq!(params.dh_ys, b"\x00\xff");
        assert_eq!(params.ys(), ubig!(255));
        assert_eq!(params.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_server_dh_params_from_ubig() {
        let params = ServerDhParams::from_ubig(&ubig!(65537), &ubig!(2), &ubig!(255));
        assert_eq!(
            params.to_bytes().unwrap(),
            b"\x00\x03\x01\x00\x01\x00\x01\x02\x00\x01\xff"
        );
    }

    #[test]
    fn test_server_dh_params_truncated() {
        let raw = b"\x00\x03\x01\x00\x01\x00\x01\x02\x00\x02\x00";
        assert!(ServerDhParams::from_bytes(raw).unwrap_err().is_structural());
    }

    #[test]
    fn test_pre_master_secret() {
        let mut raw = b"\x03\x03".to_vec();
        raw.extend_from_slice(&[0x42; PRE_MASTER_RANDOM_LEN]);
        let (secret, consumed) = PreMasterSecret::from_bytes(&raw).unwrap();
        assert_eq!(consumed, 48);
        assert_eq!(secret.client_version, ProtocolVersion::TLS_1_2);
        assert_eq!(secret.random, [0x42; PRE_MASTER_RANDOM_LEN]);
        assert_eq!(secret.to_bytes().unwrap(), raw);
        assert!(PreMasterSecret::from_bytes(&raw[..47]).unwrap_err().is_structural());
    }
}
