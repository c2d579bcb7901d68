/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc6066#section-5
 */

use crate::codec::array::{read_tls_array, write_tls_array};
use crate::codec::bounds::one_of;
use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::switch::tls_enum;
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::limits::{MAX_URL_LEN, MIN_URL_LEN, SHA1_HASH_LEN, URL_AND_HASH_PADDING};

tls_enum!(
    closed CertChainType: u8, "type" => {
        IndividualCerts = 0,
        PkiPath = 1,
    }
);

/// Where to fetch one certificate, and the SHA-1 of what will be found there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlAndHash {
    pub url: Vec<u8>,
    pub sha1_hash: [u8; SHA1_HASH_LEN],
}

impl UrlAndHash {
    const URL_BOUNDS: Bounds = Bounds::within(MIN_URL_LEN, MAX_URL_LEN);

    pub fn new(url: &str, sha1_hash: [u8; SHA1_HASH_LEN]) -> UrlAndHash {
        UrlAndHash {
            url: url.as_bytes().to_vec(),
            sha1_hash,
        }
    }
}

impl Codec for UrlAndHash {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_prefixed(out, LengthPrefix::U16, Self::URL_BOUNDS, "url", &self.url)?;
        out.push(URL_AND_HASH_PADDING);
        self.sha1_hash.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let url = read_prefixed(r, LengthPrefix::U16, Self::URL_BOUNDS, "url")?.to_vec();
        one_of("padding", r.read_u8("padding")?, &[URL_AND_HASH_PADDING])?;
        Ok(UrlAndHash {
            url,
            sha1_hash: r.take_array("sha1_hash")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateUrl {
    pub chain_type: CertChainType,
    pub url_and_hash_list: Vec<UrlAndHash>,
}

impl Codec for CertificateUrl {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.chain_type.encode(out)?;
        write_tls_array(out, &self.url_and_hash_list, Bounds::ANY, "url_and_hash_list")
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(CertificateUrl {
            chain_type: CertChainType::decode(r)?,
            url_and_hash_list: read_tls_array(r, Bounds::ANY, "url_and_hash_list")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecError, Violation};

    fn url_and_hash(url: &[u8], padding: u8) -> Vec<u8> {
        let mut buf = (url.len() as u16).to_be_bytes().to_vec();
        buf.extend_from_slice(url);
        buf.push(padding);
        buf.extend_from_slice(&[0xaa; SHA1_HASH_LEN]);
        buf
    }

    fn certificate_url(elements: &[Vec<u8>]) -> Vec<u8> {
        let body = elements.concat();
        let mut buf = vec![1];
        buf.extend_from_slice(&(body.len() as u16).to_be_bytes());
        buf.extend_from_slice(&body);
        buf
    }

    #[test]
    fn test_parse_certificate_url() {
        let raw = certificate_url(&[
            url_and_hash(b"https://a.example/1", 1),
            url_and_hash(b"https://a.example/2", 1),
        ]);
        let (message, consumed) = CertificateUrl::from_bytes(&raw).unwrap();
        assert_eq!(consumed, raw.len());
        assert_eq!(message.chain_type, CertChainType::PkiPath);
        assert_eq!(
            message.url_and_hash_list,
            vec![
                UrlAndHash::new("https://a.example/1", [0xaa; SHA1_HASH_LEN]),
                UrlAndHash::new("https://a.example/2", [0xaa; SHA1_HASH_LEN]),
            ]
        );
        assert_eq!(message.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_bad_padding_is_not_end_of_list() {
        let raw = certificate_url(&[
            url_and_hash(b"https://a.example/1", 1),
            url_and_hash(b"https://a.example/2", 2),
        ]);
        assert_eq!(
            CertificateUrl::from_bytes(&raw).unwrap_err(),
            CodecError::invalid("padding", 2, Violation::NotAllowed)
        );
    }

    #[test]
    fn test_url_bounds() {
        assert_eq!(
            UrlAndHash::from_bytes(&url_and_hash(b"", 1)).unwrap_err(),
            CodecError::invalid("url", 0, Violation::BelowMin(1))
        );
        assert!(UrlAndHash::new("", [0; SHA1_HASH_LEN]).to_bytes().unwrap_err().is_validation());
    }

    #[test]
    fn test_unknown_chain_type() {
        let mut raw = certificate_url(&[url_and_hash(b"u", 1)]);
        raw[0] = 2;
        assert_eq!(
            CertificateUrl::from_bytes(&raw).unwrap_err(),
            CodecError::unknown_tag("type", 2)
        );
    }

    #[test]
    fn test_truncated_hash_ends_list() {
        let mut element = url_and_hash(b"u", 1);
        element.truncate(element.len() - 1);
        let raw = certificate_url(&[element.clone()]);
        assert_eq!(
            CertificateUrl::from_bytes(&raw).unwrap_err(),
            CodecError::undecodable_element(
                "url_and_hash_list",
                0,
                element.len(),
                CodecError::truncated("sha1_hash", SHA1_HASH_LEN, SHA1_HASH_LEN - 1)
            )
        );
    }
}
