/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.4.1
 */

use crate::codec::array::{read_tls_array, write_tls_array};
use crate::codec::switch::tls_enum;
use crate::codec::{Bounds, Codec, Reader, Result};

tls_enum!(
    closed HashAlgorithm: u8, "hash" => {
        None = 0,
        Md5 = 1,
        Sha1 = 2,
        Sha224 = 3,
        Sha256 = 4,
        Sha384 = 5,
        Sha512 = 6,
    }
);

tls_enum!(
    closed SignatureAlgorithm: u8, "signature" => {
        Anonymous = 0,
        Rsa = 1,
        Dsa = 2,
        Ecdsa = 3,
    }
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl Codec for SignatureAndHashAlgorithm {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.hash.encode(out)?;
        self.signature.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(SignatureAndHashAlgorithm {
            hash: HashAlgorithm::decode(r)?,
            signature: SignatureAlgorithm::decode(r)?,
        })
    }
}

/// `SignatureAndHashAlgorithm supported_signature_algorithms<2..2^16-2>` in
/// RFC 5246; only a non-empty byte length is checked, an odd one fails as a
/// truncated element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedSignatureAlgorithms(pub Vec<SignatureAndHashAlgorithm>);

impl SupportedSignatureAlgorithms {
    const BOUNDS: Bounds = Bounds::at_least(1);

    pub fn new(algorithm: SignatureAndHashAlgorithm) -> SupportedSignatureAlgorithms {
        SupportedSignatureAlgorithms(vec![algorithm])
    }
}

impl Codec for SupportedSignatureAlgorithms {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_tls_array(out, &self.0, Self::BOUNDS, "supported_signature_algorithms")
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(SupportedSignatureAlgorithms(read_tls_array(
            r,
            Self::BOUNDS,
            "supported_signature_algorithms",
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecError, Violation};

    #[test]
    fn test_supported_signature_algorithms() {
        let algorithms = SupportedSignatureAlgorithms::new(SignatureAndHashAlgorithm {
            hash: HashAlgorithm::Sha384,
            signature: SignatureAlgorithm::Ecdsa,
        });
        let raw = algorithms.to_bytes().unwrap();
        assert_eq!(raw, b"\x00\x02\x05\x03");
        assert_eq!(SupportedSignatureAlgorithms::from_bytes(&raw).unwrap().0, algorithms);
    }

    #[test]
    fn test_supported_signature_algorithms_needs_one() {
        assert_eq!(
            SupportedSignatureAlgorithms::from_bytes(b"\x00\x00").unwrap_err(),
            CodecError::invalid("supported_signature_algorithms", 0, Violation::BelowMin(1))
        );
        assert!(SupportedSignatureAlgorithms(vec![]).to_bytes().unwrap_err().is_validation());

        let err = SupportedSignatureAlgorithms::from_bytes(b"\x00\x01\x04").unwrap_err();
        assert!(err.is_structural());
        assert!(matches!(err.cause(), Some(e) if e.is_structural()));
    }

    #[test]
    fn test_unknown_hash_algorithm() {
        assert_eq!(
            SignatureAndHashAlgorithm::from_bytes(b"\x07\x01").unwrap_err(),
            CodecError::unknown_tag("hash", 7)
        );
    }
}
