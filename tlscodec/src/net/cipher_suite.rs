/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.iana.org/assignments/tls-parameters/tls-parameters.xhtml#tls-parameters-4
 */

use crate::codec::switch::tls_enum;

tls_enum!(
    /// `uint8 CipherSuite[2]`. The codec does not choose suites, so codes it
    /// has no name for are kept as they are.
    #[allow(non_camel_case_types)]
    open CipherSuite: u16, "cipher_suite" => {
        TLS_NULL_WITH_NULL_NULL = 0x0000,
        TLS_RSA_WITH_NULL_SHA256 = 0x003B,
        TLS_RSA_WITH_3DES_EDE_CBC_SHA = 0x000A,
        TLS_RSA_WITH_AES_128_CBC_SHA = 0x002F,
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA = 0x0033,
        TLS_RSA_WITH_AES_256_CBC_SHA = 0x0035,
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA = 0x0039,
        TLS_RSA_WITH_AES_128_CBC_SHA256 = 0x003C,
        TLS_RSA_WITH_AES_256_CBC_SHA256 = 0x003D,
        TLS_DHE_RSA_WITH_AES_128_CBC_SHA256 = 0x0067,
        TLS_DHE_RSA_WITH_AES_256_CBC_SHA256 = 0x006B,
        TLS_EMPTY_RENEGOTIATION_INFO_SCSV = 0x00FF,
        TLS_AES_128_GCM_SHA256 = 0x1301,
        TLS_AES_256_GCM_SHA384 = 0x1302,
        TLS_CHACHA20_POLY1305_SHA256 = 0x1303,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Codec, CodecError, Violation};

    #[test]
    fn test_cipher_suite_codes() {
        assert_eq!(CipherSuite::from_raw(0x0035), CipherSuite::TLS_RSA_WITH_AES_256_CBC_SHA);
        assert_eq!(CipherSuite::TLS_DHE_RSA_WITH_AES_256_CBC_SHA256.to_bytes().unwrap(), b"\x00\x6b");
        assert_eq!(CipherSuite::from_bytes(b"\xc0\x2f").unwrap().0, CipherSuite::Unknown(0xc02f));
        assert_eq!(CipherSuite::Unknown(0xc02f).to_bytes().unwrap(), b"\xc0\x2f");
    }

    #[test]
    fn test_unknown_holding_a_listed_code() {
        assert_eq!(
            CipherSuite::Unknown(0x0035).to_bytes().unwrap_err(),
            CodecError::invalid("cipher_suite", 0x35, Violation::NotAllowed)
        );
    }
}
