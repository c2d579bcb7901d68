/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4
 */

mod certificate;
mod certificate_request;
mod certificate_url;
mod client_hello;
mod key_exchange;
mod server_hello;

pub use certificate::{Asn1Cert, Certificate};
pub use certificate_request::{CertificateRequest, ClientCertificateType, DistinguishedName};
pub use certificate_url::{CertChainType, CertificateUrl, UrlAndHash};
pub use client_hello::ClientHello;
pub use key_exchange::{PreMasterSecret, ServerDhParams};
pub use server_hello::ServerHello;

use crate::codec::length::{
    read_handshake_body, read_prefixed, tunnel, tunnel_with, write_handshake_body, write_prefixed,
};
use crate::codec::switch::tls_enum;
use crate::codec::{Bounds, Codec, CodecError, LengthPrefix, Reader, Result, Violation, U24};

tls_enum!(
    open HandshakeType: u8, "msg_type" => {
        HelloRequest = 0,
        ClientHello = 1,
        ServerHello = 2,
        Certificate = 11,
        ServerKeyExchange = 12,
        CertificateRequest = 13,
        ServerHelloDone = 14,
        CertificateVerify = 15,
        ClientKeyExchange = 16,
        Finished = 20,
        CertificateUrl = 21,
        CertificateStatus = 22,
    }
);

impl HandshakeType {
    /// Field name used when the body of this message fails to decode.
    pub fn body_name(self) -> &'static str {
        match self {
            HandshakeType::HelloRequest => "hello_request",
            HandshakeType::ClientHello => "client_hello",
            HandshakeType::ServerHello => "server_hello",
            HandshakeType::Certificate => "certificate",
            HandshakeType::ServerKeyExchange => "server_key_exchange",
            HandshakeType::CertificateRequest => "certificate_request",
            HandshakeType::ServerHelloDone => "server_hello_done",
            HandshakeType::CertificateVerify => "certificate_verify",
            HandshakeType::ClientKeyExchange => "client_key_exchange",
            HandshakeType::Finished => "finished",
            HandshakeType::CertificateUrl => "certificate_url",
            HandshakeType::CertificateStatus => "certificate_status",
            HandshakeType::Unknown(_) => "body",
        }
    }

    /// Types decoded into a typed `HandshakeMessage` variant instead of raw
    /// bytes.
    pub fn has_grammar(self) -> bool {
        matches!(
            self,
            HandshakeType::HelloRequest
                | HandshakeType::ClientHello
                | HandshakeType::ServerHello
                | HandshakeType::Certificate
                | HandshakeType::CertificateRequest
                | HandshakeType::ServerHelloDone
                | HandshakeType::CertificateUrl
        )
    }
}

/// A handshake message with its body left undecoded. The length on the wire
/// is always the length of `body`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handshake {
    pub msg_type: HandshakeType,
    pub body: Vec<u8>,
}

impl Handshake {
    pub fn new<T: Codec>(msg_type: HandshakeType, message: &T) -> Result<Handshake> {
        Ok(Handshake {
            msg_type,
            body: message.to_bytes()?,
        })
    }

    pub fn length(&self) -> Result<U24> {
        U24::try_from(self.body.len())
    }

    /// Decodes the body as `T`, which has to use it up completely.
    pub fn decode_body<T: Codec>(&self) -> Result<T> {
        tunnel(&self.body, self.msg_type.body_name())
    }

    /// Decodes the body as the grammar `msg_type` selects.
    pub fn message(&self) -> Result<HandshakeMessage> {
        tunnel_with(&self.body, self.msg_type.body_name(), |r| {
            HandshakeMessage::decode_body(self.msg_type, r)
        })
    }
}

impl Codec for Handshake {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.msg_type.encode(out)?;
        write_prefixed(out, LengthPrefix::U24, Bounds::ANY, "length", &self.body)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let msg_type = HandshakeType::decode(r)?;
        let body = read_prefixed(r, LengthPrefix::U24, Bounds::ANY, "length")?;
        Ok(Handshake {
            msg_type,
            body: body.to_vec(),
        })
    }
}

/// Every handshake message with its decoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandshakeMessage {
    HelloRequest,
    ClientHello(ClientHello),
    ServerHello(ServerHello),
    Certificate(Certificate),
    CertificateRequest(CertificateRequest),
    ServerHelloDone,
    CertificateUrl(CertificateUrl),
    /// Bodies whose layout depends on the negotiated suite, kept as bytes.
    Other(HandshakeType, Vec<u8>),
}

impl HandshakeMessage {
    pub fn msg_type(&self) -> HandshakeType {
        match self {
            HandshakeMessage::HelloRequest => HandshakeType::HelloRequest,
            HandshakeMessage::ClientHello(_) => HandshakeType::ClientHello,
            HandshakeMessage::ServerHello(_) => HandshakeType::ServerHello,
            HandshakeMessage::Certificate(_) => HandshakeType::Certificate,
            HandshakeMessage::CertificateRequest(_) => HandshakeType::CertificateRequest,
            HandshakeMessage::ServerHelloDone => HandshakeType::ServerHelloDone,
            HandshakeMessage::CertificateUrl(_) => HandshakeType::CertificateUrl,
            HandshakeMessage::Other(msg_type, _) => *msg_type,
        }
    }

    /// Reads type, length and body, and hands back the length next to the
    /// message.
    pub fn decode_with_length(r: &mut Reader<'_>) -> Result<(HandshakeMessage, U24)> {
        let msg_type = HandshakeType::decode(r)?;
        read_handshake_body(r, msg_type.body_name(), |body| {
            HandshakeMessage::decode_body(msg_type, body)
        })
    }

    /// Writes type, length and body, and returns the length written.
    pub fn encode_with_length(&self, out: &mut Vec<u8>) -> Result<U24> {
        let msg_type = self.msg_type();
        if let HandshakeMessage::Other(_, _) = self {
            if msg_type.has_grammar() {
                return Err(CodecError::invalid(
                    "msg_type",
                    msg_type.to_raw() as u64,
                    Violation::NotAllowed,
                ));
            }
        }
        msg_type.encode(out)?;
        let length = write_handshake_body(out, msg_type.body_name(), |body| self.encode_body(body));
        if length.is_err() {
            out.pop();
        }
        length
    }

    fn decode_body(msg_type: HandshakeType, r: &mut Reader<'_>) -> Result<HandshakeMessage> {
        Ok(match msg_type {
            HandshakeType::HelloRequest => HandshakeMessage::HelloRequest,
            HandshakeType::ServerHelloDone => HandshakeMessage::ServerHelloDone,
            HandshakeType::ClientHello => HandshakeMessage::ClientHello(ClientHello::decode(r)?),
            HandshakeType::ServerHello => HandshakeMessage::ServerHello(ServerHello::decode(r)?),
            HandshakeType::Certificate => HandshakeMessage::Certificate(Certificate::decode(r)?),
            HandshakeType::CertificateRequest => {
                HandshakeMessage::CertificateRequest(CertificateRequest::decode(r)?)
            }
            HandshakeType::CertificateUrl => {
                HandshakeMessage::CertificateUrl(CertificateUrl::decode(r)?)
            }
            other => {
                let body = r.take(r.remaining(), "body")?;
                HandshakeMessage::Other(other, body.to_vec())
            }
        })
    }

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            HandshakeMessage::HelloRequest | HandshakeMessage::ServerHelloDone => Ok(()),
            HandshakeMessage::ClientHello(hello) => hello.encode(out),
            HandshakeMessage::ServerHello(hello) => hello.encode(out),
            HandshakeMessage::Certificate(certificate) => certificate.encode(out),
            HandshakeMessage::CertificateRequest(request) => request.encode(out),
            HandshakeMessage::CertificateUrl(url) => url.encode(out),
            HandshakeMessage::Other(_, body) => {
                out.extend_from_slice(body);
                Ok(())
            }
        }
    }
}

impl Codec for HandshakeMessage {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.encode_with_length(out)?;
        Ok(())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(HandshakeMessage::decode_with_length(r)?.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::cipher_suite::CipherSuite;
    use crate::net::hello::Random;

    fn client_hello() -> ClientHello {
        ClientHello::new(Random::from_array([1; 32]), vec![CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA])
    }

    #[test]
    fn test_handshake_record() {
        let raw = b"\x0e\x00\x00\x00";
        let (handshake, consumed) = Handshake::from_bytes(raw).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(handshake.msg_type, HandshakeType::ServerHelloDone);
        assert!(handshake.body.is_empty());
        assert_eq!(handshake.message().unwrap(), HandshakeMessage::ServerHelloDone);
        assert_eq!(handshake.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_handshake_body_length_is_exact() {
        assert!(Handshake::from_bytes(b"\x14\x00\x00\x05abcd").unwrap_err().is_structural());
        let (handshake, consumed) = Handshake::from_bytes(b"\x14\x00\x00\x03abcd").unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(handshake.body, b"abc");
        assert_eq!(handshake.length().unwrap().get(), 3);
    }

    #[test]
    fn test_unknown_msg_type() {
        // new_session_ticket
        let raw = b"\x04\x00\x00\x00";
        let (handshake, consumed) = Handshake::from_bytes(raw).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(handshake.msg_type, HandshakeType::Unknown(4));
        assert_eq!(handshake.to_bytes().unwrap(), raw);

        let (message, _) = HandshakeMessage::from_bytes(raw).unwrap();
        assert_eq!(message, HandshakeMessage::Other(HandshakeType::Unknown(4), vec![]));
        assert_eq!(message.to_bytes().unwrap(), raw);

        let with_body = b"\x04\x00\x00\x02ab";
        let (message, consumed) = HandshakeMessage::from_bytes(with_body).unwrap();
        assert_eq!(consumed, 6);
        assert_eq!(message.to_bytes().unwrap(), with_body);
    }

    #[test]
    fn test_raw_body_under_a_typed_msg_type() {
        let mut out = b"xy".to_vec();
        let message = HandshakeMessage::Other(HandshakeType::ClientHello, b"junk".to_vec());
        assert_eq!(
            message.encode(&mut out).unwrap_err(),
            CodecError::invalid("msg_type", 1, Violation::NotAllowed)
        );
        assert_eq!(out, b"xy");

        let done = HandshakeMessage::Other(HandshakeType::ServerHelloDone, vec![]);
        assert!(done.to_bytes().unwrap_err().is_validation());
    }

    #[test]
    fn test_decode_body_as_client_hello() {
        let hello = client_hello();
        let handshake = Handshake::new(HandshakeType::ClientHello, &hello).unwrap();
        assert_eq!(handshake.decode_body::<ClientHello>().unwrap(), hello);
        assert_eq!(
            handshake.message().unwrap(),
            HandshakeMessage::ClientHello(hello)
        );
    }

    #[test]
    fn test_body_with_trailing_bytes() {
        let mut handshake = Handshake::new(HandshakeType::ClientHello, &client_hello()).unwrap();
        handshake.body.push(0);
        assert_eq!(
            handshake.decode_body::<ClientHello>().unwrap_err(),
            CodecError::trailing("client_hello", 1)
        );
        assert!(handshake.message().unwrap_err().is_structural());

        let server_hello_done = Handshake {
            msg_type: HandshakeType::ServerHelloDone,
            body: vec![0],
        };
        assert_eq!(
            server_hello_done.message().unwrap_err(),
            CodecError::trailing("server_hello_done", 1)
        );
    }

    #[test]
    fn test_message_exposes_length() {
        let message = HandshakeMessage::ClientHello(client_hello());
        let mut out = vec![];
        let length = message.encode_with_length(&mut out).unwrap();
        assert_eq!(out[0], 1);
        assert_eq!(length.get() as usize, out.len() - 4);
        assert_eq!(&out[1..4], &length.to_be_bytes());

        let mut r = Reader::new(&out);
        let (decoded, decoded_length) = HandshakeMessage::decode_with_length(&mut r).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(decoded_length, length);
        assert!(r.is_empty());
    }

    #[test]
    fn test_opaque_messages() {
        let raw = b"\x14\x00\x00\x0c0123456789ab";
        let (message, consumed) = HandshakeMessage::from_bytes(raw).unwrap();
        assert_eq!(consumed, raw.len());
        assert_eq!(
            message,
            HandshakeMessage::Other(HandshakeType::Finished, b"0123456789ab".to_vec())
        );
        assert_eq!(message.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_failed_encode_leaves_output_untouched() {
        let mut hello = client_hello();
        hello.cipher_suites.clear();
        let mut out = b"xy".to_vec();
        assert!(HandshakeMessage::ClientHello(hello).encode(&mut out).unwrap_err().is_validation());
        assert_eq!(out, b"xy");
    }
}
