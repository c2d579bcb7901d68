/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.4.1.4
 */

use log::debug;

use crate::codec::array::{read_tls_array, write_tls_array};
use crate::codec::length::{read_opaque, read_prefixed, write_opaque, write_prefixed};
use crate::codec::switch::{read_switch, tls_enum, write_switch, TaggedUnion};
use crate::codec::{Bounds, Codec, CodecError, LengthPrefix, Reader, Result, Violation};
use crate::net::extensions::{MaxFragmentLength, ServerNameList, SupportedSignatureAlgorithms};

tls_enum!(
    /// http://www.iana.org/assignments/tls-extensiontype-values/tls-extensiontype-values.xhtml
    open ExtensionType: u16, "extension_type" => {
        ServerName = 0,
        MaxFragmentLength = 1,
        ClientCertificateUrl = 2,
        TrustedCaKeys = 3,
        TruncatedHmac = 4,
        StatusRequest = 5,
        UserMapping = 6,
        ClientAuthz = 7,
        ServerAuthz = 8,
        CertType = 9,
        SupportedGroups = 10,
        EcPointFormats = 11,
        Srp = 12,
        SignatureAlgorithms = 13,
        UseSrtp = 14,
        Heartbeat = 15,
        ApplicationLayerProtocolNegotiation = 16,
        StatusRequestV2 = 17,
        SignedCertificateTimestamp = 18,
        ClientCertificateType = 19,
        ServerCertificateType = 20,
        Padding = 21,
        EncryptThenMac = 22,
        ExtendedMasterSecret = 23,
        CachedInfo = 25,
        RenegotiationInfo = 65281,
    }
);

impl ExtensionType {
    /// Types decoded into a typed `Extension` variant instead of raw bytes.
    pub fn has_grammar(self) -> bool {
        matches!(
            self,
            ExtensionType::ServerName
                | ExtensionType::MaxFragmentLength
                | ExtensionType::ClientCertificateUrl
                | ExtensionType::SignatureAlgorithms
        )
    }
}

/// Body of the client_certificate_url extension, which is always empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientCertificateUrl;

impl Codec for ClientCertificateUrl {
    fn encode(&self, _out: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }

    fn decode(_r: &mut Reader<'_>) -> Result<Self> {
        Ok(ClientCertificateUrl)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extension {
    ServerName(ServerNameList),
    MaxFragmentLength(MaxFragmentLength),
    ClientCertificateUrl(ClientCertificateUrl),
    SignatureAlgorithms(SupportedSignatureAlgorithms),
    /// Any extension without a grammar here. The body is kept verbatim so
    /// it is written back unchanged.
    Unrecognized {
        extension_type: ExtensionType,
        data: Vec<u8>,
    },
}

impl TaggedUnion for Extension {
    type Tag = ExtensionType;

    fn tag(&self) -> ExtensionType {
        match self {
            Extension::ServerName(_) => ExtensionType::ServerName,
            Extension::MaxFragmentLength(_) => ExtensionType::MaxFragmentLength,
            Extension::ClientCertificateUrl(_) => ExtensionType::ClientCertificateUrl,
            Extension::SignatureAlgorithms(_) => ExtensionType::SignatureAlgorithms,
            Extension::Unrecognized { extension_type, .. } => *extension_type,
        }
    }

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Extension::ServerName(v) => write_opaque(out, v, "server_name_list"),
            Extension::MaxFragmentLength(v) => write_opaque(out, v, "max_fragment_length"),
            Extension::ClientCertificateUrl(v) => write_opaque(out, v, "client_certificate_url"),
            Extension::SignatureAlgorithms(v) => {
                write_opaque(out, v, "supported_signature_algorithms")
            }
            Extension::Unrecognized { extension_type, .. } if extension_type.has_grammar() => {
                Err(CodecError::invalid(
                    "extension_type",
                    extension_type.to_raw() as u64,
                    Violation::NotAllowed,
                ))
            }
            Extension::Unrecognized { data, .. } => {
                write_prefixed(out, LengthPrefix::U16, Bounds::ANY, "extension_data", data)
            }
        }
    }

    fn decode_body(tag: ExtensionType, r: &mut Reader<'_>) -> Result<Self> {
        Ok(match tag {
            ExtensionType::ServerName => Extension::ServerName(read_opaque(r, "server_name_list")?),
            ExtensionType::MaxFragmentLength => {
                Extension::MaxFragmentLength(read_opaque(r, "max_fragment_length")?)
            }
            ExtensionType::ClientCertificateUrl => {
                Extension::ClientCertificateUrl(read_opaque(r, "client_certificate_url")?)
            }
            ExtensionType::SignatureAlgorithms => {
                Extension::SignatureAlgorithms(read_opaque(r, "supported_signature_algorithms")?)
            }
            extension_type => {
                let data = read_prefixed(r, LengthPrefix::U16, Bounds::ANY, "extension_data")?;
                debug!("Passing through extension {extension_type:?} ({} bytes)", data.len());
                Extension::Unrecognized {
                    extension_type,
                    data: data.to_vec(),
                }
            }
        })
    }
}

impl Codec for Extension {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_switch(out, self)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        read_switch(r)
    }
}

/// `Extension extensions<0..2^16-1>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extensions(pub Vec<Extension>);

impl Extensions {
    pub fn new() -> Extensions {
        Extensions(vec![])
    }

    pub fn push(&mut self, extension: Extension) {
        self.0.push(extension)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, extension_type: ExtensionType) -> Option<&Extension> {
        self.0.iter().find(|e| e.tag() == extension_type)
    }

    /// Fails on the first extension whose type is not in `allowed`.
    pub fn check_allowed(&self, allowed: &[ExtensionType]) -> Result<()> {
        match self.0.iter().map(|e| e.tag()).find(|t| !allowed.contains(t)) {
            Some(extension_type) => {
                debug!("Extension {extension_type:?} is not allowed here");
                Err(CodecError::invalid(
                    "extension_type",
                    extension_type.to_raw() as u64,
                    Violation::NotAllowed,
                ))
            }
            None => Ok(()),
        }
    }
}

impl Codec for Extensions {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_tls_array(out, &self.0, Bounds::ANY, "extensions")
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Extensions(read_tls_array(r, Bounds::ANY, "extensions")?))
    }
}
