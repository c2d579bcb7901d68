/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-7.2
 */

use crate::codec::switch::tls_enum;
use crate::codec::{Codec, Reader, Result};

tls_enum!(
    open AlertLevel: u8, "level" => {
        Warning = 1,
        Fatal = 2,
    }
);

tls_enum!(
    open AlertDescription: u8, "description" => {
        CloseNotify = 0,
        UnexpectedMessage = 10,
        BadRecordMac = 20,
        DecryptionFailedReserved = 21,
        RecordOverflow = 22,
        DecompressionFailure = 30,
        HandshakeFailure = 40,
        NoCertificateReserved = 41,
        BadCertificate = 42,
        UnsupportedCertificate = 43,
        CertificateRevoked = 44,
        CertificateExpired = 45,
        CertificateUnknown = 46,
        IllegalParameter = 47,
        UnknownCa = 48,
        AccessDenied = 49,
        DecodeError = 50,
        DecryptError = 51,
        ExportRestrictionReserved = 60,
        ProtocolVersion = 70,
        InsufficientSecurity = 71,
        InternalError = 80,
        UserCanceled = 90,
        NoRenegotiation = 100,
        UnsupportedExtension = 110,
        CertificateUnobtainable = 111,
        UnrecognizedName = 112,
        BadCertificateStatusResponse = 113,
        BadCertificateHashValue = 114,
    }
);

impl AlertLevel {
    /// Everything except close_notify and the alerts a peer may choose to
    /// ignore ends the connection.
    pub fn get_from_description(desc: AlertDescription) -> AlertLevel {
        match desc {
            AlertDescription::CloseNotify
            | AlertDescription::UserCanceled
            | AlertDescription::NoRenegotiation => AlertLevel::Warning,
            _ => AlertLevel::Fatal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub description: AlertDescription,
}

impl Alert {
    pub fn new(description: AlertDescription) -> Alert {
        Alert {
            level: AlertLevel::get_from_description(description),
            description,
        }
    }
}

impl Codec for Alert {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        self.level.encode(out)?;
        self.description.encode(out)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Alert {
            level: AlertLevel::decode(r)?,
            description: AlertDescription::decode(r)?,
        })
    }
}
