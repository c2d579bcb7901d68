/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246#section-6.2
 */

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::switch::tls_enum;
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};
use crate::net::hello::ProtocolVersion;
use crate::net::limits::{MAX_CIPHERTEXT_FRAGMENT, MAX_COMPRESSED_FRAGMENT, MAX_PLAINTEXT_FRAGMENT};

tls_enum!(
    open ContentType: u8, "type" => {
        ChangeCipherSpec = 20,
        Alert = 21,
        Handshake = 22,
        ApplicationData = 23,
    }
);

/// Which stage of the record layer a fragment belongs to. Each stage allows
/// a different fragment size.
pub trait RecordStage: Debug + Clone + Copy + PartialEq + Eq {
    const MAX_FRAGMENT: u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plaintext;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compressed;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext;

impl RecordStage for Plaintext {
    const MAX_FRAGMENT: u64 = MAX_PLAINTEXT_FRAGMENT;
}
impl RecordStage for Compressed {
    const MAX_FRAGMENT: u64 = MAX_COMPRESSED_FRAGMENT;
}
impl RecordStage for Ciphertext {
    const MAX_FRAGMENT: u64 = MAX_CIPHERTEXT_FRAGMENT;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<S: RecordStage> {
    pub content_type: ContentType,
    pub version: ProtocolVersion,
    pub fragment: Vec<u8>,
    stage: PhantomData<S>,
}

pub type TlsPlaintext = Record<Plaintext>;
pub type TlsCompressed = Record<Compressed>;
pub type TlsCiphertext = Record<Ciphertext>;

impl<S: RecordStage> Record<S> {
    const BOUNDS: Bounds = Bounds::at_most(S::MAX_FRAGMENT);

    pub fn new(content_type: ContentType, version: ProtocolVersion, fragment: Vec<u8>) -> Record<S> {
        Record {
            content_type,
            version,
            fragment,
            stage: PhantomData,
        }
    }
}

impl<S: RecordStage> Codec for Record<S> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        let start = out.len();
        self.content_type.encode(out)?;
        self.version.encode(out)?;
        write_prefixed(out, LengthPrefix::U16, Self::BOUNDS, "fragment", &self.fragment)
            .map_err(|e| {
                out.truncate(start);
                e
            })
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let content_type = ContentType::decode(r)?;
        let version = ProtocolVersion::decode(r)?;
        let fragment = read_prefixed(r, LengthPrefix::U16, Self::BOUNDS, "fragment")?;
        Ok(Record::new(content_type, version, fragment.to_vec()))
    }
}
