/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc6066#section-3
 */

use crate::codec::array::{read_tls_array, write_tls_array};
use crate::codec::length::{read_prefixed, write_prefixed};
use crate::codec::switch::{read_switch, tls_enum, write_switch, TaggedUnion};
use crate::codec::{Bounds, Codec, LengthPrefix, Reader, Result};

tls_enum!(
    closed NameType: u8, "name_type" => {
        HostName = 0,
    }
);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerName {
    /// `opaque HostName<1..2^16-1>`, ASCII without a trailing dot.
    HostName(Vec<u8>),
}

impl ServerName {
    pub fn host_name(name: &str) -> ServerName {
        ServerName::HostName(name.as_bytes().to_vec())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ServerName::HostName(name) => std::str::from_utf8(name).ok(),
        }
    }
}

impl TaggedUnion for ServerName {
    type Tag = NameType;

    fn tag(&self) -> NameType {
        match self {
            ServerName::HostName(_) => NameType::HostName,
        }
    }

    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            ServerName::HostName(name) => {
                write_prefixed(out, LengthPrefix::U16, Bounds::ANY, "host_name", name)
            }
        }
    }

    fn decode_body(tag: NameType, r: &mut Reader<'_>) -> Result<Self> {
        Ok(match tag {
            NameType::HostName => {
                let name = read_prefixed(r, LengthPrefix::U16, Bounds::ANY, "host_name")?;
                ServerName::HostName(name.to_vec())
            }
        })
    }
}

impl Codec for ServerName {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_switch(out, self)
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        read_switch(r)
    }
}

/// `ServerName server_name_list<1..2^16-1>` in RFC 6066; an empty list is
/// accepted on both decode and encode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerNameList(pub Vec<ServerName>);

impl ServerNameList {
    pub fn host_name(&self) -> Option<&str> {
        self.0.iter().find_map(|name| name.as_str())
    }
}

impl Codec for ServerNameList {
    fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
        write_tls_array(out, &self.0, Bounds::ANY, "server_name_list")
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(ServerNameList(read_tls_array(r, Bounds::ANY, "server_name_list")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    #[test]
    fn test_server_name_list() {
        let list = ServerNameList(vec![ServerName::host_name("example.com")]);
        let raw = list.to_bytes().unwrap();
        assert_eq!(raw, b"\x00\x0e\x00\x00\x0bexample.com");
        let (decoded, consumed) = ServerNameList::from_bytes(&raw).unwrap();
        assert_eq!(consumed, raw.len());
        assert_eq!(decoded.host_name(), Some("example.com"));
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_empty_server_name_list() {
        let (list, consumed) = ServerNameList::from_bytes(b"\x00\x00").unwrap();
        assert_eq!(consumed, 2);
        assert!(list.0.is_empty());
        assert_eq!(list.host_name(), None);
        assert_eq!(list.to_bytes().unwrap(), b"\x00\x00");
    }

    #[test]
    fn test_unknown_name_type() {
        let err = ServerName::from_bytes(b"\x01\x00\x01a").unwrap_err();
        assert_eq!(err, CodecError::unknown_tag("name_type", 1));

        // inside the list the unknown tag ends the repetition, and the
        // bytes it left behind reject the list
        let err = ServerNameList::from_bytes(b"\x00\x04\x01\x00\x01a").unwrap_err();
        assert_eq!(
            err,
            CodecError::undecodable_element(
                "server_name_list",
                0,
                4,
                CodecError::unknown_tag("name_type", 1)
            )
        );
        assert_eq!(err.cause(), Some(&CodecError::unknown_tag("name_type", 1)));
    }

    #[test]
    fn test_host_name_truncated() {
        let err = ServerName::from_bytes(b"\x00\x00\x05abc").unwrap_err();
        assert_eq!(err, CodecError::truncated("host_name", 5, 3));
    }
}
