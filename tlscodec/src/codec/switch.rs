/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::codec::error::Result;
use crate::codec::{Codec, Reader};

/// Integer widths a discriminant can have on the wire.
pub trait WireInt: Copy + Into<u64> {
    fn read(r: &mut Reader<'_>, field: &'static str) -> Result<Self>;
    fn write(self, out: &mut Vec<u8>);
}

impl WireInt for u8 {
    fn read(r: &mut Reader<'_>, field: &'static str) -> Result<Self> {
        r.read_u8(field)
    }
    fn write(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl WireInt for u16 {
    fn read(r: &mut Reader<'_>, field: &'static str) -> Result<Self> {
        r.read_u16(field)
    }
    fn write(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes());
    }
}

/// A discriminant followed by a body whose layout depends on it.
///
/// Implementors are enums with one variant per known discriminant and, where
/// the protocol asks for it, one fallback variant.
pub trait TaggedUnion: Sized {
    type Tag: Codec + Copy;

    fn tag(&self) -> Self::Tag;
    fn encode_body(&self, out: &mut Vec<u8>) -> Result<()>;
    fn decode_body(tag: Self::Tag, r: &mut Reader<'_>) -> Result<Self>;
}

pub fn read_switch<U: TaggedUnion>(r: &mut Reader<'_>) -> Result<U> {
    let tag = U::Tag::decode(r)?;
    U::decode_body(tag, r)
}

/// On failure nothing of `value` is left in `out`.
pub fn write_switch<U: TaggedUnion>(out: &mut Vec<u8>, value: &U) -> Result<()> {
    let start = out.len();
    value.tag().encode(out)?;
    value.encode_body(out).map_err(|e| {
        out.truncate(start);
        e
    })
}

/// Declares a wire enumeration.
///
/// `closed` enums reject raw values they do not list, `open` enums keep them
/// in an `Unknown` variant so they survive a round trip.
macro_rules! tls_enum {
    (
        $(#[$meta:meta])*
        closed $name:ident: $repr:ident, $field:literal => {
            $( $case:ident = $val:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $case, )*
        }

        impl $name {
            pub fn from_raw(v: $repr) -> Option<$name> {
                Some(match v {
                    $( $val => $name::$case, )*
                    _ => return None,
                })
            }

            pub fn to_raw(self) -> $repr {
                match self {
                    $( $name::$case => $val, )*
                }
            }
        }

        impl $crate::codec::Codec for $name {
            fn encode(&self, out: &mut Vec<u8>) -> $crate::codec::Result<()> {
                $crate::codec::switch::WireInt::write(self.to_raw(), out);
                Ok(())
            }

            fn decode(r: &mut $crate::codec::Reader<'_>) -> $crate::codec::Result<Self> {
                let v = <$repr as $crate::codec::switch::WireInt>::read(r, $field)?;
                $name::from_raw(v)
                    .ok_or_else(|| $crate::codec::CodecError::unknown_tag($field, v as u64))
            }
        }
    };
    (
        $(#[$meta:meta])*
        open $name:ident: $repr:ident, $field:literal => {
            $( $case:ident = $val:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $case, )*
            Unknown($repr),
        }

        impl $name {
            pub fn from_raw(v: $repr) -> $name {
                match v {
                    $( $val => $name::$case, )*
                    _ => $name::Unknown(v),
                }
            }

            pub fn to_raw(self) -> $repr {
                match self {
                    $( $name::$case => $val, )*
                    $name::Unknown(v) => v,
                }
            }
        }

        impl $crate::codec::Codec for $name {
            /// `Unknown` holding a listed value would come back as the named
            /// variant, so it is refused.
            fn encode(&self, out: &mut Vec<u8>) -> $crate::codec::Result<()> {
                if let $name::Unknown(v) = *self {
                    if !matches!($name::from_raw(v), $name::Unknown(_)) {
                        return Err($crate::codec::CodecError::invalid(
                            $field,
                            v as u64,
                            $crate::codec::Violation::NotAllowed,
                        ));
                    }
                }
                $crate::codec::switch::WireInt::write(self.to_raw(), out);
                Ok(())
            }

            fn decode(r: &mut $crate::codec::Reader<'_>) -> $crate::codec::Result<Self> {
                let v = <$repr as $crate::codec::switch::WireInt>::read(r, $field)?;
                Ok($name::from_raw(v))
            }
        }
    };
}
pub(crate) use tls_enum;
