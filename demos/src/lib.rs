/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod logger;

use tlscodec::CodecError;

/// Accepts hex with or without whitespace and `:` separators.
pub fn parse_hex(input: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(cleaned)
}

pub fn describe(e: &CodecError) -> String {
    let alert = e.alert();
    format!("{e} (alert {alert:?}, {})", alert.to_raw())
}
