/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc5246
 */

/// Largest `TLSPlaintext.fragment`.
pub const MAX_PLAINTEXT_FRAGMENT: u64 = 1 << 14;
/// Largest `TLSCompressed.fragment`.
pub const MAX_COMPRESSED_FRAGMENT: u64 = (1 << 14) + 1024;
/// Largest `TLSCiphertext.fragment`.
pub const MAX_CIPHERTEXT_FRAGMENT: u64 = (1 << 14) + 2048;

pub const RANDOM_BYTES_LEN: usize = 28;
pub const MAX_SESSION_ID_LEN: u64 = 32;
pub const PRE_MASTER_RANDOM_LEN: usize = 46;

/// Bounds of `opaque ASN.1Cert<1..2^24-1>` and of the certificate list.
pub const MIN_CERT_LEN: u64 = 1;
pub const MAX_CERT_LEN: u64 = (1 << 24) - 1;

/// Bounds of `opaque url<1..2^16-1>` in `URLAndHash`.
pub const MIN_URL_LEN: u64 = 1;
pub const MAX_URL_LEN: u64 = (1 << 16) - 1;
/// `URLAndHash.padding` is always this literal.
pub const URL_AND_HASH_PADDING: u8 = 1;
pub const SHA1_HASH_LEN: usize = 20;
