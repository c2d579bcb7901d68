/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub(crate) mod max_fragment_length;
pub(crate) mod server_name;
pub(crate) mod shared;
pub(crate) mod signature_algorithm;

pub use max_fragment_length::MaxFragmentLength;
pub use server_name::{NameType, ServerName, ServerNameList};
pub use shared::{ClientCertificateUrl, Extension, ExtensionType, Extensions};
pub use signature_algorithm::{
    HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm, SupportedSignatureAlgorithms,
};
