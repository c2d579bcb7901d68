/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use tlscodec::net::extensions::{
    Extension, HashAlgorithm, ServerName, ServerNameList, SignatureAlgorithm,
    SignatureAndHashAlgorithm, SupportedSignatureAlgorithms,
};
use tlscodec::net::handshake::ClientHello;
use tlscodec::net::{CipherSuite, Random};
use tlscodec::HandshakeMessage;
use tlscodec_demos::{describe, logger};

fn main() {
    logger::init();

    let host = env::args().nth(1).unwrap_or_else(|| "localhost".to_string());
    let gmt_unix_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0);

    let hello = ClientHello::new(
        Random {
            gmt_unix_time,
            random_bytes: [0x5a; 28],
        },
        vec![
            CipherSuite::TLS_RSA_WITH_AES_128_CBC_SHA256,
            CipherSuite::TLS_RSA_WITH_AES_256_CBC_SHA,
        ],
    )
    .with_extension(Extension::ServerName(ServerNameList(vec![ServerName::host_name(&host)])))
    .with_extension(Extension::SignatureAlgorithms(SupportedSignatureAlgorithms::new(
        SignatureAndHashAlgorithm {
            hash: HashAlgorithm::Sha256,
            signature: SignatureAlgorithm::Rsa,
        },
    )));

    let mut out = vec![];
    match HandshakeMessage::ClientHello(hello).encode_with_length(&mut out) {
        Ok(length) => {
            log::debug!("ClientHello body is {} bytes", length.get());
            println!("{}", hex::encode(&out));
        }
        Err(e) => {
            log::error!("{}", describe(&e));
            std::process::exit(1);
        }
    }
}
