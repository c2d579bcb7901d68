/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::env;

use tlscodec::{Codec, HandshakeMessage, Reader};
use tlscodec_demos::{describe, logger, parse_hex};

fn main() {
    logger::init();

    let inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: decode_handshake <hex> [<hex> ...]");
        std::process::exit(2);
    }

    let mut failed = false;
    for input in inputs {
        let bytes = match parse_hex(&input) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Not hex: {e}");
                failed = true;
                continue;
            }
        };

        // several messages can be packed into one record
        let mut r = Reader::new(&bytes);
        while !r.is_empty() {
            let start = r.consumed();
            match HandshakeMessage::decode_with_length(&mut r) {
                Ok((message, length)) => {
                    println!("{:?} ({} bytes)", message.msg_type(), length.get());
                    println!("{message:#?}");
                    let same = message
                        .to_bytes()
                        .map(|again| again == bytes[start..r.consumed()])
                        .unwrap_or(false);
                    log::debug!("Re-encodes to the same bytes: {same}");
                }
                Err(e) => {
                    println!("{}", describe(&e));
                    failed = true;
                    break;
                }
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
