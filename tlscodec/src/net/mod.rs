/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod alert;
pub mod cipher_suite;
pub mod extensions;
pub mod handshake;
pub mod hello;
pub mod limits;
pub mod record;

pub use alert::{Alert, AlertDescription, AlertLevel};
pub use cipher_suite::CipherSuite;
pub use handshake::{Handshake, HandshakeMessage, HandshakeType};
pub use hello::{CompressionMethod, ProtocolVersion, Random, SessionId};
pub use record::{ContentType, TlsCiphertext, TlsCompressed, TlsPlaintext};
