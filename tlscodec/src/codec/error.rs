/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::fmt;
use thiserror::Error;

use crate::net::alert::AlertDescription;

/// Malformed framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structural {
    /// Fewer bytes remain than the field needs.
    Truncated { needed: usize, available: usize },
    /// A tunnelled span was not consumed completely.
    TrailingBytes { leftover: usize },
    /// The tag does not name a member of a closed enumeration.
    UnknownTag { value: u64 },
    /// Element `index` of a vector could not be decoded from the `leftover`
    /// bytes at the end of the vector.
    UndecodableElement {
        index: usize,
        leftover: usize,
        cause: Box<CodecError>,
    },
}

impl fmt::Display for Structural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structural::Truncated { needed, available } => {
                write!(f, "needs {needed} bytes, {available} available")
            }
            Structural::TrailingBytes { leftover } => {
                write!(f, "{leftover} bytes left over after the last element")
            }
            Structural::UnknownTag { value } => write!(f, "unknown tag {value:#x}"),
            Structural::UndecodableElement {
                index,
                leftover,
                cause,
            } => write!(f, "element {index} in the last {leftover} bytes: {cause}"),
        }
    }
}

/// A well-framed value that breaks a semantic constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    BelowMin(u64),
    AboveMax(u64),
    NotAllowed,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BelowMin(min) => write!(f, "is below the minimum of {min}"),
            Violation::AboveMax(max) => write!(f, "is above the maximum of {max}"),
            Violation::NotAllowed => write!(f, "is not an allowed value"),
        }
    }
}

/// Every failure of a decode or encode call.
///
/// The two families never overlap: the prefixed array treats a structural
/// failure inside an element as the end of the repetition, while a
/// validation failure always rejects the whole message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed {field}: {problem}")]
    Structural {
        field: &'static str,
        problem: Structural,
    },
    #[error("invalid {field}: {value} {violation}")]
    Validation {
        field: &'static str,
        value: u64,
        violation: Violation,
    },
}

impl CodecError {
    pub fn truncated(field: &'static str, needed: usize, available: usize) -> Self {
        CodecError::Structural {
            field,
            problem: Structural::Truncated { needed, available },
        }
    }

    pub fn trailing(field: &'static str, leftover: usize) -> Self {
        CodecError::Structural {
            field,
            problem: Structural::TrailingBytes { leftover },
        }
    }

    pub fn undecodable_element(
        field: &'static str,
        index: usize,
        leftover: usize,
        cause: CodecError,
    ) -> Self {
        CodecError::Structural {
            field,
            problem: Structural::UndecodableElement {
                index,
                leftover,
                cause: Box::new(cause),
            },
        }
    }

    pub fn unknown_tag(field: &'static str, value: u64) -> Self {
        CodecError::Structural {
            field,
            problem: Structural::UnknownTag { value },
        }
    }

    pub fn invalid(field: &'static str, value: u64, violation: Violation) -> Self {
        CodecError::Validation {
            field,
            value,
            violation,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, CodecError::Structural { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CodecError::Validation { .. })
    }

    /// Name of the wire field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            CodecError::Structural { field, .. } => field,
            CodecError::Validation { field, .. } => field,
        }
    }

    /// The failure inside a vector element that ended the vector.
    pub fn cause(&self) -> Option<&CodecError> {
        match self {
            CodecError::Structural {
                problem: Structural::UndecodableElement { cause, .. },
                ..
            } => Some(cause),
            _ => None,
        }
    }

    /// The alert a peer should receive for this failure.
    pub fn alert(&self) -> AlertDescription {
        match self {
            CodecError::Structural { .. } => AlertDescription::DecodeError,
            CodecError::Validation { .. } => AlertDescription::IllegalParameter,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
