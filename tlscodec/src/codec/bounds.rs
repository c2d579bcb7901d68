/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::codec::error::{CodecError, Result, Violation};

/// Closed range `[min, max]` a length or count must fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    pub const ANY: Bounds = Bounds {
        min: 0,
        max: u64::MAX,
    };

    pub const fn at_least(min: u64) -> Bounds {
        Bounds { min, max: u64::MAX }
    }

    pub const fn at_most(max: u64) -> Bounds {
        Bounds { min: 0, max }
    }

    pub const fn within(min: u64, max: u64) -> Bounds {
        Bounds { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Same check on decode and on encode.
    pub fn check(&self, field: &'static str, value: u64) -> Result<u64> {
        if value < self.min {
            return Err(CodecError::invalid(field, value, Violation::BelowMin(self.min)));
        }
        if value > self.max {
            return Err(CodecError::invalid(field, value, Violation::AboveMax(self.max)));
        }
        Ok(value)
    }
}

/// Accepts `value` only when `valid` holds, otherwise a validation failure
/// carrying `raw`.
pub fn validate<T>(field: &'static str, value: T, raw: u64, valid: impl FnOnce(&T) -> bool) -> Result<T> {
    if !valid(&value) {
        return Err(CodecError::invalid(field, raw, Violation::NotAllowed));
    }
    Ok(value)
}

/// The decoded value must be one of `allowed`.
pub fn one_of<T>(field: &'static str, value: T, allowed: &[T]) -> Result<T>
where
    T: PartialEq + Copy + Into<u64>,
{
    validate(field, value, value.into(), |v| allowed.contains(v))
}
