/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 * https://www.rfc-editor.org/rfc/rfc6066#section-4
 */

use crate::codec::switch::tls_enum;

tls_enum!(
    closed MaxFragmentLength: u8, "max_fragment_length" => {
        TwoToThe9th = 1,
        TwoToThe10th = 2,
        TwoToThe11th = 3,
        TwoToThe12th = 4,
    }
);

impl MaxFragmentLength {
    /// Negotiated fragment ceiling in bytes.
    pub fn size(self) -> usize {
        1 << (8 + self.to_raw() as usize)
    }
}
