// Dweve GeoWKT - Well-Known Text for Coordinate Reference Systems
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Primitive readers: numbers, quoted strings and structural characters.
//!
//! Each reader returns `Ok(None)` for malformed input and `Err` only when a
//! token exceeds its length limit.

use super::cursor::Cursor;
use crate::dialect::{Dialect, NumberCulture};
use crate::error::{WktError, WktResult};

pub const QUOTE: char = '"';

/// `[` or `(`.
#[inline]
pub fn is_open_bracket(c: char) -> bool {
    c == '[' || c == '('
}

/// `]` or `)`.
#[inline]
pub fn is_close_bracket(c: char) -> bool {
    c == ']' || c == ')'
}

/// Skip whitespace. Returns `false` if the input ran out.
pub fn skip_whitespace<I: Iterator<Item = char>>(cursor: &mut Cursor<I>, dialect: &dyn Dialect) -> bool {
    cursor.skip_while(|c| dialect.is_whitespace(c))
}

/// Read a numeric literal.
///
/// Characters are buffered while the dialect accepts them as numeric, then
/// the buffer is parsed as an invariant float. When that fails and a
/// non-invariant culture is configured, the culture's tokens are rewritten to
/// their invariant form and parsing is retried. A literal that overflows to
/// a non-finite value is a failure.
pub fn read_number<I: Iterator<Item = char>>(
    cursor: &mut Cursor<I>,
    dialect: &dyn Dialect,
    culture: &NumberCulture,
    max_len: usize,
) -> WktResult<Option<f64>> {
    let start = cursor.offset();
    let mut text = String::new();
    while let Some(c) = cursor.current() {
        if !dialect.is_number_char(c, culture) {
            break;
        }
        if text.len() >= max_len {
            return Err(WktError::security(
                format!("numeric literal exceeds {} characters", max_len),
                start,
            ));
        }
        text.push(c);
        cursor.advance();
    }

    let value = match text.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) if !culture.is_invariant() => culture.normalize(&text).parse::<f64>().ok(),
        Err(_) => None,
    };
    // Overflow to infinity has no textual form to write back.
    Ok(value.filter(|v| v.is_finite()))
}

/// Read a double-quoted string starting at the opening quote.
///
/// A doubled quote inside the string is a literal quote. An unterminated
/// string is a failure.
pub fn read_quoted_string<I: Iterator<Item = char>>(
    cursor: &mut Cursor<I>,
    max_len: usize,
) -> WktResult<Option<String>> {
    let start = cursor.offset();
    if cursor.current() != Some(QUOTE) {
        return Ok(None);
    }
    cursor.advance();

    let mut text = String::new();
    loop {
        match cursor.current() {
            None => return Ok(None),
            Some(QUOTE) => {
                cursor.advance();
                if cursor.current() != Some(QUOTE) {
                    return Ok(Some(text));
                }
                text.push(QUOTE);
                cursor.advance();
            }
            Some(c) => {
                text.push(c);
                cursor.advance();
            }
        }
        if text.len() > max_len {
            return Err(WktError::security(
                format!("string exceeds {} bytes", max_len),
                start,
            ));
        }
    }
}
