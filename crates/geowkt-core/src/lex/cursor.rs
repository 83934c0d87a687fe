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

//! Single-character lookahead over a character source.

/// Advance-only cursor with one character of lookahead.
///
/// The cursor is primed on construction: `current()` is the first character
/// of the input, or `None` for empty input. Once the end is reached,
/// `advance` keeps returning `false`.
#[derive(Debug, Clone)]
pub struct Cursor<I: Iterator<Item = char>> {
    chars: I,
    current: Option<char>,
    offset: usize,
}

impl<'a> Cursor<std::str::Chars<'a>> {
    /// Cursor over a string slice.
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

impl<I: Iterator<Item = char>> Cursor<I> {
    pub fn new(mut chars: I) -> Self {
        let current = chars.next();
        Self {
            chars,
            current,
            offset: 0,
        }
    }

    /// The character under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Character offset of `current()` from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Whether the current character satisfies `pred`. False at end of input.
    #[inline]
    pub fn at(&self, pred: impl FnOnce(char) -> bool) -> bool {
        self.current.is_some_and(pred)
    }

    /// Move to the next character. Returns `false` when no character remains.
    pub fn advance(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.current = self.chars.next();
        self.offset += 1;
        self.current.is_some()
    }

    /// Advance while `pred` holds. Returns `false` if the input ran out.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        while let Some(c) = self.current {
            if !pred(c) {
                return true;
            }
            self.advance();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primed_on_construction() {
        let cursor = Cursor::from_text("ab");
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::from_text("");
        assert!(cursor.is_eof());
        assert!(!cursor.advance());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_advance_to_end_is_sticky() {
        let mut cursor = Cursor::from_text("ab");
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some('b'));
        assert!(!cursor.advance());
        assert!(cursor.is_eof());
        assert!(!cursor.advance());
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_skip_while() {
        let mut cursor = Cursor::from_text("   x");
        assert!(cursor.skip_while(char::is_whitespace));
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.offset(), 3);

        let mut cursor = Cursor::from_text("   ");
        assert!(!cursor.skip_while(char::is_whitespace));
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let mut cursor = Cursor::from_text("é\"");
        cursor.advance();
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.current(), Some('"'));
    }
}
