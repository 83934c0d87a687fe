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

//! Character classification and rendering policy.
//!
//! The reader and writer never hard-code which characters count as
//! whitespace, digits or separators. They ask a [`Dialect`], so callers can
//! accept vendor quirks without touching the grammar.

use crate::lex::WktKeyword;
use crate::model::AxisOrientation;
use std::fmt;

/// Sign and separator tokens used to read numeric literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberCulture {
    pub positive_sign: String,
    pub negative_sign: String,
    pub decimal_separator: String,
    pub group_separator: String,
}

impl NumberCulture {
    /// `+`, `-`, `.` and `,`.
    pub fn invariant() -> Self {
        Self {
            positive_sign: "+".to_string(),
            negative_sign: "-".to_string(),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
        }
    }

    pub fn is_invariant(&self) -> bool {
        *self == Self::invariant()
    }

    /// Whether `c` appears in any of the culture's tokens.
    pub fn contains(&self, c: char) -> bool {
        self.positive_sign.contains(c)
            || self.negative_sign.contains(c)
            || self.decimal_separator.contains(c)
            || self.group_separator.contains(c)
    }

    /// Rewrite culture-specific text into the invariant form.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_string();
        if !self.group_separator.is_empty() && self.group_separator != self.decimal_separator {
            out = out.replace(self.group_separator.as_str(), "");
        }
        if !self.decimal_separator.is_empty() {
            out = out.replace(self.decimal_separator.as_str(), ".");
        }
        if !self.negative_sign.is_empty() {
            out = out.replace(self.negative_sign.as_str(), "-");
        }
        if !self.positive_sign.is_empty() {
            out = out.replace(self.positive_sign.as_str(), "+");
        }
        out
    }
}

impl Default for NumberCulture {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Character classification and keyword rendering strategy.
///
/// Every method has a default matching standard OGC WKT, so an override only
/// needs the methods it changes.
pub trait Dialect: Send + Sync + fmt::Debug {
    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }

    fn is_digit(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    fn is_letter(&self, c: char) -> bool {
        c.is_alphabetic()
    }

    fn is_comma(&self, c: char) -> bool {
        c == ','
    }

    /// Whether `c` may appear inside a numeric literal.
    fn is_number_char(&self, c: char, culture: &NumberCulture) -> bool {
        if self.is_whitespace(c) || self.is_comma(c) {
            return false;
        }
        self.is_digit(c) || matches!(c, '+' | '-' | 'e' | 'E' | '.') || culture.contains(c)
    }

    fn keyword_text(&self, keyword: WktKeyword) -> &'static str {
        keyword.as_str()
    }

    fn orientation_text(&self, orientation: AxisOrientation) -> &'static str {
        orientation.as_str()
    }
}

/// Standard OGC WKT.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDialect;

impl Dialect for DefaultDialect {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SemicolonDialect;

    impl Dialect for SemicolonDialect {
        fn is_comma(&self, c: char) -> bool {
            c == ';'
        }
    }

    // ==================== Default dialect tests ====================

    #[test]
    fn test_number_chars() {
        let d = DefaultDialect;
        let culture = NumberCulture::invariant();
        for c in "0123456789+-eE.".chars() {
            assert!(d.is_number_char(c, &culture), "{}", c);
        }
        for c in [',', ' ', '\t', 'x', ']', '"'] {
            assert!(!d.is_number_char(c, &culture), "{:?}", c);
        }
    }

    #[test]
    fn test_keyword_text() {
        assert_eq!(DefaultDialect.keyword_text(WktKeyword::ParamMt), "PARAM_MT");
        assert_eq!(DefaultDialect.orientation_text(AxisOrientation::East), "EAST");
    }

    #[test]
    fn test_override_comma() {
        let d = SemicolonDialect;
        assert!(d.is_comma(';'));
        assert!(!d.is_comma(','));
        assert!(d.is_number_char(',', &NumberCulture::invariant()));
    }

    // ==================== NumberCulture tests ====================

    #[test]
    fn test_invariant_culture() {
        assert!(NumberCulture::default().is_invariant());
        assert_eq!(NumberCulture::invariant().normalize("-1.5"), "-1.5");
    }

    #[test]
    fn test_normalize_custom_culture() {
        let culture = NumberCulture {
            positive_sign: "+".to_string(),
            negative_sign: "\u{2212}".to_string(),
            decimal_separator: "\u{b7}".to_string(),
            group_separator: "'".to_string(),
        };
        assert!(!culture.is_invariant());
        assert!(culture.contains('\''));
        assert_eq!(culture.normalize("\u{2212}1'000\u{b7}5"), "-1000.5");
    }
}
