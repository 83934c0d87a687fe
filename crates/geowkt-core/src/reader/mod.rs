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

//! The WKT reader.
//!
//! Reading is a single forward pass. [`WktReader::read_entity`] looks at the
//! next character and reads a quoted string, a number or a keyword object.
//! A keyword object is its keyword, an opening bracket and a parameter list
//! read by [`WktReader::read_params`], which calls back into `read_entity`
//! for every element. A builder per keyword then turns the list into a
//! domain object.
//!
//! # Failure model
//!
//! Malformed input yields `Ok(None)`. The reader remembers the innermost
//! reason and offset (see [`WktReader::last_failure`]) so that strict mode
//! can report it. `Err` is reserved for limit violations and for operations
//! that cannot be inverted.

mod builders;

use crate::dialect::Dialect;
use crate::error::{WktError, WktResult};
use crate::lex::primitives::{self, is_close_bracket, is_open_bracket, QUOTE};
use crate::lex::{read_keyword, Cursor, WktKeyword};
use crate::model::WktValue;
use crate::options::ParseOptions;
use tracing::debug;

/// Why and where a read failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub reason: String,
    pub offset: usize,
}

/// Recursive-descent reader over a character source.
pub struct WktReader<'o, I: Iterator<Item = char>> {
    cursor: Cursor<I>,
    options: &'o ParseOptions,
    depth: usize,
    failure: Option<ReadFailure>,
}

impl<'a, 'o> WktReader<'o, std::str::Chars<'a>> {
    /// Reader over a string slice.
    pub fn from_text(input: &'a str, options: &'o ParseOptions) -> Self {
        Self::new(input.chars(), options)
    }
}

impl<'o, I: Iterator<Item = char>> WktReader<'o, I> {
    pub fn new(chars: I, options: &'o ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(chars),
            options,
            depth: 0,
            failure: None,
        }
    }

    /// The innermost failure recorded so far.
    pub fn last_failure(&self) -> Option<&ReadFailure> {
        self.failure.as_ref()
    }

    /// Character offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    fn dialect(&self) -> &dyn Dialect {
        self.options.dialect.as_ref()
    }

    /// Record a soft failure and return `Ok(None)`.
    ///
    /// Failures propagate outwards without recovery, so the first one
    /// recorded is the innermost cause.
    fn fail<T>(&mut self, reason: impl Into<String>, offset: usize) -> WktResult<Option<T>> {
        if self.failure.is_none() {
            let reason = reason.into();
            debug!(offset, reason = %reason, "soft read failure");
            self.failure = Some(ReadFailure { reason, offset });
        }
        Ok(None)
    }

    fn skip_whitespace(&mut self) -> bool {
        let dialect = self.options.dialect.as_ref();
        primitives::skip_whitespace(&mut self.cursor, dialect)
    }

    /// Read one entity: a quoted string, a keyword object or a number.
    pub fn read_entity(&mut self) -> WktResult<Option<WktValue>> {
        if !self.skip_whitespace() {
            return self.fail("unexpected end of input", self.cursor.offset());
        }
        let start = self.cursor.offset();
        let Some(c) = self.cursor.current() else {
            return self.fail("unexpected end of input", start);
        };

        if c == QUOTE {
            let max = self.options.limits.max_token_length;
            return match primitives::read_quoted_string(&mut self.cursor, max)? {
                Some(text) => Ok(Some(WktValue::Text(text))),
                None => self.fail("unterminated string", start),
            };
        }
        if self.dialect().is_letter(c) || c == '_' {
            return self.read_object();
        }
        if self.dialect().is_number_char(c, &self.options.culture) {
            let max = self.options.limits.max_token_length;
            let dialect = self.options.dialect.as_ref();
            return match primitives::read_number(&mut self.cursor, dialect, &self.options.culture, max)? {
                Some(n) => Ok(Some(WktValue::Number(n))),
                None => self.fail("malformed number", start),
            };
        }
        self.fail(format!("unexpected character '{}'", c), start)
    }

    /// Read a keyword object: `KEYWORD[...]`, or a bare direction keyword.
    pub fn read_object(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let Some(keyword) = read_keyword(&mut self.cursor) else {
            return self.fail("unknown keyword", start);
        };
        if keyword.is_direction() {
            return Ok(Some(WktValue::Keyword(keyword)));
        }
        if !self.read_open_bracket() {
            return self.fail(format!("open bracket expected after {}", keyword), self.cursor.offset());
        }

        let result = match keyword {
            WktKeyword::Authority => self.read_authority(),
            WktKeyword::Axis => self.read_axis(),
            WktKeyword::Parameter => self.read_parameter(),
            WktKeyword::ParamMt => self.read_param_mt(),
            WktKeyword::ConcatMt => self.read_concat_mt(),
            WktKeyword::InverseMt => self.read_inverse_mt(start),
            WktKeyword::PassThroughMt => self.read_pass_through_mt(),
            WktKeyword::CompoundCs => self.read_compound_cs(),
            WktKeyword::ProjectedCs => self.read_projected_cs(),
            WktKeyword::GeographicCs => self.read_geographic_cs(),
            WktKeyword::GeocentricCs => self.read_geocentric_cs(),
            WktKeyword::VerticalCs => self.read_vertical_cs(),
            WktKeyword::LocalCs => self.read_local_cs(),
            WktKeyword::FittedCs => self.read_fitted_cs(),
            WktKeyword::Spheroid => self.read_spheroid(),
            WktKeyword::PrimeMeridian => self.read_prime_meridian(),
            WktKeyword::Unit => self.read_unit(),
            WktKeyword::Datum => self.read_horizontal_datum(),
            WktKeyword::VerticalDatum => self.read_basic_datum(true),
            WktKeyword::LocalDatum => self.read_basic_datum(false),
            WktKeyword::ToWgs84 => self.read_to_wgs84(),
            WktKeyword::Projection => self.read_projection(),
            WktKeyword::North
            | WktKeyword::South
            | WktKeyword::East
            | WktKeyword::West
            | WktKeyword::Up
            | WktKeyword::Down
            | WktKeyword::Other => Ok(Some(WktValue::Keyword(keyword))),
        };
        result.map_err(|e| match e.context {
            Some(_) => e,
            None => e.with_context(format!("while reading {}", keyword)),
        })
    }

    fn read_open_bracket(&mut self) -> bool {
        if !self.skip_whitespace() || !self.cursor.at(is_open_bracket) {
            return false;
        }
        self.cursor.advance();
        true
    }

    /// Read a comma-separated parameter list up to and including the closing
    /// bracket. The opening bracket must already be consumed.
    ///
    /// Returns `Ok(None)` for an empty, unterminated or otherwise malformed
    /// list; a partial list is never returned.
    pub fn read_params(&mut self) -> WktResult<Option<Vec<WktValue>>> {
        if self.depth >= self.options.limits.max_nesting_depth {
            return Err(WktError::security(
                format!(
                    "nesting depth exceeds limit of {}",
                    self.options.limits.max_nesting_depth
                ),
                self.cursor.offset(),
            ));
        }
        self.depth += 1;
        let result = self.read_params_inner();
        self.depth -= 1;
        result
    }

    fn read_params_inner(&mut self) -> WktResult<Option<Vec<WktValue>>> {
        let mut params = Vec::new();
        loop {
            let Some(value) = self.read_entity()? else {
                return Ok(None);
            };
            if params.len() >= self.options.limits.max_params {
                return Err(WktError::security(
                    format!(
                        "parameter list exceeds limit of {} elements",
                        self.options.limits.max_params
                    ),
                    self.cursor.offset(),
                ));
            }
            params.push(value);

            if !self.skip_whitespace() {
                return self.fail("unterminated parameter list", self.cursor.offset());
            }
            match self.cursor.current() {
                Some(c) if self.dialect().is_comma(c) => {
                    self.cursor.advance();
                }
                Some(c) if is_close_bracket(c) => {
                    self.cursor.advance();
                    return Ok(Some(params));
                }
                Some(c) => {
                    return self.fail(
                        format!("expected ',' or closing bracket, found '{}'", c),
                        self.cursor.offset(),
                    );
                }
                None => return self.fail("unterminated parameter list", self.cursor.offset()),
            }
        }
    }

    /// Read exactly one top-level entity followed only by whitespace.
    pub fn read_document(&mut self) -> WktResult<Option<WktValue>> {
        let Some(value) = self.read_entity()? else {
            return Ok(None);
        };
        if self.skip_whitespace() {
            let offset = self.cursor.offset();
            return self.fail("unexpected content after entity", offset);
        }
        Ok(Some(value))
    }
}

/// Parse one WKT entity with default options.
///
/// Returns `Ok(None)` when the input is not well-formed WKT.
///
/// # Examples
///
/// ```
/// use geowkt_core::{parse, WktValue};
///
/// let value = parse(r#"AXIS["Lat",NORTH]"#).unwrap().unwrap();
/// assert!(matches!(value, WktValue::Axis(_)));
/// assert!(parse("GEOGC[").unwrap().is_none());
/// ```
pub fn parse(input: &str) -> WktResult<Option<WktValue>> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse one WKT entity.
///
/// In strict mode a malformed document is a `Syntax` error carrying the
/// innermost failure reason instead of `Ok(None)`.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> WktResult<Option<WktValue>> {
    if input.len() > options.limits.max_input_size {
        return Err(WktError::security(
            format!(
                "input of {} bytes exceeds limit of {} bytes",
                input.len(),
                options.limits.max_input_size
            ),
            0,
        ));
    }

    let mut reader = WktReader::from_text(input, options);
    let value = reader.read_document()?;
    if value.is_none() && options.strict {
        let failure = reader.last_failure().cloned().unwrap_or(ReadFailure {
            reason: "no entity".to_string(),
            offset: reader.offset(),
        });
        return Err(WktError::syntax(failure.reason, failure.offset));
    }
    Ok(value)
}
