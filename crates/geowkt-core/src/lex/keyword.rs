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

//! WKT keywords and the keyword recognizer.
//!
//! Recognition walks a fixed decision tree one character at a time: the
//! first letter selects a branch, shared prefixes are verified literally and
//! the next distinguishing letter picks the sub-branch (GEOGCS vs GEOCCS,
//! PARAMETER vs PARAM_MT, PROJCS vs PROJECTION, and so on). Matching is
//! case-insensitive and exact: a truncated or extended keyword is no match.
//!
//! Characters examined before a mismatch are consumed. The cursor has no
//! pushback, so the enclosing read fails rather than re-scanning.

use super::cursor::Cursor;
use crate::model::AxisOrientation;
use std::fmt;
use tracing::trace;

/// The closed WKT keyword vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WktKeyword {
    // Coordinate reference systems
    GeographicCs,
    GeocentricCs,
    ProjectedCs,
    VerticalCs,
    LocalCs,
    CompoundCs,
    FittedCs,
    // Components
    Datum,
    VerticalDatum,
    LocalDatum,
    Spheroid,
    PrimeMeridian,
    Unit,
    Axis,
    Authority,
    Parameter,
    Projection,
    ToWgs84,
    // Coordinate operations
    ParamMt,
    ConcatMt,
    InverseMt,
    PassThroughMt,
    // Axis directions
    North,
    South,
    East,
    West,
    Up,
    Down,
    Other,
}

impl WktKeyword {
    /// Every keyword, in declaration order.
    pub const ALL: [WktKeyword; 29] = [
        Self::GeographicCs,
        Self::GeocentricCs,
        Self::ProjectedCs,
        Self::VerticalCs,
        Self::LocalCs,
        Self::CompoundCs,
        Self::FittedCs,
        Self::Datum,
        Self::VerticalDatum,
        Self::LocalDatum,
        Self::Spheroid,
        Self::PrimeMeridian,
        Self::Unit,
        Self::Axis,
        Self::Authority,
        Self::Parameter,
        Self::Projection,
        Self::ToWgs84,
        Self::ParamMt,
        Self::ConcatMt,
        Self::InverseMt,
        Self::PassThroughMt,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
        Self::Other,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeographicCs => "GEOGCS",
            Self::GeocentricCs => "GEOCCS",
            Self::ProjectedCs => "PROJCS",
            Self::VerticalCs => "VERT_CS",
            Self::LocalCs => "LOCAL_CS",
            Self::CompoundCs => "COMPD_CS",
            Self::FittedCs => "FITTED_CS",
            Self::Datum => "DATUM",
            Self::VerticalDatum => "VERT_DATUM",
            Self::LocalDatum => "LOCAL_DATUM",
            Self::Spheroid => "SPHEROID",
            Self::PrimeMeridian => "PRIMEM",
            Self::Unit => "UNIT",
            Self::Axis => "AXIS",
            Self::Authority => "AUTHORITY",
            Self::Parameter => "PARAMETER",
            Self::Projection => "PROJECTION",
            Self::ToWgs84 => "TOWGS84",
            Self::ParamMt => "PARAM_MT",
            Self::ConcatMt => "CONCAT_MT",
            Self::InverseMt => "INVERSE_MT",
            Self::PassThroughMt => "PASSTHROUGH_MT",
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Other => "OTHER",
        }
    }

    /// Axis direction keywords stand alone and take no bracketed list.
    pub fn is_direction(&self) -> bool {
        self.orientation().is_some()
    }

    pub fn orientation(&self) -> Option<AxisOrientation> {
        match self {
            Self::North => Some(AxisOrientation::North),
            Self::South => Some(AxisOrientation::South),
            Self::East => Some(AxisOrientation::East),
            Self::West => Some(AxisOrientation::West),
            Self::Up => Some(AxisOrientation::Up),
            Self::Down => Some(AxisOrientation::Down),
            Self::Other => Some(AxisOrientation::Other),
            _ => None,
        }
    }
}

impl From<AxisOrientation> for WktKeyword {
    fn from(orientation: AxisOrientation) -> Self {
        match orientation {
            AxisOrientation::North => Self::North,
            AxisOrientation::South => Self::South,
            AxisOrientation::East => Self::East,
            AxisOrientation::West => Self::West,
            AxisOrientation::Up => Self::Up,
            AxisOrientation::Down => Self::Down,
            AxisOrientation::Other => Self::Other,
        }
    }
}

impl fmt::Display for WktKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consume the current character, returning it upper-cased.
fn take<I: Iterator<Item = char>>(cursor: &mut Cursor<I>) -> Option<char> {
    let c = cursor.current()?.to_ascii_uppercase();
    cursor.advance();
    Some(c)
}

/// Consume `suffix` case-insensitively, stopping at the first mismatch.
fn submatch<I: Iterator<Item = char>>(cursor: &mut Cursor<I>, suffix: &str) -> bool {
    for expected in suffix.chars() {
        match cursor.current() {
            Some(c) if c.to_ascii_uppercase() == expected => {
                cursor.advance();
            }
            _ => return false,
        }
    }
    true
}

fn finish<I: Iterator<Item = char>>(
    cursor: &mut Cursor<I>,
    suffix: &str,
    keyword: WktKeyword,
) -> Option<WktKeyword> {
    submatch(cursor, suffix).then_some(keyword)
}

/// Recognize the keyword starting at the cursor.
///
/// Returns `None` when the characters do not spell a keyword exactly; the
/// characters examined so far are consumed either way.
pub fn read_keyword<I: Iterator<Item = char>>(cursor: &mut Cursor<I>) -> Option<WktKeyword> {
    use WktKeyword::*;

    let start = cursor.offset();
    let keyword = match take(cursor)? {
        'A' => match take(cursor)? {
            'U' => finish(cursor, "THORITY", Authority),
            'X' => finish(cursor, "IS", Axis),
            _ => None,
        },
        'C' if submatch(cursor, "O") => match take(cursor)? {
            'M' => finish(cursor, "PD_CS", CompoundCs),
            'N' => finish(cursor, "CAT_MT", ConcatMt),
            _ => None,
        },
        'D' => match take(cursor)? {
            'A' => finish(cursor, "TUM", Datum),
            'O' => finish(cursor, "WN", Down),
            _ => None,
        },
        'E' => finish(cursor, "AST", East),
        'F' => finish(cursor, "ITTED_CS", FittedCs),
        'G' if submatch(cursor, "EO") => match take(cursor)? {
            'C' => finish(cursor, "CS", GeocentricCs),
            'G' => finish(cursor, "CS", GeographicCs),
            _ => None,
        },
        'I' => finish(cursor, "NVERSE_MT", InverseMt),
        'L' if submatch(cursor, "OCAL_") => match take(cursor)? {
            'C' => finish(cursor, "S", LocalCs),
            'D' => finish(cursor, "ATUM", LocalDatum),
            _ => None,
        },
        'N' => finish(cursor, "ORTH", North),
        'O' => finish(cursor, "THER", Other),
        'P' => read_keyword_p(cursor),
        'S' => match take(cursor)? {
            'O' => finish(cursor, "UTH", South),
            'P' => finish(cursor, "HEROID", Spheroid),
            _ => None,
        },
        'T' => finish(cursor, "OWGS84", ToWgs84),
        'U' => match take(cursor)? {
            'N' => finish(cursor, "IT", Unit),
            'P' => Some(Up),
            _ => None,
        },
        'V' if submatch(cursor, "ERT_") => match take(cursor)? {
            'C' => finish(cursor, "S", VerticalCs),
            'D' => finish(cursor, "ATUM", VerticalDatum),
            _ => None,
        },
        'W' => finish(cursor, "EST", West),
        _ => None,
    };

    // A keyword must not run on into a longer identifier.
    let keyword = keyword.filter(|_| !cursor.at(|c| c.is_alphanumeric() || c == '_'));
    match keyword {
        Some(k) => trace!(keyword = %k, offset = start, "recognized keyword"),
        None => trace!(offset = start, "no keyword match"),
    }
    keyword
}

/// PARAMETER, PARAM_MT, PASSTHROUGH_MT, PRIMEM, PROJCS, PROJECTION.
fn read_keyword_p<I: Iterator<Item = char>>(cursor: &mut Cursor<I>) -> Option<WktKeyword> {
    use WktKeyword::*;

    match take(cursor)? {
        'A' => match take(cursor)? {
            'S' => finish(cursor, "STHROUGH_MT", PassThroughMt),
            'R' if submatch(cursor, "AM") => match take(cursor)? {
                'E' => finish(cursor, "TER", Parameter),
                '_' => finish(cursor, "MT", ParamMt),
                _ => None,
            },
            _ => None,
        },
        'R' => match take(cursor)? {
            'I' => finish(cursor, "MEM", PrimeMeridian),
            'O' if submatch(cursor, "J") => match take(cursor)? {
                'C' => finish(cursor, "S", ProjectedCs),
                'E' => finish(cursor, "CTION", Projection),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Option<WktKeyword> {
        read_keyword(&mut Cursor::from_text(text))
    }

    // ==================== Vocabulary tests ====================

    #[test]
    fn test_every_keyword_recognized() {
        for keyword in WktKeyword::ALL {
            assert_eq!(recognize(keyword.as_str()), Some(keyword), "{}", keyword);
        }
    }

    #[test]
    fn test_every_keyword_recognized_lowercase() {
        for keyword in WktKeyword::ALL {
            let lower = keyword.as_str().to_lowercase();
            assert_eq!(recognize(&lower), Some(keyword), "{}", lower);
        }
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(recognize("aUtHoRiTy"), Some(WktKeyword::Authority));
        assert_eq!(recognize("Param_Mt"), Some(WktKeyword::ParamMt));
    }

    // ==================== Disambiguation tests ====================

    #[test]
    fn test_shared_prefixes() {
        assert_eq!(recognize("GEOGCS["), Some(WktKeyword::GeographicCs));
        assert_eq!(recognize("GEOCCS["), Some(WktKeyword::GeocentricCs));
        assert_eq!(recognize("PARAMETER["), Some(WktKeyword::Parameter));
        assert_eq!(recognize("PARAM_MT["), Some(WktKeyword::ParamMt));
        assert_eq!(recognize("PROJCS["), Some(WktKeyword::ProjectedCs));
        assert_eq!(recognize("PROJECTION["), Some(WktKeyword::Projection));
        assert_eq!(recognize("LOCAL_CS["), Some(WktKeyword::LocalCs));
        assert_eq!(recognize("LOCAL_DATUM["), Some(WktKeyword::LocalDatum));
        assert_eq!(recognize("VERT_CS["), Some(WktKeyword::VerticalCs));
        assert_eq!(recognize("VERT_DATUM["), Some(WktKeyword::VerticalDatum));
        assert_eq!(recognize("SOUTH]"), Some(WktKeyword::South));
        assert_eq!(recognize("SPHEROID["), Some(WktKeyword::Spheroid));
        assert_eq!(recognize("UP]"), Some(WktKeyword::Up));
        assert_eq!(recognize("UNIT["), Some(WktKeyword::Unit));
        assert_eq!(recognize("DOWN]"), Some(WktKeyword::Down));
        assert_eq!(recognize("DATUM["), Some(WktKeyword::Datum));
    }

    #[test]
    fn test_stops_before_bracket() {
        let mut cursor = Cursor::from_text("AXIS[\"Lat\",NORTH]");
        assert_eq!(read_keyword(&mut cursor), Some(WktKeyword::Axis));
        assert_eq!(cursor.current(), Some('['));
        assert_eq!(cursor.offset(), 4);
    }

    // ==================== No-match tests ====================

    #[test]
    fn test_truncated_keyword() {
        assert_eq!(recognize("GEOGC"), None);
        assert_eq!(recognize("GEOGC["), None);
        assert_eq!(recognize("PARAM"), None);
        assert_eq!(recognize("VERT_"), None);
    }

    #[test]
    fn test_extended_keyword() {
        assert_eq!(recognize("UNITS["), None);
        assert_eq!(recognize("NORTHEAST"), None);
        assert_eq!(recognize("GEOGCS2["), None);
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(recognize("BOGUS["), None);
        assert_eq!(recognize("GEOXCS["), None);
        assert_eq!(recognize("_GEOGCS"), None);
        assert_eq!(recognize(""), None);
    }

    #[test]
    fn test_partial_match_consumes() {
        let mut cursor = Cursor::from_text("GEOX[");
        assert_eq!(read_keyword(&mut cursor), None);
        assert_eq!(cursor.current(), Some('['));
    }

    // ==================== Rendering tests ====================

    #[test]
    fn test_orientation_round_trip() {
        for keyword in WktKeyword::ALL.iter().filter(|k| k.is_direction()) {
            let orientation = keyword.orientation().unwrap();
            assert_eq!(WktKeyword::from(orientation), *keyword);
            assert_eq!(orientation.as_str(), keyword.as_str());
        }
        assert!(!WktKeyword::Unit.is_direction());
    }
}
