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

//! # GeoWKT - Well-Known Text for coordinate reference systems
//!
//! Reads and writes OGC WKT 1, the bracketed notation used by `.prj` files,
//! spatial databases and most GIS tools to describe coordinate reference
//! systems, datums, units and coordinate operations.
//!
//! ## Quick Start
//!
//! ```rust
//! use geowkt::{parse, to_wkt, Crs, WktValue};
//!
//! let text = r#"PROJCS["WGS 84 / UTM zone 33N",
//!     GEOGCS["WGS 84",
//!         DATUM["WGS_1984", SPHEROID["WGS 84",6378137,298.257223563]],
//!         PRIMEM["Greenwich",0],
//!         UNIT["degree",0.0174532925199433]],
//!     PROJECTION["Transverse_Mercator"],
//!     PARAMETER["central_meridian",15],
//!     PARAMETER["scale_factor",0.9996],
//!     UNIT["metre",1]]"#;
//!
//! let value = parse(text).unwrap().expect("well-formed WKT");
//! let Some(Crs::Projected(utm)) = value.as_crs() else { unreachable!() };
//! assert_eq!(utm.projection.name, "Transverse Mercator");
//!
//! let compact = to_wkt(&value).unwrap();
//! assert!(compact.starts_with(r#"PROJCS["WGS 84 / UTM zone 33N",GEOGCS["WGS 84""#));
//! ```
//!
//! ## Failure model
//!
//! Malformed input is not an error: [`parse`] returns `Ok(None)`. Use
//! [`parse_strict`] to get a [`WktError`] carrying the reason and offset.
//! Errors are always returned for exceeded limits and for `INVERSE_MT` around
//! an operation without an inverse.
//!
//! ## Modules
//!
//! - [`lex`]: keyword recognizer and token readers
//! - [`writer`]: writer configuration and the streaming [`WktWriter`](writer::WktWriter)

pub use geowkt_core::{
    // Functions
    parse,
    parse_with_options,
    // Model
    AuthorityTag,
    Axis,
    AxisOrientation,
    BasicDatum,
    CompoundCrs,
    ConcatenatedOperation,
    CoordinateOperation,
    Crs,
    Datum,
    DatumType,
    FittedCrs,
    GeocentricCrs,
    GeographicCrs,
    Helmert7,
    HorizontalDatum,
    InverseOperation,
    LocalCrs,
    NamedParameter,
    OperationMethod,
    ParameterValue,
    ParameterizedOperation,
    PassThroughOperation,
    PrimeMeridian,
    ProjectedCrs,
    Spheroid,
    Unit,
    UnitKind,
    VerticalCrs,
    WktValue,
    // Errors
    WktError,
    WktErrorKind,
    WktResult,
    // Reader and policy
    AuthorityResolver,
    CrsTable,
    DefaultDialect,
    Dialect,
    Limits,
    NumberCulture,
    ParseOptions,
    ParseOptionsBuilder,
    ReadFailure,
    WktKeyword,
    WktReader,
};

mod error_ext;
pub use error_ext::WktResultExt;

pub mod lex {
    //! Keyword recognizer and token readers
    pub use geowkt_core::lex::primitives::{read_number, read_quoted_string};
    pub use geowkt_core::lex::{read_keyword, Cursor, WktKeyword};
}

pub mod writer {
    //! WKT serialization
    pub use geowkt_writer::{
        format_number, to_wkt, to_wkt_pretty, to_wkt_with_config, WktWriter, WriterConfig,
        WriterConfigBuilder,
    };
}

pub use geowkt_writer::WriterConfig;

use std::io::Read;

/// Parse one entity, reporting malformed input as a `Syntax` error.
///
/// # Examples
///
/// ```rust
/// use geowkt::{parse_strict, WktErrorKind};
///
/// let err = parse_strict(r#"UNIT["metre" 1]"#).unwrap_err();
/// assert_eq!(err.kind, WktErrorKind::Syntax);
/// assert_eq!(err.offset, 13);
/// ```
pub fn parse_strict(input: &str) -> WktResult<WktValue> {
    let options = ParseOptions::builder().strict(true).build();
    parse_strict_with_options(input, &options)
}

/// Strict parse with custom options; `options.strict` is forced on.
pub fn parse_strict_with_options(input: &str, options: &ParseOptions) -> WktResult<WktValue> {
    let strict;
    let options = if options.strict {
        options
    } else {
        strict = ParseOptions {
            strict: true,
            ..options.clone()
        };
        &strict
    };
    parse_with_options(input, options)?
        .ok_or_else(|| WktError::syntax("no entity", 0))
}

/// Parse one entity from a reader.
///
/// At most `options.limits.max_input_size` bytes are read; longer input is a
/// `Security` error. Invalid UTF-8 is an `IO` error.
pub fn parse_reader<R: Read>(reader: R, options: &ParseOptions) -> WktResult<Option<WktValue>> {
    let limit = options.limits.max_input_size;
    let mut bytes = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut bytes)
        .context("while reading WKT input")?;
    if bytes.len() > limit {
        return Err(WktError::security(
            format!("input exceeds limit of {} bytes", limit),
            0,
        ));
    }
    let text = String::from_utf8(bytes)
        .map_err(|e| WktError::io(format!("input is not valid UTF-8: {}", e)))
        .context("while reading WKT input")?;
    parse_with_options(&text, options)
}

/// Serialize a value as compact, single-line WKT.
///
/// # Examples
///
/// ```rust
/// use geowkt::{to_wkt, Axis, AxisOrientation, WktValue};
///
/// let axis = WktValue::Axis(Axis::new("Lat", AxisOrientation::North));
/// assert_eq!(to_wkt(&axis).unwrap(), r#"AXIS["Lat",NORTH]"#);
/// ```
#[inline]
pub fn to_wkt(value: &WktValue) -> WktResult<String> {
    geowkt_writer::to_wkt(value)
}

/// Serialize a value as tab-indented WKT.
#[inline]
pub fn to_wkt_pretty(value: &WktValue) -> WktResult<String> {
    geowkt_writer::to_wkt_pretty(value)
}

/// Serialize a value with a custom writer configuration.
#[inline]
pub fn to_wkt_with_config(value: &WktValue, config: &WriterConfig) -> WktResult<String> {
    geowkt_writer::to_wkt_with_config(value, config)
}

/// Check that `input` is one well-formed WKT entity.
#[inline]
pub fn validate(input: &str) -> WktResult<()> {
    parse_strict(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_and_strict() {
        assert!(parse("GEOGC[\"x\"]").unwrap().is_none());
        let err = parse_strict("GEOGC[\"x\"]").unwrap_err();
        assert_eq!(err.kind, WktErrorKind::Syntax);
        assert_eq!(err.message, "unknown keyword");
    }

    #[test]
    fn test_strict_with_options_keeps_limits() {
        let options = ParseOptions::builder().max_depth(1).build();
        let err = parse_strict_with_options("CONCAT_MT[PARAM_MT[\"a\"]]", &options).unwrap_err();
        assert_eq!(err.kind, WktErrorKind::Security);
    }

    #[test]
    fn test_parse_reader() {
        let input = std::io::Cursor::new(b"AXIS[\"Lat\",NORTH]".to_vec());
        let value = parse_reader(input, &ParseOptions::default()).unwrap().unwrap();
        assert_eq!(value, WktValue::Axis(Axis::new("Lat", AxisOrientation::North)));
    }

    #[test]
    fn test_parse_reader_size_limit() {
        let options = ParseOptions::builder().max_input_size(8).build();
        let input = std::io::Cursor::new(b"AXIS[\"Lat\",NORTH]".to_vec());
        let err = parse_reader(input, &options).unwrap_err();
        assert_eq!(err.kind, WktErrorKind::Security);
    }

    #[test]
    fn test_parse_reader_invalid_utf8() {
        let input = std::io::Cursor::new(vec![b'"', 0xff, 0xfe, b'"']);
        let err = parse_reader(input, &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind, WktErrorKind::IO);
        assert_eq!(err.context.as_deref(), Some("while reading WKT input"));
    }

    #[test]
    fn test_validate() {
        assert!(validate("UNIT[\"metre\",1]").is_ok());
        assert!(validate("UNIT[\"metre\",1").is_err());
    }

    #[test]
    fn test_to_wkt_forms() {
        let value = parse("CONCAT_MT[PARAM_MT[\"A\"],PARAM_MT[\"B\"]]").unwrap().unwrap();
        assert_eq!(to_wkt(&value).unwrap(), "CONCAT_MT[PARAM_MT[\"A\"],PARAM_MT[\"B\"]]");
        assert_eq!(
            to_wkt_pretty(&value).unwrap(),
            "CONCAT_MT[\n\tPARAM_MT[\"A\"],\n\tPARAM_MT[\"B\"]]"
        );
    }
}
