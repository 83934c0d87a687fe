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

//! Core reader and data model for WKT coordinate reference systems.
//!
//! This crate reads OGC WKT 1 (the `GEOGCS[...]`, `PROJCS[...]`, `PARAM_MT[...]`
//! notation) into an immutable domain model.
//!
//! # Structure
//!
//! - [`lex`]: character cursor, keyword recognizer and primitive token readers
//! - [`reader`]: the recursive-descent reader and one builder per keyword
//! - [`model`]: CRSs, datums, units, axes and coordinate operation descriptions
//! - [`Dialect`] and [`AuthorityResolver`]: injected policy for character
//!   classification and canonical-object lookup
//!
//! Serialization lives in `geowkt-writer`.
//!
//! # Examples
//!
//! ```
//! use geowkt_core::{parse, Crs, WktValue};
//!
//! let wkt = r#"GEOGCS["WGS 84",
//!     DATUM["WGS_1984", SPHEROID["WGS 84",6378137,298.257223563]],
//!     PRIMEM["Greenwich",0],
//!     UNIT["degree",0.0174532925199433]]"#;
//! let Some(WktValue::Crs(Crs::Geographic(crs))) = parse(wkt).unwrap() else {
//!     panic!("expected a geographic CRS");
//! };
//! assert_eq!(crs.name, "WGS 84");
//! assert_eq!(crs.datum.prime_meridian.as_ref().unwrap().name, "Greenwich");
//! ```

pub mod dialect;
mod error;
pub mod lex;
mod limits;
pub mod model;
mod options;
pub mod reader;
pub mod resolver;

pub use dialect::{DefaultDialect, Dialect, NumberCulture};
pub use error::{WktError, WktErrorKind, WktResult};
pub use lex::WktKeyword;
pub use limits::Limits;
pub use model::*;
pub use options::{ParseOptions, ParseOptionsBuilder};
pub use reader::{parse, parse_with_options, ReadFailure, WktReader};
pub use resolver::{AuthorityResolver, CrsTable};
