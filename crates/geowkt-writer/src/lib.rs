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

//! WKT serialization
//!
//! Writes the domain model of `geowkt-core` back to OGC WKT 1.
//!
//! # Overview
//!
//! - **Round-trip safe**: reading the output yields a value equal to the input
//!   for every finite number and every entity the reader produces
//! - **Compact or pretty**: single-line output, or tab-indented lines for
//!   nested entities
//! - **Name correction**: spaces in parameter and projection names are
//!   written as underscores, matching how the reader undoes them
//!
//! # Examples
//!
//! ```
//! use geowkt_core::parse;
//! use geowkt_writer::{to_wkt, to_wkt_with_config, WriterConfig};
//!
//! let value = parse(r#"PARAM_MT["Affine", PARAMETER["elt_0_0", 2.0]]"#)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(to_wkt(&value).unwrap(), r#"PARAM_MT["Affine",PARAMETER["elt_0_0",2]]"#);
//!
//! let pretty = to_wkt_with_config(&value, &WriterConfig::pretty()).unwrap();
//! assert_eq!(pretty, "PARAM_MT[\"Affine\",\n\tPARAMETER[\"elt_0_0\",2]]");
//! ```

mod config;
mod number;
mod writer;

pub use config::{WriterConfig, WriterConfigBuilder, DEFAULT_MAX_NESTING_DEPTH};
pub use number::format_number;
pub use writer::WktWriter;

use geowkt_core::{WktResult, WktValue};

/// Serialize a value as compact WKT.
pub fn to_wkt(value: &WktValue) -> WktResult<String> {
    writer::to_wkt_string(value, &WriterConfig::default())
}

/// Serialize a value as tab-indented WKT.
pub fn to_wkt_pretty(value: &WktValue) -> WktResult<String> {
    writer::to_wkt_string(value, &WriterConfig::pretty())
}

/// Serialize a value with a custom configuration.
pub fn to_wkt_with_config(value: &WktValue, config: &WriterConfig) -> WktResult<String> {
    writer::to_wkt_string(value, config)
}
